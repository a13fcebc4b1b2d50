//! Camera mutation operations.
//!
//! All mutations work in the camera's own frame: translation slides eye
//! and target together along a basis axis, rotation pivots the view
//! vector (or the up hint) around one, and clip adjustments are clamped
//! so `near <= far` can never break. Every operation derives the basis
//! fresh from the current state — see [`Camera::basis`].

use glam::{Quat, Vec3};

use super::core::{Camera, CameraBasis};
use crate::mesh::topology::Aabb;

/// Camera-local axis selector for translate/rotate operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraAxis {
    /// Screen-right axis.
    Right,
    /// Derived (true) up axis.
    Up,
    /// View axis, pointing from target toward eye.
    Forward,
}

impl CameraBasis {
    /// The basis vector for `axis`.
    #[must_use]
    pub fn vector(&self, axis: CameraAxis) -> Vec3 {
        match axis {
            CameraAxis::Right => self.right,
            CameraAxis::Up => self.up,
            CameraAxis::Forward => self.forward,
        }
    }
}

impl Camera {
    /// Reset to frame the given bounding box: eye centered on the box in
    /// x/y and pulled back along +z proportional to the model's depth,
    /// target at the box's z-center, clip planes bracketing the whole
    /// model with slack on the far side.
    pub fn reset_to_bounds(&mut self, bounds: &Aabb) {
        let center = bounds.center();
        let depth = (bounds.max.z - bounds.min.z).abs();

        // A completely flat model would leave the eye in its own plane
        // (and on top of the target); pull back by the planar extent
        // instead so `eye != target` holds for every loadable mesh.
        let pullback = if depth > 0.0 {
            2.0 * depth
        } else {
            bounds.max_xy_extent().max(1.0)
        };

        self.eye = Vec3::new(center.x, center.y, bounds.max.z + pullback);
        self.target = Vec3::new(center.x, center.y, center.z);
        self.up_hint = Vec3::Y;

        // Near: halfway between the eye and the closest model plane.
        // Far: the whole model plus half again as much slack.
        self.near = (self.eye.z - bounds.max.z) / 2.0;
        self.far = (self.eye.z - bounds.min.z) * 1.5;
    }

    /// Construct a camera framing `bounds` (see [`reset_to_bounds`]).
    ///
    /// [`reset_to_bounds`]: Self::reset_to_bounds
    #[must_use]
    pub fn framing(bounds: &Aabb) -> Self {
        let mut camera = Self {
            eye: Vec3::ZERO,
            target: Vec3::ZERO,
            up_hint: Vec3::Y,
            near: 0.1,
            far: 100.0,
        };
        camera.reset_to_bounds(bounds);
        camera
    }

    /// Slide the camera along one of its own axes.
    ///
    /// Both `eye` and `target` move by `amount * axis`, so the view
    /// direction — and whatever is centered on screen — is preserved.
    /// Moving the eye alone would re-aim the camera as a side effect.
    pub fn translate(&mut self, axis: CameraAxis, amount: f32) {
        let offset = self.basis().vector(axis) * amount;
        self.eye += offset;
        self.target += offset;
    }

    /// Rotate the camera by `angle` radians around one of its own axes.
    ///
    /// The three axes have deliberately distinct behavior:
    ///
    /// - **right** (pitch): the view vector rotates and the up hint
    ///   tilts with it, so repeated pitching rolls over the top rather
    ///   than gimbal-locking against a fixed up.
    /// - **up** (yaw, around the *derived* up): only the view vector
    ///   rotates; the up hint is untouched.
    /// - **forward** (roll): only the up hint rotates; eye and target
    ///   stay put.
    ///
    /// After rotating the view vector it is rescaled back to its
    /// original length, so `|target - eye|` stays exactly constant over
    /// arbitrarily many calls instead of accumulating drift.
    pub fn rotate(&mut self, axis: CameraAxis, angle: f32) {
        let rotation = Quat::from_axis_angle(self.basis().vector(axis), angle);

        match axis {
            CameraAxis::Right => {
                self.rotate_view_vector(rotation);
                self.up_hint = (rotation * self.up_hint).normalize();
            }
            CameraAxis::Up => {
                self.rotate_view_vector(rotation);
            }
            CameraAxis::Forward => {
                self.up_hint = (rotation * self.up_hint).normalize();
            }
        }
    }

    /// Rotate `target - eye` and restore its original length.
    fn rotate_view_vector(&mut self, rotation: Quat) {
        let view = self.target - self.eye;
        let length = view.length();
        let rotated = rotation * view;
        self.target = self.eye + rotated * (length / rotated.length());
    }

    /// Shift the near clip plane by `delta`, clamping so it never
    /// crosses the far plane. Moving away from `far` is unclamped.
    pub fn adjust_near(&mut self, delta: f32) {
        self.near = (self.near + delta).min(self.far);
    }

    /// Shift the far clip plane by `delta`, clamping so it never
    /// crosses the near plane. Moving away from `near` is unclamped.
    pub fn adjust_far(&mut self, delta: f32) {
        self.far = (self.far + delta).max(self.near);
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn test_bounds() -> Aabb {
        let mut bounds = Aabb::EMPTY;
        bounds.enclose(Vec3::new(-1.0, -2.0, -3.0));
        bounds.enclose(Vec3::new(5.0, 4.0, 1.0));
        bounds
    }

    fn assert_vec3_eq(a: Vec3, b: Vec3, epsilon: f32) {
        assert_relative_eq!(a.x, b.x, epsilon = epsilon);
        assert_relative_eq!(a.y, b.y, epsilon = epsilon);
        assert_relative_eq!(a.z, b.z, epsilon = epsilon);
    }

    #[test]
    fn reset_frames_the_bounds() {
        let camera = Camera::framing(&test_bounds());
        // depth extent = 4, so the eye sits at max.z + 8
        assert_eq!(camera.eye, Vec3::new(2.0, 1.0, 9.0));
        assert_eq!(camera.target, Vec3::new(2.0, 1.0, -1.0));
        assert_eq!(camera.up_hint, Vec3::Y);
        assert_eq!(camera.near, 4.0);
        assert_eq!(camera.far, 18.0);
    }

    #[test]
    fn reset_places_model_inside_clip_range() {
        let bounds = test_bounds();
        let camera = Camera::framing(&bounds);
        assert!(camera.near <= camera.far);
        // View depth of the closest and farthest model planes.
        let closest = camera.eye.z - bounds.max.z;
        let farthest = camera.eye.z - bounds.min.z;
        assert!(camera.near <= closest);
        assert!(farthest <= camera.far);
    }

    #[test]
    fn reset_on_flat_bounds_keeps_eye_off_target() {
        let mut bounds = Aabb::EMPTY;
        bounds.enclose(Vec3::new(0.0, 0.0, 0.0));
        bounds.enclose(Vec3::new(1.0, 1.0, 0.0));
        let camera = Camera::framing(&bounds);
        assert!((camera.eye - camera.target).length() > 0.0);
        assert!(camera.near > 0.0);
        assert!(camera.near <= camera.far);
    }

    #[test]
    fn translation_moves_eye_and_target_together() {
        let mut camera = Camera::framing(&test_bounds());
        let view_before = camera.target - camera.eye;

        camera.translate(CameraAxis::Right, 2.5);
        camera.translate(CameraAxis::Up, -1.0);

        let view_after = camera.target - camera.eye;
        assert_vec3_eq(view_before, view_after, 1e-6);
    }

    #[test]
    fn opposing_translations_cancel() {
        let mut camera = Camera::framing(&test_bounds());
        let eye = camera.eye;
        let target = camera.target;

        for axis in [CameraAxis::Right, CameraAxis::Up, CameraAxis::Forward] {
            camera.translate(axis, 0.7);
            camera.translate(axis, 0.3);
            camera.translate(axis, -1.0);
        }

        assert_vec3_eq(camera.eye, eye, 1e-5);
        assert_vec3_eq(camera.target, target, 1e-5);
    }

    #[test]
    fn rotation_preserves_view_distance() {
        let mut camera = Camera::framing(&test_bounds());
        let distance = (camera.target - camera.eye).length();

        for i in 0..500 {
            let axis = if i % 2 == 0 {
                CameraAxis::Right
            } else {
                CameraAxis::Up
            };
            camera.rotate(axis, 0.013);
        }

        let after = (camera.target - camera.eye).length();
        assert_relative_eq!(after, distance, epsilon = 1e-3);
    }

    #[test]
    fn pitch_tilts_the_up_hint() {
        let mut camera = Camera::framing(&test_bounds());
        camera.rotate(CameraAxis::Right, std::f32::consts::FRAC_PI_4);
        // Up hint rotated with the pitch and stays unit length.
        assert!(camera.up_hint.z > 0.1);
        assert_relative_eq!(camera.up_hint.length(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn yaw_leaves_up_hint_untouched() {
        let mut camera = Camera::framing(&test_bounds());
        camera.rotate(CameraAxis::Up, 0.9);
        assert_eq!(camera.up_hint, Vec3::Y);
    }

    #[test]
    fn roll_moves_only_the_up_hint() {
        let mut camera = Camera::framing(&test_bounds());
        let eye = camera.eye;
        let target = camera.target;

        camera.rotate(CameraAxis::Forward, 1.2);

        assert_eq!(camera.eye, eye);
        assert_eq!(camera.target, target);
        assert!(camera.up_hint != Vec3::Y);
        assert_relative_eq!(camera.up_hint.length(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn eye_never_reaches_target() {
        let mut camera = Camera::framing(&test_bounds());
        for _ in 0..100 {
            camera.rotate(CameraAxis::Right, 0.3);
            camera.rotate(CameraAxis::Up, -0.7);
            camera.translate(CameraAxis::Forward, -0.5);
            camera.translate(CameraAxis::Forward, 0.5);
        }
        assert!((camera.target - camera.eye).length() > 1.0);
    }

    #[test]
    fn near_clamps_against_far() {
        let mut camera = Camera::framing(&test_bounds());
        camera.adjust_near(1e6);
        assert_eq!(camera.near, camera.far);
        // Decreasing near again is free-form.
        camera.adjust_near(-3.0);
        assert_eq!(camera.near, camera.far - 3.0);
    }

    #[test]
    fn far_clamps_against_near() {
        let mut camera = Camera::framing(&test_bounds());
        camera.adjust_far(-1e6);
        assert_eq!(camera.far, camera.near);
        camera.adjust_far(5.0);
        assert_eq!(camera.far, camera.near + 5.0);
    }

    #[test]
    fn clip_invariant_holds_over_random_walk() {
        let mut camera = Camera::framing(&test_bounds());
        // Deterministic pseudo-random walk over both planes.
        let mut state = 0x2545_f491u32;
        for _ in 0..1000 {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            let delta = (f64::from(state) / f64::from(u32::MAX)) as f32 * 6.0
                - 3.0;
            if state & 1 == 0 {
                camera.adjust_near(delta);
            } else {
                camera.adjust_far(delta);
            }
            assert!(camera.near <= camera.far);
        }
    }
}

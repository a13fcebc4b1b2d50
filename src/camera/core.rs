use glam::{Mat4, Vec3, Vec4};

/// Look-at camera defined by eye position, target point, up hint, and
/// clip distances.
///
/// `eye != target` is an invariant; the mutation operations in
/// [`rig`](super::rig) preserve it (translation moves both points
/// together, rotation rescales the view vector to its prior length).
/// `up_hint` only needs to be *roughly* up — the derived basis
/// orthonormalizes it against the view direction.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Camera position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Approximate up direction; not necessarily orthogonal to the view.
    pub up_hint: Vec3,
    /// Near clipping plane distance along the view direction.
    pub near: f32,
    /// Far clipping plane distance along the view direction.
    pub far: f32,
}

/// Right-handed orthonormal frame derived from the camera state.
///
/// `forward` points from the target toward the eye (the view axis seen
/// from the camera's side), matching the classic look-at convention
/// where the camera looks down its negative forward axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraBasis {
    /// Camera-local +x (screen right).
    pub right: Vec3,
    /// Camera-local +y (screen up; the *true* up, not the hint).
    pub up: Vec3,
    /// Camera-local +z (from target toward eye).
    pub forward: Vec3,
}

impl Camera {
    /// Derive the orthonormal basis from the current state.
    ///
    /// Recomputed on every call by design: any mutation of `eye`,
    /// `target`, or `up_hint` invalidates the frame, and recomputing is
    /// cheaper than tracking staleness.
    #[must_use]
    pub fn basis(&self) -> CameraBasis {
        let forward = (self.eye - self.target).normalize();
        let right = self.up_hint.cross(forward).normalize();
        let up = forward.cross(right);
        CameraBasis { right, up, forward }
    }

    /// Build the world-to-camera view matrix.
    ///
    /// The rotation part holds the basis vectors as rows; the
    /// translation part is the negated eye projected onto each basis
    /// vector. Equivalent to `glam::Mat4::look_at_rh` (covered by a
    /// test below), but assembled from the same basis the rest of the
    /// camera logic uses.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        let CameraBasis { right, up, forward } = self.basis();
        let origin = -self.eye;
        Mat4::from_cols(
            Vec4::new(right.x, up.x, forward.x, 0.0),
            Vec4::new(right.y, up.y, forward.y, 0.0),
            Vec4::new(right.z, up.z, forward.z, 0.0),
            Vec4::new(
                origin.dot(right),
                origin.dot(up),
                origin.dot(forward),
                1.0,
            ),
        )
    }

    /// Build the perspective projection matrix for a symmetric square
    /// frustum of the given half-extent at the near plane.
    ///
    /// This is the standard OpenGL-style frustum derivation with
    /// `l = -half_extent, r = half_extent, b = -half_extent,
    /// t = half_extent` and the current clip distances, kept in the
    /// general off-axis form so the columns match the conventional
    /// construction term for term. Depth lands in the GL −1..1 range;
    /// the renderer applies a correction matrix for wgpu's 0..1 range.
    #[must_use]
    pub fn projection_matrix(&self, half_extent: f32) -> Mat4 {
        let (l, r) = (-half_extent, half_extent);
        let (b, t) = (-half_extent, half_extent);
        let (n, f) = (self.near, self.far);

        Mat4::from_cols(
            Vec4::new(2.0 * n / (r - l), 0.0, 0.0, 0.0),
            Vec4::new(0.0, 2.0 * n / (t - b), 0.0, 0.0),
            Vec4::new(
                (r + l) / (r - l),
                (t + b) / (t - b),
                -(f + n) / (f - n),
                -1.0,
            ),
            Vec4::new(0.0, 0.0, -2.0 * f * n / (f - n), 0.0),
        )
    }
}

/// GPU uniform holding one camera path's matrices and position.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    /// Combined projection × view matrix (wgpu depth range).
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position (w unused).
    pub eye: [f32; 4],
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            eye: [0.0; 4],
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn test_camera() -> Camera {
        Camera {
            eye: Vec3::new(1.0, 2.0, 8.0),
            target: Vec3::new(1.0, 2.0, 3.0),
            up_hint: Vec3::Y,
            near: 1.0,
            far: 3.0,
        }
    }

    fn assert_mat4_eq(a: Mat4, b: Mat4, epsilon: f32) {
        let (a, b) = (a.to_cols_array(), b.to_cols_array());
        for (x, y) in a.iter().zip(b.iter()) {
            assert_relative_eq!(*x, *y, epsilon = epsilon);
        }
    }

    #[test]
    fn basis_is_right_handed_and_orthonormal() {
        let camera = Camera {
            eye: Vec3::new(3.0, 1.0, 5.0),
            target: Vec3::new(0.0, 0.0, 0.0),
            // Deliberately non-orthogonal, non-unit hint.
            up_hint: Vec3::new(0.3, 2.0, 0.1),
            near: 0.1,
            far: 10.0,
        };
        let basis = camera.basis();
        assert_relative_eq!(basis.right.length(), 1.0, epsilon = 1e-6);
        assert_relative_eq!(basis.up.length(), 1.0, epsilon = 1e-6);
        assert_relative_eq!(basis.forward.length(), 1.0, epsilon = 1e-6);
        assert_relative_eq!(basis.right.dot(basis.up), 0.0, epsilon = 1e-6);
        assert_relative_eq!(basis.up.dot(basis.forward), 0.0, epsilon = 1e-6);
        // right × up = forward for a right-handed frame
        let cross = basis.right.cross(basis.up);
        assert_relative_eq!(cross.x, basis.forward.x, epsilon = 1e-6);
        assert_relative_eq!(cross.y, basis.forward.y, epsilon = 1e-6);
        assert_relative_eq!(cross.z, basis.forward.z, epsilon = 1e-6);
    }

    #[test]
    fn view_matrix_matches_look_at() {
        let camera = test_camera();
        let reference =
            Mat4::look_at_rh(camera.eye, camera.target, camera.up_hint);
        assert_mat4_eq(camera.view_matrix(), reference, 1e-6);
    }

    #[test]
    fn view_matrix_maps_eye_to_origin_and_target_down_negative_z() {
        let camera = test_camera();
        let view = camera.view_matrix();

        let eye_cam = view * camera.eye.extend(1.0);
        assert_relative_eq!(eye_cam.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(eye_cam.y, 0.0, epsilon = 1e-5);
        assert_relative_eq!(eye_cam.z, 0.0, epsilon = 1e-5);

        let target_cam = view * camera.target.extend(1.0);
        assert_relative_eq!(target_cam.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(target_cam.y, 0.0, epsilon = 1e-5);
        assert_relative_eq!(target_cam.z, -5.0, epsilon = 1e-5);
    }

    #[test]
    fn projection_matches_conventional_frustum() {
        // half_extent 2, near 1, far 3:
        // 2n/(r-l) = 0.5, -(f+n)/(f-n) = -2, -2fn/(f-n) = -3
        let camera = test_camera();
        let expected = Mat4::from_cols(
            Vec4::new(0.5, 0.0, 0.0, 0.0),
            Vec4::new(0.0, 0.5, 0.0, 0.0),
            Vec4::new(0.0, 0.0, -2.0, -1.0),
            Vec4::new(0.0, 0.0, -3.0, 0.0),
        );
        assert_eq!(camera.projection_matrix(2.0), expected);
    }

    #[test]
    fn projection_matches_glam_symmetric_perspective() {
        let camera = test_camera();
        let half_extent = 2.0;
        // A symmetric frustum is a perspective projection with
        // fovy = 2·atan(half_extent / near) and aspect 1.
        let fovy = 2.0 * (half_extent / camera.near).atan();
        let reference =
            Mat4::perspective_rh_gl(fovy, 1.0, camera.near, camera.far);
        assert_mat4_eq(camera.projection_matrix(half_extent), reference, 1e-6);
    }

    #[test]
    fn projection_is_pure() {
        let camera = test_camera();
        assert_eq!(
            camera.projection_matrix(1.5),
            camera.projection_matrix(1.5)
        );
    }
}

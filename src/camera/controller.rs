use glam::{Mat4, Vec4};
use wgpu::util::DeviceExt;

use super::core::{Camera, CameraUniform};

/// Maps GL clip-space depth (−1..1) onto wgpu's 0..1 range.
///
/// The camera synthesizes GL-convention matrices (so they stay directly
/// comparable to the classic fixed-function derivation); this correction
/// is applied once when filling the uniform.
fn gl_to_wgpu_depth() -> Mat4 {
    Mat4::from_cols(
        Vec4::new(1.0, 0.0, 0.0, 0.0),
        Vec4::new(0.0, 1.0, 0.0, 0.0),
        Vec4::new(0.0, 0.0, 0.5, 0.0),
        Vec4::new(0.0, 0.0, 0.5, 1.0),
    )
}

/// Owns the camera and the GPU resources for both rendering paths.
///
/// Two uniform buffers are maintained from the same camera state: the
/// *direct* path uses the matrices synthesized by [`Camera`] itself,
/// while the *reference* path rebuilds them through glam's `look_at_rh`
/// and a symmetric perspective. The viewer draws one viewport half with
/// each, so any divergence between the hand-built math and the library
/// construction is immediately visible on screen.
pub struct CameraController {
    /// The camera state all matrices derive from.
    pub camera: Camera,

    direct_uniform: CameraUniform,
    reference_uniform: CameraUniform,

    direct_buffer: wgpu::Buffer,
    reference_buffer: wgpu::Buffer,

    /// Bind group layout shared by both camera paths.
    pub layout: wgpu::BindGroupLayout,
    /// Bind group for the direct (hand-built matrix) path.
    pub direct_bind_group: wgpu::BindGroup,
    /// Bind group for the glam reference path.
    pub reference_bind_group: wgpu::BindGroup,
}

impl CameraController {
    /// Create the controller and its GPU resources for `camera`.
    #[must_use]
    pub fn new(device: &wgpu::Device, camera: Camera) -> Self {
        let direct_uniform = CameraUniform::default();
        let reference_uniform = CameraUniform::default();

        let direct_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Camera Buffer (direct)"),
                contents: bytemuck::cast_slice(&[direct_uniform]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            });
        let reference_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Camera Buffer (reference)"),
                contents: bytemuck::cast_slice(&[reference_uniform]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            });

        let layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Camera Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX
                        | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let direct_bind_group =
            device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("Camera Bind Group (direct)"),
                layout: &layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: direct_buffer.as_entire_binding(),
                }],
            });
        let reference_bind_group =
            device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("Camera Bind Group (reference)"),
                layout: &layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: reference_buffer.as_entire_binding(),
                }],
            });

        Self {
            camera,
            direct_uniform,
            reference_uniform,
            direct_buffer,
            reference_buffer,
            layout,
            direct_bind_group,
            reference_bind_group,
        }
    }

    /// Recompute both uniforms from the current camera state and upload
    /// them. Called once per frame — matrices are never cached across
    /// camera mutations.
    pub fn update_gpu(&mut self, queue: &wgpu::Queue, half_extent: f32) {
        let depth = gl_to_wgpu_depth();

        let direct = depth
            * self.camera.projection_matrix(half_extent)
            * self.camera.view_matrix();
        self.direct_uniform.view_proj = direct.to_cols_array_2d();
        self.direct_uniform.eye = self.camera.eye.extend(1.0).to_array();

        let reference =
            depth * reference_view_proj(&self.camera, half_extent);
        self.reference_uniform.view_proj = reference.to_cols_array_2d();
        self.reference_uniform.eye = self.camera.eye.extend(1.0).to_array();

        queue.write_buffer(
            &self.direct_buffer,
            0,
            bytemuck::cast_slice(&[self.direct_uniform]),
        );
        queue.write_buffer(
            &self.reference_buffer,
            0,
            bytemuck::cast_slice(&[self.reference_uniform]),
        );
    }
}

/// Build the reference view-projection through glam: `look_at_rh` plus
/// a symmetric perspective with the equivalent field of view.
fn reference_view_proj(camera: &Camera, half_extent: f32) -> Mat4 {
    let view = Mat4::look_at_rh(camera.eye, camera.target, camera.up_hint);
    let fovy = 2.0 * (half_extent / camera.near).atan();
    let proj =
        Mat4::perspective_rh_gl(fovy, 1.0, camera.near, camera.far);
    proj * view
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use glam::Vec3;

    use super::*;

    #[test]
    fn direct_and_reference_paths_agree() {
        let camera = Camera {
            eye: Vec3::new(0.5, 2.0, 9.0),
            target: Vec3::new(0.5, 2.0, 1.0),
            up_hint: Vec3::Y,
            near: 2.0,
            far: 14.0,
        };
        let half_extent = 1.25;

        let direct = camera.projection_matrix(half_extent)
            * camera.view_matrix();
        let reference = reference_view_proj(&camera, half_extent);

        let (direct, reference) =
            (direct.to_cols_array(), reference.to_cols_array());
        for (a, b) in direct.iter().zip(reference.iter()) {
            assert_relative_eq!(*a, *b, epsilon = 1e-5);
        }
    }

    #[test]
    fn depth_correction_remaps_clip_range() {
        let correction = gl_to_wgpu_depth();
        // GL near plane (z = -w) maps to wgpu 0, far plane (z = w) to w.
        let near = correction * Vec4::new(0.0, 0.0, -1.0, 1.0);
        let far = correction * Vec4::new(0.0, 0.0, 1.0, 1.0);
        assert_relative_eq!(near.z, 0.0);
        assert_relative_eq!(far.z, 1.0);
    }
}

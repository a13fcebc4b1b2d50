//! Triangle-mesh rendering through two parallel camera paths.
//!
//! One set of buffers and pipelines serves both halves of the window:
//! the left half is drawn with the camera's hand-built matrices, the
//! right half with glam's reference construction. Rasterization mode
//! (solid / wireframe / points) selects between pipelines that differ
//! only in primitive state.

use wgpu::util::DeviceExt;

use crate::camera::CameraController;
use crate::gpu::render_context::RenderContext;
use crate::gpu::texture::DepthTexture;
use crate::mesh::normals::MeshNormals;
use crate::mesh::topology::MeshTopology;
use crate::options::{DisplayOptions, PolygonMode, ShadingMode};

/// Per-vertex data: position and smooth normal.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct MeshVertex {
    position: [f32; 3],
    normal: [f32; 3],
}

/// Vertex buffer layout matching [`MeshVertex`].
fn vertex_buffer_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: size_of::<MeshVertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 0,
            },
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 12,
                shader_location: 1,
            },
        ],
    }
}

/// GPU uniform for lighting/shading state.
///
/// `modes` packs the lighting mode (x) and the flat-shading flag (y);
/// the remaining lanes pad the struct to 16-byte alignment.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
struct ShadeUniform {
    light_color: [f32; 4],
    modes: [u32; 4],
}

impl ShadeUniform {
    fn from_display(display: &DisplayOptions) -> Self {
        let [r, g, b] = display.light_color;
        Self {
            light_color: [r, g, b, 1.0],
            modes: [
                display.lighting.as_u32(),
                u32::from(display.shading == ShadingMode::Flat),
                0,
                0,
            ],
        }
    }
}

/// Uploaded mesh geometry.
struct MeshBuffers {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
}

/// Renders the current mesh with per-vertex smooth-shaded lighting.
pub struct MeshRenderer {
    solid_pipeline: wgpu::RenderPipeline,
    wireframe_pipeline: Option<wgpu::RenderPipeline>,
    points_pipeline: wgpu::RenderPipeline,

    shade_uniform: ShadeUniform,
    shade_buffer: wgpu::Buffer,
    shade_bind_group: wgpu::BindGroup,

    depth: DepthTexture,
    buffers: Option<MeshBuffers>,
}

impl MeshRenderer {
    /// Create the renderer and its pipelines. Mesh geometry is uploaded
    /// separately via [`upload_mesh`](Self::upload_mesh).
    #[must_use]
    pub fn new(
        context: &RenderContext,
        camera_layout: &wgpu::BindGroupLayout,
    ) -> Self {
        let device = &context.device;

        let shader =
            device.create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some("Mesh Shader"),
                source: wgpu::ShaderSource::Wgsl(
                    include_str!("../../assets/shaders/mesh.wgsl").into(),
                ),
            });

        let shade_uniform = ShadeUniform::from_display(&DisplayOptions::default());
        let shade_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Shade Buffer"),
                contents: bytemuck::cast_slice(&[shade_uniform]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            });

        let shade_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Shade Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });
        let shade_bind_group =
            device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("Shade Bind Group"),
                layout: &shade_layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: shade_buffer.as_entire_binding(),
                }],
            });

        let pipeline_layout = device.create_pipeline_layout(
            &wgpu::PipelineLayoutDescriptor {
                label: Some("Mesh Pipeline Layout"),
                bind_group_layouts: &[camera_layout, &shade_layout],
                push_constant_ranges: &[],
            },
        );

        let solid_pipeline = create_mesh_pipeline(
            context,
            &shader,
            &pipeline_layout,
            "Solid",
            wgpu::PrimitiveState {
                cull_mode: Some(wgpu::Face::Back),
                ..Default::default()
            },
        );

        let wireframe_pipeline = context.supports_wireframe().then(|| {
            create_mesh_pipeline(
                context,
                &shader,
                &pipeline_layout,
                "Wireframe",
                wgpu::PrimitiveState {
                    polygon_mode: wgpu::PolygonMode::Line,
                    cull_mode: Some(wgpu::Face::Back),
                    ..Default::default()
                },
            )
        });
        if wireframe_pipeline.is_none() {
            log::warn!(
                "adapter lacks POLYGON_MODE_LINE; wireframe falls back to solid"
            );
        }

        let points_pipeline = create_mesh_pipeline(
            context,
            &shader,
            &pipeline_layout,
            "Points",
            wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::PointList,
                ..Default::default()
            },
        );

        let depth = DepthTexture::new(
            device,
            context.config.width,
            context.config.height,
        );

        Self {
            solid_pipeline,
            wireframe_pipeline,
            points_pipeline,
            shade_uniform,
            shade_buffer,
            shade_bind_group,
            depth,
            buffers: None,
        }
    }

    /// Upload mesh geometry, interleaving positions with the
    /// synthesized vertex normals. Replaces any previous mesh.
    pub fn upload_mesh(
        &mut self,
        device: &wgpu::Device,
        topology: &MeshTopology,
        normals: &MeshNormals,
    ) {
        let vertices: Vec<MeshVertex> = topology
            .positions
            .iter()
            .zip(&normals.vertex_normals)
            .map(|(&p, &n)| MeshVertex {
                position: p.to_array(),
                normal: n.to_array(),
            })
            .collect();
        let indices: Vec<u32> =
            topology.faces.iter().flatten().copied().collect();

        let vertex_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Mesh Vertex Buffer"),
                contents: bytemuck::cast_slice(&vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });
        let index_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Mesh Index Buffer"),
                contents: bytemuck::cast_slice(&indices),
                usage: wgpu::BufferUsages::INDEX,
            });

        self.buffers = Some(MeshBuffers {
            vertex_buffer,
            index_buffer,
            index_count: indices.len() as u32,
        });
    }

    /// Refresh the shading uniform from the current display options.
    pub fn update_shading(
        &mut self,
        queue: &wgpu::Queue,
        display: &DisplayOptions,
    ) {
        let uniform = ShadeUniform::from_display(display);
        if uniform != self.shade_uniform {
            self.shade_uniform = uniform;
            queue.write_buffer(
                &self.shade_buffer,
                0,
                bytemuck::cast_slice(&[uniform]),
            );
        }
    }

    /// Recreate the depth buffer to match the surface size.
    pub fn resize(&mut self, context: &RenderContext) {
        self.depth = DepthTexture::new(
            &context.device,
            context.config.width,
            context.config.height,
        );
    }

    /// Record one frame: clear, then draw the mesh into the left half
    /// with the direct camera path and into the right half with the
    /// reference path.
    pub fn draw(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        camera: &CameraController,
        surface_size: (u32, u32),
        mode: PolygonMode,
    ) {
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Mesh Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color {
                        r: 0.02,
                        g: 0.02,
                        b: 0.03,
                        a: 1.0,
                    }),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: Some(
                wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                },
            ),
            ..Default::default()
        });

        let Some(buffers) = &self.buffers else {
            return;
        };

        let pipeline = match mode {
            PolygonMode::Solid => &self.solid_pipeline,
            PolygonMode::Wireframe => self
                .wireframe_pipeline
                .as_ref()
                .unwrap_or(&self.solid_pipeline),
            PolygonMode::Points => &self.points_pipeline,
        };

        pass.set_pipeline(pipeline);
        pass.set_bind_group(1, &self.shade_bind_group, &[]);
        pass.set_vertex_buffer(0, buffers.vertex_buffer.slice(..));
        pass.set_index_buffer(
            buffers.index_buffer.slice(..),
            wgpu::IndexFormat::Uint32,
        );

        let (width, height) = surface_size;
        let half = width / 2;

        // Left half: matrices synthesized by the camera itself.
        pass.set_viewport(0.0, 0.0, half as f32, height as f32, 0.0, 1.0);
        pass.set_bind_group(0, &camera.direct_bind_group, &[]);
        pass.draw_indexed(0..buffers.index_count, 0, 0..1);

        // Right half: glam's reference construction of the same camera.
        pass.set_viewport(
            half as f32,
            0.0,
            (width - half) as f32,
            height as f32,
            0.0,
            1.0,
        );
        pass.set_bind_group(0, &camera.reference_bind_group, &[]);
        pass.draw_indexed(0..buffers.index_count, 0, 0..1);
    }
}

/// Build one mesh pipeline variant; the variants differ only in
/// primitive state.
fn create_mesh_pipeline(
    context: &RenderContext,
    shader: &wgpu::ShaderModule,
    layout: &wgpu::PipelineLayout,
    label: &str,
    primitive: wgpu::PrimitiveState,
) -> wgpu::RenderPipeline {
    context
        .device
        .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(&format!("Mesh Pipeline ({label})")),
            layout: Some(layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some("vs_main"),
                buffers: &[vertex_buffer_layout()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: context.format(),
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive,
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DepthTexture::FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        })
}

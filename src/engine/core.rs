//! Engine construction, command execution, and frame orchestration.

use std::path::Path;

use crate::camera::{Camera, CameraAxis, CameraController};
use crate::engine::command::{ColorChannel, ViewerCommand};
use crate::error::ViewerError;
use crate::gpu::render_context::RenderContext;
use crate::input::InputProcessor;
use crate::mesh::loader::load_mesh;
use crate::mesh::normals::MeshNormals;
use crate::mesh::topology::MeshTopology;
use crate::options::Options;
use crate::renderer::MeshRenderer;

/// The symmetric frustum half-extent is this fraction of the model's
/// larger x/y extent.
const FRUSTUM_EXTENT_FACTOR: f32 = 0.25;

/// Owns everything behind the viewer window: GPU context, camera, mesh
/// data, renderer, input state, and options.
///
/// The engine is single-threaded by design — commands arrive from the
/// event loop, mutate state in place, and the next
/// [`render`](Self::render) call picks the changes up. Nothing here
/// locks or caches derived camera state.
pub struct ViewerEngine {
    pub(crate) context: RenderContext,
    pub(crate) camera: CameraController,
    pub(crate) renderer: MeshRenderer,
    pub(crate) input: InputProcessor,
    pub(crate) options: Options,
    topology: MeshTopology,
    normals: MeshNormals,
    model_path: String,
    half_extent: f32,
    exit_requested: bool,
}

impl ViewerEngine {
    /// Create an engine rendering to `window`, with the mesh at `path`
    /// loaded and framed.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError`] if GPU initialization or the initial
    /// mesh load fails.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        size: (u32, u32),
        path: &str,
        options: Options,
    ) -> Result<Self, ViewerError> {
        let context = RenderContext::new(window, size).await?;

        let topology = load_mesh(Path::new(path))?;
        let normals = MeshNormals::synthesize(&topology);
        let half_extent =
            topology.bounds.max_xy_extent() * FRUSTUM_EXTENT_FACTOR;

        let camera = CameraController::new(
            &context.device,
            Camera::framing(&topology.bounds),
        );

        let mut renderer = MeshRenderer::new(&context, &camera.layout);
        renderer.upload_mesh(&context.device, &topology, &normals);

        Ok(Self {
            context,
            camera,
            renderer,
            input: InputProcessor::new(),
            options,
            topology,
            normals,
            model_path: path.to_owned(),
            half_extent,
            exit_requested: false,
        })
    }

    /// The current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Replace the options wholesale.
    pub fn set_options(&mut self, mut options: Options) {
        options.keybindings.rebuild_reverse_map();
        self.options = options;
    }

    /// The currently loaded mesh topology.
    #[must_use]
    pub fn topology(&self) -> &MeshTopology {
        &self.topology
    }

    /// The shading data synthesized for the current mesh.
    #[must_use]
    pub fn normals(&self) -> &MeshNormals {
        &self.normals
    }

    /// Whether a [`ViewerCommand::Quit`] has been executed.
    #[must_use]
    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    /// Execute one command against the engine state.
    pub fn execute(&mut self, command: ViewerCommand) {
        let controls = self.options.controls;
        match command {
            ViewerCommand::TranslateCamera { axis, positive } => {
                let amount = if positive {
                    controls.translate_speed
                } else {
                    -controls.translate_speed
                };
                self.camera.camera.translate(axis, amount);
            }
            ViewerCommand::RotateCamera { delta } => {
                // Horizontal drag yaws around the derived up axis,
                // vertical drag pitches around the right axis.
                self.camera
                    .camera
                    .rotate(CameraAxis::Up, -delta.x * controls.rotate_speed);
                self.camera.camera.rotate(
                    CameraAxis::Right,
                    -delta.y * controls.rotate_speed,
                );
            }
            ViewerCommand::RollCamera { counter_clockwise } => {
                let angle = if counter_clockwise {
                    controls.rotate_speed
                } else {
                    -controls.rotate_speed
                };
                self.camera.camera.rotate(CameraAxis::Forward, angle);
            }
            ViewerCommand::Zoom { delta } => {
                // Zooming in moves against the forward axis (toward
                // the target); the target slides with the eye so the
                // view direction is unchanged.
                self.camera.camera.translate(
                    CameraAxis::Forward,
                    -delta * controls.translate_speed,
                );
            }
            ViewerCommand::AdjustNearClip { increase } => {
                let delta = if increase {
                    controls.clip_speed
                } else {
                    -controls.clip_speed
                };
                self.camera.camera.adjust_near(delta);
            }
            ViewerCommand::AdjustFarClip { increase } => {
                let delta = if increase {
                    controls.clip_speed
                } else {
                    -controls.clip_speed
                };
                self.camera.camera.adjust_far(delta);
            }
            ViewerCommand::ResetCamera => {
                self.camera.camera.reset_to_bounds(&self.topology.bounds);
            }
            ViewerCommand::StepLightColor { channel, increase } => {
                let step = if increase {
                    controls.color_speed
                } else {
                    -controls.color_speed
                };
                let i = match channel {
                    ColorChannel::Red => 0,
                    ColorChannel::Green => 1,
                    ColorChannel::Blue => 2,
                };
                let color = &mut self.options.display.light_color[i];
                *color = (*color + step).clamp(0.0, 1.0);
            }
            ViewerCommand::CycleLighting => {
                self.options.display.lighting =
                    self.options.display.lighting.cycled();
                log::debug!(
                    "lighting mode: {:?}",
                    self.options.display.lighting
                );
            }
            ViewerCommand::ToggleShading => {
                self.options.display.shading =
                    self.options.display.shading.toggled();
            }
            ViewerCommand::SetPolygonMode(mode) => {
                self.options.display.polygon_mode = mode;
            }
            ViewerCommand::LoadModel { path } => {
                if let Err(e) = self.load_model(&path) {
                    log::error!("failed to load {path}: {e}");
                }
            }
            ViewerCommand::Quit => {
                self.exit_requested = true;
            }
        }
    }

    /// Swap in the mesh at `path`, rebuilding all derived data: bounds,
    /// normals, adjacency, GPU buffers, and the camera framing.
    ///
    /// A request for the already-loaded path is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError`] if the file cannot be read or parsed;
    /// the previous mesh stays loaded in that case.
    pub fn load_model(&mut self, path: &str) -> Result<(), ViewerError> {
        if path == self.model_path {
            log::debug!("ignoring redundant load of {path}");
            return Ok(());
        }

        let topology = load_mesh(Path::new(path))?;
        let normals = MeshNormals::synthesize(&topology);

        self.renderer
            .upload_mesh(&self.context.device, &topology, &normals);
        self.camera.camera.reset_to_bounds(&topology.bounds);
        self.half_extent =
            topology.bounds.max_xy_extent() * FRUSTUM_EXTENT_FACTOR;

        self.topology = topology;
        self.normals = normals;
        self.model_path = path.to_owned();
        Ok(())
    }

    /// Resize the swapchain and depth buffer.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context.resize(width, height);
        self.renderer.resize(&self.context);
    }

    /// Render one frame: refresh both camera uniforms and the shading
    /// uniform, then draw the two viewport halves.
    ///
    /// # Errors
    ///
    /// Returns [`wgpu::SurfaceError`] if the swapchain texture cannot
    /// be acquired; the caller reconfigures the surface on
    /// `Lost`/`Outdated`.
    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        self.camera
            .update_gpu(&self.context.queue, self.half_extent);
        self.renderer
            .update_shading(&self.context.queue, &self.options.display);

        let frame = self.context.get_next_frame()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self.context.create_encoder();
        self.renderer.draw(
            &mut encoder,
            &view,
            &self.camera,
            (self.context.config.width, self.context.config.height),
            self.options.display.polygon_mode,
        );
        self.context.submit(encoder);
        frame.present();
        Ok(())
    }
}

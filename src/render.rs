use crate::constants::{CLEAR_COLOR, LIGHT_DIR};
use crate::debug::DebugView;
use ripple_core::gpu::SceneUniforms;
use ripple_core::{CameraTransform, SurfaceRegistry};
use web_sys as web;

mod helpers;
mod mesh;
mod targets;
use mesh::{GpuMesh, MeshPipeline};
use targets::RenderTargets;

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    targets: RenderTargets,
    mesh_pipeline: MeshPipeline,
    scene_buffer: wgpu::Buffer,
    scene_bind_group: wgpu::BindGroup,
    // GPU copies of the registry's surfaces, rebuilt when its generation changes
    meshes: Vec<GpuMesh>,
    uploaded_generation: Option<u64>,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
    debug_view: DebugView,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let targets = RenderTargets::new(&device, width, height);
        let mesh_pipeline = mesh::create_mesh_pipeline(&device, format);
        let (scene_buffer, scene_bind_group) = helpers::uniform_buffer_and_group(
            &device,
            "scene_uniforms",
            &mesh_pipeline.scene_bgl,
            mesh::scene_uniform_size(),
        );
        log::info!("[gpu] ready {}x{} format={:?}", width, height, format);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            targets,
            mesh_pipeline,
            scene_buffer,
            scene_bind_group,
            meshes: Vec::new(),
            uploaded_generation: None,
            width,
            height,
            clear_color: wgpu::Color {
                r: CLEAR_COLOR[0],
                g: CLEAR_COLOR[1],
                b: CLEAR_COLOR[2],
                a: 1.0,
            },
            debug_view: DebugView::default(),
        })
    }

    pub fn set_debug_view(&mut self, view: DebugView) {
        self.debug_view = view;
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.targets.recreate(&self.device, width, height);
        }
    }

    /// Rebuild GPU meshes after the registry swapped in a new asset.
    pub fn sync_surfaces(&mut self, registry: &SurfaceRegistry) {
        if self.uploaded_generation == Some(registry.generation()) {
            return;
        }
        self.meshes = registry
            .entries()
            .iter()
            .filter_map(|e| {
                GpuMesh::new(&self.device, &self.mesh_pipeline.ripple_bgl, &e.surface)
            })
            .collect();
        self.uploaded_generation = Some(registry.generation());
        log::info!(
            "[gpu] uploaded {} meshes (generation {})",
            self.meshes.len(),
            registry.generation()
        );
    }

    pub fn render(
        &mut self,
        registry: &SurfaceRegistry,
        camera: &CameraTransform,
    ) -> Result<(), wgpu::SurfaceError> {
        let scene = SceneUniforms::new(
            camera.view_proj(),
            camera.eye(),
            LIGHT_DIR,
            self.debug_view.shader_index(),
            registry.clock(),
        );
        self.queue
            .write_buffer(&self.scene_buffer, 0, bytemuck::bytes_of(&scene));
        for m in &self.meshes {
            if let Some(sampler) = registry.sampler(m.id) {
                m.write_ripple(&self.queue, &sampler);
            }
        }

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.mesh_pipeline.pipeline);
            rpass.set_bind_group(0, &self.scene_bind_group, &[]);
            for m in &self.meshes {
                rpass.set_bind_group(1, &m.bind_group, &[]);
                rpass.set_vertex_buffer(0, m.vertex_buffer.slice(..));
                rpass.set_index_buffer(m.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..m.index_count, 0, 0..1);
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

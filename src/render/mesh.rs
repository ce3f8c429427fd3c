use super::helpers;
use super::targets::DEPTH_FORMAT;
use ripple_core::gpu::{RippleUniforms, SceneUniforms};
use ripple_core::{FieldSampler, InteractiveSurface, SurfaceId};
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct MeshVertex {
    pub(crate) position: [f32; 3],
    pub(crate) normal: [f32; 3],
    pub(crate) uv: [f32; 2],
}

impl MeshVertex {
    const ATTRS: [wgpu::VertexAttribute; 3] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x2];

    pub(crate) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<MeshVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Interleave a surface's geometry; surfaces without texture coordinates get
/// zero uvs (their ripple runs in world space).
pub(crate) fn build_vertices(surface: &InteractiveSurface) -> Vec<MeshVertex> {
    let g = &surface.geometry;
    let uvs = surface
        .has_parameterization()
        .then(|| g.uvs.as_deref())
        .flatten();
    g.positions
        .iter()
        .enumerate()
        .map(|(i, p)| MeshVertex {
            position: p.to_array(),
            normal: g.normals.get(i).map(|n| n.to_array()).unwrap_or([0.0, 1.0, 0.0]),
            uv: uvs.map(|uv| uv[i].to_array()).unwrap_or([0.0, 0.0]),
        })
        .collect()
}

pub(crate) struct MeshPipeline {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) scene_bgl: wgpu::BindGroupLayout,
    pub(crate) ripple_bgl: wgpu::BindGroupLayout,
}

pub(crate) fn create_mesh_pipeline(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
) -> MeshPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("ripple_shader"),
        source: wgpu::ShaderSource::Wgsl(ripple_core::RIPPLE_WGSL.into()),
    });
    let scene_bgl = helpers::uniform_layout(
        device,
        "scene_bgl",
        wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
    );
    let ripple_bgl = helpers::uniform_layout(device, "ripple_bgl", wgpu::ShaderStages::FRAGMENT);
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("mesh_pl"),
        bind_group_layouts: &[&scene_bgl, &ripple_bgl],
        push_constant_ranges: &[],
    });
    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("mesh_pipeline"),
        layout: Some(&pl),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[MeshVertex::layout()],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        // assets are not guaranteed to be closed or consistently wound
        primitive: wgpu::PrimitiveState {
            cull_mode: None,
            ..Default::default()
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: color_format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    });
    MeshPipeline {
        pipeline,
        scene_bgl,
        ripple_bgl,
    }
}

/// GPU copy of one interactive surface with its own ripple uniforms.
pub(crate) struct GpuMesh {
    pub(crate) id: SurfaceId,
    pub(crate) base_color: [f32; 4],
    pub(crate) vertex_buffer: wgpu::Buffer,
    pub(crate) index_buffer: wgpu::Buffer,
    pub(crate) index_count: u32,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
}

impl GpuMesh {
    /// `None` for surfaces with nothing to draw.
    pub(crate) fn new(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        surface: &InteractiveSurface,
    ) -> Option<Self> {
        let g = &surface.geometry;
        if g.positions.is_empty() || g.indices.len() < 3 {
            return None;
        }
        let vertices = build_vertices(surface);
        let index_count = (g.indices.len() - g.indices.len() % 3) as u32;
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("mesh_vertices"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("mesh_indices"),
            contents: bytemuck::cast_slice(&g.indices[..index_count as usize]),
            usage: wgpu::BufferUsages::INDEX,
        });
        let (uniform_buffer, bind_group) = helpers::uniform_buffer_and_group(
            device,
            "ripple_uniforms",
            layout,
            std::mem::size_of::<RippleUniforms>() as u64,
        );
        Some(Self {
            id: surface.id,
            base_color: surface.base_color,
            vertex_buffer,
            index_buffer,
            index_count,
            uniform_buffer,
            bind_group,
        })
    }

    pub(crate) fn write_ripple(&self, queue: &wgpu::Queue, sampler: &FieldSampler) {
        let u = RippleUniforms::from_sampler(sampler, self.base_color);
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&u));
    }
}

pub(crate) fn scene_uniform_size() -> u64 {
    std::mem::size_of::<SceneUniforms>() as u64
}

use super::helpers;
use crate::constants::{MAX_QUADS, UNIFORM_SLOT_BYTES};
use glam::{Mat4, Vec3, Vec4};
use std::num::NonZeroU64;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct QuadUniforms {
    pub(crate) mvp: [[f32; 4]; 4],
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) tint: [f32; 4],
    pub(crate) light: [f32; 4],
    pub(crate) params: [f32; 4],
}

/// One quad to draw: its transform, tint/opacity and which texture to sample.
pub(crate) struct QuadDraw<'t> {
    pub(crate) model: Mat4,
    /// Linear rgb tint and opacity.
    pub(crate) tint: Vec4,
    pub(crate) lit: bool,
    pub(crate) texture: &'t wgpu::BindGroup,
}

impl QuadDraw<'_> {
    pub(crate) fn uniforms(&self, view_proj: Mat4, light: Vec4, spot_cos: f32) -> QuadUniforms {
        QuadUniforms {
            mvp: (view_proj * self.model).to_cols_array_2d(),
            model: self.model.to_cols_array_2d(),
            tint: self.tint.to_array(),
            light: light.to_array(),
            params: [if self.lit { 1.0 } else { 0.0 }, spot_cos, 0.0, 0.0],
        }
    }

    pub(crate) fn depth(&self) -> f32 {
        self.model.transform_point3(Vec3::ZERO).z
    }
}

pub(crate) struct QuadResources {
    pub(crate) texture_bgl: wgpu::BindGroupLayout,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) uniform_bg: wgpu::BindGroup,
    /// Full-view background: always passes the depth test and writes no depth.
    pub(crate) background_pipeline: wgpu::RenderPipeline,
    /// Alpha-blended planes and sprites, depth tested against the stars.
    pub(crate) blend_pipeline: wgpu::RenderPipeline,
    pub(crate) sampler: wgpu::Sampler,
}

pub(crate) fn create_quad_resources(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
) -> QuadResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("quad_shader"),
        source: wgpu::ShaderSource::Wgsl(parallax_core::QUAD_WGSL.into()),
    });
    let uniform_size = NonZeroU64::new(std::mem::size_of::<QuadUniforms>() as u64);
    let uniform_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("quad_uniform_bgl"),
        entries: &[helpers::uniform_layout_entry(
            0,
            wgpu::ShaderStages::VERTEX_FRAGMENT,
            true,
            uniform_size,
        )],
    });
    let texture_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("quad_texture_bgl"),
        entries: &[
            helpers::texture_layout_entry(0),
            helpers::sampler_layout_entry(1),
        ],
    });
    let uniform_buffer = helpers::create_uniform_buffer(
        device,
        "quad_uniforms",
        UNIFORM_SLOT_BYTES * MAX_QUADS as u64,
    );
    let uniform_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("quad_uniform_bg"),
        layout: &uniform_bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                buffer: &uniform_buffer,
                offset: 0,
                size: uniform_size,
            }),
        }],
    });
    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("quad_pl"),
        bind_group_layouts: &[&uniform_bgl, &texture_bgl],
        push_constant_ranges: &[],
    });

    let make = |label: &str, depth_compare: wgpu::CompareFunction| {
        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(label),
            layout: Some(&layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_quad"),
                buffers: &[],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: Some(wgpu::DepthStencilState {
                format: helpers::DEPTH_FORMAT,
                depth_write_enabled: false,
                depth_compare,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_quad"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: color_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        })
    };
    let background_pipeline = make("quad_background_pipeline", wgpu::CompareFunction::Always);
    let blend_pipeline = make("quad_blend_pipeline", wgpu::CompareFunction::LessEqual);

    QuadResources {
        texture_bgl,
        uniform_buffer,
        uniform_bg,
        background_pipeline,
        blend_pipeline,
        sampler: helpers::create_sampler(
            device,
            "quad_sampler",
            wgpu::FilterMode::Linear,
            wgpu::AddressMode::ClampToEdge,
        ),
    }
}

/// Bind group sampling `view` with the shared quad sampler.
pub(crate) fn texture_bind_group(
    device: &wgpu::Device,
    res: &QuadResources,
    label: &str,
    view: &wgpu::TextureView,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(label),
        layout: &res.texture_bgl,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(&res.sampler),
            },
        ],
    })
}

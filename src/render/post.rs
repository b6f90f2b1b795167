use super::helpers;
use parallax_core::glitch::{displacement_map, GlitchParams};
use parallax_core::constants::GLITCH_DISPLACEMENT_SIZE;
use rand::Rng;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct GlitchUniforms {
    resolution: [f32; 2],
    bypass: f32,
    amount: f32,
    angle: f32,
    seed: f32,
    seed_x: f32,
    seed_y: f32,
    distortion_x: f32,
    distortion_y: f32,
    col_s: f32,
    _pad: f32,
}

impl GlitchUniforms {
    pub(crate) fn new(resolution: [f32; 2], p: &GlitchParams) -> Self {
        Self {
            resolution,
            bypass: if p.bypass { 1.0 } else { 0.0 },
            amount: p.amount,
            angle: p.angle,
            seed: p.seed,
            seed_x: p.seed_x,
            seed_y: p.seed_y,
            distortion_x: p.distortion_x,
            distortion_y: p.distortion_y,
            col_s: p.column_width,
            _pad: 0.0,
        }
    }
}

/// Second pass of the composite: reads the scene target, writes the swapchain.
pub(crate) struct GlitchResources {
    pub(crate) bgl: wgpu::BindGroupLayout,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) scene_sampler: wgpu::Sampler,
    // Kept alive for the bind group
    _disp_tex: wgpu::Texture,
    pub(crate) disp_view: wgpu::TextureView,
    pub(crate) disp_sampler: wgpu::Sampler,
}

pub(crate) fn create_glitch_resources(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    swap_format: wgpu::TextureFormat,
    rng: &mut impl Rng,
) -> GlitchResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("glitch_shader"),
        source: wgpu::ShaderSource::Wgsl(parallax_core::GLITCH_WGSL.into()),
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("glitch_bgl"),
        entries: &[
            helpers::texture_layout_entry(0),
            helpers::sampler_layout_entry(1),
            helpers::texture_layout_entry(2),
            helpers::sampler_layout_entry(3),
            helpers::uniform_layout_entry(4, wgpu::ShaderStages::FRAGMENT, false, None),
        ],
    });
    let uniform_buffer = helpers::create_uniform_buffer(
        device,
        "glitch_uniforms",
        std::mem::size_of::<GlitchUniforms>() as u64,
    );
    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("glitch_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("glitch_pipeline"),
        layout: Some(&layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_fullscreen"),
            buffers: &[],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_glitch"),
            targets: &[Some(wgpu::ColorTargetState {
                format: swap_format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    });

    let size = GLITCH_DISPLACEMENT_SIZE as u32;
    let (disp_tex, disp_view) = helpers::create_rgba_texture(
        device,
        queue,
        "glitch_displacement",
        size,
        size,
        wgpu::TextureFormat::Rgba8Unorm,
        &displacement_map(GLITCH_DISPLACEMENT_SIZE, rng),
    );

    GlitchResources {
        bgl,
        uniform_buffer,
        pipeline,
        scene_sampler: helpers::create_sampler(
            device,
            "scene_sampler",
            wgpu::FilterMode::Linear,
            wgpu::AddressMode::ClampToEdge,
        ),
        _disp_tex: disp_tex,
        disp_view,
        disp_sampler: helpers::create_sampler(
            device,
            "disp_sampler",
            wgpu::FilterMode::Nearest,
            wgpu::AddressMode::Repeat,
        ),
    }
}

/// Bind group over the current scene target; rebuilt whenever targets are recreated.
pub(crate) fn create_glitch_bind_group(
    device: &wgpu::Device,
    res: &GlitchResources,
    scene_view: &wgpu::TextureView,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("glitch_bg"),
        layout: &res.bgl,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(scene_view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(&res.scene_sampler),
            },
            wgpu::BindGroupEntry {
                binding: 2,
                resource: wgpu::BindingResource::TextureView(&res.disp_view),
            },
            wgpu::BindGroupEntry {
                binding: 3,
                resource: wgpu::BindingResource::Sampler(&res.disp_sampler),
            },
            wgpu::BindGroupEntry {
                binding: 4,
                resource: res.uniform_buffer.as_entire_binding(),
            },
        ],
    })
}

pub(crate) fn blit(
    encoder: &mut wgpu::CommandEncoder,
    label: &str,
    target: &wgpu::TextureView,
    pipeline: &wgpu::RenderPipeline,
    bg0: &wgpu::BindGroup,
) {
    let mut r = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some(label),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view: target,
            resolve_target: None,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                store: wgpu::StoreOp::Store,
            },
        })],
        depth_stencil_attachment: None,
        timestamp_writes: None,
        occlusion_query_set: None,
    });
    r.set_pipeline(pipeline);
    r.set_bind_group(0, bg0, &[]);
    r.draw(0..3, 0..1);
    drop(r);
}

use crate::constants::{MAX_QUADS, SPOT_ANGLE, UNIFORM_SLOT_BYTES};
use crate::images::DecodedImage;
use glam::{Mat4, Vec3, Vec4};
use parallax_core::constants::{IMAGE_PLANE_SIZE, STAR_COLOR};
use parallax_core::data::ImageDescriptor;
use parallax_core::glitch::GlitchParams;
use parallax_core::text::TextKey;
use parallax_core::{Rgb, SceneFrame};
use rand::rngs::StdRng;
use smallvec::SmallVec;
use web_sys as web;

mod helpers;
mod post;
mod quads;
mod stars;
mod targets;
mod textures;

use post::{GlitchResources, GlitchUniforms};
use quads::{QuadDraw, QuadResources};
use stars::StarsResources;
use targets::RenderTargets;
use textures::{GpuTexture, TextureCache};

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    // Base scene pass
    targets: RenderTargets,
    quads: QuadResources,
    stars: StarsResources,
    textures: TextureCache,
    star_color: [f32; 4],

    // Glitch pass
    glitch: GlitchResources,
    glitch_bg: wgpu::BindGroup,
    rng: StdRng,

    width: u32,
    height: u32,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        star_coords: &[Vec3],
        mut rng: StdRng,
    ) -> anyhow::Result<Self> {
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
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!("[gpu] surface {}x{} {:?}", width, height, format);

        let targets = RenderTargets::new(&device, width, height, format);
        let quads = quads::create_quad_resources(&device, format);
        let stars = stars::create_stars_resources(&device, format, star_coords);
        let textures = TextureCache::new(&device, &queue, &quads);
        let glitch = post::create_glitch_resources(&device, &queue, format, &mut rng);
        let glitch_bg = post::create_glitch_bind_group(&device, &glitch, &targets.scene_view);

        let star_rgb = Rgb::from_hex(STAR_COLOR)?.to_linear();

        Ok(Self {
            surface,
            device,
            queue,
            config,
            targets,
            quads,
            stars,
            textures,
            star_color: [star_rgb[0], star_rgb[1], star_rgb[2], 1.0],
            glitch,
            glitch_bg,
            rng,
            width,
            height,
        })
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

            // Recreate offscreen targets and the bind group that samples them
            self.targets.recreate(&self.device, width, height);
            self.glitch_bg =
                post::create_glitch_bind_group(&self.device, &self.glitch, &self.targets.scene_view);
            log::info!("[gpu] resized to {}x{}", width, height);
        }
    }

    pub fn upload_image(&mut self, img: DecodedImage) {
        let expected = (img.width * img.height * 4) as usize;
        if img.rgba.len() != expected {
            log::warn!(
                "[texture] {} size mismatch: expected {} bytes, got {}",
                img.url,
                expected,
                img.rgba.len()
            );
            return;
        }
        let tex = GpuTexture::from_rgba(
            &self.device,
            &self.queue,
            &self.quads,
            &img.url,
            img.width,
            img.height,
            &img.rgba,
        );
        self.textures.insert_image(img.url, tex);
    }

    pub fn has_text(&self, slot: usize, key: &TextKey) -> bool {
        self.textures.text(slot, key).is_some()
    }

    pub fn upload_text(&mut self, slot: usize, key: TextKey, size: u32, rgba: &[u8]) {
        let tex = GpuTexture::from_rgba(
            &self.device,
            &self.queue,
            &self.quads,
            key.content,
            size,
            size,
            rgba,
        );
        self.textures.insert_text(slot, key, tex);
    }

    /// Composite render: scene pass into the offscreen target, then the glitch
    /// pass onto the swapchain.
    pub fn render(
        &mut self,
        frame: &SceneFrame,
        images: &[ImageDescriptor],
        text_keys: &[TextKey],
    ) -> Result<(), wgpu::SurfaceError> {
        let surface_tex = self.surface.get_current_texture()?;
        let view = surface_tex
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });

        let view_proj = frame.viewport.camera().view_projection();
        let light = Vec4::new(
            frame.light.position.x,
            frame.light.position.y,
            frame.light.position.z,
            frame.light.intensity,
        );
        let spot_cos = SPOT_ANGLE.cos();

        // Background first, then transparent planes back to front
        let bg = frame.background.to_linear();
        let background = QuadDraw {
            model: Mat4::from_scale(frame.background_size.extend(1.0)),
            tint: Vec4::new(bg[0], bg[1], bg[2], 1.0),
            lit: false,
            texture: &self.textures.white().bind_group,
        };
        let mut blended: SmallVec<[QuadDraw<'_>; 16]> = SmallVec::new();
        for img in &frame.images {
            let texture = images
                .get(img.index)
                .and_then(|d| self.textures.image(d.url))
                .unwrap_or(self.textures.white());
            let side = IMAGE_PLANE_SIZE * img.scale;
            blended.push(QuadDraw {
                model: Mat4::from_scale_rotation_translation(
                    Vec3::new(side, side, 1.0),
                    glam::Quat::IDENTITY,
                    img.position,
                ),
                tint: Vec4::new(1.0, 1.0, 1.0, img.opacity),
                lit: true,
                texture: &texture.bind_group,
            });
        }
        for (slot, text) in frame.texts.iter().enumerate() {
            let Some(texture) = text_keys
                .get(slot)
                .and_then(|k| self.textures.text(slot, k))
            else {
                continue;
            };
            blended.push(QuadDraw {
                model: Mat4::from_scale_rotation_translation(
                    Vec3::new(text.sprite_size, text.sprite_size, 1.0),
                    glam::Quat::IDENTITY,
                    text.position,
                ),
                tint: Vec4::new(1.0, 1.0, 1.0, text.opacity),
                lit: false,
                texture: &texture.bind_group,
            });
        }
        blended.sort_by(|a, b| a.depth().total_cmp(&b.depth()));
        blended.truncate(MAX_QUADS - 1);

        for (i, q) in std::iter::once(&background).chain(blended.iter()).enumerate() {
            let u = q.uniforms(view_proj, light, spot_cos);
            self.queue.write_buffer(
                &self.quads.uniform_buffer,
                i as u64 * UNIFORM_SLOT_BYTES,
                bytemuck::bytes_of(&u),
            );
        }
        self.stars.write_uniforms(
            &self.queue,
            view_proj,
            frame.stars.model_matrix(),
            self.star_color,
        );

        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.scene_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
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

            rpass.set_pipeline(&self.quads.background_pipeline);
            rpass.set_bind_group(0, &self.quads.uniform_bg, &[0]);
            rpass.set_bind_group(1, background.texture, &[]);
            rpass.draw(0..6, 0..1);

            self.stars.draw(&mut rpass);

            rpass.set_pipeline(&self.quads.blend_pipeline);
            for (i, q) in blended.iter().enumerate() {
                let offset = (i as u64 + 1) * UNIFORM_SLOT_BYTES;
                rpass.set_bind_group(0, &self.quads.uniform_bg, &[offset as u32]);
                rpass.set_bind_group(1, q.texture, &[]);
                rpass.draw(0..6, 0..1);
            }
        }

        let params = GlitchParams::sample(frame.glitch_factor, &mut self.rng);
        let u = GlitchUniforms::new([self.width as f32, self.height as f32], &params);
        self.queue
            .write_buffer(&self.glitch.uniform_buffer, 0, bytemuck::bytes_of(&u));
        post::blit(
            &mut encoder,
            "glitch_pass",
            &view,
            &self.glitch.pipeline,
            &self.glitch_bg,
        );

        self.queue.submit(Some(encoder.finish()));
        surface_tex.present();
        Ok(())
    }
}

use super::helpers;

/// Offscreen targets for the base scene pass.
///
/// The glitch pass samples `scene_view`; both textures follow the surface size.
pub(crate) struct RenderTargets {
    pub(crate) scene_tex: wgpu::Texture,
    pub(crate) scene_view: wgpu::TextureView,
    pub(crate) depth_tex: wgpu::Texture,
    pub(crate) depth_view: wgpu::TextureView,
    format: wgpu::TextureFormat,
}

impl RenderTargets {
    pub(crate) fn new(
        device: &wgpu::Device,
        width: u32,
        height: u32,
        format: wgpu::TextureFormat,
    ) -> Self {
        let (scene_tex, scene_view) = create_scene(device, width, height, format);
        let (depth_tex, depth_view) = helpers::create_depth_texture(device, width, height);
        Self {
            scene_tex,
            scene_view,
            depth_tex,
            depth_view,
            format,
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        (self.scene_tex, self.scene_view) = create_scene(device, width, height, self.format);
        (self.depth_tex, self.depth_view) = helpers::create_depth_texture(device, width, height);
    }
}

fn create_scene(
    device: &wgpu::Device,
    width: u32,
    height: u32,
    format: wgpu::TextureFormat,
) -> (wgpu::Texture, wgpu::TextureView) {
    helpers::create_color_texture_device(
        device,
        "scene_tex",
        width.max(1),
        height.max(1),
        format,
        wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
    )
}

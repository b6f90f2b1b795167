use super::helpers;
use super::quads::{texture_bind_group, QuadResources};
use fnv::FnvHashMap;
use parallax_core::text::TextKey;

/// A sampled texture plus the quad bind group that reads it.
pub(crate) struct GpuTexture {
    _texture: wgpu::Texture,
    _view: wgpu::TextureView,
    pub(crate) bind_group: wgpu::BindGroup,
    pub(crate) width: u32,
    pub(crate) height: u32,
}

impl GpuTexture {
    pub(crate) fn from_rgba(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        quads: &QuadResources,
        label: &str,
        width: u32,
        height: u32,
        pixels: &[u8],
    ) -> Self {
        let (texture, view) = helpers::create_rgba_texture(
            device,
            queue,
            label,
            width,
            height,
            wgpu::TextureFormat::Rgba8UnormSrgb,
            pixels,
        );
        let bind_group = texture_bind_group(device, quads, label, &view);
        Self {
            _texture: texture,
            _view: view,
            bind_group,
            width,
            height,
        }
    }
}

/// Image textures keyed by url, text sprites keyed by their layout, and a
/// white fallback used for the background and for images not (yet) loaded.
pub(crate) struct TextureCache {
    images: FnvHashMap<String, GpuTexture>,
    texts: Vec<Option<(TextKey, GpuTexture)>>,
    white: GpuTexture,
}

impl TextureCache {
    pub(crate) fn new(device: &wgpu::Device, queue: &wgpu::Queue, quads: &QuadResources) -> Self {
        let white = GpuTexture::from_rgba(device, queue, quads, "white_tex", 1, 1, &[255; 4]);
        Self {
            images: FnvHashMap::default(),
            texts: Vec::new(),
            white,
        }
    }

    pub(crate) fn white(&self) -> &GpuTexture {
        &self.white
    }

    pub(crate) fn image(&self, url: &str) -> Option<&GpuTexture> {
        self.images.get(url)
    }

    pub(crate) fn insert_image(&mut self, url: String, tex: GpuTexture) {
        log::info!("[texture] {} ready ({}x{})", url, tex.width, tex.height);
        self.images.insert(url, tex);
    }

    pub(crate) fn text(&self, slot: usize, key: &TextKey) -> Option<&GpuTexture> {
        match self.texts.get(slot) {
            Some(Some((k, tex))) if k == key => Some(tex),
            _ => None,
        }
    }

    pub(crate) fn insert_text(&mut self, slot: usize, key: TextKey, tex: GpuTexture) {
        if self.texts.len() <= slot {
            self.texts.resize_with(slot + 1, || None);
        }
        self.texts[slot] = Some((key, tex));
    }
}

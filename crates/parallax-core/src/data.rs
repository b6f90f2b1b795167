//! Static scene content: image placements and text sprites.

/// Placement of one textured plane.
///
/// `depth_factor` scales how strongly the plane reacts to mouse and scroll;
/// larger values drift further and rise faster.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageDescriptor {
    pub url: &'static str,
    pub x: f32,
    pub y: f32,
    pub depth_factor: f32,
    pub z: f32,
    pub scale: f32,
}

const fn image(
    url: &'static str,
    x: f32,
    y: f32,
    depth_factor: f32,
    z: f32,
    scale: f32,
) -> ImageDescriptor {
    ImageDescriptor {
        url,
        x,
        y,
        depth_factor,
        z,
        scale,
    }
}

pub const IMAGES: &[ImageDescriptor] = &[
    image("https://picsum.photos/id/1015/800/800", -4.0, -3.0, 14.0, -2.0, 0.9),
    image("https://picsum.photos/id/1016/800/800", 3.5, -5.0, 18.0, -1.0, 0.7),
    image("https://picsum.photos/id/1018/800/800", -1.0, -9.0, 20.0, 0.0, 1.0),
    image("https://picsum.photos/id/1019/800/800", 4.5, -12.0, 24.0, -3.0, 0.8),
    image("https://picsum.photos/id/1020/800/800", -5.0, -16.0, 26.0, -1.5, 0.6),
    image("https://picsum.photos/id/1021/800/800", 1.5, -19.0, 30.0, -0.5, 1.1),
    image("https://picsum.photos/id/1022/800/800", -3.0, -24.0, 32.0, -2.5, 0.75),
    image("https://picsum.photos/id/1023/800/800", 4.0, -27.0, 36.0, -1.0, 0.9),
    image("https://picsum.photos/id/1024/800/800", -4.5, -31.0, 38.0, -0.5, 0.7),
    image("https://picsum.photos/id/1025/800/800", 0.5, -35.0, 42.0, -2.0, 1.2),
];

/// A text sprite's fixed appearance; its position and opacity are derived per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextDescriptor {
    pub content: &'static str,
    pub color: &'static str,
    pub font_size_px: f32,
}

pub const TITLE: TextDescriptor = TextDescriptor {
    content: "lorem",
    color: "#ffffff",
    font_size_px: 410.0,
};

pub const FOOTER: TextDescriptor = TextDescriptor {
    content: "ipsum",
    color: "#000000",
    font_size_px: 150.0,
};

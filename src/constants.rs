// Web frontend constants: DOM wiring and GPU resource limits.

// Element ids from index.html
pub const CANVAS_ID: &str = "app-canvas";
pub const SCROLL_CONTAINER_ID: &str = "scroll-container";

// Upper bound on quads drawn per frame (background + images + texts)
pub const MAX_QUADS: usize = 32;

// Per-draw uniform slots are padded to this many bytes (WebGPU's default
// minUniformBufferOffsetAlignment)
pub const UNIFORM_SLOT_BYTES: u64 = 256;

// Spot cone half-angle for the image light (radians)
pub const SPOT_ANGLE: f32 = std::f32::consts::FRAC_PI_3;

// Frame timing clamp so a resumed tab does not jump the springs
pub const MAX_FRAME_DT_SEC: f32 = 0.1;

// Seed mixed into the star layout and glitch noise when no entropy is available
pub const FALLBACK_SEED: u64 = 0x5EED_1A11_AC5E;

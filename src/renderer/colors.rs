//! Scene colors (RGBA) and CSS conversion

pub const BACKGROUND: [f32; 4] = [0.118, 0.161, 0.231, 1.0]; // #1e293b
pub const GRID: [f32; 4] = [0.2, 0.255, 0.333, 1.0]; // #334155
pub const ENGINE_GLOW: [f32; 4] = [0.376, 0.647, 0.98, 1.0]; // #60a5fa
pub const LABEL: [f32; 4] = [1.0, 1.0, 1.0, 0.5];
pub const HEALTH: [f32; 4] = [0.937, 0.267, 0.267, 1.0]; // #ef4444

/// Format a color for a canvas `fillStyle`/`strokeStyle`
pub fn css_rgba(color: [f32; 4]) -> String {
    let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "rgba({}, {}, {}, {})",
        channel(color[0]),
        channel(color[1]),
        channel(color[2]),
        color[3].clamp(0.0, 1.0)
    )
}

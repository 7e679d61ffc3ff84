/// Color space conversion utilities
///
/// This module handles conversion between the two color spaces the viewer uses:
/// - RGB (display color space, 8 bits per channel)
/// - HSV (adjustment color space, 8 bits per channel)
///
/// HSV follows the common 8-bit layout where hue is stored in half-degrees
/// so that the full circle fits in a byte:
/// - H in [0, 180)
/// - S in [0, 255]
/// - V in [0, 255]

/// Number of distinct hue steps in the 8-bit HSV layout (one per 2 degrees)
pub const HUE_STEPS: u16 = 180;

/// Convert one RGB pixel to 8-bit HSV
pub fn rgb_to_hsv([r, g, b]: [u8; 3]) -> [u8; 3] {
    let (rf, gf, bf) = (r as f32, g as f32, b as f32);
    let max = rf.max(gf).max(bf);
    let min = rf.min(gf).min(bf);
    let delta = max - min;

    let saturation = if max > 0.0 { delta * 255.0 / max } else { 0.0 };

    let mut hue_degrees = if delta == 0.0 {
        0.0
    } else if max == rf {
        60.0 * (gf - bf) / delta
    } else if max == gf {
        120.0 + 60.0 * (bf - rf) / delta
    } else {
        240.0 + 60.0 * (rf - gf) / delta
    };
    if hue_degrees < 0.0 {
        hue_degrees += 360.0;
    }

    // 359.x degrees rounds up to 180 half-degrees, which is hue 0 again
    let hue = ((hue_degrees / 2.0).round() as u16 % HUE_STEPS) as u8;

    [hue, saturation.round() as u8, max as u8]
}

/// Convert one 8-bit HSV pixel back to RGB
pub fn hsv_to_rgb([h, s, v]: [u8; 3]) -> [u8; 3] {
    if s == 0 {
        return [v, v, v];
    }

    let value = v as f32;
    let sat = s as f32 / 255.0;
    let sector_pos = (h as u16 % HUE_STEPS) as f32 * 2.0 / 60.0;
    let sector = sector_pos.floor();
    let fraction = sector_pos - sector;

    let p = value * (1.0 - sat);
    let q = value * (1.0 - sat * fraction);
    let t = value * (1.0 - sat * (1.0 - fraction));

    let (r, g, b) = match sector as u8 {
        0 => (value, t, p),
        1 => (q, value, p),
        2 => (p, value, t),
        3 => (p, q, value),
        4 => (t, p, value),
        _ => (value, p, q),
    };

    [to_channel(r), to_channel(g), to_channel(b)]
}

fn to_channel(x: f32) -> u8 {
    x.round().clamp(0.0, 255.0) as u8
}

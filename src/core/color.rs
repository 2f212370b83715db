//! Packed 24-bit RGB colors (`0xRRGGBB`)

/// Split a packed color into its 0-255 channels
#[inline]
pub fn unpack_rgb(color: u32) -> (u32, u32, u32) {
    ((color >> 16) & 0xFF, (color >> 8) & 0xFF, color & 0xFF)
}

#[inline]
pub fn pack_rgb(r: u32, g: u32, b: u32) -> u32 {
    ((r & 0xFF) << 16) | ((g & 0xFF) << 8) | (b & 0xFF)
}

/// Mass-weighted per-channel average of two colors.
///
/// Each channel is computed in floating point and truncated toward zero
/// before repacking. Callers must pass a positive total weight.
pub fn blend_weighted(c1: u32, w1: f64, c2: u32, w2: f64) -> u32 {
    let (r1, g1, b1) = unpack_rgb(c1);
    let (r2, g2, b2) = unpack_rgb(c2);
    let total = w1 + w2;

    let channel = |a: u32, b: u32| -> u32 {
        let v = (a as f64 * w1 + b as f64 * w2) / total;
        // Float-to-int `as` saturates, so the result stays in 0..=255
        (v as u32).min(0xFF)
    };

    pack_rgb(channel(r1, r2), channel(g1, g2), channel(b1, b2))
}

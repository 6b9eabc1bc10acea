use crate::foundation::error::{BoothError, BoothResult};
use crate::foundation::math::mul_div255_u8;

/// One premultiplied RGBA8 pixel (r, g, b already multiplied by a).
pub type PremulPx = [u8; 4];

/// Source-over blend of premultiplied pixels, with a global `opacity`
/// applied to `src` first.
pub fn source_over(dst: PremulPx, src: PremulPx, opacity: f32) -> PremulPx {
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity <= 0.0 || src[3] == 0 {
        return dst;
    }

    let op = (opacity * 255.0).round() as u8;
    let sa = mul_div255_u8(src[3], op);
    if sa == 0 {
        return dst;
    }
    let inv = 255 - sa;

    let mut out = [0u8; 4];
    for i in 0..3 {
        let sc = mul_div255_u8(src[i], op);
        out[i] = sc.saturating_add(mul_div255_u8(dst[i], inv));
    }
    out[3] = sa.saturating_add(mul_div255_u8(dst[3], inv));
    out
}

/// Source-over blend `src` onto `dst` pixel by pixel. Buffers must be
/// equal-length premultiplied RGBA8.
pub fn blend_over_in_place(dst: &mut [u8], src: &[u8], opacity: f32) -> BoothResult<()> {
    if dst.len() != src.len() || dst.len() % 4 != 0 {
        return Err(BoothError::render(
            "blend_over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = source_over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]], opacity);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Convert straight-alpha RGBA8 to premultiplied, in place.
pub(crate) fn premultiply_in_place(rgba8: &mut [u8]) {
    for px in rgba8.chunks_exact_mut(4) {
        let a = px[3];
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        if a == 255 {
            continue;
        }
        px[0] = mul_div255_u8(px[0], a);
        px[1] = mul_div255_u8(px[1], a);
        px[2] = mul_div255_u8(px[2], a);
    }
}

/// Convert premultiplied RGBA8 back to straight alpha, in place.
pub(crate) fn unpremultiply_in_place(rgba8: &mut [u8]) {
    for px in rgba8.chunks_exact_mut(4) {
        let a = px[3];
        if a == 0 || a == 255 {
            continue;
        }
        let a = u16::from(a);
        for c in px.iter_mut().take(3) {
            let v = (u16::from(*c) * 255 + a / 2) / a;
            *c = v.min(255) as u8;
        }
    }
}

use crate::foundation::error::{BoothError, BoothResult};
use crate::foundation::math::SplitMix64;
use crate::render::composite::source_over;

/// Parameters of the synthetic film-grain pass: a coarse grid of small
/// filled squares, each an independent random gray, layered at low opacity
/// over the finished strip.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GrainParams {
    /// Grid step (and square size) in output pixels.
    pub step: u32,
    /// Per-square blend opacity in `[0, 1]`.
    pub opacity: f32,
    /// Inclusive lower bound of the random gray value.
    pub min_gray: u8,
    /// Exclusive upper bound of the random gray value.
    pub max_gray: u8,
    /// PRNG seed; the same seed reproduces the same grain.
    pub seed: u64,
}

impl Default for GrainParams {
    fn default() -> Self {
        Self {
            step: 2,
            opacity: 0.1,
            min_gray: 30,
            max_gray: 230,
            seed: 0,
        }
    }
}

impl GrainParams {
    /// Check parameters are usable and subtle enough not to obscure the
    /// photo or overlay.
    pub fn validate(&self) -> BoothResult<()> {
        if self.step == 0 || self.step > 16 {
            return Err(BoothError::validation("GrainParams.step must be in 1..=16"));
        }
        if !self.opacity.is_finite() || !(0.0..=0.5).contains(&self.opacity) {
            return Err(BoothError::validation(
                "GrainParams.opacity must be in 0..=0.5",
            ));
        }
        if self.min_gray >= self.max_gray {
            return Err(BoothError::validation(
                "GrainParams gray range must be non-empty",
            ));
        }
        Ok(())
    }
}

/// Layer grain noise over a premultiplied RGBA8 surface in place.
///
/// Each grid cell draws its own square; squares at the right/bottom edges
/// are clipped to the surface.
pub fn grain_in_place(
    rgba8: &mut [u8],
    width: u32,
    height: u32,
    params: &GrainParams,
) -> BoothResult<()> {
    params.validate()?;
    let expected = width as usize * height as usize * 4;
    if rgba8.len() != expected {
        return Err(BoothError::render(format!(
            "grain surface is {} bytes, expected {expected} for {width}x{height}",
            rgba8.len()
        )));
    }

    let mut rng = SplitMix64::new(params.seed);
    let step = params.step;
    for y0 in (0..height).step_by(step as usize) {
        for x0 in (0..width).step_by(step as usize) {
            let gray = rng.next_in(params.min_gray, params.max_gray);
            let src = [gray, gray, gray, 255];
            for y in y0..(y0 + step).min(height) {
                for x in x0..(x0 + step).min(width) {
                    let i = (y as usize * width as usize + x as usize) * 4;
                    let px = &mut rgba8[i..i + 4];
                    let out = source_over([px[0], px[1], px[2], px[3]], src, params.opacity);
                    px.copy_from_slice(&out);
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/grain.rs"]
mod tests;

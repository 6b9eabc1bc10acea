use crate::foundation::error::{BoothError, BoothResult};

/// Parameters of the filmic tone transform applied to every stacked frame:
/// grayscale conversion, then contrast boost, then brightness adjustment,
/// then a slight warm sepia tint. Alpha is untouched.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ToneParams {
    /// Contrast multiplier around mid-gray.
    pub contrast: f32,
    /// Brightness multiplier.
    pub brightness: f32,
    /// Sepia tint weight in `[0, 1]`.
    pub sepia: f32,
}

impl Default for ToneParams {
    fn default() -> Self {
        Self {
            contrast: 1.4,
            brightness: 0.95,
            sepia: 0.15,
        }
    }
}

impl ToneParams {
    /// Check parameters are finite and within sane bounds.
    pub fn validate(&self) -> BoothResult<()> {
        if !self.contrast.is_finite() || !(0.0..=4.0).contains(&self.contrast) {
            return Err(BoothError::validation("ToneParams.contrast must be in 0..=4"));
        }
        if !self.brightness.is_finite() || !(0.0..=4.0).contains(&self.brightness) {
            return Err(BoothError::validation(
                "ToneParams.brightness must be in 0..=4",
            ));
        }
        if !self.sepia.is_finite() || !(0.0..=1.0).contains(&self.sepia) {
            return Err(BoothError::validation("ToneParams.sepia must be in 0..=1"));
        }
        Ok(())
    }
}

// Sepia row sums for a gray input pixel (standard sepia matrix applied to
// r = g = b).
const SEPIA_R: f32 = 0.393 + 0.769 + 0.189;
const SEPIA_G: f32 = 0.349 + 0.686 + 0.168;
const SEPIA_B: f32 = 0.272 + 0.534 + 0.131;

/// Apply the tone transform to a straight RGBA8 buffer in place.
///
/// Stage order is part of the contract: grayscale first, then contrast,
/// then brightness, then tint.
pub fn tone_map_in_place(rgba8: &mut [u8], params: ToneParams) {
    for px in rgba8.chunks_exact_mut(4) {
        let r = f32::from(px[0]);
        let g = f32::from(px[1]);
        let b = f32::from(px[2]);

        let mut v = 0.2126 * r + 0.7152 * g + 0.0722 * b;
        v = (v - 128.0) * params.contrast + 128.0;
        v *= params.brightness;
        v = v.clamp(0.0, 255.0);

        let s = params.sepia;
        let keep = 1.0 - s;
        px[0] = (v * keep + (v * SEPIA_R).min(255.0) * s).clamp(0.0, 255.0) as u8;
        px[1] = (v * keep + (v * SEPIA_G).min(255.0) * s).clamp(0.0, 255.0) as u8;
        px[2] = (v * keep + (v * SEPIA_B).min(255.0) * s).clamp(0.0, 255.0) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/tone.rs"]
mod tests;

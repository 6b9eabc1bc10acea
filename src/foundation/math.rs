/// Deterministic SplitMix64 stream used for grain noise. No OS entropy:
/// the same seed always yields the same print.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SplitMix64(u64);

impl SplitMix64 {
    pub(crate) fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub(crate) fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform value in `[lo, hi)`. `hi` must be > `lo`.
    pub(crate) fn next_in(&mut self, lo: u8, hi: u8) -> u8 {
        let span = u64::from(hi - lo);
        lo + (self.next_u64() % span) as u8
    }
}

pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u8, y: u8) -> u8 {
    mul_div255_u16(u16::from(x), u16::from(y)) as u8
}

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;

use crate::foundation::error::{BoothError, BoothResult};
use crate::render::grain::GrainParams;
use crate::render::tone::ToneParams;

/// The booth "look": tone and grain parameters, loadable from JSON.
///
/// Every field defaults, so `{}` is a valid config and hosts only override
/// what they care about.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BoothConfig {
    /// Tone transform parameters.
    #[serde(default)]
    pub tone: ToneParams,
    /// Grain pass parameters.
    #[serde(default)]
    pub grain: GrainParams,
}

impl BoothConfig {
    /// Validate all contained parameters.
    pub fn validate(&self) -> BoothResult<()> {
        self.tone.validate()?;
        self.grain.validate()
    }
}

/// Read and validate a [`BoothConfig`] from a JSON file.
pub fn read_config_json(path: &Path) -> BoothResult<BoothConfig> {
    let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
    let cfg: BoothConfig = serde_json::from_reader(BufReader::new(f))
        .map_err(|e| BoothError::validation(format!("parse config '{}': {e}", path.display())))?;
    cfg.validate()?;
    Ok(cfg)
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;

//! Scenario capability table.
//!
//! Maps capture scenarios to their EIS capability: whether a hardware
//! stabilizer engages in that scenario, and the sensor oversize margin it
//! runs with. The table is embedded at compile time from
//! `contrib/profiles.toml`.

use crate::scenario::ScenarioMode;
use serde::Deserialize;
use std::sync::OnceLock;

const PROFILES_TOML: &str = include_str!("../../../contrib/profiles.toml");

static PROFILE_DB: OnceLock<Vec<EisProfile>> = OnceLock::new();

/// Top-level table structure of `contrib/profiles.toml`.
#[derive(Debug, Clone, Deserialize)]
struct ProfileFile {
    profile: Vec<EisProfile>,
}

/// EIS capability entry for one capture scenario.
#[derive(Debug, Clone, Deserialize)]
pub struct EisProfile {
    pub mode: ScenarioMode,
    /// Whether a hardware stabilizer engages in this scenario.
    pub supported: bool,
    /// Sensor oversize margin for this scenario, in percent.
    pub crop_factor: u32,
}

fn profile_db() -> &'static Vec<EisProfile> {
    PROFILE_DB.get_or_init(|| match toml::from_str::<ProfileFile>(PROFILES_TOML) {
        Ok(f) => f.profile,
        Err(e) => {
            eprintln!("steady-hal: bad profile TOML: {e}");
            Vec::new()
        }
    })
}

/// Look up the capability entry for a scenario.
///
/// Returns a `'static` reference into the embedded table; a missing entry
/// means the scenario has no EIS capability.
pub fn lookup(mode: ScenarioMode) -> Option<&'static EisProfile> {
    profile_db().iter().find(|p| p.mode == mode)
}

/// List all capability entries.
pub fn list() -> &'static [EisProfile] {
    profile_db()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_table_parses() {
        assert!(!list().is_empty());
    }

    #[test]
    fn test_every_mode_has_an_entry() {
        for mode in ScenarioMode::ALL {
            assert!(lookup(mode).is_some(), "no profile for {mode}");
        }
    }

    #[test]
    fn test_video_record_engages_eis() {
        let profile = lookup(ScenarioMode::VideoRecord).unwrap();
        assert!(profile.supported);
        assert_eq!(profile.crop_factor, crate::config::EIS_FACTOR);
    }

    #[test]
    fn test_preview_does_not_engage_eis() {
        assert!(!lookup(ScenarioMode::Preview).unwrap().supported);
    }
}

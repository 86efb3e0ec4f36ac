//! Capture-scenario tags owned by the scenario controller.
//!
//! The stabilizer contract treats these as opaque: which modes actually
//! engage EIS is decided by the scenario capability table in
//! [`crate::profiles`], not here.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Capture/operating scenario the device is configured for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScenarioMode {
    Preview,
    VideoRecord,
    StillCapture,
    ZeroShutterDelay,
}

impl ScenarioMode {
    pub const ALL: [Self; 4] = [
        Self::Preview,
        Self::VideoRecord,
        Self::StillCapture,
        Self::ZeroShutterDelay,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Preview => "preview",
            Self::VideoRecord => "video-record",
            Self::StillCapture => "still-capture",
            Self::ZeroShutterDelay => "zero-shutter-delay",
        }
    }
}

impl fmt::Display for ScenarioMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ScenarioMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "preview" => Ok(Self::Preview),
            "video-record" => Ok(Self::VideoRecord),
            "still-capture" => Ok(Self::StillCapture),
            "zero-shutter-delay" => Ok(Self::ZeroShutterDelay),
            other => Err(format!(
                "unknown scenario mode: {other} (expected preview, video-record, \
                 still-capture, or zero-shutter-delay)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_round_trip() {
        for mode in ScenarioMode::ALL {
            assert_eq!(mode.as_str().parse::<ScenarioMode>(), Ok(mode));
        }
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!("panorama".parse::<ScenarioMode>().is_err());
    }

    #[test]
    fn test_display_matches_as_str() {
        assert_eq!(ScenarioMode::VideoRecord.to_string(), "video-record");
    }
}

//! Raw EIS hardware statistic record.
//!
//! Produced by the motion-estimation block and consumed by telemetry;
//! the device contract only moves references to it and never interprets
//! the contents.

use serde::{Deserialize, Serialize};

/// Number of measurement windows in the hardware statistic layout.
pub const EIS_WINDOW_COUNT: usize = 32;

/// Per-window motion sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowStat {
    /// Local motion vector, x axis.
    pub lmv_x: i32,
    /// Local motion vector, y axis.
    pub lmv_y: i32,
    /// Trust weight for the x component.
    pub trust_x: u32,
    /// Trust weight for the y component.
    pub trust_y: u32,
}

/// One frame's worth of per-window motion statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EisStatistic {
    pub windows: [WindowStat; EIS_WINDOW_COUNT],
    /// Whether the motion estimate satisfied the convergence criterion.
    pub converged: bool,
}

impl Default for EisStatistic {
    fn default() -> Self {
        Self {
            windows: [WindowStat::default(); EIS_WINDOW_COUNT],
            converged: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_zeroed() {
        let stat = EisStatistic::default();
        assert!(!stat.converged);
        assert!(stat.windows.iter().all(|w| *w == WindowStat::default()));
    }
}

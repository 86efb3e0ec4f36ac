//! Null stabilizer backend.
//!
//! Stands in whenever a scenario or hardware build has no EIS capability,
//! so the capture pipeline treats "EIS present" and "EIS absent" uniformly
//! instead of null-checking the device.

use crate::config::EisConfig;
use crate::device::{EisError, Stabilizer};
use crate::scenario::ScenarioMode;
use crate::statistic::EisStatistic;
use crate::vector::{Compensation, GlobalMotion};

/// Backend with no stabilization: every operation is a constant-time no-op
/// and every result reads as "no stabilization applied".
#[derive(Debug, Default)]
pub struct NullStabilizer;

impl NullStabilizer {
    pub fn new() -> Self {
        Self
    }
}

impl Stabilizer for NullStabilizer {
    fn configure(&mut self, _mode: ScenarioMode, _config: EisConfig) -> Result<(), EisError> {
        Ok(())
    }

    fn run(&mut self) -> Result<(), EisError> {
        Ok(())
    }

    fn compensation(&self) -> Result<Compensation, EisError> {
        Ok(Compensation::default())
    }

    fn global_motion(&self) -> Result<GlobalMotion, EisError> {
        Ok(GlobalMotion::default())
    }

    /// Leaves `out` untouched.
    ///
    /// Unlike the vector queries this does not zero the record, so callers
    /// that mix backends must pre-zero it rather than rely on the fill.
    fn statistic(&self, _out: &mut EisStatistic) -> Result<(), EisError> {
        Ok(())
    }

    fn name(&self) -> &'static str {
        "null"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statistic::WindowStat;

    #[test]
    fn test_run_succeeds_for_any_configuration() {
        for mode in ScenarioMode::ALL {
            let mut stabilizer = NullStabilizer::new();
            stabilizer.configure(mode, EisConfig::new(0, 0)).unwrap();
            stabilizer.run().unwrap();
            stabilizer.configure(mode, EisConfig::new(4096, 2160)).unwrap();
            stabilizer.run().unwrap();
        }
    }

    #[test]
    fn test_compensation_is_always_zero() {
        let mut stabilizer = NullStabilizer::new();
        assert!(stabilizer.compensation().unwrap().is_zero());

        stabilizer
            .configure(ScenarioMode::VideoRecord, EisConfig::new(1920, 1080))
            .unwrap();
        for _ in 0..3 {
            stabilizer.run().unwrap();
            assert!(stabilizer.compensation().unwrap().is_zero());
        }
    }

    #[test]
    fn test_global_motion_is_always_zero() {
        let mut stabilizer = NullStabilizer::new();
        assert_eq!(stabilizer.global_motion().unwrap(), GlobalMotion::default());

        stabilizer.run().unwrap();
        let gmv = stabilizer.global_motion().unwrap();
        assert_eq!(gmv.x.raw(), 0);
        assert_eq!(gmv.y.raw(), 0);
    }

    #[test]
    fn test_statistic_left_untouched() {
        let stabilizer = NullStabilizer::new();

        let mut stat = EisStatistic::default();
        stat.windows[3] = WindowStat {
            lmv_x: -7,
            lmv_y: 9,
            trust_x: 4,
            trust_y: 5,
        };
        stat.converged = true;
        let expected = stat.clone();

        stabilizer.statistic(&mut stat).unwrap();
        assert_eq!(stat, expected);
    }

    #[test]
    fn test_configure_is_idempotent() {
        let mode = ScenarioMode::VideoRecord;
        let config = EisConfig::new(1920, 1080);

        let mut once = NullStabilizer::new();
        once.configure(mode, config).unwrap();

        let mut twice = NullStabilizer::new();
        twice.configure(mode, config).unwrap();
        twice.configure(mode, config).unwrap();

        once.run().unwrap();
        twice.run().unwrap();
        assert_eq!(
            once.compensation().unwrap(),
            twice.compensation().unwrap()
        );
        assert_eq!(
            once.global_motion().unwrap(),
            twice.global_motion().unwrap()
        );
    }
}

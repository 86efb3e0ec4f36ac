//! steady-hal — Hardware abstraction for electronic image stabilization.
//!
//! Provides the stabilizer capability contract consumed by the camera
//! scenario controller, plus the null backend used when a scenario or
//! hardware build has no EIS capability.

pub mod config;
pub mod device;
pub mod null;
pub mod profiles;
pub mod scenario;
pub mod statistic;
pub mod vector;

pub use config::{EisConfig, EIS_FACTOR};
pub use device::{EisDevice, EisError, Stabilizer};
pub use null::NullStabilizer;
pub use scenario::ScenarioMode;
pub use statistic::EisStatistic;
pub use vector::{Compensation, GlobalMotion};

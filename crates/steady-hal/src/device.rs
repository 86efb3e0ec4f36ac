//! EIS device contract and owning handle.

use crate::config::EisConfig;
use crate::null::NullStabilizer;
use crate::profiles;
use crate::scenario::ScenarioMode;
use crate::statistic::EisStatistic;
use crate::vector::{Compensation, GlobalMotion};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EisError {
    #[error("scenario mode not supported: {0}")]
    UnsupportedMode(ScenarioMode),
    #[error("device not configured")]
    NotConfigured,
    #[error("stabilizer reported status {status}")]
    Exec { status: i32 },
    #[error("backend unavailable: {0}")]
    Backend(String),
}

/// One stabilizer backend from the closed capability set.
///
/// `configure` must precede the first `run` of a capture session and may be
/// re-invoked when the scenario or frame geometry changes. `run` executes one
/// stabilization cycle per captured frame, blocking until the computation
/// completes; the query methods expose that cycle's outputs and are valid
/// only after a successful `run`. A failed `run` is local to its frame: the
/// caller skips stabilization for that frame and carries on.
///
/// Nothing here synchronizes: an instance is meant to be driven sequentially
/// by a single owner, and sharing one across threads is the caller's
/// responsibility.
pub trait Stabilizer: Send {
    fn configure(&mut self, mode: ScenarioMode, config: EisConfig) -> Result<(), EisError>;

    fn run(&mut self) -> Result<(), EisError>;

    /// Compensation motion vector and crop target of the most recent run.
    fn compensation(&self) -> Result<Compensation, EisError>;

    /// Raw global motion between the current and previous frame.
    fn global_motion(&self) -> Result<GlobalMotion, EisError>;

    /// Fill a caller-supplied diagnostic record.
    fn statistic(&self, out: &mut EisStatistic) -> Result<(), EisError>;

    /// Short backend name for logs.
    fn name(&self) -> &'static str;
}

/// Uniquely-owned handle to one EIS device instance.
///
/// Created through one of the factories below and torn down with
/// [`release`](Self::release), which consumes the handle, so no operation
/// is expressible after release. The `user_name` given at creation
/// identifies the acquiring component in logs only; it carries no
/// authorization semantics.
pub struct EisDevice {
    backend: Box<dyn Stabilizer>,
    user_name: String,
}

impl EisDevice {
    /// Create a device backed by the best stabilizer available in this build.
    ///
    /// No hardware stabilizer backend is compiled into this build, so the
    /// null backend is selected; the `Result` is the construction error
    /// channel a hardware backend reports through.
    pub fn create(user_name: &str) -> Result<Self, EisError> {
        Ok(Self::null(user_name))
    }

    /// Create a device for a specific capture scenario.
    ///
    /// Scenarios without EIS capability in the [`profiles`] table get the
    /// null backend, so callers never need to special-case "EIS absent".
    pub fn for_scenario(user_name: &str, mode: ScenarioMode) -> Result<Self, EisError> {
        match profiles::lookup(mode) {
            Some(p) if p.supported => {
                tracing::debug!(
                    user = user_name,
                    mode = %mode,
                    "scenario supports EIS but no hardware backend is compiled in"
                );
                Ok(Self::null(user_name))
            }
            _ => Ok(Self::null(user_name)),
        }
    }

    /// Create a device with the null backend.
    pub fn null(user_name: &str) -> Self {
        Self::with_backend(user_name, Box::new(NullStabilizer::new()))
    }

    /// Create a device around an explicit backend.
    pub fn with_backend(user_name: &str, backend: Box<dyn Stabilizer>) -> Self {
        tracing::info!(user = user_name, backend = backend.name(), "created EIS device");
        Self {
            backend,
            user_name: user_name.to_owned(),
        }
    }

    /// Name of the component that acquired this device.
    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    /// Name of the selected backend.
    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    pub fn configure(&mut self, mode: ScenarioMode, config: EisConfig) -> Result<(), EisError> {
        tracing::debug!(
            user = %self.user_name,
            mode = %mode,
            width = config.image_width,
            height = config.image_height,
            "configuring EIS"
        );
        self.backend.configure(mode, config)
    }

    /// Run one stabilization cycle for the current frame.
    pub fn run(&mut self) -> Result<(), EisError> {
        self.backend.run()
    }

    /// Compensation motion vector and crop target of the most recent run.
    pub fn compensation(&self) -> Result<Compensation, EisError> {
        self.backend.compensation()
    }

    /// Raw global motion between the current and previous frame.
    pub fn global_motion(&self) -> Result<GlobalMotion, EisError> {
        self.backend.global_motion()
    }

    /// Fill a caller-supplied diagnostic record.
    pub fn statistic(&self, out: &mut EisStatistic) -> Result<(), EisError> {
        self.backend.statistic(out)
    }

    /// Release the device, consuming the handle.
    ///
    /// `user_name` identifies the releasing component; it is expected to
    /// match the name given at creation.
    pub fn release(self, user_name: &str) {
        if user_name == self.user_name {
            tracing::info!(user = user_name, "released EIS device");
        } else {
            tracing::warn!(
                owner = %self.user_name,
                releaser = user_name,
                "EIS device released by a different user than acquired it"
            );
        }
    }
}

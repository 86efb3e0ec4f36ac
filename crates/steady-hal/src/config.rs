//! EIS stage configuration.

use serde::{Deserialize, Serialize};

/// Stabilizer oversize ratio, in percent.
///
/// The frame handed to the EIS stage is oversized to this percentage of the
/// output target so the compensation window has margin to move in.
pub const EIS_FACTOR: u32 = 120;

/// Frame geometry handed to the EIS stage before processing.
///
/// Width and height describe the image as it arrives at the stabilizer
/// (sensor output size, or the size after the crop/downscale stage).
/// Validity of the dimensions is the caller's responsibility; the device
/// contract does not enforce non-zero sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EisConfig {
    pub image_width: u32,
    pub image_height: u32,
}

impl EisConfig {
    pub const fn new(image_width: u32, image_height: u32) -> Self {
        Self {
            image_width,
            image_height,
        }
    }

    /// Crop target for this input size under the [`EIS_FACTOR`] margin.
    pub const fn crop_target(&self) -> (u32, u32) {
        (
            self.image_width * 100 / EIS_FACTOR,
            self.image_height * 100 / EIS_FACTOR,
        )
    }
}

//! On-board GPIO outputs.
//!
//! [`HardwareGpio`] is the [`GpioPort`] used by the firmware.  It remembers
//! which pins it has handed out so a relay output can never be aliased.

use embedded_hal::digital::{ErrorType, OutputPin};
use log::debug;

use crate::app::ports::GpioPort;
use crate::error::GpioError;
use crate::pins::PinId;

use super::hw_init;

/// A configured push-pull output.
#[derive(Debug)]
pub struct GpioOutput {
    pin: PinId,
}

impl ErrorType for GpioOutput {
    type Error = GpioError;
}

impl OutputPin for GpioOutput {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        hw_init::gpio_write(self.pin, false)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        hw_init::gpio_write(self.pin, true)
    }
}

#[derive(Debug, Default)]
pub struct HardwareGpio {
    claimed: heapless::Vec<PinId, 8>,
}

impl HardwareGpio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_claimed(&self, pin: PinId) -> bool {
        self.claimed.contains(&pin)
    }
}

impl GpioPort for HardwareGpio {
    type Output = GpioOutput;

    fn configure_output(&mut self, pin: PinId) -> Result<GpioOutput, GpioError> {
        if self.is_claimed(pin) {
            return Err(GpioError::AlreadyClaimed);
        }
        hw_init::configure_output(pin)?;
        self.claimed
            .push(pin)
            .map_err(|_| GpioError::ConfigFailed(-1))?;
        debug!("gpio: {} claimed as output", pin);
        Ok(GpioOutput { pin })
    }
}

//! Raw GPIO access for the relay outputs.
//!
//! Thin wrappers over the ESP-IDF `gpio_*` sys calls.  On the host the same
//! functions drive a simulated level bank so the driver layer above can be
//! exercised without hardware.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

use log::trace;

use crate::error::GpioError;
use crate::pins::PinId;

// ── Output configuration ──────────────────────────────────────

/// Configure `pin` as a push-pull output and drive it LOW.
#[cfg(target_os = "espidf")]
pub fn configure_output(pin: PinId) -> Result<(), GpioError> {
    let cfg = gpio_config_t {
        pin_bit_mask: 1u64 << pin.raw(),
        mode: gpio_mode_t_GPIO_MODE_OUTPUT,
        pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
        pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
        intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
    };
    // SAFETY: called from the single-threaded startup path; cfg outlives the call.
    let ret = unsafe { gpio_config(&cfg) };
    if ret != ESP_OK as i32 {
        return Err(GpioError::ConfigFailed(ret));
    }
    gpio_write(pin, false)?;
    trace!("hw_init: {} configured as output", pin);
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn configure_output(pin: PinId) -> Result<(), GpioError> {
    if !crate::pins::is_valid_gpio(pin) {
        return Err(GpioError::ConfigFailed(-1));
    }
    sim::set(pin, Some(false));
    trace!("hw_init(sim): {} configured as output", pin);
    Ok(())
}

// ── Level writes ──────────────────────────────────────────────

#[cfg(target_os = "espidf")]
pub fn gpio_write(pin: PinId, high: bool) -> Result<(), GpioError> {
    // SAFETY: pin was configured as an output by configure_output();
    // writes only happen from the bridge service loop.
    let ret = unsafe { gpio_set_level(pin.raw(), u32::from(high)) };
    if ret != ESP_OK as i32 {
        return Err(GpioError::WriteFailed(ret));
    }
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn gpio_write(pin: PinId, high: bool) -> Result<(), GpioError> {
    if sim::level(pin).is_none() {
        return Err(GpioError::WriteFailed(-1));
    }
    sim::set(pin, Some(high));
    Ok(())
}

/// Simulated output bank. `None` means the pin was never configured.
#[cfg(not(target_os = "espidf"))]
pub mod sim {
    use std::sync::Mutex;

    use crate::pins::PinId;

    pub const PIN_COUNT: usize = 49;

    static LEVELS: Mutex<[Option<bool>; PIN_COUNT]> = Mutex::new([None; PIN_COUNT]);

    pub(super) fn set(pin: PinId, level: Option<bool>) {
        if let (Ok(mut bank), Ok(idx)) = (LEVELS.lock(), usize::try_from(pin.raw())) {
            if let Some(slot) = bank.get_mut(idx) {
                *slot = level;
            }
        }
    }

    /// Current simulated level of `pin`.
    pub fn level(pin: PinId) -> Option<bool> {
        let idx = usize::try_from(pin.raw()).ok()?;
        LEVELS.lock().ok()?.get(idx).copied().flatten()
    }
}

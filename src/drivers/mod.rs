//! GPIO drivers and raw hardware access.

pub mod gpio;
pub mod hw_init;

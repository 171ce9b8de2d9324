//! UART transport — the serial link between the MCU and the host processor.
//!
//! Uses the ESP-IDF UART driver directly.  Reads are non-blocking (zero
//! tick timeout) so the bridge runtime can pace itself; writes block until
//! the driver has queued the whole frame.

use esp_idf_svc::sys::*;
use log::{info, warn};

use crate::config::FirmwareConfig;
use crate::rpc::transport::Transport;

const RX_BUF_SIZE: i32 = 1024;
const TX_BUF_SIZE: i32 = 1024;
/// Upper bound on waiting for the TX FIFO to drain, in RTOS ticks.
const TX_DONE_TICKS: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UartTransportError {
    /// Driver install or pin routing failed (ESP-IDF return code).
    Init(i32),
    Read(i32),
    Write(i32),
    Flush(i32),
}

impl core::fmt::Display for UartTransportError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Init(rc) => write!(f, "UART init failed (rc={})", rc),
            Self::Read(rc) => write!(f, "UART read failed (rc={})", rc),
            Self::Write(rc) => write!(f, "UART write failed (rc={})", rc),
            Self::Flush(rc) => write!(f, "UART flush failed (rc={})", rc),
        }
    }
}

pub struct UartTransport {
    port: uart_port_t,
}

impl UartTransport {
    /// Install the UART driver and route it to the configured pins.
    pub fn new(config: &FirmwareConfig) -> Result<Self, UartTransportError> {
        let port = config.uart_port as uart_port_t;
        let uart_cfg = uart_config_t {
            baud_rate: config.uart_baud as i32,
            data_bits: uart_word_length_t_UART_DATA_8_BITS,
            parity: uart_parity_t_UART_PARITY_DISABLE,
            stop_bits: uart_stop_bits_t_UART_STOP_BITS_1,
            flow_ctrl: uart_hw_flowcontrol_t_UART_HW_FLOWCTRL_DISABLE,
            ..Default::default()
        };

        // SAFETY: called once from main() before the runtime starts; all
        // pointers refer to locals that outlive the calls.
        unsafe {
            let ret = uart_param_config(port, &uart_cfg);
            if ret != ESP_OK as i32 {
                return Err(UartTransportError::Init(ret));
            }
            let ret = uart_set_pin(
                port,
                config.uart_tx_gpio,
                config.uart_rx_gpio,
                UART_PIN_NO_CHANGE,
                UART_PIN_NO_CHANGE,
            );
            if ret != ESP_OK as i32 {
                return Err(UartTransportError::Init(ret));
            }
            let ret = uart_driver_install(
                port,
                RX_BUF_SIZE,
                TX_BUF_SIZE,
                0,
                core::ptr::null_mut(),
                0,
            );
            if ret != ESP_OK as i32 {
                return Err(UartTransportError::Init(ret));
            }
        }

        info!(
            "uart: port {} @ {} baud (tx={}, rx={})",
            config.uart_port,
            config.uart_baud,
            config.uart_tx(),
            config.uart_rx()
        );
        Ok(Self { port })
    }
}

impl Transport for UartTransport {
    type Error = UartTransportError;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        if buf.is_empty() {
            return Ok(0);
        }
        // SAFETY: buf is valid for buf.len() bytes; zero timeout never blocks.
        let n = unsafe {
            uart_read_bytes(self.port, buf.as_mut_ptr().cast(), buf.len() as u32, 0)
        };
        if n < 0 {
            return Err(UartTransportError::Read(n));
        }
        Ok(n as usize)
    }

    fn write(&mut self, data: &[u8]) -> Result<usize, Self::Error> {
        // SAFETY: data is valid for data.len() bytes for the duration of the call.
        let n = unsafe { uart_write_bytes(self.port, data.as_ptr().cast(), data.len()) };
        if n < 0 {
            return Err(UartTransportError::Write(n));
        }
        Ok(n as usize)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        // SAFETY: port was installed in new().
        let ret = unsafe { uart_wait_tx_done(self.port, TX_DONE_TICKS) };
        if ret != ESP_OK as i32 {
            warn!("uart: tx drain timed out (rc={})", ret);
            return Err(UartTransportError::Flush(ret));
        }
        Ok(())
    }

    fn available(&self) -> bool {
        let mut len: usize = 0;
        // SAFETY: len is a valid out-pointer.
        let ret = unsafe { uart_get_buffered_data_len(self.port, &mut len) };
        ret == ESP_OK as i32 && len > 0
    }
}

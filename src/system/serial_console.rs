//! Operator serial console
//!
//! Blocking UART implementation of [`TextChannel`]. Input is polled without
//! waiting: an empty receive FIFO simply means no command this iteration.
//! Closing the console only mutes output, the receiver stays live so a run
//! can still be aborted.

use defmt::warn;
use embassy_rp::uart::{self, Blocking, Uart};
use pendulum_core::TextChannel;

use crate::system::resources::SerialResources;

/// Console baud rate
const BAUD_RATE: u32 = 115_200;

/// Line terminator expected by serial terminals
const LINE_END: &[u8] = b"\r\n";

/// UART-backed text channel
pub struct SerialConsole {
    uart: Uart<'static, Blocking>,
    open: bool,
}

impl SerialConsole {
    /// Configures UART0 and opens the console
    pub fn new(r: SerialResources) -> Self {
        let mut config = uart::Config::default();
        config.baudrate = BAUD_RATE;
        let uart = Uart::new_blocking(r.uart, r.tx_pin, r.rx_pin, config);
        Self { uart, open: true }
    }

    fn write_bytes(&mut self, bytes: &[u8]) {
        if let Err(e) = self.uart.blocking_write(bytes) {
            warn!("UART write failed: {}", e);
        }
    }
}

impl TextChannel for SerialConsole {
    fn read_command(&mut self) -> Option<u8> {
        match embedded_hal_nb::serial::Read::read(&mut self.uart) {
            Ok(byte) => Some(byte),
            Err(nb::Error::WouldBlock) => None,
            Err(nb::Error::Other(e)) => {
                // framing/overrun errors drop the byte, the operator retypes
                warn!("UART read failed: {}", e);
                None
            }
        }
    }

    fn write_line(&mut self, line: &str) {
        if !self.open {
            return;
        }
        self.write_bytes(line.as_bytes());
        self.write_bytes(LINE_END);
    }

    fn open(&mut self) {
        self.open = true;
    }

    fn close(&mut self) {
        // let the tail of the last line leave the FIFO before going quiet
        if let Err(e) = self.uart.blocking_flush() {
            warn!("UART flush failed: {}", e);
        }
        self.open = false;
    }
}

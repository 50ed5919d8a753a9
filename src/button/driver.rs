//! Binds the state machine to a real input pin.

use embedded_hal::digital::InputPin;

use super::debounce::Level;
use super::machine::{ButtonMachine, Events};
use crate::config::ButtonConfig;
use crate::error::Error;

/// A button state machine sampling an `embedded-hal` input pin.
pub struct ButtonDriver<P> {
    pin: P,
    machine: ButtonMachine,
    last_level: Level,
}

impl<P: InputPin> ButtonDriver<P> {
    /// Validate `config` and take an initial reading of the line.
    ///
    /// A pin that cannot be read here is a hardware misconfiguration:
    /// the subsystem does not start.
    pub fn new(mut pin: P, config: ButtonConfig) -> Result<Self, Error> {
        config.validate()?;

        let level = match pin.is_high() {
            Ok(true) => Level::High,
            Ok(false) => Level::Low,
            Err(_) => {
                error!("Failed to read button input during init");
                return Err(Error::InputRead);
            }
        };
        info!(
            "Initial button state: {}",
            if level.is_pressed() { "PRESSED" } else { "RELEASED" }
        );

        Ok(Self {
            pin,
            machine: ButtonMachine::with_level(config, level),
            last_level: level,
        })
    }

    /// Sample the pin once and advance the state machine.
    ///
    /// A failed read reuses the previous sample so a glitching line
    /// cannot fabricate a transition.
    pub fn poll(&mut self, now_ms: u32) -> Events {
        match self.pin.is_high() {
            Ok(high) => self.last_level = if high { Level::High } else { Level::Low },
            Err(_) => warn!("Button input read failed, reusing last level"),
        }
        self.machine.tick(self.last_level, now_ms)
    }

    pub fn machine(&self) -> &ButtonMachine {
        &self.machine
    }

    pub fn machine_mut(&mut self) -> &mut ButtonMachine {
        &mut self.machine
    }
}

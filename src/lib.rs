//! Pin mapping for the Microchip [ATtiny1634], clockwise numbering.
//!
//! This crate holds the wiring facts a HAL or board crate needs for this
//! part: which port and bit each pin is, which pins carry PWM, ADC channels
//! and pin change interrupts, and where the USARTs and the USI come out.
//! There is no hardware access in here, only constants, tables and `const
//! fn` lookups, so everything can be evaluated at compile time.
//!
//! Pins are numbered clockwise around the package, see [`pins`] for the
//! drawing. The datasheet names (`PIN_PA0` ...) are unambiguous and are the
//! recommended way to refer to pins.
//!
//! # Lookups
//! Lookups that take a raw pin or channel number return `None` when the
//! number is out of range or the pin lacks the feature asked about. Nothing
//! panics.
//!
//! ```
//! use attiny1634_pins::prelude::*;
//!
//! // PA5 is OC0B and ADC channel 2
//! assert!(digital_pin_has_pwm(PIN_PA5.number()));
//! assert_eq!(PIN_PA5.timer(), Timer::Timer0B);
//! assert_eq!(digital_pin_to_analog_input(5).map(|ch| ch.number()), Some(2));
//!
//! // only PC2 has INT0
//! assert_eq!(digital_pin_to_interrupt(PIN_PC2.number()), Some(0));
//! assert_eq!(digital_pin_to_interrupt(PIN_PC3.number()), None);
//!
//! // pin change setup for the reset pin, when it is fused as I/O
//! let pc = pin_change(PIN_PC3.number()).unwrap();
//! assert_eq!(pc.mask(), PCMSK2);
//! assert_eq!(pc.mask_bit(), 3);
//! ```
//!
//! # Features
//! * `initialize-adc`: sets [`config::DEFAULT_INITIALIZE_ADC`]
//! * `initialize-secondary-timers`: sets
//!   [`config::DEFAULT_INITIALIZE_SECONDARY_TIMERS`]
//!
//! [ATtiny1634]: https://www.microchip.com/en-us/product/ATtiny1634

#![cfg_attr(not(test), no_std)]

pub mod analog;
pub mod capabilities;
pub mod config;
pub mod interrupt;
pub mod pins;
pub mod port;
pub mod report;
pub mod serial;
pub mod timer;

pub use crate::pins::*;

pub mod prelude {
    pub use crate::analog::{
        analog_input_to_digital_pin, digital_pin_to_analog_input, AnalogChannel,
    };
    pub use crate::capabilities::{capabilities, pins_on_port, pins_with, Capabilities};
    pub use crate::interrupt::{
        digital_pin_to_interrupt, digital_pin_to_pcicr, digital_pin_to_pcicr_bit,
        digital_pin_to_pcmsk, digital_pin_to_pcmsk_bit, external_interrupt_enable, pin_change,
        PinChange, GIMSK, PCMSK0, PCMSK1, PCMSK2,
    };
    pub use crate::pins::*;
    pub use crate::port::{Port, Register, NOT_A_PORT};
    pub use crate::timer::{digital_pin_has_pwm, Timer};
    pub use ufmt::uDisplay as _;
}

//! What each pin can do, collected from the other tables.

use crate::analog::{digital_pin_to_analog_input, PIN_AIN0, PIN_AIN1};
use crate::interrupt::{digital_pin_to_interrupt, pin_change};
use crate::pins::{DigitalPin, LED_BUILTIN, NUM_DIGITAL_PINS, PIN_PC3, PIN_PC4, PIN_PC5};
use crate::port::Port;
use crate::serial::{hwserial_pins, is_usi};
use crate::timer::{digital_pin_has_pwm, is_timer_input};
use bitflags::bitflags;
use heapless::Vec;

bitflags! {
    /// Pin capability bitflags
    pub struct Capabilities: u16 {
    const PWM = 0b0000_0000_0000_0001;
    const ANALOG = 0b0000_0000_0000_0010;
    const PIN_CHANGE = 0b0000_0000_0000_0100;
    const EXTERNAL_INTERRUPT = 0b0000_0000_0000_1000;
    const SERIAL0 = 0b0000_0000_0001_0000;
    const SERIAL1 = 0b0000_0000_0010_0000;
    const USI = 0b0000_0000_0100_0000;
    const TIMER_INPUT = 0b0000_0000_1000_0000;
    const COMPARATOR = 0b0000_0001_0000_0000;
    const CRYSTAL = 0b0000_0010_0000_0000;
    const RESET = 0b0000_0100_0000_0000;
    const LED = 0b0000_1000_0000_0000;
    }
}

/// Short labels, in bit order
pub const CAPABILITY_NAMES: [(Capabilities, &str); 12] = [
    (Capabilities::PWM, "PWM"),
    (Capabilities::ANALOG, "ADC"),
    (Capabilities::PIN_CHANGE, "PCINT"),
    (Capabilities::EXTERNAL_INTERRUPT, "INT0"),
    (Capabilities::SERIAL0, "SERIAL0"),
    (Capabilities::SERIAL1, "SERIAL1"),
    (Capabilities::USI, "USI"),
    (Capabilities::TIMER_INPUT, "TIMER"),
    (Capabilities::COMPARATOR, "AIN"),
    (Capabilities::CRYSTAL, "XTAL"),
    (Capabilities::RESET, "RESET"),
    (Capabilities::LED, "LED"),
];

/// Pins as a list, at most every pin
pub type PinList = Vec<DigitalPin, NUM_DIGITAL_PINS>;

//==========================================================

pub fn capabilities(pin: DigitalPin) -> Capabilities {
    let p = pin.number();
    let mut caps = Capabilities::empty();

    caps.set(Capabilities::PWM, digital_pin_has_pwm(p));
    caps.set(Capabilities::ANALOG, digital_pin_to_analog_input(p).is_some());
    caps.set(Capabilities::PIN_CHANGE, pin_change(p).is_some());
    caps.set(Capabilities::EXTERNAL_INTERRUPT, digital_pin_to_interrupt(p).is_some());
    if let Some((tx, rx)) = hwserial_pins(0) {
        caps.set(Capabilities::SERIAL0, pin == tx || pin == rx);
    }
    if let Some((tx, rx)) = hwserial_pins(1) {
        caps.set(Capabilities::SERIAL1, pin == tx || pin == rx);
    }
    caps.set(Capabilities::USI, is_usi(pin));
    caps.set(Capabilities::TIMER_INPUT, is_timer_input(pin));
    caps.set(Capabilities::COMPARATOR, pin == PIN_AIN0 || pin == PIN_AIN1);
    caps.set(Capabilities::CRYSTAL, pin == PIN_PC4 || pin == PIN_PC5);
    caps.set(Capabilities::RESET, pin == PIN_PC3);
    caps.set(Capabilities::LED, pin == LED_BUILTIN);
    caps
}

impl DigitalPin {
    pub fn capabilities(self) -> Capabilities {
        capabilities(self)
    }
}

/// Pins of `port`, in pin number order
pub fn pins_on_port(port: Port) -> PinList {
    let mut pins = PinList::new();
    for pin in DigitalPin::all().filter(|p| p.port() == port) {
        pins.push(pin).ok();
    }
    pins
}

/// Pins having every capability in `caps`
pub fn pins_with(caps: Capabilities) -> PinList {
    let mut pins = PinList::new();
    for pin in DigitalPin::all().filter(|p| p.capabilities().contains(caps)) {
        pins.push(pin).ok();
    }
    pins
}

//==========================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pins::*;

    #[test]
    fn test_pwm_pins() {
        let pwm = pins_with(Capabilities::PWM);
        assert_eq!(&pwm[..], &[PIN_PA5, PIN_PA6, PIN_PB3, PIN_PC0]);
    }

    #[test]
    fn test_reset_pin_caps() {
        let caps = PIN_PC3.capabilities();
        assert!(caps.contains(Capabilities::RESET));
        assert!(caps.contains(Capabilities::PIN_CHANGE));
        assert!(!caps.contains(Capabilities::PWM));
        assert!(!caps.contains(Capabilities::EXTERNAL_INTERRUPT));
        assert!(!caps.contains(Capabilities::ANALOG));
    }

    #[test]
    fn test_ports() {
        assert_eq!(pins_on_port(Port::A).len(), 8);
        assert_eq!(pins_on_port(Port::B).len(), 4);
        assert_eq!(
            &pins_on_port(Port::C)[..],
            &[PIN_PC0, PIN_PC1, PIN_PC2, PIN_PC4, PIN_PC5, PIN_PC3]
        );
    }

    #[test]
    fn test_combined_query() {
        let pins = pins_with(Capabilities::PWM | Capabilities::LED);
        assert_eq!(&pins[..], &[LED_BUILTIN]);
        assert_eq!(pins_with(Capabilities::all()).len(), 0);
        assert_eq!(pins_with(Capabilities::empty()).len(), NUM_DIGITAL_PINS);
        assert_eq!(pins_with(Capabilities::ANALOG).len(), 12);
        assert_eq!(pins_with(Capabilities::PIN_CHANGE).len(), NUM_DIGITAL_PINS);
    }

    #[test]
    fn test_names_cover_all_flags() {
        let all = CAPABILITY_NAMES
            .iter()
            .fold(Capabilities::empty(), |acc, (c, _)| acc | *c);
        assert_eq!(all, Capabilities::all());
    }
}

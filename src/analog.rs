//! ADC channels, references and the analog comparator.
//!
//! Channels 0 to 11 are on pins `PA3` through `PC2`, in pin order, so a
//! channel and its pin differ by a constant 3. The remaining mux settings
//! select internal sources with no pin.
//!
//! Channel numbers and pin numbers are both small integers. Where an API
//! takes either, channels are passed "tagged" with [`adc_ch`], which sets the
//! high bit. The `A0`..`A11` constants are tagged.

use crate::pins::{DigitalPin, PIN_PA1, PIN_PA2};
use crate::port::{Register, DDRA, PINA, PORTA};

pub const NUM_ANALOG_INPUTS: u8 = 12;

/// Offset between channel number and digital pin number
const FIRST_ANALOG_PIN: u8 = 3;

const CHANNEL_TAG: u8 = 0x80;

/// Tag channel `ch` so it cannot be mistaken for a pin number
pub const fn adc_ch(ch: u8) -> u8 {
    ch | CHANNEL_TAG
}

pub const A0: u8 = adc_ch(0);
pub const A1: u8 = adc_ch(1);
pub const A2: u8 = adc_ch(2);
pub const A3: u8 = adc_ch(3);
pub const A4: u8 = adc_ch(4);
pub const A5: u8 = adc_ch(5);
pub const A6: u8 = adc_ch(6);
pub const A7: u8 = adc_ch(7);
pub const A8: u8 = adc_ch(8);
pub const A9: u8 = adc_ch(9);
pub const A10: u8 = adc_ch(10);
pub const A11: u8 = adc_ch(11);

// special channels
pub const ADC_GROUND: u8 = adc_ch(0x0C);
pub const ADC_INTERNAL1V1: u8 = adc_ch(0x0D);
pub const ADC_TEMPERATURE: u8 = adc_ch(0x0E);

/// Single ended conversions only
pub const ADC_DIFFERENTIAL: bool = false;

//==========================================================
// references, pre-shifted into REFS1:0 of ADMUX

pub const fn adc_ref(x: u8) -> u8 {
    x << 6
}

/// VCC, AREF free for other use
pub const DEFAULT: u8 = adc_ref(0x00);
/// voltage applied to AREF
pub const EXTERNAL: u8 = adc_ref(0x01);
/// internal 1.1V, AREF must not be driven
pub const INTERNAL1V1: u8 = adc_ref(0x02);
#[deprecated(note = "use INTERNAL1V1")]
pub const INTERNAL: u8 = INTERNAL1V1;

//==========================================================
// analog comparator, not used by the core

pub const ANALOG_COMP_DDR: Register = DDRA;
pub const ANALOG_COMP_PORT: Register = PORTA;
pub const ANALOG_COMP_PIN: Register = PINA;
pub const ANALOG_COMP_AIN0_BIT: u8 = 1;
pub const ANALOG_COMP_AIN1_BIT: u8 = 2;
pub const PIN_AIN0: DigitalPin = PIN_PA1;
pub const PIN_AIN1: DigitalPin = PIN_PA2;

//==========================================================

/// One ADC mux input
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct AnalogChannel(u8);

impl AnalogChannel {
    pub const GROUND: AnalogChannel = AnalogChannel(0x0C);
    pub const INTERNAL1V1: AnalogChannel = AnalogChannel(0x0D);
    pub const TEMPERATURE: AnalogChannel = AnalogChannel(0x0E);

    /// Plain channel number, `None` past the temperature sensor
    pub const fn new(ch: u8) -> Option<AnalogChannel> {
        if ch <= Self::TEMPERATURE.0 {
            Some(AnalogChannel(ch))
        } else {
            None
        }
    }

    /// Accepts plain or tagged channel numbers
    pub const fn from_tagged(ch: u8) -> Option<AnalogChannel> {
        Self::new(ch & !CHANNEL_TAG)
    }

    pub const fn number(self) -> u8 {
        self.0
    }

    pub const fn tagged(self) -> u8 {
        adc_ch(self.0)
    }

    /// Pin carrying this channel, `None` for internal sources
    pub const fn digital_pin(self) -> Option<DigitalPin> {
        if self.0 < NUM_ANALOG_INPUTS {
            DigitalPin::new(self.0 + FIRST_ANALOG_PIN)
        } else {
            None
        }
    }
}

impl From<AnalogChannel> for u8 {
    fn from(original: AnalogChannel) -> u8 {
        original.0
    }
}

impl DigitalPin {
    pub const fn analog_channel(self) -> Option<AnalogChannel> {
        digital_pin_to_analog_input(self.number())
    }
}

/// Digital pin for channel `ch`, plain or tagged
pub const fn analog_input_to_digital_pin(ch: u8) -> Option<DigitalPin> {
    let ch = if ch & CHANNEL_TAG != 0 {
        ch & !CHANNEL_TAG
    } else {
        ch
    };
    if ch < NUM_ANALOG_INPUTS {
        DigitalPin::new(ch + FIRST_ANALOG_PIN)
    } else {
        None
    }
}

/// Channel on raw pin `p`
pub const fn digital_pin_to_analog_input(p: u8) -> Option<AnalogChannel> {
    if p >= FIRST_ANALOG_PIN && p < FIRST_ANALOG_PIN + NUM_ANALOG_INPUTS {
        Some(AnalogChannel(p - FIRST_ANALOG_PIN))
    } else {
        None
    }
}

//==========================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pins::*;
    use crate::port::Port;

    #[test]
    fn test_conversions_are_inverse() {
        for p in 0..=u8::MAX {
            if let Some(ch) = digital_pin_to_analog_input(p) {
                let pin = analog_input_to_digital_pin(ch.number()).unwrap();
                assert_eq!(pin.number(), p);
            }
        }
        for ch in 0..NUM_ANALOG_INPUTS {
            let pin = analog_input_to_digital_pin(ch).unwrap();
            assert_eq!(digital_pin_to_analog_input(pin.number()).unwrap().number(), ch);
        }
    }

    #[test]
    fn test_pin_aliases() {
        let aliases = [
            PIN_A0, PIN_A1, PIN_A2, PIN_A3, PIN_A4, PIN_A5, PIN_A6, PIN_A7, PIN_A8, PIN_A9,
            PIN_A10, PIN_A11,
        ];
        let tagged = [A0, A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11];
        for (ch, (pin, t)) in aliases.iter().zip(tagged.iter()).enumerate() {
            assert_eq!(analog_input_to_digital_pin(ch as u8), Some(*pin));
            assert_eq!(analog_input_to_digital_pin(*t), Some(*pin));
            assert_eq!(pin.analog_channel().unwrap().tagged(), *t);
        }
    }

    #[test]
    fn test_edge_pins() {
        assert_eq!(digital_pin_to_analog_input(PIN_PA3.number()), AnalogChannel::new(0));
        assert_eq!(digital_pin_to_analog_input(PIN_PC2.number()), AnalogChannel::new(11));
        assert_eq!(digital_pin_to_analog_input(PIN_PA2.number()), None);
        assert_eq!(digital_pin_to_analog_input(PIN_PC4.number()), None);
        assert_eq!(PIN_PC3.analog_channel(), None);
        assert_eq!(analog_input_to_digital_pin(12), None);
        assert_eq!(analog_input_to_digital_pin(0x7F), None);
    }

    #[test]
    fn test_special_channels_have_no_pin() {
        for ch in [ADC_GROUND, ADC_INTERNAL1V1, ADC_TEMPERATURE].iter() {
            let channel = AnalogChannel::from_tagged(*ch).unwrap();
            assert_eq!(channel.digital_pin(), None);
            assert_eq!(analog_input_to_digital_pin(*ch), None);
        }
        assert_eq!(AnalogChannel::from_tagged(ADC_TEMPERATURE), Some(AnalogChannel::TEMPERATURE));
        assert_eq!(AnalogChannel::new(0x0F), None);
    }

    #[test]
    fn test_references() {
        assert_eq!(DEFAULT, 0x00);
        assert_eq!(EXTERNAL, 0x40);
        assert_eq!(INTERNAL1V1, 0x80);
    }

    #[test]
    fn test_comparator_pins() {
        assert_eq!(PIN_AIN0.port(), Port::A);
        assert_eq!(PIN_AIN0.bit(), ANALOG_COMP_AIN0_BIT);
        assert_eq!(PIN_AIN1.bit(), ANALOG_COMP_AIN1_BIT);
        assert_eq!(ANALOG_COMP_DDR, PIN_AIN0.port().mode_register());
    }
}

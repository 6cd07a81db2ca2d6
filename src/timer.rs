//! Timers and the pins they drive.
//!
//! Both timers are "typical": Timer0 is an 8-bit timer with two compare
//! outputs, Timer1 a 16-bit timer with PWM. There is no Timer2.

use crate::pins::{DigitalPin, PIN_PA3, PIN_PA4, PIN_PA5, PIN_PA6, PIN_PB3, PIN_PC0, PIN_PC1};

//==========================================================

/// Timer compare output driving a pin
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Timer {
    NotOnTimer,
    Timer0A,
    Timer0B,
    Timer1A,
    Timer1B,
}

impl Timer {
    /// The four compare outputs
    pub const OUTPUTS: [Timer; 4] = [
        Timer::Timer0A,
        Timer::Timer0B,
        Timer::Timer1A,
        Timer::Timer1B,
    ];

    pub const fn is_pwm(self) -> bool {
        !matches!(self, Timer::NotOnTimer)
    }

    /// Timer number, 0 or 1
    pub const fn index(self) -> Option<u8> {
        match self {
            Timer::NotOnTimer => None,
            Timer::Timer0A | Timer::Timer0B => Some(0),
            Timer::Timer1A | Timer::Timer1B => Some(1),
        }
    }

    /// Compare channel, `'A'` or `'B'`
    pub const fn channel(self) -> Option<char> {
        match self {
            Timer::NotOnTimer => None,
            Timer::Timer0A | Timer::Timer1A => Some('A'),
            Timer::Timer0B | Timer::Timer1B => Some('B'),
        }
    }

    /// Pin the compare output appears on
    pub const fn output_pin(self) -> Option<DigitalPin> {
        match self {
            Timer::NotOnTimer => None,
            Timer::Timer0A => Some(PIN_TIMER_OC0A),
            Timer::Timer0B => Some(PIN_TIMER_OC0B),
            Timer::Timer1A => Some(PIN_TIMER_OC1A),
            Timer::Timer1B => Some(PIN_TIMER_OC1B),
        }
    }
}

impl From<Timer> for u8 {
    fn from(original: Timer) -> u8 {
        match original {
            Timer::NotOnTimer => 0,
            Timer::Timer0A => 1,
            Timer::Timer0B => 2,
            Timer::Timer1A => 3,
            Timer::Timer1B => 4,
        }
    }
}

//==========================================================

pub const TIMER0_TYPICAL: bool = true;
pub const PIN_TIMER_OC0A: DigitalPin = PIN_PC0;
pub const PIN_TIMER_OC0B: DigitalPin = PIN_PA5;
pub const PIN_TIMER_T0: DigitalPin = PIN_PA4;

pub const TIMER1_TYPICAL: bool = true;
pub const PIN_TIMER_OC1A: DigitalPin = PIN_PB3;
pub const PIN_TIMER_OC1B: DigitalPin = PIN_PA6;
pub const PIN_TIMER_T1: DigitalPin = PIN_PA3;
pub const PIN_TIMER_ICP1: DigitalPin = PIN_PC1;

pub const TIMER2_TYPICAL: bool = false;

/// Whether raw pin number `p` can do PWM
pub const fn digital_pin_has_pwm(p: u8) -> bool {
    p == PIN_PA5.number() || p == PIN_PA6.number() || p == PIN_PB3.number() || p == PIN_PC0.number()
}

/// Timer clock and capture inputs
pub const fn is_timer_input(pin: DigitalPin) -> bool {
    pin.number() == PIN_TIMER_T0.number()
        || pin.number() == PIN_TIMER_T1.number()
        || pin.number() == PIN_TIMER_ICP1.number()
}

//==========================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pins::{digital_pin_to_timer, NUM_DIGITAL_PINS};

    #[test]
    fn test_exactly_four_pwm_pins() {
        let count = (0..=u8::MAX).filter(|p| digital_pin_has_pwm(*p)).count();
        assert_eq!(count, 4);
    }

    #[test]
    fn test_pwm_matches_timer_table() {
        for p in 0..=u8::MAX {
            assert_eq!(digital_pin_has_pwm(p), digital_pin_to_timer(p).is_pwm(), "pin {}", p);
        }
    }

    #[test]
    fn test_output_pins_invert_table() {
        for timer in Timer::OUTPUTS.iter() {
            let pin = timer.output_pin().unwrap();
            assert_eq!(pin.timer(), *timer);
        }
        assert_eq!(Timer::NotOnTimer.output_pin(), None);
    }

    #[test]
    fn test_decompose() {
        assert_eq!(Timer::Timer1B.index(), Some(1));
        assert_eq!(Timer::Timer1B.channel(), Some('B'));
        assert_eq!(Timer::Timer0A.index(), Some(0));
        assert_eq!(Timer::Timer0A.channel(), Some('A'));
        assert_eq!(Timer::NotOnTimer.index(), None);
        assert_eq!(u8::from(Timer::NotOnTimer), 0);
    }

    #[test]
    fn test_timer_inputs_not_pwm() {
        for p in 0..NUM_DIGITAL_PINS as u8 {
            let pin = DigitalPin::new(p).unwrap();
            if is_timer_input(pin) {
                assert!(!digital_pin_has_pwm(p));
            }
        }
        assert!(TIMER0_TYPICAL && TIMER1_TYPICAL && !TIMER2_TYPICAL);
    }
}

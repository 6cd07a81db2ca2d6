//! Printing pins and registers with `ufmt`.
//!
//! On the chip the writer is usually the serial port; anything implementing
//! `ufmt::uWrite` works.
//!
//! ```
//! let mut out: heapless::String<2048> = heapless::String::new();
//! attiny1634_pins::report::write_pinout(&mut out).ok();
//! assert!(out.starts_with("PORTA"));
//! ```

use crate::analog::AnalogChannel;
use crate::capabilities::{Capabilities, CAPABILITY_NAMES};
use crate::pins::DigitalPin;
use crate::port::{Port, Register};
use crate::timer::Timer;
use ufmt::{uDisplay, uWrite, uwrite, uwriteln, Formatter};

const HEX_CHARS: [char; 16] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F',
];

//==========================================================

/// `PA3`
impl uDisplay for DigitalPin {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        f.write_str(self.name())
    }
}

/// `PORTA`
impl uDisplay for Port {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        uwrite!(f, "PORT{}", self.letter())
    }
}

/// `OC0B`, `-` when not on a timer
impl uDisplay for Timer {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        match (self.index(), self.channel()) {
            (Some(index), Some(channel)) => uwrite!(f, "OC{}{}", index, channel),
            _ => f.write_str("-"),
        }
    }
}

/// `ADC3`, or the name of an internal source
impl uDisplay for AnalogChannel {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        match *self {
            AnalogChannel::GROUND => f.write_str("GND"),
            AnalogChannel::INTERNAL1V1 => f.write_str("1V1"),
            AnalogChannel::TEMPERATURE => f.write_str("TEMP"),
            ch => uwrite!(f, "ADC{}", ch.number()),
        }
    }
}

/// `0x2F`
impl uDisplay for Register {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        let b = self.addr();
        uwrite!(
            f,
            "0x{}{}",
            HEX_CHARS[((b & 0xF0) >> 4) as usize],
            HEX_CHARS[(b & 0xF) as usize]
        )
    }
}

//==========================================================

/// Space separated capability labels
pub fn write_capabilities<W>(w: &mut W, caps: Capabilities) -> Result<(), W::Error>
where
    W: uWrite + ?Sized,
{
    let mut first = true;
    for (flag, name) in CAPABILITY_NAMES.iter() {
        if caps.contains(*flag) {
            if !first {
                w.write_str(" ")?;
            }
            w.write_str(name)?;
            first = false;
        }
    }
    Ok(())
}

/// One line for a pin: number, name, package pin, timer, ADC channel and
/// capabilities
pub fn write_pin<W>(w: &mut W, pin: DigitalPin) -> Result<(), W::Error>
where
    W: uWrite + ?Sized,
{
    if pin.number() < 10 {
        w.write_str(" ")?;
    }
    uwrite!(w, "{} {} pkg ", pin.number(), pin)?;
    if pin.package_pin() < 10 {
        w.write_str(" ")?;
    }
    uwrite!(w, "{} {} ", pin.package_pin(), pin.timer())?;
    match pin.analog_channel() {
        Some(ch) => uwrite!(w, "{} ", ch)?,
        None => w.write_str("- ")?,
    }
    write_capabilities(w, pin.capabilities())?;
    uwriteln!(w, "\r")
}

/// Register block of a port
pub fn write_port<W>(w: &mut W, port: Port) -> Result<(), W::Error>
where
    W: uWrite + ?Sized,
{
    uwriteln!(
        w,
        "{} DDR={} PORT={} PIN={} PUE={}\r",
        port,
        port.mode_register(),
        port.output_register(),
        port.input_register(),
        port.pullup_register()
    )
}

/// Whole pin map: every port, then every pin
pub fn write_pinout<W>(w: &mut W) -> Result<(), W::Error>
where
    W: uWrite + ?Sized,
{
    for port in Port::ALL.iter() {
        write_port(w, *port)?;
    }
    for pin in DigitalPin::all() {
        write_pin(w, pin)?;
    }
    Ok(())
}

//==========================================================

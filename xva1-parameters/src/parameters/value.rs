//! Register encoding, value stepping and value labels.
//!
//! The synth exposes byte-wide registers. Most parameters live in one
//! register per sub-index; a [`PerformanceCtrl`](ParameterType::PerformanceCtrl)
//! spans two 7-bit registers that combine into a 14-bit value:
//!
//! ```text
//! combined = (msb << 7) + lsb        msb = combined >> 7
//!                                    lsb = combined & 0x7F
//! ```

use core::fmt::Write;

use heapless::String;

use super::parameter::{ParameterType, SynthParameter, PERFORMANCE_MAX, REGISTER_MAX};

/// Maximum number of characters in a value label.
pub const VALUE_LABEL_CAPACITY: usize = 24;

/// Text drawn for a parameter value.
pub type ValueLabel = String<VALUE_LABEL_CAPACITY>;

/// Offset subtracted from [`Center128`](ParameterType::Center128) values.
pub const CENTER_OFFSET: i32 = 128;

/// Register-level access to the synth engine.
///
/// Reads and writes are synchronous and assumed to succeed; an unknown
/// register number is a caller bug, not a reported error.
pub trait SynthRegisters {
    /// Current value of `register`.
    fn get_parameter(&mut self, register: u16) -> u8;
    /// Store `value` in `register`.
    fn set_parameter(&mut self, register: u16, value: u8);
}

/// Decode the current value of `param` at `sub_index`.
///
/// Returns `None` if the parameter has no register for `sub_index` (or a
/// performance control lacks its register pair).
pub fn read_value<S>(param: &SynthParameter<'_>, sub_index: usize, synth: &mut S) -> Option<i32>
where
    S: SynthRegisters + ?Sized,
{
    match param.param_type {
        ParameterType::PerformanceCtrl => {
            let (msb, lsb) = param.performance_pair()?;
            let msb = i32::from(synth.get_parameter(msb));
            let lsb = i32::from(synth.get_parameter(lsb));
            Some((msb << 7) + lsb)
        }
        _ => {
            let register = param.register(sub_index)?;
            Some(i32::from(synth.get_parameter(register)))
        }
    }
}

/// Encode `value` into the register(s) of `param` at `sub_index`.
///
/// Returns `false` (and writes nothing) if the register is missing.
pub fn write_value<S>(param: &SynthParameter<'_>, sub_index: usize, value: i32, synth: &mut S) -> bool
where
    S: SynthRegisters + ?Sized,
{
    match param.param_type {
        ParameterType::PerformanceCtrl => {
            let Some((msb_register, lsb_register)) = param.performance_pair() else {
                return false;
            };
            let value = value.clamp(0, PERFORMANCE_MAX);
            synth.set_parameter(msb_register, (value >> 7) as u8);
            synth.set_parameter(lsb_register, (value & 0x7F) as u8);
            true
        }
        _ => {
            let Some(register) = param.register(sub_index) else {
                return false;
            };
            synth.set_parameter(register, value.clamp(0, REGISTER_MAX) as u8);
            true
        }
    }
}

/// Value after turning an encoder `magnitude` detents from `current`.
///
/// Nothing moves unless `current` is strictly below `max` (clockwise) or
/// strictly above `min` (counter-clockwise). The candidate is clamped into
/// `[min, max]`; `None` means no write is due.
///
/// ```
/// use xva1::parameters::{value::step_value, SynthParameter};
///
/// let level = SynthParameter::new("Level");
/// assert_eq!(step_value(&level, 120, true, 10), Some(127));
/// assert_eq!(step_value(&level, 127, true, 1), None);
/// assert_eq!(step_value(&level, 3, false, 5), Some(0));
/// ```
pub fn step_value(param: &SynthParameter<'_>, current: i32, clockwise: bool, magnitude: u16) -> Option<i32> {
    let magnitude = i32::from(magnitude);
    let candidate = if clockwise {
        if current >= param.max {
            return None;
        }
        current.saturating_add(magnitude)
    } else {
        if current <= param.min {
            return None;
        }
        current.saturating_sub(magnitude)
    };

    let new_value = candidate.max(param.min).min(param.max);
    (new_value != current).then_some(new_value)
}

/// Read, step and write back one parameter.
///
/// Returns the value written, or `None` if nothing changed.
pub fn apply_change<S>(
    param: &SynthParameter<'_>,
    sub_index: usize,
    clockwise: bool,
    magnitude: u16,
    synth: &mut S,
) -> Option<i32>
where
    S: SynthRegisters + ?Sized,
{
    let current = read_value(param, sub_index, synth)?;
    let new_value = step_value(param, current, clockwise, magnitude)?;
    write_value(param, sub_index, new_value, synth).then_some(new_value)
}

/// Label for a decoded value.
///
/// * [`Center128`](ParameterType::Center128): `value - 128`, with a `+`
///   prefix when positive (`0` stays `"0"`).
/// * A description at index `value` (the offset value for `Center128`)
///   replaces the number.
/// * Otherwise the decimal value.
///
/// ```
/// use xva1::parameters::{format_value, SynthParameter};
///
/// let pan = SynthParameter::new("Pan").center_128().range(0, 255);
/// assert_eq!(format_value(&pan, 128), "0");
/// assert_eq!(format_value(&pan, 140), "+12");
/// assert_eq!(format_value(&pan, 100), "-28");
/// ```
pub fn format_value(param: &SynthParameter<'_>, value: i32) -> ValueLabel {
    let mut label = ValueLabel::new();

    let shown = match param.param_type {
        ParameterType::Center128 => {
            let offset = value - CENTER_OFFSET;
            if offset > 0 {
                write!(label, "+{}", offset).ok();
                return label;
            }
            offset
        }
        _ => value,
    };

    match param.description(shown) {
        Some(description) => push_truncated(&mut label, description),
        None => {
            write!(label, "{}", shown).ok();
        }
    }
    label
}

/// Decode and format `param` at `sub_index`; empty if it cannot be read.
pub fn read_label<S>(param: &SynthParameter<'_>, sub_index: usize, synth: &mut S) -> ValueLabel
where
    S: SynthRegisters + ?Sized,
{
    read_value(param, sub_index, synth)
        .map(|value| format_value(param, value))
        .unwrap_or_default()
}

/// Copy as many whole characters of `text` as fit.
fn push_truncated(label: &mut ValueLabel, text: &str) {
    for ch in text.chars() {
        if label.push(ch).is_err() {
            break;
        }
    }
}

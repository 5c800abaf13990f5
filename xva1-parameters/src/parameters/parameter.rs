use super::error::ParameterError;

/// Largest value a single synth register holds.
pub const REGISTER_MAX: i32 = 255;

/// Largest combined value of a 14-bit performance control.
pub const PERFORMANCE_MAX: i32 = (1 << 14) - 1;

/// How a parameter's registers are decoded and how its value is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParameterType {
    /// One register per sub-index, shown as its decimal value.
    #[default]
    Standard,
    /// Two 7-bit registers (MSB, LSB) forming one 14-bit value.
    PerformanceCtrl,
    /// One register, shown signed around a centre of 128 (`140` → `+12`).
    Center128,
}

/// Immutable description of one editable synth parameter.
///
/// Built with `const` builder methods so a whole catalog can live in a
/// `static`:
///
/// ```
/// use xva1::parameters::{ParameterType, SynthParameter};
///
/// static CUTOFF: SynthParameter<'static> = SynthParameter::new("Cutoff").registers(&[72]);
/// static PAN: SynthParameter<'static> = SynthParameter::new("Pan")
///     .center_128()
///     .range(0, 255)
///     .registers(&[84]);
/// static MOD: SynthParameter<'static> = SynthParameter::new("Mod").performance_control(&[400, 401]);
///
/// assert_eq!(CUTOFF.max, 127);
/// assert_eq!(PAN.param_type, ParameterType::Center128);
/// assert_eq!(MOD.max, 16383);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SynthParameter<'a> {
    /// Label drawn above the value.
    pub name: &'a str,
    /// Encoding and display rule.
    pub param_type: ParameterType,
    /// Minimum allowed value (inclusive). Default: 0.
    pub min: i32,
    /// Maximum allowed value (inclusive). Default: 127.
    pub max: i32,
    /// Register numbers indexed by sub-index. For a performance control
    /// this is the `[MSB, LSB]` pair.
    pub registers: &'a [u16],
    /// Optional value labels; index `v` replaces the number `v`.
    pub descriptions: &'a [&'a str],
}

impl<'a> SynthParameter<'a> {
    /// A [`Standard`](ParameterType::Standard) parameter with range `0..=127`
    /// and no registers yet.
    pub const fn new(name: &'a str) -> Self {
        Self {
            name,
            param_type: ParameterType::Standard,
            min: 0,
            max: 127,
            registers: &[],
            descriptions: &[],
        }
    }

    pub const fn range(self, min: i32, max: i32) -> Self {
        Self { min, max, ..self }
    }

    /// Registers indexed by sub-index (one per virtual subsection).
    pub const fn registers(self, registers: &'a [u16]) -> Self {
        Self { registers, ..self }
    }

    pub const fn descriptions(self, descriptions: &'a [&'a str]) -> Self {
        Self {
            descriptions,
            ..self
        }
    }

    pub const fn center_128(self) -> Self {
        Self {
            param_type: ParameterType::Center128,
            ..self
        }
    }

    /// Turn this into a 14-bit performance control over the `[msb, lsb]`
    /// register pair, with the full `0..=16383` range.
    pub const fn performance_control(self, pair: &'a [u16; 2]) -> Self {
        Self {
            param_type: ParameterType::PerformanceCtrl,
            min: 0,
            max: PERFORMANCE_MAX,
            registers: pair,
            ..self
        }
    }

    /// Register addressed by `sub_index`, if this parameter has one.
    ///
    /// Performance controls ignore `sub_index`; use
    /// [`performance_pair`](Self::performance_pair) instead.
    pub fn register(&self, sub_index: usize) -> Option<u16> {
        self.registers.get(sub_index).copied()
    }

    /// The `(msb, lsb)` registers of a performance control.
    pub fn performance_pair(&self) -> Option<(u16, u16)> {
        match (self.param_type, self.registers) {
            (ParameterType::PerformanceCtrl, [msb, lsb]) => Some((*msb, *lsb)),
            _ => None,
        }
    }

    /// Description replacing the decoded value `value`, if there is one.
    pub fn description(&self, value: i32) -> Option<&'a str> {
        usize::try_from(value)
            .ok()
            .and_then(|index| self.descriptions.get(index))
            .copied()
    }

    /// Check the catalog invariants for a parameter used by a section with
    /// `fan_out` subsections sharing its register list.
    pub fn validate(&self, fan_out: usize) -> Result<(), ParameterError> {
        if self.min > self.max {
            return Err(ParameterError::InvertedRange);
        }

        let upper = match self.param_type {
            ParameterType::PerformanceCtrl => PERFORMANCE_MAX,
            _ => REGISTER_MAX,
        };
        if self.min < 0 || self.max > upper {
            return Err(ParameterError::RangeOutOfBounds);
        }

        match self.param_type {
            ParameterType::PerformanceCtrl if self.registers.len() != 2 => {
                Err(ParameterError::PerformanceRegisterPair)
            }
            ParameterType::PerformanceCtrl => Ok(()),
            _ if self.registers.len() != fan_out.max(1) => Err(ParameterError::RegisterCount),
            _ => Ok(()),
        }
    }
}

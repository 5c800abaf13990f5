use core::fmt;

/// Errors found when validating a parameter catalog at startup.
///
/// These describe programming errors in the static section tree; the
/// navigation code never produces them at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParameterError {
    /// `min` is greater than `max`.
    InvertedRange,
    /// `min`/`max` fall outside what the parameter type can encode.
    RangeOutOfBounds,
    /// A performance control does not have exactly two registers.
    PerformanceRegisterPair,
    /// Register count differs from the owning section's subsection fan-out.
    RegisterCount,
}

impl fmt::Display for ParameterError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParameterError::InvertedRange => write!(f, "min is greater than max"),
            ParameterError::RangeOutOfBounds => write!(f, "range exceeds the encodable values"),
            ParameterError::PerformanceRegisterPair => {
                write!(f, "performance control needs an MSB/LSB register pair")
            }
            ParameterError::RegisterCount => write!(f, "register count does not match subsections"),
        }
    }
}

/// Rejected navigation requests.
///
/// The controller swallows these (a rejected move is simply not made);
/// they exist so the pure navigation layer can report *why*.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NavigationError {
    /// No section is selected.
    NoActiveSection,
    /// Page index is not below the effective section's page count.
    InvalidPageIndex,
    /// Subsection index is not below the section's subsection count.
    InvalidSubSectionIndex,
    /// Slot index is not below [`SLOTS_PER_PAGE`](super::SLOTS_PER_PAGE).
    InvalidSlotIndex,
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NavigationError::NoActiveSection => write!(f, "no active section"),
            NavigationError::InvalidPageIndex => write!(f, "page index out of range"),
            NavigationError::InvalidSubSectionIndex => write!(f, "subsection index out of range"),
            NavigationError::InvalidSlotIndex => write!(f, "slot index out of range"),
        }
    }
}

//! Synthesizer parameter catalog with page-based navigation.
//!
//! This module describes the parameters the front panel can edit and keeps
//! track of which of them are currently mapped onto the physical encoders.
//!
//! # Architecture
//!
//! A [`Section`] is a named group of [`SynthParameter`]s. A section may
//! own child sections, or reuse its own parameter list for several
//! "virtual" subsections that only differ in which synth register each
//! parameter addresses:
//!
//! ```text
//! Section "Envelopes" (virtual: "ENV1" "ENV2" "ENV3")
//!   Attack  registers [ 8, 20, 32]   ← sub-index picks the column
//!   Decay   registers [ 9, 21, 33]
//!
//! Section "Oscillators" (real)
//!   ├─ Section "OSC 1"   Wave, Level, Detune, ...
//!   └─ Section "OSC 2"   Wave, Level, Detune, ...
//! ```
//!
//! Parameters are shown **eight at a time**, two per small display on the
//! four-display bank:
//!
//! ```text
//! Page 1 of a 10-parameter section:
//!   display 0: [slot 0 = #8 ] [slot 1 = #9 ]
//!   display 1: [slot 2 = -- ] [slot 3 = -- ]
//!   display 2: [slot 4 = -- ] [slot 5 = -- ]
//!   display 3: [slot 6 = -- ] [slot 7 = -- ]
//! ```
//!
//! [`NavigationState`] owns the current section, page, subsection and the
//! eight visible slots, and recomputes the slots from scratch on every
//! change.
//!
//! # `no_std` Compatibility
//!
//! Nothing here allocates. The section tree is borrowed (`&'a`) from
//! static configuration and value labels use [`heapless::String`].

mod error;
pub mod navigation;
mod parameter;
mod section;
pub mod value;

pub use error::{NavigationError, ParameterError};
pub use navigation::{NavigationState, PageDirection, Slot};
pub use parameter::{ParameterType, SynthParameter};
pub use section::{Section, SubSections};
pub use value::{format_value, SynthRegisters, ValueLabel};

/// Number of parameter slots visible at once (one per parameter encoder).
pub const SLOTS_PER_PAGE: usize = 8;

/// Number of small displays in the display bank.
pub const DISPLAYS: usize = 4;

/// Number of slots sharing one small display.
pub const SLOTS_PER_DISPLAY: usize = SLOTS_PER_PAGE / DISPLAYS;

/// Display channel that shows `slot`.
///
/// Slots `2k` and `2k + 1` share display `k`.
pub const fn display_for_slot(slot: usize) -> usize {
    slot / SLOTS_PER_DISPLAY
}

/// The `(upper, lower)` slot pair drawn on display `channel`.
pub const fn slots_for_display(channel: usize) -> (usize, usize) {
    let first = channel * SLOTS_PER_DISPLAY;
    (first, first + 1)
}

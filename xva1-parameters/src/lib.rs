//! Parameter model and page navigation for the XVA1 synthesizer front panel.
//!
//! This crate is hardware-free: it describes *what* the panel edits
//! ([`SynthParameter`](parameters::SynthParameter) and
//! [`Section`](parameters::Section)), *which* parameters are currently on
//! the encoders ([`NavigationState`](parameters::NavigationState)) and *how*
//! register values are decoded, stepped and formatted
//! ([`parameters::value`]). Drawing and the event entry points live in the
//! `xva1-front-panel` crate.
//!
//! # Crate Features
//!
//! - **`defmt`**: [`defmt::Format`] derives on the public enums.

#![cfg_attr(not(test), no_std)]

pub mod parameters;

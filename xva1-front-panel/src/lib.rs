//! Front-panel navigation and rendering for the XVA1 synthesizer.
//!
//! The panel has eight parameter encoders, one subsection encoder, two page
//! buttons with LEDs, four small OLED displays behind an I2C multiplexer and
//! a larger colour status display. [`ParameterController`] maps the active
//! [`Section`](xva1::parameters::Section) onto that hardware:
//!
//! ```text
//!   encoder events ──▶ ParameterController ──▶ SynthRegisters (get/set)
//!   page buttons  ──▶        │
//!                            ▼
//!                       FrontPanel ──▶ Multiplexer ─▶ SmallDisplay ×4
//!                                  └─▶ StatusDisplay
//! ```
//!
//! Hardware is reached only through the traits in [`hal`]. [`OledDriver`],
//! [`Tca9548a`] and [`GraphicsStatusDisplay`] implement them on top of
//! `embedded-hal` 1.0 and `embedded-graphics`.
//!
//! # Quick Start
//!
//! ```ignore
//! use xva1_front_panel::{
//!     FrontPanel, GraphicsStatusDisplay, OledDriver, PanelConfig, ParameterController, Tca9548a,
//! };
//!
//! let mut panel = FrontPanel::new(
//!     Tca9548a::new(mux_i2c, xva1_front_panel::mux::DEFAULT_ADDRESS),
//!     OledDriver::new(oled_i2c, 0x3C),
//!     GraphicsStatusDisplay::new(tft),
//!     PanelConfig::default(),
//! );
//! panel.init_displays(|oled| oled.init())?;
//!
//! let mut controller = ParameterController::new(synth, panel, up_button, down_button)
//!     .with_default_section(&catalog::VOICE);
//! controller.set_default_section();
//!
//! // In the polling loop:
//! controller.on_encoder_rotated(id, clockwise, steps);
//! ```
//!
//! # Crate Features
//!
//! - **`defmt`**: structured logging via [`defmt`](https://docs.rs/defmt).

#![cfg_attr(not(test), no_std)]

pub mod controller;
pub mod driver;
pub mod error;
mod font;
pub mod hal;
pub mod layout;
pub mod mux;
pub mod status;

#[cfg(test)]
mod testing;

// ── Re-exports for convenience ───────────────────────────────────────────

pub use controller::{ParameterController, SUB_SECTION_ENCODER};
pub use driver::OledDriver;
pub use error::{MuxError, OledError};
pub use hal::{LedButton, Multiplexer, SmallDisplay, StatusDisplay, TextBounds};
pub use layout::{FrontPanel, PanelConfig, SlotText};
pub use mux::Tca9548a;
pub use status::GraphicsStatusDisplay;

//! Panel layout configuration and the render adapter.
//!
//! [`FrontPanel`] turns "show these two label/value pairs on display `k`"
//! and "list these subsection titles" into draw calls on the multiplexed
//! small displays and the status display. It knows nothing about
//! sections or registers; the controller hands it ready-made text.

use embedded_graphics::pixelcolor::{BinaryColor, Rgb565};
use embedded_graphics::prelude::*;
use xva1::parameters::{ValueLabel, DISPLAYS};

use crate::hal::{Multiplexer, SmallDisplay, StatusDisplay};

// ── PanelConfig ──────────────────────────────────────────────────────────

/// Geometry, text scales and colours of the panel.
///
/// All layout numbers live here; there are **no** module-level layout
/// constants. [`PanelConfig::default()`] matches the 128×64 parameter
/// displays and the 320×240 status display of the XVA1 panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelConfig {
    // ── Small displays ───────────────────────────────────────────────
    /// X coordinate strings are centred on. Default: 64.
    pub center_x: i32,
    /// Y of the upper label. Default: 0.
    pub upper_label_y: i32,
    /// Y of the upper value. Default: 12.
    pub upper_value_y: i32,
    /// Y of the rule between the two blocks. Default: 30.
    pub rule_y: i32,
    /// Y of the lower label. Default: 34.
    pub lower_label_y: i32,
    /// Y of the lower value. Default: 47.
    pub lower_value_y: i32,
    /// Text scale of labels. Default: 1.
    pub label_scale: u8,
    /// Text scale of values. Default: 2.
    pub value_scale: u8,
    /// Scale used when a string does not fit at its requested scale. Default: 1.
    pub fallback_scale: u8,

    // ── Status display ───────────────────────────────────────────────
    /// Font id passed to the status display. Default: 1.
    pub status_font: u8,
    /// Text scale of the section header and titles. Default: 2.
    pub status_scale: u8,
    /// X of the selection marker. Default: 0.
    pub marker_x: i32,
    /// X of subsection titles. Default: 20.
    pub title_x: i32,
    /// Y of the first subsection title. Default: 40.
    pub first_title_y: i32,
    /// Vertical distance between subsection titles. Default: 20.
    pub title_line_height: i32,
    pub background: Rgb565,
    /// Section header colour. Default: orange.
    pub header_color: Rgb565,
    /// Unselected subsection title colour. Default: grey.
    pub title_color: Rgb565,
    /// Selected subsection title colour. Default: white.
    pub selected_title_color: Rgb565,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            center_x: 64,
            upper_label_y: 0,
            upper_value_y: 12,
            rule_y: 30,
            lower_label_y: 34,
            lower_value_y: 47,
            label_scale: 1,
            value_scale: 2,
            fallback_scale: 1,
            status_font: 1,
            status_scale: 2,
            marker_x: 0,
            title_x: 20,
            first_title_y: 40,
            title_line_height: 20,
            background: Rgb565::BLACK,
            header_color: Rgb565::new(31, 40, 0),
            title_color: Rgb565::new(11, 23, 11),
            selected_title_color: Rgb565::WHITE,
        }
    }
}

impl PanelConfig {
    /// Y coordinate of subsection title line `index`.
    pub fn title_y(&self, index: usize) -> i32 {
        self.first_title_y + self.title_line_height * index as i32
    }
}

// ── SlotText ─────────────────────────────────────────────────────────────

/// Label and value text for one slot; both empty for an empty slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotText<'a> {
    pub label: &'a str,
    pub value: ValueLabel,
}

impl SlotText<'_> {
    pub fn is_empty(&self) -> bool {
        self.label.is_empty() && self.value.is_empty()
    }
}

// ── FrontPanel ───────────────────────────────────────────────────────────

/// Render adapter owning the display hardware.
///
/// # Layout of one small display
///
/// ```text
/// ┌────────────────────────────┐
/// │        Upper label         │  ← upper_label_y (label_scale)
/// │        UPPER VALUE         │  ← upper_value_y (value_scale)
/// ├────────────────────────────┤  ← rule_y (only if any text)
/// │        Lower label         │  ← lower_label_y
/// │        LOWER VALUE         │  ← lower_value_y
/// └────────────────────────────┘
/// ```
pub struct FrontPanel<M, D, T> {
    mux: M,
    display: D,
    status: T,
    config: PanelConfig,
}

impl<M, D, T> FrontPanel<M, D, T>
where
    M: Multiplexer,
    D: SmallDisplay,
    T: StatusDisplay,
{
    pub fn new(mux: M, display: D, status: T, config: PanelConfig) -> Self {
        Self {
            mux,
            display,
            status,
            config,
        }
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    pub fn multiplexer(&self) -> &M {
        &self.mux
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn status(&self) -> &T {
        &self.status
    }

    /// Run `init` on the shared small display once per channel, with that
    /// channel selected.
    ///
    /// Stops at the first error; later displays stay uninitialised.
    pub fn init_displays<E>(
        &mut self,
        mut init: impl FnMut(&mut D) -> Result<(), E>,
    ) -> Result<(), E> {
        for channel in 0..DISPLAYS {
            self.mux.select_channel(channel);
            init(&mut self.display)?;
        }
        Ok(())
    }

    /// Draw two label/value blocks on display `channel`.
    pub fn render_slot_pair(&mut self, channel: usize, upper: &SlotText<'_>, lower: &SlotText<'_>) {
        let config = self.config;

        self.mux.select_channel(channel);
        self.display.clear_display();
        self.display.set_text_color(BinaryColor::On);

        self.display.set_text_size(config.label_scale);
        self.draw_centered_text(upper.label, config.upper_label_y);
        self.display.set_text_size(config.value_scale);
        self.draw_centered_text(&upper.value, config.upper_value_y);

        if !upper.is_empty() || !lower.is_empty() {
            let right = self.display.width() as i32 - 1;
            self.display.draw_line(
                Point::new(0, config.rule_y),
                Point::new(right, config.rule_y),
                BinaryColor::On,
            );
        }

        self.display.set_text_size(config.label_scale);
        self.draw_centered_text(lower.label, config.lower_label_y);
        self.display.set_text_size(config.value_scale);
        self.draw_centered_text(&lower.value, config.lower_value_y);

        self.display.present();
    }

    /// Clear the status display and list `titles` under the section `name`.
    pub fn render_subsection_titles<'t>(&mut self, name: &str, titles: impl IntoIterator<Item = &'t str>) {
        let config = self.config;

        self.status.fill_screen(config.background);
        self.status.set_cursor(0, 0, config.status_font);
        self.status.set_text_color(config.header_color, config.background);
        self.status.set_text_size(config.status_scale);
        self.status.println(name);

        for (line, title) in titles.into_iter().enumerate() {
            self.status.set_text_color(config.title_color, config.background);
            self.status
                .draw_string(title, config.title_x, config.title_y(line), config.status_font);
        }
    }

    /// Redraw title line `index` with (`>`) or without the selection marker.
    pub fn highlight_subsection(&mut self, index: usize, title: &str, selected: bool) {
        let config = self.config;
        let (marker, color) = if selected {
            (">", config.selected_title_color)
        } else {
            (" ", config.title_color)
        };
        let y = config.title_y(index);

        self.status.set_text_color(color, config.background);
        self.status.set_text_size(config.status_scale);
        self.status.draw_string(marker, config.marker_x, y, config.status_font);
        self.status.draw_string(title, config.title_x, y, config.status_font);
    }

    /// Print `text` centred on `center_x` at `y`.
    ///
    /// If the text overflows to the left edge at the current scale, it is
    /// re-measured at the fallback scale and shifted down by half its
    /// height.
    fn draw_centered_text(&mut self, text: &str, y: i32) {
        let center_x = self.config.center_x;
        let bounds = self.display.measure_text(text);
        let half_width = (bounds.width / 2) as i32;

        if center_x - half_width <= 0 {
            self.display.set_text_size(self.config.fallback_scale);
            let bounds = self.display.measure_text(text);
            let half_width = (bounds.width / 2) as i32;
            let half_height = (bounds.height / 2) as i32;
            self.display.set_cursor(center_x - half_width, y + half_height);
        } else {
            self.display.set_cursor(center_x - half_width, y);
        }
        self.display.print(text);
    }
}

// ── Tests ────────────────────────────────────────────────────────────────

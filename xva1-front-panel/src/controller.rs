//! Navigation engine: turns panel events into page, subsection and value
//! changes and keeps the displays in sync.
//!
//! [`ParameterController`] owns every piece of hardware it talks to and a
//! [`NavigationState`]. Each public entry point runs to completion and
//! leaves the displays showing the current state. Invalid requests are
//! dropped with a log line, never reported to the caller.

use core::ptr;

use xva1::parameters::value::{apply_change, read_label};
use xva1::parameters::{
    display_for_slot, slots_for_display, NavigationState, PageDirection, Section, Slot,
    SynthRegisters, ValueLabel, DISPLAYS,
};

use crate::hal::{LedButton, Multiplexer, SmallDisplay, StatusDisplay};
use crate::layout::{FrontPanel, SlotText};

/// Encoder that moves through subsections; encoders `1..=8` edit slots `0..=7`.
pub const SUB_SECTION_ENCODER: usize = 0;

/// Front-panel navigation engine.
///
/// # Type Parameters
/// * `S`: synth register access
/// * `M`, `D`, `T`: multiplexer, small display and status display of the [`FrontPanel`]
/// * `B`: the two page buttons with indicator LEDs
pub struct ParameterController<'a, S, M, D, T, B> {
    synth: S,
    panel: FrontPanel<M, D, T>,
    up_button: B,
    down_button: B,
    default_section: Option<&'a Section<'a>>,
    nav: NavigationState<'a>,
}

impl<'a, S, M, D, T, B> ParameterController<'a, S, M, D, T, B>
where
    S: SynthRegisters,
    M: Multiplexer,
    D: SmallDisplay,
    T: StatusDisplay,
    B: LedButton,
{
    /// Controller with no active section and no default section.
    ///
    /// Nothing is drawn until the first section change.
    pub fn new(synth: S, panel: FrontPanel<M, D, T>, up_button: B, down_button: B) -> Self {
        Self {
            synth,
            panel,
            up_button,
            down_button,
            default_section: None,
            nav: NavigationState::new(),
        }
    }

    /// Section shown by [`set_default_section`](Self::set_default_section).
    ///
    /// Entering it does not redraw the subsection list on the status display.
    pub fn with_default_section(mut self, section: &'a Section<'a>) -> Self {
        self.default_section = Some(section);
        self
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn state(&self) -> &NavigationState<'a> {
        &self.nav
    }

    pub fn panel(&self) -> &FrontPanel<M, D, T> {
        &self.panel
    }

    pub fn synth(&self) -> &S {
        &self.synth
    }

    /// The `(page up, page down)` buttons.
    pub fn page_buttons(&self) -> (&B, &B) {
        (&self.up_button, &self.down_button)
    }

    // ── Section, subsection and page ─────────────────────────────────

    /// Return to the default section (or to no section if none is set).
    pub fn set_default_section(&mut self) {
        self.set_section(self.default_section);
    }

    /// Make `section` active on page 0, subsection 0.
    ///
    /// `None` switches the page LEDs off and blanks all small displays.
    pub fn set_section(&mut self, section: Option<&'a Section<'a>>) {
        #[cfg(feature = "defmt")]
        defmt::info!(
            "Setting active section: {}",
            section.map_or("null", |section| section.name)
        );

        self.nav.select_section(section);

        let Some(section) = section else {
            self.up_button.set_led(false);
            self.down_button.set_led(false);
            self.render_all_slots();
            return;
        };

        if !self.is_default(section) {
            self.render_sub_section_titles(section);
        }
        if section.number_of_sub_sections() > 0 {
            self.highlight_sub_section(true);
        }
        self.set_active_page(0);
    }

    /// Show page `page` of the effective section and redraw every slot.
    ///
    /// Ignored without an active section or if the page does not exist.
    pub fn set_active_page(&mut self, page: usize) {
        if self.nav.section().is_none() {
            return;
        }

        let previous = self.nav.current_page();
        if let Err(_e) = self.nav.set_page(page) {
            #[cfg(feature = "defmt")]
            defmt::debug!("Page {} rejected: {}", page, _e);
            return;
        }
        if page != previous {
            #[cfg(feature = "defmt")]
            defmt::info!("Setting active page: {}", page);
        }

        self.update_page_indicators();
        self.render_all_slots();
    }

    /// Move the highlight to subsection `sub_section` and refresh the
    /// current page against it.
    pub fn set_active_sub_section(&mut self, sub_section: usize) {
        let Some(section) = self.nav.section() else {
            return;
        };
        if sub_section >= section.number_of_sub_sections() {
            #[cfg(feature = "defmt")]
            defmt::debug!("Subsection {} out of range", sub_section);
            return;
        }

        self.highlight_sub_section(false);
        if let Err(_e) = self.nav.set_sub_section(sub_section) {
            #[cfg(feature = "defmt")]
            defmt::warn!("Subsection {} rejected: {}", sub_section, _e);
            return;
        }
        self.highlight_sub_section(true);
        self.set_active_page(self.nav.current_page());
    }

    // ── Panel events ─────────────────────────────────────────────────

    /// Page button tap.
    pub fn on_page_button(&mut self, direction: PageDirection) {
        if let Some(page) = self.nav.page_target(direction) {
            self.set_active_page(page);
        }
    }

    /// Encoder turn. Returns whether the event was consumed.
    ///
    /// The subsection encoder always consumes its events while a section
    /// is active, even when there is nothing to move to. A slot encoder
    /// consumes the event only if its slot holds a parameter; the value is
    /// stepped and the display showing that slot is redrawn.
    pub fn on_encoder_rotated(&mut self, encoder_id: usize, clockwise: bool, magnitude: u16) -> bool {
        if self.nav.section().is_none() {
            return false;
        }

        if encoder_id == SUB_SECTION_ENCODER {
            if let Some(target) = self.nav.sub_section_target(clockwise) {
                self.set_active_sub_section(target);
            }
            return true;
        }

        let slot = encoder_id - 1;
        let index = match self.nav.slot(slot) {
            Ok(Some(index)) => index,
            Ok(None) => {
                #[cfg(feature = "defmt")]
                defmt::debug!("Encoder {} has no parameter", encoder_id);
                return false;
            }
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("Encoder {}: {}", encoder_id, _e);
                return false;
            }
        };

        self.apply_value_change(index, clockwise, magnitude);
        self.render_display(display_for_slot(slot));
        true
    }

    /// Encoder push button. Not bound to anything; never consumed.
    pub fn on_encoder_button(&mut self, _encoder_id: usize, _released: bool) -> bool {
        #[cfg(feature = "defmt")]
        defmt::debug!("Encoder button {} ignored", _encoder_id);
        false
    }

    // ── Rendering ────────────────────────────────────────────────────

    /// Current value label of the parameter in `slot`; empty for an empty slot.
    pub fn display_value(&mut self, slot: Slot) -> ValueLabel {
        let sub_index = self.nav.sub_index();
        match slot.and_then(|index| self.nav.parameter(index)) {
            Some(param) => read_label(param, sub_index, &mut self.synth),
            None => ValueLabel::new(),
        }
    }

    /// Redraw all four small displays from the current slots.
    pub fn render_all_slots(&mut self) {
        for channel in 0..DISPLAYS {
            self.render_display(channel);
        }
    }

    // ── Private helpers ──────────────────────────────────────────────

    fn is_default(&self, section: &Section<'a>) -> bool {
        self.default_section
            .is_some_and(|default| ptr::eq(default, section))
    }

    fn apply_value_change(&mut self, index: usize, clockwise: bool, magnitude: u16) {
        let Some(param) = self.nav.parameter(index) else {
            return;
        };
        let sub_index = self.nav.sub_index();

        if let Some(_value) = apply_change(param, sub_index, clockwise, magnitude, &mut self.synth) {
            #[cfg(feature = "defmt")]
            defmt::debug!("{} = {}", param.name, _value);
        }
    }

    fn render_display(&mut self, channel: usize) {
        let (upper, lower) = slots_for_display(channel);
        let upper = self.slot_text(upper);
        let lower = self.slot_text(lower);
        self.panel.render_slot_pair(channel, &upper, &lower);
    }

    fn slot_text(&mut self, slot: usize) -> SlotText<'a> {
        let slot = self.nav.slot(slot).ok().flatten();
        let label = slot
            .and_then(|index| self.nav.parameter(index))
            .map_or("", |param| param.name);

        SlotText {
            label,
            value: self.display_value(slot),
        }
    }

    fn update_page_indicators(&mut self) {
        let (up, down) = self.nav.page_indicators();
        self.up_button.set_led(up);
        self.down_button.set_led(down);
    }

    fn render_sub_section_titles(&mut self, section: &'a Section<'a>) {
        let count = section.number_of_sub_sections();

        #[cfg(feature = "defmt")]
        defmt::info!("{}: {} subsections", section.name, count);

        let titles = (0..count).filter_map(|index| section.sub_section_title(index));
        self.panel.render_subsection_titles(section.name, titles);
    }

    fn highlight_sub_section(&mut self, selected: bool) {
        let Some(section) = self.nav.section() else {
            return;
        };
        let index = self.nav.current_sub_section();
        if let Some(title) = section.sub_section_title(index) {
            self.panel.highlight_subsection(index, title, selected);
        }
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────

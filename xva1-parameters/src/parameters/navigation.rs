//! Hardware-free page and slot bookkeeping.
//!
//! [`NavigationState`] answers "which parameter is on encoder `n` right
//! now" for the current section, subsection and page. It never touches a
//! display or a synth register; the front-panel controller drives it and
//! renders the result.

use super::error::NavigationError;
use super::parameter::SynthParameter;
use super::section::Section;
use super::SLOTS_PER_PAGE;

/// Parameter index shown in a slot, or `None` for an empty slot.
pub type Slot = Option<usize>;

/// Direction of a page button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PageDirection {
    /// Towards page 0.
    Up,
    /// Towards the last page.
    Down,
}

/// Current section, subsection, page and the visible slots.
///
/// The slots are always the window `page * 8 .. page * 8 + 8` of the
/// effective section's parameter list, with positions past the end set to
/// `None`. They are recomputed, never patched, whenever the section, page
/// or subsection changes.
///
/// ```
/// use xva1::parameters::{NavigationState, Section, SynthParameter};
///
/// static PARAMS: [SynthParameter<'static>; 3] = [
///     SynthParameter::new("Cutoff").registers(&[72]),
///     SynthParameter::new("Resonance").registers(&[73]),
///     SynthParameter::new("Drive").registers(&[74]),
/// ];
/// static FILTER: Section<'static> = Section::new("Filter", &PARAMS);
///
/// let mut nav = NavigationState::new();
/// nav.select_section(Some(&FILTER));
/// assert_eq!(nav.slots()[..4], [Some(0), Some(1), Some(2), None]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState<'a> {
    section: Option<&'a Section<'a>>,
    page: usize,
    sub_section: usize,
    slots: [Slot; SLOTS_PER_PAGE],
}

impl Default for NavigationState<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> NavigationState<'a> {
    /// No active section, page 0, all slots empty.
    pub const fn new() -> Self {
        Self {
            section: None,
            page: 0,
            sub_section: 0,
            slots: [None; SLOTS_PER_PAGE],
        }
    }

    // ── Accessors ────────────────────────────────────────────────────

    /// The selected top-level section.
    pub fn section(&self) -> Option<&'a Section<'a>> {
        self.section
    }

    pub fn current_page(&self) -> usize {
        self.page
    }

    pub fn current_sub_section(&self) -> usize {
        self.sub_section
    }

    pub fn slots(&self) -> &[Slot; SLOTS_PER_PAGE] {
        &self.slots
    }

    /// Parameter index in `slot`.
    ///
    /// Returns [`NavigationError::InvalidSlotIndex`] if `slot >= SLOTS_PER_PAGE`.
    pub fn slot(&self, slot: usize) -> Result<Slot, NavigationError> {
        self.slots
            .get(slot)
            .copied()
            .ok_or(NavigationError::InvalidSlotIndex)
    }

    /// The section whose parameter list is on the encoders.
    ///
    /// With real subsections this is the selected child; a leaf section
    /// or one with virtual subsections supplies its own parameters.
    pub fn effective_section(&self) -> Option<&'a Section<'a>> {
        let section = self.section?;
        Some(section.child(self.sub_section).unwrap_or(section))
    }

    /// Which register of each parameter is addressed: the subsection
    /// number for virtual subsections, otherwise 0.
    pub fn sub_index(&self) -> usize {
        match self.section {
            Some(section) if section.has_virtual_sub_sections() => self.sub_section,
            _ => 0,
        }
    }

    /// Parameter `index` of the effective section.
    pub fn parameter(&self, index: usize) -> Option<&'a SynthParameter<'a>> {
        self.effective_section()?.parameters.get(index)
    }

    /// Page count of the effective section; 0 with no active section.
    pub fn number_of_pages(&self) -> usize {
        self.effective_section()
            .map_or(0, |section| section.number_of_pages())
    }

    /// `(page up, page down)` indicator LED states.
    pub fn page_indicators(&self) -> (bool, bool) {
        let pages = self.number_of_pages();
        let paged = self.section.is_some() && pages > 1;
        (
            paged && self.page > 0,
            paged && self.page + 1 < pages,
        )
    }

    // ── Transitions ──────────────────────────────────────────────────

    /// Select `section` (or clear the selection), resetting subsection and
    /// page to 0 and recomputing the slots.
    pub fn select_section(&mut self, section: Option<&'a Section<'a>>) {
        self.section = section;
        self.sub_section = 0;
        self.page = 0;
        self.refresh_slots();
    }

    /// Show page `page` of the effective section.
    ///
    /// Page 0 is always accepted so an empty section still gets a clean,
    /// all-empty slot window.
    ///
    /// # Errors
    ///
    /// * [`NavigationError::NoActiveSection`] if nothing is selected.
    /// * [`NavigationError::InvalidPageIndex`] if `page` is past the last page.
    pub fn set_page(&mut self, page: usize) -> Result<(), NavigationError> {
        if self.section.is_none() {
            return Err(NavigationError::NoActiveSection);
        }
        if page > 0 && page >= self.number_of_pages() {
            return Err(NavigationError::InvalidPageIndex);
        }
        self.page = page;
        self.refresh_slots();
        Ok(())
    }

    /// Select subsection `sub_section`, keeping the current page.
    ///
    /// If the newly effective section has fewer pages than the current
    /// page number, the page is pulled back to its last page.
    ///
    /// # Errors
    ///
    /// * [`NavigationError::NoActiveSection`] if nothing is selected.
    /// * [`NavigationError::InvalidSubSectionIndex`] if the section has no
    ///   such subsection.
    pub fn set_sub_section(&mut self, sub_section: usize) -> Result<(), NavigationError> {
        let section = self.section.ok_or(NavigationError::NoActiveSection)?;
        if sub_section >= section.number_of_sub_sections() {
            return Err(NavigationError::InvalidSubSectionIndex);
        }
        self.sub_section = sub_section;

        let pages = self.number_of_pages();
        if self.page >= pages {
            self.page = pages.saturating_sub(1);
        }
        self.refresh_slots();
        Ok(())
    }

    /// Page reached by pressing the page button in `direction`, or `None`
    /// if the move is not possible.
    pub fn page_target(&self, direction: PageDirection) -> Option<usize> {
        self.section?;
        match direction {
            PageDirection::Up => self.page.checked_sub(1),
            PageDirection::Down => {
                let next = self.page + 1;
                (next < self.number_of_pages()).then_some(next)
            }
        }
    }

    /// Subsection reached by one detent of the subsection encoder, or
    /// `None` at either end of the list (and for sections without
    /// subsections).
    pub fn sub_section_target(&self, clockwise: bool) -> Option<usize> {
        let count = self.section?.number_of_sub_sections();
        if clockwise {
            let next = self.sub_section + 1;
            (next < count).then_some(next)
        } else {
            self.sub_section.checked_sub(1)
        }
    }

    // ── Private helpers ──────────────────────────────────────────────

    fn refresh_slots(&mut self) {
        let count = self
            .effective_section()
            .map_or(0, |section| section.parameters.len());
        let start = self.page * SLOTS_PER_PAGE;

        for (offset, slot) in self.slots.iter_mut().enumerate() {
            let index = start + offset;
            *slot = (index < count).then_some(index);
        }
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────

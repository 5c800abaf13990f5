use super::error::ParameterError;
use super::parameter::SynthParameter;
use super::SLOTS_PER_PAGE;

/// How a section splits into subsections.
///
/// Consumers match on this instead of re-deriving what a "has virtual
/// subsections" flag means at each call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SubSections<'a> {
    /// No subsections; the section's own parameters are edited.
    #[default]
    Leaf,
    /// Distinct child sections, each with its own parameter list. The
    /// child's name is its title.
    Real(&'a [Section<'a>]),
    /// One shared parameter list; subsection `n` addresses register `n`
    /// of every parameter.
    Virtual(&'a [&'a str]),
}

/// A named group of parameters, optionally split into subsections.
///
/// The tree is static configuration: built once, never mutated, and only
/// borrowed by the navigation code.
///
/// ```
/// use xva1::parameters::{Section, SynthParameter};
///
/// static ENVELOPE: [SynthParameter<'static>; 2] = [
///     SynthParameter::new("Attack").registers(&[8, 20, 32]),
///     SynthParameter::new("Decay").registers(&[9, 21, 33]),
/// ];
/// static ENVELOPES: Section<'static> =
///     Section::new("Envelopes", &ENVELOPE).with_virtual_sub_sections(&["ENV1", "ENV2", "ENV3"]);
///
/// assert_eq!(ENVELOPES.number_of_pages(), 1);
/// assert_eq!(ENVELOPES.number_of_sub_sections(), 3);
/// assert_eq!(ENVELOPES.sub_section_title(1), Some("ENV2"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Section<'a> {
    /// Header shown on the status display.
    pub name: &'a str,
    /// Parameters in display order (possibly empty).
    pub parameters: &'a [SynthParameter<'a>],
    /// Subsection layout.
    pub sub_sections: SubSections<'a>,
}

impl<'a> Section<'a> {
    /// A section without subsections.
    pub const fn new(name: &'a str, parameters: &'a [SynthParameter<'a>]) -> Self {
        Self {
            name,
            parameters,
            sub_sections: SubSections::Leaf,
        }
    }

    pub const fn with_sub_sections(self, children: &'a [Section<'a>]) -> Self {
        Self {
            sub_sections: SubSections::Real(children),
            ..self
        }
    }

    pub const fn with_virtual_sub_sections(self, titles: &'a [&'a str]) -> Self {
        Self {
            sub_sections: SubSections::Virtual(titles),
            ..self
        }
    }

    /// `ceil(parameters / SLOTS_PER_PAGE)`; zero for an empty section.
    pub fn number_of_pages(&self) -> usize {
        self.parameters.len().div_ceil(SLOTS_PER_PAGE)
    }

    pub fn number_of_sub_sections(&self) -> usize {
        match self.sub_sections {
            SubSections::Leaf => 0,
            SubSections::Real(children) => children.len(),
            SubSections::Virtual(titles) => titles.len(),
        }
    }

    pub fn has_virtual_sub_sections(&self) -> bool {
        matches!(self.sub_sections, SubSections::Virtual(_))
    }

    /// Title of subsection `index` as listed on the status display.
    pub fn sub_section_title(&self, index: usize) -> Option<&'a str> {
        match self.sub_sections {
            SubSections::Leaf => None,
            SubSections::Real(children) => children.get(index).map(|child| child.name),
            SubSections::Virtual(titles) => titles.get(index).copied(),
        }
    }

    /// Child section `index`; `None` unless the subsections are real.
    pub fn child(&self, index: usize) -> Option<&'a Section<'a>> {
        match self.sub_sections {
            SubSections::Real(children) => children.get(index),
            _ => None,
        }
    }

    /// Number of registers each parameter must provide.
    pub fn register_fan_out(&self) -> usize {
        match self.sub_sections {
            SubSections::Virtual(titles) => titles.len().max(1),
            _ => 1,
        }
    }

    /// Validate every parameter in this section and its children.
    pub fn validate(&self) -> Result<(), ParameterError> {
        let fan_out = self.register_fan_out();
        for param in self.parameters {
            param.validate(fan_out)?;
        }
        if let SubSections::Real(children) = self.sub_sections {
            for child in children {
                child.validate()?;
            }
        }
        Ok(())
    }
}

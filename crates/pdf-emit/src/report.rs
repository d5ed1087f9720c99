//! Soft-error reporting.

use serde::Serialize;

/// What a write had to work around, returned alongside success.
///
/// None of these interrupt emission: substitutions render as `?` or
/// `.notdef`, overfull lines are emitted at natural width.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RenderReport {
    /// Codepoints no font could map, with the font that was asked.
    pub substitutions: Vec<SubstitutionRecord>,
    /// Lines that could not be made feasible even at expanded tolerance.
    pub overfull_lines: u32,
    /// Pages emitted.
    pub pages: u32,
}

/// One unmappable codepoint occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubstitutionRecord {
    pub codepoint: char,
    pub font: String,
}

impl RenderReport {
    pub fn is_clean(&self) -> bool {
        self.substitutions.is_empty() && self.overfull_lines == 0
    }

    pub(crate) fn absorb(&mut self, substitutions: Vec<typeset_engine::Substitution>) {
        for sub in substitutions {
            self.substitutions.push(SubstitutionRecord {
                codepoint: sub.codepoint,
                font: sub.font,
            });
        }
    }
}

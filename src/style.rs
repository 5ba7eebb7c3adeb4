//! The style selector: which register the rewrite stage targets.
//!
//! Each variant maps 1:1 to a fixed descriptive phrase that is embedded in
//! the rewrite instruction. The mapping is closed — four variants, four
//! phrases — and matching on raw form labels is case-sensitive: anything
//! that is not one of the four exact labels falls back to the literal
//! phrase `"standard"` (note the lowercase; this is the intentional default,
//! not a fifth style).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Target register for the rewrite stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Style {
    /// "a standard, well-structured" (default)
    #[default]
    Standard,
    /// "a human, conversational"
    Natural,
    /// "a formal, professional"
    Formal,
    /// "a fluent, clear"
    Fluency,
}

/// Phrase used when a form label matches none of the four styles.
pub const DEFAULT_PHRASE: &str = "standard";

impl Style {
    /// All styles, in the order the form dropdown presents them.
    pub const ALL: [Style; 4] = [Style::Standard, Style::Natural, Style::Formal, Style::Fluency];

    /// The descriptive phrase embedded in the rewrite instruction.
    pub fn phrase(self) -> &'static str {
        match self {
            Style::Standard => "a standard, well-structured",
            Style::Natural => "a human, conversational",
            Style::Formal => "a formal, professional",
            Style::Fluency => "a fluent, clear",
        }
    }

    /// The label shown in the form dropdown.
    pub fn label(self) -> &'static str {
        match self {
            Style::Standard => "Standard",
            Style::Natural => "Natural",
            Style::Formal => "Formal",
            Style::Fluency => "Fluency",
        }
    }
}

/// Resolve a raw form label to its rewrite phrase.
///
/// Total over all strings: the four exact labels yield their phrases,
/// everything else yields [`DEFAULT_PHRASE`].
pub fn phrase_for_label(label: &str) -> &'static str {
    match Style::from_str(label) {
        Ok(style) => style.phrase(),
        Err(_) => DEFAULT_PHRASE,
    }
}

impl FromStr for Style {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Standard" => Ok(Style::Standard),
            "Natural" => Ok(Style::Natural),
            "Formal" => Ok(Style::Formal),
            "Fluency" => Ok(Style::Fluency),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

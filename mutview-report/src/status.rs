//! Display classification of mutant outcomes.

use mutview_json::MutantStatus;

/// Background severity class of a listing line. One bad mutant taints the
/// whole line, so classes combine toward the worse side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Green,
    Gray,
    Orange,
    Red,
}

impl Severity {
    pub const ALL: [Severity; 4] = [Severity::Green, Severity::Gray, Severity::Orange, Severity::Red];

    /// Folds another mutant's class into a line's accumulated class. Red
    /// absorbs everything, orange yields only to red, and the two passing
    /// classes merge to green.
    pub fn combine(self, other: Severity) -> Severity {
        use Severity::*;
        match (self, other) {
            (Red, _) | (_, Red) => Red,
            (Orange, _) | (_, Orange) => Orange,
            (Green, _) | (_, Green) => Green,
            (Gray, Gray) => Gray,
        }
    }

    pub fn bg_class(self) -> &'static str {
        match self {
            Severity::Green => "bggreen",
            Severity::Gray => "bggray",
            Severity::Orange => "bgorange",
            Severity::Red => "bgred",
        }
    }

    /// The foreground counterpart of [`bg_class`](Self::bg_class), used for
    /// the per-line toggle badge.
    pub fn text_class(self) -> &'static str {
        match self {
            Severity::Green => "txtgreen",
            Severity::Gray => "txtgray",
            Severity::Orange => "txtorange",
            Severity::Red => "txtred",
        }
    }
}

pub fn status_label(status: MutantStatus) -> &'static str {
    match status {
        MutantStatus::Survived => "Survived",
        MutantStatus::Timeout => "Timeout",
        MutantStatus::Skipped => "Skipped",
        MutantStatus::Untested => "Untested",
        MutantStatus::Suspicious => "Suspicious",
        MutantStatus::Killed => "Killed",
        MutantStatus::Unknown => "--ERROR--",
    }
}

pub fn status_severity(status: MutantStatus) -> Severity {
    match status {
        MutantStatus::Survived | MutantStatus::Untested | MutantStatus::Unknown => Severity::Red,
        MutantStatus::Timeout => Severity::Orange,
        MutantStatus::Skipped => Severity::Gray,
        MutantStatus::Suspicious | MutantStatus::Killed => Severity::Green,
    }
}

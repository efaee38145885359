//! Section visibility rules for the admin tournament change form.
//!
//! Which fieldsets apply depends on the selected bracket format; the team
//! roster inline only applies to doubles.

#[cfg(test)]
#[path = "tournament_form_test.rs"]
mod tournament_form_test;

pub const COMMON_SECTION: &str = ".format-common-section";
pub const FAN_SECTION: &str = ".format-fan-section";
pub const OLYMPIC_SECTION: &str = ".format-olympic-section";
pub const ROUND_ROBIN_SECTION: &str = ".format-round-robin-section";

/// Bracket formats known to the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TournamentFormat {
    /// Single elimination ("FAN").
    SingleElimination,
    OlympicConsolation,
    RoundRobin,
}

impl TournamentFormat {
    /// Parse a `<select name="format">` value.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "single_elimination" => Some(Self::SingleElimination),
            "olympic_consolation" => Some(Self::OlympicConsolation),
            "round_robin" => Some(Self::RoundRobin),
            _ => None,
        }
    }

    fn section(self) -> &'static str {
        match self {
            Self::SingleElimination => FAN_SECTION,
            Self::OlympicConsolation => OLYMPIC_SECTION,
            Self::RoundRobin => ROUND_ROBIN_SECTION,
        }
    }
}

/// Whether each format-dependent section should be displayed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionVisibility {
    /// `(selector, visible)` pairs covering every format section.
    pub sections: Vec<(&'static str, bool)>,
}

impl SectionVisibility {
    pub fn for_format(format: &str) -> Self {
        let selected = TournamentFormat::parse(format);
        let mut sections = vec![(COMMON_SECTION, selected.is_some())];
        for format in [
            TournamentFormat::SingleElimination,
            TournamentFormat::OlympicConsolation,
            TournamentFormat::RoundRobin,
        ] {
            sections.push((format.section(), selected == Some(format)));
        }
        Self { sections }
    }

    pub fn is_visible(&self, selector: &str) -> bool {
        self.sections.iter().any(|(s, visible)| *s == selector && *visible)
    }
}

/// The team roster inline is shown only for doubles.
pub fn teams_visible(variant: &str) -> bool {
    variant == "doubles"
}

/// Heading text that identifies the team inline when it has no marker class.
pub fn is_teams_heading(text: &str) -> bool {
    let text = text.trim();
    text.contains("Команды") || text.contains("Teams")
}

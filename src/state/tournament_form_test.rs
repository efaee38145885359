use super::*;

#[test]
fn parse_known_formats() {
    assert_eq!(TournamentFormat::parse("single_elimination"), Some(TournamentFormat::SingleElimination));
    assert_eq!(TournamentFormat::parse("olympic_consolation"), Some(TournamentFormat::OlympicConsolation));
    assert_eq!(TournamentFormat::parse("round_robin"), Some(TournamentFormat::RoundRobin));
    assert_eq!(TournamentFormat::parse(""), None);
    assert_eq!(TournamentFormat::parse("swiss"), None);
}

#[test]
fn fan_format_shows_common_and_fan_only() {
    let vis = SectionVisibility::for_format("single_elimination");
    assert!(vis.is_visible(COMMON_SECTION));
    assert!(vis.is_visible(FAN_SECTION));
    assert!(!vis.is_visible(OLYMPIC_SECTION));
    assert!(!vis.is_visible(ROUND_ROBIN_SECTION));
}

#[test]
fn olympic_format_shows_common_and_olympic_only() {
    let vis = SectionVisibility::for_format("olympic_consolation");
    assert!(vis.is_visible(COMMON_SECTION));
    assert!(vis.is_visible(OLYMPIC_SECTION));
    assert!(!vis.is_visible(FAN_SECTION));
    assert!(!vis.is_visible(ROUND_ROBIN_SECTION));
}

#[test]
fn round_robin_format_shows_common_and_round_robin_only() {
    let vis = SectionVisibility::for_format("round_robin");
    assert!(vis.is_visible(COMMON_SECTION));
    assert!(vis.is_visible(ROUND_ROBIN_SECTION));
    assert!(!vis.is_visible(FAN_SECTION));
    assert!(!vis.is_visible(OLYMPIC_SECTION));
}

#[test]
fn unknown_or_empty_format_hides_everything() {
    for format in ["", "other"] {
        let vis = SectionVisibility::for_format(format);
        assert_eq!(vis.sections.len(), 4);
        assert!(vis.sections.iter().all(|(_, visible)| !visible));
    }
}

#[test]
fn teams_only_for_doubles() {
    assert!(teams_visible("doubles"));
    assert!(!teams_visible("singles"));
    assert!(!teams_visible(""));
}

#[test]
fn teams_heading_matches_both_languages() {
    assert!(is_teams_heading("  Команды "));
    assert!(is_teams_heading("Tournament Teams"));
    assert!(!is_teams_heading("Participants"));
}

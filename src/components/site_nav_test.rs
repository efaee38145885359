use super::*;

// =============================================================================
// scroll_target
// =============================================================================

#[test]
fn fragment_links_scroll() {
    assert_eq!(scroll_target(Some("#schedule")), Some("#schedule"));
}

#[test]
fn bare_hash_keeps_default_behavior() {
    assert_eq!(scroll_target(Some("#")), None);
}

#[test]
fn missing_or_non_fragment_href_is_ignored() {
    assert_eq!(scroll_target(None), None);
    assert_eq!(scroll_target(Some("")), None);
    assert_eq!(scroll_target(Some("/tournaments/#top")), None);
}

#[test]
fn unusual_fragments_are_passed_through() {
    assert_eq!(scroll_target(Some("#section-2")), Some("#section-2"));
    assert_eq!(scroll_target(Some("##")), Some("##"));
}

// =============================================================================
// reveal_schedule
// =============================================================================

fn card(top: f64, left: f64) -> CardBox {
    CardBox { top, left }
}

fn order(steps: &[RevealStep]) -> Vec<usize> {
    steps.iter().map(|s| s.index).collect()
}

#[test]
fn reveals_row_by_row_then_left_to_right() {
    let cards = [card(300.0, 600.0), card(0.0, 300.0), card(305.0, 0.0), card(4.0, 0.0)];
    let steps = reveal_schedule(&cards, 800.0);
    assert_eq!(order(&steps), vec![3, 1, 2, 0]);
}

#[test]
fn staggers_delays_in_reveal_order() {
    let cards = [card(0.0, 200.0), card(0.0, 0.0), card(0.0, 100.0)];
    let delays: Vec<u32> = reveal_schedule(&cards, 800.0).iter().map(|s| s.delay_ms).collect();
    assert_eq!(delays, vec![0, 120, 240]);
}

#[test]
fn cards_below_the_fold_wait() {
    let cards = [card(100.0, 0.0), card(859.0, 0.0), card(860.0, 0.0), card(2000.0, 0.0)];
    assert_eq!(order(&reveal_schedule(&cards, 800.0)), vec![0, 1]);
}

#[test]
fn no_cards_no_steps() {
    assert!(reveal_schedule(&[], 800.0).is_empty());
}

#[test]
fn alert_removal_follows_fade_transition() {
    assert_eq!(ALERT_FADE_DELAY_MS, 5_000);
    assert_eq!(ALERT_REMOVE_DELAY_MS, 300);
}

use super::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::{HashMap, HashSet};

#[test]
fn registry_holds_unique_names_with_positive_weights() {
    assert_eq!(names().count(), 21);

    let mut seen = HashSet::new();
    for (name, text) in PROMPTS {
        assert!(seen.insert(*name), "duplicate category '{name}'");
        assert!(
            !text.trim().is_empty(),
            "category '{name}' has an empty prompt"
        );
        assert!(
            weight(name) > 0.0,
            "category '{name}' has a non-positive weight"
        );
    }

    for (name, _) in WEIGHTS {
        assert!(
            seen.contains(name),
            "weight entry '{name}' names no registered category"
        );
    }
}

#[test]
fn weight_defaults_to_one_for_unlisted_names() {
    assert_eq!(weight("serious_now"), DEFAULT_WEIGHT);
    assert_eq!(weight("ascii_art"), DEFAULT_WEIGHT);
    assert_eq!(weight("no_such_category"), DEFAULT_WEIGHT);
}

#[test]
fn deviating_weights_are_applied() {
    assert_eq!(weight("actual_receipt"), 2.0);
    assert_eq!(weight("haunted_shopping_list"), 1.5);
}

#[test]
fn registered_names_resolve_to_themselves() {
    for name in names() {
        let selection = select_category(Some(name));
        assert_eq!(selection.category, name);
        assert!(selection.notice.is_none());
    }
}

#[test]
fn lookup_is_case_sensitive() {
    assert!(prompt("ascii_art").is_some());
    assert!(prompt("ASCII_ART").is_none());

    let selection = select_category(Some("Actual_Receipt"));
    assert!(selection.notice.is_some());
}

#[test]
fn absent_request_falls_back_silently() {
    let selection = select_category(None);
    assert!(prompt(selection.category).is_some());
    assert!(selection.notice.is_none());
}

#[test]
fn empty_request_falls_back_silently() {
    let selection = select_category(Some(""));
    assert!(prompt(selection.category).is_some());
    assert!(selection.notice.is_none());
}

#[test]
fn unknown_request_falls_back_with_notice() {
    let selection = select_category(Some("not_a_real_one"));
    assert!(prompt(selection.category).is_some());

    let notice = selection.notice.expect("unknown category emits a notice");
    assert_eq!(
        notice,
        "Unknown category 'not_a_real_one'; picking one at random."
    );
}

#[test]
fn whitespace_request_counts_as_unknown() {
    let selection = select_category(Some("   "));
    assert!(prompt(selection.category).is_some());
    assert!(selection.notice.is_some());
}

#[test]
fn weighted_selection_tracks_configured_weights() {
    const TRIALS: usize = 100_000;

    let mut rng = StdRng::seed_from_u64(0x5EED);
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for _ in 0..TRIALS {
        *counts.entry(weighted_random(&mut rng)).or_default() += 1;
    }

    let total_weight: f64 = names().map(weight).sum();
    for name in names() {
        let observed = counts.get(name).copied().unwrap_or(0) as f64;
        let expected = TRIALS as f64 * weight(name) / total_weight;
        let deviation = (observed - expected).abs() / expected;
        assert!(
            deviation < 0.10,
            "category '{name}': observed {observed}, expected {expected:.0}"
        );
    }
}

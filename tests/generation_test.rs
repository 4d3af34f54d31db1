//! Tests for level generation and deduplication.

use rstest::rstest;

use circlenest::application::services::{GenerationService, LevelCount};
use circlenest::domain::{equivalent, ConfigurationSet, DedupCollection};
use circlenest::util::testing;

fn generate(levels: usize) -> Vec<DedupCollection> {
    testing::init_test_setup();
    GenerationService::new().generate(levels)
}

// ============================================================
// Counts
// ============================================================

#[rstest]
#[case(0, 1)]
#[case(1, 1)]
#[case(2, 2)]
#[case(3, 4)]
#[case(4, 9)]
#[case(5, 20)]
#[case(6, 48)]
#[case(7, 115)]
#[case(8, 286)]
fn given_level_when_generating_then_count_matches_sequence(
    #[case] level: usize,
    #[case] expected: usize,
) {
    let collections = generate(level);
    assert_eq!(collections.len(), level + 1);
    assert_eq!(collections[level].level(), level);
    assert_eq!(collections[level].len(), expected);
}

#[test]
fn given_four_levels_when_counting_then_rows_start_at_level_one() {
    let collections = generate(4);
    let counts = GenerationService::counts(&collections);
    assert_eq!(
        counts,
        vec![
            LevelCount { level: 1, count: 1 },
            LevelCount { level: 2, count: 2 },
            LevelCount { level: 3, count: 4 },
            LevelCount { level: 4, count: 9 },
        ]
    );
}

#[test]
fn given_zero_levels_when_counting_then_no_rows() {
    let collections = generate(0);
    assert_eq!(collections.len(), 1);
    assert!(GenerationService::counts(&collections).is_empty());
}

// ============================================================
// Invariants
// ============================================================

#[test]
fn given_generated_level_when_cross_checking_pairs_then_no_two_equivalent() {
    let collections = generate(6);
    for collection in &collections {
        let members = collection.members();
        for (i, a) in members.iter().enumerate() {
            for b in &members[i + 1..] {
                assert!(
                    !equivalent(a, b),
                    "level {}: {} duplicates {}",
                    collection.level(),
                    a,
                    b
                );
            }
        }
    }
}

#[test]
fn given_generated_level_when_inspecting_then_every_member_has_level_circles() {
    for collection in generate(6) {
        for config in &collection {
            assert_eq!(config.circle_count(), collection.level());
        }
    }
}

#[test]
fn given_two_runs_when_comparing_then_discovery_order_is_identical() {
    let first: Vec<String> = generate(6)[6].iter().map(|c| c.to_string()).collect();
    let second: Vec<String> = generate(6)[6].iter().map(|c| c.to_string()).collect();
    assert_eq!(first, second);
}

#[test]
fn given_level_three_when_listing_then_all_shapes_present() {
    let collections = generate(3);
    let mut texts: Vec<String> = collections[3].iter().map(|c| c.to_string()).collect();
    texts.sort();
    assert_eq!(
        texts,
        vec![
            "[ C [ C [ C ] ] ]",
            "[ C [ C ], C ]",
            "[ C [ C, C ] ]",
            "[ C, C, C ]",
        ]
    );
}

#[test]
fn given_expansion_when_inserting_again_then_nothing_new_is_accepted() {
    let collections = generate(4);
    let mut level4 = collections[4].clone();
    for config in collections[3].iter() {
        for candidate in config.add_circle() {
            assert!(level4.contains_equivalent(&candidate));
            assert!(!level4.insert(candidate));
        }
    }
    assert_eq!(level4.len(), 9);
}

#[test]
fn given_generated_level_when_laying_out_then_circles_nest_or_stay_apart() {
    for collection in generate(6) {
        for config in &collection {
            let circles = config.circles(0.0);
            assert_eq!(circles.len(), collection.level());
            for (i, a) in circles.iter().enumerate() {
                for b in &circles[i + 1..] {
                    assert!(
                        a.contains(b) || b.contains(a) || a.is_disjoint(b),
                        "{}: {:?} intersects {:?}",
                        config,
                        a,
                        b
                    );
                }
            }
        }
    }
}

// ============================================================
// Equivalence
// ============================================================

#[rstest]
#[case("[ C [ C ], C ]", "[ C, C [ C ] ]")]
#[case("[ C [ C, C [ C ] ], C ]", "[ C, C [ C [ C ], C ] ]")]
#[case("[ C [ C ], C [ C, C ] ]", "[ C [ C, C ], C [ C ] ]")]
fn given_reordered_configurations_when_comparing_then_equivalent(
    #[case] a: &str,
    #[case] b: &str,
) {
    let a: ConfigurationSet = a.parse().unwrap();
    let b: ConfigurationSet = b.parse().unwrap();
    assert!(equivalent(&a, &a));
    assert!(equivalent(&a, &b));
    assert!(equivalent(&b, &a));
}

#[rstest]
#[case("[ C [ C ], C ]", "[ C [ C, C ] ]")]
#[case("[ C, C, C ]", "[ C [ C [ C ] ] ]")]
#[case("[ ]", "[ C ]")]
fn given_different_shapes_when_comparing_then_not_equivalent(#[case] a: &str, #[case] b: &str) {
    let a: ConfigurationSet = a.parse().unwrap();
    let b: ConfigurationSet = b.parse().unwrap();
    assert!(!equivalent(&a, &b));
}

#[test]
fn given_every_generated_configuration_when_parsing_canonical_text_then_round_trips() {
    for collection in generate(6) {
        for config in &collection {
            let text = config.canonical_text();
            let parsed: ConfigurationSet = text.parse().unwrap();
            assert!(equivalent(config, &parsed));
            assert_eq!(parsed.canonical_text(), text);
            assert_eq!(config.clone().canonical_text(), text);
        }
    }
}

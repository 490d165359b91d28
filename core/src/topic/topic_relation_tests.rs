//! Tests for subset/superset relations

use super::{
	Operand, TopicFilterError, TopicRelation, TopicRelationError, is_subset,
	is_superset, matches_topic,
};
use crate::config::{MultiLevelSemantics, RelationSettings};

static SEED_FILTERS: [&str; 12] = [
	"A/B/C", "A/B/#", "A/B/Z", "A/+/C", "A/+/#", "A/Y/Z", "X/B/C", "+/B/C",
	"+/B", "X/Y/Z", "X/#", "+/+/#",
];

fn subset(a: &str, b: &str) -> bool {
	is_subset(a, b).unwrap_or_else(|err| panic!("{a} vs {b}: {err}"))
}

fn containment() -> TopicRelation {
	TopicRelation::new(
		RelationSettings::new()
			.with_multi_level(MultiLevelSemantics::Containment),
	)
}

mod subset_tests {
	use super::*;

	#[test]
	fn test_reflexive() {
		let extra = ["#", "+", "A//C", "/", "a/", "a+/b", "b#", "a\0b"];
		for filter in SEED_FILTERS.iter().chain(&extra) {
			assert!(subset(filter, filter), "{filter} should contain itself");
			assert!(containment().is_subset(filter, filter).unwrap());
		}
	}

	#[test]
	fn test_multi_level_absorption() {
		assert!(subset("A/B/C", "A/B/#"));
		assert!(subset("A/B/C", "A/#"));
		assert!(subset("A/B/C", "#"));
		assert!(!subset("A/#", "A/B/C"));
	}

	#[test]
	fn test_single_level_wildcard() {
		assert!(subset("A/Y/Z", "A/+/Z"));
		assert!(subset("A/B/C", "A/+/C"));
		assert!(!subset("X/Y/Z", "A/+/C"));
		assert!(subset("A/+/C", "A/+/C"));
		assert!(!subset("A/+/C", "A/B/C"));
	}

	#[test]
	fn test_literal_mismatch() {
		assert!(!subset("X/B/C", "A/B/C"));
		assert!(!subset("a/b/c", "A/B/C"), "no case folding");
		assert!(!subset("a%2Fb", "a/b"), "no percent decoding");
	}

	#[test]
	fn test_length_mismatch() {
		assert!(!subset("A/B", "A/B/C"));
		assert!(!subset("A/B/C", "A/B"));
		assert!(!subset("A/B", "A/+/+"));
	}

	#[test]
	fn test_empty_levels_are_literal() {
		assert!(!subset("A//C", "A//D"));
		assert!(!subset("A//C", "A/B/C"));
		assert!(!subset("A/B/C", "A//C"));
		assert!(subset("A//C", "A/+/C"));
		assert!(subset("A//C", "A/#"));
		assert!(subset("/", "+/+"));
		assert!(!subset("/", "+"));
	}

	#[test]
	fn test_levels_mixing_wildcards_with_text_are_literal() {
		assert_eq!(is_subset("a+/b", "a+/b"), Ok(true));
		assert_eq!(is_subset("a+/b", "+/b"), Ok(true));
		assert_eq!(is_subset("+/b", "a+/b"), Ok(false));
		assert_eq!(is_subset("a/b#", "a/#"), Ok(true));
		assert_eq!(is_subset("a/b#", "a/b"), Ok(false));
		assert_eq!(is_subset("a\0b", "+"), Ok(true));
	}

	#[test]
	fn test_long_filters_are_compared() {
		let long = "a/".repeat(40_000);
		assert_eq!(is_subset(&long, &long), Ok(true));
		assert_eq!(is_subset(&long, "#"), Ok(true));
		assert_eq!(is_subset(&long, "a/#"), Ok(true));
		assert_eq!(is_subset("a/#", &long), Ok(false));
	}

	#[test]
	fn test_whitespace_trimming_is_idempotent() {
		assert_eq!(is_subset(" A/B/C ", "A/B/C"), is_subset("A/B/C", "A/B/C"));
		assert_eq!(is_subset("A/B/C\n", " A/+/C"), Ok(true));
		assert_eq!(is_subset("\tX/Y/Z", "A/+/C "), Ok(false));
	}
}

mod asymmetry_tests {
	use super::*;

	#[test]
	fn test_hash_on_contained_side_is_compared_like_a_level() {
		assert!(subset("A/#", "A/+"));
		assert!(subset("A/#", "+/+"));
		assert!(!subset("A/#", "A/B"));
		assert!(subset("A/#", "A/#"));
	}

	#[test]
	fn test_hash_needs_a_level_to_absorb() {
		assert!(!subset("A/B", "A/B/#"));
		assert!(!subset("+/B", "+/+/#"));
		assert!(!subset("X/#", "+/+/#"));
	}

	#[test]
	fn test_containment_semantics() {
		let relation = containment();

		assert!(relation.is_subset("A/B", "A/B/#").unwrap());
		assert!(relation.is_subset("+/B", "+/+/#").unwrap());
		assert!(relation.is_subset("A", "#").unwrap());
		assert!(!relation.is_subset("A/#", "A/+").unwrap());
		assert!(!relation.is_subset("A/#", "+/+").unwrap());
		assert!(!relation.is_subset("X/#", "+/+/#").unwrap());
		assert!(relation.is_subset("A/+/#", "+/+/#").unwrap());
		assert!(!relation.is_subset("A/+", "A/B").unwrap());
		assert!(relation.is_subset("A/+", "+/+").unwrap());
		assert!(!relation.is_subset("A/B/C", "A/B").unwrap());
	}

	#[test]
	fn test_semantics_agree_without_multi_level_on_contained_side() {
		let relation = containment();
		for a in SEED_FILTERS.iter().filter(|f| !f.ends_with('#')) {
			for b in SEED_FILTERS {
				let same_length = a.split('/').count() == b.split('/').count();
				if same_length || !b.ends_with('#') {
					assert_eq!(
						relation.is_subset(a, b).unwrap(),
						subset(a, b),
						"{a} vs {b}"
					);
				}
			}
		}
	}
}

mod superset_tests {
	use super::*;

	#[test]
	fn test_duality() {
		for a in SEED_FILTERS {
			for b in SEED_FILTERS {
				assert_eq!(is_superset(a, b), is_subset(b, a), "{a} vs {b}");
				assert_eq!(
					containment().is_superset(a, b),
					containment().is_subset(b, a)
				);
			}
		}
	}

	#[test]
	fn test_superset_examples() {
		assert_eq!(is_superset("A/#", "A/B/C"), Ok(true));
		assert_eq!(is_superset("A/B/C", "A/#"), Ok(false));
		assert_eq!(is_superset("+/+/#", "X/Y/Z"), Ok(true));
	}
}

mod error_tests {
	use super::*;

	#[test]
	fn test_empty_input() {
		assert_eq!(
			is_subset("", "A/B"),
			Err(TopicRelationError::EmptyFilter {
				operand: Operand::Left
			})
		);
		assert_eq!(
			is_subset("A/B", ""),
			Err(TopicRelationError::EmptyFilter {
				operand: Operand::Right
			})
		);
		assert_eq!(
			is_subset("A/B", "   "),
			Err(TopicRelationError::EmptyFilter {
				operand: Operand::Right
			})
		);
		assert!(matches!(
			is_subset("", ""),
			Err(TopicRelationError::EmptyFilter { .. })
		));
	}

	#[test]
	fn test_superset_reports_caller_operand() {
		let err = is_superset("", "A/B").unwrap_err();
		assert_eq!(err.operand(), Some(Operand::Left));

		let err = is_superset("A/#/C", "A/B").unwrap_err();
		assert_eq!(
			err,
			TopicRelationError::MalformedFilter {
				operand: Operand::Left,
				source: TopicFilterError::hash_position("A/#/C"),
			}
		);
	}

	#[test]
	fn test_misplaced_hash_rejected_on_both_sides() {
		for (a, b, operand) in [
			("A/#/C", "A/#", Operand::Left),
			("A/B/C", "A/#/C", Operand::Right),
			("A/#/C", "A/#/C", Operand::Left),
			("#/C", "+/C", Operand::Left),
		] {
			match is_subset(a, b) {
				| Err(TopicRelationError::MalformedFilter {
					operand: reported,
					source: TopicFilterError::HashPosition { .. },
				}) => assert_eq!(reported, operand, "{a} vs {b}"),
				| other => panic!("{a} vs {b}: unexpected {other:?}"),
			}
			assert!(containment().is_subset(a, b).is_err());
		}
	}

	#[test]
	fn test_error_messages() {
		let err = is_subset("", "A").unwrap_err();
		assert_eq!(err.to_string(), "The left topic filter is empty");

		let err = is_subset("A", "a/#/b").unwrap_err();
		assert_eq!(
			err.to_string(),
			"The right topic filter is malformed: Invalid topic filter \
			 'a/#/b': # wildcard can only be the last level"
		);
		assert!(std::error::Error::source(&err).is_some());
	}
}

mod topic_match_tests {
	use super::*;

	#[test]
	fn test_concrete_topic_matches() {
		assert_eq!(matches_topic("home/kitchen/temp", "home/+/temp"), Ok(true));
		assert_eq!(matches_topic("home/kitchen/temp", "home/#"), Ok(true));
		assert_eq!(matches_topic("home/kitchen/temp", "#"), Ok(true));
		assert_eq!(matches_topic("home/kitchen", "home/+/temp"), Ok(false));
		assert_eq!(matches_topic("office/kitchen/temp", "home/#"), Ok(false));
	}

	#[test]
	fn test_parent_level_depends_on_semantics() {
		assert_eq!(matches_topic("home", "home/#"), Ok(false));
		assert_eq!(containment().matches("home", "home/#"), Ok(true));
	}

	#[test]
	fn test_wildcard_topic_rejected() {
		assert_eq!(
			matches_topic("home/+/temp", "home/#"),
			Err(TopicRelationError::WildcardInTopic {
				topic: "home/+/temp".to_string()
			})
		);
		assert!(matches!(
			matches_topic("home/#", "#"),
			Err(TopicRelationError::WildcardInTopic { .. })
		));
	}

	#[test]
	fn test_empty_topic_or_filter() {
		assert_eq!(
			matches_topic("", "#").unwrap_err().operand(),
			Some(Operand::Left)
		);
		assert_eq!(
			matches_topic("a", "").unwrap_err().operand(),
			Some(Operand::Right)
		);
	}
}

#[test]
fn test_parallel_queries() {
	let relation = TopicRelation::default();
	let handles: Vec<_> = (0 .. 4)
		.map(|_| {
			std::thread::spawn(move || {
				SEED_FILTERS
					.iter()
					.flat_map(|a| SEED_FILTERS.iter().map(move |b| (a, b)))
					.filter(|(a, b)| relation.is_subset(a, b).unwrap())
					.count()
			})
		})
		.collect();

	let counts: Vec<usize> =
		handles.into_iter().map(|h| h.join().unwrap()).collect();
	assert!(counts.iter().all(|&count| count == counts[0]));
	assert_eq!(counts[0], 33);
}

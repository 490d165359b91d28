//! Subset and superset relations between topic filters
//!
//! Both filters are parsed into levels once, then compared position by
//! position. The filter on the right ("containing" side) decides how
//! wildcards absorb levels of the filter on the left ("contained" side).

use std::fmt;

use thiserror::Error;

use super::error::RelationResult;
use super::topic_filter_item::{TopicFilterError, TopicFilterItem};
use super::topic_filter_path::TopicFilter;
use crate::config::{MultiLevelSemantics, RelationSettings};

/// Position of an argument in a relation query, in the caller's order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operand {
	/// First argument
	Left,
	/// Second argument
	Right,
}

impl Operand {
	/// Returns the other operand.
	pub fn flip(self) -> Self {
		match self {
			| Operand::Left => Operand::Right,
			| Operand::Right => Operand::Left,
		}
	}
}

impl fmt::Display for Operand {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			| Operand::Left => f.write_str("left"),
			| Operand::Right => f.write_str("right"),
		}
	}
}

/// Errors that reject the input of a relation query
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TopicRelationError {
	/// One of the filters is empty or whitespace only
	#[error("The {operand} topic filter is empty")]
	EmptyFilter {
		/// Which argument was empty
		operand: Operand,
	},

	/// One of the filters could not be parsed
	#[error("The {operand} topic filter is malformed: {source}")]
	MalformedFilter {
		/// Which argument was malformed
		operand: Operand,
		/// Parse failure
		#[source]
		source: TopicFilterError,
	},

	/// A concrete topic was expected but wildcards were found
	#[error("Topic '{topic}' contains wildcards and cannot be matched")]
	WildcardInTopic {
		/// The offending topic
		topic: String,
	},
}

impl TopicRelationError {
	/// Wraps a parse error for the given operand.
	pub fn from_filter_error(operand: Operand, err: TopicFilterError) -> Self {
		match err {
			| TopicFilterError::EmptyFilter => Self::EmptyFilter { operand },
			| source => Self::MalformedFilter { operand, source },
		}
	}

	/// Returns the operand the error refers to, if any.
	pub fn operand(&self) -> Option<Operand> {
		match self {
			| Self::EmptyFilter { operand }
			| Self::MalformedFilter { operand, .. } => Some(*operand),
			| Self::WildcardInTopic { .. } => None,
		}
	}

	/// Returns the same error with `Left` and `Right` exchanged.
	///
	/// Used when a query is answered by evaluating its mirror image.
	pub fn with_swapped_operands(self) -> Self {
		match self {
			| Self::EmptyFilter { operand } => Self::EmptyFilter {
				operand: operand.flip(),
			},
			| Self::MalformedFilter { operand, source } => {
				Self::MalformedFilter {
					operand: operand.flip(),
					source,
				}
			}
			| other => other,
		}
	}
}

/// Relation engine carrying the settings used to interpret `#`.
///
/// Holds no state besides its settings, so a single value can be shared
/// freely between threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TopicRelation {
	settings: RelationSettings,
}

impl TopicRelation {
	/// Creates an engine with the given settings.
	pub fn new(settings: RelationSettings) -> Self {
		Self { settings }
	}

	/// Returns the settings of this engine.
	pub fn settings(&self) -> RelationSettings {
		self.settings
	}

	/// Returns true if every topic matched by `filter_a` is also matched by
	/// `filter_b`.
	///
	/// Surrounding whitespace of both filters is ignored. Empty or
	/// malformed filters are reported as errors rather than as `false`.
	pub fn is_subset(
		&self,
		filter_a: &str,
		filter_b: &str,
	) -> RelationResult<bool> {
		let left = parse_operand(filter_a, Operand::Left)?;
		let right = parse_operand(filter_b, Operand::Right)?;

		if left.as_str() == right.as_str() {
			tracing::trace!(filter = %left, "identical filters");
			return Ok(true);
		}

		Ok(self.relate_filters(&left, &right))
	}

	/// Returns true if every topic matched by `filter_b` is also matched by
	/// `filter_a`.
	pub fn is_superset(
		&self,
		filter_a: &str,
		filter_b: &str,
	) -> RelationResult<bool> {
		self.is_subset(filter_b, filter_a)
			.map_err(TopicRelationError::with_swapped_operands)
	}

	/// Returns true if the concrete `topic` is matched by `filter`.
	pub fn matches(&self, topic: &str, filter: &str) -> RelationResult<bool> {
		let topic = parse_operand(topic, Operand::Left)?;
		if topic.has_wildcards() {
			tracing::debug!(topic = %topic, "wildcard in concrete topic");
			return Err(TopicRelationError::WildcardInTopic {
				topic: topic.as_str().to_string(),
			});
		}
		let filter = parse_operand(filter, Operand::Right)?;

		Ok(self.relate_filters(&topic, &filter))
	}

	/// Subset relation between two already parsed filters.
	pub fn relate_filters(
		&self,
		left: &TopicFilter,
		right: &TopicFilter,
	) -> bool {
		let related = match self.settings.multi_level {
			| MultiLevelSemantics::Subscription => {
				subscription_subset(left.levels(), right.levels())
			}
			| MultiLevelSemantics::Containment => {
				containment_subset(left.levels(), right.levels())
			}
		};
		tracing::trace!(
			left = %left,
			right = %right,
			semantics = %self.settings.multi_level,
			related,
			"subset relation evaluated"
		);
		related
	}
}

/// Returns true if `filter_a` is a subset of `filter_b` under the default
/// settings.
pub fn is_subset(filter_a: &str, filter_b: &str) -> RelationResult<bool> {
	TopicRelation::default().is_subset(filter_a, filter_b)
}

/// Returns true if `filter_a` is a superset of `filter_b` under the default
/// settings.
pub fn is_superset(filter_a: &str, filter_b: &str) -> RelationResult<bool> {
	TopicRelation::default().is_superset(filter_a, filter_b)
}

/// Returns true if the concrete `topic` is matched by `filter` under the
/// default settings.
pub fn matches_topic(topic: &str, filter: &str) -> RelationResult<bool> {
	TopicRelation::default().matches(topic, filter)
}

fn parse_operand(input: &str, operand: Operand) -> RelationResult<TopicFilter> {
	TopicFilter::parse(input).map_err(|err| {
		tracing::debug!(%operand, error = %err, "rejected topic filter");
		TopicRelationError::from_filter_error(operand, err)
	})
}

/// `#` absorbs only on the containing side and only while the contained
/// side still has a level at that position. On the contained side `#` is
/// compared like any other level.
fn subscription_subset(
	contained: &[TopicFilterItem],
	containing: &[TopicFilterItem],
) -> bool {
	let mut index = 0;
	loop {
		match (contained.get(index), containing.get(index)) {
			| (None, None) => return true,
			| (None, Some(_)) | (Some(_), None) => return false,
			| (Some(head1), Some(head2)) if head1 == head2 => {}
			| (Some(_), Some(TopicFilterItem::MultiLevel)) => {
				debug_assert_eq!(index, containing.len() - 1);
				return true;
			}
			| (Some(_), Some(TopicFilterItem::SingleLevel)) => {}
			| (Some(_), Some(TopicFilterItem::Literal(_))) => return false,
		}
		index += 1;
	}
}

/// Match-set containment: `#` also matches zero levels, and a wildcard on
/// the contained side is only covered by an equal or wider wildcard.
fn containment_subset(
	contained: &[TopicFilterItem],
	containing: &[TopicFilterItem],
) -> bool {
	let mut index = 0;
	loop {
		match (contained.get(index), containing.get(index)) {
			| (None, None) => return true,
			| (_, Some(TopicFilterItem::MultiLevel)) => return true,
			| (None, Some(_)) | (Some(_), None) => return false,
			| (Some(TopicFilterItem::MultiLevel), Some(_)) => return false,
			| (Some(_), Some(TopicFilterItem::SingleLevel)) => {}
			| (
				Some(TopicFilterItem::SingleLevel),
				Some(TopicFilterItem::Literal(_)),
			) => return false,
			| (
				Some(TopicFilterItem::Literal(a)),
				Some(TopicFilterItem::Literal(b)),
			) => {
				if a != b {
					return false;
				}
			}
		}
		index += 1;
	}
}

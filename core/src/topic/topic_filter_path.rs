use std::slice::Iter;

use arcstr::ArcStr;
use smallvec::SmallVec;

use super::topic_filter_item::{TopicFilterError, TopicFilterItem};
use super::topic_relation::TopicRelation;

/// Inline capacity for filter levels; deeper filters spill to the heap.
const INLINE_LEVELS: usize = 8;

/// Parsed topic filter: the trimmed source text and its levels.
///
/// Literal levels are substrings of the source text, so parsing allocates
/// at most once for the text and once more only for filters deeper than
/// eight levels.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TopicFilter {
	filter: ArcStr,
	levels: SmallVec<[TopicFilterItem; INLINE_LEVELS]>,
}

impl TopicFilter {
	/// Parses and validates a topic filter.
	///
	/// Surrounding whitespace is trimmed before parsing; whitespace inside
	/// levels is kept as-is. Only `+` and `#` levels are wildcards, and a
	/// `#` level is only accepted as the last level.
	pub fn parse(filter: impl Into<ArcStr>) -> Result<Self, TopicFilterError> {
		let raw = filter.into();
		let trimmed = raw.trim();
		if trimmed.is_empty() {
			return Err(TopicFilterError::EmptyFilter);
		}
		let filter = if trimmed.len() == raw.len() {
			raw.clone()
		} else {
			ArcStr::from(trimmed)
		};

		let levels: SmallVec<[TopicFilterItem; INLINE_LEVELS]> = filter
			.split('/')
			.map(|level| TopicFilterItem::from(filter.substr_from(level)))
			.collect();

		if let Some(hash_pos) = levels.iter().position(|l| l.is_multi_level())
		{
			if hash_pos != levels.len() - 1 {
				return Err(TopicFilterError::hash_position(filter.as_str()));
			}
		}

		Ok(Self { filter, levels })
	}

	/// Returns the trimmed filter text.
	pub fn as_str(&self) -> &str {
		&self.filter
	}

	/// Returns the trimmed filter text as a shared string.
	pub fn filter(&self) -> ArcStr {
		self.filter.clone()
	}

	/// Returns number of levels.
	pub fn len(&self) -> usize {
		self.levels.len()
	}

	/// Always false for a parsed filter; provided alongside `len`.
	pub fn is_empty(&self) -> bool {
		self.levels.is_empty()
	}

	/// Returns iterator over levels.
	pub fn iter(&self) -> Iter<'_, TopicFilterItem> {
		self.levels.iter()
	}

	/// Returns levels as slice.
	pub fn levels(&self) -> &[TopicFilterItem] {
		&self.levels
	}

	/// Returns true if any level is `+` or `#`.
	pub fn has_wildcards(&self) -> bool {
		self.levels.iter().any(TopicFilterItem::is_wildcard)
	}

	/// Returns true if the filter ends with `#`.
	pub fn ends_with_multi_level(&self) -> bool {
		self.levels.last().is_some_and(TopicFilterItem::is_multi_level)
	}

	/// Returns true if every topic matched by `self` is matched by `other`,
	/// using the default relation settings.
	pub fn is_subset_of(&self, other: &TopicFilter) -> bool {
		TopicRelation::default().relate_filters(self, other)
	}

	/// Returns true if every topic matched by `other` is matched by `self`,
	/// using the default relation settings.
	pub fn is_superset_of(&self, other: &TopicFilter) -> bool {
		TopicRelation::default().relate_filters(other, self)
	}

	/// Returns true if `topic` is a concrete topic matched by this filter.
	///
	/// A topic containing wildcards is never matched.
	pub fn matches_topic(&self, topic: &TopicFilter) -> bool {
		!topic.has_wildcards()
			&& TopicRelation::default().relate_filters(topic, self)
	}
}

impl std::fmt::Display for TopicFilter {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.filter)
	}
}

impl TryFrom<&str> for TopicFilter {
	type Error = TopicFilterError;

	fn try_from(value: &str) -> Result<Self, Self::Error> {
		Self::parse(value)
	}
}

impl TryFrom<String> for TopicFilter {
	type Error = TopicFilterError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Self::parse(value)
	}
}

impl TryFrom<ArcStr> for TopicFilter {
	type Error = TopicFilterError;

	fn try_from(value: ArcStr) -> Result<Self, Self::Error> {
		Self::parse(value)
	}
}

impl std::str::FromStr for TopicFilter {
	type Err = TopicFilterError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

//! Topic filter level types and parsing

use arcstr::Substr;
use thiserror::Error;

/// Error types for topic filter parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TopicFilterError {
	/// Filter is empty or consists only of whitespace
	#[error("Topic filter cannot be empty")]
	EmptyFilter,

	/// Multi-level wildcard (#) used anywhere but the last level
	#[error(
		"Invalid topic filter '{filter}': # wildcard can only be the last \
		 level"
	)]
	HashPosition {
		/// The offending filter
		filter: String,
	},
}

impl TopicFilterError {
	/// Creates a new HashPosition error
	pub fn hash_position(filter: impl Into<String>) -> Self {
		Self::HashPosition {
			filter: filter.into(),
		}
	}
}

/// One level of a topic filter: literal text or a wildcard
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TopicFilterItem {
	/// Literal level, possibly empty
	Literal(Substr),
	/// Single-level wildcard `+`
	SingleLevel,
	/// Multi-level wildcard `#`
	MultiLevel,
}

impl TopicFilterItem {
	/// Returns string representation of the level.
	pub fn as_str(&self) -> &str {
		match self {
			| TopicFilterItem::Literal(s) => s,
			| TopicFilterItem::SingleLevel => "+",
			| TopicFilterItem::MultiLevel => "#",
		}
	}

	/// Returns true if this level is a wildcard (+ or #).
	pub fn is_wildcard(&self) -> bool {
		matches!(
			self,
			TopicFilterItem::SingleLevel | TopicFilterItem::MultiLevel
		)
	}

	/// Returns true for `#`.
	pub fn is_multi_level(&self) -> bool {
		matches!(self, TopicFilterItem::MultiLevel)
	}

	/// Returns true for `+`.
	pub fn is_single_level(&self) -> bool {
		matches!(self, TopicFilterItem::SingleLevel)
	}
}

impl std::fmt::Display for TopicFilterItem {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

impl From<Substr> for TopicFilterItem {
	/// Only a level that is exactly `+` or `#` is a wildcard; everything
	/// else, including `a+`, `b#` and empty levels, is a literal.
	fn from(level: Substr) -> Self {
		match level.as_str() {
			| "+" => TopicFilterItem::SingleLevel,
			| "#" => TopicFilterItem::MultiLevel,
			| _ => TopicFilterItem::Literal(level),
		}
	}
}

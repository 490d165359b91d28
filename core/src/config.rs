//! Configuration for relation queries

use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use thiserror::Error;

/// How the multi-level wildcard `#` takes part in a subset relation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MultiLevelSemantics {
	/// `#` absorbs trailing levels only on the containing side, and only
	/// when the contained side has at least one level left at its
	/// position. `#` on the contained side is compared like any level.
	#[default]
	Subscription,
	/// Exact match-set containment: `#` also matches zero levels, and a
	/// wildcard on the contained side must be covered by an equal or wider
	/// wildcard.
	Containment,
}

impl MultiLevelSemantics {
	/// Returns the configuration name.
	pub fn as_str(&self) -> &'static str {
		match self {
			| MultiLevelSemantics::Subscription => "subscription",
			| MultiLevelSemantics::Containment => "containment",
		}
	}
}

impl fmt::Display for MultiLevelSemantics {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Unknown name for [`MultiLevelSemantics`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(
	"Unknown multi-level semantics '{0}' (expected 'subscription' or \
	 'containment')"
)]
pub struct ParseSemanticsError(pub String);

impl FromStr for MultiLevelSemantics {
	type Err = ParseSemanticsError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			| "subscription" => Ok(MultiLevelSemantics::Subscription),
			| "containment" => Ok(MultiLevelSemantics::Containment),
			| _ => Err(ParseSemanticsError(s.to_string())),
		}
	}
}

/// Settings of a relation engine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RelationSettings {
	/// Interpretation of `#`
	pub multi_level: MultiLevelSemantics,
}

impl RelationSettings {
	/// Creates default settings.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the interpretation of `#`.
	pub fn with_multi_level(
		mut self,
		multi_level: MultiLevelSemantics,
	) -> Self {
		self.multi_level = multi_level;
		self
	}
}

/// Caching of relation results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CacheStrategy {
	/// Every query is evaluated
	#[default]
	NoCache,
	/// Results are kept in an LRU cache of the given capacity
	Lru(NonZeroUsize),
}

impl CacheStrategy {
	/// LRU strategy, or `NoCache` for a capacity of zero.
	pub fn lru(capacity: usize) -> Self {
		NonZeroUsize::new(capacity).map_or(Self::NoCache, Self::Lru)
	}
}

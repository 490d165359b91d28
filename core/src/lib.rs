//! # Topic Filter Relation
//!
//! Decides whether one MQTT-style topic filter is a subset (or superset)
//! of another: does every topic matched by filter A also match filter B?
//! Brokers use the answer to deduplicate subscriptions, detect overlapping
//! subscriptions and authorize a requested filter against a granted one.
//!
//! ## Quick Start
//!
//! ```rust
//! use topic_filter_relation_core::{
//!     TopicRelationError, is_subset, is_superset,
//! };
//!
//! assert!(is_subset("sensors/kitchen/temp", "sensors/+/temp")?);
//! assert!(is_subset("sensors/kitchen/temp", "sensors/#")?);
//! assert!(!is_subset("sensors/#", "sensors/kitchen/temp")?);
//! assert!(is_superset("sensors/#", "sensors/kitchen/temp")?);
//! # Ok::<(), TopicRelationError>(())
//! ```
//!
//! ## Wildcards
//!
//! - `+` matches exactly one level, including an empty one
//! - `#` matches trailing levels and may only be the last level
//!
//! Empty input and misplaced `#` are reported as
//! [`TopicRelationError`] instead of a plain `false`.
//!
//! ## Multi-level semantics
//!
//! By default (`MultiLevelSemantics::Subscription`) `#` absorbs levels only
//! on the containing (right) side and needs at least one remaining level to
//! absorb, so `"a/b"` is not a subset of `"a/b/#"`, and `"a/#"` is a subset
//! of `"a/+"`. `MultiLevelSemantics::Containment` switches to exact
//! match-set containment:
//!
//! ```rust
//! use topic_filter_relation_core::{
//!     MultiLevelSemantics, RelationSettings, TopicRelation,
//! };
//!
//! let relation = TopicRelation::new(
//!     RelationSettings::new()
//!         .with_multi_level(MultiLevelSemantics::Containment),
//! );
//! assert!(relation.is_subset("a/b", "a/b/#").unwrap());
//! assert!(!relation.is_subset("a/#", "a/+").unwrap());
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod topic;

// === Core Public API ===
pub use config::{
	CacheStrategy, MultiLevelSemantics, ParseSemanticsError, RelationSettings,
};
pub use topic::{
	Operand, RelationCache, TopicError, TopicFilter, TopicFilterError,
	TopicFilterItem, TopicRelation, TopicRelationError, is_subset,
	is_superset, matches_topic,
};

/// Result type alias for relation queries
pub type Result<T> = std::result::Result<T, TopicRelationError>;

/// Prelude module for convenient imports
///
/// ```rust
/// use topic_filter_relation_core::prelude::*;
/// ```
pub mod prelude {
	pub use crate::{
		CacheStrategy, MultiLevelSemantics, RelationCache, RelationSettings,
		TopicFilter, TopicRelation, TopicRelationError, is_subset,
		is_superset, matches_topic,
	};
}

/// Error types used throughout the library
///
/// ```rust
/// use topic_filter_relation_core::errors::*;
/// ```
pub mod errors {
	pub use crate::topic::{FilterResult, RelationResult, TopicResult};
	pub use crate::{
		ParseSemanticsError, TopicError, TopicFilterError, TopicRelationError,
	};
}

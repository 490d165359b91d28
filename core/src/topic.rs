//! Topic filter handling
//!
//! This module parses MQTT-style topic filters into levels and decides
//! subset/superset relations between them.

// Submodules
pub mod error;
pub mod relation_cache;
pub mod topic_filter_item;
/// Topic filter parsing and validation
pub mod topic_filter_path;
pub mod topic_relation;

#[cfg(test)]
mod topic_relation_tests;

// Re-export commonly used types for convenience
pub use error::{FilterResult, RelationResult, TopicError, TopicResult};
pub use relation_cache::RelationCache;
pub use topic_filter_item::{TopicFilterError, TopicFilterItem};
pub use topic_filter_path::TopicFilter;
pub use topic_relation::{
	Operand, TopicRelation, TopicRelationError, is_subset, is_superset,
	matches_topic,
};

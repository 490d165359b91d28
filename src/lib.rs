//! # Topic Filter Relation
//!
//! Subset and superset relations between MQTT-style topic filters.
//!
//! The relation engine lives in `topic_filter_relation_core` and is
//! re-exported here; this crate adds [`RelationMatrix`], which evaluates a
//! relation for every ordered pair of a filter list and backs the
//! `topic-relation` command line tool.
//!
//! ```rust
//! use topic_filter_relation::{RelationKind, RelationMatrix, TopicRelation};
//!
//! let matrix = RelationMatrix::compute(
//!     ["A/B/C", "A/+/C", "A/#"],
//!     RelationKind::Subset,
//!     &TopicRelation::default(),
//! );
//! assert_eq!(matrix.related_to("A/B/C"), ["A/B/C", "A/+/C", "A/#"]);
//! ```

#![warn(missing_docs)]

pub mod matrix;

pub use matrix::{RelationEntry, RelationKind, RelationMatrix, SEED_FILTERS};
pub use topic_filter_relation_core::*;

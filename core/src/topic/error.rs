//! Error types and utilities for the topic module
//!
//! This module holds the composite error type of the topic module;
//! individual error types stay in their own modules.

use thiserror::Error;

use super::topic_filter_item::TopicFilterError;
use super::topic_relation::TopicRelationError;
use crate::config::ParseSemanticsError;

/// Comprehensive error type for all topic-related operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TopicError {
	/// Topic filter parsing or validation error
	#[error("Topic filter error: {0}")]
	Filter(#[from] TopicFilterError),

	/// Relation query rejected its input
	#[error("Topic relation error: {0}")]
	Relation(#[from] TopicRelationError),

	/// Unknown semantics name in configuration
	#[error("Configuration error: {0}")]
	Config(#[from] ParseSemanticsError),
}

/// Convenient Result type for topic operations
pub type TopicResult<T> = Result<T, TopicError>;

/// Convenient Result type for filter parsing
pub type FilterResult<T> = Result<T, TopicFilterError>;

/// Convenient Result type for relation queries
pub type RelationResult<T> = Result<T, TopicRelationError>;

//! Memoised subset relation for repeatedly evaluated filter pairs

use std::sync::{Mutex, MutexGuard, PoisonError};

use arcstr::ArcStr;
use lru::LruCache;

use super::error::RelationResult;
use super::topic_relation::{TopicRelation, TopicRelationError};
use crate::config::CacheStrategy;

type RelationKey = (ArcStr, ArcStr);

/// Relation engine with an optional LRU cache of subset results.
///
/// Keys are the trimmed filter texts in subset order. Only successful
/// results are cached; rejected input is re-evaluated every time.
#[derive(Debug)]
pub struct RelationCache {
	relation: TopicRelation,
	/// `Mutex` so the cache can be shared between threads.
	cache: Option<Mutex<LruCache<RelationKey, bool>>>,
}

impl RelationCache {
	/// Creates a cache around `relation`.
	pub fn new(relation: TopicRelation, strategy: CacheStrategy) -> Self {
		let cache = match strategy {
			| CacheStrategy::Lru(capacity) => {
				Some(Mutex::new(LruCache::new(capacity)))
			}
			| CacheStrategy::NoCache => None,
		};
		Self { relation, cache }
	}

	/// Returns the wrapped engine.
	pub fn relation(&self) -> TopicRelation {
		self.relation
	}

	/// Returns the cache strategy this instance was built with.
	pub fn cache_strategy(&self) -> CacheStrategy {
		match &self.cache {
			| Some(cache) => CacheStrategy::Lru(lock(cache).cap()),
			| None => CacheStrategy::NoCache,
		}
	}

	/// Number of cached results.
	pub fn len(&self) -> usize {
		self.cache.as_ref().map_or(0, |cache| lock(cache).len())
	}

	/// Returns true if nothing is cached.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Drops all cached results.
	pub fn clear(&self) {
		if let Some(cache) = &self.cache {
			lock(cache).clear();
		}
	}

	/// Cached [`TopicRelation::is_subset`].
	pub fn is_subset(
		&self,
		filter_a: &str,
		filter_b: &str,
	) -> RelationResult<bool> {
		let Some(cache) = &self.cache else {
			return self.relation.is_subset(filter_a, filter_b);
		};

		let key: RelationKey =
			(ArcStr::from(filter_a.trim()), ArcStr::from(filter_b.trim()));
		if let Some(related) = lock(cache).get(&key).copied() {
			tracing::debug!(
				left = %key.0,
				right = %key.1,
				related,
				"relation cache hit"
			);
			return Ok(related);
		}

		let related = self.relation.is_subset(&key.0, &key.1)?;
		tracing::debug!(
			left = %key.0,
			right = %key.1,
			related,
			"relation cache miss"
		);
		lock(cache).put(key, related);
		Ok(related)
	}

	/// Cached [`TopicRelation::is_superset`].
	pub fn is_superset(
		&self,
		filter_a: &str,
		filter_b: &str,
	) -> RelationResult<bool> {
		self.is_subset(filter_b, filter_a)
			.map_err(TopicRelationError::with_swapped_operands)
	}
}

// Cached values are plain booleans, so a poisoned lock is still consistent.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
	mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

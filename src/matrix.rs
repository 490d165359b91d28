//! Relation matrix over every ordered pair of a list of topic filters

use std::fmt;

use serde::{Serialize, Serializer};
use topic_filter_relation_core::{
	MultiLevelSemantics, TopicRelation, TopicRelationError,
};

/// Filters the matrix is computed over when none are supplied.
pub const SEED_FILTERS: [&str; 12] = [
	"A/B/C", "A/B/#", "A/B/Z", "A/+/C", "A/+/#", "A/Y/Z", "X/B/C", "+/B/C",
	"+/B", "X/Y/Z", "X/#", "+/+/#",
];

/// Relation evaluated for each pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationKind {
	/// Left is a subset of right
	Subset,
	/// Left is a superset of right
	Superset,
}

impl RelationKind {
	/// Returns the relation name.
	pub fn as_str(&self) -> &'static str {
		match self {
			| RelationKind::Subset => "subset",
			| RelationKind::Superset => "superset",
		}
	}

	fn evaluate(
		&self,
		relation: &TopicRelation,
		left: &str,
		right: &str,
	) -> Result<bool, TopicRelationError> {
		match self {
			| RelationKind::Subset => relation.is_subset(left, right),
			| RelationKind::Superset => relation.is_superset(left, right),
		}
	}
}

impl fmt::Display for RelationKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Outcome for one ordered pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelationEntry {
	/// Relation that was evaluated
	pub kind: RelationKind,
	/// First operand
	pub left: String,
	/// Second operand
	pub right: String,
	/// True if the relation holds; false when it does not or on error
	pub related: bool,
	/// Rejection of the pair's input, if any
	#[serde(
		skip_serializing_if = "Option::is_none",
		serialize_with = "serialize_error"
	)]
	pub error: Option<TopicRelationError>,
}

impl fmt::Display for RelationEntry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.error {
			| Some(err) => write!(
				f,
				"\"{}\" cannot be compared with \"{}\": {err}",
				self.left, self.right
			),
			| None if self.related => write!(
				f,
				"\"{}\" is a {} of \"{}\"",
				self.left, self.kind, self.right
			),
			| None => write!(
				f,
				"\"{}\" is NOT a {} of \"{}\"",
				self.left, self.kind, self.right
			),
		}
	}
}

/// Relation results for all ordered pairs of a filter list, row by row
#[derive(Debug, Clone, Serialize)]
pub struct RelationMatrix {
	kind: RelationKind,
	#[serde(serialize_with = "serialize_display")]
	semantics: MultiLevelSemantics,
	filters: Vec<String>,
	entries: Vec<RelationEntry>,
}

impl RelationMatrix {
	/// Evaluates `kind` for every ordered pair `(a, b)` of `filters`.
	///
	/// Rejected input is recorded in the pair's entry; it does not stop
	/// the computation.
	pub fn compute<I, S>(
		filters: I,
		kind: RelationKind,
		relation: &TopicRelation,
	) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let filters: Vec<String> =
			filters.into_iter().map(Into::into).collect();
		let mut entries = Vec::with_capacity(filters.len() * filters.len());

		for left in &filters {
			for right in &filters {
				let (related, error) =
					match kind.evaluate(relation, left, right) {
						| Ok(related) => (related, None),
						| Err(err) => {
							tracing::warn!(
								%left,
								%right,
								error = %err,
								"pair rejected"
							);
							(false, Some(err))
						}
					};
				entries.push(RelationEntry {
					kind,
					left: left.clone(),
					right: right.clone(),
					related,
					error,
				});
			}
		}

		tracing::debug!(
			%kind,
			filters = filters.len(),
			related = entries.iter().filter(|e| e.related).count(),
			"relation matrix computed"
		);

		Self {
			kind,
			semantics: relation.settings().multi_level,
			filters,
			entries,
		}
	}

	/// Relation of this matrix.
	pub fn kind(&self) -> RelationKind {
		self.kind
	}

	/// Semantics the matrix was computed with.
	pub fn semantics(&self) -> MultiLevelSemantics {
		self.semantics
	}

	/// Filters in input order.
	pub fn filters(&self) -> &[String] {
		&self.filters
	}

	/// All entries, grouped by left operand in input order.
	pub fn entries(&self) -> &[RelationEntry] {
		&self.entries
	}

	/// Right operands for which the relation holds with `left`.
	pub fn related_to(&self, left: &str) -> Vec<&str> {
		self.entries
			.iter()
			.filter(|e| e.related && e.left == left)
			.map(|e| e.right.as_str())
			.collect()
	}

	/// Number of pairs for which the relation holds.
	pub fn related_count(&self) -> usize {
		self.entries.iter().filter(|e| e.related).count()
	}

	/// Number of pairs whose input was rejected.
	pub fn error_count(&self) -> usize {
		self.entries.iter().filter(|e| e.error.is_some()).count()
	}

	/// Pretty-printed JSON representation.
	pub fn to_json(&self) -> serde_json::Result<String> {
		serde_json::to_string_pretty(self)
	}
}

impl fmt::Display for RelationMatrix {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(
			f,
			"Testing {} relation ({} semantics)...",
			self.kind, self.semantics
		)?;
		for entry in &self.entries {
			writeln!(f, "{entry}")?;
		}
		Ok(())
	}
}

fn serialize_error<S: Serializer>(
	error: &Option<TopicRelationError>,
	serializer: S,
) -> Result<S::Ok, S::Error> {
	match error {
		| Some(err) => serializer.serialize_some(&err.to_string()),
		| None => serializer.serialize_none(),
	}
}

fn serialize_display<T: fmt::Display, S: Serializer>(
	value: &T,
	serializer: S,
) -> Result<S::Ok, S::Error> {
	serializer.collect_str(value)
}

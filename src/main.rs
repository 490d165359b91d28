mod logging;

use clap::{Parser, ValueEnum};
use topic_filter_relation::{
	MultiLevelSemantics, RelationKind, RelationMatrix, RelationSettings,
	SEED_FILTERS, TopicRelation,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum RelationArg {
	Subset,
	Superset,
	Both,
}

impl RelationArg {
	fn kinds(self) -> &'static [RelationKind] {
		match self {
			| RelationArg::Subset => &[RelationKind::Subset],
			| RelationArg::Superset => &[RelationKind::Superset],
			| RelationArg::Both => {
				&[RelationKind::Subset, RelationKind::Superset]
			}
		}
	}
}

/// Evaluates subset/superset relations between every ordered pair of
/// topic filters.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
	/// Topic filters to compare; the seed set is used when none are given
	filters: Vec<String>,

	/// Relation to evaluate
	#[arg(short, long, value_enum, default_value_t = RelationArg::Both)]
	relation: RelationArg,

	/// Interpretation of the multi-level wildcard: subscription or
	/// containment
	#[arg(
		short,
		long,
		env = "TOPIC_RELATION_SEMANTICS",
		default_value = "subscription"
	)]
	semantics: MultiLevelSemantics,

	/// Print the matrices as JSON
	#[arg(long)]
	json: bool,

	/// Tracing filter, overrides RUST_LOG (e.g. "debug")
	#[arg(long, value_name = "LEVEL")]
	log_level: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	// .env may provide TOPIC_RELATION_SEMANTICS and RUST_LOG
	dotenv::dotenv().ok();
	let args = Args::parse();
	logging::setup(args.log_level.as_deref());

	let filters = if args.filters.is_empty() {
		SEED_FILTERS.iter().map(|f| f.to_string()).collect()
	} else {
		args.filters
	};
	let relation = TopicRelation::new(
		RelationSettings::new().with_multi_level(args.semantics),
	);
	tracing::info!(
		filters = filters.len(),
		semantics = %args.semantics,
		"evaluating relation matrix"
	);

	let matrices: Vec<RelationMatrix> = args
		.relation
		.kinds()
		.iter()
		.map(|&kind| {
			RelationMatrix::compute(filters.iter().cloned(), kind, &relation)
		})
		.collect();

	if args.json {
		println!("{}", serde_json::to_string_pretty(&matrices)?);
	} else {
		for (i, matrix) in matrices.iter().enumerate() {
			if i > 0 {
				println!();
			}
			print!("{matrix}");
		}
	}

	let errors: usize = matrices.iter().map(RelationMatrix::error_count).sum();
	if errors > 0 {
		tracing::warn!(errors, "some filter pairs were rejected");
	}
	Ok(())
}

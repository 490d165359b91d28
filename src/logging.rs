use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Setup tracing based on environment or explicit configuration
///
/// Priority (first match wins):
/// 1. If RUST_LOG_DISABLE is set - disable tracing completely
/// 2. If `force_level` provided - use it
/// 3. If RUST_LOG set - use environment configuration
/// 4. Otherwise - no tracing (silent)
///
/// Events go to stderr so that stdout carries only the relation output.
pub fn setup(force_level: Option<&str>) {
	if std::env::var("RUST_LOG_DISABLE").is_ok() {
		return;
	}

	let filter = if let Some(level) = force_level {
		tracing_subscriber::EnvFilter::new(level)
	} else if std::env::var("RUST_LOG").is_ok() {
		tracing_subscriber::EnvFilter::try_from_default_env()
			.unwrap_or_else(|_| "info".into())
	} else {
		return;
	};

	tracing_subscriber::registry()
		.with(filter)
		.with(
			tracing_subscriber::fmt::layer()
				.with_writer(std::io::stderr)
				.with_target(true)
				.with_thread_ids(false)
				.with_file(false)
				.with_line_number(false)
				.compact(),
		)
		.init();
}

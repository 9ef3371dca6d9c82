//! Process-wide logging setup shared by the server binary and test harnesses.

/// Initialize tracing for the process with the default format.
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(tracing::LogFormat::from_env());
}

/// Tracing configuration (filters, output format).
pub mod tracing;

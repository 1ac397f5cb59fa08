//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, ObservabilityConfig};

/// Initialize tracing/logging for the process with `config`.
///
/// Safe to call multiple times (subsequent calls are no-ops). An invalid
/// filter directive falls back to `info`.
pub fn init_with(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_new(&config.filter).unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false);

    let installed = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };

    if installed.is_ok() {
        log_initialized(config);
    }
}

fn log_initialized(config: &ObservabilityConfig) {
    ::tracing::debug!(
        filter = %config.filter,
        format = ?config.format,
        "tracing initialized"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_a_no_op() {
        let config = ObservabilityConfig {
            filter: "not a [valid directive".to_string(),
            format: LogFormat::Pretty,
        };
        init_with(&config);
        init_with(&ObservabilityConfig::default());
        ::tracing::info!("still running");
    }

    #[derive(Clone, Default)]
    struct Captured(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner)
                .extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn initialization_reports_effective_config() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(::tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let config = ObservabilityConfig {
            filter: "orderentry_sales=debug".to_string(),
            format: LogFormat::Json,
        };
        ::tracing::subscriber::with_default(subscriber, || log_initialized(&config));

        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("tracing initialized"));
        assert!(output.contains("orderentry_sales=debug"));
        assert!(output.contains("Json"));
    }
}

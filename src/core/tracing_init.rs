use crate::core::config::LoggingConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber. RUST_LOG takes precedence over the configured level.
pub fn init_tracing(config: &LoggingConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    if use_console_output(config) {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_ansi(true)
                    .with_line_number(true),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(true),
            )
            .init();
    }
}

fn use_console_output(config: &LoggingConfig) -> bool {
    config.console || config.format == "console"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logging(format: &str, console: bool) -> LoggingConfig {
        LoggingConfig {
            level: "info".to_string(),
            format: format.to_string(),
            console,
        }
    }

    #[test]
    fn test_console_flag_overrides_json_format() {
        assert!(use_console_output(&logging("json", true)));
        assert!(use_console_output(&logging("console", false)));
        assert!(!use_console_output(&logging("json", false)));
    }
}

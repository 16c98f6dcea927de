use std::sync::Once;

/// Filter used when neither the config nor `RUST_LOG` names one. The GPU
/// stack is chatty at info level.
pub const DEFAULT_FILTER: &str = "info,wgpu_core=warn,wgpu_hal=warn,naga=warn";

/// Logger settings for [`init_logging`].
///
/// `env_filter` uses `env_logger` syntax, e.g. `"debug"` or
/// `"vellum_engine=trace,wgpu=warn"`. When unset, `RUST_LOG` is consulted,
/// then [`DEFAULT_FILTER`].
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
    /// Millisecond timestamps instead of whole seconds; useful when reading
    /// per-frame traces.
    pub precise_timestamps: bool,
}

impl LoggingConfig {
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    pub fn precise_timestamps(mut self, on: bool) -> Self {
        self.precise_timestamps = on;
        self
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
            precise_timestamps: false,
        }
    }
}

static INIT: Once = Once::new();

/// Installs the global `env_logger` backend. Only the first call has any
/// effect; call it early in `main`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let env = std::env::var("RUST_LOG").ok();
        let filter = resolve_filter(config.env_filter.as_deref(), env.as_deref());

        let mut builder = env_logger::Builder::new();
        builder.parse_filters(filter);
        builder.write_style(config.write_style);
        if config.precise_timestamps {
            builder.format_timestamp_millis();
        }

        // Another logger may already be installed by a host binary or test harness.
        if let Err(err) = builder.try_init() {
            eprintln!("vellum: logger not installed: {err}");
            return;
        }

        log::debug!("logging initialized with filter {filter:?}");
    });
}

/// Picks the filter: explicit config, then `RUST_LOG`, then [`DEFAULT_FILTER`].
/// Blank values count as unset.
fn resolve_filter<'a>(configured: Option<&'a str>, env: Option<&'a str>) -> &'a str {
    configured
        .filter(|f| !f.trim().is_empty())
        .or(env.filter(|f| !f.trim().is_empty()))
        .unwrap_or(DEFAULT_FILTER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_filter_wins() {
        assert_eq!(resolve_filter(Some("debug"), Some("warn")), "debug");
    }

    #[test]
    fn env_used_when_unconfigured() {
        assert_eq!(resolve_filter(None, Some("warn")), "warn");
        assert_eq!(resolve_filter(Some("  "), Some("warn")), "warn");
    }

    #[test]
    fn falls_back_to_default() {
        assert_eq!(resolve_filter(None, None), DEFAULT_FILTER);
        assert_eq!(resolve_filter(None, Some("")), DEFAULT_FILTER);
    }

    #[test]
    fn init_is_idempotent() {
        init_logging(LoggingConfig::default().filter("off"));
        init_logging(LoggingConfig::default());
    }
}

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// The `tracing` filter directive for this level, scoped to our crates.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "fennec=trace",
            LogLevel::Debug => "fennec=debug",
            LogLevel::Info => "fennec=info",
            LogLevel::Warn => "fennec=warn",
            LogLevel::Error => "fennec=error",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}

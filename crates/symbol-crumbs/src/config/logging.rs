use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;
use tracing_subscriber::{EnvFilter, Registry, reload};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }

    /// `EnvFilter` directive for this crate at this level.
    pub fn directive(self) -> String {
        format!("symbol_crumbs={}", self.as_str())
    }

    /// Filter for this crate at this level with `tower_lsp` kept at warn.
    pub fn env_filter(self) -> EnvFilter {
        EnvFilter::new(format!("{},tower_lsp=warn", self.directive()))
    }
}

/// Handle to the installed subscriber's filter, so client settings can
/// change verbosity after startup.
#[derive(Debug, Clone)]
pub struct LogFilter {
    handle: reload::Handle<EnvFilter, Registry>,
}

impl LogFilter {
    /// Reloadable filter layer starting at `initial`, plus its handle.
    pub fn layer(initial: EnvFilter) -> (reload::Layer<EnvFilter, Registry>, Self) {
        let (layer, handle) = reload::Layer::new(initial);
        (
            layer,
            Self {
                handle,
            },
        )
    }

    pub fn set_level(
        &self,
        level: LogLevel,
    ) -> Result<(), reload::Error> {
        self.handle.reload(level.env_filter())
    }

    /// Directives of the active filter, e.g. `"symbol_crumbs=debug,tower_lsp=warn"`.
    pub fn current(&self) -> Option<String> {
        self.handle.with_current(|filter| filter.to_string()).ok()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoggingSettings {
    pub level: LogLevel,
}

impl LoggingSettings {
    pub(crate) fn apply_patch(
        &mut self,
        patch: LoggingSettingsPatch,
    ) {
        if let Some(v) = patch.level {
            self.level = v;
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct LoggingSettingsPatch {
    pub(crate) level: Option<LogLevel>,
    #[serde(flatten)]
    pub(crate) _extra: HashMap<String, Value>,
}

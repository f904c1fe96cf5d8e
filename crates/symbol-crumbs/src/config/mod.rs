//! Layered settings for the navigator.
//!
//! Settings are split into one file per category. [`CrumbsSettings`]
//! aggregates all categories and handles JSON deserialization from LSP
//! initialization options, `didChangeConfiguration` payloads and the
//! optional `symbol-crumbs.toml` file.

pub(crate) mod breadcrumb;
pub(crate) mod file;
pub(crate) mod icons;
pub(crate) mod keymaps;
pub(crate) mod logging;
pub(crate) mod node_markers;
pub(crate) mod schema;
pub(crate) mod sections;
pub(crate) mod source_buffer;
pub(crate) mod window;

use std::collections::HashMap;

pub use breadcrumb::BreadcrumbSettings;
use breadcrumb::BreadcrumbSettingsPatch;
pub use file::{CONFIG_FILENAME, ConfigFileError, find_settings_file, load_settings_file};
pub use icons::IconSettings;
pub use keymaps::{KeymapSettings, default_keymap};
pub use logging::{LogFilter, LogLevel, LoggingSettings};
use logging::LoggingSettingsPatch;
pub use node_markers::NodeMarkerSettings;
use node_markers::NodeMarkerSettingsPatch;
pub use schema::{SchemaField, SchemaType, generate_configuration_markdown, generate_json_schema, schema_fields};
pub use sections::{PreviewMode, SectionSettings};
use sections::SectionSettingsPatch;
use serde::Deserialize;
use serde_json::Value;
pub use source_buffer::{Reorient, SourceBufferSettings};
use source_buffer::SourceBufferSettingsPatch;
pub use window::{Border, MAX_SIZE_PERCENT, MIN_SIZE_PERCENT, WindowSettings};
use window::WindowSettingsPatch;

pub const SETTINGS_SECTION_KEY: &str = "symbol-crumbs";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CrumbsSettings {
    pub window: WindowSettings,
    pub sections: SectionSettings,
    pub node_markers: NodeMarkerSettings,
    pub icons: IconSettings,
    pub source_buffer: SourceBufferSettings,
    pub keymaps: KeymapSettings,
    pub breadcrumb: BreadcrumbSettings,
    pub logging: LoggingSettings,
}

impl CrumbsSettings {
    pub fn from_lsp_payload(payload: Option<&Value>) -> Self {
        let mut settings = Self::default();
        if let Some(payload) = payload {
            settings = settings.merged_with_payload(payload);
        }
        settings
    }

    pub fn merged_with_payload(
        &self,
        payload: &Value,
    ) -> Self {
        let mut merged = self.clone();

        for candidate in payload_candidates(payload) {
            if let Ok(patch) = serde_json::from_value::<CrumbsSettingsPatch>(candidate.clone()) {
                merged.apply_patch(patch);
            }
        }

        merged.normalize();
        merged
    }

    fn apply_patch(
        &mut self,
        patch: CrumbsSettingsPatch,
    ) {
        if let Some(p) = patch.window {
            self.window.apply_patch(p);
        }
        if let Some(p) = patch.sections {
            self.sections.apply_patch(p);
        }
        if let Some(p) = patch.node_markers {
            self.node_markers.apply_patch(p);
        }
        if let Some(p) = patch.icons {
            self.icons.apply_patch(p);
        }
        if let Some(p) = patch.source_buffer {
            self.source_buffer.apply_patch(p);
        }
        if let Some(p) = patch.keymaps {
            self.keymaps.apply_patch(p);
        }
        if let Some(p) = patch.breadcrumb {
            self.breadcrumb.apply_patch(p);
        }
        if let Some(p) = patch.logging {
            self.logging.apply_patch(p);
        }
    }

    fn normalize(&mut self) {
        self.window.normalize();
        self.icons.normalize();
        self.breadcrumb.normalize();
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct CrumbsSettingsPatch {
    window: Option<WindowSettingsPatch>,
    sections: Option<SectionSettingsPatch>,
    node_markers: Option<NodeMarkerSettingsPatch>,
    icons: Option<HashMap<String, String>>,
    source_buffer: Option<SourceBufferSettingsPatch>,
    keymaps: Option<HashMap<String, String>>,
    breadcrumb: Option<BreadcrumbSettingsPatch>,
    logging: Option<LoggingSettingsPatch>,
    #[serde(flatten)]
    _extra: HashMap<String, Value>,
}

fn payload_candidates(payload: &Value) -> Vec<Value> {
    let mut candidates = Vec::new();
    candidates.push(payload.clone());
    if let Some(scoped) = payload.get(SETTINGS_SECTION_KEY) {
        candidates.push(scoped.clone());
    }
    candidates
}

#[cfg(test)]
#[path = "../../tests/src/config/settings_tests.rs"]
mod tests;

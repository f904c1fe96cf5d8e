use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

const DEFAULT_SEPARATOR: &str = " > ";

#[derive(Debug, Clone, PartialEq)]
pub struct BreadcrumbSettings {
    pub separator: String,
}

impl Default for BreadcrumbSettings {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl BreadcrumbSettings {
    pub(crate) fn apply_patch(
        &mut self,
        patch: BreadcrumbSettingsPatch,
    ) {
        if let Some(v) = patch.separator {
            self.separator = v;
        }
    }

    pub(crate) fn normalize(&mut self) {
        if self.separator.is_empty() {
            self.separator = DEFAULT_SEPARATOR.to_string();
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct BreadcrumbSettingsPatch {
    pub(crate) separator: Option<String>,
    #[serde(flatten)]
    pub(crate) _extra: HashMap<String, Value>,
}

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// When the right column shows a source preview instead of children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PreviewMode {
    /// Preview only for nodes without children.
    #[default]
    Leaf,
    Always,
    Never,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SectionSettings {
    pub preview: PreviewMode,
}

impl SectionSettings {
    pub(crate) fn apply_patch(
        &mut self,
        patch: SectionSettingsPatch,
    ) {
        if let Some(v) = patch.preview {
            self.preview = v;
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct SectionSettingsPatch {
    pub(crate) preview: Option<PreviewMode>,
    #[serde(flatten)]
    pub(crate) _extra: HashMap<String, Value>,
}

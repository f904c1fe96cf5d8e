use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How the source window scrolls when the navigator moves its cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Reorient {
    /// Recenter only when the target is off screen.
    #[default]
    Smart,
    Top,
    Mid,
    None,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SourceBufferSettings {
    /// Move the source cursor along with the focused node.
    pub follow_node: bool,
    /// Highlight the focused node's range in the source buffer.
    pub highlight: bool,
    pub reorient: Reorient,
}

impl Default for SourceBufferSettings {
    fn default() -> Self {
        Self {
            follow_node: true,
            highlight: true,
            reorient: Reorient::Smart,
        }
    }
}

impl SourceBufferSettings {
    pub(crate) fn apply_patch(
        &mut self,
        patch: SourceBufferSettingsPatch,
    ) {
        if let Some(v) = patch.follow_node {
            self.follow_node = v;
        }
        if let Some(v) = patch.highlight {
            self.highlight = v;
        }
        if let Some(v) = patch.reorient {
            self.reorient = v;
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct SourceBufferSettingsPatch {
    pub(crate) follow_node: Option<bool>,
    pub(crate) highlight: Option<bool>,
    pub(crate) reorient: Option<Reorient>,
    #[serde(flatten)]
    pub(crate) _extra: HashMap<String, Value>,
}

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct NodeMarkerSettings {
    pub enable: bool,
    /// Appended to nodes that have children.
    pub branch: String,
    /// Appended to leaf nodes.
    pub leaf: String,
}

impl Default for NodeMarkerSettings {
    fn default() -> Self {
        Self {
            enable: true,
            branch: " \u{f460}".to_string(),
            leaf: String::new(),
        }
    }
}

impl NodeMarkerSettings {
    pub(crate) fn apply_patch(
        &mut self,
        patch: NodeMarkerSettingsPatch,
    ) {
        if let Some(v) = patch.enable {
            self.enable = v;
        }
        if let Some(v) = patch.branch {
            self.branch = v;
        }
        if let Some(v) = patch.leaf {
            self.leaf = v;
        }
    }

    pub fn marker_for(
        &self,
        has_children: bool,
    ) -> &str {
        match (self.enable, has_children) {
            (false, _) => "",
            (true, true) => &self.branch,
            (true, false) => &self.leaf,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct NodeMarkerSettingsPatch {
    pub(crate) enable: Option<bool>,
    pub(crate) branch: Option<String>,
    pub(crate) leaf: Option<String>,
    #[serde(flatten)]
    pub(crate) _extra: HashMap<String, Value>,
}

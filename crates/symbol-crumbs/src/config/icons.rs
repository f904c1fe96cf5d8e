use std::collections::{BTreeMap, HashMap};

use tracing::warn;

use crate::render::icons::kind_from_name;

/// Per-kind icon overrides, keyed by lowercase kind name (`"function"`, `"class"`, ...).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IconSettings {
    pub overrides: BTreeMap<String, String>,
}

impl IconSettings {
    pub(crate) fn apply_patch(
        &mut self,
        patch: HashMap<String, String>,
    ) {
        for (kind, icon) in patch {
            self.overrides.insert(kind.trim().to_lowercase(), icon);
        }
    }

    pub(crate) fn normalize(&mut self) {
        self.overrides.retain(|kind, icon| {
            if kind_from_name(kind).is_none() {
                warn!("[icons] ignoring override for unknown symbol kind `{kind}`");
                return false;
            }
            !icon.trim().is_empty()
        });
    }

    pub fn get(
        &self,
        kind_name: &str,
    ) -> Option<&str> {
        self.overrides.get(&kind_name.to_lowercase()).map(String::as_str)
    }
}

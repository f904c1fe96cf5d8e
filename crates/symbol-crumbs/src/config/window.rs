use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const MIN_SIZE_PERCENT: u16 = 10;
pub const MAX_SIZE_PERCENT: u16 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Border {
    None,
    Single,
    Double,
    #[default]
    Rounded,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WindowSettings {
    pub border: Border,
    /// Panel size as a percentage of the editor's width and height.
    pub size_percent: u16,
    /// Rows kept visible above and below the cursor inside the panel.
    pub scrolloff: u32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            border: Border::Rounded,
            size_percent: 60,
            scrolloff: 0,
        }
    }
}

impl WindowSettings {
    pub(crate) fn apply_patch(
        &mut self,
        patch: WindowSettingsPatch,
    ) {
        if let Some(v) = patch.border {
            self.border = v;
        }
        if let Some(v) = patch.size_percent {
            self.size_percent = v;
        }
        if let Some(v) = patch.scrolloff {
            self.scrolloff = v;
        }
    }

    pub(crate) fn normalize(&mut self) {
        self.size_percent = self.size_percent.clamp(MIN_SIZE_PERCENT, MAX_SIZE_PERCENT);
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct WindowSettingsPatch {
    pub(crate) border: Option<Border>,
    pub(crate) size_percent: Option<u16>,
    pub(crate) scrolloff: Option<u32>,
    #[serde(flatten)]
    pub(crate) _extra: HashMap<String, Value>,
}

use std::collections::{BTreeMap, HashMap};

use tracing::warn;

use crate::navigator::Action;

/// Key notation bound to [`Action`]s, e.g. `"j"`, `"<CR>"`, `"<C-v>"`.
#[derive(Debug, Clone, PartialEq)]
pub struct KeymapSettings {
    pub bindings: BTreeMap<String, Action>,
}

impl Default for KeymapSettings {
    fn default() -> Self {
        Self {
            bindings: default_keymap(),
        }
    }
}

pub fn default_keymap() -> BTreeMap<String, Action> {
    [
        ("<Esc>", Action::Close),
        ("q", Action::Close),
        ("j", Action::NextSibling),
        ("<Down>", Action::NextSibling),
        ("k", Action::PreviousSibling),
        ("<Up>", Action::PreviousSibling),
        ("h", Action::Parent),
        ("<Left>", Action::Parent),
        ("l", Action::Children),
        ("<Right>", Action::Children),
        ("0", Action::Root),
        ("v", Action::VisualName),
        ("V", Action::VisualScope),
        ("y", Action::YankName),
        ("Y", Action::YankScope),
        ("i", Action::InsertName),
        ("a", Action::AppendName),
        ("r", Action::Rename),
        ("d", Action::Delete),
        ("f", Action::FoldCreate),
        ("F", Action::FoldDelete),
        ("c", Action::Comment),
        ("<CR>", Action::Select),
        ("o", Action::Select),
        ("<C-v>", Action::Vsplit),
        ("<C-s>", Action::Hsplit),
        ("s", Action::TogglePreview),
    ]
    .into_iter()
    .map(|(key, action)| (key.to_string(), action))
    .collect()
}

impl KeymapSettings {
    /// Merge user bindings over the current ones. An empty or `"none"`
    /// action unbinds the key; unknown action names are dropped.
    pub(crate) fn apply_patch(
        &mut self,
        patch: HashMap<String, String>,
    ) {
        for (key, action) in patch {
            let key = key.trim().to_string();
            if key.is_empty() {
                continue;
            }
            let action = action.trim();
            if action.is_empty() || action.eq_ignore_ascii_case("none") {
                self.bindings.remove(&key);
                continue;
            }
            match action.parse::<Action>() {
                Ok(action) => {
                    self.bindings.insert(key, action);
                },
                Err(error) => warn!("[keymaps] ignoring binding for {key}: {error}"),
            }
        }
    }

    pub fn resolve(
        &self,
        key: &str,
    ) -> Option<Action> {
        self.bindings.get(key).copied()
    }
}

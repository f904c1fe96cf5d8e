use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A user-level navigation operation, bound to keys through the keymap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    NextSibling,
    PreviousSibling,
    Parent,
    Children,
    Root,
    Select,
    Vsplit,
    Hsplit,
    Close,
    VisualName,
    VisualScope,
    YankName,
    YankScope,
    InsertName,
    AppendName,
    Rename,
    Delete,
    FoldCreate,
    FoldDelete,
    Comment,
    TogglePreview,
}

impl Action {
    pub const ALL: [Action; 21] = [
        Action::NextSibling,
        Action::PreviousSibling,
        Action::Parent,
        Action::Children,
        Action::Root,
        Action::Select,
        Action::Vsplit,
        Action::Hsplit,
        Action::Close,
        Action::VisualName,
        Action::VisualScope,
        Action::YankName,
        Action::YankScope,
        Action::InsertName,
        Action::AppendName,
        Action::Rename,
        Action::Delete,
        Action::FoldCreate,
        Action::FoldDelete,
        Action::Comment,
        Action::TogglePreview,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Action::NextSibling => "next_sibling",
            Action::PreviousSibling => "previous_sibling",
            Action::Parent => "parent",
            Action::Children => "children",
            Action::Root => "root",
            Action::Select => "select",
            Action::Vsplit => "vsplit",
            Action::Hsplit => "hsplit",
            Action::Close => "close",
            Action::VisualName => "visual_name",
            Action::VisualScope => "visual_scope",
            Action::YankName => "yank_name",
            Action::YankScope => "yank_scope",
            Action::InsertName => "insert_name",
            Action::AppendName => "append_name",
            Action::Rename => "rename",
            Action::Delete => "delete",
            Action::FoldCreate => "fold_create",
            Action::FoldDelete => "fold_delete",
            Action::Comment => "comment",
            Action::TogglePreview => "toggle_preview",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAction(pub String);

impl fmt::Display for UnknownAction {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "unknown action `{}`", self.0)
    }
}

impl std::error::Error for UnknownAction {}

impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim();
        Action::ALL.into_iter().find(|action| action.as_str() == normalized).ok_or_else(|| UnknownAction(value.to_string()))
    }
}

#[cfg(test)]
#[path = "../../tests/src/navigator/action_tests.rs"]
mod tests;

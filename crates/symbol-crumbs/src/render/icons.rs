use std::collections::HashMap;

use once_cell::sync::Lazy;
use tower_lsp::lsp_types::SymbolKind;

use crate::config::IconSettings;

pub const FALLBACK_ICON: &str = "\u{f29c} ";
const FALLBACK_NAME: &str = "Unknown";

/// `(kind, display name, default icon)` for every LSP symbol kind.
const KIND_TABLE: [(SymbolKind, &str, &str); 26] = [
    (SymbolKind::FILE, "File", "\u{f0219} "),
    (SymbolKind::MODULE, "Module", "\u{e612} "),
    (SymbolKind::NAMESPACE, "Namespace", "\u{f0317} "),
    (SymbolKind::PACKAGE, "Package", "\u{e624} "),
    (SymbolKind::CLASS, "Class", "\u{f0317} "),
    (SymbolKind::METHOD, "Method", "\u{f01a7} "),
    (SymbolKind::PROPERTY, "Property", "\u{e71e} "),
    (SymbolKind::FIELD, "Field", "\u{e71e} "),
    (SymbolKind::CONSTRUCTOR, "Constructor", "\u{f0ad} "),
    (SymbolKind::ENUM, "Enum", "\u{f0558} "),
    (SymbolKind::INTERFACE, "Interface", "\u{f0558} "),
    (SymbolKind::FUNCTION, "Function", "\u{f0295} "),
    (SymbolKind::VARIABLE, "Variable", "\u{f01a7} "),
    (SymbolKind::CONSTANT, "Constant", "\u{f03ff} "),
    (SymbolKind::STRING, "String", "\u{ea93} "),
    (SymbolKind::NUMBER, "Number", "\u{f03a0} "),
    (SymbolKind::BOOLEAN, "Boolean", "\u{25e9} "),
    (SymbolKind::ARRAY, "Array", "\u{f016a} "),
    (SymbolKind::OBJECT, "Object", "\u{f0169} "),
    (SymbolKind::KEY, "Key", "\u{f030b} "),
    (SymbolKind::NULL, "Null", "\u{f07e2} "),
    (SymbolKind::ENUM_MEMBER, "EnumMember", "\u{f02b} "),
    (SymbolKind::STRUCT, "Struct", "\u{f0317} "),
    (SymbolKind::EVENT, "Event", "\u{f0e7} "),
    (SymbolKind::OPERATOR, "Operator", "\u{f0195} "),
    (SymbolKind::TYPE_PARAMETER, "TypeParameter", "\u{f0284} "),
];

static KIND_BY_NAME: Lazy<HashMap<String, SymbolKind>> =
    Lazy::new(|| KIND_TABLE.iter().map(|(kind, name, _)| (name.to_lowercase(), *kind)).collect());

fn entry(kind: SymbolKind) -> Option<&'static (SymbolKind, &'static str, &'static str)> {
    KIND_TABLE.iter().find(|(candidate, _, _)| *candidate == kind)
}

/// Display name of `kind`, also used as a highlight-group suffix.
pub fn kind_name(kind: SymbolKind) -> &'static str {
    entry(kind).map_or(FALLBACK_NAME, |(_, name, _)| *name)
}

/// Case-insensitive inverse of [`kind_name`].
pub fn kind_from_name(name: &str) -> Option<SymbolKind> {
    KIND_BY_NAME.get(&name.trim().to_lowercase()).copied()
}

pub fn default_icon(kind: SymbolKind) -> &'static str {
    entry(kind).map_or(FALLBACK_ICON, |(_, _, icon)| *icon)
}

/// Icon for `kind`, honoring user overrides.
pub fn icon_for<'a>(
    kind: SymbolKind,
    settings: &'a IconSettings,
) -> &'a str {
    settings.get(kind_name(kind)).unwrap_or_else(|| default_icon(kind))
}

#[cfg(test)]
#[path = "../../tests/src/render/icons_tests.rs"]
mod tests;

use serde_json::Value;

use crate::{
    config::{
        keymaps::default_keymap,
        window::{MAX_SIZE_PERCENT, MIN_SIZE_PERCENT},
    },
    navigator::Action,
};

/// One entry in the generated configuration schema.
#[derive(Debug, Clone)]
pub struct SchemaField {
    pub key: String,
    pub description: String,
    pub schema_type: SchemaType,
    pub default: Value,
}

/// Subset of JSON Schema types we support.
#[derive(Debug, Clone)]
pub enum SchemaType {
    Bool,
    String,
    Integer {
        minimum: Option<i64>,
        maximum: Option<i64>,
    },
    StringEnum {
        values: Vec<&'static str>,
    },
    StringMap,
}

impl SchemaField {
    pub fn to_schema_value(&self) -> Value {
        let mut obj = serde_json::Map::new();
        obj.insert("markdownDescription".into(), Value::String(self.description.clone()));
        obj.insert("default".into(), self.default.clone());

        match &self.schema_type {
            SchemaType::Bool => {
                obj.insert("type".into(), Value::String("boolean".into()));
            },
            SchemaType::String => {
                obj.insert("type".into(), Value::String("string".into()));
            },
            SchemaType::Integer {
                minimum,
                maximum,
            } => {
                obj.insert("type".into(), Value::String("number".into()));
                if let Some(min) = minimum {
                    obj.insert("minimum".into(), Value::Number((*min).into()));
                }
                if let Some(max) = maximum {
                    obj.insert("maximum".into(), Value::Number((*max).into()));
                }
            },
            SchemaType::StringEnum {
                values,
            } => {
                obj.insert("type".into(), Value::String("string".into()));
                obj.insert("enum".into(), Value::Array(values.iter().map(|v| Value::String(v.to_string())).collect()));
            },
            SchemaType::StringMap => {
                obj.insert("type".into(), Value::String("object".into()));
                let mut additional = serde_json::Map::new();
                additional.insert("type".into(), Value::String("string".into()));
                obj.insert("additionalProperties".into(), Value::Object(additional));
            },
        }

        Value::Object(obj)
    }

    pub fn to_markdown(&self) -> String {
        format!("- `symbol-crumbs.{}` - {}", self.key, self.description)
    }
}

fn default_keymap_value() -> Value {
    let bindings = default_keymap().into_iter().map(|(key, action)| (key, Value::String(action.to_string()))).collect();
    Value::Object(bindings)
}

/// Return the full list of schema fields for every setting.
pub fn schema_fields() -> Vec<SchemaField> {
    let action_names = Action::ALL.iter().map(|a| a.as_str()).collect::<Vec<_>>().join("`, `");
    vec![
        SchemaField {
            key: "window.border".into(),
            description: "Border style of the navigator panel.".into(),
            schema_type: SchemaType::StringEnum {
                values: vec!["none", "single", "double", "rounded"],
            },
            default: Value::String("rounded".into()),
        },
        SchemaField {
            key: "window.sizePercent".into(),
            description: "Panel size as a percentage of the editor's width and height.".into(),
            schema_type: SchemaType::Integer {
                minimum: Some(i64::from(MIN_SIZE_PERCENT)),
                maximum: Some(i64::from(MAX_SIZE_PERCENT)),
            },
            default: Value::Number(60.into()),
        },
        SchemaField {
            key: "window.scrolloff".into(),
            description: "Rows kept visible around the cursor inside the panel.".into(),
            schema_type: SchemaType::Integer {
                minimum: Some(0),
                maximum: None,
            },
            default: Value::Number(0.into()),
        },
        SchemaField {
            key: "sections.preview".into(),
            description: "When the right column previews source instead of listing children. `leaf` previews \
                          nodes without children."
                .into(),
            schema_type: SchemaType::StringEnum {
                values: vec!["leaf", "always", "never"],
            },
            default: Value::String("leaf".into()),
        },
        SchemaField {
            key: "nodeMarkers.enable".into(),
            description: "Append a marker to each line showing whether the node has children.".into(),
            schema_type: SchemaType::Bool,
            default: Value::Bool(true),
        },
        SchemaField {
            key: "nodeMarkers.branch".into(),
            description: "Marker appended to nodes with children.".into(),
            schema_type: SchemaType::String,
            default: Value::String(" \u{f460}".into()),
        },
        SchemaField {
            key: "nodeMarkers.leaf".into(),
            description: "Marker appended to leaf nodes.".into(),
            schema_type: SchemaType::String,
            default: Value::String(String::new()),
        },
        SchemaField {
            key: "icons".into(),
            description: "Icon overrides keyed by symbol kind name, e.g. `{ \"Function\": \"fn\" }`.".into(),
            schema_type: SchemaType::StringMap,
            default: Value::Object(serde_json::Map::new()),
        },
        SchemaField {
            key: "sourceBuffer.followNode".into(),
            description: "Move the source cursor to the focused node while navigating.".into(),
            schema_type: SchemaType::Bool,
            default: Value::Bool(true),
        },
        SchemaField {
            key: "sourceBuffer.highlight".into(),
            description: "Highlight the focused node's range in the source buffer.".into(),
            schema_type: SchemaType::Bool,
            default: Value::Bool(true),
        },
        SchemaField {
            key: "sourceBuffer.reorient".into(),
            description: "How the source window scrolls after the cursor moves.".into(),
            schema_type: SchemaType::StringEnum {
                values: vec!["smart", "top", "mid", "none"],
            },
            default: Value::String("smart".into()),
        },
        SchemaField {
            key: "keymaps".into(),
            description: format!(
                "Key bindings merged over the defaults. Values are action names (`{action_names}`) or `none` \
                 to unbind."
            ),
            schema_type: SchemaType::StringMap,
            default: default_keymap_value(),
        },
        SchemaField {
            key: "breadcrumb.separator".into(),
            description: "Separator between path segments in the panel title.".into(),
            schema_type: SchemaType::String,
            default: Value::String(" > ".into()),
        },
        SchemaField {
            key: "logging.level".into(),
            description: "Runtime logging verbosity for symbol-crumbs.".into(),
            schema_type: SchemaType::StringEnum {
                values: vec!["error", "warn", "info", "debug", "trace"],
            },
            default: Value::String("info".into()),
        },
    ]
}

/// JSON Schema `properties` object covering every setting.
pub fn generate_json_schema() -> Value {
    let mut properties = serde_json::Map::new();
    for field in schema_fields() {
        properties.insert(format!("symbol-crumbs.{}", field.key), field.to_schema_value());
    }
    Value::Object(properties)
}

/// Generate markdown documentation for all settings.
pub fn generate_configuration_markdown() -> String {
    let mut out = String::new();
    let fields = schema_fields();

    let mut current_section = String::new();
    for field in &fields {
        let section = field.key.split('.').next().unwrap_or("");
        if section != current_section {
            current_section = section.to_string();
            let title = match section {
                "window" => "Window",
                "sections" => "Sections",
                "nodeMarkers" => "Node Markers",
                "icons" => "Icons",
                "sourceBuffer" => "Source Buffer",
                "keymaps" => "Keymaps",
                "breadcrumb" => "Breadcrumb",
                "logging" => "Logging",
                other => other,
            };
            out.push_str(&format!("\n## {title}\n\n"));
        }
        out.push_str(&field.to_markdown());
        out.push('\n');
    }

    out
}

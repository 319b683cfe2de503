//! Document Models
//!
//! The structural layers of a template document: rows hold 1..=12
//! weighted columns, columns hold at least one module. The root
//! [`Document`] wraps exactly one [`Template`].
//!
//! Structure is immutable after validation; the asset resolver only
//! rewrites image `src` strings in place.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::modules::{CustomFields, Module};

// =============================================================================
// Column
// =============================================================================

/// A weighted column inside a row.
///
/// `weight` is the grid fraction (1..=12); `modules` is a non-empty
/// ordered sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub weight: i64,
    pub modules: Vec<Module>,
    #[serde(
        rename = "background-color",
        alias = "background_color",
        skip_serializing_if = "Option::is_none"
    )]
    pub background_color: Option<String>,
    #[serde(
        rename = "padding-top",
        alias = "padding_top",
        skip_serializing_if = "Option::is_none"
    )]
    pub padding_top: Option<i64>,
    #[serde(
        rename = "padding-right",
        alias = "padding_right",
        skip_serializing_if = "Option::is_none"
    )]
    pub padding_right: Option<i64>,
    #[serde(
        rename = "padding-bottom",
        alias = "padding_bottom",
        skip_serializing_if = "Option::is_none"
    )]
    pub padding_bottom: Option<i64>,
    #[serde(
        rename = "padding-left",
        alias = "padding_left",
        skip_serializing_if = "Option::is_none"
    )]
    pub padding_left: Option<i64>,
    #[serde(
        rename = "border-color",
        alias = "border_color",
        skip_serializing_if = "Option::is_none"
    )]
    pub border_color: Option<String>,
    /// Border width in px, 0..=30
    #[serde(
        rename = "border-width",
        alias = "border_width",
        skip_serializing_if = "Option::is_none"
    )]
    pub border_width: Option<i64>,
    #[serde(
        rename = "customFields",
        alias = "custom_fields",
        skip_serializing_if = "Option::is_none"
    )]
    pub custom_fields: Option<CustomFields>,
}

impl Column {
    /// Creates a column with the given weight and modules
    pub fn new(weight: i64, modules: Vec<Module>) -> Self {
        Self {
            weight,
            modules,
            background_color: None,
            padding_top: None,
            padding_right: None,
            padding_bottom: None,
            padding_left: None,
            border_color: None,
            border_width: None,
            custom_fields: None,
        }
    }
}

// =============================================================================
// Row
// =============================================================================

/// Conditional-visibility descriptor for a row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayCondition {
    #[serde(rename = "type")]
    pub condition_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Show only before this date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
    /// Show only after this date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
}

/// Vertical alignment of columns within a row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    Top,
    Middle,
    Bottom,
}

/// A horizontal band of the template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    /// Required, non-empty display name
    pub name: String,
    /// 1..=12 ordered columns
    pub columns: Vec<Column>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
    #[serde(
        rename = "colStackOnMobile",
        alias = "col_stack_on_mobile",
        skip_serializing_if = "Option::is_none"
    )]
    pub col_stack_on_mobile: Option<bool>,
    #[serde(
        rename = "rowReverseColStackOnMobile",
        alias = "row_reverse_col_stack_on_mobile",
        skip_serializing_if = "Option::is_none"
    )]
    pub row_reverse_col_stack_on_mobile: Option<bool>,
    #[serde(
        rename = "contentAreaBackgroundColor",
        alias = "content_area_background_color",
        skip_serializing_if = "Option::is_none"
    )]
    pub content_area_background_color: Option<String>,
    #[serde(
        rename = "background-color",
        alias = "background_color",
        skip_serializing_if = "Option::is_none"
    )]
    pub background_color: Option<String>,
    #[serde(
        rename = "background-image",
        alias = "background_image",
        skip_serializing_if = "Option::is_none"
    )]
    pub background_image: Option<String>,
    #[serde(
        rename = "background-position",
        alias = "background_position",
        skip_serializing_if = "Option::is_none"
    )]
    pub background_position: Option<String>,
    #[serde(
        rename = "background-repeat",
        alias = "background_repeat",
        skip_serializing_if = "Option::is_none"
    )]
    pub background_repeat: Option<String>,
    /// Border radius in px, 0..=60
    #[serde(
        rename = "border-radius",
        alias = "border_radius",
        skip_serializing_if = "Option::is_none"
    )]
    pub border_radius: Option<i64>,
    #[serde(
        rename = "border-color",
        alias = "border_color",
        skip_serializing_if = "Option::is_none"
    )]
    pub border_color: Option<String>,
    /// Border width in px, 0..=30
    #[serde(
        rename = "border-width",
        alias = "border_width",
        skip_serializing_if = "Option::is_none"
    )]
    pub border_width: Option<i64>,
    /// Per-column border radius in px, 0..=60
    #[serde(
        rename = "columnsBorderRadius",
        alias = "columns_border_radius",
        skip_serializing_if = "Option::is_none"
    )]
    pub columns_border_radius: Option<i64>,
    /// Gap between columns in px, 0..=99
    #[serde(
        rename = "columnsSpacing",
        alias = "columns_spacing",
        skip_serializing_if = "Option::is_none"
    )]
    pub columns_spacing: Option<i64>,
    #[serde(
        rename = "vertical-align",
        alias = "vertical_align",
        skip_serializing_if = "Option::is_none"
    )]
    pub vertical_align: Option<VerticalAlign>,
    #[serde(
        rename = "display-condition",
        alias = "display_condition",
        skip_serializing_if = "Option::is_none"
    )]
    pub display_condition: Option<DisplayCondition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, serde_json::Value>>,
    #[serde(
        rename = "padding-top",
        alias = "padding_top",
        skip_serializing_if = "Option::is_none"
    )]
    pub padding_top: Option<i64>,
    #[serde(
        rename = "padding-right",
        alias = "padding_right",
        skip_serializing_if = "Option::is_none"
    )]
    pub padding_right: Option<i64>,
    #[serde(
        rename = "padding-bottom",
        alias = "padding_bottom",
        skip_serializing_if = "Option::is_none"
    )]
    pub padding_bottom: Option<i64>,
    #[serde(
        rename = "padding-left",
        alias = "padding_left",
        skip_serializing_if = "Option::is_none"
    )]
    pub padding_left: Option<i64>,
    #[serde(
        rename = "customFields",
        alias = "custom_fields",
        skip_serializing_if = "Option::is_none"
    )]
    pub custom_fields: Option<CustomFields>,
}

impl Row {
    /// Creates a row with the given name and columns
    pub fn new(name: impl Into<String>, columns: Vec<Column>) -> Self {
        Self {
            name: name.into(),
            columns,
            locked: None,
            col_stack_on_mobile: None,
            row_reverse_col_stack_on_mobile: None,
            content_area_background_color: None,
            background_color: None,
            background_image: None,
            background_position: None,
            background_repeat: None,
            border_radius: None,
            border_color: None,
            border_width: None,
            columns_border_radius: None,
            columns_spacing: None,
            vertical_align: None,
            display_condition: None,
            metadata: None,
            padding_top: None,
            padding_right: None,
            padding_bottom: None,
            padding_left: None,
            custom_fields: None,
        }
    }
}

// =============================================================================
// Settings / Metadata
// =============================================================================

/// Global template settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(
        rename = "linkColor",
        alias = "link_color",
        skip_serializing_if = "Option::is_none"
    )]
    pub link_color: Option<String>,
    #[serde(
        rename = "background-color",
        alias = "background_color",
        skip_serializing_if = "Option::is_none"
    )]
    pub background_color: Option<String>,
    #[serde(
        rename = "contentAreaBackgroundColor",
        alias = "content_area_background_color",
        skip_serializing_if = "Option::is_none"
    )]
    pub content_area_background_color: Option<String>,
    /// Overall content width in px, 320..=1440
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i64>,
}

/// Template metadata for display and delivery
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// BCP-47 language tag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Email subject line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Inbox preview text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preheader: Option<String>,
}

// =============================================================================
// Template / Document
// =============================================================================

/// Kind of layout a template describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    Email,
    Page,
    Popup,
}

impl std::fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateKind::Email => write!(f, "email"),
            TemplateKind::Page => write!(f, "page"),
            TemplateKind::Popup => write!(f, "popup"),
        }
    }
}

/// Main template structure: a non-empty ordered sequence of rows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    #[serde(rename = "type")]
    pub kind: TemplateKind,
    pub rows: Vec<Row>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<Settings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl Template {
    /// Total number of modules across all rows and columns
    pub fn module_count(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| &row.columns)
            .map(|col| col.modules.len())
            .sum()
    }

    /// Column weights per row, e.g. `[[12], [4, 4, 4]]`
    pub fn shape(&self) -> Vec<Vec<i64>> {
        self.rows
            .iter()
            .map(|row| row.columns.iter().map(|c| c.weight).collect())
            .collect()
    }
}

/// Root document object wrapping exactly one template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub template: Template,
}

impl Document {
    /// Serializes to the wire-form JSON value (hyphenated/camel field
    /// names, absent fields omitted)
    pub fn to_value(&self) -> crate::core::CoreResult<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Serializes to a pretty wire-form JSON string
    pub fn to_json_string(&self) -> crate::core::CoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::document::modules::{ImageModule, ParagraphModule};

    fn sample_document() -> Document {
        Document {
            template: Template {
                kind: TemplateKind::Email,
                rows: vec![Row::new(
                    "Hero",
                    vec![Column::new(
                        12,
                        vec![
                            Module::Image(ImageModule {
                                src: Some("hero-tech-startup".to_string()),
                                alt: Some("Modern office".to_string()),
                                ..Default::default()
                            }),
                            Module::Paragraph(ParagraphModule {
                                text: Some("Welcome aboard.".to_string()),
                                ..Default::default()
                            }),
                        ],
                    )],
                )],
                settings: Some(Settings {
                    width: Some(600),
                    ..Default::default()
                }),
                metadata: None,
            },
        }
    }

    #[test]
    fn test_module_count_and_shape() {
        let doc = sample_document();
        assert_eq!(doc.template.module_count(), 2);
        assert_eq!(doc.template.shape(), vec![vec![12]]);
    }

    #[test]
    fn test_wire_serialization_omits_absent_fields() {
        let doc = sample_document();
        let value = doc.to_value().unwrap();

        assert_eq!(value["template"]["type"], "email");
        assert_eq!(value["template"]["rows"][0]["name"], "Hero");
        // no nulls for omitted optionals
        assert!(value["template"]["rows"][0].get("padding-top").is_none());
        assert!(value["template"].get("metadata").is_none());
        assert_eq!(value["template"]["settings"]["width"], 600);
    }

    #[test]
    fn test_row_aliases() {
        let wire: Row = serde_json::from_value(serde_json::json!({
            "name": "Footer",
            "columns": [{"weight": 12, "modules": [{"type": "divider"}]}],
            "colStackOnMobile": true,
            "vertical-align": "middle"
        }))
        .unwrap();
        let normalized: Row = serde_json::from_value(serde_json::json!({
            "name": "Footer",
            "columns": [{"weight": 12, "modules": [{"type": "divider"}]}],
            "col_stack_on_mobile": true,
            "vertical_align": "middle"
        }))
        .unwrap();

        assert_eq!(wire, normalized);
        assert_eq!(wire.vertical_align, Some(VerticalAlign::Middle));
    }

    #[test]
    fn test_display_condition_round_trip() {
        let row: Row = serde_json::from_value(serde_json::json!({
            "name": "Promo",
            "columns": [{"weight": 12, "modules": [{"type": "html", "html": "<b>hi</b>"}]}],
            "display-condition": {
                "type": "date-range",
                "label": "Spring sale",
                "before": "2026-04-01",
                "after": "2026-03-01"
            }
        }))
        .unwrap();

        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value["display-condition"]["type"], "date-range");
        assert_eq!(value["display-condition"]["after"], "2026-03-01");
    }
}

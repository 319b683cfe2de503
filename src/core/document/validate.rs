//! Document Validation
//!
//! Turns an arbitrary untrusted JSON value (typically a completion
//! candidate) into a validated [`Document`], or fails with an error naming
//! the offending field path (wire form), the violated constraint, and the
//! received value. A violation anywhere in the tree fails the whole parse;
//! there are no partial documents.
//!
//! Validation happens in three passes:
//!
//! 1. a tag scan over the raw value that rejects module `type` tags
//!    outside the closed set ([`CoreError::UnknownVariant`]),
//! 2. typed deserialization (alias-tolerant field names, enums, required
//!    fields),
//! 3. a recursive bounds/cardinality pass with exact field paths.

use serde_json::Value;

use super::models::{Column, Document, Row, Settings, Template};
use super::modules::{Module, MODULE_TAGS};
use crate::core::{CoreError, CoreResult};

impl Document {
    /// Validates an untyped JSON value into a `Document`.
    ///
    /// Pure: the input is consumed, nothing else is touched.
    pub fn from_value(value: Value) -> CoreResult<Document> {
        scan_module_tags(&value)?;

        let doc: Document =
            serde_json::from_value(value).map_err(|e| CoreError::SchemaViolation {
                path: "template".to_string(),
                constraint: e.to_string(),
                value: "<candidate document>".to_string(),
            })?;

        doc.validate()?;
        Ok(doc)
    }

    /// Parses and validates a JSON string
    pub fn from_json_str(input: &str) -> CoreResult<Document> {
        let value: Value = serde_json::from_str(input)?;
        Self::from_value(value)
    }

    /// Re-checks every structural constraint on an already-typed document
    pub fn validate(&self) -> CoreResult<()> {
        validate_template(&self.template, "template")
    }
}

// =============================================================================
// Closed-set tag scan
// =============================================================================

/// Rejects unknown module type tags before typed deserialization so the
/// error carries a precise path instead of a generic serde message.
fn scan_module_tags(value: &Value) -> CoreResult<()> {
    let Some(rows) = value
        .get("template")
        .and_then(|t| t.get("rows"))
        .and_then(Value::as_array)
    else {
        // structural problems are reported by the typed pass
        return Ok(());
    };

    for (r, row) in rows.iter().enumerate() {
        let Some(columns) = row.get("columns").and_then(Value::as_array) else {
            continue;
        };
        for (c, column) in columns.iter().enumerate() {
            let Some(modules) = column.get("modules").and_then(Value::as_array) else {
                continue;
            };
            for (m, module) in modules.iter().enumerate() {
                let path = format!("template.rows[{r}].columns[{c}].modules[{m}]");
                match module.get("type").and_then(Value::as_str) {
                    Some(tag) if MODULE_TAGS.contains(&tag) => {}
                    Some(tag) => {
                        return Err(CoreError::UnknownVariant {
                            path,
                            tag: tag.to_string(),
                        });
                    }
                    None => {
                        return Err(CoreError::SchemaViolation {
                            path: format!("{path}.type"),
                            constraint: "expected a module type tag".to_string(),
                            value: module
                                .get("type")
                                .cloned()
                                .unwrap_or(Value::Null)
                                .to_string(),
                        });
                    }
                }
            }
        }
    }

    Ok(())
}

// =============================================================================
// Bounds and cardinality
// =============================================================================

fn violation(path: &str, field: &str, constraint: String, value: impl ToString) -> CoreError {
    CoreError::SchemaViolation {
        path: if field.is_empty() {
            path.to_string()
        } else {
            format!("{path}.{field}")
        },
        constraint,
        value: value.to_string(),
    }
}

fn int_in_range(
    path: &str,
    field: &str,
    value: Option<i64>,
    min: i64,
    max: i64,
) -> CoreResult<()> {
    match value {
        Some(v) if v < min || v > max => Err(violation(
            path,
            field,
            format!("expected integer in [{min}, {max}]"),
            v,
        )),
        _ => Ok(()),
    }
}

fn f64_in_range(path: &str, field: &str, value: Option<f64>, min: f64, max: f64) -> CoreResult<()> {
    match value {
        Some(v) if !(min..=max).contains(&v) => Err(violation(
            path,
            field,
            format!("expected number in [{min}, {max}]"),
            v,
        )),
        _ => Ok(()),
    }
}

fn int_at_least(path: &str, field: &str, value: Option<i64>, min: i64) -> CoreResult<()> {
    match value {
        Some(v) if v < min => Err(violation(path, field, format!("expected integer >= {min}"), v)),
        _ => Ok(()),
    }
}

/// Spacing fields are integers in [0, 60] wherever they appear
fn check_padding(
    path: &str,
    top: Option<i64>,
    right: Option<i64>,
    bottom: Option<i64>,
    left: Option<i64>,
) -> CoreResult<()> {
    int_in_range(path, "padding-top", top, 0, 60)?;
    int_in_range(path, "padding-right", right, 0, 60)?;
    int_in_range(path, "padding-bottom", bottom, 0, 60)?;
    int_in_range(path, "padding-left", left, 0, 60)
}

fn validate_template(template: &Template, path: &str) -> CoreResult<()> {
    if template.rows.is_empty() {
        return Err(violation(
            path,
            "rows",
            "expected at least 1 row".to_string(),
            0,
        ));
    }

    if let Some(settings) = &template.settings {
        validate_settings(settings, &format!("{path}.settings"))?;
    }

    for (r, row) in template.rows.iter().enumerate() {
        validate_row(row, &format!("{path}.rows[{r}]"))?;
    }

    Ok(())
}

fn validate_settings(settings: &Settings, path: &str) -> CoreResult<()> {
    int_in_range(path, "width", settings.width, 320, 1440)
}

fn validate_row(row: &Row, path: &str) -> CoreResult<()> {
    if row.name.is_empty() {
        return Err(violation(
            path,
            "name",
            "expected a non-empty row name".to_string(),
            "\"\"",
        ));
    }
    if row.columns.is_empty() || row.columns.len() > 12 {
        return Err(violation(
            path,
            "columns",
            "expected between 1 and 12 columns".to_string(),
            row.columns.len(),
        ));
    }

    int_in_range(path, "border-radius", row.border_radius, 0, 60)?;
    int_in_range(path, "border-width", row.border_width, 0, 30)?;
    int_in_range(path, "columnsBorderRadius", row.columns_border_radius, 0, 60)?;
    int_in_range(path, "columnsSpacing", row.columns_spacing, 0, 99)?;
    check_padding(
        path,
        row.padding_top,
        row.padding_right,
        row.padding_bottom,
        row.padding_left,
    )?;

    for (c, column) in row.columns.iter().enumerate() {
        validate_column(column, &format!("{path}.columns[{c}]"))?;
    }

    Ok(())
}

fn validate_column(column: &Column, path: &str) -> CoreResult<()> {
    int_in_range(path, "weight", Some(column.weight), 1, 12)?;

    if column.modules.is_empty() {
        return Err(violation(
            path,
            "modules",
            "expected at least 1 module".to_string(),
            0,
        ));
    }

    int_in_range(path, "border-width", column.border_width, 0, 30)?;
    check_padding(
        path,
        column.padding_top,
        column.padding_right,
        column.padding_bottom,
        column.padding_left,
    )?;

    for (m, module) in column.modules.iter().enumerate() {
        validate_module(module, &format!("{path}.modules[{m}]"))?;
    }

    Ok(())
}

fn validate_module(module: &Module, path: &str) -> CoreResult<()> {
    match module {
        Module::Button(b) => {
            int_at_least(path, "size", b.size, 1)?;
            int_in_range(path, "hoverBorderWidth", b.hover_border_width, 0, 30)?;
            int_in_range(path, "border-radius", b.border_radius, 0, 60)?;
            int_in_range(path, "border-width", b.border_width, 0, 30)?;
            check_padding(path, b.padding_top, b.padding_right, b.padding_bottom, b.padding_left)?;
            int_in_range(path, "contentPaddingTop", b.content_padding_top, 0, 60)?;
            int_in_range(path, "contentPaddingRight", b.content_padding_right, 0, 60)?;
            int_in_range(path, "contentPaddingBottom", b.content_padding_bottom, 0, 60)?;
            int_in_range(path, "contentPaddingLeft", b.content_padding_left, 0, 60)
        }
        Module::Divider(d) => {
            int_in_range(path, "height", d.height, 1, 30)?;
            int_in_range(path, "width", d.width, 1, 100)?;
            check_padding(path, d.padding_top, d.padding_right, d.padding_bottom, d.padding_left)
        }
        Module::Html(_) => Ok(()),
        Module::Icons(i) => {
            check_padding(path, i.padding_top, i.padding_right, i.padding_bottom, i.padding_left)
        }
        Module::Image(i) => {
            check_padding(path, i.padding_top, i.padding_right, i.padding_bottom, i.padding_left)
        }
        Module::List(l) => {
            int_at_least(path, "size", l.size, 1)?;
            int_in_range(path, "letter-spacing", l.letter_spacing, -99, 99)?;
            f64_in_range(path, "line-height", l.line_height, 0.5, 3.0)?;
            check_padding(path, l.padding_top, l.padding_right, l.padding_bottom, l.padding_left)
        }
        Module::Menu(m) => {
            check_padding(path, m.padding_top, m.padding_right, m.padding_bottom, m.padding_left)
        }
        Module::Paragraph(p) => {
            int_at_least(path, "size", p.size, 1)?;
            int_in_range(path, "letter-spacing", p.letter_spacing, -99, 99)?;
            f64_in_range(path, "line-height", p.line_height, 0.5, 3.0)?;
            check_padding(path, p.padding_top, p.padding_right, p.padding_bottom, p.padding_left)
        }
        Module::Title(t) => {
            int_at_least(path, "size", t.size, 1)?;
            int_in_range(path, "letter-spacing", t.letter_spacing, -99, 99)?;
            f64_in_range(path, "line-height", t.line_height, 0.5, 3.0)?;
            check_padding(path, t.padding_top, t.padding_right, t.padding_bottom, t.padding_left)
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal_doc(modules: Value) -> Value {
        json!({
            "template": {
                "type": "email",
                "rows": [
                    {
                        "name": "Main",
                        "columns": [{"weight": 12, "modules": modules}]
                    }
                ]
            }
        })
    }

    #[test]
    fn test_valid_document_parses() {
        let doc = Document::from_value(minimal_doc(json!([
            {"type": "title", "text": "Hello", "title": "h1"},
            {"type": "paragraph", "text": "Body", "line-height": 1.5},
            {"type": "button", "text": "Go", "href": "https://example.com"}
        ])))
        .unwrap();

        assert_eq!(doc.template.module_count(), 3);
    }

    #[test]
    fn test_unknown_variant_rejected() {
        let err = Document::from_value(minimal_doc(json!([
            {"type": "unknown-widget", "text": "?"}
        ])))
        .unwrap_err();

        match err {
            CoreError::UnknownVariant { path, tag } => {
                assert_eq!(tag, "unknown-widget");
                assert_eq!(path, "template.rows[0].columns[0].modules[0]");
            }
            other => panic!("expected UnknownVariant, got {other}"),
        }
    }

    #[test]
    fn test_missing_type_tag_rejected() {
        let err = Document::from_value(minimal_doc(json!([{"text": "no tag"}]))).unwrap_err();
        assert!(matches!(err, CoreError::SchemaViolation { .. }));
    }

    #[test]
    fn test_spacing_bounds() {
        // boundary values accepted
        Document::from_value(minimal_doc(json!([
            {"type": "image", "src": "x", "padding-top": 0, "padding-bottom": 60}
        ])))
        .unwrap();

        // out of range rejected, path points at the field
        let err = Document::from_value(minimal_doc(json!([
            {"type": "image", "src": "x", "padding-top": 61}
        ])))
        .unwrap_err();
        match err {
            CoreError::SchemaViolation { path, value, .. } => {
                assert_eq!(path, "template.rows[0].columns[0].modules[0].padding-top");
                assert_eq!(value, "61");
            }
            other => panic!("expected SchemaViolation, got {other}"),
        }

        let err = Document::from_value(minimal_doc(json!([
            {"type": "paragraph", "padding-left": -1}
        ])))
        .unwrap_err();
        assert!(matches!(err, CoreError::SchemaViolation { .. }));
    }

    #[test]
    fn test_row_column_cardinality() {
        let column = json!({"weight": 1, "modules": [{"type": "divider"}]});

        let doc_with = |count: usize| {
            json!({
                "template": {
                    "type": "email",
                    "rows": [{"name": "R", "columns": vec![column.clone(); count]}]
                }
            })
        };

        assert!(Document::from_value(doc_with(1)).is_ok());
        assert!(Document::from_value(doc_with(12)).is_ok());
        assert!(Document::from_value(doc_with(0)).is_err());
        assert!(Document::from_value(doc_with(13)).is_err());
    }

    #[test]
    fn test_column_requires_modules() {
        let err = Document::from_value(minimal_doc(json!([]))).unwrap_err();
        match err {
            CoreError::SchemaViolation { path, .. } => {
                assert_eq!(path, "template.rows[0].columns[0].modules");
            }
            other => panic!("expected SchemaViolation, got {other}"),
        }
    }

    #[test]
    fn test_weight_bounds() {
        let doc = json!({
            "template": {
                "type": "email",
                "rows": [{
                    "name": "R",
                    "columns": [{"weight": 13, "modules": [{"type": "divider"}]}]
                }]
            }
        });
        let err = Document::from_value(doc).unwrap_err();
        assert!(matches!(err, CoreError::SchemaViolation { .. }));
    }

    #[test]
    fn test_divider_and_button_bounds() {
        assert!(Document::from_value(minimal_doc(json!([
            {"type": "divider", "height": 30, "width": 100}
        ])))
        .is_ok());
        assert!(Document::from_value(minimal_doc(json!([
            {"type": "divider", "height": 0}
        ])))
        .is_err());
        assert!(Document::from_value(minimal_doc(json!([
            {"type": "divider", "width": 101}
        ])))
        .is_err());
        assert!(Document::from_value(minimal_doc(json!([
            {"type": "button", "size": 0}
        ])))
        .is_err());
        assert!(Document::from_value(minimal_doc(json!([
            {"type": "button", "border-width": 31}
        ])))
        .is_err());
    }

    #[test]
    fn test_text_module_bounds() {
        assert!(Document::from_value(minimal_doc(json!([
            {"type": "paragraph", "letter-spacing": -99, "line-height": 0.5}
        ])))
        .is_ok());
        assert!(Document::from_value(minimal_doc(json!([
            {"type": "paragraph", "letter-spacing": 100}
        ])))
        .is_err());
        assert!(Document::from_value(minimal_doc(json!([
            {"type": "title", "line-height": 3.1}
        ])))
        .is_err());
    }

    #[test]
    fn test_settings_width_bounds() {
        let doc = |width: i64| {
            json!({
                "template": {
                    "type": "page",
                    "rows": [{"name": "R", "columns": [{"weight": 12, "modules": [{"type": "divider"}]}]}],
                    "settings": {"width": width}
                }
            })
        };

        assert!(Document::from_value(doc(320)).is_ok());
        assert!(Document::from_value(doc(1440)).is_ok());
        assert!(Document::from_value(doc(319)).is_err());
        assert!(Document::from_value(doc(1441)).is_err());
    }

    #[test]
    fn test_empty_rows_rejected() {
        let err = Document::from_value(json!({
            "template": {"type": "email", "rows": []}
        }))
        .unwrap_err();
        assert!(matches!(err, CoreError::SchemaViolation { .. }));
    }

    #[test]
    fn test_empty_row_name_rejected() {
        let err = Document::from_value(json!({
            "template": {
                "type": "email",
                "rows": [{"name": "", "columns": [{"weight": 12, "modules": [{"type": "divider"}]}]}]
            }
        }))
        .unwrap_err();
        match err {
            CoreError::SchemaViolation { path, .. } => {
                assert_eq!(path, "template.rows[0].name");
            }
            other => panic!("expected SchemaViolation, got {other}"),
        }
    }

    #[test]
    fn test_bad_enum_literal_rejected() {
        let err = Document::from_value(minimal_doc(json!([
            {"type": "button", "align": "middle"}
        ])))
        .unwrap_err();
        assert!(matches!(err, CoreError::SchemaViolation { .. }));
    }

    #[test]
    fn test_round_trip_idempotence() {
        let original = Document::from_value(minimal_doc(json!([
            {"type": "image", "src": "hero-launch", "alt": "Launch", "padding-top": 10},
            {"type": "heading", "text": "Hi", "title": "h2"},
            {
                "type": "icons",
                "icons": [{
                    "image": "https://cdn.example.com/i.png",
                    "height": "32px",
                    "width": "32px",
                    "textPosition": "bottom"
                }]
            }
        ])))
        .unwrap();

        let wire = original.to_value().unwrap();
        let reparsed = Document::from_value(wire).unwrap();
        assert_eq!(original, reparsed);
    }

    #[test]
    fn test_normalized_spelling_parses_to_same_document() {
        let wire = Document::from_value(minimal_doc(json!([
            {"type": "button", "padding-top": 8, "customFields": {"k": 1}}
        ])))
        .unwrap();
        let normalized = Document::from_value(minimal_doc(json!([
            {"type": "button", "padding_top": 8, "custom_fields": {"k": 1}}
        ])))
        .unwrap();

        assert_eq!(wire, normalized);
    }
}

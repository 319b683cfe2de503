//! Template Modules
//!
//! The closed, polymorphic set of content modules that live inside a
//! column. Dispatch is by explicit `type` tag; every variant carries an
//! optional `locked` flag and an optional `customFields` mapping that
//! round-trips producer-specific metadata unchanged.
//!
//! Field names accept two spellings: the hyphenated/camel wire form
//! (`padding-top`, `customFields`) and the normalized snake form
//! (`padding_top`, `custom_fields`). Serialization always emits the wire
//! form and omits absent fields.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Free-form producer metadata preserved losslessly
pub type CustomFields = HashMap<String, serde_json::Value>;

// =============================================================================
// Shared Enumerations
// =============================================================================

/// Link target attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkTarget {
    #[serde(rename = "_blank")]
    Blank,
    #[serde(rename = "_self")]
    SelfTarget,
    #[serde(rename = "_top")]
    Top,
}

/// Horizontal alignment for block modules (buttons)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAlign {
    Left,
    Center,
    Right,
}

/// Text alignment for flowing text modules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
    Justify,
}

/// Text direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ltr,
    Rtl,
}

/// Position of the label text relative to an icon image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextPosition {
    Left,
    Right,
    Top,
    Bottom,
}

/// Heading level for title modules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

/// List tag kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListTag {
    Ol,
    Ul,
}

// =============================================================================
// Module Union
// =============================================================================

/// A content module, dispatched by its `type` tag.
///
/// The set is closed: an unrecognized tag is an [`UnknownVariant`] error at
/// validation time, never a silently-empty module.
///
/// [`UnknownVariant`]: crate::core::CoreError::UnknownVariant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Module {
    Button(ButtonModule),
    Divider(DividerModule),
    Html(HtmlModule),
    Icons(IconsModule),
    Image(ImageModule),
    List(ListModule),
    Menu(MenuModule),
    Paragraph(ParagraphModule),
    /// Accepts both `title` and the legacy `heading` tag on input
    #[serde(alias = "heading")]
    Title(TitleModule),
}

/// Every tag the closed module set accepts, including input-only aliases.
pub const MODULE_TAGS: &[&str] = &[
    "button",
    "divider",
    "html",
    "icons",
    "image",
    "list",
    "menu",
    "paragraph",
    "title",
    "heading",
];

impl Module {
    /// Returns the wire-form type tag of this module
    pub fn type_tag(&self) -> &'static str {
        match self {
            Module::Button(_) => "button",
            Module::Divider(_) => "divider",
            Module::Html(_) => "html",
            Module::Icons(_) => "icons",
            Module::Image(_) => "image",
            Module::List(_) => "list",
            Module::Menu(_) => "menu",
            Module::Paragraph(_) => "paragraph",
            Module::Title(_) => "title",
        }
    }
}

// =============================================================================
// Button
// =============================================================================

/// Button module for CTAs and links
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ButtonModule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<HorizontalAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<LinkTarget>,
    /// Font size in px, must be >= 1
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
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
        rename = "contentPaddingTop",
        alias = "content_padding_top",
        skip_serializing_if = "Option::is_none"
    )]
    pub content_padding_top: Option<i64>,
    #[serde(
        rename = "contentPaddingRight",
        alias = "content_padding_right",
        skip_serializing_if = "Option::is_none"
    )]
    pub content_padding_right: Option<i64>,
    #[serde(
        rename = "contentPaddingBottom",
        alias = "content_padding_bottom",
        skip_serializing_if = "Option::is_none"
    )]
    pub content_padding_bottom: Option<i64>,
    #[serde(
        rename = "contentPaddingLeft",
        alias = "content_padding_left",
        skip_serializing_if = "Option::is_none"
    )]
    pub content_padding_left: Option<i64>,
    #[serde(
        rename = "hoverBackgroundColor",
        alias = "hover_background_color",
        skip_serializing_if = "Option::is_none"
    )]
    pub hover_background_color: Option<String>,
    #[serde(
        rename = "hoverColor",
        alias = "hover_color",
        skip_serializing_if = "Option::is_none"
    )]
    pub hover_color: Option<String>,
    #[serde(
        rename = "hoverBorderColor",
        alias = "hover_border_color",
        skip_serializing_if = "Option::is_none"
    )]
    pub hover_border_color: Option<String>,
    /// Hover border width in px, 0..=30
    #[serde(
        rename = "hoverBorderWidth",
        alias = "hover_border_width",
        skip_serializing_if = "Option::is_none"
    )]
    pub hover_border_width: Option<i64>,
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
    #[serde(
        rename = "customFields",
        alias = "custom_fields",
        skip_serializing_if = "Option::is_none"
    )]
    pub custom_fields: Option<CustomFields>,
}

// =============================================================================
// Divider
// =============================================================================

/// Horizontal rule module
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DividerModule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Line height in px, 1..=30
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i64>,
    /// Line width in percent, 1..=100
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i64>,
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
    #[serde(
        rename = "customFields",
        alias = "custom_fields",
        skip_serializing_if = "Option::is_none"
    )]
    pub custom_fields: Option<CustomFields>,
}

// =============================================================================
// Html
// =============================================================================

/// Raw HTML module
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HtmlModule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
    #[serde(
        rename = "customFields",
        alias = "custom_fields",
        skip_serializing_if = "Option::is_none"
    )]
    pub custom_fields: Option<CustomFields>,
}

// =============================================================================
// Icons
// =============================================================================

/// A single entry in an icons module.
///
/// `image`, `height` and `width` are required. Dimensions are strings on
/// purpose so unit-suffixed values like `"32px"` survive; these entries
/// carry direct image URLs, not symbolic references, and the asset
/// resolver leaves them alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Icon {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    pub height: String,
    pub width: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<LinkTarget>,
    #[serde(rename = "textPosition", alias = "text_position")]
    pub text_position: TextPosition,
}

/// Icon strip module (social icons, feature icons)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IconsModule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icons: Option<Vec<Icon>>,
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
    #[serde(
        rename = "customFields",
        alias = "custom_fields",
        skip_serializing_if = "Option::is_none"
    )]
    pub custom_fields: Option<CustomFields>,
}

// =============================================================================
// Image
// =============================================================================

/// Image module.
///
/// `src` holds either a concrete URL or a symbolic reference
/// (`logo-primary`, `social-facebook`, `hero-tech-startup`) that the asset
/// resolver rewrites in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageModule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(
        rename = "dynamicSrc",
        alias = "dynamic_src",
        skip_serializing_if = "Option::is_none"
    )]
    pub dynamic_src: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<LinkTarget>,
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
    #[serde(
        rename = "customFields",
        alias = "custom_fields",
        skip_serializing_if = "Option::is_none"
    )]
    pub custom_fields: Option<CustomFields>,
}

// =============================================================================
// List
// =============================================================================

/// Ordered/unordered list module
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListModule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underline: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<TextAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<ListTag>,
    /// Font size in px, must be >= 1
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(
        rename = "linkColor",
        alias = "link_color",
        skip_serializing_if = "Option::is_none"
    )]
    pub link_color: Option<String>,
    /// Letter spacing in px, -99..=99
    #[serde(
        rename = "letter-spacing",
        alias = "letter_spacing",
        skip_serializing_if = "Option::is_none"
    )]
    pub letter_spacing: Option<i64>,
    /// Line height multiplier, 0.5..=3.0
    #[serde(
        rename = "line-height",
        alias = "line_height",
        skip_serializing_if = "Option::is_none"
    )]
    pub line_height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
    #[serde(
        rename = "customFields",
        alias = "custom_fields",
        skip_serializing_if = "Option::is_none"
    )]
    pub custom_fields: Option<CustomFields>,
}

// =============================================================================
// Menu
// =============================================================================

/// Link inside a menu item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuLink {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<LinkTarget>,
}

/// Tag carried by every menu item
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuItemKind {
    #[default]
    #[serde(rename = "menu-item")]
    MenuItem,
}

/// A single navigation entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(rename = "type")]
    pub kind: MenuItemKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<MenuLink>,
}

/// Navigation menu module
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuModule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<MenuItem>>,
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
    #[serde(
        rename = "customFields",
        alias = "custom_fields",
        skip_serializing_if = "Option::is_none"
    )]
    pub custom_fields: Option<CustomFields>,
}

// =============================================================================
// Paragraph
// =============================================================================

/// Body text module
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParagraphModule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underline: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<TextAlign>,
    /// Font size in px, must be >= 1
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(
        rename = "linkColor",
        alias = "link_color",
        skip_serializing_if = "Option::is_none"
    )]
    pub link_color: Option<String>,
    /// Letter spacing in px, -99..=99
    #[serde(
        rename = "letter-spacing",
        alias = "letter_spacing",
        skip_serializing_if = "Option::is_none"
    )]
    pub letter_spacing: Option<i64>,
    /// Line height multiplier, 0.5..=3.0
    #[serde(
        rename = "line-height",
        alias = "line_height",
        skip_serializing_if = "Option::is_none"
    )]
    pub line_height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
    #[serde(
        rename = "customFields",
        alias = "custom_fields",
        skip_serializing_if = "Option::is_none"
    )]
    pub custom_fields: Option<CustomFields>,
}

// =============================================================================
// Title
// =============================================================================

/// Heading module
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TitleModule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underline: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<TextAlign>,
    /// Heading sub-kind (h1/h2/h3)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<HeadingLevel>,
    /// Font size in px, must be >= 1
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(
        rename = "linkColor",
        alias = "link_color",
        skip_serializing_if = "Option::is_none"
    )]
    pub link_color: Option<String>,
    /// Letter spacing in px, -99..=99
    #[serde(
        rename = "letter-spacing",
        alias = "letter_spacing",
        skip_serializing_if = "Option::is_none"
    )]
    pub letter_spacing: Option<i64>,
    /// Line height multiplier, 0.5..=3.0
    #[serde(
        rename = "line-height",
        alias = "line_height",
        skip_serializing_if = "Option::is_none"
    )]
    pub line_height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
    #[serde(
        rename = "customFields",
        alias = "custom_fields",
        skip_serializing_if = "Option::is_none"
    )]
    pub custom_fields: Option<CustomFields>,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_tag_dispatch() {
        let module: Module = serde_json::from_value(serde_json::json!({
            "type": "button",
            "text": "Get Started",
            "align": "center"
        }))
        .unwrap();

        match &module {
            Module::Button(b) => {
                assert_eq!(b.text.as_deref(), Some("Get Started"));
                assert_eq!(b.align, Some(HorizontalAlign::Center));
            }
            other => panic!("expected button, got {:?}", other),
        }
        assert_eq!(module.type_tag(), "button");
    }

    #[test]
    fn test_title_accepts_heading_alias() {
        let module: Module = serde_json::from_value(serde_json::json!({
            "type": "heading",
            "text": "Welcome",
            "title": "h1"
        }))
        .unwrap();

        match module {
            Module::Title(t) => assert_eq!(t.title, Some(HeadingLevel::H1)),
            other => panic!("expected title, got {:?}", other),
        }
    }

    #[test]
    fn test_title_serializes_with_title_tag() {
        let module = Module::Title(TitleModule {
            text: Some("Welcome".to_string()),
            ..Default::default()
        });

        let value = serde_json::to_value(&module).unwrap();
        assert_eq!(value["type"], "title");
    }

    #[test]
    fn test_wire_form_serialization() {
        let module = Module::Button(ButtonModule {
            text: Some("Go".to_string()),
            padding_top: Some(10),
            background_color: Some("#2563eb".to_string()),
            custom_fields: Some(HashMap::from([(
                "campaign".to_string(),
                serde_json::json!("spring-launch"),
            )])),
            ..Default::default()
        });

        let value = serde_json::to_value(&module).unwrap();
        assert_eq!(value["padding-top"], 10);
        assert_eq!(value["background-color"], "#2563eb");
        assert_eq!(value["customFields"]["campaign"], "spring-launch");
        // absent optionals are omitted, not null
        assert!(value.get("padding-bottom").is_none());
        assert!(value.get("label").is_none());
    }

    #[test]
    fn test_alias_tolerance_both_spellings() {
        let wire: ButtonModule = serde_json::from_value(serde_json::json!({
            "padding-top": 12,
            "contentPaddingLeft": 4
        }))
        .unwrap();
        let normalized: ButtonModule = serde_json::from_value(serde_json::json!({
            "padding_top": 12,
            "content_padding_left": 4
        }))
        .unwrap();

        assert_eq!(wire, normalized);
        assert_eq!(wire.padding_top, Some(12));
        assert_eq!(wire.content_padding_left, Some(4));
    }

    #[test]
    fn test_icon_requires_dimension_strings() {
        // unit-suffixed dimension strings are intentionally legal
        let icon: Icon = serde_json::from_value(serde_json::json!({
            "image": "https://cdn.example.com/social/facebook.png",
            "height": "32px",
            "width": "32px",
            "textPosition": "bottom"
        }))
        .unwrap();
        assert_eq!(icon.text_position, TextPosition::Bottom);

        // missing width is a hard parse error
        let missing: Result<Icon, _> = serde_json::from_value(serde_json::json!({
            "image": "x.png",
            "height": "32px",
            "textPosition": "left"
        }));
        assert!(missing.is_err());
    }

    #[test]
    fn test_menu_item_round_trip() {
        let module: Module = serde_json::from_value(serde_json::json!({
            "type": "menu",
            "items": [
                {"type": "menu-item", "text": "Home", "link": {"href": "https://example.com"}}
            ]
        }))
        .unwrap();

        let value = serde_json::to_value(&module).unwrap();
        assert_eq!(value["items"][0]["type"], "menu-item");
    }

    #[test]
    fn test_custom_fields_round_trip_unchanged() {
        let input = serde_json::json!({
            "type": "image",
            "src": "hero-launch",
            "customFields": {
                "tracking": {"pixel": true, "ids": [1, 2, 3]},
                "note": "producer metadata"
            }
        });

        let module: Module = serde_json::from_value(input.clone()).unwrap();
        let output = serde_json::to_value(&module).unwrap();
        assert_eq!(output["customFields"], input["customFields"]);
    }
}

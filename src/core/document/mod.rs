//! Template Document Model
//!
//! The validated, alias-tolerant document tree: a [`Document`] wraps one
//! [`Template`], templates hold rows, rows hold 1..=12 weighted columns,
//! columns hold at least one [`Module`] from a closed polymorphic set.
//!
//! Construction from untrusted input goes through [`Document::from_value`],
//! which enforces every numeric bound and enum literal the schema declares.

pub mod models;
pub mod modules;
mod validate;

pub use models::{
    Column, DisplayCondition, Document, Metadata, Row, Settings, Template, TemplateKind,
    VerticalAlign,
};
pub use modules::{
    ButtonModule, CustomFields, Direction, DividerModule, HeadingLevel, HorizontalAlign, HtmlModule,
    Icon, IconsModule, ImageModule, LinkTarget, ListModule, ListTag, MenuItem, MenuItemKind,
    MenuLink, MenuModule, Module, ParagraphModule, TextAlign, TextPosition, TitleModule,
    MODULE_TAGS,
};

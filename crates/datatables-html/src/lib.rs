//! Server-side builder for DataTables markup.
//!
//! [`Builder`] collects [`Column`]s and widget options and renders two
//! fragments: the `<table>` skeleton and a `<script>` element initialising
//! the widget on it. Option values that are script expressions (callbacks,
//! jQuery lookups, editor references) are emitted unquoted by
//! [`datatables_params`].

mod attributes;
mod builder;
mod column;
mod columns;
mod config;
mod editor;
mod error;
mod options;
mod template;

pub use attributes::{escape_html, AttrValue, HtmlAttributes};
pub use builder::Builder;
pub use column::{parse_render, title_from_data, Column, Footer, CELL_ATTRIBUTES};
pub use columns::{action_column, checkbox_column, index_column, INDEX_COLUMN};
pub use config::BuilderConfig;
pub use editor::{Editor, Field};
pub use error::HtmlError;
pub use options::{make_data_script, Ajax, Direction};
pub use template::{
    format_template, DefaultTemplates, EditorScript, TemplateContext, TemplateRenderer,
    DEFAULT_SCRIPT_TEMPLATE,
};

pub use datatables_params::{ConfigMap, ConfigNode};

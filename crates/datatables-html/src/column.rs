//! Column definitions.

use datatables_params::{ConfigMap, ConfigNode};

use crate::attributes::HtmlAttributes;

/// Column attributes copied onto header and footer cells.
pub const CELL_ATTRIBUTES: [&str; 6] = ["class", "id", "width", "style", "data-class", "data-hide"];

const BUILT_IN_RENDER_PREFIXES: [&str; 3] = ["$.fn.dataTable.render", "[", "function"];

#[derive(Debug, Clone, PartialEq)]
pub enum Footer {
    Text(String),
    /// Footer cell with its own attributes.
    Attributed { title: String, attributes: HtmlAttributes },
}

impl Footer {
    pub fn title(&self) -> &str {
        match self {
            Footer::Text(text) => text,
            Footer::Attributed { title, .. } => title,
        }
    }
}

impl Default for Footer {
    fn default() -> Self {
        Footer::Text(String::new())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub data: String,
    pub name: String,
    pub title: String,
    pub orderable: bool,
    pub searchable: bool,
    pub exportable: bool,
    pub printable: bool,
    pub visible: Option<bool>,
    pub footer: Footer,
    pub class_name: Option<String>,
    pub width: Option<String>,
    pub render: Option<String>,
    pub default_content: Option<String>,
    /// Markup placed in this column's cell of the search row.
    pub search: Option<String>,
    /// Header cell attributes. Never part of the widget options.
    pub attributes: HtmlAttributes,
    /// Options without a typed field, passed through unchanged.
    pub extra: ConfigMap,
}

impl Column {
    /// A column bound to `data`, titled from it.
    pub fn make(data: impl Into<String>) -> Self {
        let data = data.into();
        Self {
            name: data.clone(),
            title: title_from_data(&data),
            data,
            orderable: true,
            searchable: true,
            exportable: true,
            printable: true,
            visible: None,
            footer: Footer::default(),
            class_name: None,
            width: None,
            render: None,
            default_content: None,
            search: None,
            attributes: HtmlAttributes::new(),
            extra: ConfigMap::new(),
        }
    }

    /// Like [`Column::make`], then applies `options` with
    /// [`Column::apply_options`].
    pub fn with_options(data: impl Into<String>, options: ConfigMap) -> Self {
        let mut column = Self::make(data);
        column.apply_options(options);
        column
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn orderable(mut self, flag: bool) -> Self {
        self.orderable = flag;
        self
    }

    pub fn searchable(mut self, flag: bool) -> Self {
        self.searchable = flag;
        self
    }

    pub fn exportable(mut self, flag: bool) -> Self {
        self.exportable = flag;
        self
    }

    pub fn printable(mut self, flag: bool) -> Self {
        self.printable = flag;
        self
    }

    pub fn visible(mut self, flag: bool) -> Self {
        self.visible = Some(flag);
        self
    }

    /// Plain footer text.
    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Footer::Text(footer.into());
        self
    }

    pub fn footer_with_attributes(
        mut self,
        title: impl Into<String>,
        attributes: HtmlAttributes,
    ) -> Self {
        self.footer = Footer::Attributed {
            title: title.into(),
            attributes,
        };
        self
    }

    pub fn class_name(mut self, class: impl Into<String>) -> Self {
        self.class_name = Some(class.into());
        self
    }

    pub fn width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }

    /// Sets the render option, see [`parse_render`].
    pub fn render(mut self, expr: &str) -> Self {
        self.render = parse_render(expr);
        self
    }

    /// Sets the render option verbatim.
    pub fn render_raw(mut self, expr: impl Into<String>) -> Self {
        self.render = Some(expr.into());
        self
    }

    pub fn default_content(mut self, content: impl Into<String>) -> Self {
        self.default_content = Some(content.into());
        self
    }

    /// Markup for this column's search row cell.
    pub fn search(mut self, html: impl Into<String>) -> Self {
        self.search = Some(html.into());
        self
    }

    pub fn attributes(mut self, attributes: HtmlAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Sets an option with no typed field.
    pub fn option(mut self, key: impl Into<String>, value: ConfigNode) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Applies widget-style options (`className`, `defaultContent`, ...).
    /// Known keys with a matching value type set the typed field; anything
    /// else lands in [`Column::extra`].
    pub fn apply_options(&mut self, options: ConfigMap) {
        for (key, value) in options {
            match (key.as_str(), value) {
                ("data", ConfigNode::String(s)) => self.data = s,
                ("name", ConfigNode::String(s)) => self.name = s,
                ("title", ConfigNode::String(s)) => self.title = s,
                ("orderable", ConfigNode::Bool(b)) => self.orderable = b,
                ("searchable", ConfigNode::Bool(b)) => self.searchable = b,
                ("exportable", ConfigNode::Bool(b)) => self.exportable = b,
                ("printable", ConfigNode::Bool(b)) => self.printable = b,
                ("visible", ConfigNode::Bool(b)) => self.visible = Some(b),
                ("footer", ConfigNode::String(s)) => self.footer = Footer::Text(s),
                ("className", ConfigNode::String(s)) => self.class_name = Some(s),
                ("width", ConfigNode::String(s)) => self.width = Some(s),
                ("render", ConfigNode::String(s)) => self.render = parse_render(&s),
                ("render", ConfigNode::Null) => self.render = None,
                ("defaultContent", ConfigNode::String(s)) => self.default_content = Some(s),
                ("search", ConfigNode::String(s)) => self.search = Some(s),
                (other, value) => {
                    self.extra.insert(other.to_string(), value);
                }
            }
        }
    }

    /// Widget options for this column. `attributes` and `search` are
    /// markup-only and left out.
    pub fn to_node(&self) -> ConfigNode {
        let mut map = ConfigMap::new();
        map.insert("data".into(), self.data.clone().into());
        map.insert("name".into(), self.name.clone().into());
        map.insert("title".into(), self.title.clone().into());
        map.insert("orderable".into(), self.orderable.into());
        map.insert("searchable".into(), self.searchable.into());
        if let Some(visible) = self.visible {
            map.insert("visible".into(), visible.into());
        }
        map.insert("exportable".into(), self.exportable.into());
        map.insert("printable".into(), self.printable.into());
        map.insert("footer".into(), self.footer.title().into());
        if let Some(class) = &self.class_name {
            map.insert("className".into(), class.clone().into());
        }
        if let Some(width) = &self.width {
            map.insert("width".into(), width.clone().into());
        }
        if let Some(render) = &self.render {
            map.insert("render".into(), render.clone().into());
        }
        if let Some(content) = &self.default_content {
            map.insert("defaultContent".into(), content.clone().into());
        }
        for (key, value) in &self.extra {
            map.insert(key.clone(), value.clone());
        }
        ConfigNode::Object(map)
    }

    /// Attributes of this column's `<th>` in the header row.
    pub fn header_attributes(&self) -> HtmlAttributes {
        let mut attrs = HtmlAttributes::new();
        if let Some(class) = &self.class_name {
            attrs.set("class", class.as_str());
        }
        if let Some(width) = &self.width {
            attrs.set("width", width.as_str());
        }
        for name in CELL_ATTRIBUTES {
            if let Some(ConfigNode::String(value)) = self.extra.get(name) {
                attrs.set(name, value.as_str());
            }
        }
        attrs.merged(&self.attributes)
    }

    /// The `<th>` header cell.
    pub fn header_cell(&self) -> String {
        format!("<th{}>{}</th>", self.header_attributes(), self.title)
    }

    /// The `<th>` footer cell.
    pub fn footer_cell(&self) -> String {
        match &self.footer {
            Footer::Text(text) => format!("<th>{text}</th>"),
            Footer::Attributed { title, attributes } => {
                format!("<th{}>{title}</th>", attributes.only(&CELL_ATTRIBUTES))
            }
        }
    }

    /// The `<th>` search row cell; empty without search markup or when not searchable.
    pub fn search_cell(&self) -> String {
        match (&self.search, self.searchable) {
            (Some(html), true) => format!("<th>{html}</th>"),
            _ => "<th></th>".to_string(),
        }
    }
}

/// Normalises a render expression.
///
/// Built-in renderers (`$.fn.dataTable.render...`), orthogonal data arrays
/// and functions pass through; any other expression becomes the body of a
/// render function. Blank input means no render option.
pub fn parse_render(expr: &str) -> Option<String> {
    let trimmed = expr.trim();
    if trimmed.is_empty() {
        return None;
    }
    if BUILT_IN_RENDER_PREFIXES
        .iter()
        .any(|prefix| trimmed.starts_with(prefix))
    {
        return Some(expr.to_string());
    }
    Some(format!("function(data,type,full,meta){{return {expr};}}"))
}

/// `created_at` → `Created At`, `user.name` → `User Name`,
/// `firstName` → `First Name`.
pub fn title_from_data(data: &str) -> String {
    let mut snake = String::with_capacity(data.len() + 4);
    for (i, ch) in data.chars().enumerate() {
        if i > 0 && ch.is_uppercase() {
            snake.push('_');
        }
        snake.extend(ch.to_lowercase());
    }
    snake
        .split(['.', '_', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn title_matrix() {
        assert_eq!(title_from_data("name"), "Name");
        assert_eq!(title_from_data("created_at"), "Created At");
        assert_eq!(title_from_data("user.name"), "User Name");
        assert_eq!(title_from_data("firstName"), "First Name");
        assert_eq!(title_from_data(""), "");
    }

    #[test]
    fn make_defaults() {
        let column = Column::make("created_at");
        assert_eq!(
            column.to_node(),
            json!({
                "data": "created_at",
                "name": "created_at",
                "title": "Created At",
                "orderable": true,
                "searchable": true,
                "exportable": true,
                "printable": true,
                "footer": ""
            })
        );
    }

    #[test]
    fn render_matrix() {
        assert_eq!(parse_render(""), None);
        assert_eq!(parse_render("  "), None);
        assert_eq!(
            parse_render("$.fn.dataTable.render.number(',')").as_deref(),
            Some("$.fn.dataTable.render.number(',')")
        );
        assert_eq!(parse_render("[, ].name").as_deref(), Some("[, ].name"));
        assert_eq!(
            parse_render("function(d){return d}").as_deref(),
            Some("function(d){return d}")
        );
        assert_eq!(
            parse_render("data.toUpperCase()").as_deref(),
            Some("function(data,type,full,meta){return data.toUpperCase();}")
        );
    }

    #[test]
    fn apply_options_routes_known_and_extra() {
        let serde_json::Value::Object(options) = json!({
            "className": "text-right",
            "orderable": false,
            "render": "'$' + data",
            "responsivePriority": 1,
            "orderable_extra": "x"
        }) else {
            unreachable!()
        };
        let column = Column::with_options("price", options);
        assert_eq!(column.class_name.as_deref(), Some("text-right"));
        assert!(!column.orderable);
        assert_eq!(
            column.render.as_deref(),
            Some("function(data,type,full,meta){return '$' + data;}")
        );
        assert_eq!(column.extra.get("responsivePriority"), Some(&json!(1)));
        assert_eq!(column.to_node()["responsivePriority"], json!(1));
    }

    #[test]
    fn attributes_stay_out_of_options() {
        let column = Column::make("id")
            .attributes(HtmlAttributes::new().with("data-sort", "id"))
            .search("<input>");
        let node = column.to_node();
        assert!(node.get("attributes").is_none());
        assert!(node.get("search").is_none());
    }

    #[test]
    fn cells() {
        let column = Column::make("email")
            .class_name("all")
            .width("20%")
            .option("style", json!("color:red"))
            .attributes(HtmlAttributes::new().with("data-priority", "1"))
            .footer_with_attributes(
                "Total",
                HtmlAttributes::new().with("class", "sum").with("onclick", "x()"),
            );
        assert_eq!(
            column.header_cell(),
            r#"<th class="all" width="20%" style="color:red" data-priority="1">Email</th>"#
        );
        assert_eq!(column.footer_cell(), r#"<th class="sum">Total</th>"#);
        assert_eq!(column.search_cell(), "<th></th>");
        assert_eq!(
            column.clone().search("<input/>").search_cell(),
            "<th><input/></th>"
        );
        assert_eq!(
            column.search("<input/>").searchable(false).search_cell(),
            "<th></th>"
        );
    }
}

//! Table builder: collects columns and options, then renders the `<table>`
//! skeleton and the `<script>` that initialises the widget on it.

use std::fmt;
use std::sync::Arc;

use datatables_params::{ConfigMap, ConfigNode, Parameters, Serializer};
use tracing::debug;

use crate::attributes::{AttrValue, HtmlAttributes};
use crate::column::Column;
use crate::columns::{action_column, checkbox_column, index_column};
use crate::config::BuilderConfig;
use crate::editor::Editor;
use crate::options::{Ajax, Direction};
use crate::template::{
    format_template, DefaultTemplates, EditorScript, TemplateContext, TemplateRenderer,
};
use crate::HtmlError;

#[derive(Clone)]
pub struct Builder {
    config: BuilderConfig,
    renderer: Arc<dyn TemplateRenderer + Send + Sync>,
    columns: Vec<Column>,
    attributes: ConfigMap,
    ajax: Ajax,
    table_attributes: HtmlAttributes,
    template: Option<String>,
    editors: Vec<Editor>,
}

impl fmt::Debug for Builder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builder")
            .field("config", &self.config)
            .field("columns", &self.columns)
            .field("attributes", &self.attributes)
            .field("ajax", &self.ajax)
            .field("table_attributes", &self.table_attributes)
            .field("template", &self.template)
            .field("editors", &self.editors)
            .finish_non_exhaustive()
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new(BuilderConfig::default())
    }
}

impl Builder {
    /// A builder using `config` and the built-in templates.
    pub fn new(config: BuilderConfig) -> Self {
        Self {
            table_attributes: config.table.clone(),
            config,
            renderer: Arc::new(DefaultTemplates),
            columns: Vec::new(),
            attributes: ConfigMap::new(),
            ajax: Ajax::default(),
            template: None,
            editors: Vec::new(),
        }
    }

    /// Replaces the template source used by [`Builder::generate_scripts`].
    pub fn with_renderer<R>(mut self, renderer: R) -> Self
    where
        R: TemplateRenderer + Send + Sync + 'static,
    {
        self.renderer = Arc::new(renderer);
        self
    }

    /// The configuration this builder was created with.
    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    // -----------------------------------------------------------------------
    // Columns
    // -----------------------------------------------------------------------

    /// Appends `columns` in order.
    pub fn columns(&mut self, columns: impl IntoIterator<Item = Column>) -> &mut Self {
        self.columns.extend(columns);
        self
    }

    /// Appends one column.
    pub fn add_column(&mut self, column: Column) -> &mut Self {
        self.columns.push(column);
        self
    }

    /// Inserts `column` before all others.
    pub fn add_column_before(&mut self, column: Column) -> &mut Self {
        self.columns.insert(0, column);
        self
    }

    /// Removes every column whose `name` is listed.
    pub fn remove_column(&mut self, names: &[&str]) -> &mut Self {
        self.columns
            .retain(|column| !names.contains(&column.name.as_str()));
        self
    }

    /// Columns in display order.
    pub fn get_columns(&self) -> &[Column] {
        &self.columns
    }

    /// Appends the row index column.
    pub fn add_index(&mut self, options: ConfigMap) -> &mut Self {
        self.add_column(index_column(options))
    }

    /// Appends the action column.
    pub fn add_action(&mut self, options: ConfigMap) -> &mut Self {
        self.add_column(action_column(options))
    }

    /// Adds the checkbox column at `position`, or last when `None`.
    pub fn add_checkbox(&mut self, options: ConfigMap, position: Option<usize>) -> &mut Self {
        let column = checkbox_column(options);
        match position {
            Some(index) if index <= self.columns.len() => self.columns.insert(index, column),
            _ => self.columns.push(column),
        }
        self
    }

    // -----------------------------------------------------------------------
    // Options
    // -----------------------------------------------------------------------

    /// Merges widget options; later values win.
    pub fn parameters(&mut self, attributes: ConfigMap) -> &mut Self {
        for (key, value) in attributes {
            self.attributes.insert(key, value);
        }
        self
    }

    /// Sets one widget option.
    pub fn option(&mut self, key: impl Into<String>, value: impl Into<ConfigNode>) -> &mut Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// A widget option set on this builder, defaults excluded.
    pub fn get_option(&self, key: &str) -> Option<&ConfigNode> {
        self.attributes.get(key)
    }

    /// Sets the data source.
    pub fn ajax(&mut self, ajax: impl Into<Ajax>) -> &mut Self {
        self.ajax = ajax.into();
        self
    }

    /// Sets the `dom` layout string.
    pub fn dom(&mut self, dom: impl Into<String>) -> &mut Self {
        self.option("dom", dom.into())
    }

    /// Sets `pageLength`.
    pub fn page_length(&mut self, length: u32) -> &mut Self {
        self.option("pageLength", length)
    }

    /// Sets `lengthMenu`.
    pub fn length_menu(&mut self, lengths: &[i64]) -> &mut Self {
        self.option("lengthMenu", lengths.to_vec())
    }

    /// Sets the initial `order` as `[column, direction]` pairs.
    pub fn order(&mut self, order: &[(usize, Direction)]) -> &mut Self {
        let order: Vec<ConfigNode> = order
            .iter()
            .map(|(column, direction)| {
                ConfigNode::Array(vec![(*column).into(), direction.as_str().into()])
            })
            .collect();
        self.option("order", order)
    }

    /// Sets `stateSave`.
    pub fn state_save(&mut self, flag: bool) -> &mut Self {
        self.option("stateSave", flag)
    }

    /// Sets `responsive`.
    pub fn responsive(&mut self, flag: bool) -> &mut Self {
        self.option("responsive", flag)
    }

    /// Sets `buttons`. An `editor` entry names an editor instance and is emitted raw.
    pub fn buttons(&mut self, buttons: impl IntoIterator<Item = ConfigNode>) -> &mut Self {
        self.option("buttons", buttons.into_iter().collect::<Vec<_>>())
    }

    /// Sets `language`.
    pub fn language(&mut self, language: ConfigMap) -> &mut Self {
        self.option("language", ConfigNode::Object(language))
    }

    /// Sets `select`.
    pub fn select(&mut self, select: ConfigNode) -> &mut Self {
        self.option("select", select)
    }

    /// Sets the `initComplete` callback.
    pub fn init_complete(&mut self, script: impl Into<String>) -> &mut Self {
        self.option("initComplete", script.into())
    }

    /// Sets the `drawCallback` callback.
    pub fn draw_callback(&mut self, script: impl Into<String>) -> &mut Self {
        self.option("drawCallback", script.into())
    }

    /// Names the script template passed to the renderer.
    pub fn set_template(&mut self, name: impl Into<String>) -> &mut Self {
        self.template = Some(name.into());
        self
    }

    /// Adds an editor instance, initialised before the table.
    pub fn editor(&mut self, editor: Editor) -> &mut Self {
        self.editors.push(editor);
        self
    }

    // -----------------------------------------------------------------------
    // Table attributes
    // -----------------------------------------------------------------------

    /// Sets one attribute of the rendered `<table>`.
    pub fn set_table_attribute(
        &mut self,
        name: impl Into<String>,
        value: impl Into<AttrValue>,
    ) -> &mut Self {
        self.table_attributes.set(name, value);
        self
    }

    /// Merges `attributes` into the table attributes.
    pub fn set_table_attributes(&mut self, attributes: &HtmlAttributes) -> &mut Self {
        self.table_attributes.merge(attributes);
        self
    }

    /// Sets the table `id`, which scripts also target.
    pub fn set_table_id(&mut self, id: impl Into<String>) -> &mut Self {
        self.set_table_attribute("id", id.into())
    }

    /// A table attribute as text.
    pub fn table_attribute(&self, name: &str) -> Option<String> {
        self.table_attributes.get_text(name)
    }

    /// The table `id`, empty when unset.
    pub fn table_id(&self) -> String {
        self.table_attribute("id").unwrap_or_default()
    }

    // -----------------------------------------------------------------------
    // Output
    // -----------------------------------------------------------------------

    fn serializer(&self) -> Serializer {
        Serializer::new(self.config.marker()).with_scheme(self.config.placeholder_scheme())
    }

    /// Serializes `attributes` on top of the widget defaults.
    pub fn parameterize(&self, attributes: ConfigMap) -> Result<String, HtmlError> {
        let params = Parameters::new(attributes).into_node();
        Ok(self.serializer().serialize(&params)?)
    }

    /// Widget options: merged parameters, the ajax source and the columns.
    pub fn generate_json(&self) -> Result<String, HtmlError> {
        let mut args = self.attributes.clone();
        args.insert("ajax".into(), self.ajax.to_node());
        args.insert(
            "columns".into(),
            ConfigNode::Array(self.columns.iter().map(Column::to_node).collect()),
        );
        debug!(
            columns = self.columns.len(),
            options = self.attributes.len(),
            "generating table parameters"
        );
        self.parameterize(args)
    }

    /// Script body: the template filled with the table id and parameters.
    pub fn generate_scripts(&self) -> Result<String, HtmlError> {
        let params = self.generate_json()?;
        self.render_script(&params)
    }

    /// Renders the script template around already serialized `params`.
    pub fn render_script(&self, params: &str) -> Result<String, HtmlError> {
        let table_id = self.table_id();
        let serializer = self.serializer();
        let editors = self
            .editors
            .iter()
            .map(|editor| -> Result<EditorScript, HtmlError> {
                Ok(EditorScript {
                    instance: editor.instance.clone(),
                    params: serializer.serialize(&editor.to_node(&table_id))?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let ctx = TemplateContext {
            namespace: self.config.namespace.clone(),
            editors,
        };
        let name = self.template.as_deref().unwrap_or(&self.config.script);
        debug!(template = name, table = %table_id, "rendering table script");
        let template = self.renderer.render(name, &ctx)?;
        format_template(&template, &[table_id.as_str(), params])
    }

    /// `<script>` element. `script` defaults to
    /// [`Builder::generate_scripts`] and `attributes` to
    /// `type="text/javascript"`.
    pub fn scripts(
        &self,
        script: Option<&str>,
        attributes: Option<&HtmlAttributes>,
    ) -> Result<String, HtmlError> {
        let script = match script {
            Some(script) => script.to_string(),
            None => self.generate_scripts()?,
        };
        let attributes = match attributes {
            Some(attributes) => attributes.render(),
            None => HtmlAttributes::new().with("type", "text/javascript").render(),
        };
        Ok(format!("<script{attributes}>{script}</script>\n"))
    }

    /// `<table>` skeleton. `attributes` are merged into the table
    /// attributes and kept for later calls, so an id given here is the one
    /// the script targets.
    pub fn table(
        &mut self,
        attributes: &HtmlAttributes,
        draw_footer: bool,
        draw_search: bool,
    ) -> String {
        self.set_table_attributes(attributes);
        debug!(
            columns = self.columns.len(),
            draw_footer, draw_search, "rendering table markup"
        );

        let mut html = format!("<table{}><thead><tr>", self.table_attributes);
        for column in &self.columns {
            html.push_str(&column.header_cell());
        }
        html.push_str("</tr>");
        if draw_search {
            html.push_str(r#"<tr class="search-filter">"#);
            for column in &self.columns {
                html.push_str(&column.search_cell());
            }
            html.push_str("</tr>");
        }
        html.push_str("</thead>");
        if draw_footer {
            html.push_str("<tfoot><tr>");
            for column in &self.columns {
                html.push_str(&column.footer_cell());
            }
            html.push_str("</tr></tfoot>");
        }
        html.push_str("</table>");
        html
    }
}

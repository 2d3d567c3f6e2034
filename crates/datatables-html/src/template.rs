//! Script templates.
//!
//! A template is script text with positional slots: `%1$s` receives the
//! table id and `%2$s` the serialized parameters. Literal percent signs are
//! written `%%`.

use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::HtmlError;

pub const DEFAULT_SCRIPT_TEMPLATE: &str = "datatables::script";

/// An editor instance with its options already serialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorScript {
    pub instance: String,
    pub params: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateContext {
    /// JavaScript global collecting table instances.
    pub namespace: String,
    pub editors: Vec<EditorScript>,
}

/// Resolves a template name to template text.
pub trait TemplateRenderer {
    fn render(&self, name: &str, ctx: &TemplateContext) -> Result<String, HtmlError>;
}

impl<F> TemplateRenderer for F
where
    F: Fn(&str, &TemplateContext) -> Result<String, HtmlError>,
{
    fn render(&self, name: &str, ctx: &TemplateContext) -> Result<String, HtmlError> {
        self(name, ctx)
    }
}

/// Built-in templates.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTemplates;

impl TemplateRenderer for DefaultTemplates {
    fn render(&self, name: &str, ctx: &TemplateContext) -> Result<String, HtmlError> {
        match name {
            DEFAULT_SCRIPT_TEMPLATE => Ok(default_script(ctx)),
            other => Err(HtmlError::UnknownTemplate(other.to_string())),
        }
    }
}

fn default_script(ctx: &TemplateContext) -> String {
    let ns = &ctx.namespace;
    let mut script = format!("$(function(){{window.{ns}=window.{ns}||{{}};");
    for editor in &ctx.editors {
        script.push_str(&format!(
            "var {instance}=window.{ns}[\"%1$s-{instance}\"]=new $.fn.dataTable.Editor({params});",
            instance = editor.instance,
            params = editor.params.replace('%', "%%"),
        ));
    }
    script.push_str(&format!(
        "window.{ns}[\"%1$s\"]=$(\"#%1$s\").DataTable(%2$s);}});"
    ));
    script
}

fn slot_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"%%|%(?:([1-9][0-9]*)\$)?s").expect("valid slot pattern"))
}

/// Fills `%N$s` (1-based) and sequential `%s` slots from `args`.
pub fn format_template(template: &str, args: &[&str]) -> Result<String, HtmlError> {
    let mut next = 0usize;
    let mut missing = None;
    let out = slot_pattern().replace_all(template, |caps: &Captures<'_>| {
        if &caps[0] == "%%" {
            return "%".to_string();
        }
        let index = match caps.get(1) {
            Some(position) => match position.as_str().parse::<usize>() {
                Ok(position) => position - 1,
                Err(_) => {
                    missing.get_or_insert(usize::MAX);
                    return String::new();
                }
            },
            None => {
                next += 1;
                next - 1
            }
        };
        match args.get(index) {
            Some(arg) => (*arg).to_string(),
            None => {
                missing.get_or_insert(index.saturating_add(1));
                String::new()
            }
        }
    });
    match missing {
        Some(position) => Err(HtmlError::MissingTemplateArgument(position)),
        None => Ok(out.into_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_and_sequential_slots() {
        assert_eq!(
            format_template("$('#%1$s').DataTable(%2$s); // %1$s", &["users", "{}"]).unwrap(),
            "$('#users').DataTable({}); // users"
        );
        assert_eq!(format_template("%s-%s", &["a", "b"]).unwrap(), "a-b");
        assert_eq!(format_template("100%% %1$s", &["x"]).unwrap(), "100% x");
    }

    #[test]
    fn arguments_are_not_reinterpreted() {
        assert_eq!(
            format_template("%2$s", &["id", r#"{"w":"%1$s"}"#]).unwrap(),
            r#"{"w":"%1$s"}"#
        );
    }

    #[test]
    fn missing_argument() {
        assert!(matches!(
            format_template("%3$s", &["a"]),
            Err(HtmlError::MissingTemplateArgument(3))
        ));
    }

    #[test]
    fn overlong_position_is_missing_not_sequential() {
        assert!(matches!(
            format_template("%99999999999999999999$s", &["a"]),
            Err(HtmlError::MissingTemplateArgument(usize::MAX))
        ));
    }

    #[test]
    fn default_template() {
        let ctx = TemplateContext {
            namespace: "LaravelDataTables".into(),
            editors: vec![EditorScript {
                instance: "editor".into(),
                params: r#"{"w":"50%"}"#.into(),
            }],
        };
        let template = DefaultTemplates.render(DEFAULT_SCRIPT_TEMPLATE, &ctx).unwrap();
        assert_eq!(
            format_template(&template, &["users", "{}"]).unwrap(),
            concat!(
                r#"$(function(){window.LaravelDataTables=window.LaravelDataTables||{};"#,
                r#"var editor=window.LaravelDataTables["users-editor"]=new $.fn.dataTable.Editor({"w":"50%"});"#,
                r##"window.LaravelDataTables["users"]=$("#users").DataTable({});});"##
            )
        );
    }

    #[test]
    fn unknown_template() {
        let err = DefaultTemplates
            .render("custom::script", &TemplateContext::default())
            .unwrap_err();
        assert!(matches!(err, HtmlError::UnknownTemplate(name) if name == "custom::script"));
    }
}

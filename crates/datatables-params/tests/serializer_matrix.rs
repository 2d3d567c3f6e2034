//! Serializer behaviour over realistic widget option trees.

use datatables_params::{
    serialize, CallbackMarker, ConfigNode, Parameters, PlaceholderScheme, Serializer,
};
use serde_json::json;

fn default_serialize(value: &ConfigNode) -> String {
    serialize(value, &CallbackMarker::default()).expect("serialize")
}

// ---------------------------------------------------------------------------
// Plain JSON
// ---------------------------------------------------------------------------

#[test]
fn scalars_match_serde_json() {
    for value in [json!(null), json!(true), json!(-3), json!(2.5), json!("text")] {
        assert_eq!(default_serialize(&value), serde_json::to_string(&value).unwrap());
    }
}

#[test]
fn escaping_is_left_to_the_encoder() {
    let value = json!({"title": "Tom's \"pick\"\n", "ajax": "/users?x=1&y=</script>"});
    assert_eq!(default_serialize(&value), serde_json::to_string(&value).unwrap());
}

// ---------------------------------------------------------------------------
// Raw expressions
// ---------------------------------------------------------------------------

#[test]
fn column_render_scenario() {
    let value = json!({
        "ajax": "/data",
        "columns": [
            {"data": "name"},
            {"data": "age", "render": "function(d){return d}"}
        ]
    });
    assert_eq!(
        default_serialize(&value),
        r#"{"ajax":"/data","columns":[{"data":"name"},{"data":"age","render":function(d){return d}}]}"#
    );
}

#[test]
fn jquery_expression_at_column_render() {
    let value = json!({"columns": [{"render": "$('#x').val()"}]});
    let out = default_serialize(&value);
    assert!(out.contains(r#""render":$('#x').val()"#), "{out}");
    assert!(!out.contains(r#""$('#x').val()""#));
}

#[test]
fn editor_paths_are_raw_regardless_of_prefix() {
    let value = json!({"editor": {"fields": {"name": "nameField"}}});
    assert_eq!(
        default_serialize(&value),
        r#"{"editor":{"fields":{"name":nameField}}}"#
    );
}

#[test]
fn empty_editor_values_stay_strings() {
    let value = json!({"buttons": [{"extend": "create", "editor": ""}]});
    assert_eq!(
        default_serialize(&value),
        r#"{"buttons":[{"extend":"create","editor":""}]}"#
    );
}

#[test]
fn non_string_leaves_under_editor_are_untouched() {
    let value = json!({"editor": {"idSrc": 1, "legacy": true, "x": null}});
    assert_eq!(default_serialize(&value), serde_json::to_string(&value).unwrap());
}

#[test]
fn deep_raw_values_are_all_substituted() {
    let value = json!({
        "layout": {
            "top": [
                {"buttons": [{"action": "function(e, dt){ dt.ajax.reload(); }"}]},
                {"features": {"search": {"placeholder": "Find"}}}
            ]
        },
        "select": [[{"style": "os", "selector": "$.fn.selector"}]]
    });
    assert_eq!(
        default_serialize(&value),
        concat!(
            r#"{"layout":{"top":[{"buttons":[{"action":function(e, dt){ dt.ajax.reload(); }}]},"#,
            r#"{"features":{"search":{"placeholder":"Find"}}}]},"#,
            r#""select":[[{"style":"os","selector":$.fn.selector}]]}"#
        )
    );
}

#[test]
fn dotted_key_and_nested_path_keep_their_own_raw_text() {
    let value = json!({
        "a.b": "function(){return 1}",
        "a": {"b": "function(){return 2}"},
        "x.0": "$.one",
        "x": ["$.two"]
    });
    let expected = concat!(
        r#"{"a.b":function(){return 1},"a":{"b":function(){return 2}},"#,
        r#""x.0":$.one,"x":[$.two]}"#
    );
    assert_eq!(default_serialize(&value), expected);
    let nonced = Serializer::default()
        .with_scheme(PlaceholderScheme::random())
        .serialize(&value)
        .unwrap();
    assert_eq!(nonced, expected);
}

#[test]
fn raw_root_string() {
    assert_eq!(default_serialize(&json!(" function(){} ")), "function(){}");
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[test]
fn custom_prefixes() {
    let marker = CallbackMarker::new(["window."]);
    let value = json!({"a": "window.render", "b": "function(){}"});
    assert_eq!(
        serialize(&value, &marker).unwrap(),
        r#"{"a":window.render,"b":"function(){}"}"#
    );
}

#[test]
fn parameters_with_defaults() {
    let ConfigNode::Object(attrs) = json!({
        "ajax": "/users",
        "initComplete": "function () { this.api().columns().every(fn); }"
    }) else {
        unreachable!()
    };
    let out = Serializer::default()
        .with_scheme(PlaceholderScheme::random())
        .serialize(&Parameters::new(attrs).into_node())
        .unwrap();
    assert_eq!(
        out,
        concat!(
            r#"{"serverSide":true,"processing":true,"ajax":"/users","columns":[],"#,
            r#""initComplete":function () { this.api().columns().every(fn); }}"#
        )
    );
}

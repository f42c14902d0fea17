//! JSON export: representability filtering, the list asymmetry, key order,
//! and the render-back round trip.

mod common;

use common::load_ok;
use marl_runtime::{export, export_string, export_string_pretty};
use proptest::prelude::*;
use serde_json::{Value as Json, json};

#[test]
fn functions_are_dropped_and_records_recurse() {
    let module = load_ok(
        "a = 1\n\
         b = fn -> 1 endfn\n\
         c = { d = fn -> 2 endfn\n e = 2 }",
    );
    assert_eq!(export(&module), json!({"a": 1, "c": {"e": 2}}));
}

#[test]
fn a_record_emptied_by_filtering_is_kept() {
    let module = load_ok("r = { f = fn -> 1 endfn }\nkeep = true");
    assert_eq!(export(&module), json!({"r": {}, "keep": true}));
}

#[test]
fn lists_are_dropped_whole() {
    let module = load_ok("xs = [1, fn -> 1 endfn, 3]\nok = [1, 2]");
    assert_eq!(export(&module), json!({"ok": [1, 2]}));
}

#[test]
fn records_inside_lists_are_not_refiltered() {
    let module = load_ok("xs = [{ ok = 1 }]");
    assert_eq!(export(&module), json!({"xs": [{"ok": 1}]}));

    // One unrepresentable field inside a listed record drops the list.
    let module = load_ok("xs = [{ bad = fn -> 1 endfn }]\ny = 0");
    assert_eq!(export(&module), json!({"y": 0}));
}

#[test]
fn non_finite_floats_are_not_representable() {
    let module = load_ok("a = math.nan\nb = math.inf\nc = 1.5\nxs = [1, math.nan]");
    assert_eq!(export(&module), json!({"c": 1.5}));
}

#[test]
fn underscore_fields_export_normally() {
    let module = load_ok("_hidden = 1\nshown = 2");
    assert_eq!(export(&module), json!({"_hidden": 1, "shown": 2}));
}

#[test]
fn keys_keep_assignment_order() {
    let module = load_ok("z = 1\na = 2\nm = 3");
    assert_eq!(export_string(&module), r#"{"z":1,"a":2,"m":3}"#);
}

#[test]
fn redefinition_keeps_the_first_position() {
    let module = load_ok("z = 1\na = 2\nz = 3");
    assert_eq!(export_string(&module), r#"{"z":3,"a":2}"#);
}

#[test]
fn pretty_form_is_indented() {
    let module = load_ok("a = 1");
    let pretty = export_string_pretty(&module);
    assert!(pretty.contains('\n'), "expected indented output: {pretty}");
    let parsed: Json = serde_json::from_str(&pretty).unwrap();
    assert_eq!(parsed, json!({"a": 1}));
}

#[test]
fn integral_floats_stay_floats() {
    let module = load_ok("x = 1.0\ny = 1");
    assert_eq!(export_string(&module), r#"{"x":1.0,"y":1}"#);
}

#[test]
fn non_record_root_exports_directly() {
    let mut rt = marl_runtime::Runtime::new();
    let expr = marl_driver::Driver::new().compile_expr_text("<test>", "[1, \"two\"]");
    let value = rt.eval_expr(&expr.thunk).unwrap();
    assert_eq!(export(&value), json!([1, "two"]));

    let expr = marl_driver::Driver::new().compile_expr_text("<test>", "fn -> 1 endfn");
    let value = rt.eval_expr(&expr.thunk).unwrap();
    assert_eq!(export(&value), Json::Null);
}

/// Render exported JSON back into assignment source.
fn json_to_assignments(json: &Json) -> String {
    let Json::Object(map) = json else {
        panic!("expected an object, got {json}");
    };
    map.iter()
        .map(|(name, value)| format!("{name} = {}", json_to_expr(value)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn json_to_expr(value: &Json) -> String {
    match value {
        Json::Bool(true) => "true".to_string(),
        Json::Bool(false) => "false".to_string(),
        Json::Number(n) => n.to_string(),
        Json::String(s) => marl_syntax::quote(s),
        Json::Array(items) => {
            let inner = items
                .iter()
                .map(json_to_expr)
                .collect::<Vec<_>>()
                .join(", ");
            format!("[{inner}]")
        }
        Json::Object(_) => format!("{{\n{}\n}}", json_to_assignments(value)),
        Json::Null => panic!("null has no literal form"),
    }
}

#[test]
fn export_renders_back_to_an_equivalent_module() {
    let src = "name = \"svc\"\n\
               port = 8080\n\
               ratio = 0.25\n\
               on = true\n\
               tags = [\"a\", \"b\"]\n\
               limits = { cpu = 2\n mem = 512 }";
    let first = export(&load_ok(src));
    assert_eq!(
        first,
        json!({
            "name": "svc",
            "port": 8080,
            "ratio": 0.25,
            "on": true,
            "tags": ["a", "b"],
            "limits": {"cpu": 2, "mem": 512},
        })
    );

    let rendered = json_to_assignments(&first);
    let second = export(&load_ok(&rendered));
    assert_eq!(second, first);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn scalars_survive_the_round_trip(
        n in any::<i64>(),
        x in prop::num::f64::NORMAL,
        s in "[a-z ]{0,12}",
    ) {
        let float_literal = ryu::Buffer::new().format(x).to_string();
        let src = format!(
            "i = {n}\nf = {float_literal}\ns = {}",
            marl_syntax::quote(&s)
        );
        let json = export(&load_ok(&src));
        prop_assert_eq!(&json["i"], &json!(n));
        prop_assert_eq!(json["f"].as_f64(), Some(x));
        prop_assert_eq!(json["s"].as_str(), Some(s.as_str()));
    }
}

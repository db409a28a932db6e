//! Reconstruction integration tests: generic tree in, class models with
//! rendered method bodies and typed properties out.

use scaffold_analysis::breakdown::BodyKind;
use scaffold_analysis::syntax::build as b;
use scaffold_analysis::{Analyzer, ParseContext, SyntaxNode};
use scaffold_core::errors::AnalysisError;
use scaffold_core::ScaffoldConfig;

// ─── Helpers ───────────────────────────────────────────────────────────────

fn analyzer() -> Analyzer {
    Analyzer::new(&ScaffoldConfig::default())
}

fn single_class(members: Vec<SyntaxNode>) -> SyntaxNode {
    b::file(Some("app"), vec![b::class("Subject", &[], vec![], members)])
}

fn run(tree: &SyntaxNode) -> ParseContext {
    analyzer().run_tree(tree).unwrap()
}

// ─── Method bodies ─────────────────────────────────────────────────────────

#[test]
fn test_method_body_statements_in_order() {
    let body = b::block(vec![
        b::property(
            "val",
            "editor",
            None,
            Some(b::call(
                b::name("find"),
                vec![
                    b::arg(b::callable_ref(Some("Editor"), "class")),
                    b::named_arg("scope", b::name("catScheduleScope")),
                ],
                None,
            )),
        ),
        b::call(b::member(&["editor", "openModal"]), vec![], None),
        b::ret(Some(b::boolean(true))),
    ]);
    let tree = single_class(vec![b::function("open", vec![], Some("Boolean"), Some(body))]);
    let cx = run(&tree);

    let method = cx.classes["Subject"].method("open").unwrap();
    assert_eq!(method.body_kind, BodyKind::Block);
    assert_eq!(method.return_type.as_deref(), Some("Boolean"));
    assert_eq!(
        method.statements,
        vec![
            "val editor = find(Editor::class, scope = catScheduleScope)",
            "editor.openModal()",
            "return true",
        ]
    );
    assert_eq!(cx.diagnostics.statements, 3);
    assert_eq!(cx.diagnostics.raw_fallbacks, 0);
}

#[test]
fn test_unrecognized_statement_keeps_its_slot() {
    let body = b::block(vec![
        b::call(b::name("before"), vec![], None),
        b::raw("try_expression", "try {\n    risky()\n} catch (e: Exception) {}"),
        b::call(b::name("after"), vec![], None),
    ]);
    let tree = single_class(vec![b::function("guarded", vec![], None, Some(body))]);
    let cx = run(&tree);

    let statements = &cx.classes["Subject"].method("guarded").unwrap().statements;
    assert_eq!(statements.len(), 3);
    assert_eq!(statements[0], "before()");
    assert_eq!(statements[1], "try { risky() } catch (e: Exception) {}");
    assert_eq!(statements[2], "after()");
    assert_eq!(cx.diagnostics.raw_fallbacks, 1);
}

#[test]
fn test_expression_and_reference_bodies() {
    let tree = single_class(vec![
        b::function(
            "total",
            vec![b::param("a", Some("Int"), None), b::param("b", Some("Int"), None)],
            Some("Int"),
            Some(b::binary(b::name("a"), "+", b::name("b"))),
        ),
        b::function("handler", vec![], None, Some(b::callable_ref(None, "onSave"))),
        b::function("abstractOne", vec![], Some("Unit"), None),
    ]);
    let cx = run(&tree);
    let class = &cx.classes["Subject"];

    let total = class.method("total").unwrap();
    assert_eq!(total.body_kind, BodyKind::Expression);
    assert_eq!(total.statements, vec!["a + b"]);
    assert_eq!(total.params.len(), 2);
    assert_eq!(total.params[1].type_tag, "Int");

    let handler = class.method("handler").unwrap();
    assert_eq!(handler.body_kind, BodyKind::Reference);
    assert_eq!(handler.statements, vec!["::onSave"]);

    let absent = class.method("abstractOne").unwrap();
    assert_eq!(absent.body_kind, BodyKind::Absent);
    assert!(absent.statements.is_empty());
}

#[test]
fn test_trailing_lambda_rendering() {
    let body = b::block(vec![b::call(
        b::member(&["items", "forEach"]),
        vec![],
        Some(b::lambda(
            &["item"],
            vec![b::call(b::name("println"), vec![b::arg(b::name("item"))], None)],
        )),
    )]);
    let tree = single_class(vec![b::function("dump", vec![], None, Some(body))]);
    let cx = run(&tree);
    assert_eq!(
        cx.classes["Subject"].method("dump").unwrap().statements,
        vec!["items.forEach { item -> println(item) }"]
    );
}

// ─── Properties ────────────────────────────────────────────────────────────

#[test]
fn test_property_type_resolution() {
    let tree = single_class(vec![
        b::property("val", "declared", Some("Duration"), Some(b::int("5"))),
        b::property("var", "count", None, Some(b::int("0"))),
        b::property("val", "big", None, Some(b::int("10L"))),
        b::property("val", "ratio", None, Some(b::float("0.5f"))),
        b::property("val", "label", None, Some(b::string("hi"))),
        b::property("val", "nothing", None, Some(b::null())),
        b::property("val", "derived", None, Some(b::call(b::name("compute"), vec![], None))),
    ]);
    let cx = run(&tree);
    let class = &cx.classes["Subject"];

    let tag = |name: &str| class.property(name).unwrap().type_tag.clone();
    assert_eq!(tag("declared"), "Duration");
    assert_eq!(tag("count"), "Int");
    assert_eq!(tag("big"), "Long");
    assert_eq!(tag("ratio"), "Float");
    assert_eq!(tag("label"), "String");
    assert_eq!(tag("nothing"), "Nothing?");
    assert_eq!(tag("derived"), "unknown");

    assert!(class.property("count").unwrap().mutable);
    assert!(!class.property("label").unwrap().mutable);
    assert_eq!(class.property("label").unwrap().initializer, "\"hi\"");
}

#[test]
fn test_promoted_constructor_params_come_first() {
    let tree = b::file(
        None,
        vec![b::class(
            "Cat",
            &[],
            vec![
                b::param("name", Some("String"), Some("val")),
                b::param("age", Some("Int"), Some("var")),
                b::param("plain", Some("Int"), None),
            ],
            vec![
                b::property("val", "name", None, Some(b::string("shadow"))),
                b::property("val", "nick", None, Some(b::string("tom"))),
            ],
        )],
    );
    let cx = run(&tree);
    let class = &cx.classes["Cat"];

    let names: Vec<&str> = class.properties.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["name", "age", "nick"]);
    assert_eq!(class.property("name").unwrap().type_tag, "String");
    assert!(class.property("age").unwrap().mutable);
    assert_eq!(cx.diagnostics.skipped_entities, 1);
}

// ─── Failure modes ─────────────────────────────────────────────────────────

#[test]
fn test_missing_tree_is_an_error() {
    let mut cx = ParseContext::new();
    let err = analyzer().analyze_tree(None, &mut cx).unwrap_err();
    assert!(matches!(err, AnalysisError::MissingTree));
    assert_eq!(cx, ParseContext::new());
}

#[test]
fn test_json_tree_round_trip_through_analyzer() {
    let tree = single_class(vec![b::function(
        "greet",
        vec![],
        None,
        Some(b::block(vec![b::call(b::name("hello"), vec![], None)])),
    )]);
    let json = serde_json::to_string(&tree).unwrap();

    let mut cx = ParseContext::new();
    analyzer().analyze_json(&json, &mut cx).unwrap();
    assert_eq!(cx.classes["Subject"].method("greet").unwrap().statements, vec!["hello()"]);

    let mut cx = ParseContext::new();
    let err = analyzer().analyze_json("null", &mut cx).unwrap_err();
    assert!(matches!(err, AnalysisError::MissingTree));

    let err = analyzer().analyze_json("{not json", &mut cx).unwrap_err();
    assert!(matches!(err, AnalysisError::InvalidTree { .. }));
}

#[test]
fn test_top_level_functions_recorded() {
    let tree = b::file(
        None,
        vec![b::function(
            "main",
            vec![],
            None,
            Some(b::block(vec![b::call(
                b::name("launch"),
                vec![b::arg(b::callable_ref(Some("MyApp"), "class"))],
                None,
            )])),
        )],
    );
    let cx = run(&tree);
    assert_eq!(cx.functions.len(), 1);
    assert_eq!(cx.functions[0].statements, vec!["launch(MyApp::class)"]);
    assert_eq!(cx.diagnostics.functions, 1);
}

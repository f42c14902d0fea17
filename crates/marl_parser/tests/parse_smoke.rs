use marl_lexer::{Lexer, normalize_source};
use marl_parser::{Expr, Module, ParseResult, Parser, Stmt};

fn parse(src: &str) -> ParseResult {
    let normalized = normalize_source(src);
    assert!(
        normalized.diagnostics.is_empty(),
        "{:?}",
        normalized.diagnostics
    );
    let lexed = Lexer::new(&normalized.text).lex();
    assert!(lexed.diagnostics.is_empty(), "{:?}", lexed.diagnostics);
    Parser::new(&normalized.text, &lexed.tokens).parse()
}

fn parse_ok(src: &str) -> Module {
    let result = parse(src);
    assert!(result.diagnostics.is_empty(), "{:?}", result.diagnostics);
    result.module
}

fn assign_value(stmt: &Stmt) -> &Expr {
    match stmt {
        Stmt::Assign(a) => &a.value,
        other => panic!("expected assignment, got {:?}", other),
    }
}

#[test]
fn parse_assignments_and_literals() {
    let module = parse_ok("x = 1\ny = -2.5\nz = \"hi\\n\"");
    assert_eq!(module.stmts.len(), 3);
    assert!(matches!(assign_value(&module.stmts[0]), Expr::Int(1, _)));
    match assign_value(&module.stmts[1]) {
        Expr::Float(v, _) => assert_eq!(*v, -2.5),
        other => panic!("expected float, got {:?}", other),
    }
    match assign_value(&module.stmts[2]) {
        Expr::Str(s, _) => assert_eq!(s, "hi\n"),
        other => panic!("expected string, got {:?}", other),
    }
}

#[test]
fn extern_span_covers_wrapped_expression() {
    let src = ":: concat(\"a\", \"b\")";
    let module = parse_ok(src);
    match &module.stmts[0] {
        Stmt::Extern(e) => {
            let text = &src[e.span.start.0 as usize..e.span.end.0 as usize];
            assert_eq!(text, "concat(\"a\", \"b\")");
        }
        other => panic!("expected extern, got {:?}", other),
    }
}

#[test]
fn parse_nested_records() {
    let module = parse_ok("a = { b = { c = 1 }\n d = 2 }");
    let outer = match assign_value(&module.stmts[0]) {
        Expr::Record(m) => m,
        other => panic!("expected record, got {:?}", other),
    };
    assert_eq!(outer.stmts.len(), 2);
    match &outer.stmts[0] {
        Stmt::Assign(a) => {
            assert_eq!(a.name, "b");
            assert!(matches!(&a.value, Expr::Record(inner) if inner.stmts.len() == 1));
        }
        other => panic!("expected assignment, got {:?}", other),
    }
}

#[test]
fn parse_lists() {
    let module = parse_ok("xs = [1, 2.5, \"three\", [4]]\nys = []");
    match assign_value(&module.stmts[0]) {
        Expr::List(items) => {
            assert_eq!(items.len(), 4);
            assert!(matches!(&items[3], Expr::List(inner) if inner.len() == 1));
        }
        other => panic!("expected list, got {:?}", other),
    }
    assert!(matches!(assign_value(&module.stmts[1]), Expr::List(items) if items.is_empty()));
}

#[test]
fn parse_conditional() {
    let module = parse_ok("v = if c then 1 else 2 endif");
    match assign_value(&module.stmts[0]) {
        Expr::If(e) => {
            assert!(matches!(&e.cond, Expr::Ident(name, _) if name == "c"));
            assert!(matches!(&e.then, Expr::Int(1, _)));
            assert!(matches!(&e.otherwise, Expr::Int(2, _)));
        }
        other => panic!("expected if, got {:?}", other),
    }
}

#[test]
fn parse_switch_cases() {
    let module = parse_ok("v = switch x of 1 -> \"a\"; 2 -> \"b\"; end");
    match assign_value(&module.stmts[0]) {
        Expr::Switch(e) => {
            assert!(matches!(&e.scrutinee, Expr::Ident(name, _) if name == "x"));
            assert_eq!(e.cases.len(), 2);
            assert!(matches!(&e.cases[1].guard, Expr::Int(2, _)));
        }
        other => panic!("expected switch, got {:?}", other),
    }
}

#[test]
fn parse_fn_defs() {
    let module = parse_ok("f = fn -> 1 endfn\ng = fn a, b -> a endfn");
    match assign_value(&module.stmts[0]) {
        Expr::FnDef(def) => assert!(def.params.is_empty()),
        other => panic!("expected fn, got {:?}", other),
    }
    match assign_value(&module.stmts[1]) {
        Expr::FnDef(def) => assert_eq!(&*def.params, ["a".to_string(), "b".to_string()]),
        other => panic!("expected fn, got {:?}", other),
    }
}

#[test]
fn call_and_attr_suffixes_chain_left() {
    // f(1)(2).x(3) parses as Call(Attr(Call(Call(f, 1), 2), x), 3).
    let module = parse_ok("v = f(1)(2).x(3)");
    let outer = match assign_value(&module.stmts[0]) {
        Expr::Call(c) => c,
        other => panic!("expected call, got {:?}", other),
    };
    assert!(matches!(&outer.args[0], Expr::Int(3, _)));
    let attr = match &outer.callee {
        Expr::Attr(a) => a,
        other => panic!("expected attr, got {:?}", other),
    };
    assert_eq!(attr.name, "x");
    let inner = match &attr.object {
        Expr::Call(c) => c,
        other => panic!("expected call, got {:?}", other),
    };
    assert!(matches!(&inner.args[0], Expr::Int(2, _)));
    assert!(matches!(&inner.callee, Expr::Call(c) if matches!(&c.callee, Expr::Ident(n, _) if n == "f")));
}

#[test]
fn group_is_a_primary() {
    let module = parse_ok("v = (f)(1)");
    match assign_value(&module.stmts[0]) {
        Expr::Call(c) => assert!(matches!(&c.callee, Expr::Group(_))),
        other => panic!("expected call, got {:?}", other),
    }
}

#[test]
fn dot_after_int_literal_is_attr_access() {
    let module = parse_ok("v = 1.e");
    match assign_value(&module.stmts[0]) {
        Expr::Attr(a) => {
            assert!(matches!(&a.object, Expr::Int(1, _)));
            assert_eq!(a.name, "e");
        }
        other => panic!("expected attr, got {:?}", other),
    }
}

#[test]
fn oversized_int_literal_falls_back_to_float() {
    let module = parse_ok("x = 99999999999999999999");
    match assign_value(&module.stmts[0]) {
        Expr::Float(v, _) => assert_eq!(*v, 1e20),
        other => panic!("expected float fallback, got {:?}", other),
    }
}

#[test]
fn keyword_cannot_be_a_parameter() {
    let result = parse("f = fn if -> 1 endfn");
    assert!(result.diagnostics.iter().any(|d| d.is_error()));
    assert!(
        result
            .diagnostics
            .iter()
            .any(|d| d.message.contains("Keyword 'if'"))
    );
}

#[test]
fn empty_switch_is_an_error() {
    let result = parse("v = switch x of end");
    assert!(
        result
            .diagnostics
            .iter()
            .any(|d| d.message.contains("at least one case"))
    );
}

#[test]
fn missing_endif_is_an_error() {
    let result = parse("v = if c then 1 else 2");
    assert!(result.diagnostics.iter().any(|d| d.is_error()));
    assert!(
        result
            .diagnostics
            .iter()
            .any(|d| d.message.contains("'endif'"))
    );
}

#[test]
fn trailing_comma_is_rejected() {
    let result = parse("xs = [1, 2,]");
    assert!(result.diagnostics.iter().any(|d| d.is_error()));
}

#[test]
fn parser_recovers_and_keeps_later_statements() {
    let result = parse("x = = 1\ny = 2");
    assert!(result.diagnostics.iter().any(|d| d.is_error()));
    assert_eq!(result.module.stmts.len(), 2);
    assert!(matches!(&result.module.stmts[0], Stmt::Error(_)));
    match &result.module.stmts[1] {
        Stmt::Assign(a) => assert_eq!(a.name, "y"),
        other => panic!("expected assignment after recovery, got {:?}", other),
    }
}

#[test]
fn expr_entry_parses_a_single_expression() {
    let src = "add(1, 2)";
    let normalized = normalize_source(src);
    let lexed = Lexer::new(&normalized.text).lex();
    let result = Parser::new(&normalized.text, &lexed.tokens).parse_expr_entry();
    assert!(result.diagnostics.is_empty(), "{:?}", result.diagnostics);
    assert!(matches!(result.expr, Expr::Call(_)));
}

#[test]
fn expr_entry_flags_trailing_tokens() {
    let src = "1 2";
    let normalized = normalize_source(src);
    let lexed = Lexer::new(&normalized.text).lex();
    let result = Parser::new(&normalized.text, &lexed.tokens).parse_expr_entry();
    assert!(
        result
            .diagnostics
            .iter()
            .any(|d| d.message.contains("Trailing tokens"))
    );
}

#[test]
fn statement_must_start_with_name_or_extern_marker() {
    let result = parse("42");
    assert!(
        result
            .diagnostics
            .iter()
            .any(|d| d.message.contains("assignment or an extern"))
    );
    // The stray token stream still terminates.
    assert_eq!(result.module.stmts.len(), 1);
}

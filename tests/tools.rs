use arrow::{
    ast::{Data, Position, Statement},
    diagnostics::DiagnosticPrinter,
    error::LexError,
    highlight::highlight,
    interpreter::{environment::Environment, value::core::Value},
    parse_source,
};

fn report(source: &str) -> String {
    let error = parse_source(source).expect_err("source should fail to parse");
    DiagnosticPrinter::new("test.ar", source).render(&error)
}

fn strip_colors(text: &str) -> String {
    let mut out = String::new();
    let mut chars = text.chars();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            out.push(ch);
        }
    }
    out
}

#[test]
fn parse_errors_point_at_the_token() {
    assert_eq!(report("a > b;\n\"x\" > any;"),
               "error[E0104]: 'any' is only a valid target inside a pattern case.\n  --> \
                test.ar:2:7\n   |\n 2 | \"x\" > any;\n   |       ^\n");
}

#[test]
fn gutter_grows_with_the_line_number() {
    let source = format!("{}$ > x;", "\"x\" > y;\n".repeat(9));

    assert_eq!(report(&source),
               "error[E0004]: Unexpected character '$'.\n   --> test.ar:10:1\n    |\n 10 | $ > \
                x;\n    | ^\n");
}

#[test]
fn tabs_keep_the_caret_aligned() {
    assert_eq!(report("\t$"),
               "error[E0004]: Unexpected character '$'.\n  --> test.ar:1:2\n   |\n 1 | \t$\n   | \
                \t^\n");
}

#[test]
fn end_of_input_points_past_the_last_token() {
    assert_eq!(report("\"x\" > y"),
               "error[E0102]: Expected ';', found end of input.\n  --> test.ar:1:8\n   |\n 1 | \
                \"x\" > y\n   |        ^\n");
}

#[test]
fn highlighting_keeps_the_source_text() {
    let source = "# greet\n{\n    \"hi\" => \"there\" > @print;\n} > greeter;\n\"hi\" > @greeter;\n";
    let colored = highlight(source).unwrap();

    assert_ne!(colored, source);
    assert_eq!(strip_colors(&colored), source);
}

#[test]
fn highlighting_colors_block_contents() {
    let colored = highlight("{ \"a\" > any; } > c;").unwrap();

    assert!(colored.starts_with("\x1b[36m{\x1b[0m"));
    assert!(colored.contains("\x1b[32m\"a\"\x1b[0m"));
    assert!(colored.contains("\x1b[31many\x1b[0m"));
}

#[test]
fn highlighting_reports_errors_inside_blocks() {
    assert_eq!(highlight("x > y;\n{ $ } > z;"),
               Err(LexError::UnexpectedCharacter { character: '$',
                                                   line:      2,
                                                   column:    3, }));
}

#[test]
fn values_render_like_print_emits_them() {
    assert_eq!(Value::from("plain text").to_string(), "plain text");
    assert_eq!(Value::from(false).to_string(), "false");
    assert_eq!(Value::ActorRef("print".into()).to_string(), "@print");

    let program = parse_source("\"x\" > y;").unwrap();
    assert_eq!(Value::from(program).to_string(), "{\n    \"x\" > y;\n}");
    assert_eq!(Value::from(parse_source("").unwrap()).to_string(), "{}");
}

#[test]
fn values_describe_themselves_for_notices() {
    assert_eq!(Value::from("a \"b\"").describe(), "\"a \\\"b\\\"\"");
    assert_eq!(Value::from(true).describe(), "true");
    assert_eq!(Value::from("x").type_name(), "string");
}

#[test]
fn pattern_tables_render_as_blocks() {
    let mut env = Environment::new();
    let action = Statement::Send { data:     Some(Data::String("v".into())),
                                   actor:    "print".into(),
                                   position: Position::default(), };
    env.register_pattern_case("a", Data::String("k".into()), vec![action]);
    env.register_pattern_case("a", Data::Any, Vec::new());

    let Some(Value::PatternTable(table)) = env.get("a") else {
        panic!("expected a pattern table");
    };
    assert_eq!(table.len(), 2);
    assert!(table.iter().nth(1).is_some_and(|case| case.is_wildcard()));
    assert_eq!(table.to_string(), "{\n    \"k\" => \"v\" > @print;\n    any;\n}");
    assert!(env.actor("a").is_some());
    assert!(env.actor("b").is_none());
}

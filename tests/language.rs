use std::{fs, path::Path, time::Duration};

use arrow::{
    Run,
    ast::Data,
    error::{Error, LexError, RuntimeNotice},
    interpreter::{
        evaluator::{
            core::Interpreter,
            supervisor::{Limits, Outcome},
        },
        value::core::Value,
    },
    parse_source, run_source,
};
use walkdir::WalkDir;

#[test]
fn demo_programs_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "ar"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        count += 1;

        let run = run_source(&source, &Limits::unlimited().with_max_steps(100_000))
            .unwrap_or_else(|e| panic!("Demo {path:?} failed:\n{source}\nError: {e}"));
        assert!(matches!(run.outcome, Outcome::Terminated { .. }),
                "Demo {path:?} did not terminate");

        let expected = path.with_extension("out");
        if Path::new(&expected).exists() {
            let expected = fs::read_to_string(&expected).unwrap();
            assert_eq!(printed(&run),
                       expected.lines().collect::<Vec<_>>(),
                       "Demo {path:?} printed the wrong output");
        }
    }

    assert!(count > 0, "No demo programs found in demos/");
}

fn run(src: &str) -> Run {
    run_source(src, &Limits::unlimited()).unwrap_or_else(|e| panic!("Script failed: {e}"))
}

fn printed(run: &Run) -> Vec<String> {
    run.emitted.iter().map(ToString::to_string).collect()
}

fn assert_prints(src: &str, expected: &[&str]) {
    let run = run(src);
    assert_eq!(printed(&run), expected, "Script printed the wrong output:\n{src}");
}

fn assert_failure(src: &str) -> Error {
    match run_source(src, &Limits::unlimited()) {
        Ok(_) => panic!("Script succeeded but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn assign_then_print() {
    assert_prints("\"hello world\" > v; v > @print;", &["hello world"]);
}

#[test]
fn printed_strings_round_trip_through_variables() {
    for text in ["hello world",
                 "",
                 "tab\there",
                 "quote \" inside",
                 "back\\slash",
                 "line\nbreak",
                 "{braces}",
                 "ünïcödé"]
    {
        let literal = Data::String(text.to_string());
        assert_prints(&format!("{literal} > v; v > @print;"), &[text]);
    }
}

#[test]
fn matching_case_runs() {
    let run = run("{\"stop\"=>\"ok\">@print;}>actor; \"stop\">@actor;");

    assert_eq!(printed(&run), ["ok"]);
    assert!(run.notices.is_empty());
    assert!(matches!(run.outcome, Outcome::Terminated { .. }));
}

#[test]
fn unmatched_message_is_a_notice() {
    let run = run("{\"x\"=>\"1\">@print;}>actor; \"y\">@actor;");

    assert!(run.emitted.is_empty());
    assert_eq!(run.notices.len(), 1);
    assert!(matches!(&run.notices[0],
                     RuntimeNotice::Unmatched { actor, message, .. }
                         if actor == "actor" && message == "\"y\""));
}

#[test]
fn unclosed_block_fails_before_running() {
    let error = assert_failure("\"a\" > @print;\n  { \"x\" > y;");

    assert_eq!(error,
               Error::Lex(LexError::UnterminatedBlock { line:   2,
                                                        column: 3, }));
}

#[test]
fn kth_key_runs_kth_actions() {
    let cases: String = (0..4).map(|k| format!("\"key {k}\" => \"action {k}\" > @print;\n"))
                              .collect();

    for k in 0..4 {
        let src = format!("{{\n{cases}}} > actor;\n\"key {k}\" > @actor;");
        let expected = format!("action {k}");
        assert_prints(&src, &[expected.as_str()]);
    }
}

#[test]
fn whole_action_list_runs_without_fallthrough() {
    assert_prints(r#"
        {
            "go" => "one" > @print => "two" > @print;
                 => "three" > @print;
            "go" => "never" > @print;
            any  => "never either" > @print;
        } > actor;
        "go" > @actor;
    "#,
                  &["one", "two", "three"]);
}

#[test]
fn fallbacks_run_only_without_a_match() {
    let src = r#"
        {
            "known" => "case" > @print;
            "fallback 1" > @print;
            "fallback 2" > @print;
        } > actor;
        "known" > @actor;
        "other" > @actor;
    "#;

    assert_prints(src, &["case", "fallback 1", "fallback 2"]);
}

#[test]
fn definitions_accumulate() {
    assert_prints(r#"
        { "k" => "first" > @print; } > a;
        { "k" => "second" > @print; "j" => "third" > @print; } > a;
        "k" > @a;
        "j" > @a;
    "#,
                  &["first", "third"]);
}

#[test]
fn keys_are_evaluated_when_the_message_arrives() {
    assert_prints(r#"
        { greeting => "matched" > @print; } > a;
        "hello" > greeting;
        "hello" > @a;
    "#,
                  &["matched"]);
}

#[test]
fn booleans_and_symbols() {
    let run = run("true > yes; false > no; maybe > perhaps; { true => \"t\" > @print; } > a; \
                   yes > @a;");

    assert_eq!(printed(&run), ["t"]);
    assert_eq!(run.env.get("yes"), Some(Value::Boolean(true)));
    assert_eq!(run.env.get("no"), Some(Value::Boolean(false)));
    assert_eq!(run.env.get("perhaps"), Some(Value::from("maybe")));
}

#[test]
fn bound_booleans_shadow_literals() {
    assert_prints("\"yes\" > true; true > @print;", &["yes"]);
}

#[test]
fn same_signature_is_suppressed() {
    let run = run(r#"
        { "again" => "again" > @self; } > stubborn;
        "again" > @stubborn;
        "done" > @print;
    "#);

    assert_eq!(printed(&run), ["done"]);
    assert_eq!(run.notices.len(), 1);
    assert!(matches!(&run.notices[0],
                     RuntimeNotice::RecursionSuppressed { actor, line: 2, .. } if actor == "stubborn"));
}

#[test]
fn mutual_recursion_is_suppressed() {
    let run = run(r#"
        { any => any > @pong; } > ping;
        { any => any > @ping; } > pong;
        "ball" > @ping;
    "#);

    assert!(matches!(&run.notices[..],
                     [RuntimeNotice::RecursionSuppressed { actor, .. }] if actor == "ping"));
    assert!(matches!(run.outcome, Outcome::Terminated { .. }));
}

#[test]
fn distinct_messages_proceed() {
    assert_prints(r#"
        {
            "1" => "2" > @self;
            "2" => "3" > @self;
            "3" => "done" > @print;
        } > chain;
        "1" > @chain;
    "#,
                  &["done"]);
}

#[test]
fn signature_is_released_when_the_call_returns() {
    assert_prints(r#"
        { "x" => "hit" > @print; } > a;
        "x" > @a;
        "x" > @a;
    "#,
                  &["hit", "hit"]);
}

#[test]
fn it_and_self_are_scoped_to_the_call() {
    let run = run(r#"
        "outer" > it;
        { any => it > seen => self > captured; } > a;
        "inner" > @a;
    "#);

    assert_eq!(run.env.get("seen"), Some(Value::from("inner")));
    assert_eq!(run.env.get("it"), Some(Value::from("outer")));
    assert_eq!(run.env.get("self"), None);
    assert!(matches!(run.env.get("captured"), Some(Value::CodeBlock(_))));
}

#[test]
fn keys_see_the_callee_bindings() {
    assert_prints("{ it => \"hit\" > @print; } > a; \"x\" > @a;", &["hit"]);
    assert_prints("{ self => \"me\" > @print; } > a; a > @a;", &["me"]);
}

#[test]
fn unmatched_calls_restore_the_caller_bindings() {
    let run = run("\"outer\" > it; { \"k\" => \"x\" > @print; } > a; \"y\" > @a;");

    assert!(run.emitted.is_empty());
    assert!(matches!(&run.notices[..], [RuntimeNotice::Unmatched { .. }]));
    assert_eq!(run.env.get("it"), Some(Value::from("outer")));
    assert_eq!(run.env.get("self"), None);
}

#[test]
fn side_effects_inside_actors_are_visible_to_the_caller() {
    let run = run("{ any => \"set\" > flag; } > a; > @a;");

    assert_eq!(run.env.get("flag"), Some(Value::from("set")));
}

#[test]
fn any_target_writes_to_the_message_variable() {
    assert_prints(r#"
        { any => "seen" > any; } > mark;
        { any => any > @mark; } > forward;
        "fresh" > item;
        item > @forward;
        item > @print;
    "#,
                  &["seen"]);
}

#[test]
fn any_target_without_variable_is_a_notice() {
    let run = run("{ any => \"x\" > any; } > a; \"literal\" > @a;");

    assert!(matches!(&run.notices[..], [RuntimeNotice::MalformedStatement { .. }]));
}

#[test]
fn any_as_data_is_the_current_message() {
    assert_prints("{ any => any > @print; } > echo; \"m\" > @echo; any > @print;",
                  &["m", ""]);
}

#[test]
fn bare_print_emits_empty_string() {
    assert_prints("> @print;", &[""]);
}

#[test]
fn actor_references_are_followed() {
    assert_prints(r#"
        { any => "via alias" > @print; } > target;
        @target > alias;
        @alias > alias_of_alias;
        > @alias_of_alias;
    "#,
                  &["via alias"]);
}

#[test]
fn self_reference_as_data_names_the_running_actor() {
    let run = run("{ any => @self > me; } > a; > @a;");

    assert_eq!(run.env.get("me"), Some(Value::ActorRef("a".into())));
}

#[test]
fn reference_cycles_end_in_unknown_actor() {
    let run = run("@b > a; @a > b; > @a;");

    assert!(matches!(&run.notices[..],
                     [RuntimeNotice::UnknownActor { name, .. }] if name == "a"));
}

#[test]
fn runtime_problems_are_notices() {
    let run = run(r#"
        "m" > @ghost;
        "value" > v;
        "m" > @v;
        "x" => "y" > @print;
        > nothing;
        "still running" > @print;
    "#);

    assert_eq!(printed(&run), ["still running"]);
    assert!(matches!(&run.notices[..],
                     [RuntimeNotice::UnknownActor { line: 2, .. },
                      RuntimeNotice::NotAnActor { line: 4, .. },
                      RuntimeNotice::MalformedStatement { line: 5, .. },
                      RuntimeNotice::MalformedStatement { line: 6, .. }]));
}

#[test]
fn blocks_are_stored_unevaluated() {
    let run = run("{ \"inside\" > @print; } > lazy;");

    assert!(run.emitted.is_empty());
    assert!(matches!(run.env.get("lazy"), Some(Value::CodeBlock(_))));
}

#[test]
fn rebinding_a_name_keeps_its_actor() {
    let run = run("{ any => \"still an actor\" > @print; } > a; \"plain\" > a; > @a;");

    assert_eq!(printed(&run), ["still an actor"]);
    assert_eq!(run.env.get("a"), Some(Value::from("plain")));
}

#[test]
fn copied_blocks_define_actors() {
    assert_prints("{ any => \"copied\" > @print; } > a; a > b; > @b;", &["copied"]);
}

#[test]
fn step_budget_stops_the_run() {
    let src = "\"1\" > @print; \"2\" > @print; \"3\" > @print;";
    let run = run_source(src, &Limits::unlimited().with_max_steps(3)).unwrap();

    assert_eq!(run.outcome, Outcome::TimedOut { steps: 3 });
    assert_eq!(printed(&run), ["1", "2"]);
}

#[test]
fn deadline_stops_the_run() {
    let run = run_source("\"never\" > @print;",
                         &Limits::unlimited().with_timeout(Duration::ZERO)).unwrap();

    assert_eq!(run.outcome, Outcome::TimedOut { steps: 0 });
    assert!(run.emitted.is_empty());
}

#[test]
fn terminated_runs_report_their_steps() {
    let run = run("\"a\" > @print;");

    assert_eq!(run.outcome, Outcome::Terminated { steps: 2 });
}

#[test]
fn rewrite_reaches_the_fixpoint() {
    let program =
        parse_source("{ any => \"inside\" > @print; } > a; > @a; \"after\" > @print;").unwrap();
    let mut interpreter = Interpreter::new(program, Vec::<Value>::new());

    for _ in 0..3 {
        assert!(interpreter.step());
    }
    assert_eq!(interpreter.depth(), 1);

    let state = interpreter.rewrite();
    assert!(state.done);
    assert!(state.program.is_empty());
    assert!(state.env.actor("a").is_some());

    assert_eq!(interpreter.depth(), 0);
    assert_eq!(interpreter.sink(), &vec![Value::from("inside"), Value::from("after")]);
    assert!(!interpreter.step());
}

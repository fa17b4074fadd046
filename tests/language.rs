use std::fs::{self};

use npp::{
    interpreter::{evaluator::core::Interpreter, parser::parse, value::core::Value},
    run,
};
use walkdir::WalkDir;

#[test]
fn fixture_programs_produce_expected_output() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/programs").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "npp"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                              panic!("Failed to read {expected_path:?}: {e}")
                                                          });

        count += 1;
        assert_eq!(output(&source), expected, "program {path:?} printed unexpected output");
    }

    assert!(count > 0, "No programs found in tests/programs");
}

fn output(source: &str) -> String {
    let mut out = Vec::new();
    run(source, &mut out).unwrap_or_else(|e| panic!("Writing output failed: {e}"));
    String::from_utf8(out).unwrap_or_else(|e| panic!("Output is not UTF-8: {e}"))
}

fn assert_output(source: &str, expected: &str) {
    assert_eq!(output(source), expected, "for program:\n{source}");
}

fn assert_diagnostic(source: &str, message: &str) {
    let printed = output(source);
    assert!(printed.lines().any(|line| line.starts_with("Error at ") && line.ends_with(message)),
            "expected a diagnostic ending in {message:?}, got:\n{printed}");
}

#[test]
fn example_program_works() {
    let source = r#"
        sun number = 2;
        suna number;
        sun a = "hello ";
        sun b = "world";
        suna a+b;
        agar number >= 10 { suna "kuch toh hai" } magar { suna "fuck off!" }
    "#;

    assert_output(source, "2\nhello world\nfuck off!\n");
}

#[test]
fn integer_arithmetic_is_exact() {
    assert_output("suna 1 + 2 * 3", "7\n");
    assert_output("suna 10 - 4 - 3", "3\n");
    assert_output("suna 2 * 3 % 4", "2\n");
    assert_output("suna 9223372036854775806 + 1", "9223372036854775807\n");
    assert_output("suna -9223372036854775807 - 1", "-9223372036854775808\n");
    assert_output("suna 4611686018427387904 * -2", "-9223372036854775808\n");
}

#[test]
fn division_by_zero_is_reported_not_fatal() {
    assert_output("suna 1 / 0; suna 2",
                  "Error at line 1, col 8: Division by zero\n2\n");
    assert_output("suna 7 % 0", "Error at line 1, col 8: Division by zero\n");
}

#[test]
fn overflow_is_reported_not_fatal() {
    assert_diagnostic("suna 9223372036854775807 * 2",
                      "Integer overflow while trying to compute result");
    assert_diagnostic("suna -9223372036854775808 / -1",
                      "Integer overflow while trying to compute result");
}

#[test]
fn rebinding_replaces_the_value() {
    assert_output("sun x = 5; suna x; sun x = 6; suna x;", "5\n6\n");
    assert_output("sun x = 5; sun x = \"five\"; suna x", "five\n");
}

#[test]
fn failed_assignment_keeps_previous_binding() {
    assert_output("sun x = 1; sun x = y; suna x",
                  "Error at line 1, col 20: Undefined variable y\n1\n");
}

#[test]
fn text_concatenation_keeps_order() {
    assert_output(r#"suna "a" + "b""#, "ab\n");
    assert_output(r#"suna "b" + "a""#, "ba\n");
    assert_output(r#"suna "" + "" + "x""#, "x\n");
}

#[test]
fn comparisons_print_zero_or_one() {
    for (source, expected) in [("suna 1 < 2", "1\n"),
                               ("suna 2 < 1", "0\n"),
                               ("suna 2 <= 2", "1\n"),
                               ("suna 3 >= 4", "0\n"),
                               ("suna 5 > -5", "1\n"),
                               ("suna 5 == 5", "1\n"),
                               ("suna 5 != 5", "0\n"),
                               ("suna 1 + 1 == 2", "1\n")]
    {
        assert_output(source, expected);
    }
}

#[test]
fn mixed_and_unsupported_operands_are_rejected() {
    assert_diagnostic(r#"suna 1 + "a""#, "Invalid operation + between 1 and a");
    assert_diagnostic(r#"suna "a" * 2"#, "Invalid operation * between a and 2");
    assert_diagnostic(r#"suna "a" == "a""#, "Invalid operation == between a and a");
    assert_diagnostic(r#"suna "a" < "b""#, "Invalid operation < between a and b");
}

#[test]
fn undefined_variable_does_not_stop_the_run() {
    assert_output("suna undefined_name; suna 1",
                  "Error at line 1, col 6: Undefined variable undefined_name\n1\n");
}

#[test]
fn first_failing_operand_wins() {
    assert_output("suna a + b", "Error at line 1, col 6: Undefined variable a\n");
}

#[test]
fn truthiness_selects_the_branch() {
    for (condition, expected) in [("1", "yes\n"),
                                  ("-1", "yes\n"),
                                  ("0", "no\n"),
                                  (r#""x""#, "yes\n"),
                                  (r#""""#, "no\n"),
                                  ("2 > 3", "no\n")]
    {
        let source = format!(r#"agar {condition} {{ suna "yes" }} magar {{ suna "no" }}"#);
        assert_output(&source, expected);
    }
}

#[test]
fn conditional_without_magar_may_do_nothing() {
    assert_output("agar 0 { suna 1 } suna 2", "2\n");
}

#[test]
fn nested_blocks_share_the_environment() {
    let source = "
        sun x = 1
        agar x {
            sun x = x + 1
            agar x == 2 { sun y = 10 }
        }
        suna x + y
    ";

    assert_output(source, "12\n");
}

#[test]
fn failed_condition_skips_both_branches() {
    assert_output("agar nope { suna 1 } magar { suna 2 } suna 3",
                  "Error at line 1, col 6: Undefined variable nope\n3\n");
}

#[test]
fn parse_diagnostics_come_before_output() {
    assert_output("suna 1\nsuna 2 +\nsuna 3",
                  "Error at line 3, col 1: Expected number, string, or identifier, got SUNA\n\
                   Error at line 3, col 6: Invalid statement, got INT\n\
                   1\n");
}

#[test]
fn comments_are_ignored() {
    assert_output("// nothing here\nsuna 1 // one\n// suna 2\nsuna 3", "1\n3\n");
}

#[test]
fn interpreter_state_persists_between_programs() {
    let mut interpreter = Interpreter::new();
    let mut out = Vec::new();

    let (first, _) = parse("sun greeting = \"namaste\"");
    interpreter.interpret(&first, &mut out).unwrap();
    let (second, _) = parse("suna greeting");
    interpreter.interpret(&second, &mut out).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "namaste\n");
    assert_eq!(interpreter.environment().get("greeting"),
               Some(&Value::from("namaste")));
}

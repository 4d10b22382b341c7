use std::fs::{self};

use infixcalc::{
    Evaluator,
    error::{ErrorKind, EvalError, RuntimeError, SyntaxError},
    evaluate,
    operator::Symbol,
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for line in extract_example_lines(&content) {
            count += 1;
            let (expression, expected) =
                line.rsplit_once(" => ")
                    .unwrap_or_else(|| panic!("Malformed example in {path:?}: {line}"));
            let expected = expected.trim();

            match (evaluate(expression), expected.parse::<i64>()) {
                (Ok(value), Ok(want)) => {
                    assert_eq!(value, want, "{expression:?} in {path:?}");
                },
                (Err(e), Err(_)) => {
                    assert_eq!(format!("{:?}", e.kind()), expected, "{expression:?} in {path:?}");
                },
                (got, _) => panic!("{expression:?} in {path:?} gave {got:?}, expected {expected}"),
            }
        }
    }

    assert!(count > 0, "No examples found in book/src");
}

fn extract_example_lines(content: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut inside = false;

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```infixcalc") {
            inside = true;
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            continue;
        }
        if inside && !line.trim().is_empty() {
            lines.push(line.to_string());
        }
    }

    lines
}

fn assert_value(src: &str, expected: i64) {
    match evaluate(src) {
        Ok(value) => assert_eq!(value, expected, "{src:?}"),
        Err(e) => panic!("{src:?} failed: {e}"),
    }
}

fn assert_kind(src: &str, kind: ErrorKind) {
    match evaluate(src) {
        Ok(value) => panic!("{src:?} evaluated to {value} but was expected to fail"),
        Err(e) => assert_eq!(e.kind(), kind, "{src:?}: {e}"),
    }
}

#[test]
fn documented_examples() {
    assert_value("1+2*3", 7);
    assert_value("2+2*2*3", 14);
    assert_value("1==2", 0);
    assert_value("1+3 > 2", 1);
    assert_value("(4>=4) && 0", 0);
    assert_value("(1+2)*3", 9);
}

#[test]
fn stacked_prefix_signs() {
    // ++(+2) - 5 * 9
    assert_value("+++2-5*(3^2)", -42);
    assert_value("1+-1", 0);
    assert_value("- - 3", 3);
    assert_value("!(1 < 2)", 0);
}

#[test]
fn matches_ordinary_integer_arithmetic() {
    let cases: [(&str, i64); 8] = [("1 + 2 - 3 + 4", 1 + 2 - 3 + 4),
                                   ("8 / 3 * 3", 8 / 3 * 3),
                                   ("8 * 3 / 3", 8 * 3 / 3),
                                   ("(7 - 2) * (3 + 4) / 5", (7 - 2) * (3 + 4) / 5),
                                   ("100 - 3 * (4 + 5 * (6 - 1))", 100 - 3 * (4 + 5 * (6 - 1))),
                                   ("((((9))))", 9),
                                   ("1 - 2 * 3 - 4 / 2", 1 - 2 * 3 - 4 / 2),
                                   ("12 / (2 + 2) / 3", 12 / (2 + 2) / 3)];
    for (src, expected) in cases {
        assert_value(src, expected);
    }
}

#[test]
fn comparison_and_logic_precedence() {
    assert_value("1 < 2 == 1", 1);
    assert_value("0 || 1 && 0", 0);
    assert_value("1 || 0 && 0", 1);
    assert_value("2 + 2 == 4 && 3 != 3", 0);
    assert_value("5 >= 5 || 1/1", 1);
}

#[test]
fn division_by_zero_for_any_left_operand() {
    for left in ["0", "1", "-7", "(2*3)", "999999"] {
        assert_kind(&format!("{left} / 0"), ErrorKind::DivisionByZero);
        assert_kind(&format!("{left} % 0"), ErrorKind::DivisionByZero);
    }
}

#[test]
fn division_by_zero_offset_trails_operator() {
    assert_eq!(evaluate("10 / 0"),
               Err(EvalError::Runtime(RuntimeError::DivisionByZero { offset: 6 })));
    assert_eq!(evaluate("(4 % 0) + 1"),
               Err(EvalError::Runtime(RuntimeError::DivisionByZero { offset: 6 })));
}

#[test]
fn syntax_error_kinds() {
    assert_kind("", ErrorKind::EmptyInput);
    assert_kind(")1", ErrorKind::LeadingCloseParen);
    assert_kind("*1", ErrorKind::LeadingBinaryOperator);
    assert_kind("1 1", ErrorKind::DuplicateOperand);
    assert_kind("1**1", ErrorKind::DuplicateOperator);
    assert_kind("(1+2", ErrorKind::UnmatchedParenthesis);
    assert_kind("1 + a", ErrorKind::InvalidCharacter);
}

#[test]
fn syntax_errors_carry_offsets() {
    assert_eq!(evaluate("12 + 3 4"),
               Err(EvalError::Syntax(SyntaxError::DuplicateOperand { offset: 7 })));
    assert_eq!(evaluate("1 + / 2"),
               Err(EvalError::Syntax(SyntaxError::DuplicateOperator { operator: Symbol::Slash,
                                                                      offset:   4, })));
    assert_eq!(evaluate("(1))").unwrap_err().offset(), Some(3));
    assert_eq!(evaluate("((1)").unwrap_err().offset(), None);
}

#[test]
fn syntax_errors_win_over_division_by_zero() {
    assert_kind("1/0 2", ErrorKind::DuplicateOperand);
}

#[test]
fn error_messages() {
    assert_eq!(evaluate("").unwrap_err().to_string(), "Error: Empty expression.");
    assert_eq!(evaluate("1 1").unwrap_err().to_string(),
               "Error at char 2: Two operands in a row.");
    assert_eq!(evaluate("1/0").unwrap_err().to_string(),
               "Error at char 3: Division by zero.");
}

#[test]
fn repeated_calls_are_independent() {
    let evaluator = Evaluator;
    for src in ["2^5 - 1", "1 1", "3 / 0", "(1"] {
        assert_eq!(evaluate(src), evaluate(src));
        assert_eq!(evaluator.eval(src), evaluate(src));
    }
}

#[test]
fn whitespace_only_evaluates_to_zero() {
    assert_value(" \t ", 0);
    assert_value("()", 0);
}

#[test]
fn test_script_file() {
    let script = fs::read_to_string("tests/example.calc").expect("missing file");
    for line in script.lines().filter(|l| !l.trim().is_empty()) {
        if let Err(e) = evaluate(line) {
            panic!("Line {line:?} failed: {e}");
        }
    }
}

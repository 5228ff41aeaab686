use super::*;
use cla_ir::Keyword;
use pretty_assertions::assert_eq;

#[test]
fn test_report_line_keeps_plain_messages() {
    assert_eq!(
        unknown_command("frobnicate").report_line(),
        "Unknown command: frobnicate"
    );
    assert_eq!(unknown_operator("<>").report_line(), "Unknown operator: <>");
    let usage = EvalError::from(ParseError::Usage {
        keyword: Keyword::While,
    });
    assert_eq!(
        usage.report_line(),
        "Usage: while <variable> <operator> <value>"
    );
}

#[test]
fn test_report_line_prefixes_errors() {
    assert_eq!(
        file_not_found("missing.cla").report_line(),
        "Error: File 'missing.cla' not found."
    );
    assert_eq!(
        undefined_variable("x").report_line(),
        "Error: variable 'x' is not declared"
    );
}

#[test]
fn test_file_kind_parse_error_maps_to_file_kind() {
    let err = EvalError::from(ParseError::FileKind {
        keyword: Keyword::Open,
        path: "a.txt".to_string(),
    });
    assert_eq!(err, file_kind("a.txt"));
    assert_eq!(err.code(), ErrorCode::E7001);
}

#[test]
fn test_import_cycle_lists_chain() {
    let err = import_cycle(
        ["a.cla".to_string(), "b.cla".to_string()],
        "a.cla".to_string(),
    );
    assert_eq!(
        err.to_string(),
        "circular import detected: a.cla -> b.cla -> a.cla"
    );
    assert_eq!(err.code(), ErrorCode::E7003);
}

#[test]
fn test_coercion_messages_name_the_variable() {
    let err = mixed_comparison("x", &Value::Int(3), &Value::text("abc"));
    assert_eq!(
        err.to_string(),
        "type mismatch for 'x': cannot compare integer '3' with text 'abc'"
    );
    let err = ordering_on_text("name", CompareOp::Gt);
    assert_eq!(
        err.to_string(),
        "type mismatch for 'name': '>' is only defined on integers"
    );
    assert_eq!(err.code(), ErrorCode::E6002);
}

#[test]
fn test_codes_by_layer() {
    assert!(unknown_command("x").code().is_command_error());
    assert!(undefined_variable("x").code().is_eval_error());
    assert!(loop_budget_exceeded("x", 10).code().is_eval_error());
    assert!(EvalError::Cancelled.code().is_eval_error());
    assert!(include_depth_exceeded("a.cla", 4).code().is_loader_error());
    let io = std::io::Error::new(std::io::ErrorKind::InvalidData, "bad utf-8");
    assert_eq!(io_error("a.cla", &io).code(), ErrorCode::E7005);
}

#[test]
fn test_only_cancelled_is_cancellation() {
    assert!(EvalError::Cancelled.is_cancellation());
    assert!(!integer_underflow("x").is_cancellation());
    assert!(!input_closed("x").is_cancellation());
}

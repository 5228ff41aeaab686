use pretty_assertions::assert_eq;

use cla_eval::{ErrorCode, SessionConfig};

use super::*;

fn vars<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
    move |name| {
        pairs
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| (*value).to_string())
    }
}

#[test]
fn env_defaults_when_unset() {
    let config = config_from_vars(vars(&[])).unwrap();
    assert_eq!(config, SessionConfig::default());
}

#[test]
fn env_loop_limit() {
    let config = config_from_vars(vars(&[(LOOP_LIMIT_VAR, "10")])).unwrap();
    assert_eq!(config.max_loop_iterations, Some(10));

    let config = config_from_vars(vars(&[(LOOP_LIMIT_VAR, "None")])).unwrap();
    assert_eq!(config.max_loop_iterations, None);

    let err = config_from_vars(vars(&[(LOOP_LIMIT_VAR, "-1")])).unwrap_err();
    assert_eq!(
        err,
        EnvConfigError::LoopLimit {
            var: LOOP_LIMIT_VAR,
            value: "-1".to_string()
        }
    );
}

#[test]
fn env_echo_flag() {
    let config = config_from_vars(vars(&[(ECHO_VAR, "off")])).unwrap();
    assert!(!config.echo_lines);
    let config = config_from_vars(vars(&[(ECHO_VAR, " TRUE ")])).unwrap();
    assert!(config.echo_lines);
    assert!(config_from_vars(vars(&[(ECHO_VAR, "maybe")])).is_err());
}

#[test]
fn check_source_reports_line_numbers() {
    let source = "# header\nnew x 1\n\nfrob x\nif x ~ 1\nwhile x\nopen a.txt\np fine\n";
    let problems = check_source(source);
    let summary: Vec<(usize, ErrorCode)> = problems
        .iter()
        .map(|problem| (problem.line, problem.error.code()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (4, ErrorCode::E1003),
            (5, ErrorCode::E1004),
            (6, ErrorCode::E1001),
            (7, ErrorCode::E7001),
        ]
    );
    assert_eq!(problems[0].to_string(), "line 4: [E1003] Unknown command: frob");
}

#[test]
fn check_source_accepts_clean_script() {
    assert!(check_source("new x 3\nwhile x > 0\np $x\nimport lib.cla\n").is_empty());
}

#[test]
fn check_file_missing() {
    assert!(!check_file("definitely/not/here.cla"));
}

#[test]
fn run_file_reports_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.cla");
    std::fs::write(&path, "bogus\n").unwrap();
    let out = run_file(path.to_str().unwrap(), SessionConfig::quiet());
    assert_eq!(out.error().map(cla_eval::EvalError::code), Some(ErrorCode::E1003));
}

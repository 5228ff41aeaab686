use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_usage_message_names_command() {
    let err = ParseError::Usage {
        keyword: Keyword::New,
    };
    assert_eq!(err.to_string(), "Usage: new <variable_name> <value>");
    assert_eq!(err.keyword(), Keyword::New);
}

#[test]
fn test_extra_arguments_message() {
    let err = ParseError::ExtraArguments {
        keyword: Keyword::Input,
        extra: "b c".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "`i` takes a single variable name, found extra input: b c"
    );
}

#[test]
fn test_file_kind_message() {
    let err = ParseError::FileKind {
        keyword: Keyword::Import,
        path: "notes.txt".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "File must have a .cla extension: 'notes.txt'"
    );
    assert_eq!(err.keyword(), Keyword::Import);
}

use super::*;

#[test]
fn test_error_code_display() {
    assert_eq!(ErrorCode::E1001.to_string(), "E1001");
    assert_eq!(ErrorCode::E7003.as_str(), "E7003");
}

#[test]
fn test_all_variants_classified() {
    for code in ErrorCode::ALL {
        let classes = [
            code.is_command_error(),
            code.is_eval_error(),
            code.is_loader_error(),
        ];
        assert_eq!(
            classes.iter().filter(|c| **c).count(),
            1,
            "{code} must belong to exactly one range"
        );
    }
}

#[test]
fn test_range_matches_first_digit() {
    for code in ErrorCode::ALL {
        let first = code.as_str().as_bytes()[1];
        match first {
            b'1' => assert!(code.is_command_error(), "{code}"),
            b'6' => assert!(code.is_eval_error(), "{code}"),
            b'7' => assert!(code.is_loader_error(), "{code}"),
            _ => panic!("unexpected range for {code}"),
        }
    }
}

#[test]
fn test_codes_are_unique() {
    let mut seen: Vec<&str> = ErrorCode::ALL.iter().map(ErrorCode::as_str).collect();
    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen.len(), ErrorCode::ALL.len());
}

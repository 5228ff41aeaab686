use super::*;

#[test]
fn scripted_input_replays_in_order_then_ends() {
    let handler = scripted_input(["first", "second"]);
    assert_eq!(handler.read_line().unwrap(), Some("first".to_string()));
    assert_eq!(handler.read_line().unwrap(), Some("second".to_string()));
    assert_eq!(handler.read_line().unwrap(), None);
}

#[test]
fn scripted_input_preserves_blank_lines() {
    let handler = ScriptedInputHandler::new(["", "  padded  "]);
    assert_eq!(handler.read_line(), Some(String::new()));
    assert_eq!(handler.read_line(), Some("  padded  ".to_string()));
    assert_eq!(handler.read_line(), None);
}

#[test]
fn closed_input_is_always_exhausted() {
    let handler = closed_input();
    assert_eq!(handler.read_line().unwrap(), None);
    assert_eq!(handler.read_line().unwrap(), None);
}

#[test]
fn line_terminators_are_stripped() {
    assert_eq!(strip_line_terminator("abc\n".to_string()), "abc");
    assert_eq!(strip_line_terminator("abc\r\n".to_string()), "abc");
    assert_eq!(strip_line_terminator("abc".to_string()), "abc");
    assert_eq!(strip_line_terminator("a b \n".to_string()), "a b ");
}

//! Integration tests for CharBuffer

use sundry_text::CharBuffer;

fn trimmed<B: CharBuffer>(buffer: &mut B, pattern: &str) -> bool {
    buffer.trim_end_str(pattern)
}

#[test]
fn trim_end_str_on_both_buffers() {
    let mut s = String::from("abcxyxy");
    assert!(trimmed(&mut s, "xy"));
    assert_eq!(s, "abc");
    assert!(!trimmed(&mut s, "xy"));
    assert_eq!(s, "abc");

    let mut v: Vec<char> = "abcxyxy".chars().collect();
    assert!(trimmed(&mut v, "xy"));
    assert_eq!(v.as_char_view(), ['a', 'b', 'c']);
}

#[test]
fn trailing_separator_cleanup() {
    let mut csv = String::from("a,b,c,,,  \n");
    csv.trim_end_whitespace().trim_end_char(Some(','));
    assert_eq!(csv, "a,b,c");
}

#[test]
fn whitespace_patterns_trim_any_whitespace() {
    let mut s = String::from("done\r\n\t ");
    assert!(s.trim_end_str("\n"));
    assert_eq!(s.as_char_view(), "done");
}

#[test]
fn empty_pattern_leaves_buffer_alone() {
    let mut v: Vec<char> = "keep ".chars().collect();
    assert!(!v.trim_end_str(""));
    assert_eq!(v.len(), 5);
}

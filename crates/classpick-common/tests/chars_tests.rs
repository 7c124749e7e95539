use super::*;

#[test]
fn test_quotes() {
    assert!(is_quote(b'\''));
    assert!(is_quote(b'"'));
    assert!(is_quote(b'`'));
    assert!(!is_quote(b'('));

    assert!(is_key_quote(b'"'));
    assert!(!is_key_quote(b'`'));
}

#[test]
fn test_identifier_chars() {
    for ch in ['a', 'Z', '0', '_', '$', 'é'] {
        assert!(is_identifier_char(ch), "{ch:?} should be an identifier char");
    }
    for ch in ['(', '.', ' ', '-', ':'] {
        assert!(!is_identifier_char(ch), "{ch:?} should not be an identifier char");
    }
}

#[test]
fn test_skip_whitespace_back() {
    let text = b"cls  \n\t(";
    assert_eq!(skip_whitespace_back(text, 7, 0), 3);
    // Never below the floor
    assert_eq!(skip_whitespace_back(text, 7, 5), 5);
    // Nothing to skip
    assert_eq!(skip_whitespace_back(text, 3, 0), 3);
}

#[test]
fn test_identifier_start_back() {
    let text = "foo.$cn_2(";
    assert_eq!(identifier_start_back(text, 9, 0), 4);
    assert_eq!(&text[4..9], "$cn_2");
}

#[test]
fn test_identifier_start_back_respects_floor() {
    let text = "classnames(";
    assert_eq!(identifier_start_back(text, 10, 5), 5);
}

#[test]
fn test_identifier_start_back_non_ascii() {
    let text = "x = été(";
    let end = text.find('(').unwrap();
    let start = identifier_start_back(text, end, 0);
    assert_eq!(&text[start..end], "été");
}

#[test]
fn test_identifier_start_back_without_identifier() {
    let text = "= (";
    assert_eq!(identifier_start_back(text, 2, 0), 2);
}

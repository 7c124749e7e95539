use super::*;

fn names(list: &[&str]) -> NameSet {
    NameSet::new(list.iter().copied())
}

fn locate<'a>(text: &'a str, cursor: usize, allowed: &[&str]) -> Option<CallSite<'a>> {
    locate_call(text, cursor, &names(allowed), Lookback::default())
}

#[test]
fn test_simple_call() {
    let text = "foo(bar, baz)";
    let cursor = text.find("bar").unwrap() + 1;
    let call = locate(text, cursor, &["foo"]).expect("cursor is inside foo()");
    assert_eq!(call.callee, "foo");
    assert_eq!(call.args_start, text.find('(').unwrap() + 1);
    assert_eq!(call.close_paren, text.len() - 1);
    assert_eq!(call.args_content, "bar, baz");
}

#[test]
fn test_innermost_call_wins() {
    let text = "outer(inner(arg1), other)";
    let cursor = text.find("arg1").unwrap() + 2;
    let call = locate(text, cursor, &["outer", "inner"]).unwrap();
    assert_eq!(call.callee, "inner");
    assert_eq!(call.args_content, "arg1");
}

#[test]
fn test_outer_call_when_inner_not_allowed() {
    let text = "cn(foo('x'), 'y')";
    let cursor = text.find('x').unwrap();
    let call = locate(text, cursor, &["cn"]).unwrap();
    assert_eq!(call.callee, "cn");
    assert_eq!(call.args_content, "foo('x'), 'y'");
}

#[test]
fn test_outer_call_when_cursor_after_inner_call() {
    let text = "outer(inner(arg1), other)";
    let cursor = text.find("other").unwrap() + 2;
    let call = locate(text, cursor, &["outer", "inner"]).unwrap();
    assert_eq!(call.callee, "outer");
}

#[test]
fn test_call_not_allowed() {
    let text = "foo(a)";
    let cursor = text.find('a').unwrap() + 1;
    assert_eq!(locate(text, cursor, &["bar"]), None);
}

#[test]
fn test_cursor_before_open_paren() {
    let text = "cn('a')";
    assert_eq!(locate(text, 2, &["cn"]), None);
}

#[test]
fn test_cursor_right_after_open_paren() {
    let text = "cn('a')";
    let call = locate(text, 3, &["cn"]).unwrap();
    assert_eq!(call.args_start, 3);
}

#[test]
fn test_cursor_at_close_paren_is_inside() {
    let text = "cn('a')";
    let call = locate(text, text.len() - 1, &["cn"]).unwrap();
    assert_eq!(call.callee, "cn");
}

#[test]
fn test_cursor_after_close_paren() {
    let text = "cn('a') + x";
    assert_eq!(locate(text, text.len(), &["cn"]), None);
}

#[test]
fn test_whitespace_between_name_and_paren() {
    let text = "clsx  \n ('a b')";
    let cursor = text.find('b').unwrap();
    let call = locate(text, cursor, &["clsx"]).unwrap();
    assert_eq!(call.callee, "clsx");
}

#[test]
fn test_multi_line_arguments() {
    let text = "cn(\n  'px-2',\n  isActive && 'bg-red',\n)";
    let cursor = text.find("bg-red").unwrap() + 3;
    let call = locate(text, cursor, &["cn"]).unwrap();
    assert_eq!(call.callee, "cn");
    assert!(call.args_content.contains("isActive && 'bg-red'"));
}

#[test]
fn test_member_call_uses_last_identifier() {
    let text = "utils.cn('a')";
    let cursor = text.find('a').unwrap();
    let call = locate(text, cursor, &["cn"]).unwrap();
    assert_eq!(call.callee, "cn");
}

#[test]
fn test_name_must_match_exactly() {
    let text = "mycn('a')";
    let cursor = text.find('a').unwrap();
    assert_eq!(locate(text, cursor, &["cn"]), None);
}

#[test]
fn test_unbalanced_parens_are_not_found() {
    let text = "cn('text-red";
    assert_eq!(locate(text, text.len(), &["cn"]), None);
}

#[test]
fn test_unbalanced_inner_falls_back_to_nothing_when_outer_unclosed() {
    let text = "cn(x, foo(";
    assert_eq!(locate(text, text.len(), &["cn", "foo"]), None);
}

#[test]
fn test_grouping_paren_inside_string() {
    let text = "cn('b-(1 solid) p-2')";
    let cursor = text.find("p-2").unwrap();
    let call = locate(text, cursor, &["cn"]).unwrap();
    assert_eq!(call.args_content, "'b-(1 solid) p-2'");
}

#[test]
fn test_call_outside_lookback_window() {
    let padding = " ".repeat(50);
    let text = format!("cn('a{padding}b')");
    let cursor = text.find('b').unwrap();

    let narrow = locate_call(&text, cursor, &names(&["cn"]), Lookback(10));
    assert_eq!(narrow, None);

    let wide = locate_call(&text, cursor, &names(&["cn"]), Lookback(100));
    assert_eq!(wide.map(|call| call.callee), Some("cn"));
}

#[test]
fn test_cursor_past_end() {
    assert_eq!(locate("cn('a')", 99, &["cn"]), None);
}

#[test]
fn test_empty_allow_set() {
    let text = "cn('a')";
    assert_eq!(locate(text, 4, &[]), None);
}

#[test]
fn test_non_ascii_arguments() {
    let text = "cn('ünï', 'x')";
    let cursor = text.find('x').unwrap();
    let call = locate(text, cursor, &["cn"]).unwrap();
    assert_eq!(call.args_content, "'ünï', 'x'");
}

#[test]
fn test_find_matching_paren() {
    let bytes = b"a(b(c)d)e)";
    assert_eq!(find_matching_paren(bytes, 2), Some(7));
    assert_eq!(find_matching_paren(b"(x", 1), None);
}

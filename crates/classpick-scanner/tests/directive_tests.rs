use super::*;

fn default_names() -> DirectiveNames {
    DirectiveNames::new(["--at-apply", "--uno-apply", "--uno"])
}

#[test]
fn test_simple_directive() {
    let text = ".foo { --uno: text-blue; }";
    let cursor = text.find("text-blue").unwrap() + 2;
    let names = DirectiveNames::new(["--uno"]);
    let directive = locate_directive(text, cursor, &names).expect("cursor is inside the value");

    assert_eq!(directive.name, "--uno");
    assert_eq!(directive.region.content.trim(), "text-blue");
    assert_eq!(directive.region.start, text.find("--uno").unwrap() + "--uno".len() + 1);
    assert!(directive.region.start <= cursor);
    assert!(directive.region.end >= cursor);
    assert_eq!(directive.region.end, text.find(';').unwrap());
}

#[test]
fn test_content_aligns_with_source() {
    let text = ".a { --uno:   p-2 m-1 ; }";
    let cursor = text.find("m-1").unwrap();
    let names = default_names();
    let directive = locate_directive(text, cursor, &names).unwrap();
    let region = &directive.region;
    assert_eq!(region.content, "p-2 m-1 ");
    assert_eq!(&text[region.content_start()..region.end], region.content);
}

#[test]
fn test_longer_name_matches() {
    let text = ".a { --uno-apply: flex; }";
    let cursor = text.find("flex").unwrap() + 1;
    let names = default_names();
    let directive = locate_directive(text, cursor, &names).unwrap();
    assert_eq!(directive.name, "--uno-apply");
    assert_eq!(directive.region.content, "flex");
}

#[test]
fn test_nearest_preceding_directive_wins() {
    let text = ".a { --uno: p-2; --at-apply: m-1 hover:m-2; }";
    let cursor = text.find("hover").unwrap() + 3;
    let names = default_names();
    let directive = locate_directive(text, cursor, &names).unwrap();
    assert_eq!(directive.name, "--at-apply");
    assert_eq!(directive.region.content, "m-1 hover:m-2");
}

#[test]
fn test_first_directive_when_cursor_inside_it() {
    let text = ".a { --uno: p-2; --at-apply: m-1; }";
    let cursor = text.find("p-2").unwrap() + 1;
    let names = default_names();
    let directive = locate_directive(text, cursor, &names).unwrap();
    assert_eq!(directive.name, "--uno");
    assert_eq!(directive.region.content, "p-2");
}

#[test]
fn test_multi_line_value_is_flattened() {
    let text = ".a {\n  --uno: px-4\n    py-2;\n}";
    let cursor = text.find("py-2").unwrap() + 2;
    let names = default_names();
    let directive = locate_directive(text, cursor, &names).unwrap();
    assert_eq!(directive.region.content, "px-4     py-2");
    assert_eq!(
        directive.region.end - directive.region.content_start(),
        directive.region.content.len()
    );
}

#[test]
fn test_crlf_value_keeps_offsets() {
    let text = "--uno: a\r\nb;";
    let cursor = text.find('b').unwrap();
    let names = default_names();
    let directive = locate_directive(text, cursor, &names).unwrap();
    assert_eq!(directive.region.content, "a  b");
    assert_eq!(directive.region.content_start() + 3, cursor);
}

#[test]
fn test_whitespace_around_colon() {
    let text = "--uno\n  :\n  text-red;";
    let cursor = text.find("red").unwrap();
    let names = default_names();
    let directive = locate_directive(text, cursor, &names).unwrap();
    assert_eq!(directive.region.content, "text-red");
}

#[test]
fn test_empty_value_after_whitespace() {
    let text = ".a { --uno: ; }";
    let cursor = text.find(';').unwrap();
    let names = default_names();
    let directive = locate_directive(text, cursor, &names).unwrap();
    assert_eq!(directive.region.content, " ");
    assert_eq!(directive.region.end, cursor);
}

#[test]
fn test_empty_value_without_whitespace() {
    let text = ".a { --uno:; }";
    let cursor = text.find(';').unwrap();
    assert_eq!(locate_directive(text, cursor, &default_names()), None);
}

#[test]
fn test_missing_semicolon() {
    let text = ".a { --uno: text-re";
    assert_eq!(locate_directive(text, text.len(), &default_names()), None);
}

#[test]
fn test_cursor_after_semicolon() {
    let text = ".a { --uno: p-2; color: red; }";
    let cursor = text.find("red").unwrap();
    assert_eq!(locate_directive(text, cursor, &default_names()), None);
}

#[test]
fn test_cursor_before_any_directive() {
    let text = ".a { color: red; --uno: p-2; }";
    let cursor = text.find("red").unwrap();
    assert_eq!(locate_directive(text, cursor, &default_names()), None);
}

#[test]
fn test_unknown_property_is_ignored() {
    let text = ".a { --other: p-2; }";
    let cursor = text.find("p-2").unwrap();
    assert_eq!(locate_directive(text, cursor, &default_names()), None);
}

#[test]
fn test_name_without_colon_is_skipped() {
    let text = "var(--uno) --uno: flex;";
    let cursor = text.find("flex").unwrap();
    let names = default_names();
    let directive = locate_directive(text, cursor, &names).unwrap();
    assert_eq!(directive.region.content, "flex");
}

#[test]
fn test_no_names() {
    let text = "--uno: flex;";
    assert_eq!(locate_directive(text, 8, &DirectiveNames::new(Vec::<String>::new())), None);
}

#[test]
fn test_region_outlives_name_set() {
    let text = String::from(".a { --uno: gap-2; }");
    let cursor = text.find("gap").unwrap() + 1;
    let region = {
        let names = DirectiveNames::new(["--uno"]);
        locate_directive(&text, cursor, &names).map(|directive| directive.region)
    };
    assert_eq!(region.unwrap().content, "gap-2");
}

#[test]
fn test_long_tail_after_directive() {
    let text = format!(".x {{ --uno: text-blue; }} {}", "--uno: a ".repeat(40_000));
    let cursor = text.find("blue").unwrap();
    let names = default_names();
    let directive = locate_directive(&text, cursor, &names).unwrap();
    assert_eq!(directive.name, "--uno");
    assert_eq!(directive.region.content, "text-blue");
}

#[test]
fn test_many_unterminated_directives_before_cursor() {
    let text = format!("{}--uno: text-bl", "--uno: a ".repeat(40_000));
    assert_eq!(locate_directive(&text, text.len(), &default_names()), None);

    let terminated = format!("{text};");
    let names = default_names();
    let directive = locate_directive(&terminated, text.len(), &names).unwrap();
    assert_eq!(directive.region.start, "--uno:".len());
    assert_eq!(directive.region.end, text.len());
}

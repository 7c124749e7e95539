use super::*;

#[test]
fn test_line_map_simple() {
    let source = "line1\nline2\nline3";
    let map = LineMap::build(source);

    assert_eq!(map.line_count(), 3);

    assert_eq!(map.offset_to_position(0, source), Position::new(0, 0));
    assert_eq!(map.offset_to_position(4, source), Position::new(0, 4));
    assert_eq!(map.offset_to_position(6, source), Position::new(1, 0));
    assert_eq!(map.offset_to_position(12, source), Position::new(2, 0));
}

#[test]
fn test_line_map_windows_line_endings() {
    let source = "line1\r\nline2\r\nline3";
    let map = LineMap::build(source);

    assert_eq!(map.line_count(), 3);
    assert_eq!(map.offset_to_position(7, source), Position::new(1, 0));
    assert_eq!(map.position_to_offset(Position::new(2, 2), source), Some(16));
}

#[test]
fn test_position_to_offset_roundtrip() {
    let source = "const a = cn(\n  'px-2 py-1',\n)";
    let map = LineMap::build(source);
    let offset = source.find("py-1").unwrap();

    let position = map.offset_to_position(offset, source);
    assert_eq!(position, Position::new(1, 8));
    assert_eq!(map.position_to_offset(position, source), Some(offset));
}

#[test]
fn test_columns_count_characters() {
    let source = "// ünø\ncn('x')";
    let map = LineMap::build(source);
    // Column 4 on line 0 sits after "// ü"
    assert_eq!(map.position_to_offset(Position::new(0, 4), source), Some(5));
    assert_eq!(map.offset_to_position(5, source), Position::new(0, 4));
}

#[test]
fn test_column_past_line_end_is_clamped() {
    let source = "ab\ncd";
    let map = LineMap::build(source);
    assert_eq!(map.position_to_offset(Position::new(0, 40), source), Some(2));
}

#[test]
fn test_line_past_end_is_none() {
    let source = "ab\ncd";
    let map = LineMap::build(source);
    assert_eq!(map.position_to_offset(Position::new(5, 0), source), None);
}

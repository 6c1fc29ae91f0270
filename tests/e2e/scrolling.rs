use crate::common::harness::EditorTestHarness;
use led::config::Config;
use led::input::keys::Key;
use led::model::cursor::Cursor;

fn numbered(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("line {i}")).collect()
}

fn harness_with(lines: &[String], width: u16, height: u16) -> EditorTestHarness {
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    let mut harness = EditorTestHarness::with_lines(width, height, &refs).unwrap();
    harness.render().unwrap();
    harness
}

#[test]
fn test_scroll_down_follows_cursor() {
    let mut harness = harness_with(&numbered(30), 20, 10);

    harness.send_key_repeat(Key::ArrowDown, 15).unwrap();
    assert_eq!(harness.cursor(), Cursor::new(0, 15));
    assert_eq!(harness.editor().viewport().rowoff, 6);
    assert_eq!(harness.get_row_text(0), "line 6");
    assert_eq!(harness.get_row_text(9), "line 15");
    assert_eq!(harness.screen_cursor_position(), (0, 9));
}

#[test]
fn test_scroll_back_up() {
    let mut harness = harness_with(&numbered(30), 20, 10);

    harness.send_key_repeat(Key::ArrowDown, 15).unwrap();
    harness.send_key_repeat(Key::ArrowUp, 10).unwrap();
    assert_eq!(harness.editor().viewport().rowoff, 5);
    assert_eq!(harness.get_row_text(0), "line 5");
    assert_eq!(harness.screen_cursor_position(), (0, 0));

    harness.send_key_repeat(Key::ArrowUp, 5).unwrap();
    assert_eq!(harness.get_row_text(0), "line 0");
}

/// Page keys move ten rows and stop at the document edges
#[test]
fn test_page_down_and_up() {
    let mut harness = harness_with(&numbered(30), 20, 10);

    harness.send_key(Key::PageDown).unwrap();
    assert_eq!(harness.cursor().cy, 10);
    assert_eq!(harness.get_row_text(0), "line 1");

    harness.send_key_repeat(Key::PageDown, 3).unwrap();
    assert_eq!(harness.cursor().cy, 29);
    assert_eq!(harness.get_row_text(9), "line 29");

    harness.send_key(Key::PageUp).unwrap();
    assert_eq!(harness.cursor().cy, 19);

    harness.send_key_repeat(Key::PageUp, 5).unwrap();
    assert_eq!(harness.cursor().cy, 0);
    assert_eq!(harness.get_row_text(0), "line 0");
}

#[test]
fn test_page_rows_are_configurable() {
    let mut config = Config::default();
    config.editor.page_scroll_rows = 4;
    let content = numbered(30).join("\n");
    let mut harness = EditorTestHarness::with_content_and_config(20, 10, &content, config).unwrap();
    harness.render().unwrap();

    harness.send_bytes(b"\x1b[6~\x1b[6~").unwrap();
    assert_eq!(harness.cursor().cy, 8);
}

#[test]
fn test_horizontal_scroll() {
    let long = "0123456789".repeat(5);
    let mut harness = harness_with(&[long, "short".to_string()], 20, 5);

    harness.send_key_repeat(Key::ArrowRight, 25).unwrap();
    assert_eq!(harness.editor().viewport().coloff, 6);
    assert!(harness.get_row_text(0).starts_with("6789012345678901234"));
    assert_eq!(harness.screen_cursor_position(), (19, 0));
    // "short" is entirely left of the window
    assert_eq!(harness.get_row_text(1), "");

    harness.send_key(Key::Home).unwrap();
    assert_eq!(harness.editor().viewport().coloff, 0);
    assert!(harness.get_row_text(0).starts_with("0123456789"));
    assert_eq!(harness.get_row_text(1), "short");
}

/// Once scrolled past the top, the fillers disappear if the document still
/// covers the window
#[test]
fn test_no_fillers_when_window_is_full() {
    let mut harness = harness_with(&numbered(12), 20, 10);
    harness.send_key_repeat(Key::ArrowDown, 11).unwrap();

    assert_eq!(harness.editor().viewport().rowoff, 2);
    harness.assert_screen_not_contains("~");
    assert_eq!(harness.get_row_text(9), "line 11");
}

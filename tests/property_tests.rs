use proptest::prelude::*;
use dpad_input::{InputEvent, InputKey, InputKind, InputWidget, KeyCursor, Mode};

mod support;
use support::recorder::Recorder;

const W: usize = 16;

fn key_strategy() -> impl Strategy<Value = InputKey> {
    prop_oneof![
        Just(InputKey::Up),
        Just(InputKey::Down),
        Just(InputKey::Left),
        Just(InputKey::Right),
        Just(InputKey::Ok),
        Just(InputKey::Back),
    ]
}

fn kind_strategy() -> impl Strategy<Value = InputKind> {
    prop_oneof![
        4 => Just(InputKind::Short),
        2 => Just(InputKind::Repeat),
        1 => Just(InputKind::Long),
        1 => Just(InputKind::Press),
        1 => Just(InputKind::Release),
    ]
}

fn event_strategy() -> impl Strategy<Value = InputEvent> {
    (key_strategy(), kind_strategy()).prop_map(|(key, kind)| InputEvent::new(key, kind))
}

// Content drawn from the command keyboard's own alphabet.
fn content_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(b"[]rxb,& 0123456789ABCDEF".to_vec()), 0..40)
}

fn check_invariants(widget: &InputWidget<'_>) {
    let snap = widget.snapshot().expect("bound");
    assert!(snap.selected_char <= snap.char_count);
    assert!(snap.char_count < snap.capacity);
    assert!(snap.first_visible_char <= snap.selected_char);
    assert!(snap.selected_char <= snap.first_visible_char + W);
    assert!(snap.first_visible_char <= snap.char_count.saturating_sub(W));
    if let Mode::Keyboard(at) = snap.mode {
        assert!(at.row < widget.layout().row_count());
        assert!(at.column < widget.layout().row_len(at.row));
    }
    let window = widget.visible_window().expect("bound");
    assert!(window.cursor_cell < W);
    assert_eq!(window.start + window.cursor_cell, snap.selected_char);
    assert_eq!(window.scroll_left, window.start > 0);
}

proptest! {
    #[test]
    fn invariants_hold_for_any_event_sequence(
        content in content_strategy(),
        extra in 1usize..24,
        events in prop::collection::vec(event_strategy(), 0..300),
    ) {
        let mut buf = vec![0u8; content.len() + extra];
        buf[..content.len()].copy_from_slice(&content);
        let recorder = Recorder::new();
        let mut widget = InputWidget::new();
        widget.bind(&mut buf, content.len(), recorder.clone()).unwrap();
        check_invariants(&widget);

        for event in events {
            let before = widget.snapshot().unwrap().char_count;
            let changes = recorder.changes();
            widget.handle_input(event);
            check_invariants(&widget);

            let after = widget.snapshot().unwrap().char_count;
            // At most one character is added or removed per event, and only
            // real edits are announced.
            prop_assert!(after.abs_diff(before) <= 1);
            prop_assert_eq!(recorder.changes() - changes, after.abs_diff(before));
        }
    }

    #[test]
    fn insert_then_backspace_round_trips(
        content in content_strategy(),
        cursor_back in 0usize..40,
        byte in prop::sample::select(b"rx0F ".to_vec()),
    ) {
        let mut buf = vec![0u8; 64];
        buf[..content.len()].copy_from_slice(&content);
        let mut widget = InputWidget::new();
        widget.bind(&mut buf, content.len(), ()).unwrap();
        for _ in 0..cursor_back {
            widget.handle_input(InputEvent::short(InputKey::Left));
        }
        let cursor = widget.snapshot().unwrap().selected_char;

        prop_assert!(widget.insert_char(byte));
        prop_assert!(widget.backspace());
        prop_assert_eq!(widget.text().unwrap(), &content[..]);
        prop_assert_eq!(widget.snapshot().unwrap().selected_char, cursor);
        check_invariants(&widget);
    }

    #[test]
    fn horizontal_moves_wrap_on_every_row(row in 0usize..3, steps in 0usize..30) {
        let mut buf = [0u8; 8];
        let mut widget = InputWidget::new();
        widget.bind(&mut buf, 0, ()).unwrap();
        widget.handle_input(InputEvent::short(InputKey::Down));
        for _ in 0..row {
            widget.handle_input(InputEvent::short(InputKey::Down));
        }
        let len = widget.layout().row_len(row);

        for _ in 0..steps {
            widget.handle_input(InputEvent::short(InputKey::Right));
        }
        prop_assert_eq!(widget.mode(), Some(Mode::Keyboard(KeyCursor { row, column: steps % len })));

        for _ in 0..steps {
            widget.handle_input(InputEvent::short(InputKey::Left));
        }
        prop_assert_eq!(widget.mode(), Some(Mode::Keyboard(KeyCursor { row, column: 0 })));
    }
}

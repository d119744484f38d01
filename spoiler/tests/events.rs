use spoiler::{ContentKey, Event, Key, LayoutResult, Rect, Spoiler, SpoilerConfig, SpoilerEvent};

fn tall_spoiler() -> Spoiler<&'static str> {
    let mut spoiler = Spoiler::with_id("post", SpoilerConfig::new("more", "less"));
    let mut layout = LayoutResult::new();
    layout.insert("post-inner".to_string(), Rect::from_size(50.0, 240.0));
    spoiler.commit(ContentKey(1), &layout);
    spoiler
}

fn click(target: &str) -> Event {
    Event::Click {
        target: Some(target.to_string()),
    }
}

fn key(target: &str, key: Key) -> Event {
    Event::Key {
        target: Some(target.to_string()),
        key,
    }
}

#[test]
fn test_click_on_control_toggles() {
    let mut spoiler = tall_spoiler();

    assert_eq!(spoiler.handle_event(&click("post-control")), Some(SpoilerEvent::Expand));
    assert!(spoiler.is_expanded());
    assert_eq!(spoiler.handle_event(&click("post-control")), Some(SpoilerEvent::Collapse));
    assert!(!spoiler.is_expanded());
}

#[test]
fn test_click_elsewhere_is_ignored() {
    let mut spoiler = tall_spoiler();

    assert_eq!(spoiler.handle_event(&click("post-content")), None);
    assert_eq!(spoiler.handle_event(&Event::Click { target: None }), None);
    assert!(!spoiler.is_expanded());
}

#[test]
fn test_activation_keys_on_focused_control() {
    let mut spoiler = tall_spoiler();

    assert_eq!(spoiler.handle_event(&key("post-control", Key::Enter)), Some(SpoilerEvent::Expand));
    assert_eq!(
        spoiler.handle_event(&key("post-control", Key::Char(' '))),
        Some(SpoilerEvent::Collapse)
    );
    assert_eq!(spoiler.handle_event(&key("post-control", Key::Char('x'))), None);
    assert_eq!(spoiler.handle_event(&key("post", Key::Enter)), None);
}

#[test]
fn test_events_ignored_without_overflow() {
    let mut spoiler = Spoiler::with_id("post", SpoilerConfig::new("more", "less"));
    let mut layout = LayoutResult::new();
    layout.insert("post-inner".to_string(), Rect::from_size(50.0, 20.0));
    spoiler.commit(ContentKey(1), &layout);

    assert_eq!(spoiler.handle_event(&click("post-control")), None);
    assert!(!spoiler.is_expanded());
}

use pretty_assertions::assert_eq;
use spanned_json_tree::parse;

const DOCUMENT: &str = r#"{
    "key1": "value1",
    "key2": {
        "nested": true
    }
}"#;

fn line_count(rendered: &str) -> usize {
    rendered.matches('\n').count()
}

#[test]
fn no_context_on_a_single_line_node() {
    let root = parse(r#"{"a": 1}"#).unwrap();

    let rendered = root.debug_context(0, 0);

    assert!(line_count(&rendered) >= 1);
    assert!(rendered.starts_with("1: {\"a\": 1}\n"));
}

#[test]
fn one_line_of_context() {
    let root = parse(DOCUMENT).unwrap();
    let nested = root.get("key2").unwrap().get("nested").unwrap();

    let rendered = nested.debug_context(1, 1);

    assert!(line_count(&rendered) >= 3);
    assert_eq!(
        rendered,
        "3:     \"key2\": {\n4:         \"nested\": true\n                   ^ start\n5:     }\n"
    );
}

#[test]
fn oversized_window_is_clamped() {
    let root = parse(DOCUMENT).unwrap();
    let value1 = root.get("key1").unwrap();

    let rendered = value1.debug_context(100, 100);

    let numbered: Vec<&str> = rendered
        .lines()
        .filter(|line| !line.trim_start().starts_with('^'))
        .collect();
    assert_eq!(numbered.len(), 6);
    assert!(numbered[0].starts_with("1: "));
    assert!(numbered[5].starts_with("6: "));
}

#[test]
fn multi_line_node_spans_its_lines() {
    let root = parse(DOCUMENT).unwrap();
    let key2 = root.get("key2").unwrap();

    let rendered = key2.debug_context(0, 0);

    assert_eq!(
        rendered,
        "3:     \"key2\": {\n             ^ start\n4:         \"nested\": true\n5:     }\n"
    );
}

#[test]
fn end_caret_shows_when_inside_the_line() {
    let root = parse(DOCUMENT).unwrap();
    let value1 = root.get("key1").unwrap();

    assert_eq!(
        value1.debug_context(0, 0),
        "2:     \"key1\": \"value1\",\n             ^ start\n                     ^ end\n"
    );
}

#[test]
fn rendering_does_not_change_the_node() {
    let root = parse(DOCUMENT).unwrap();
    let before = root.clone();

    let first = root.debug_context(2, 2);
    let second = root.debug_context(2, 2);

    assert_eq!(first, second);
    assert_eq!(root, before);
}

#[test]
fn nodes_render_from_other_threads() {
    let root = parse(DOCUMENT).unwrap();
    let expected = root.debug_context(1, 1);

    std::thread::scope(|scope| {
        let handles: Vec<_> = root
            .children
            .iter()
            .map(|key| scope.spawn(move || key.debug_context(1, 1)))
            .collect();

        for handle in handles {
            assert!(!handle.join().unwrap().is_empty());
        }
    });

    assert_eq!(root.debug_context(1, 1), expected);
}

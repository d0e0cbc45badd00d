use proptest::prelude::*;
use spanned_json_tree::{parse_partial, Node};

fn assert_ordered_spans(node: &Node) -> Result<(), TestCaseError> {
    prop_assert!(node.start <= node.end, "{} ends before it starts", node);
    prop_assert!(node.start.line >= 1 && node.start.col >= 1);

    for child in &node.children {
        assert_ordered_spans(child)?;
    }

    Ok(())
}

proptest! {
    #[test]
    fn arbitrary_input_never_panics(s in "\\PC*") {
        let parsed = parse_partial(&s);

        if let Some(node) = &parsed.node {
            let _ = node.debug_context(2, 2);
        }
    }

    #[test]
    fn spans_are_ordered(s in r#"[\[\]{}",:truefalsn0-9 \n\\.+-]{0,64}"#) {
        let parsed = parse_partial(&s);

        if let Some(node) = &parsed.node {
            assert_ordered_spans(node)?;
        }
    }

    #[test]
    fn parsing_twice_gives_equal_trees(s in r#"[\[\]{}",:truefalsn0-9 \n\\.+-]{0,64}"#) {
        prop_assert_eq!(parse_partial(&s), parse_partial(&s));
    }
}

//! Tests for RemoveTag

use rstest::rstest;

use tagtree::domain::{RewriteRules, TreeBuilder};
use tagtree::util::testing::init_test_setup;

fn build(lines: &[&str]) -> tagtree::TagTree {
    TreeBuilder::new().build(lines.iter()).unwrap()
}

// ============================================================
// Simple unwrap
// ============================================================

#[test]
fn given_paragraph_around_bold_when_removing_p_then_bold_takes_its_place() {
    init_test_setup();
    let mut tree = build(&[
        "<html>", "before", "<p>", "<b>", "x", "</b>", "</p>", "after", "</html>",
    ]);

    assert_eq!(tree.remove_tag("p"), 1);

    assert_eq!(
        tree.to_lines(),
        vec!["<html>", "before", "<b>", "x", "</b>", "after", "</html>"]
    );
}

#[test]
fn given_wrapper_with_many_children_when_removing_then_children_spliced_in_order() {
    let mut tree = build(&[
        "<html>", "<div>", "<em>", "one", "<b>", "two", "</b>", "three", "</em>", "tail",
        "</div>", "</html>",
    ]);

    assert_eq!(tree.remove_tag("em"), 1);

    assert_eq!(
        tree.to_lines(),
        vec![
            "<html>", "<div>", "one", "<b>", "two", "</b>", "three", "tail", "</div>", "</html>"
        ]
    );
}

#[test]
fn given_wrapper_as_last_child_when_removing_then_chain_ends_at_last_promoted() {
    let mut tree = build(&["<html>", "<b>", "x", "y", "</b>", "</html>"]);

    assert_eq!(tree.remove_tag("b"), 1);

    assert_eq!(tree.to_lines(), vec!["<html>", "x", "y", "</html>"]);
    assert_eq!(tree.children(tree.root()).count(), 2);
}

#[rstest]
#[case("p")]
#[case("em")]
#[case("b")]
fn given_every_simple_tag_when_removing_then_unwrapped(#[case] tag: &str) {
    let open = format!("<{tag}>");
    let close = format!("</{tag}>");
    let mut tree = build(&["<html>", &open, "text", &close, "</html>"]);

    assert_eq!(tree.remove_tag(tag), 1);

    assert_eq!(tree.to_lines(), vec!["<html>", "text", "</html>"]);
}

#[test]
fn given_directly_nested_same_tag_when_removing_then_all_levels_removed() {
    let mut tree = build(&[
        "<html>", "<p>", "<p>", "<p>", "deep", "</p>", "</p>", "</p>", "</html>",
    ]);

    assert_eq!(tree.remove_tag("p"), 3);

    assert_eq!(tree.to_lines(), vec!["<html>", "deep", "</html>"]);
}

#[test]
fn given_same_tag_inside_other_content_when_removing_then_inner_also_removed() {
    let mut tree = build(&[
        "<html>", "<b>", "<em>", "<b>", "x", "</b>", "</em>", "y", "</b>", "</html>",
    ]);

    assert_eq!(tree.remove_tag("b"), 2);

    assert_eq!(
        tree.to_lines(),
        vec!["<html>", "<em>", "x", "</em>", "y", "</html>"]
    );
}

#[test]
fn given_text_equal_to_tag_when_removing_then_text_is_kept() {
    let mut tree = build(&["<html>", "b", "</html>"]);

    assert_eq!(tree.remove_tag("b"), 0);

    assert_eq!(tree.to_lines(), vec!["<html>", "b", "</html>"]);
}

// ============================================================
// List unwrap
// ============================================================

#[test]
fn given_unordered_list_when_removing_ul_then_items_become_paragraphs() {
    let mut tree = build(&[
        "<html>", "<ul>", "<li>", "a", "</li>", "<li>", "b", "</li>", "</ul>", "</html>",
    ]);

    assert_eq!(tree.remove_tag("ul"), 1);

    assert_eq!(
        tree.to_lines(),
        vec!["<html>", "<p>", "a", "</p>", "<p>", "b", "</p>", "</html>"]
    );
}

#[test]
fn given_ordered_list_between_siblings_when_removing_ol_then_position_preserved() {
    let mut tree = build(&[
        "<html>", "<body>", "intro", "<ol>", "<li>", "one", "</li>", "<li>", "two", "</li>",
        "<li>", "three", "</li>", "</ol>", "outro", "</body>", "</html>",
    ]);

    assert_eq!(tree.remove_tag("ol"), 1);

    assert_eq!(
        tree.to_lines(),
        vec![
            "<html>", "<body>", "intro", "<p>", "one", "</p>", "<p>", "two", "</p>", "<p>",
            "three", "</p>", "outro", "</body>", "</html>"
        ]
    );
}

#[test]
fn given_list_with_single_item_when_removing_then_one_paragraph() {
    let mut tree = build(&["<html>", "<ul>", "<li>", "only", "</li>", "</ul>", "x", "</html>"]);

    assert_eq!(tree.remove_tag("ul"), 1);

    assert_eq!(
        tree.to_lines(),
        vec!["<html>", "<p>", "only", "</p>", "x", "</html>"]
    );
}

#[test]
fn given_nested_list_in_item_when_removing_then_both_lists_flattened() {
    let mut tree = build(&[
        "<html>", "<ul>", "<li>", "<ul>", "<li>", "inner", "</li>", "</ul>", "</li>", "</ul>",
        "</html>",
    ]);

    assert_eq!(tree.remove_tag("ul"), 2);

    assert_eq!(
        tree.to_lines(),
        vec!["<html>", "<p>", "<p>", "inner", "</p>", "</p>", "</html>"]
    );
}

#[test]
fn given_list_directly_in_list_when_removing_then_inner_becomes_paragraph() {
    let mut tree = build(&[
        "<html>", "<ul>", "<ul>", "<li>", "x", "</li>", "</ul>", "</ul>", "</html>",
    ]);

    assert_eq!(tree.remove_tag("ul"), 1);

    assert_eq!(
        tree.to_lines(),
        vec!["<html>", "<p>", "<li>", "x", "</li>", "</p>", "</html>"]
    );
}

// ============================================================
// Rejection and configured rules
// ============================================================

#[rstest]
#[case("table")]
#[case("li")]
#[case("")]
fn given_unsupported_tag_when_removing_then_noop(#[case] tag: &str) {
    let mut tree = build(&[
        "<html>", "<table>", "<tr>", "<li>", "x", "</li>", "</tr>", "</table>", "</html>",
    ]);
    let before = tree.to_lines();

    assert_eq!(tree.remove_tag(tag), 0);

    assert_eq!(tree.to_lines(), before);
}

#[test]
fn given_custom_rules_when_removing_then_rules_are_used() {
    let mut tree = build(&[
        "<html>", "<dl>", "<dt>", "term", "</dt>", "</dl>", "<i>", "it", "</i>", "</html>",
    ]);
    let rules = RewriteRules {
        unwrap_tags: vec!["i".into()],
        list_tags: vec!["dl".into()],
        list_item_label: "para".into(),
        ..RewriteRules::default()
    };

    assert_eq!(tree.remove_tag_with("dl", &rules), 1);
    assert_eq!(tree.remove_tag_with("i", &rules), 1);
    assert_eq!(tree.remove_tag_with("p", &rules), 0);

    assert_eq!(
        tree.to_lines(),
        vec!["<html>", "<para>", "term", "</para>", "it", "</html>"]
    );
}

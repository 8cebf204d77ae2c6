//! Index building integration tests: shape detection, normalization and
//! lifecycle of the index pair.

use trellis_tests::prelude::*;

fn key(id: i64) -> NodeKey {
    NodeKey::Int(id)
}

#[test]
fn test_flat_and_nested_builds_are_equivalent() {
    let mut from_flat = Tree::new();
    from_flat.load(small_tree());

    let mut from_nested = Tree::new();
    from_nested.load(small_tree_nested());

    assert_eq!(from_flat.content(), from_nested.content());
    assert_eq!(from_flat.relation(), from_nested.relation());
}

#[test]
fn test_root_children_follow_input_order() {
    let mut tree = Tree::new();
    tree.load(region_tree());

    assert_eq!(tree.children(&NodeKey::Root), Some(&[key(1), key(2)][..]));
    assert_eq!(
        tree.children(&key(1)),
        Some(
            &[
                key(3),
                key(4),
                key(5),
                key(6),
                key(7),
                key(8),
                key(9),
                key(10)
            ][..]
        )
    );
    assert_eq!(tree.parent(&key(1)), Some(&NodeKey::Root));
    assert_eq!(tree.parent(&key(22)), Some(&key(18)));
}

#[test]
fn test_content_excludes_relational_fields() {
    let mut tree = Tree::new();
    tree.load(region_tree());

    let content = tree.node(&key(18)).expect("node 18 has content");
    assert_eq!(content.get("text"), Some(&Value::String("Fairbank".into())));
    assert!(!content.contains_key("id"));
    assert!(!content.contains_key("pid"));
}

#[test]
fn test_no_root_entry_before_load() {
    let tree = Tree::new();
    assert!(!tree.contains(&NodeKey::Root));
    assert!(tree.relation().is_empty());
}

#[test]
fn test_key_adaptation() {
    let mut tree = Tree::with_keys(KeyMap::new("uuid", "parentId", "items"));
    tree.load(vec![
        attrs! { "uuid" => 1, "name" => "Domestic" },
        attrs! { "uuid" => 2, "name" => "Overseas", "parentId" => 1 },
        attrs! { "uuid" => 3, "name" => "Atlantic", "parentId" => 2 },
        attrs! { "uuid" => 4, "name" => "Pacific", "parentId" => 2 },
    ]);

    assert_eq!(tree.children(&NodeKey::Root), Some(&[key(1)][..]));
    assert_eq!(tree.parent(&key(2)), Some(&key(1)));
    assert_eq!(tree.children(&key(2)), Some(&[key(3), key(4)][..]));
    let content = tree.node(&key(3)).expect("node 3 has content");
    assert_eq!(content.get("name"), Some(&Value::String("Atlantic".into())));
}

#[test]
fn test_key_adaptation_nested() {
    let mut tree = Tree::with_keys(KeyMap::new("uuid", "parentId", "items"));
    tree.load(vec![attrs! {
        "uuid" => 1,
        "items" => vec![attrs! { "uuid" => 2 }, attrs! { "uuid" => 3 }],
    }]);

    assert_eq!(tree.children(&key(1)), Some(&[key(2), key(3)][..]));
}

#[test]
fn test_clear_index_discards_everything() {
    let mut tree = Tree::new();
    tree.load(region_tree());
    tree.clear_index();

    assert!(tree.relation().is_empty());
    assert!(tree.content().is_empty());
    assert!(tree.node(&key(1)).is_none());
}

#[test]
fn test_load_discards_the_previous_index() {
    let mut tree = Tree::new();
    tree.load(region_tree());
    tree.load(small_tree());

    assert_eq!(tree.node_count(), 4);
    assert!(!tree.contains(&key(26)));
    assert_eq!(tree.children(&NodeKey::Root), Some(&[key(1)][..]));
}

#[test]
fn test_string_and_integer_keys_coexist() {
    let mut tree = Tree::new();
    tree.load(vec![
        attrs! { "id" => "branch" },
        attrs! { "id" => 7, "pid" => "branch" },
    ]);

    assert_eq!(tree.parent(&key(7)), Some(&NodeKey::from("branch")));
    assert_eq!(
        tree.children(&NodeKey::from("branch")),
        Some(&[key(7)][..])
    );
}

#[test]
fn test_build_index_is_pure() {
    let mut tree = Tree::new();
    tree.load(small_tree());

    let built = tree.build_index(vec![attrs! { "id" => 99 }]);
    assert!(built.relation.contains(&key(99)));
    assert!(!tree.contains(&key(99)));
}

#![cfg(feature = "trie")]
//! Unit tests for the trie.

use arbors::trie::{Trie, TrieNode};
use rstest::rstest;

// =============================================================================
// Word Tests
// =============================================================================

#[rstest]
fn test_add_and_trace_words() {
    let mut trie = Trie::new();
    trie.add_word("cat");
    trie.add_word("car");
    trie.add_word("cart");

    assert!(trie.does_word_exist("cat"));
    assert!(trie.does_word_exist("car"));
    assert!(trie.does_word_exist("cart"));
    // Prefixes trace a path too.
    assert!(trie.does_word_exist("ca"));
    assert!(!trie.does_word_exist("cow"));
    assert!(!trie.does_word_exist("carts"));
}

#[rstest]
fn test_suggest_next_characters() {
    let mut trie = Trie::new();
    trie.add_word("cat");
    trie.add_word("car");
    trie.add_word("cold");

    assert_eq!(trie.suggest_next_characters("ca"), Some(vec!['r', 't']));
    assert_eq!(trie.suggest_next_characters("c"), Some(vec!['a', 'o']));
    assert_eq!(trie.suggest_next_characters("cat"), Some(vec![]));
    assert_eq!(trie.suggest_next_characters("dog"), None);
}

#[rstest]
fn test_empty_trie() {
    let trie = Trie::new();
    assert!(!trie.does_word_exist("anything"));
    assert_eq!(trie.suggest_next_characters("a"), None);
}

// =============================================================================
// Node Tests
// =============================================================================

#[rstest]
fn test_node_children() {
    let mut node = TrieNode::new('c', false);
    assert!(!node.has_child('a'));

    node.add_child('a', false);
    node.add_child('o', false);

    assert!(node.has_child('a'));
    assert!(node.get_child('a').is_some());
    assert!(node.get_child('x').is_none());
    assert_eq!(node.suggest_children(), vec!['a', 'o']);
}

#[rstest]
fn test_add_child_keeps_the_existing_node() {
    let mut node = TrieNode::new('c', false);
    node.add_child('a', true);
    // Re-adding does not replace the node or its completion flag.
    node.add_child('a', false);

    assert!(node.get_child('a').is_some_and(TrieNode::is_complete_word));
}

#[rstest]
fn test_node_display() {
    let mut node = TrieNode::new('c', false);
    node.add_child('a', false);
    node.add_child('o', false);
    assert_eq!(node.to_string(), "c:a,o");

    let complete = TrieNode::new('t', true);
    assert_eq!(complete.to_string(), "t*");

    let bare = TrieNode::new('x', false);
    assert_eq!(bare.to_string(), "x");
}

//! Prefix tree over words.
//!
//! [`Trie`] stores words one character per node under a `*` head node.
//! Each [`TrieNode`] keeps its children in a sorted map, so suggestion
//! order is deterministic (lexicographic), and a completion flag marking
//! whether some inserted word ends at that node.
//!
//! # Examples
//!
//! ```rust
//! use arbors::trie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.add_word("cat");
//! trie.add_word("car");
//!
//! assert!(trie.does_word_exist("ca"));
//! assert_eq!(trie.suggest_next_characters("ca"), Some(vec!['r', 't']));
//! assert_eq!(trie.suggest_next_characters("dog"), None);
//! ```

use std::collections::BTreeMap;
use std::fmt;

/// Character used for the head node of every trie.
const HEAD_CHARACTER: char = '*';

// =============================================================================
// Trie Node
// =============================================================================

/// A single character node inside a [`Trie`].
pub struct TrieNode {
    character: char,
    is_complete_word: bool,
    children: BTreeMap<char, TrieNode>,
}

impl TrieNode {
    /// Creates a node for `character`.
    #[must_use]
    pub fn new(character: char, is_complete_word: bool) -> Self {
        Self {
            character,
            is_complete_word,
            children: BTreeMap::new(),
        }
    }

    /// Returns the child node for `character`, if present.
    #[must_use]
    pub fn get_child(&self, character: char) -> Option<&Self> {
        self.children.get(&character)
    }

    /// Returns the child node for `character`, creating it if absent.
    pub fn add_child(&mut self, character: char, is_complete_word: bool) -> &mut Self {
        self.children
            .entry(character)
            .or_insert_with(|| Self::new(character, is_complete_word))
    }

    /// Returns `true` if a child exists for `character`.
    #[must_use]
    pub fn has_child(&self, character: char) -> bool {
        self.children.contains_key(&character)
    }

    /// Returns the characters of this node's children, in sorted order.
    #[must_use]
    pub fn suggest_children(&self) -> Vec<char> {
        self.children.keys().copied().collect()
    }

    /// Returns `true` if an inserted word ends at this node.
    #[must_use]
    pub fn is_complete_word(&self) -> bool {
        self.is_complete_word
    }
}

impl fmt::Display for TrieNode {
    /// Renders as `character`, a `*` completion marker, and the children
    /// characters: e.g. `c:a,o` or `t*`.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.character)?;
        if self.is_complete_word {
            formatter.write_str("*")?;
        }
        if !self.children.is_empty() {
            let children: Vec<String> = self
                .children
                .keys()
                .map(|character| character.to_string())
                .collect();
            write!(formatter, ":{}", children.join(","))?;
        }
        Ok(())
    }
}

// =============================================================================
// Trie
// =============================================================================

/// A prefix tree of words.
pub struct Trie {
    head: TrieNode,
}

impl Trie {
    /// Creates an empty trie.
    #[must_use]
    pub fn new() -> Self {
        Self {
            head: TrieNode::new(HEAD_CHARACTER, false),
        }
    }

    /// Adds `word` to the trie, marking its last character as a completed
    /// word.
    pub fn add_word(&mut self, word: &str) {
        let characters: Vec<char> = word.chars().collect();
        let mut current = &mut self.head;
        for (index, character) in characters.iter().enumerate() {
            let is_complete = index == characters.len() - 1;
            current = current.add_child(*character, is_complete);
        }
    }

    /// Returns the possible next characters after the prefix `word`, or
    /// `None` when the prefix is not in the trie.
    #[must_use]
    pub fn suggest_next_characters(&self, word: &str) -> Option<Vec<char>> {
        self.last_character_node(word)
            .map(TrieNode::suggest_children)
    }

    /// Returns `true` if `word` traces a path through the trie.
    #[must_use]
    pub fn does_word_exist(&self, word: &str) -> bool {
        self.last_character_node(word).is_some()
    }

    /// Walks the trie along `word`, returning the node of its last
    /// character.
    fn last_character_node(&self, word: &str) -> Option<&TrieNode> {
        let mut current = &self.head;
        for character in word.chars() {
            current = current.get_child(character)?;
        }
        Some(current)
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

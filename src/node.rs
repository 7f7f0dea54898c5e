use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// A terminal node, carrying the output produced for every row that
/// reaches it.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Leaf<V> {
    pub value: V,
}

/// An internal node, routing rows to one of two children depending on
/// whether its condition holds.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Split<C, V> {
    pub condition: C,
    /// Child visited when the condition evaluates to true. Absent only
    /// while the tree is under construction.
    pub pos_child: Option<Box<Node<C, V>>>,
    /// Child visited when the condition evaluates to false.
    pub neg_child: Option<Box<Node<C, V>>>,
    /// Output the node would produce if it were treated as a leaf,
    /// e.g. when cutting the tree off at this depth. Never consulted
    /// for routing.
    pub value: Option<V>,
}

/// One node of a decision tree, generic over the condition payload `C`
/// and the output payload `V`.
///
/// Fields are plain and mutation is unchecked; whether a tree is
/// complete is checked separately with [`Node::is_complete`].
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[non_exhaustive]
pub enum Node<C, V> {
    Leaf(Leaf<V>),
    Split(Split<C, V>),
}

impl<V> Leaf<V> {
    pub fn new(value: V) -> Self {
        Leaf { value }
    }
}

impl<C, V> Split<C, V> {
    /// Create a split with no children and no cached value.
    pub fn new(condition: C) -> Self {
        Split {
            condition,
            pos_child: None,
            neg_child: None,
            value: None,
        }
    }

    pub fn with_children(condition: C, pos_child: Node<C, V>, neg_child: Node<C, V>) -> Self {
        Split {
            condition,
            pos_child: Some(Box::new(pos_child)),
            neg_child: Some(Box::new(neg_child)),
            value: None,
        }
    }
}

impl<C, V> Node<C, V> {
    pub fn leaf(value: V) -> Self {
        Node::Leaf(Leaf::new(value))
    }

    pub fn split(condition: C) -> Self {
        Node::Split(Split::new(condition))
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    pub fn as_leaf(&self) -> Option<&Leaf<V>> {
        match self {
            Node::Leaf(leaf) => Some(leaf),
            _ => None,
        }
    }

    pub fn as_split(&self) -> Option<&Split<C, V>> {
        match self {
            Node::Split(split) => Some(split),
            _ => None,
        }
    }

    /// Whether every split below (and including) this node has both
    /// children present. Routing through an incomplete tree would dead
    /// end, so callers assembling trees incrementally should check this
    /// before handing the tree off.
    pub fn is_complete(&self) -> bool {
        match self {
            Node::Leaf(_) => true,
            Node::Split(split) => match (&split.pos_child, &split.neg_child) {
                (Some(pos), Some(neg)) => pos.is_complete() && neg.is_complete(),
                _ => false,
            },
        }
    }
}

impl<C: Display, V: Display> Display for Node<C, V> {
    /// Renders the node and, recursively, its children. An absent child
    /// slot prints as `none` so an incomplete tree is unambiguous.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Node::Leaf(leaf) => write!(f, "Leaf(value={})", leaf.value),
            Node::Split(split) => {
                write!(f, "Split(condition={}", split.condition)?;
                match &split.pos_child {
                    Some(child) => write!(f, ", pos={}", child)?,
                    None => write!(f, ", pos=none")?,
                }
                match &split.neg_child {
                    Some(child) => write!(f, ", neg={}", child)?,
                    None => write!(f, ", neg=none")?,
                }
                if let Some(value) = &split.value {
                    write!(f, ", value={}", value)?;
                }
                write!(f, ")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_tree() -> Node<String, f64> {
        Node::Split(Split::with_children(
            "col0 <= 5".to_string(),
            Node::leaf(0.9),
            Node::leaf(0.1),
        ))
    }

    #[test]
    fn test_display_complete_split() {
        let node = small_tree();
        assert_eq!(
            node.to_string(),
            "Split(condition=col0 <= 5, pos=Leaf(value=0.9), neg=Leaf(value=0.1))"
        );
    }

    #[test]
    fn test_display_marks_absent_children() {
        let mut split = Split::new("col0 <= 5".to_string());
        split.neg_child = Some(Box::new(Node::leaf(0.1)));
        let node: Node<String, f64> = Node::Split(split);
        assert_eq!(
            node.to_string(),
            "Split(condition=col0 <= 5, pos=none, neg=Leaf(value=0.1))"
        );
    }

    #[test]
    fn test_display_cached_value_only_when_present() {
        let mut split = Split::new("col1 <= 2".to_string());
        split.value = Some(0.5);
        let node: Node<String, f64> = Node::Split(split);
        assert_eq!(node.to_string(), "Split(condition=col1 <= 2, pos=none, neg=none, value=0.5)");
    }

    #[test]
    fn test_is_complete() {
        let complete = small_tree();
        assert!(complete.is_complete());

        let leaf: Node<String, f64> = Node::leaf(1.0);
        assert!(leaf.is_complete());

        let mut split = Split::new("col0 <= 5".to_string());
        split.pos_child = Some(Box::new(Node::leaf(0.9)));
        let half_built: Node<String, f64> = Node::Split(split);
        assert!(!half_built.is_complete());

        // Incompleteness below the root is found too.
        let nested = Node::Split(Split::with_children(
            "col0 <= 5".to_string(),
            Node::split("col1 <= 2".to_string()),
            Node::leaf(0.1),
        ));
        assert!(!nested.is_complete());
    }

    #[test]
    fn test_mutation_is_plain_field_access() {
        let mut node = small_tree();
        if let Node::Split(split) = &mut node {
            split.condition = "col3 <= 1".to_string();
            split.pos_child = None;
            split.value = Some(0.42);
        }
        let split = node.as_split().unwrap();
        assert_eq!(split.condition, "col3 <= 1");
        assert!(split.pos_child.is_none());
        assert_eq!(split.value, Some(0.42));
    }

    #[test]
    fn test_serde_round_trip() {
        let node = small_tree();
        let serialized = serde_json::to_string(&node).unwrap();
        let deserialized: Node<String, f64> = serde_json::from_str(&serialized).unwrap();
        assert_eq!(node, deserialized);
    }
}

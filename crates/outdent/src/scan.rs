use std::cmp::Ordering;

use plate_dom::{DomTree, SelectionRange, compare_nodes, range_leaves};

use crate::config::BlockSet;

pub fn candidate_blocks<T>(tree: &T, range: &SelectionRange<T::Node>, blocks: &BlockSet) -> Vec<T::Node>
where
    T: DomTree + ?Sized,
{
    let mut found: Vec<T::Node> = Vec::new();
    for leaf in range_leaves(tree, range) {
        let Some(block) = tree.closest(leaf, |t, n| blocks.is_block(t, n), true) else {
            continue;
        };
        log::debug!("closest block element for {leaf:?}: {block:?}");
        let in_quote = tree
            .parent(block)
            .is_some_and(|parent| blocks.is_blockquote(tree, parent));
        if in_quote && !found.contains(&block) {
            found.push(block);
        }
    }
    sort_in_document_order(tree, &mut found);
    found
}

pub fn enclosing_blockquotes<T>(
    tree: &T,
    range: &SelectionRange<T::Node>,
    blocks: &BlockSet,
) -> Vec<T::Node>
where
    T: DomTree + ?Sized,
{
    let mut found: Vec<T::Node> = Vec::new();
    for leaf in range_leaves(tree, range) {
        if let Some(quote) = tree.closest(leaf, |t, n| blocks.is_blockquote(t, n), true) {
            if !found.contains(&quote) {
                found.push(quote);
            }
        }
    }
    let nested: Vec<T::Node> = found.clone();
    found.retain(|&quote| {
        !nested
            .iter()
            .any(|&other| other != quote && tree.contains(quote, other))
    });
    sort_in_document_order(tree, &mut found);
    found
}

/// Whether every leaf of `range` sits inside some blockquote.
///
/// A range that covers no leaf is judged by its start container.
pub fn range_in_blockquote<T>(tree: &T, range: &SelectionRange<T::Node>, blocks: &BlockSet) -> bool
where
    T: DomTree + ?Sized,
{
    let in_quote = |node: T::Node| {
        tree.closest(node, |t, n| blocks.is_blockquote(t, n), true)
            .is_some()
    };

    let mut visited = false;
    for leaf in range_leaves(tree, range) {
        visited = true;
        if !in_quote(leaf) {
            return false;
        }
    }
    visited || in_quote(range.start().container)
}

fn sort_in_document_order<T: DomTree + ?Sized>(tree: &T, nodes: &mut [T::Node]) {
    nodes.sort_by(|&a, &b| compare_nodes(tree, a, b).unwrap_or(Ordering::Equal));
}

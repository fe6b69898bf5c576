use plate_dom::{DomError, DomResult, DomTree, SelectionRange};

use crate::config::BlockSet;
use crate::scan::{candidate_blocks, enclosing_blockquotes};

/// How an outdent finds its targets and moves one of them.
///
/// `targets` runs before any mutation and returns nodes in document order;
/// the command then calls `relocate` on them last-to-first.
pub trait OutdentPolicy {
    fn id(&self) -> &'static str;

    fn targets<T>(&self, tree: &T, range: &SelectionRange<T::Node>, blocks: &BlockSet) -> Vec<T::Node>
    where
        T: DomTree + ?Sized;

    fn container<T>(&self, tree: &T, target: T::Node) -> Option<T::Node>
    where
        T: DomTree + ?Sized;

    /// Returns whether the tree changed.
    fn relocate<T>(&self, tree: &mut T, target: T::Node, blocks: &BlockSet) -> DomResult<bool>
    where
        T: DomTree + ?Sized;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromoteBlocks {
    split: bool,
}

impl PromoteBlocks {
    pub fn new() -> Self {
        Self { split: true }
    }

    pub fn edges_only() -> Self {
        Self { split: false }
    }
}

impl Default for PromoteBlocks {
    fn default() -> Self {
        Self::new()
    }
}

impl OutdentPolicy for PromoteBlocks {
    fn id(&self) -> &'static str {
        if self.split {
            "outdent.promote_blocks"
        } else {
            "outdent.promote_edge_blocks"
        }
    }

    fn targets<T>(&self, tree: &T, range: &SelectionRange<T::Node>, blocks: &BlockSet) -> Vec<T::Node>
    where
        T: DomTree + ?Sized,
    {
        candidate_blocks(tree, range, blocks)
    }

    fn container<T>(&self, tree: &T, target: T::Node) -> Option<T::Node>
    where
        T: DomTree + ?Sized,
    {
        tree.parent(target)
    }

    fn relocate<T>(&self, tree: &mut T, block: T::Node, blocks: &BlockSet) -> DomResult<bool>
    where
        T: DomTree + ?Sized,
    {
        let quote = tree.parent(block).ok_or(DomError::Detached)?;
        if !blocks.is_blockquote(&*tree, quote) {
            log::debug!("{block:?} is no longer inside a blockquote; skipping");
            return Ok(false);
        }

        if tree.next_sibling(block).is_none() {
            tree.insert_after(block, quote)?;
        } else if tree.previous_sibling(block).is_none() {
            let parent = tree.parent(quote).ok_or(DomError::Detached)?;
            tree.insert_before(parent, block, Some(quote))?;
        } else if self.split {
            let duplicate = tree.clone_shallow(quote)?;
            while let Some(next) = tree.next_sibling(block) {
                tree.append_child(duplicate, next)?;
            }
            tree.insert_after(duplicate, quote)?;
            tree.insert_after(block, quote)?;
        } else {
            log::debug!("{block:?} has siblings on both sides; leaving it in place");
            return Ok(false);
        }

        remove_if_empty(tree, quote)?;
        Ok(true)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnwrapBlockquote;

impl OutdentPolicy for UnwrapBlockquote {
    fn id(&self) -> &'static str {
        "outdent.unwrap_blockquote"
    }

    fn targets<T>(&self, tree: &T, range: &SelectionRange<T::Node>, blocks: &BlockSet) -> Vec<T::Node>
    where
        T: DomTree + ?Sized,
    {
        enclosing_blockquotes(tree, range, blocks)
    }

    fn container<T>(&self, _tree: &T, target: T::Node) -> Option<T::Node>
    where
        T: DomTree + ?Sized,
    {
        Some(target)
    }

    fn relocate<T>(&self, tree: &mut T, quote: T::Node, _blocks: &BlockSet) -> DomResult<bool>
    where
        T: DomTree + ?Sized,
    {
        let parent = tree.parent(quote).ok_or(DomError::Detached)?;
        while let Some(child) = tree.first_child(quote) {
            tree.insert_before(parent, child, Some(quote))?;
        }
        log::debug!("removing unwrapped {quote:?}");
        tree.remove_child(parent, quote)?;
        Ok(true)
    }
}

fn remove_if_empty<T: DomTree + ?Sized>(tree: &mut T, quote: T::Node) -> DomResult<()> {
    if tree.first_child(quote).is_some() {
        return Ok(());
    }
    let Some(parent) = tree.parent(quote) else {
        return Ok(());
    };
    log::debug!("removing empty {:?} element", tree.tag_name(quote));
    tree.remove_child(parent, quote)
}

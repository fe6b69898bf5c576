use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{DomError, DomResult};
use crate::range::SelectionRange;

pub trait DomTree {
    type Node: Copy + Eq + Hash + Debug;

    fn parent(&self, node: Self::Node) -> Option<Self::Node>;
    fn first_child(&self, node: Self::Node) -> Option<Self::Node>;
    fn last_child(&self, node: Self::Node) -> Option<Self::Node>;
    fn next_sibling(&self, node: Self::Node) -> Option<Self::Node>;
    fn previous_sibling(&self, node: Self::Node) -> Option<Self::Node>;

    fn is_element(&self, node: Self::Node) -> bool;
    fn is_text(&self, node: Self::Node) -> bool;
    fn tag_name(&self, node: Self::Node) -> Option<&str>;
    fn text(&self, node: Self::Node) -> Option<&str>;
    fn is_removed(&self, node: Self::Node) -> bool;

    fn clone_shallow(&mut self, node: Self::Node) -> DomResult<Self::Node>;

    fn insert_before(
        &mut self,
        parent: Self::Node,
        child: Self::Node,
        reference: Option<Self::Node>,
    ) -> DomResult<()>;

    fn remove_child(&mut self, parent: Self::Node, child: Self::Node) -> DomResult<()>;

    fn append_child(&mut self, parent: Self::Node, child: Self::Node) -> DomResult<()> {
        self.insert_before(parent, child, None)
    }

    fn insert_after(&mut self, node: Self::Node, target: Self::Node) -> DomResult<()> {
        let parent = self.parent(target).ok_or(DomError::Detached)?;
        let next = self.next_sibling(target);
        self.insert_before(parent, node, next)
    }

    fn children(&self, node: Self::Node) -> Children<'_, Self> {
        Children {
            tree: self,
            next: self.first_child(node),
        }
    }

    fn child_count(&self, node: Self::Node) -> usize {
        self.children(node).count()
    }

    fn child_at(&self, node: Self::Node, index: usize) -> Option<Self::Node> {
        self.children(node).nth(index)
    }

    fn index_of(&self, node: Self::Node) -> usize {
        let mut index = 0;
        let mut current = self.previous_sibling(node);
        while let Some(prev) = current {
            index += 1;
            current = self.previous_sibling(prev);
        }
        index
    }

    fn node_length(&self, node: Self::Node) -> usize {
        match self.text(node) {
            Some(text) => text.len(),
            None => self.child_count(node),
        }
    }

    fn ancestors(&self, node: Self::Node) -> Ancestors<'_, Self> {
        Ancestors {
            tree: self,
            next: Some(node),
        }
    }

    fn contains(&self, ancestor: Self::Node, node: Self::Node) -> bool {
        self.ancestors(node).any(|n| n == ancestor)
    }

    fn closest<F>(&self, node: Self::Node, mut predicate: F, include_self: bool) -> Option<Self::Node>
    where
        F: FnMut(&Self, Self::Node) -> bool,
    {
        let mut ancestors = self.ancestors(node);
        if !include_self {
            ancestors.next();
        }
        ancestors.find(|&n| predicate(self, n))
    }

    fn root_of(&self, node: Self::Node) -> Self::Node {
        self.ancestors(node).last().unwrap_or(node)
    }

    fn has_tag(&self, node: Self::Node, tag: &str) -> bool {
        self.tag_name(node)
            .is_some_and(|name| name.eq_ignore_ascii_case(tag))
    }
}

pub trait SelectionHost: DomTree {
    fn selection(&self) -> Option<SelectionRange<Self::Node>>;
    fn set_selection(&mut self, range: Option<SelectionRange<Self::Node>>);
}

pub struct Children<'a, T: DomTree + ?Sized> {
    tree: &'a T,
    next: Option<T::Node>,
}

impl<T: DomTree + ?Sized> Iterator for Children<'_, T> {
    type Item = T::Node;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.tree.next_sibling(current);
        Some(current)
    }
}

pub struct Ancestors<'a, T: DomTree + ?Sized> {
    tree: &'a T,
    next: Option<T::Node>,
}

impl<T: DomTree + ?Sized> Iterator for Ancestors<'_, T> {
    type Item = T::Node;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.tree.parent(current);
        Some(current)
    }
}

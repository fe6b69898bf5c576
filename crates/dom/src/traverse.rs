use std::cmp::Ordering;

use crate::range::{SelectionRange, compare_nodes};
use crate::tree::DomTree;

pub fn range_leaves<'a, T>(tree: &'a T, range: &SelectionRange<T::Node>) -> RangeLeaves<'a, T>
where
    T: DomTree + ?Sized,
{
    let Some(scope) = range.common_ancestor(tree) else {
        return RangeLeaves::empty(tree);
    };

    let start = range.start();
    if range.is_collapsed() {
        let count = tree.child_count(start.container);
        let leaf = if count == 0 {
            Some(start.container)
        } else if start.offset < count {
            tree.child_at(start.container, start.offset)
                .map(|child| first_leaf(tree, child))
        } else {
            tree.last_child(start.container)
                .map(|child| last_leaf(tree, child))
        };
        return RangeLeaves {
            tree,
            scope: Some(scope),
            next: leaf,
            last: leaf,
        };
    }

    let first = start_leaf(tree, start.container, start.offset, scope);
    let last = end_leaf(tree, range.end().container, range.end().offset, scope);
    let ordered = match (first, last) {
        (Some(first), Some(last)) => {
            compare_nodes(tree, first, last).is_some_and(|o| o != Ordering::Greater)
        }
        _ => false,
    };
    if !ordered {
        return RangeLeaves::empty(tree);
    }

    log::trace!("range leaves from {first:?} to {last:?}");
    RangeLeaves {
        tree,
        scope: Some(scope),
        next: first,
        last,
    }
}

pub struct RangeLeaves<'a, T: DomTree + ?Sized> {
    tree: &'a T,
    scope: Option<T::Node>,
    next: Option<T::Node>,
    last: Option<T::Node>,
}

impl<'a, T: DomTree + ?Sized> RangeLeaves<'a, T> {
    fn empty(tree: &'a T) -> Self {
        Self {
            tree,
            scope: None,
            next: None,
            last: None,
        }
    }
}

impl<T: DomTree + ?Sized> Iterator for RangeLeaves<'_, T> {
    type Item = T::Node;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        if Some(current) != self.last {
            self.next = self
                .scope
                .and_then(|scope| next_leaf(self.tree, current, scope));
        }
        Some(current)
    }
}

pub fn first_leaf<T: DomTree + ?Sized>(tree: &T, node: T::Node) -> T::Node {
    let mut current = node;
    while let Some(child) = tree.first_child(current) {
        current = child;
    }
    current
}

pub fn last_leaf<T: DomTree + ?Sized>(tree: &T, node: T::Node) -> T::Node {
    let mut current = node;
    while let Some(child) = tree.last_child(current) {
        current = child;
    }
    current
}

pub fn next_leaf<T: DomTree + ?Sized>(tree: &T, node: T::Node, scope: T::Node) -> Option<T::Node> {
    let mut current = node;
    loop {
        if current == scope {
            return None;
        }
        if let Some(sibling) = tree.next_sibling(current) {
            return Some(first_leaf(tree, sibling));
        }
        current = tree.parent(current)?;
    }
}

pub fn previous_leaf<T: DomTree + ?Sized>(
    tree: &T,
    node: T::Node,
    scope: T::Node,
) -> Option<T::Node> {
    let mut current = node;
    loop {
        if current == scope {
            return None;
        }
        if let Some(sibling) = tree.previous_sibling(current) {
            return Some(last_leaf(tree, sibling));
        }
        current = tree.parent(current)?;
    }
}

fn start_leaf<T: DomTree + ?Sized>(
    tree: &T,
    container: T::Node,
    offset: usize,
    scope: T::Node,
) -> Option<T::Node> {
    if tree.first_child(container).is_none() {
        return Some(container);
    }
    match tree.child_at(container, offset) {
        Some(child) => Some(first_leaf(tree, child)),
        None => next_leaf(tree, container, scope),
    }
}

fn end_leaf<T: DomTree + ?Sized>(
    tree: &T,
    container: T::Node,
    offset: usize,
    scope: T::Node,
) -> Option<T::Node> {
    if tree.first_child(container).is_none() {
        return Some(container);
    }
    match offset.checked_sub(1).and_then(|ix| tree.child_at(container, ix)) {
        Some(child) => Some(last_leaf(tree, child)),
        None => previous_leaf(tree, container, scope),
    }
}

use std::cmp::Ordering;

use crate::error::{DomError, DomResult};
use crate::tree::DomTree;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundaryPoint<N> {
    pub container: N,
    pub offset: usize,
}

impl<N> BoundaryPoint<N> {
    pub fn new(container: N, offset: usize) -> Self {
        Self { container, offset }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectionRange<N> {
    start: BoundaryPoint<N>,
    end: BoundaryPoint<N>,
}

impl<N: Copy + Eq> SelectionRange<N> {
    pub fn collapsed(container: N, offset: usize) -> Self {
        let point = BoundaryPoint::new(container, offset);
        Self {
            start: point,
            end: point,
        }
    }

    pub fn new<T>(tree: &T, start: BoundaryPoint<N>, end: BoundaryPoint<N>) -> DomResult<Self>
    where
        T: DomTree<Node = N> + ?Sized,
    {
        check_offset(tree, start)?;
        check_offset(tree, end)?;
        match compare_points(tree, start, end) {
            None => Err(DomError::InvalidState(
                "range boundaries are in different trees".into(),
            )),
            Some(Ordering::Greater) => Ok(Self {
                start: end,
                end: start,
            }),
            Some(_) => Ok(Self { start, end }),
        }
    }

    pub fn start(&self) -> BoundaryPoint<N> {
        self.start
    }

    pub fn end(&self) -> BoundaryPoint<N> {
        self.end
    }

    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    pub fn set_start<T>(&mut self, tree: &T, container: N, offset: usize) -> DomResult<()>
    where
        T: DomTree<Node = N> + ?Sized,
    {
        let point = BoundaryPoint::new(container, offset);
        check_offset(tree, point)?;
        self.start = point;
        if compare_points(tree, point, self.end) != Some(Ordering::Less) {
            self.end = point;
        }
        Ok(())
    }

    pub fn set_end<T>(&mut self, tree: &T, container: N, offset: usize) -> DomResult<()>
    where
        T: DomTree<Node = N> + ?Sized,
    {
        let point = BoundaryPoint::new(container, offset);
        check_offset(tree, point)?;
        self.end = point;
        if compare_points(tree, self.start, point) != Some(Ordering::Less) {
            self.start = point;
        }
        Ok(())
    }

    pub fn common_ancestor<T>(&self, tree: &T) -> Option<N>
    where
        T: DomTree<Node = N> + ?Sized,
    {
        let start_chain: Vec<N> = tree.ancestors(self.start.container).collect();
        tree.ancestors(self.end.container)
            .find(|node| start_chain.contains(node))
    }
}

fn check_offset<T: DomTree + ?Sized>(tree: &T, point: BoundaryPoint<T::Node>) -> DomResult<()> {
    if tree.is_removed(point.container) {
        return Err(DomError::InvalidState(
            "boundary container no longer exists".into(),
        ));
    }
    let length = tree.node_length(point.container);
    if point.offset > length {
        return Err(DomError::IndexSize {
            offset: point.offset,
            length,
        });
    }
    Ok(())
}

pub fn node_path<T: DomTree + ?Sized>(tree: &T, node: T::Node) -> (T::Node, Vec<usize>) {
    let mut path = Vec::new();
    let mut current = node;
    while let Some(parent) = tree.parent(current) {
        path.push(tree.index_of(current));
        current = parent;
    }
    path.reverse();
    (current, path)
}

pub fn compare_nodes<T: DomTree + ?Sized>(tree: &T, a: T::Node, b: T::Node) -> Option<Ordering> {
    let (root_a, path_a) = node_path(tree, a);
    let (root_b, path_b) = node_path(tree, b);
    (root_a == root_b).then(|| path_a.cmp(&path_b))
}

pub fn compare_points<T: DomTree + ?Sized>(
    tree: &T,
    a: BoundaryPoint<T::Node>,
    b: BoundaryPoint<T::Node>,
) -> Option<Ordering> {
    let (root_a, mut key_a) = node_path(tree, a.container);
    let (root_b, mut key_b) = node_path(tree, b.container);
    if root_a != root_b {
        return None;
    }
    key_a.push(a.offset);
    key_b.push(b.offset);
    Some(key_a.cmp(&key_b))
}

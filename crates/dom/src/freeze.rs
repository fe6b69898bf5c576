use crate::error::{DomError, DomResult};
use crate::range::{BoundaryPoint, SelectionRange};
use crate::tree::DomTree;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Anchor<N> {
    Leaf(N),
    Before(N),
    End(N),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct FrozenPoint<N> {
    path: Vec<usize>,
    offset: usize,
    anchor: Anchor<N>,
}

/// Mutation-independent capture of a [`SelectionRange`].
///
/// Each boundary is stored twice: as a child-index path below `reference`,
/// and as an anchor on the node the boundary touches. Thawing prefers the
/// anchor while it is still inside `reference`, so boundaries follow nodes
/// that were moved; the path is the fallback for anchors that left the
/// reference subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrozenRange<N> {
    reference: N,
    root: N,
    start: FrozenPoint<N>,
    end: FrozenPoint<N>,
}

impl<N: Copy + Eq> FrozenRange<N> {
    pub fn freeze<T>(tree: &T, range: &SelectionRange<N>, reference: N) -> DomResult<Self>
    where
        T: DomTree<Node = N> + ?Sized,
    {
        if tree.is_removed(reference) {
            return Err(DomError::InvalidState(
                "freeze reference no longer exists".into(),
            ));
        }
        Ok(Self {
            reference,
            root: tree.root_of(reference),
            start: freeze_point(tree, range.start(), reference)?,
            end: freeze_point(tree, range.end(), reference)?,
        })
    }

    pub fn reference(&self) -> N {
        self.reference
    }

    pub fn thaw<T>(&self, tree: &T) -> DomResult<SelectionRange<N>>
    where
        T: DomTree<Node = N> + ?Sized,
    {
        if tree.is_removed(self.reference) || tree.root_of(self.reference) != self.root {
            return Err(DomError::InvalidState(
                "freeze reference was detached before thaw".into(),
            ));
        }
        let start = self.thaw_point(tree, &self.start)?;
        let end = self.thaw_point(tree, &self.end)?;
        SelectionRange::new(tree, start, end)
    }

    fn thaw_point<T>(&self, tree: &T, point: &FrozenPoint<N>) -> DomResult<BoundaryPoint<N>>
    where
        T: DomTree<Node = N> + ?Sized,
    {
        let inside = |node: N| !tree.is_removed(node) && tree.contains(self.reference, node);

        match point.anchor {
            Anchor::Leaf(node) if inside(node) => {
                let offset = point.offset.min(tree.node_length(node));
                return Ok(BoundaryPoint::new(node, offset));
            }
            Anchor::Before(child) if inside(child) => {
                if let Some(parent) = tree.parent(child) {
                    return Ok(BoundaryPoint::new(parent, tree.index_of(child)));
                }
            }
            Anchor::End(container) if inside(container) => {
                return Ok(BoundaryPoint::new(container, tree.child_count(container)));
            }
            _ => {}
        }

        log::debug!("boundary anchor left the reference subtree; resolving by path");
        Ok(resolve_path(tree, self.reference, &point.path, point.offset))
    }
}

fn freeze_point<T: DomTree + ?Sized>(
    tree: &T,
    point: BoundaryPoint<T::Node>,
    reference: T::Node,
) -> DomResult<FrozenPoint<T::Node>> {
    let mut path = Vec::new();
    let mut current = point.container;
    while current != reference {
        path.push(tree.index_of(current));
        current = tree.parent(current).ok_or_else(|| {
            DomError::InvalidState("range boundary is outside the freeze reference".into())
        })?;
    }
    path.reverse();

    let anchor = if tree.first_child(point.container).is_none() {
        Anchor::Leaf(point.container)
    } else {
        match tree.child_at(point.container, point.offset) {
            Some(child) => Anchor::Before(child),
            None => Anchor::End(point.container),
        }
    };

    Ok(FrozenPoint {
        path,
        offset: point.offset,
        anchor,
    })
}

fn resolve_path<T: DomTree + ?Sized>(
    tree: &T,
    reference: T::Node,
    path: &[usize],
    offset: usize,
) -> BoundaryPoint<T::Node> {
    let mut current = reference;
    for &wanted in path {
        let count = tree.child_count(current);
        if count == 0 {
            break;
        }
        match tree.child_at(current, wanted.min(count - 1)) {
            Some(child) => current = child,
            None => break,
        }
    }
    BoundaryPoint::new(current, offset.min(tree.node_length(current)))
}

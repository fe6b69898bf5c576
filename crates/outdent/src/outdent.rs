use plate_dom::{DomError, DomTree, FrozenRange, SelectionHost, SelectionRange};
use serde_json::Value;

use crate::command::Command;
use crate::config::{BlockSet, OutdentConfig, OutdentStrategy};
use crate::error::CommandResult;
use crate::policy::{OutdentPolicy, PromoteBlocks, UnwrapBlockquote};
use crate::scan::range_in_blockquote;

pub struct OutdentCommand<'d, D: SelectionHost> {
    document: &'d mut D,
    config: OutdentConfig,
    blocks: BlockSet,
}

impl<'d, D: SelectionHost> OutdentCommand<'d, D> {
    pub fn new(document: &'d mut D) -> Self {
        Self::with_config(document, OutdentConfig::default())
    }

    pub fn with_config(document: &'d mut D, config: OutdentConfig) -> Self {
        log::debug!("created OutdentCommand with strategy {:?}", config.strategy);
        let blocks = config.block_set();
        Self {
            document,
            config,
            blocks,
        }
    }

    pub fn config(&self) -> &OutdentConfig {
        &self.config
    }

    pub fn execute_with<P: OutdentPolicy>(
        &mut self,
        policy: &P,
        range: &mut SelectionRange<D::Node>,
    ) -> CommandResult<bool> {
        let tree: &mut D = &mut *self.document;
        if !range_in_blockquote(&*tree, range, &self.blocks) {
            log::debug!("{}: selection is not entirely inside a blockquote", policy.id());
            return Ok(false);
        }
        let targets = policy.targets(&*tree, range, &self.blocks);
        if targets.is_empty() {
            log::debug!("{}: nothing to outdent", policy.id());
            return Ok(false);
        }
        log::debug!(
            "{}: need to unwrap {} block elements from parent {}",
            policy.id(),
            targets.len(),
            self.blocks.blockquote_tag()
        );

        let containers: Vec<D::Node> = targets
            .iter()
            .filter_map(|&target| policy.container(&*tree, target))
            .collect();
        let reference = freeze_reference(&*tree, range, &containers)?;
        let frozen = FrozenRange::freeze(&*tree, range, reference)?;

        let mut changed = false;
        for &target in targets.iter().rev() {
            changed |= policy.relocate(tree, target, &self.blocks)?;
        }
        if !changed {
            return Ok(false);
        }

        *range = frozen.thaw(&*tree)?;
        Ok(true)
    }
}

impl<D: SelectionHost> Command for OutdentCommand<'_, D> {
    type Host = D;

    fn document(&self) -> &D {
        &*self.document
    }

    fn document_mut(&mut self) -> &mut D {
        &mut *self.document
    }

    fn execute_range(
        &mut self,
        range: &mut SelectionRange<D::Node>,
        _value: Option<&Value>,
    ) -> CommandResult<bool> {
        match self.config.strategy {
            OutdentStrategy::PromoteBlocks => self.execute_with(&PromoteBlocks::new(), range),
            OutdentStrategy::PromoteEdgeBlocks => {
                self.execute_with(&PromoteBlocks::edges_only(), range)
            }
            OutdentStrategy::UnwrapBlockquote => self.execute_with(&UnwrapBlockquote, range),
        }
    }

    fn query_state_range(&self, range: &SelectionRange<D::Node>) -> CommandResult<bool> {
        Ok(range_in_blockquote(&*self.document, range, &self.blocks))
    }
}

fn freeze_reference<T: DomTree + ?Sized>(
    tree: &T,
    range: &SelectionRange<T::Node>,
    containers: &[T::Node],
) -> CommandResult<T::Node> {
    let mut current = range.common_ancestor(tree).ok_or_else(|| {
        DomError::InvalidState("range boundaries share no common ancestor".into())
    })?;
    while !tree.is_element(current) || containers.iter().any(|&c| tree.contains(c, current)) {
        current = tree.parent(current).ok_or_else(|| {
            DomError::InvalidState("no stable ancestor above the outdented blockquote".into())
        })?;
    }
    Ok(current)
}

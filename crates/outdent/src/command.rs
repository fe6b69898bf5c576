use plate_dom::{DomTree, SelectionHost, SelectionRange};
use serde_json::Value;

use crate::error::{CommandError, CommandResult};

pub type HostRange<H> = SelectionRange<<H as DomTree>::Node>;

pub trait Command {
    type Host: SelectionHost;

    fn document(&self) -> &Self::Host;
    fn document_mut(&mut self) -> &mut Self::Host;

    /// Runs the command on `range`, updating it in place. Returns whether
    /// the tree changed.
    fn execute_range(
        &mut self,
        range: &mut HostRange<Self::Host>,
        value: Option<&Value>,
    ) -> CommandResult<bool>;

    fn query_state_range(&self, range: &HostRange<Self::Host>) -> CommandResult<bool>;

    fn current_range(&self) -> Option<HostRange<Self::Host>> {
        self.document().selection()
    }

    fn execute(
        &mut self,
        range: Option<&mut HostRange<Self::Host>>,
        value: Option<&Value>,
    ) -> CommandResult<()> {
        if let Some(range) = range {
            self.execute_range(range, value)?;
            return Ok(());
        }

        let mut range = self.current_range().ok_or(CommandError::NoSelection)?;
        if self.execute_range(&mut range, value)? {
            self.document_mut().set_selection(Some(range));
        }
        Ok(())
    }

    fn query_enabled(&self, range: Option<&HostRange<Self::Host>>) -> bool {
        range.is_some() || self.current_range().is_some()
    }

    fn query_state(&self, range: Option<&HostRange<Self::Host>>) -> CommandResult<bool> {
        match range {
            Some(range) => self.query_state_range(range),
            None => {
                let range = self.current_range().ok_or(CommandError::NoSelection)?;
                self.query_state_range(&range)
            }
        }
    }
}

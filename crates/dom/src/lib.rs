mod document;
mod error;
mod freeze;
mod html;
mod range;
mod snapshot;
mod traverse;
mod tree;

pub use crate::document::*;
pub use crate::error::*;
pub use crate::freeze::*;
pub use crate::range::*;
pub use crate::snapshot::*;
pub use crate::traverse::*;
pub use crate::tree::*;

pub use indextree::NodeId;

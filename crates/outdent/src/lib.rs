mod command;
mod config;
mod error;
mod outdent;
mod policy;
mod scan;

pub use crate::command::*;
pub use crate::config::*;
pub use crate::error::*;
pub use crate::outdent::*;
pub use crate::policy::*;
pub use crate::scan::*;

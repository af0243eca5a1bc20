//! Version-control adapters.

mod fixed;
mod git;

pub use fixed::FixedVersionControl;
pub use git::GitCli;

//! One-shot orderings built from the roster: run orders for turn-taking and
//! balanced random groups.

pub mod groups;
pub mod run_order;

pub use groups::{partition_groups, split_balanced, GroupError, GroupPartition};
pub use run_order::{build_run_order, RunOrder};

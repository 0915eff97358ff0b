//! Aggregates - structures that own their members and guard invariants over them

mod power_groups;

pub use power_groups::{LevelBucket, PowerGroup, PowerGroups};

//! Argument handling for component dispatch.
//!
//! ```text
//! Raw args → Partition → Host parse / Component argv → ComponentRun
//! ```
//!
//! Each stage is a pure function that can be unit-tested independently.

mod env_builder;
mod partition;
mod pipeline;
mod registry;

pub use env_builder::EnvSet;
pub use partition::{partition, PartitionResult};
pub use pipeline::{build_component_run, plan_dispatch, ComponentDispatch, Dispatch};
pub use registry::{FlagDef, FlagSet};

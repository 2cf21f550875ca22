pub mod common;
pub mod stats;
pub mod walk;

pub use common::series::SeriesPair;
pub use common::walk_exception::{ErrCode, WalkError};
pub use walk::interval::Interval;
pub use walk::step_config::{StepConfig, StepMode};
pub use walk::walk::RandomWalk;

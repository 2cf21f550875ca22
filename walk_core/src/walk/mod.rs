pub mod interval;
pub mod step_config;
#[allow(clippy::module_inception)]
pub mod walk;

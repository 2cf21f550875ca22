pub mod descriptive;
pub mod normal;
pub mod partition;
pub mod regression;
pub mod sma;

pub mod series;
pub mod walk_exception;

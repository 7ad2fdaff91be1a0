pub mod slip;
pub mod summary;

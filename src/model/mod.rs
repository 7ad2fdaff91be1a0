pub mod employee;
pub mod period;
pub mod slip;

pub mod employee;
pub mod log;

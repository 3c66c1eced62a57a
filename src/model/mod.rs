pub mod daily_log;
pub mod employee;
pub mod role;

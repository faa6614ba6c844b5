pub mod add;
pub mod backup;
pub mod calendar;
pub mod config;
pub mod del;
pub mod edit;
pub mod import;
pub mod log;
pub mod summary;

pub mod config;
pub mod field;
pub mod raw_row;
pub mod reading;
pub mod records;

pub mod error;
pub mod frames;
pub mod writer;

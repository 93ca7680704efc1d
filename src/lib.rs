pub mod cli;
pub mod data;
pub mod entity;
pub mod error;

pub mod calories;
pub mod config;
pub mod error;
pub mod output;
pub mod puzzle;
pub mod scoring;
pub mod strategy;

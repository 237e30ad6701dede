pub mod algorithms;
pub mod config;
pub mod digits;
pub mod error;
pub mod grid;
pub mod pbm;
pub mod simulation;
pub mod statistics;

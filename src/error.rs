//! Error types for anttrace

use crate::grid::Position;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AntError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("window {width}x{height} has no cells")]
    EmptyWindow { width: usize, height: usize },

    #[error("window {width}x{height} is too large")]
    WindowTooLarge { width: usize, height: usize },

    #[error("start {start} must sit strictly inside the {width}x{height} window")]
    StartOutsideWindow {
        start: Position,
        width: usize,
        height: usize,
    },

    #[error("start {start} is outside the bitmap")]
    StartOutOfBounds { start: Position },

    #[error("unknown algorithm '{0}' (expected stack, reach or all)")]
    UnknownAlgorithm(String),

    #[error("malformed PBM: {0}")]
    Pbm(String),

    #[error("{left} visited {left_count} cells but {right} visited {right_count}")]
    EngineMismatch {
        left: String,
        left_count: usize,
        right: String,
        right_count: usize,
    },

    #[error("{left} and {right} visited the same number of cells but different ones")]
    BitmapMismatch { left: String, right: String },
}

pub type Result<T> = std::result::Result<T, AntError>;

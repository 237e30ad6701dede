pub mod common;
pub mod reach_fill;
pub mod stack_fill;

use crate::error::{AntError, Result};
use common::FillAlgorithm;
use reach_fill::ReachFill;
use stack_fill::StackFill;

/// Names accepted by [`by_name`], in comparison order.
pub const ALGORITHMS: [&str; 2] = ["stack", "reach"];

pub fn by_name(name: &str) -> Result<Box<dyn FillAlgorithm>> {
    match name {
        "stack" => Ok(Box::new(StackFill::new())),
        "reach" => Ok(Box::new(ReachFill::new())),
        other => Err(AntError::UnknownAlgorithm(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_algorithm_resolves() {
        for name in ALGORITHMS {
            assert_eq!(by_name(name).unwrap().name(), name);
        }
    }

    #[test]
    fn unknown_algorithm_is_rejected() {
        assert!(matches!(
            by_name("recursive"),
            Err(AntError::UnknownAlgorithm(name)) if name == "recursive"
        ));
    }
}

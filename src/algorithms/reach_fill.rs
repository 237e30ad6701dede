use crate::algorithms::common::FillAlgorithm;
use crate::error::{AntError, Result};
use crate::grid::{Bitmap, Position};
use pathfinding::prelude::bfs_reach;
use tracing::debug;

/// Flood fill built on the `pathfinding` crate's breadth-first reachability
/// iterator. Used as an independent cross-check of [`StackFill`].
///
/// [`StackFill`]: crate::algorithms::stack_fill::StackFill
#[derive(Default)]
pub struct ReachFill;

impl ReachFill {
    pub fn new() -> Self {
        ReachFill
    }
}

impl FillAlgorithm for ReachFill {
    fn name(&self) -> &'static str {
        "reach"
    }

    fn explore(
        &mut self,
        start: Position,
        is_blocked: &dyn Fn(Position) -> bool,
        bitmap: &mut Bitmap,
    ) -> Result<usize> {
        if !bitmap.contains(start) {
            return Err(AntError::StartOutOfBounds { start });
        }

        let reached: Vec<Position> = {
            let window: &Bitmap = bitmap;
            bfs_reach(start, |p: &Position| {
                p.neighbors()
                    .filter(|&next| window.contains(next) && !is_blocked(next))
                    .collect::<Vec<_>>()
            })
            .collect()
        };

        for &pos in &reached {
            bitmap.set(pos);
        }
        debug!("reach fill from {} done: {} cells", start, reached.len());
        Ok(reached.len())
    }
}

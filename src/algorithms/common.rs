use crate::error::Result;
use crate::grid::{Bitmap, Position};
use crate::statistics::FillStats;

pub trait FillAlgorithm {
    fn name(&self) -> &'static str;

    /// Visits every cell 4-connected to `start` without entering a blocked cell
    /// or leaving `bitmap`, marks each one in `bitmap` and returns how many
    /// distinct cells were visited. `start` itself is visited unconditionally.
    fn explore(
        &mut self,
        start: Position,
        is_blocked: &dyn Fn(Position) -> bool,
        bitmap: &mut Bitmap,
    ) -> Result<usize>;

    /// Work-list statistics from the last run, for engines that keep them
    fn stats(&self) -> Option<FillStats> {
        None
    }
}

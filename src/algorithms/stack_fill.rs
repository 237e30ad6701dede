use crate::algorithms::common::FillAlgorithm;
use crate::error::{AntError, Result};
use crate::grid::{Bitmap, Position};
use crate::statistics::FillStats;
use rustc_hash::FxHashSet;
use tracing::debug;

/// Non-recursive flood fill driven by an explicit LIFO work-list.
///
/// Neighbors are only checked against cells already visited, not against
/// cells still pending, so a cell can sit on the work-list more than once.
/// Popping it again is harmless: marking is idempotent and its neighbors
/// are all filtered by the visited set.
#[derive(Default)]
pub struct StackFill {
    stats: FillStats,
}

impl StackFill {
    pub fn new() -> Self {
        StackFill::default()
    }

    /// Same as [`FillAlgorithm::explore`], calling `observe(visited, pending)`
    /// after every pop with the visited-set size and work-list length.
    pub fn explore_observed<F>(
        &mut self,
        start: Position,
        is_blocked: &dyn Fn(Position) -> bool,
        bitmap: &mut Bitmap,
        mut observe: F,
    ) -> Result<usize>
    where
        F: FnMut(usize, usize),
    {
        if !bitmap.contains(start) {
            return Err(AntError::StartOutOfBounds { start });
        }

        let mut stats = FillStats::default();
        let mut visited: FxHashSet<Position> = FxHashSet::default();
        let mut frontier = vec![start];
        stats.pushes = 1;
        stats.peak_frontier = 1;

        while let Some(pos) = frontier.pop() {
            stats.pops += 1;
            if !visited.insert(pos) {
                stats.duplicate_pops += 1;
            }
            bitmap.set(pos);

            for next in pos.neighbors() {
                // Out-of-window cells count as blocked.
                if !bitmap.contains(next) || is_blocked(next) || visited.contains(&next) {
                    continue;
                }
                frontier.push(next);
                stats.pushes += 1;
            }

            stats.peak_frontier = stats.peak_frontier.max(frontier.len());
            observe(visited.len(), frontier.len());
        }

        stats.visited = visited.len();
        debug!(
            "stack fill from {} done: {} cells, {} pops ({} duplicate), peak work-list {}",
            start, stats.visited, stats.pops, stats.duplicate_pops, stats.peak_frontier
        );
        self.stats = stats;
        Ok(visited.len())
    }
}

impl FillAlgorithm for StackFill {
    fn name(&self) -> &'static str {
        "stack"
    }

    fn explore(
        &mut self,
        start: Position,
        is_blocked: &dyn Fn(Position) -> bool,
        bitmap: &mut Bitmap,
    ) -> Result<usize> {
        self.explore_observed(start, is_blocked, bitmap, |_, _| {})
    }

    fn stats(&self) -> Option<FillStats> {
        Some(self.stats.clone())
    }
}

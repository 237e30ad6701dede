use crate::grid::Position;
use std::fmt;
use std::time::Duration;

/// Work-list accounting for one stack fill.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FillStats {
    pub visited: usize,
    pub pops: usize,
    pub pushes: usize,
    /// Pops of cells that were already visited when they came off the work-list.
    pub duplicate_pops: usize,
    pub peak_frontier: usize,
}

impl fmt::Display for FillStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Cells visited: {}", self.visited)?;
        writeln!(f, "Work-list pushes: {}", self.pushes)?;
        writeln!(f, "Work-list pops: {}", self.pops)?;
        let duplicate_percentage = if self.pops > 0 {
            (self.duplicate_pops as f64 / self.pops as f64) * 100.0
        } else {
            0.0
        };
        writeln!(
            f,
            "Duplicate pops: {} ({:.1}%)",
            self.duplicate_pops, duplicate_percentage
        )?;
        writeln!(f, "Peak work-list length: {}", self.peak_frontier)?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct FillReport {
    pub algorithm: String,
    pub start: Position,
    pub threshold: u32,
    pub width: usize,
    pub height: usize,
    pub count: usize,
    pub elapsed: Duration,
    pub stats: Option<FillStats>,
}

impl FillReport {
    /// Share of the window that was reached.
    pub fn coverage(&self) -> f64 {
        let cells = self.width * self.height;
        if cells > 0 {
            self.count as f64 / cells as f64
        } else {
            0.0
        }
    }
}

impl fmt::Display for FillReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Algorithm: {}", self.algorithm)?;
        writeln!(f, "Start: {}", self.start)?;
        writeln!(f, "Threshold: {}", self.threshold)?;
        writeln!(f, "Window: {}x{}", self.width, self.height)?;
        writeln!(f, "Reachable cells: {}", self.count)?;
        writeln!(f, "Window coverage: {:.2}%", self.coverage() * 100.0)?;
        writeln!(f, "Elapsed: {:.2?}", self.elapsed)?;
        if let Some(stats) = &self.stats {
            write!(f, "{}", stats)?;
        }
        Ok(())
    }
}

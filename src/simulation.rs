use crate::algorithms::common::FillAlgorithm;
use crate::algorithms::{self, ALGORITHMS};
use crate::config::Config;
use crate::digits::DigitSumObstacle;
use crate::error::{AntError, Result};
use crate::grid::{self, Bitmap, Position};
use crate::pbm;
use crate::statistics::FillReport;
use std::time::Instant;
use tracing::{debug, info};

/// Result of one engine run: its report and the bitmap it filled.
#[derive(Debug, Clone)]
pub struct AlgorithmResult {
    pub report: FillReport,
    pub bitmap: Bitmap,
}

/// One configured run: a validated window, a start cell inside it and the
/// digit-sum obstacle predicate.
pub struct Simulation {
    config: Config,
    start: Position,
    width: usize,
    height: usize,
    obstacle: DigitSumObstacle,
}

impl Simulation {
    pub fn new(config: Config) -> Result<Self> {
        let start = Position::new(config.start_x, config.start_y);
        let (width, height) = config.window();
        validate_window(start, width, height)?;

        info!(
            "window {}x{}, start {}, threshold {}",
            width, height, start, config.threshold
        );
        Ok(Simulation {
            obstacle: DigitSumObstacle::new(config.threshold),
            config,
            start,
            width,
            height,
        })
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn window(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Runs the configured algorithm. `all` is handled by [`Self::run_all_algorithms`].
    pub fn run(&self) -> Result<AlgorithmResult> {
        let mut algorithm = algorithms::by_name(&self.config.algorithm)?;
        self.run_algorithm(algorithm.as_mut())
    }

    pub fn run_algorithm(&self, algorithm: &mut dyn FillAlgorithm) -> Result<AlgorithmResult> {
        let mut bitmap = Bitmap::new(self.width, self.height)?;
        let obstacle = self.obstacle;
        let is_blocked = move |pos: Position| obstacle.is_blocked(pos);

        let started = Instant::now();
        let count = algorithm.explore(self.start, &is_blocked, &mut bitmap)?;
        let elapsed = started.elapsed();

        let report = FillReport {
            algorithm: algorithm.name().to_string(),
            start: self.start,
            threshold: self.config.threshold,
            width: self.width,
            height: self.height,
            count,
            elapsed,
            stats: algorithm.stats(),
        };
        info!(
            "{} fill reached {} cells in {:.2?}",
            report.algorithm, count, elapsed
        );
        debug!("\n{}", report);
        Ok(AlgorithmResult { report, bitmap })
    }

    /// Runs every engine over its own bitmap and checks that they all agree.
    pub fn run_all_algorithms(&self) -> Result<Vec<AlgorithmResult>> {
        let mut results: Vec<AlgorithmResult> = Vec::new();
        for name in ALGORITHMS {
            let mut algorithm = algorithms::by_name(name)?;
            let result = self.run_algorithm(algorithm.as_mut())?;

            if let Some(first) = results.first() {
                check_agreement(first, &result)?;
            }
            results.push(result);
        }
        Ok(results)
    }

    pub fn write_image(&self, bitmap: &Bitmap) -> Result<()> {
        pbm::save_pbm(bitmap, &self.config.output)?;
        info!("wrote {}", self.config.output.display());
        Ok(())
    }
}

/// The window must fit in a bitmap and the start must sit strictly inside it,
/// one cell clear of every edge.
pub fn validate_window(start: Position, width: usize, height: usize) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(AntError::EmptyWindow { width, height });
    }
    grid::cell_count(width, height)?;
    let inside = |coord: i32, len: usize| coord >= 1 && (coord as usize) + 1 < len;
    if !inside(start.x, width) || !inside(start.y, height) {
        return Err(AntError::StartOutsideWindow {
            start,
            width,
            height,
        });
    }
    Ok(())
}

fn check_agreement(left: &AlgorithmResult, right: &AlgorithmResult) -> Result<()> {
    if left.report.count != right.report.count {
        return Err(AntError::EngineMismatch {
            left: left.report.algorithm.clone(),
            left_count: left.report.count,
            right: right.report.algorithm.clone(),
            right_count: right.report.count,
        });
    }
    if left.bitmap != right.bitmap {
        return Err(AntError::BitmapMismatch {
            left: left.report.algorithm.clone(),
            right: right.report.algorithm.clone(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn config(args: &[&str]) -> Config {
        Config::parse_from(std::iter::once("anttrace").chain(args.iter().copied()))
    }

    #[test]
    fn window_defaults_to_twice_the_start() {
        let simulation = Simulation::new(config(&["--start-x", "30", "--start-y", "40"])).unwrap();
        assert_eq!(simulation.window(), (60, 80));
        assert_eq!(simulation.start(), Position::new(30, 40));
    }

    #[test]
    fn start_on_the_edge_is_rejected() {
        for (start, width, height) in [
            (Position::new(0, 2), 5, 5),
            (Position::new(2, 4), 5, 5),
            (Position::new(-3, 2), 5, 5),
            (Position::new(1, 1), 2, 5),
        ] {
            assert!(matches!(
                validate_window(start, width, height),
                Err(AntError::StartOutsideWindow { .. })
            ));
        }
        assert!(validate_window(Position::new(1, 1), 3, 3).is_ok());
    }

    #[test]
    fn empty_window_is_rejected() {
        let result = Simulation::new(config(&["--start-x", "0"]));
        assert!(matches!(result, Err(AntError::EmptyWindow { width: 0, .. })));
    }

    #[test]
    fn oversized_window_is_rejected() {
        // width * height overflows usize
        let overflow = Simulation::new(config(&[
            "--start-x", "5", "--start-y", "5",
            "--width", "4294967296", "--height", "4294967297",
        ]));
        assert!(matches!(overflow, Err(AntError::WindowTooLarge { .. })));

        // fits in usize but is more than a bitmap may hold
        let too_many = Simulation::new(config(&[
            "--start-x", "5", "--start-y", "5",
            "--width", "100000", "--height", "100000",
        ]));
        assert!(matches!(too_many, Err(AntError::WindowTooLarge { .. })));

        // large start with the default doubled window
        let doubled = Simulation::new(config(&["--start-x", "2000000000", "--start-y", "2000000000"]));
        assert!(matches!(doubled, Err(AntError::WindowTooLarge { .. })));
    }

    #[test]
    fn open_window_is_filled() {
        // digit sums never exceed 3 + 3 inside a 4x4 window
        let simulation = Simulation::new(config(&[
            "--start-x", "1", "--start-y", "1", "--width", "4", "--height", "4",
        ]))
        .unwrap();
        let result = simulation.run().unwrap();
        assert_eq!(result.report.count, 16);
        assert_eq!(result.bitmap.visited_count(), 16);
        assert!(result.report.stats.is_some());
    }

    #[test]
    fn engines_agree_on_a_small_scenario() {
        let simulation = Simulation::new(config(&[
            "--start-x", "50", "--start-y", "50", "--threshold", "12",
        ]))
        .unwrap();
        let results = simulation.run_all_algorithms().unwrap();
        assert_eq!(results.len(), ALGORITHMS.len());
        assert_eq!(results[0].report.count, results[1].report.count);
        assert_eq!(results[0].report.algorithm, "stack");
        assert_eq!(results[1].report.algorithm, "reach");
    }

    #[test]
    fn unknown_algorithm_fails_at_run() {
        let simulation = Simulation::new(config(&["--algorithm", "spiral"])).unwrap();
        assert!(matches!(
            simulation.run(),
            Err(AntError::UnknownAlgorithm(_))
        ));
    }

    #[test]
    fn mismatched_counts_are_reported() {
        let report = |name: &str, count| FillReport {
            algorithm: name.to_string(),
            start: Position::new(1, 1),
            threshold: 25,
            width: 3,
            height: 3,
            count,
            elapsed: std::time::Duration::ZERO,
            stats: None,
        };
        let left = AlgorithmResult {
            report: report("stack", 2),
            bitmap: Bitmap::new(3, 3).unwrap(),
        };
        let right = AlgorithmResult {
            report: report("reach", 3),
            bitmap: Bitmap::new(3, 3).unwrap(),
        };
        assert!(matches!(
            check_agreement(&left, &right),
            Err(AntError::EngineMismatch { left_count: 2, right_count: 3, .. })
        ));

        let mut moved = right.clone();
        moved.report.count = 2;
        moved.bitmap.set(Position::new(0, 0));
        assert!(matches!(
            check_agreement(&left, &moved),
            Err(AntError::BitmapMismatch { .. })
        ));
    }

    #[test]
    fn image_lands_at_configured_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.pbm");
        let simulation = Simulation::new(config(&[
            "--start-x", "5", "--start-y", "5", "--output", path.to_str().unwrap(),
        ]))
        .unwrap();
        let result = simulation.run().unwrap();
        simulation.write_image(&result.bitmap).unwrap();
        assert_eq!(pbm::load_pbm(&path).unwrap(), result.bitmap);
    }
}

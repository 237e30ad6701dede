use crate::grid::Position;

/// Sum of the decimal digits of `n`. Negative values use their magnitude.
pub fn digit_sum(n: i32) -> u32 {
    let mut n = n.unsigned_abs();
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Obstacle predicate: a cell is blocked when the digit sums of its two
/// coordinates add up to more than `threshold`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitSumObstacle {
    pub threshold: u32,
}

impl DigitSumObstacle {
    pub fn new(threshold: u32) -> Self {
        DigitSumObstacle { threshold }
    }

    pub fn is_blocked(&self, pos: Position) -> bool {
        digit_sum(pos.x) + digit_sum(pos.y) > self.threshold
    }
}

use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div};

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scores {
    pub tapping_workload_distribution: f64,
    pub hand_alternation: f64,
    pub finger_alternation: f64,
    pub avoidance_of_big_steps: f64,
    pub hit_direction: f64,
}

/// Bumped whenever [`BASELINE`] or the default weights change; scores from
/// different versions are not comparable.
pub const BASELINE_VERSION: u32 = 1;

/// Population averages over 4000 unconstrained random configurations.
pub const BASELINE: Scores = Scores {
    tapping_workload_distribution: 0.025301075426633263,
    hand_alternation: 0.5841655834657751,
    finger_alternation: 0.5459557691028307,
    avoidance_of_big_steps: 1.6827515700073905,
    hit_direction: 0.12495240024105278,
};

impl Scores {
    pub fn is_finite(&self) -> bool {
        self.tapping_workload_distribution.is_finite()
            && self.hand_alternation.is_finite()
            && self.finger_alternation.is_finite()
            && self.avoidance_of_big_steps.is_finite()
            && self.hit_direction.is_finite()
    }
}

impl Add for Scores {
    type Output = Scores;

    fn add(self, other: Scores) -> Scores {
        Scores {
            tapping_workload_distribution: self.tapping_workload_distribution
                + other.tapping_workload_distribution,
            hand_alternation: self.hand_alternation + other.hand_alternation,
            finger_alternation: self.finger_alternation + other.finger_alternation,
            avoidance_of_big_steps: self.avoidance_of_big_steps + other.avoidance_of_big_steps,
            hit_direction: self.hit_direction + other.hit_direction,
        }
    }
}

impl AddAssign for Scores {
    fn add_assign(&mut self, other: Scores) {
        *self = *self + other;
    }
}

impl Div<f64> for Scores {
    type Output = Scores;

    fn div(self, divisor: f64) -> Scores {
        Scores {
            tapping_workload_distribution: self.tapping_workload_distribution / divisor,
            hand_alternation: self.hand_alternation / divisor,
            finger_alternation: self.finger_alternation / divisor,
            avoidance_of_big_steps: self.avoidance_of_big_steps / divisor,
            hit_direction: self.hit_direction / divisor,
        }
    }
}

impl Sum for Scores {
    fn sum<I: Iterator<Item = Scores>>(iter: I) -> Scores {
        iter.fold(Scores::default(), |acc, s| acc + s)
    }
}

//! Descriptive statistics over small generated data sets.

use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

use crate::models::Difficulty;

use super::problem::Problem;
use super::value::{div_round, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measure {
    /// Mean of a set built to have a whole mean.
    Mean,
    /// Mean rounded to two decimals.
    RoundedMean,
    Median,
    Range,
    /// Population standard deviation.
    StandardDeviation,
    /// Population variance.
    Variance,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statistic {
    pub measure: Measure,
    pub data: Vec<i64>,
}

impl Statistic {
    pub fn new(measure: Measure, data: Vec<i64>) -> Self {
        debug_assert!(!data.is_empty());
        Self { measure, data }
    }

    fn len(&self) -> i64 {
        self.data.len() as i64
    }

    fn sum(&self) -> i64 {
        self.data.iter().sum()
    }

    /// `n Σx² - (Σx)²`, i.e. `n²` times the population variance.
    fn scaled_variance(&self) -> i64 {
        let squares: i64 = self.data.iter().map(|x| x * x).sum();
        self.len() * squares - self.sum().pow(2)
    }

    fn sorted(&self) -> Vec<i64> {
        let mut sorted = self.data.clone();
        sorted.sort_unstable();
        sorted
    }

    fn variance_hundredths(&self) -> i64 {
        div_round(100 * self.scaled_variance(), self.len() * self.len())
    }

    fn deviation(&self) -> Value {
        Value::from_f64_hundredths((self.scaled_variance() as f64).sqrt() / self.len() as f64)
    }

    pub fn text(&self) -> String {
        let listed = self
            .data
            .iter()
            .map(i64::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        match self.measure {
            Measure::Mean => format!("What is the mean of {}?", listed),
            Measure::RoundedMean => {
                format!("What is the mean of {}? (Round to 2 decimal places)", listed)
            }
            Measure::Median => format!("What is the median of {}?", listed),
            Measure::Range => format!("What is the range of {}?", listed),
            Measure::StandardDeviation => format!(
                "What is the standard deviation of {}? (Round to 2 decimal places)",
                listed
            ),
            Measure::Variance => format!(
                "What is the variance of {}? (Round to 2 decimal places)",
                listed
            ),
        }
    }

    pub fn answer(&self) -> Value {
        match self.measure {
            Measure::Mean => Value::Whole(self.sum() / self.len()),
            Measure::RoundedMean => Value::Hundredths(div_round(self.sum() * 100, self.len())),
            Measure::Median => Value::Whole(self.sorted()[self.data.len() / 2]),
            Measure::Range => {
                let sorted = self.sorted();
                Value::Whole(sorted[sorted.len() - 1] - sorted[0])
            }
            Measure::StandardDeviation => self.deviation(),
            Measure::Variance => Value::Hundredths(self.variance_hundredths()),
        }
    }

    pub fn mistakes(&self) -> Vec<Value> {
        let n = self.len();
        match self.measure {
            Measure::Mean => vec![Value::Whole(self.sum()), Value::Whole(self.sum() / (n + 1))],
            Measure::RoundedMean => vec![Value::Hundredths(div_round(self.sum() * 100, n - 1))],
            // Middle of the unsorted list.
            Measure::Median => vec![Value::Whole(self.data[self.data.len() / 2])],
            Measure::Range => {
                let sorted = self.sorted();
                vec![Value::Whole(sorted[sorted.len() - 1]), Value::Whole(sorted[0])]
            }
            Measure::StandardDeviation => {
                let sample = (self.scaled_variance() as f64 / (n * (n - 1)) as f64).sqrt();
                vec![
                    Value::Hundredths(self.variance_hundredths()),
                    Value::from_f64_hundredths(sample),
                ]
            }
            Measure::Variance => vec![
                self.deviation(),
                Value::Hundredths(div_round(100 * self.scaled_variance(), n * (n - 1))),
            ],
        }
    }

    pub fn problem(&self) -> Problem {
        Problem::new(self.text(), self.answer())
            .non_negative()
            .with_mistakes(self.mistakes())
    }
}

pub fn build<R: Rng + ?Sized>(difficulty: Difficulty, rng: &mut R) -> Problem {
    pick_statistic(difficulty, rng).problem()
}

pub fn pick_statistic<R: Rng + ?Sized>(difficulty: Difficulty, rng: &mut R) -> Statistic {
    match difficulty {
        Difficulty::Easy => {
            let len = if rng.random_bool(0.5) { 4 } else { 5 };
            Statistic::new(Measure::Mean, symmetric_set(rng, len))
        }
        Difficulty::Normal => {
            if rng.random_bool(0.5) {
                let len = if rng.random_bool(0.5) { 5 } else { 7 };
                Statistic::new(Measure::Median, distinct_values(rng, len, 1, 50))
            } else {
                Statistic::new(Measure::Range, random_values(rng, 6, 1, 60))
            }
        }
        Difficulty::Hard => {
            if rng.random_bool(0.5) {
                Statistic::new(Measure::StandardDeviation, random_values(rng, 5, 1, 20))
            } else {
                Statistic::new(Measure::RoundedMean, random_values(rng, 6, 1, 40))
            }
        }
        Difficulty::Genius => {
            if rng.random_bool(0.5) {
                Statistic::new(Measure::Variance, random_values(rng, 5, 1, 30))
            } else {
                Statistic::new(Measure::StandardDeviation, random_values(rng, 7, 10, 99))
            }
        }
    }
}

/// Values mirrored around a whole mean, all positive.
fn symmetric_set<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<i64> {
    let mean: i64 = rng.random_range(4..=15);
    let mut data = Vec::with_capacity(len);
    if len % 2 == 1 {
        data.push(mean);
    }
    while data.len() < len {
        let offset = rng.random_range(1..mean);
        data.push(mean - offset);
        data.push(mean + offset);
    }
    data.shuffle(rng);
    data
}

fn distinct_values<R: Rng + ?Sized>(rng: &mut R, len: usize, low: i64, high: i64) -> Vec<i64> {
    let pool: Vec<i64> = (low..=high).collect();
    pool.choose_multiple(rng, len).copied().collect()
}

fn random_values<R: Rng + ?Sized>(rng: &mut R, len: usize, low: i64, high: i64) -> Vec<i64> {
    (0..len).map(|_| rng.random_range(low..=high)).collect()
}

//! Pluggable randomness
//!
//! The simulation only ever needs "a float in [0, 1)". Runs use a seeded
//! PCG stream; tests use a fixed sequence.

use rand::Rng;
use rand_pcg::Pcg32;

/// Source of uniform floats in [0, 1)
pub trait RandomSource {
    fn next_f32(&mut self) -> f32;
}

impl RandomSource for Pcg32 {
    fn next_f32(&mut self) -> f32 {
        self.random::<f32>()
    }
}

/// Largest f32 strictly below 1.0
const BELOW_ONE: f32 = 1.0 - f32::EPSILON / 2.0;

/// Replays a fixed list of values, wrapping around at the end
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    values: Vec<f32>,
    cursor: usize,
}

impl SequenceRandom {
    /// Values outside [0, 1) are clamped into range
    pub fn new(values: impl IntoIterator<Item = f32>) -> Self {
        let mut values: Vec<f32> = values
            .into_iter()
            .map(|v| v.clamp(0.0, BELOW_ONE))
            .collect();
        if values.is_empty() {
            values.push(0.0);
        }
        Self { values, cursor: 0 }
    }

    /// Always returns `value`
    pub fn constant(value: f32) -> Self {
        Self::new([value])
    }
}

impl RandomSource for SequenceRandom {
    fn next_f32(&mut self) -> f32 {
        let v = self.values[self.cursor];
        self.cursor = (self.cursor + 1) % self.values.len();
        v
    }
}

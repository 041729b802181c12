//! Injectable uniform random source.
//!
//! Every generator in the engine draws through [`UniformSource`] so that
//! tests can replay exact sequences. Any `rand` generator qualifies.

use rand::{Rng, RngCore};

/// Source of uniform floats in `[0, 1)`.
pub trait UniformSource {
    fn next_uniform(&mut self) -> f64;
}

impl<R: RngCore> UniformSource for R {
    fn next_uniform(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Uniform draw in `[-0.5, 0.5)`.
pub fn uniform_centered<S: UniformSource + ?Sized>(source: &mut S) -> f64 {
    source.next_uniform() - 0.5
}

/// Uniform draw in `[low, high)`.
pub fn uniform_range<S: UniformSource + ?Sized>(source: &mut S, low: f64, high: f64) -> f64 {
    low + source.next_uniform() * (high - low)
}

/// Replays a fixed list of draws, cycling when exhausted.
#[cfg(test)]
pub(crate) struct ScriptedSource {
    values: Vec<f64>,
    position: usize,
}

#[cfg(test)]
impl ScriptedSource {
    pub(crate) fn new(values: Vec<f64>) -> Self {
        Self { values, position: 0 }
    }

    pub(crate) fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    pub(crate) fn draws(&self) -> usize {
        self.position
    }
}

#[cfg(test)]
impl UniformSource for ScriptedSource {
    fn next_uniform(&mut self) -> f64 {
        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        value
    }
}

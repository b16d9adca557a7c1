use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform draws in `[0, 1)` used by the activity generator.
pub trait RandomSource: Send {
    fn next_unit(&mut self) -> f64;

    /// Uniform index into a pool of `len` entries.
    fn pick(&mut self, len: usize) -> usize {
        let index = (self.next_unit() * len as f64) as usize;
        index.min(len.saturating_sub(1))
    }
}

/// Adapts any `rand` generator.
pub struct RngSource<R>(R);

impl RngSource<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }

    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => {
                log::info!("Activity feed seeded with {seed}");
                Self::seeded(seed)
            }
            None => Self::from_entropy(),
        }
    }
}

impl<R: Rng + Send> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.0.r#gen()
    }
}

/// Replays a fixed list of draws, cycling when it runs out.
#[cfg(test)]
pub struct ScriptedSource {
    values: Vec<f64>,
    cursor: usize,
}

#[cfg(test)]
impl ScriptedSource {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        let values = values.into();
        assert!(!values.is_empty(), "scripted source needs at least one value");
        Self { values, cursor: 0 }
    }
}

#[cfg(test)]
impl RandomSource for ScriptedSource {
    fn next_unit(&mut self) -> f64 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_maps_unit_interval_onto_pool() {
        let mut source = ScriptedSource::new([0.0, 0.24, 0.25, 0.999_999]);
        assert_eq!(source.pick(4), 0);
        assert_eq!(source.pick(4), 0);
        assert_eq!(source.pick(4), 1);
        assert_eq!(source.pick(4), 3);
    }

    #[test]
    fn test_seeded_sources_repeat() {
        let mut a = RngSource::seeded(42);
        let mut b = RngSource::seeded(42);
        for _ in 0..16 {
            let value = a.next_unit();
            assert!((0.0..1.0).contains(&value));
            assert_eq!(value, b.next_unit());
        }
    }
}

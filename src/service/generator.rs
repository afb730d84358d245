//! Random RUT generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::trace;

use crate::config::GeneratorConfig;
use crate::domain::Rut;

/// Generates valid RUTs from an owned random number generator.
///
/// The generator is seeded once at construction and never reseeded, so
/// rapid successive calls do not produce correlated bodies. Use one
/// instance per thread.
#[derive(Debug)]
pub struct Generator<R = StdRng> {
    rng: R,
    min: u32,
    max: u32,
}

impl Generator<StdRng> {
    /// Create a generator seeded from the operating system, using the
    /// default body range.
    #[must_use]
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// Create a reproducible generator from a fixed seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    /// Create a generator from configuration.
    ///
    /// Uses the configured seed if any, otherwise the operating system.
    #[must_use]
    pub fn from_config(config: &GeneratorConfig) -> Self {
        let generator = config
            .seed
            .map_or_else(Self::new, Self::with_seed);
        generator.with_range(config.min, config.max)
    }
}

impl Default for Generator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Generator<R> {
    /// Wrap an existing random number generator.
    pub fn from_rng(rng: R) -> Self {
        Self {
            rng,
            min: GeneratorConfig::DEFAULT_MIN,
            max: GeneratorConfig::DEFAULT_MAX,
        }
    }

    /// Set the range used by [`Self::generate_default`].
    #[must_use]
    pub fn with_range(mut self, min: u32, max: u32) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Generate a RUT whose body is uniformly drawn from `[min, max)`.
    ///
    /// The upper bound is exclusive: `max` itself is never produced.
    ///
    /// # Panics
    ///
    /// Panics if `min >= max`, or if the range leaves 7–8 digit bodies
    /// ([`GeneratorConfig::BODY_FLOOR`]..[`GeneratorConfig::BODY_CEILING`]).
    pub fn generate(&mut self, min: u32, max: u32) -> Rut {
        assert!(min < max, "empty generation range [{min}, {max})");
        assert!(
            min >= GeneratorConfig::BODY_FLOOR && max <= GeneratorConfig::BODY_CEILING,
            "generation range [{min}, {max}) outside 7-8 digit bodies"
        );
        let body = self.rng.random_range(min..max);
        let rut = Rut::assemble(body);
        trace!(%rut, "Generated RUT");
        rut
    }

    /// Generate a RUT within the configured range.
    ///
    /// # Panics
    ///
    /// Panics if the configured range is empty.
    pub fn generate_default(&mut self) -> Rut {
        self.generate(self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::checksum::validate_str;

    #[test]
    fn test_generated_ruts_validate() {
        let mut generator = Generator::new();
        for _ in 0..100 {
            let rut = generator.generate(5_000_000, 23_000_000);
            assert!(validate_str(rut.as_str()).is_ok(), "{rut} did not validate");
        }
    }

    #[test]
    fn test_range_is_half_open() {
        let mut generator = Generator::with_seed(7);
        for _ in 0..50 {
            assert_eq!(generator.generate(1_000_000, 1_000_001).number(), 1_000_000);
        }
    }

    #[test]
    fn test_seed_is_reproducible() {
        let mut a = Generator::with_seed(42);
        let mut b = Generator::with_seed(42);
        for _ in 0..10 {
            assert_eq!(a.generate_default(), b.generate_default());
        }
    }

    #[test]
    fn test_successive_calls_differ() {
        let mut generator = Generator::with_seed(1);
        let ruts: Vec<_> = (0..20).map(|_| generator.generate_default()).collect();
        assert!(ruts.windows(2).any(|w| w[0] != w[1]));
    }

    #[test]
    fn test_from_config_uses_range() {
        let config = GeneratorConfig {
            min: 10_000_000,
            max: 10_000_100,
            seed: Some(3),
        };
        let mut generator = Generator::from_config(&config);
        for _ in 0..20 {
            let n = generator.generate_default().number();
            assert!((10_000_000..10_000_100).contains(&n));
        }
    }

    #[test]
    #[should_panic(expected = "empty generation range")]
    fn test_empty_range_panics() {
        Generator::with_seed(0).generate(10, 10);
    }

    #[test]
    #[should_panic(expected = "outside 7-8 digit bodies")]
    fn test_short_bodies_panic() {
        Generator::with_seed(1).generate(0, 1_000);
    }

    #[test]
    #[should_panic(expected = "outside 7-8 digit bodies")]
    fn test_long_bodies_panic() {
        Generator::with_seed(1).generate(99_999_999, 123_456_790);
    }

    #[test]
    fn test_generated_ruts_survive_serde() {
        let mut generator = Generator::with_seed(5);
        for rut in [
            generator.generate(1_000_000, 1_000_010),
            generator.generate(99_999_990, 100_000_000),
        ] {
            let json = serde_json::to_string(&rut).unwrap();
            assert_eq!(serde_json::from_str::<Rut>(&json).unwrap(), rut);
        }
    }
}

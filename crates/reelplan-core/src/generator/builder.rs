//! Builder for creating and configuring PlanGenerator instances.

use super::{PlanGenerator, RandomSource, SeededRandom, ThreadRandom};

/// Builder for creating and configuring PlanGenerator instances.
#[derive(Default)]
pub struct PlanGeneratorBuilder {
    seed: Option<u64>,
    source: Option<Box<dyn RandomSource + Send>>,
}

impl PlanGeneratorBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the random picks so identical forms yield identical plans.
    ///
    /// If not specified, picks come from the thread-local generator.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if let Some(seed) = seed {
            self.seed = Some(seed);
        }
        self
    }

    /// Uses a custom random source. Takes precedence over a seed.
    pub fn with_random_source(mut self, source: impl RandomSource + Send + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Builds the configured generator.
    pub fn build(self) -> PlanGenerator {
        match (self.source, self.seed) {
            (Some(source), _) => PlanGenerator { rng: source },
            (None, Some(seed)) => PlanGenerator::new(SeededRandom::new(seed)),
            (None, None) => PlanGenerator::new(ThreadRandom),
        }
    }
}

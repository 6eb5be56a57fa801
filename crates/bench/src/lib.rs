use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::SeedableRng;
use rand::rngs::StdRng;

const RNG_SEED: u64 = 0x5EED_2026;

/// Criterion group settings bucketed by input size, so large inputs get
/// fewer samples and longer measurement windows.
#[derive(Clone, Copy, Debug)]
pub enum RuntimeProfile {
    Small,
    Medium,
    Large,
}

impl RuntimeProfile {
    pub fn for_size(n: usize) -> Self {
        if n <= 4_096 {
            Self::Small
        } else if n <= 16_384 {
            Self::Medium
        } else {
            Self::Large
        }
    }

    fn sample_size(self) -> usize {
        match self {
            Self::Small | Self::Medium => 15,
            Self::Large => 10,
        }
    }

    fn warm_up_ms(self) -> u64 {
        match self {
            Self::Small => 100,
            Self::Medium => 500,
            Self::Large => 800,
        }
    }

    fn measure_ms(self) -> u64 {
        match self {
            Self::Small => 200,
            Self::Medium => 1000,
            Self::Large => 1500,
        }
    }

    pub fn apply<M: Measurement>(self, group: &mut BenchmarkGroup<'_, M>) {
        group.sample_size(self.sample_size());
        group.warm_up_time(Duration::from_millis(self.warm_up_ms()));
        group.measurement_time(Duration::from_millis(self.measure_ms()));
    }
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

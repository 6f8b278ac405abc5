use std::process;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedChoice {
    Cli(u64),
    Generated(u64),
}

impl SeedChoice {
    /// Prefers the seed given on the command line over the generated one.
    pub fn resolve(cli_seed: Option<u64>, generated_seed: u64) -> Self {
        match cli_seed {
            Some(seed) => Self::Cli(seed),
            None => Self::Generated(generated_seed),
        }
    }

    pub fn value(self) -> u64 {
        match self {
            Self::Cli(seed) | Self::Generated(seed) => seed,
        }
    }

    pub fn is_generated(self) -> bool {
        matches!(self, Self::Generated(_))
    }
}

static GENERATED_SEED_COUNTER: AtomicU64 = AtomicU64::new(0);

pub fn generate_runtime_seed() -> u64 {
    let now_nanos =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |duration| duration.as_nanos());
    let pid = u64::from(process::id());
    let counter = GENERATED_SEED_COUNTER.fetch_add(1, Ordering::Relaxed);

    let entropy = (now_nanos as u64)
        ^ ((now_nanos >> 64) as u64)
        ^ pid.rotate_left(17)
        ^ counter.rotate_left(7);

    mix_seed(entropy)
}

// splitmix64 finalizer
fn mix_seed(mut value: u64) -> u64 {
    value ^= value >> 30;
    value = value.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    value ^= value >> 27;
    value = value.wrapping_mul(0x94D0_49BB_1331_11EB);
    value ^ (value >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_generated_seed_when_none_is_given() {
        let choice = SeedChoice::resolve(None, 9_876_543);
        assert_eq!(choice, SeedChoice::Generated(9_876_543));
        assert!(choice.is_generated());
    }

    #[test]
    fn cli_seed_wins_over_generated() {
        let choice = SeedChoice::resolve(Some(4_242), 1);
        assert_eq!(choice, SeedChoice::Cli(4_242));
        assert_eq!(choice.value(), 4_242);
        assert!(!choice.is_generated());
    }

    #[test]
    fn mixing_spreads_adjacent_inputs() {
        assert_ne!(mix_seed(1), mix_seed(2));
        assert_eq!(mix_seed(0), 0);
    }

    #[test]
    fn generated_seed_changes_between_calls() {
        let first = generate_runtime_seed();
        let second = generate_runtime_seed();
        assert_ne!(first, second, "runtime seed generation should vary per call");
    }
}

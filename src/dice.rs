use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Source of die values.
///
/// Caller contract: `roll` must return a value in `1..=6`; production
/// implementations draw uniformly, tests may script a sequence.
pub trait DieRoller: Send + Sync {
    fn roll(&mut self) -> u8;
}

/// OS-seeded uniform die used by the WASM API.
pub struct RandomDie {
    rng: StdRng,
}

impl RandomDie {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Default for RandomDie {
    fn default() -> Self {
        Self::new()
    }
}

impl DieRoller for RandomDie {
    fn roll(&mut self) -> u8 {
        self.rng.random_range(1..=6)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_die_stays_in_range() {
        let mut die = RandomDie::new();
        for _ in 0..200 {
            let value = die.roll();
            assert!((1..=6).contains(&value), "rolled {value}");
        }
    }

    #[test]
    fn random_die_eventually_covers_all_faces() {
        let mut die = RandomDie::new();
        let mut seen = [false; 6];
        for _ in 0..1000 {
            seen[(die.roll() - 1) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s), "faces seen: {seen:?}");
    }
}

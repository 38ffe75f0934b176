//! Non-repeating prompt rotation.
//!
//! A [`UsedSet`] remembers which values of a pool were already asked in the
//! current session. Every value of a pool is drawn once before any value
//! repeats; draws are uniform among the values not yet used.

use rand::{seq::SliceRandom, Rng};
use tracing::debug;

use crate::error::QuizError;

/// Values already presented for one domain (letters, hours, positions).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsedSet<T> {
    name: &'static str,
    used: Vec<T>,
}

impl<T> UsedSet<T>
where
    T: Copy + PartialEq + std::fmt::Debug,
{
    /// Create an empty set; `name` only shows up in logs and errors.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            used: Vec::new(),
        }
    }

    /// Values drawn so far, in draw order.
    pub fn used(&self) -> &[T] {
        &self.used
    }

    /// Whether `value` was already drawn.
    pub fn contains(&self, value: &T) -> bool {
        self.used.contains(value)
    }

    /// Forget every drawn value.
    pub fn clear(&mut self) {
        self.used.clear();
    }

    /// Draw the next value from `pool`.
    ///
    /// When every value of `pool` has been used, only the members of `pool`
    /// are released before drawing. Values remembered from a different pool
    /// (an earlier difficulty tier) stay marked as used.
    pub fn select_next<R>(&mut self, pool: &[T], rng: &mut R) -> Result<T, QuizError>
    where
        R: Rng + ?Sized,
    {
        if pool.is_empty() {
            return Err(QuizError::EmptyPool(self.name));
        }

        let mut available: Vec<T> = pool
            .iter()
            .copied()
            .filter(|value| !self.used.contains(value))
            .collect();

        if available.is_empty() {
            debug!(pool = self.name, size = pool.len(), "pool exhausted, starting new cycle");
            self.used.retain(|value| !pool.contains(value));
            available = pool.to_vec();
        }

        let value = *available
            .choose(rng)
            .ok_or(QuizError::EmptyPool(self.name))?;
        self.used.push(value);
        Ok(value)
    }
}

/// Functional form of [`UsedSet::select_next`]: returns the draw and the new
/// used list, leaving the inputs untouched.
pub fn select_next<T, R>(pool: &[T], used: &[T], rng: &mut R) -> Result<(T, Vec<T>), QuizError>
where
    T: Copy + PartialEq + std::fmt::Debug,
    R: Rng + ?Sized,
{
    let mut set = UsedSet {
        name: "ad-hoc",
        used: used.to_vec(),
    };
    let value = set.select_next(pool, rng)?;
    Ok((value, set.used))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    use crate::clock::{MinutePosition, ALL_POSITIONS, HOURS, QUARTERS, WHOLE_AND_HALF};

    #[test]
    fn first_cycle_is_a_permutation_of_the_pool() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut used = UsedSet::new("hours");
            let mut drawn: Vec<u8> = (0..HOURS.len())
                .map(|_| used.select_next(&HOURS, &mut rng))
                .collect::<Result<_, _>>()
                .unwrap();
            drawn.sort_unstable();
            assert_eq!(drawn, HOURS.to_vec());
        }
    }

    #[test]
    fn exhausted_pool_starts_a_new_cycle() {
        let mut rng = StdRng::seed_from_u64(11);
        let pool = ['A', 'B', 'C'];
        let mut used = UsedSet::new("letters");
        for _ in 0..3 {
            used.select_next(&pool, &mut rng).unwrap();
        }
        assert_eq!(used.used().len(), 3);

        let next = used.select_next(&pool, &mut rng).unwrap();
        assert!(pool.contains(&next));
        assert_eq!(used.used(), &[next]);
    }

    #[test]
    fn tier_reset_keeps_values_from_other_tiers() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut used = UsedSet::new("minute positions");
        used.select_next(&ALL_POSITIONS[..4], &mut rng).unwrap();
        let early = used.used()[0];

        for _ in 0..WHOLE_AND_HALF.len() {
            used.select_next(&WHOLE_AND_HALF, &mut rng).unwrap();
        }
        let again = used.select_next(&WHOLE_AND_HALF, &mut rng).unwrap();
        assert!(WHOLE_AND_HALF.contains(&again));
        assert!(used.contains(&early));
    }

    #[test]
    fn same_seed_gives_same_draws() {
        let draws = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut used = UsedSet::new("positions");
            (0..4)
                .map(|_| used.select_next(&QUARTERS, &mut rng).unwrap())
                .collect::<Vec<MinutePosition>>()
        };
        assert_eq!(draws(99), draws(99));
    }

    #[test]
    fn functional_form_returns_new_used_list() {
        let mut rng = StdRng::seed_from_u64(3);
        let (value, used) = select_next(&[1u8, 2], &[1], &mut rng).unwrap();
        assert_eq!(value, 2);
        assert_eq!(used, vec![1, 2]);
    }

    #[test]
    fn empty_pool_is_reported() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut used: UsedSet<u8> = UsedSet::new("hours");
        assert!(matches!(
            used.select_next(&[], &mut rng),
            Err(QuizError::EmptyPool("hours"))
        ));
    }
}

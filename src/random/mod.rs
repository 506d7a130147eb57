//! Random selection and shuffling over slices.
//!
//! Every function takes the generator explicitly so callers can seed it;
//! pass `&mut rand::rng()` for the thread-local one.
//!
//! # Examples
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use utilkit::random::{sample, shuffled};
//!
//! let mut rng = StdRng::seed_from_u64(3);
//! let deck = [1, 2, 3, 4, 5];
//!
//! let picked = sample(&deck, &mut rng).copied().unwrap();
//! assert!(deck.contains(&picked));
//!
//! let mut reordered = shuffled(&deck, &mut rng);
//! reordered.sort_unstable();
//! assert_eq!(reordered, deck);
//! ```

use rand::Rng;

/// Picks one element uniformly at random, or `None` for an empty slice.
pub fn sample<'a, T, R: Rng + ?Sized>(slice: &'a [T], rng: &mut R) -> Option<&'a T> {
    if slice.is_empty() {
        return None;
    }
    slice.get(rng.random_range(0..slice.len()))
}

/// Removes one element chosen uniformly at random and returns it.
///
/// The last element takes the removed one's place, so the remaining order is
/// not preserved.
pub fn sample_remove<T, R: Rng + ?Sized>(values: &mut Vec<T>, rng: &mut R) -> Option<T> {
    if values.is_empty() {
        return None;
    }
    let index = rng.random_range(0..values.len());
    Some(values.swap_remove(index))
}

/// Shuffles `slice` in place (Fisher-Yates).
pub fn shuffle<T, R: Rng + ?Sized>(slice: &mut [T], rng: &mut R) {
    for index in (1..slice.len()).rev() {
        let other = rng.random_range(0..=index);
        slice.swap(index, other);
    }
}

/// Returns a shuffled copy of `slice`.
pub fn shuffled<T: Clone, R: Rng + ?Sized>(slice: &[T], rng: &mut R) -> Vec<T> {
    let mut copy = slice.to_vec();
    shuffle(&mut copy, rng);
    copy
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rstest::{fixture, rstest};

    #[fixture]
    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x5eed)
    }

    #[rstest]
    fn test_sample_of_empty_is_none(mut rng: StdRng) {
        let empty: [u8; 0] = [];
        assert_eq!(sample(&empty, &mut rng), None);
        assert_eq!(sample_remove(&mut Vec::<u8>::new(), &mut rng), None);
    }

    #[rstest]
    fn test_sample_reaches_every_element(mut rng: StdRng) {
        let values = [10, 20, 30];
        let mut seen = [false; 3];
        for _ in 0..300 {
            let picked = sample(&values, &mut rng).unwrap();
            let position = values.iter().position(|value| value == picked).unwrap();
            seen[position] = true;
        }
        assert_eq!(seen, [true, true, true]);
    }

    #[rstest]
    fn test_sample_remove_drains_every_element_once(mut rng: StdRng) {
        let mut values: Vec<i32> = (0..20).collect();
        let mut drained = Vec::new();
        while let Some(value) = sample_remove(&mut values, &mut rng) {
            drained.push(value);
        }
        drained.sort_unstable();
        assert_eq!(drained, (0..20).collect::<Vec<_>>());
    }

    #[rstest]
    fn test_shuffle_is_a_permutation(mut rng: StdRng) {
        let mut values: Vec<i32> = (0..50).collect();
        shuffle(&mut values, &mut rng);
        assert_ne!(values, (0..50).collect::<Vec<_>>());
        values.sort_unstable();
        assert_eq!(values, (0..50).collect::<Vec<_>>());
    }

    #[rstest]
    fn test_shuffle_is_reproducible_for_a_seed() {
        let first = shuffled(&[1, 2, 3, 4, 5, 6, 7, 8], &mut StdRng::seed_from_u64(9));
        let second = shuffled(&[1, 2, 3, 4, 5, 6, 7, 8], &mut StdRng::seed_from_u64(9));
        assert_eq!(first, second);
    }

    #[rstest]
    fn test_shuffle_of_short_slices(mut rng: StdRng) {
        let mut empty: [i32; 0] = [];
        shuffle(&mut empty, &mut rng);
        let mut single = [1];
        shuffle(&mut single, &mut rng);
        assert_eq!(single, [1]);
    }
}

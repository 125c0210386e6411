//! Fisher-Yates shuffle driven by a [`SeededRng`].

use super::rng::SeededRng;

/// Returns a permuted copy of `items`; the input is never mutated.
///
/// Standard Fisher-Yates walking from the last index down to 1, drawing
/// `j = floor(next * (i + 1))` at each step. Deterministic for a given
/// generator state: re-seeding identically reproduces the permutation.
pub fn fisher_yates<T: Clone>(items: &[T], rng: &mut SeededRng) -> Vec<T> {
    let mut shuffled = items.to_vec();
    for i in (1..shuffled.len()).rev() {
        // next_value can return exactly 1.0; clamp keeps j in bounds
        let j = ((rng.next_value() * (i as f64 + 1.0)) as usize).min(i);
        shuffled.swap(i, j);
    }
    shuffled
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shuffle_is_deterministic_per_seed() {
        let items: Vec<u32> = (0..20).collect();
        let first = fisher_yates(&items, &mut SeededRng::new(123));
        let second = fisher_yates(&items, &mut SeededRng::new(123));
        assert_eq!(first, second);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let items: Vec<u32> = (0..50).collect();
        let mut shuffled = fisher_yates(&items, &mut SeededRng::new(7));
        shuffled.sort_unstable();
        assert_eq!(shuffled, items);
    }

    #[test]
    fn shuffle_does_not_mutate_input() {
        let items = vec!["a", "b", "c", "d"];
        let _ = fisher_yates(&items, &mut SeededRng::new(5));
        assert_eq!(items, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn different_seeds_usually_differ() {
        let items: Vec<u32> = (0..30).collect();
        let a = fisher_yates(&items, &mut SeededRng::new(1));
        let b = fisher_yates(&items, &mut SeededRng::new(2));
        assert_ne!(a, b);
    }

    #[test]
    fn degenerate_inputs_are_passed_through() {
        let empty: Vec<u32> = vec![];
        assert!(fisher_yates(&empty, &mut SeededRng::new(1)).is_empty());
        assert_eq!(fisher_yates(&[9], &mut SeededRng::new(1)), vec![9]);
    }
}

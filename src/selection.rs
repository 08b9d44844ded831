use rand::Rng;

/// In-place Fisher–Yates shuffle.
pub fn fisher_yates_shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in (1..=items.len()).rev() {
        let j = rng.gen_range(0..i);
        items.swap(i - 1, j);
    }
}

/// Draws `n` distinct items in random order, leaving the input untouched.
/// Returns fewer than `n` items if the slice is shorter than `n`.
pub fn random_selection<T: Clone, R: Rng>(n: usize, items: &[T], rng: &mut R) -> Vec<T> {
    let mut cloned = items.to_vec();
    fisher_yates_shuffle(&mut cloned, rng);
    cloned.truncate(n);
    cloned
}

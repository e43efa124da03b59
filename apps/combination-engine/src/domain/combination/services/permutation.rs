//! Lexicographic permutation stepping over an index arrangement.

/// Rearrange `items` into the next lexicographically greater permutation.
///
/// Returns `false` and leaves `items` sorted ascending once the last
/// permutation has been passed, so a loop seeded with a sorted slice visits
/// every distinct ordering exactly once.
pub fn next_permutation<T: Ord>(items: &mut [T]) -> bool {
    let Some(pivot) = items.windows(2).rposition(|pair| pair[0] < pair[1]) else {
        items.reverse();
        return false;
    };

    // pivot + 1 always qualifies
    let successor = items
        .iter()
        .rposition(|item| items[pivot] < *item)
        .unwrap_or(pivot + 1);

    items.swap(pivot, successor);
    items[pivot + 1..].reverse();
    true
}

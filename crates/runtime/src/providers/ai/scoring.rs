//! Shared selection helper.

/// Returns the highest-scoring item.
///
/// Candidates are visited in iteration order and only a strictly greater
/// score replaces the current best, so on ties the first candidate wins.
/// Returns `None` for an empty iterator.
pub fn first_max<T>(
    candidates: impl IntoIterator<Item = T>,
    mut score: impl FnMut(&T) -> f64,
) -> Option<T> {
    let mut best: Option<(T, f64)> = None;

    for candidate in candidates {
        let value = score(&candidate);
        match &best {
            Some((_, best_value)) if value <= *best_value => {}
            _ => best = Some((candidate, value)),
        }
    }

    best.map(|(candidate, _)| candidate)
}

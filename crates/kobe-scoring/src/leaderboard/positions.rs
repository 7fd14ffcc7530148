/// Assign 1-based positions to already-sorted scores.
///
/// A score that differs from its predecessor takes its own index; an equal
/// score carries the previous position forward. Equality is on the
/// formatted string.
pub fn assign_positions<'a, I>(sorted_scores: I) -> Vec<u32>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut positions = Vec::new();
    let mut previous: Option<&str> = None;
    let mut position = 0u32;

    for (index, score) in sorted_scores.into_iter().enumerate() {
        if previous != Some(score) {
            position = u32::try_from(index + 1).unwrap_or(u32::MAX);
            previous = Some(score);
        }
        positions.push(position);
    }
    positions
}

//! "Did you mean" suggestions for mistyped command names.

/// Returns the registered name closest to `input`, if any is close enough.
///
/// Names are compared case-insensitively by optimal string alignment
/// distance (Levenshtein plus adjacent transpositions, so `lgo` is one edit
/// from `log`). A candidate qualifies when its distance is at most 40% of the
/// input length, or a single edit for very short input. Ties go to the
/// earliest candidate.
pub(crate) fn suggest<'a, S>(input: &str, candidates: &'a [S]) -> Option<&'a str>
where
    S: AsRef<str>,
{
    let needle: Vec<char> = input.to_lowercase().chars().collect();
    let input_len = needle.len();

    let mut best: Option<(&'a str, usize)> = None;
    for candidate in candidates {
        let name = candidate.as_ref();
        let hay: Vec<char> = name.to_lowercase().chars().collect();
        let distance = edit_distance(&needle, &hay);
        if !within_threshold(distance, input_len) {
            continue;
        }
        if best.is_none_or(|(_, best_distance)| distance < best_distance) {
            best = Some((name, distance));
        }
    }

    best.map(|(name, _)| name)
}

fn within_threshold(distance: usize, input_len: usize) -> bool {
    distance <= 1 || distance.saturating_mul(5) <= input_len.saturating_mul(2)
}

/// Optimal string alignment distance between two character sequences.
fn edit_distance(a: &[char], b: &[char]) -> usize {
    let width = b.len() + 1;
    // Three rolling rows: two back (for transpositions), previous, current.
    let mut before_prev: Vec<usize> = vec![0; width];
    let mut prev: Vec<usize> = (0..width).collect();
    let mut curr: Vec<usize> = vec![0; width];

    for (i, a_ch) in a.iter().enumerate() {
        if let Some(first) = curr.first_mut() {
            *first = i + 1;
        }
        for (j, b_ch) in b.iter().enumerate() {
            let cost = usize::from(a_ch != b_ch);
            let deletion = prev.get(j + 1).copied().unwrap_or(usize::MAX).saturating_add(1);
            let insertion = curr.get(j).copied().unwrap_or(usize::MAX).saturating_add(1);
            let substitution = prev.get(j).copied().unwrap_or(usize::MAX).saturating_add(cost);
            let mut best = deletion.min(insertion).min(substitution);

            let transposed = i > 0
                && j > 0
                && a.get(i - 1) == Some(b_ch)
                && b.get(j - 1) == Some(a_ch);
            if transposed {
                let swap = before_prev
                    .get(j - 1)
                    .copied()
                    .unwrap_or(usize::MAX)
                    .saturating_add(1);
                best = best.min(swap);
            }

            if let Some(cell) = curr.get_mut(j + 1) {
                *cell = best;
            }
        }
        std::mem::swap(&mut before_prev, &mut prev);
        std::mem::swap(&mut prev, &mut curr);
    }

    prev.last().copied().unwrap_or(0)
}

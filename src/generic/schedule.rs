/*!
Restart scheduling sequences.

Two schedules are supported for setting the conflict budget of each search round:

- The Luby sequence (<https://oeis.org/A182105>), scaled by a growth factor and a base interval.
- A plain geometric sequence.

Both bound the work wasted on an unlucky branch while retrying every finite budget, and as learned clauses persist across restarts a restart reorders rather than repeats work.
*/

/// The `index`th element of the Luby-style sequence with growth factor `factor`.
///
/// Finite subsequences of the sequence with factor 2 run:
///
/// ```none
/// 1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4, 8, …
/// ```
///
/// The implementation first finds the finite subsequence containing `index` together with its size, then narrows to the position of `index` within it.
pub fn luby(factor: f64, index: u32) -> f64 {
    let mut size: u64 = 1;
    let mut sequence: i32 = 0;
    let mut index = index as u64;

    while size < index + 1 {
        sequence += 1;
        size = 2 * size + 1;
    }

    while size - 1 != index {
        size = (size - 1) >> 1;
        sequence -= 1;
        index %= size;
    }

    factor.powi(sequence)
}

#[cfg(test)]
mod tests {
    use super::*;

    // https://oeis.org/A182105
    const LUBY_SLICE: &[u32] = &[
        1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4, 8, 1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4, 8,
        16, 1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4, 8, 1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4,
        8, 16, 32,
    ];

    #[test]
    fn luby_sequence() {
        for (index, known_value) in LUBY_SLICE.iter().enumerate() {
            assert_eq!(luby(2.0, index as u32), *known_value as f64);
        }
    }

    #[test]
    fn luby_fractional_factor() {
        assert_eq!(luby(3.0, 2), 3.0);
        assert_eq!(luby(3.0, 14), 27.0);
    }
}

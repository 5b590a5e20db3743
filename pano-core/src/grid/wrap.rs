//! Floored-modulo index wrapping and the content period it induces.

/// Map any linear cell index into `[0, len)`.
///
/// Uses floored modulo so negative indices wrap from the end of the list
/// (`wrap_index(-1, 3) == Some(2)`). Returns `None` for an empty list.
pub fn wrap_index(index: i64, len: usize) -> Option<usize> {
    let len = i64::try_from(len).ok().filter(|len| *len > 0)?;
    usize::try_from(index.rem_euclid(len)).ok()
}

/// Smallest `(cols, rows)` shift that maps every cell onto a cell with the
/// same content.
///
/// Moving one column changes the linear index by 1 and moving one row by
/// `columns`, so the content repeats every `len` columns and every
/// `len / gcd(len, columns)` rows. An empty list is treated as period 1.
pub fn content_period(len: usize, columns: usize) -> (u64, u64) {
    if len == 0 {
        return (1, 1);
    }
    let len = len as u64;
    let columns = (columns as u64).max(1);
    (len, len / gcd(len, columns))
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_index_wraps_to_last_element() {
        assert_eq!(wrap_index(-1, 3), Some(2));
        assert_eq!(wrap_index(-3, 3), Some(0));
        assert_eq!(wrap_index(-4, 3), Some(2));
    }

    #[test]
    fn wrap_stays_in_range_and_is_congruent() {
        for n in 1..=7usize {
            for i in -50i64..=50 {
                let w = wrap_index(i, n).expect("non-empty");
                assert!(w < n);
                assert_eq!((i - w as i64).rem_euclid(n as i64), 0);
                assert_eq!(Some(w), wrap_index(i + n as i64, n));
            }
        }
    }

    #[test]
    fn empty_list_has_no_wrapped_index() {
        assert_eq!(wrap_index(0, 0), None);
        assert_eq!(wrap_index(-5, 0), None);
    }

    #[test]
    fn period_accounts_for_shared_factors() {
        assert_eq!(content_period(3, 4), (3, 3));
        assert_eq!(content_period(8, 4), (8, 2));
        assert_eq!(content_period(4, 4), (4, 1));
        assert_eq!(content_period(0, 4), (1, 1));
    }

    #[test]
    fn period_shift_preserves_content() {
        let (len, columns) = (6usize, 4usize);
        let (pc, pr) = content_period(len, columns);
        for row in -5i64..5 {
            for col in -5i64..5 {
                let here = row * columns as i64 + col;
                let shifted =
                    (row + pr as i64) * columns as i64 + col + pc as i64;
                assert_eq!(wrap_index(here, len), wrap_index(shifted, len));
            }
        }
    }
}

/// Levenshtein distance with unit costs for insertion, deletion and
/// substitution.
///
/// Only two rolling rows of length `min(|a|,|b|) + 1` are kept; the shorter
/// operand is canonicalized to the row dimension, so the result is
/// independent of argument order.
pub fn distance(a: &[u8], b: &[u8]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    let mut prev: Vec<usize> = (0..=short.len()).collect();
    let mut cur: Vec<usize> = vec![0; short.len() + 1];

    for (j, &lb) in long.iter().enumerate() {
        cur[0] = j + 1;
        for (i, &sb) in short.iter().enumerate() {
            let cost = if sb == lb { 0 } else { 1 };
            cur[i + 1] = (prev[i + 1] + 1)
                .min(cur[i] + 1)
                .min(prev[i] + cost);
        }
        std::mem::swap(&mut prev, &mut cur);
    }

    prev[short.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        assert_eq!(distance(b"", b""), 0);
        assert_eq!(distance(b"ACGT", b"ACGT"), 0);
        assert_eq!(distance(b"ACGTACGTAC", b"ACGTACGTAC"), 0);
    }

    #[test]
    fn test_empty_vs_k() {
        assert_eq!(distance(b"", b"ACG"), 3);
        assert_eq!(distance(b"ACG", b""), 3);
    }

    #[test]
    fn test_known_values() {
        assert_eq!(distance(b"kitten", b"sitting"), 3);
        assert_eq!(distance(b"AC", b"GT"), 2);
        assert_eq!(distance(b"AC", b"AG"), 1);
        // Rotation of a periodic sequence: one deletion plus one insertion
        assert_eq!(distance(b"ACGTACGTAC", b"CGTACGTACG"), 2);
    }

    #[test]
    fn test_symmetry() {
        let pairs: &[(&[u8], &[u8])] = &[
            (b"ACGT", b"TGCA"),
            (b"A", b"ACGTACGT"),
            (b"GATTACA", b"GCAT"),
            (b"", b"NNN"),
        ];
        for (a, b) in pairs {
            assert_eq!(distance(a, b), distance(b, a));
        }
    }

    #[test]
    fn test_upper_bound() {
        let pairs: &[(&[u8], &[u8])] = &[
            (b"ACGT", b"TTTTTTTT"),
            (b"GATTACA", b""),
            (b"AAAA", b"TTTT"),
        ];
        for (a, b) in pairs {
            assert!(distance(a, b) <= a.len().max(b.len()));
        }
    }
}

/// Levenshtein distance between `a` and `b`, counted in chars.
///
/// Fills the full `(len(a)+1) x (len(b)+1)` table. No case folding or
/// Unicode normalization is applied.
pub fn distance(a: &str, b: &str) -> usize {
    if a.is_empty() {
        return b.chars().count();
    }
    if b.is_empty() {
        return a.chars().count();
    }
    if a == b {
        return 0;
    }

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let width = b.len() + 1;
    let mut table = vec![0usize; (a.len() + 1) * width];

    for i in 0..=a.len() {
        table[i * width] = i;
    }
    for j in 0..=b.len() {
        table[j] = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            let delete = table[(i - 1) * width + j] + 1;
            let insert = table[i * width + j - 1] + 1;
            let substitute = table[(i - 1) * width + j - 1] + cost;
            table[i * width + j] = delete.min(insert).min(substitute);
        }
    }

    table[a.len() * width + b.len()]
}

/// Whether `a` and `b` are within `max` edits of each other.
///
/// The length difference is a lower bound on the distance, so pairs that
/// differ too much in length are rejected without building the table.
pub fn within(a: &str, b: &str, max: usize) -> bool {
    let a_len = a.chars().count();
    let b_len = b.chars().count();
    if a_len.abs_diff(b_len) > max {
        return false;
    }
    distance(a, b) <= max
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_inputs() {
        assert_eq!(distance("", ""), 0);
        assert_eq!(distance("", "abc"), 3);
        assert_eq!(distance("abcd", ""), 4);
    }

    #[test]
    fn classic_pairs() {
        assert_eq!(distance("kitten", "sitting"), 3);
        assert_eq!(distance("sunday", "saturday"), 3);
        assert_eq!(distance("flaw", "lawn"), 2);
        assert_eq!(distance("a", "b"), 1);
        assert_eq!(distance("same", "same"), 0);
    }

    #[test]
    fn counts_chars_not_bytes() {
        assert_eq!(distance("café", "cafe"), 1);
        assert_eq!(distance("", "日本"), 2);
        assert_eq!(distance("日本語", "日本"), 1);
    }

    #[test]
    fn case_sensitive() {
        assert_eq!(distance("Error", "error"), 1);
    }

    #[test]
    fn within_matches_distance() {
        assert!(within("kitten", "sitting", 3));
        assert!(!within("kitten", "sitting", 2));
        assert!(!within("a", "abcdef", 4));
        assert!(within("", "", 0));
    }
}

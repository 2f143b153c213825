//! Batch uniqueness validation shared by the tag and manufacturer bulk
//! updates. The whole batch is rejected before any write when two elements
//! carry the same name; uniqueness against unlisted existing records is not
//! checked here.

/// Return the first name that occurs more than once in the batch.
pub fn find_duplicate_name<'a>(names: &[&'a str]) -> Option<&'a str> {
    names
        .iter()
        .enumerate()
        .find(|(i, name)| names[i + 1..].contains(name))
        .map(|(_, name)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_batch_passes() {
        assert_eq!(find_duplicate_name(&["a", "b", "c"]), None);
        assert_eq!(find_duplicate_name(&[]), None);
    }

    #[test]
    fn test_duplicate_is_reported() {
        assert_eq!(find_duplicate_name(&["A", "A"]), Some("A"));
        assert_eq!(find_duplicate_name(&["x", "y", "x", "y"]), Some("x"));
    }

    #[test]
    fn test_first_offender_wins() {
        // "b" repeats before "a" does positionally, but "a" is the first
        // name whose first and last occurrence differ
        assert_eq!(find_duplicate_name(&["a", "b", "b", "a"]), Some("a"));
    }
}

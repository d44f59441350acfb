//! Tests for `LineSet` membership tracking

#[cfg(test)]
mod tests {
    use rookpoly::algorithm::bitset::LineSet;

    // Tests insertion reports novelty
    // Verified by always returning true from insert
    #[test]
    fn test_insert_reports_new_lines() {
        let mut set = LineSet::new(10);
        assert!(set.insert(0));
        assert!(set.insert(7));
        assert!(!set.insert(7));
        assert!(!set.insert(0));
        assert!(set.insert(9));
    }

    // Tests indices beyond capacity are rejected
    // Verified by growing the bitvec on insert
    #[test]
    fn test_out_of_range_rejected() {
        let mut set = LineSet::new(4);
        assert!(!set.insert(4));
        assert!(!set.insert(100));
        assert!(set.insert(3));
    }

    // Tests sets of equal capacity compare by membership
    // Verified by deriving equality from capacity only
    #[test]
    fn test_equality_follows_members() {
        let mut first = LineSet::new(5);
        let mut second = LineSet::new(5);
        assert_eq!(first, second);
        first.insert(2);
        assert_ne!(first, second);
        second.insert(2);
        assert_eq!(first, second);
    }
}

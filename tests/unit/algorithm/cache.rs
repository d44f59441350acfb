//! Tests for polynomial caching behavior including hit/miss tracking and key uniqueness

#[cfg(test)]
mod tests {
    use rookpoly::Polynomial;
    use rookpoly::algorithm::cache::PolynomialCache;
    use rookpoly::spatial::board::BitBoard;

    // Verifies new cache starts with 0 hits and 0 misses
    // Verified by initializing cache with non-zero hit and miss counts
    #[test]
    fn test_cache_new() {
        let cache = PolynomialCache::new();
        assert_eq!(cache.stats.hits, 0);
        assert_eq!(cache.stats.misses, 0);
        assert!(cache.is_empty());
    }

    // Tests cache miss on first access and hit after insert
    // Verified by removing hit counter increment logic
    #[test]
    fn test_cache_miss_and_hit() {
        let mut cache = PolynomialCache::new();
        let key: Box<[u128]> = vec![0b11, 0b01].into_boxed_slice();

        assert!(cache.lookup(&key).is_none());
        assert_eq!(cache.stats.misses, 1);

        cache.insert(key.clone(), Polynomial::from(vec![1, 3, 1]));
        assert_eq!(cache.lookup(&key), Some(&Polynomial::from(vec![1, 3, 1])));
        assert_eq!(cache.stats.hits, 1);
        assert_eq!(cache.stats.misses, 1);
        assert_eq!(cache.len(), 1);
    }

    // Tests entries are write-once
    // Verified by overwriting on repeated insert
    #[test]
    fn test_insert_keeps_first_value() {
        let mut cache = PolynomialCache::new();
        let key: Box<[u128]> = vec![0b1].into_boxed_slice();

        cache.insert(key.clone(), Polynomial::from(vec![1, 1]));
        cache.insert(key.clone(), Polynomial::from(vec![7]));

        assert_eq!(cache.lookup(&key), Some(&Polynomial::from(vec![1, 1])));
        assert_eq!(cache.len(), 1);
    }

    // Tests independently built identical boards share a key
    // Verified by including a per-board counter in the key
    #[test]
    fn test_board_keys_identify_state() -> rookpoly::Result<()> {
        let first = BitBoard::new(3, 3, [(0, 0), (2, 1)])?;
        let second = BitBoard::new(3, 3, [(2, 1), (0, 0)])?;
        let other = BitBoard::new(3, 3, [(0, 0)])?;

        let mut cache = PolynomialCache::new();
        cache.insert(first.key(), Polynomial::from(vec![1]));

        assert!(cache.lookup(&second.key()).is_some());
        assert!(cache.lookup(&other.key()).is_none());
        Ok(())
    }
}

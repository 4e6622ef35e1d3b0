use std::collections::HashSet;

use proptest::prelude::*;
use pcmd::color::{ColorAllocator, PALETTE};

proptest! {
    /// Up to 11 acquires after a fresh (or freshly drained) pool are all
    /// distinct palette members.
    #[test]
    fn acquires_within_one_shuffle_are_distinct(
        seed in any::<u64>(),
        warmup_rounds in 0usize..3,
        take in 1usize..=11,
    ) {
        let palette = ColorAllocator::with_seed(seed);
        for _ in 0..warmup_rounds * PALETTE.len() {
            palette.acquire();
        }

        let codes: Vec<u8> = (0..take).map(|_| palette.acquire().code()).collect();
        let unique: HashSet<u8> = codes.iter().copied().collect();

        prop_assert_eq!(unique.len(), take);
        prop_assert!(codes.iter().all(|c| PALETTE.contains(c)));
        prop_assert_eq!(palette.reshuffles(), warmup_rounds as u64 + 1);
    }

    /// Any number of acquires only ever yields palette colors, and the
    /// reshuffle count is exactly the number of pool fills needed.
    #[test]
    fn reshuffle_count_tracks_pool_fills(seed in any::<u64>(), calls in 1usize..100) {
        let palette = ColorAllocator::with_seed(seed);
        for _ in 0..calls {
            prop_assert!(PALETTE.contains(&palette.acquire().code()));
        }

        let fills = calls.div_ceil(PALETTE.len()) as u64;
        prop_assert_eq!(palette.reshuffles(), fills);
        prop_assert_eq!(palette.remaining(), (PALETTE.len() - calls % PALETTE.len()) % PALETTE.len());
    }
}

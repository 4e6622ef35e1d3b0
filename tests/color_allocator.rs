use std::collections::HashSet;
use std::sync::Arc;

use pcmd::color::{ColorAllocator, ColorCode, PALETTE};

#[test]
fn pool_starts_empty_and_fills_on_first_acquire() {
    let palette = ColorAllocator::with_seed(7);
    assert_eq!(palette.remaining(), 0);
    assert_eq!(palette.reshuffles(), 0);

    let first = palette.acquire();
    assert!(PALETTE.contains(&first.code()));
    assert_eq!(palette.reshuffles(), 1);
    assert_eq!(palette.remaining(), PALETTE.len() - 1);
}

#[test]
fn eleven_acquires_hand_out_the_whole_palette_once() {
    let palette = ColorAllocator::with_seed(42);

    let codes: HashSet<u8> = (0..PALETTE.len()).map(|_| palette.acquire().code()).collect();

    let expected: HashSet<u8> = PALETTE.iter().copied().collect();
    assert_eq!(codes, expected);
    assert_eq!(palette.remaining(), 0);
    assert_eq!(palette.reshuffles(), 1);
}

#[test]
fn twelfth_acquire_reshuffles_and_stays_in_palette() {
    let palette = ColorAllocator::with_seed(3);
    for _ in 0..PALETTE.len() {
        palette.acquire();
    }

    let next = palette.acquire();

    assert!(PALETTE.contains(&next.code()));
    assert_eq!(palette.reshuffles(), 2);
    assert_eq!(palette.remaining(), PALETTE.len() - 1);
}

#[test]
fn same_seed_gives_same_order() {
    let a = ColorAllocator::with_seed(99);
    let b = ColorAllocator::with_seed(99);

    let seq_a: Vec<ColorCode> = (0..30).map(|_| a.acquire()).collect();
    let seq_b: Vec<ColorCode> = (0..30).map(|_| b.acquire()).collect();
    assert_eq!(seq_a, seq_b);
}

#[test]
fn concurrent_callers_never_share_a_color_within_one_shuffle() {
    let palette = Arc::new(ColorAllocator::new());

    let handles: Vec<_> = (0..PALETTE.len())
        .map(|_| {
            let palette = Arc::clone(&palette);
            std::thread::spawn(move || palette.acquire())
        })
        .collect();

    let codes: HashSet<ColorCode> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(codes.len(), PALETTE.len());
}

#[test]
fn color_code_paints_with_reset() {
    let green = ColorCode::from_code(32).unwrap();
    assert_eq!(green.paint("[web]"), "\x1b[32m[web]\x1b[0m");
    assert_eq!(green.to_string(), "32");
    assert!(ColorCode::from_code(31).is_none());
    assert_eq!(ColorCode::all().count(), PALETTE.len());
}

// src/color.rs

//! Prefix colors and the shared allocator that hands them out.
//!
//! The allocator keeps a stack of not-yet-assigned codes. The stack starts
//! empty; whenever a caller finds it empty, it is refilled with the whole
//! palette in random order. Codes are never given back, so two running tasks
//! can only share a color once all 11 codes have been handed out since the
//! last reshuffle.

use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::trace;

/// ANSI SGR foreground codes used for prefixes.
pub const PALETTE: [u8; 11] = [32, 33, 34, 35, 36, 91, 92, 93, 94, 95, 96];

/// A terminal foreground color taken from [`PALETTE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColorCode(u8);

impl ColorCode {
    /// Returns `None` for codes outside the palette.
    pub fn from_code(code: u8) -> Option<Self> {
        PALETTE.contains(&code).then_some(ColorCode(code))
    }

    pub fn code(self) -> u8 {
        self.0
    }

    /// Wrap `text` in this color followed by a reset.
    pub fn paint(self, text: &str) -> String {
        format!("\x1b[{}m{}\x1b[0m", self.0, text)
    }

    /// Every palette color, in palette order.
    pub fn all() -> impl Iterator<Item = ColorCode> {
        PALETTE.iter().copied().map(ColorCode)
    }
}

impl fmt::Display for ColorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug)]
struct PoolState {
    available: Vec<ColorCode>,
    rng: StdRng,
    reshuffles: u64,
}

impl PoolState {
    fn reshuffle(&mut self) {
        self.available.clear();
        self.available.extend(ColorCode::all());
        self.available.shuffle(&mut self.rng);
        self.reshuffles += 1;
        trace!(reshuffles = self.reshuffles, "color pool reshuffled");
    }
}

/// Thread-safe color pool shared by every task of one run.
///
/// Pass it around as `Arc<ColorAllocator>`; there is no global instance.
#[derive(Debug)]
pub struct ColorAllocator {
    state: Mutex<PoolState>,
}

impl ColorAllocator {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Deterministic shuffle order, for tests and reproducible output.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            state: Mutex::new(PoolState {
                available: Vec::with_capacity(PALETTE.len()),
                rng,
                reshuffles: 0,
            }),
        }
    }

    /// Take the next color, reshuffling the full palette first if the pool
    /// is empty. Never blocks on I/O and never fails.
    pub fn acquire(&self) -> ColorCode {
        let mut state = self.lock();
        loop {
            if let Some(color) = state.available.pop() {
                return color;
            }
            state.reshuffle();
        }
    }

    /// Colors left before the next reshuffle.
    pub fn remaining(&self) -> usize {
        self.lock().available.len()
    }

    /// How many times the pool has been filled, including the first time.
    pub fn reshuffles(&self) -> u64 {
        self.lock().reshuffles
    }

    // Every critical section leaves the pool consistent, so a poisoned lock
    // still guards valid state.
    fn lock(&self) -> MutexGuard<'_, PoolState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ColorAllocator {
    fn default() -> Self {
        Self::new()
    }
}

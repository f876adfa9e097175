use crate::constants::REVEAL_DURATION_SEC;
use fnv::FnvHashMap;

/// One-way latch driving a block's entrance animation.
///
/// Flips `false -> true` exactly once, the first time the block's visible
/// ratio reaches its threshold; scrolling the block out and back in never
/// resets it. The latch holds for the lifetime of the block's mount.
#[derive(Clone, Copy, Debug)]
pub struct RevealLatch {
    revealed: bool,
    threshold: f32,
}

impl RevealLatch {
    pub fn new(threshold: f32) -> Self {
        Self {
            revealed: false,
            threshold,
        }
    }

    pub fn revealed(&self) -> bool {
        self.revealed
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Feed one visibility sample. Returns `true` only on the single
    /// transition, so the caller starts the entrance animation exactly once.
    pub fn observe(&mut self, visible_ratio: f32) -> bool {
        if !self.revealed && visible_ratio >= self.threshold {
            self.revealed = true;
            return true;
        }
        false
    }
}

/// Reveal latches for every observed block, keyed by block id.
#[derive(Debug, Default)]
pub struct RevealSet {
    latches: FnvHashMap<String, RevealLatch>,
}

impl RevealSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, id: impl Into<String>, threshold: f32) {
        self.latches
            .entry(id.into())
            .or_insert_with(|| RevealLatch::new(threshold));
    }

    pub fn len(&self) -> usize {
        self.latches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.latches.is_empty()
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.latches.get(id).map(|l| l.revealed()).unwrap_or(false)
    }

    /// Returns `true` only when this sample flips the block's latch.
    pub fn observe(&mut self, id: &str, visible_ratio: f32) -> bool {
        match self.latches.get_mut(id) {
            Some(latch) => latch.observe(visible_ratio),
            None => false,
        }
    }
}

/// Attribute form of a reveal threshold, as written into `data-reveal` and
/// parsed back when the observers are wired. Round-trips through the markup
/// without loss for the threshold constants.
#[inline]
pub fn threshold_attr(threshold: f32) -> String {
    format!("{threshold}")
}

/// Progress of the fixed-duration entrance animation, clamped to [0, 1].
///
/// At runtime the entrance is a CSS transition whose duration the frontend
/// publishes from [`REVEAL_DURATION_SEC`]; this is the host-testable
/// definition of that ramp.
#[inline]
pub fn entrance_progress(elapsed_sec: f32) -> f32 {
    (elapsed_sec / REVEAL_DURATION_SEC).clamp(0.0, 1.0)
}

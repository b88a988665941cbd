//! Rotating highlight
//!
//! Cycles the active POI index on a fixed cadence. The index wraps modulo the
//! POI count; a single POI rotates onto itself.

/// Default milliseconds between highlight changes
pub const ROTATION_INTERVAL_MS: u32 = 3000;

/// Active index over a non-empty POI list
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rotation {
    active: usize,
    len: usize,
}

impl Rotation {
    /// Start at index 0; `None` for an empty list, which has nothing to rotate
    pub fn new(len: usize) -> Option<Self> {
        if len == 0 {
            None
        } else {
            Some(Self { active: 0, len })
        }
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Move the highlight to the next POI and return the new index
    pub fn advance(&mut self) -> usize {
        self.advance_by(1)
    }

    /// Move the highlight `steps` POIs forward and return the new index
    pub fn advance_by(&mut self, steps: u64) -> usize {
        // len fits in u64, and the remainder is below len
        let steps = (steps % self.len as u64) as usize;
        self.active = (self.active + steps) % self.len;
        self.active
    }
}

/// Converts elapsed wall-clock time into whole rotation ticks
///
/// Hosts without a native interval timer (tests, render loops that only know
/// frame deltas) feed elapsed milliseconds and get back how many ticks are
/// due. Leftover time carries into the next call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickClock {
    period_ms: u32,
    carry_ms: u64,
}

impl TickClock {
    pub fn new(period_ms: u32) -> Self {
        Self {
            period_ms: period_ms.max(1),
            carry_ms: 0,
        }
    }

    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }

    /// Advance by `elapsed_ms`, returning the number of ticks that fell due
    pub fn advance(&mut self, elapsed_ms: u64) -> u64 {
        let total = self.carry_ms.saturating_add(elapsed_ms);
        let period = u64::from(self.period_ms);
        self.carry_ms = total % period;
        total / period
    }

    pub fn reset(&mut self) {
        self.carry_ms = 0;
    }
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new(ROTATION_INTERVAL_MS)
    }
}

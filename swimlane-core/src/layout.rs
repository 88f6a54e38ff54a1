//! Vertical slot allocation for the step sequence

use crate::error::BuildError;

/// Forward-only allocator of vertical positions, one per step.
///
/// The slot list is fixed at construction from the canvas margins and the
/// configured spacing: `floor((top - bottom) / spacing) + 1` slots, starting
/// at `top` and decrementing by `spacing`. Running out of slots is an
/// explicit error rather than an overlapping diagram.
#[derive(Debug, Clone)]
pub struct PositionAllocator {
    top: f64,
    spacing: f64,
    slots: usize,
    used: usize,
}

impl PositionAllocator {
    pub fn new(top: f64, bottom: f64, spacing: f64) -> Self {
        debug_assert!(spacing > 0.0 && top > bottom);
        // Epsilon guards against 22.999999 where the quotient is exactly 23.
        let slots = (((top - bottom) / spacing) + 1e-9).floor() as usize + 1;
        Self {
            top,
            spacing,
            slots,
            used: 0,
        }
    }

    /// Total number of slots available to this allocator
    pub fn slots(&self) -> usize {
        self.slots
    }

    /// Slots not yet handed out
    pub fn remaining(&self) -> usize {
        self.slots - self.used
    }

    /// Next y position in strictly decreasing order.
    ///
    /// Fails with [`BuildError::SlotExhausted`] once every slot has been
    /// consumed; the error carries the zero-based step index that could not
    /// be placed.
    pub fn next(&mut self) -> Result<f64, BuildError> {
        if self.used >= self.slots {
            return Err(BuildError::SlotExhausted {
                step: self.used,
                slots: self.slots,
            });
        }
        let y = self.top - self.used as f64 * self.spacing;
        self.used += 1;
        Ok(y)
    }
}

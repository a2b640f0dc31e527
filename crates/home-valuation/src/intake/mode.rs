use super::domain::PricingMode;
use tracing::debug;

/// Tracks the active pricing mode. Switching never touches field values.
#[derive(Debug, Clone, Default)]
pub struct ModeController {
    mode: PricingMode,
}

impl ModeController {
    pub fn new(mode: PricingMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> PricingMode {
        self.mode
    }

    /// Returns true when the mode actually changed.
    pub fn set_mode(&mut self, mode: PricingMode) -> bool {
        if self.mode == mode {
            return false;
        }
        debug!(from = %self.mode, to = %mode, "pricing mode switched");
        self.mode = mode;
        true
    }
}

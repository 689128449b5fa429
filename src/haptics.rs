//! Tactile feedback on press

use tracing::trace;

/// Something that can emit a short tactile pulse
pub trait HapticFeedback {
    /// Medium-strength impact pulse
    fn impact(&self);
}

/// Used on platforms without a haptics engine
#[derive(Clone, Copy, Debug, Default)]
pub struct NoHaptics;

impl HapticFeedback for NoHaptics {
    fn impact(&self) {
        trace!("[UI] Haptic impact (no-op on this platform)");
    }
}

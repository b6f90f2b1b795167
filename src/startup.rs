use std::sync::atomic::{AtomicBool, Ordering};

/// `true` for the first caller only. Everything `init` wires up (listeners,
/// GPU surface, frame loop) must happen after this check.
#[inline]
pub fn claim_start(flag: &AtomicBool) -> bool {
    !flag.swap(true, Ordering::SeqCst)
}

//! Native (drops) and issued-currency values (components C2/C3).
//!
//! Both wrap the [`crate::decimal::Decimal`] engine and differ only in
//! construction validation and wire-form parsing. A process-wide strict-mode
//! flag lets test benches disable range checks without threading a context
//! object through every call site.

mod issued;
mod native;

pub use issued::IssuedValue;
pub use native::NativeValue;

use core::sync::atomic::{AtomicBool, Ordering};

static STRICT_MODE: AtomicBool = AtomicBool::new(true);

/// Enable or disable range-check enforcement for [`NativeValue`] and
/// [`IssuedValue`] construction. Defaults to strict (enabled). Intended for
/// test benches that need to build out-of-range values deliberately.
pub fn set_strict_mode(strict: bool) {
    STRICT_MODE.store(strict, Ordering::SeqCst);
}

/// Whether range checks are currently enforced.
pub fn is_strict_mode() -> bool {
    STRICT_MODE.load(Ordering::SeqCst)
}

/// Guards tests that flip [`set_strict_mode`] for the duration of the test,
/// since `#[test]` functions in this crate's test binary run concurrently in
/// one process and the flag is process-wide.
#[cfg(test)]
pub(crate) mod strict_mode_test_lock {
    extern crate std;
    use std::sync::{Mutex, MutexGuard};

    static LOCK: Mutex<()> = Mutex::new(());

    pub(crate) fn guard() -> MutexGuard<'static, ()> {
        LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_strict_mode_defaults_enabled() {
        assert!(is_strict_mode());
    }

    #[test]
    fn test_strict_mode_toggle() {
        let _guard = strict_mode_test_lock::guard();
        set_strict_mode(false);
        assert!(!is_strict_mode());
        set_strict_mode(true);
        assert!(is_strict_mode());
    }
}

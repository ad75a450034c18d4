//! Test utilities shared across crate-level unit tests.

use std::sync::{LazyLock, Mutex, MutexGuard};

use crate::app::{delete_app, get_apps};

static REGISTRY_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

/// Serializes tests that touch the process-wide app registry and starts them from an empty one.
pub fn registry_lock() -> MutexGuard<'static, ()> {
    let guard = REGISTRY_LOCK
        .lock()
        .unwrap_or_else(|poison| poison.into_inner());
    for app in get_apps() {
        let _ = delete_app(&app);
    }
    guard
}

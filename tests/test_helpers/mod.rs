//! Scoped environment overrides for settings tests.

use std::env;
use std::ffi::OsString;
use std::sync::{Mutex, MutexGuard, OnceLock};

static ENV_MUTEX: OnceLock<Mutex<()>> = OnceLock::new();

/// Restores the overridden variables when dropped.
///
/// Holding a guard also holds a process-wide lock, so tests that touch the
/// environment run one at a time.
pub struct EnvVarGuard {
    previous: Vec<(OsString, Option<OsString>)>,
    _lock: MutexGuard<'static, ()>,
}

impl EnvVarGuard {
    /// Applies `overrides`; `None` removes the variable.
    pub fn apply(overrides: &[(&str, Option<&str>)]) -> Self {
        let lock = ENV_MUTEX
            .get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        let previous = overrides
            .iter()
            .map(|&(key, value)| {
                let saved = env::var_os(key);
                // SAFETY: the lock held by this guard serializes every
                // environment mutation made through it.
                unsafe { write_var(OsString::from(key), value.map(OsString::from)) };
                (OsString::from(key), saved)
            })
            .collect();

        Self {
            previous,
            _lock: lock,
        }
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        for (key, value) in self.previous.drain(..).rev() {
            // SAFETY: the guard still holds the environment lock.
            unsafe { write_var(key, value) };
        }
    }
}

unsafe fn write_var(key: OsString, value: Option<OsString>) {
    // SAFETY: callers hold the environment lock.
    unsafe {
        match value {
            Some(new_value) => env::set_var(key, new_value),
            None => env::remove_var(key),
        }
    }
}

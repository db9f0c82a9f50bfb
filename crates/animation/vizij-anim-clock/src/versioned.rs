//! Versioned state container.
//!
//! One committed snapshot at a time, held as an `Arc`. Writers are serialized,
//! build the next version off to the side and publish it with a single
//! pointer swap. Readers clone the `Arc` and keep a snapshot that no later
//! write can touch.

use std::ops::Deref;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

/// Immutable committed version of `T`.
#[derive(Debug, PartialEq)]
pub struct Snapshot<T> {
    version: u64,
    value: T,
}

impl<T> Snapshot<T> {
    /// Monotonic version number; the initial value is version 0.
    #[inline]
    pub fn version(&self) -> u64 {
        self.version
    }
}

impl<T> Deref for Snapshot<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.value
    }
}

#[derive(Debug)]
pub struct Versioned<T> {
    current: RwLock<Arc<Snapshot<T>>>,
    // Held for the whole read-modify-publish sequence so writers never race.
    writer: Mutex<()>,
}

impl<T: Clone> Versioned<T> {
    pub fn new(value: T) -> Self {
        Self {
            current: RwLock::new(Arc::new(Snapshot { version: 0, value })),
            writer: Mutex::new(()),
        }
    }

    /// Snapshot valid at the moment of the call.
    ///
    /// A panic on another thread can only poison the lock between publishes,
    /// when the stored snapshot is already whole, so poisoning is ignored.
    pub fn read(&self) -> Arc<Snapshot<T>> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Apply `f` to a copy of the current value and publish the result as the
    /// next version. Returns whatever `f` returns.
    pub fn write<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let _serial = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let base = self.read();
        let mut next = base.value.clone();
        let out = f(&mut next);
        let snapshot = Arc::new(Snapshot {
            version: base.version.wrapping_add(1),
            value: next,
        });
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = snapshot;
        out
    }

    /// Version number of the currently committed snapshot.
    pub fn version(&self) -> u64 {
        self.read().version
    }
}

impl<T: Clone + Default> Default for Versioned<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

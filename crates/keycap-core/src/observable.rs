//! Shared observable cells backing the context store.
//!
//! An `Observable<T>` is a cheaply clonable handle; all clones see the same
//! value. Every `update`/`set` bumps a revision counter and then calls each
//! observer with a snapshot of the new value. Observers run after the write
//! lock is released, so they may read (or even write) the same cell.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock, Weak};

type Observer<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct Inner<T> {
    value: RwLock<T>,
    revision: AtomicU64,
    next_observer: AtomicU64,
    observers: Mutex<Vec<(u64, Observer<T>)>>,
}

pub struct Observable<T> {
    inner: Arc<Inner<T>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Clone + Send + Sync + 'static> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(Inner {
                value: RwLock::new(value),
                revision: AtomicU64::new(0),
                next_observer: AtomicU64::new(0),
                observers: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Snapshot of the current value.
    pub fn get(&self) -> T {
        self.read(T::clone)
    }

    pub fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        // A poisoned lock still holds a structurally valid value; keep serving it.
        let guard = self.inner.value.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    /// Mutate in place and notify observers.
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let (result, snapshot) = {
            let mut guard = self
                .inner
                .value
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            let result = f(&mut guard);
            (result, guard.clone())
        };
        self.inner.revision.fetch_add(1, Ordering::SeqCst);
        self.notify(&snapshot);
        result
    }

    pub fn set(&self, value: T) {
        self.update(|v| *v = value);
    }

    /// Number of writes since creation.
    pub fn revision(&self) -> u64 {
        self.inner.revision.load(Ordering::SeqCst)
    }

    /// Register an observer. It stays attached until the returned
    /// `Subscription` is dropped.
    #[must_use = "dropping the subscription detaches the observer"]
    pub fn subscribe(&self, observer: impl Fn(&T) + Send + Sync + 'static) -> Subscription {
        let id = self.inner.next_observer.fetch_add(1, Ordering::SeqCst);
        self.inner
            .observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Arc::new(observer)));

        let weak: Weak<Inner<T>> = Arc::downgrade(&self.inner);
        Subscription {
            detach: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner
                        .observers
                        .lock()
                        .unwrap_or_else(PoisonError::into_inner)
                        .retain(|(oid, _)| *oid != id);
                }
            })),
        }
    }

    pub fn observer_count(&self) -> usize {
        self.inner
            .observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn notify(&self, value: &T) {
        let observers: Vec<Observer<T>> = self
            .inner
            .observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, o)| Arc::clone(o))
            .collect();
        for observer in observers {
            observer(value);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.inner.value.read().unwrap_or_else(PoisonError::into_inner);
        f.debug_struct("Observable")
            .field("value", &*guard)
            .field("revision", &self.inner.revision.load(Ordering::SeqCst))
            .finish()
    }
}

/// Handle that detaches an observer when dropped.
pub struct Subscription {
    detach: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    /// Wrap an arbitrary teardown closure, for sources other than `Observable`.
    pub fn from_fn(detach: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            detach: Some(Box::new(detach)),
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("attached", &self.detach.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_bumps_revision_and_notifies() {
        let cell = Observable::new(1);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let _sub = cell.subscribe(move |v: &i32| sink.lock().unwrap().push(*v));

        cell.set(2);
        cell.update(|v| *v += 3);

        assert_eq!(cell.get(), 5);
        assert_eq!(cell.revision(), 2);
        assert_eq!(*seen.lock().unwrap(), vec![2, 5]);
    }

    #[test]
    fn test_clones_share_value() {
        let a = Observable::new(String::from("x"));
        let b = a.clone();
        b.set("y".into());
        assert_eq!(a.get(), "y");
    }

    #[test]
    fn test_drop_subscription_detaches() {
        let cell = Observable::new(0);
        let sub = cell.subscribe(|_| {});
        assert_eq!(cell.observer_count(), 1);
        drop(sub);
        assert_eq!(cell.observer_count(), 0);
    }

    #[test]
    fn test_observer_can_read_cell() {
        let cell = Observable::new(0);
        let reader = cell.clone();
        let seen = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&seen);
        let _sub = cell.subscribe(move |_| {
            *sink.lock().unwrap() = Some(reader.get());
        });
        cell.set(7);
        assert_eq!(*seen.lock().unwrap(), Some(7));
    }

    #[test]
    fn test_subscription_outliving_cell() {
        let cell = Observable::new(0);
        let sub = cell.subscribe(|_| {});
        drop(cell);
        drop(sub);
    }
}

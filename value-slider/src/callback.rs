//! Shared callback handles.

use std::{fmt, sync::Arc};

/// A cloneable callback that receives one argument.
///
/// Two handles compare equal when they point at the same closure, so
/// argument structs holding callbacks can still derive `PartialEq`.
pub struct CallbackWith<T, R = ()> {
    handler: Arc<dyn Fn(T) -> R + Send + Sync>,
}

impl<T, R> CallbackWith<T, R> {
    /// Create a callback handle from a closure.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(T) -> R + Send + Sync + 'static,
    {
        Self {
            handler: Arc::new(handler),
        }
    }

    /// Invoke the callback with an argument.
    pub fn call(&self, value: T) -> R {
        (self.handler)(value)
    }
}

impl<T, R, F> From<F> for CallbackWith<T, R>
where
    F: Fn(T) -> R + Send + Sync + 'static,
{
    fn from(handler: F) -> Self {
        Self::new(handler)
    }
}

impl<T, R> Clone for CallbackWith<T, R> {
    fn clone(&self) -> Self {
        Self {
            handler: Arc::clone(&self.handler),
        }
    }
}

impl<T, R> PartialEq for CallbackWith<T, R> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.handler, &other.handler)
    }
}

impl<T, R> Eq for CallbackWith<T, R> {}

impl<T, R> fmt::Debug for CallbackWith<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CallbackWith(..)")
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicI64, Ordering};

    use super::*;

    #[test]
    fn clones_share_identity() {
        let seen = Arc::new(AtomicI64::new(0));
        let sink = Arc::clone(&seen);
        let callback = CallbackWith::new(move |v: i64| sink.store(v, Ordering::SeqCst));
        let other = callback.clone();

        other.call(42);

        assert_eq!(seen.load(Ordering::SeqCst), 42);
        assert_eq!(callback, other);
        assert_ne!(callback, CallbackWith::new(|_: i64| {}));
    }
}

//! Reader/writer-locked state for components whose operations run
//! concurrently on the worker pool.

use std::sync::RwLock;

use crate::error::AppError;
use crate::result::AppResult;

/// State guarded by a reader/writer lock.
///
/// Access goes through closures so a guard never outlives the call. A lock
/// poisoned by a panicking writer is reported as
/// [`ErrorKind::LockPoisoned`](crate::error::ErrorKind::LockPoisoned)
/// instead of propagating the panic.
#[derive(Debug, Default)]
pub struct SharedState<T> {
    inner: RwLock<T>,
}

impl<T> SharedState<T> {
    /// Wrap `value`.
    pub fn new(value: T) -> Self {
        Self {
            inner: RwLock::new(value),
        }
    }

    /// Run `f` with shared access.
    pub fn read<R>(&self, f: impl FnOnce(&T) -> R) -> AppResult<R> {
        let guard = self
            .inner
            .read()
            .map_err(|_| AppError::lock_poisoned("Shared state lock poisoned (read)"))?;
        Ok(f(&guard))
    }

    /// Run `f` with exclusive access.
    pub fn write<R>(&self, f: impl FnOnce(&mut T) -> R) -> AppResult<R> {
        let mut guard = self
            .inner
            .write()
            .map_err(|_| AppError::lock_poisoned("Shared state lock poisoned (write)"))?;
        Ok(f(&mut guard))
    }

    /// Consume the wrapper and return the state.
    pub fn into_inner(self) -> AppResult<T> {
        self.inner
            .into_inner()
            .map_err(|_| AppError::lock_poisoned("Shared state lock poisoned"))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_concurrent_writes() {
        let state = Arc::new(SharedState::new(0u64));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let state = Arc::clone(&state);
                thread::spawn(move || {
                    for _ in 0..100 {
                        state.write(|n| *n += 1).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(state.read(|n| *n).unwrap(), 800);
    }

    #[test]
    fn test_poisoned_lock_is_an_error() {
        let state = Arc::new(SharedState::new(Vec::<u8>::new()));
        let writer = Arc::clone(&state);
        let _ = thread::spawn(move || {
            let _ = writer.write(|_| -> usize { panic!("writer failed") });
        })
        .join();

        let err = state.read(|v| v.len()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::LockPoisoned);
    }
}

use std::convert::Infallible;
use std::fmt;
use std::sync::{Arc, Mutex};

use crate::constants::ERR_POISONED_LOCK;
use crate::{BoundedPool, ResourceFactory, SharedLeased};

/// A thread-safe wrapper around [`BoundedPool`] for sharing one pool across threads.
///
/// This type acts as a cloneable handle to a shared pool instance: clones observe and
/// mutate the same idle set, and the pool stays alive as long as any handle exists.
/// All operations take `&self` and synchronize internally with a mutex.
///
/// The wrapper adds synchronization only; every contract of [`BoundedPool`] (LIFO
/// reuse, capacity bound, overflow discard, error transparency) carries over unchanged.
/// Note that a factory invoked on behalf of one thread runs while the pool lock is
/// held, so other threads wait out that construction.
///
/// # Example
///
/// ```rust
/// use std::thread;
///
/// use bounded_pool::SharedBoundedPool;
///
/// let pool = SharedBoundedPool::new(|| Vec::<u8>::with_capacity(1024), 4);
///
/// let worker_pool = pool.clone();
/// let worker = thread::spawn(move || {
///     let buffer = worker_pool.acquire();
///     worker_pool.release(buffer);
/// });
///
/// worker.join().unwrap();
/// assert_eq!(pool.len(), 1);
/// ```
pub struct SharedBoundedPool<F>
where
    F: ResourceFactory,
{
    /// The shared pool instance protected by a mutex for thread safety.
    inner: Arc<Mutex<BoundedPool<F>>>,
}

impl<F> From<BoundedPool<F>> for SharedBoundedPool<F>
where
    F: ResourceFactory,
{
    /// Wraps an existing pool, consuming it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bounded_pool::{BoundedPool, SharedBoundedPool};
    ///
    /// let mut pool = BoundedPool::new(|| 0_u32, 4);
    /// pool.prefill(2);
    ///
    /// let shared = SharedBoundedPool::from(pool);
    /// assert_eq!(shared.len(), 2);
    /// ```
    fn from(pool: BoundedPool<F>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(pool)),
        }
    }
}

impl<F> SharedBoundedPool<F>
where
    F: ResourceFactory,
{
    /// Creates a shared pool with an empty idle set.
    ///
    /// Equivalent to creating a [`BoundedPool`] and wrapping it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bounded_pool::SharedBoundedPool;
    ///
    /// let pool = SharedBoundedPool::new(String::new, 4);
    ///
    /// assert!(pool.is_empty());
    /// assert_eq!(pool.capacity(), 4);
    /// ```
    #[must_use]
    pub fn new(factory: F, capacity: usize) -> Self {
        Self::from(BoundedPool::new(factory, capacity))
    }

    /// Acquires a resource, constructing a new one if none is idle.
    ///
    /// See [`BoundedPool::try_acquire()`] for the full contract. The resource is
    /// removed from the shared idle set before this returns, so no two callers ever
    /// hold the same resource.
    ///
    /// # Errors
    ///
    /// Returns the factory's error unchanged if construction fails.
    pub fn try_acquire(&self) -> Result<F::Resource, F::Error> {
        self.inner.lock().expect(ERR_POISONED_LOCK).try_acquire()
    }

    /// Acquires a resource from the pool, leasing it back on drop.
    ///
    /// The guard owns its own handle to this pool, so it may be held alongside further
    /// acquisitions and sent to other threads when the resource type allows.
    ///
    /// # Errors
    ///
    /// Returns the factory's error unchanged if construction fails.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bounded_pool::{SharedBoundedPool, try_fn};
    ///
    /// let pool = SharedBoundedPool::new(try_fn(|| "9".parse::<u32>()), 4);
    ///
    /// {
    ///     let leased = pool.try_lease().unwrap();
    ///     assert_eq!(*leased, 9);
    /// } // Returned to the pool here.
    ///
    /// assert_eq!(pool.len(), 1);
    /// ```
    pub fn try_lease(&self) -> Result<SharedLeased<F>, F::Error> {
        let resource = self.try_acquire()?;
        Ok(SharedLeased::new(self.clone(), resource))
    }

    /// Returns a resource to the pool.
    ///
    /// See [`BoundedPool::release()`] for the full contract.
    pub fn release(&self, resource: F::Resource) {
        self.inner.lock().expect(ERR_POISONED_LOCK).release(resource);
    }

    /// Constructs resources into the idle set ahead of demand.
    ///
    /// See [`BoundedPool::try_prefill()`] for the full contract.
    ///
    /// # Errors
    ///
    /// Returns the factory's error unchanged if construction fails. Resources already
    /// added by the same call remain in the idle set.
    pub fn try_prefill(&self, count: usize) -> Result<usize, F::Error> {
        self.inner.lock().expect(ERR_POISONED_LOCK).try_prefill(count)
    }

    /// Returns the number of idle resources currently available for reuse.
    ///
    /// In the presence of other threads this is a snapshot that may be stale by the
    /// time it is observed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().expect(ERR_POISONED_LOCK).len()
    }

    /// Returns `true` if no idle resource is available.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().expect(ERR_POISONED_LOCK).is_empty()
    }

    /// Returns the maximum number of idle resources the pool retains.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.inner.lock().expect(ERR_POISONED_LOCK).capacity()
    }
}

impl<F> SharedBoundedPool<F>
where
    F: ResourceFactory<Error = Infallible>,
{
    /// Acquires a resource, constructing a new one if none is idle.
    ///
    /// Available when the factory cannot fail. See
    /// [`BoundedPool::acquire()`] for the full contract.
    pub fn acquire(&self) -> F::Resource {
        match self.try_acquire() {
            Ok(resource) => resource,
            Err(never) => match never {},
        }
    }

    /// Acquires a resource from the pool, leasing it back on drop.
    ///
    /// Available when the factory cannot fail. See
    /// [`try_lease()`][Self::try_lease] for the full contract.
    pub fn lease(&self) -> SharedLeased<F> {
        match self.try_lease() {
            Ok(leased) => leased,
            Err(never) => match never {},
        }
    }

    /// Constructs resources into the idle set ahead of demand.
    ///
    /// Available when the factory cannot fail. See
    /// [`BoundedPool::prefill()`] for the full contract.
    pub fn prefill(&self, count: usize) -> usize {
        match self.try_prefill(count) {
            Ok(added) => added,
            Err(never) => match never {},
        }
    }
}

impl<F> Clone for SharedBoundedPool<F>
where
    F: ResourceFactory,
{
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<F> fmt::Debug for SharedBoundedPool<F>
where
    F: ResourceFactory,
{
    #[cfg_attr(test, mutants::skip)] // Debug output is not part of the contract.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.try_lock() {
            Ok(pool) => f
                .debug_struct("SharedBoundedPool")
                .field("pool", &*pool)
                .finish_non_exhaustive(),
            Err(_) => f.debug_struct("SharedBoundedPool").finish_non_exhaustive(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::thread;

    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(SharedBoundedPool<fn() -> u32>: Send, Sync, Clone, std::fmt::Debug);

    #[test]
    fn smoke_test() {
        let pool = SharedBoundedPool::new(|| 0_u32, 2);

        let a = pool.acquire();
        let b = pool.acquire();

        pool.release(a);
        pool.release(b);
        pool.release(17);

        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn clones_share_one_idle_set() {
        let pool = SharedBoundedPool::new(|| 0_u32, 4);
        let clone = pool.clone();

        clone.release(5);

        assert_eq!(pool.len(), 1);
        assert_eq!(pool.acquire(), 5);
        assert!(clone.is_empty());
    }

    #[test]
    fn error_propagates_through_the_wrapper() {
        let pool = SharedBoundedPool::new(crate::try_fn(|| "oops".parse::<u32>()), 4);

        assert!(pool.try_acquire().is_err());
        assert!(pool.is_empty());
    }

    #[test]
    fn concurrent_churn_never_exceeds_capacity() {
        let factory_calls = Arc::new(AtomicUsize::new(0));
        let factory_calls_clone = Arc::clone(&factory_calls);

        let pool = SharedBoundedPool::new(
            move || {
                factory_calls_clone.fetch_add(1, Ordering::Relaxed);
                vec![0_u8; 64]
            },
            4,
        );

        let workers = (0..4)
            .map(|_| {
                let pool = pool.clone();
                thread::spawn(move || {
                    for _ in 0..100 {
                        let buffer = pool.acquire();
                        pool.release(buffer);
                        assert!(pool.len() <= pool.capacity());
                    }
                })
            })
            .collect::<Vec<_>>();

        for worker in workers {
            worker.join().unwrap();
        }

        assert!(pool.len() <= pool.capacity());

        // All resources are back; anything constructed beyond capacity was discarded.
        let created = factory_calls.load(Ordering::Relaxed);
        assert!(created >= 1);
        assert_eq!(pool.len(), created.min(pool.capacity()));
    }

    #[test]
    fn prefill_is_visible_to_all_clones() {
        let pool = SharedBoundedPool::new(|| 0_u32, 8);
        let clone = pool.clone();

        assert_eq!(pool.prefill(3), 3);
        assert_eq!(clone.len(), 3);
    }
}

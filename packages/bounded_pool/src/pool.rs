use std::convert::Infallible;
use std::fmt;

use crate::{BoundedPoolBuilder, Leased, ResourceFactory};

/// A bounded reuse cache for expensive-to-construct resources.
///
/// The pool hands out resources on request, constructing a new one via its
/// [`ResourceFactory`] only when no previously released resource is available. Released
/// resources are retained for reuse up to a fixed capacity; releases beyond the capacity
/// are silently dropped. Reuse is LIFO: the most recently released resource is handed
/// out first, which favors caches that are still warm.
///
/// The pool never inspects resource contents and performs no provenance check on
/// release, so any value of the resource type may be returned to it.
///
/// # Capacity
///
/// The capacity bounds only the *idle* resources retained inside the pool. Any number
/// of resources may be in circulation with callers at once. A capacity of zero is legal
/// and disables retention entirely: every acquisition constructs fresh and every
/// release discards its argument.
///
/// Memory for the idle set is allocated as resources are retained, not up front, so a
/// large capacity costs nothing until resources actually come back.
///
/// # Single-threaded design
///
/// All operations take `&mut self` and complete without blocking. For sharing one pool
/// across threads, see [`SharedBoundedPool`][crate::SharedBoundedPool].
///
/// # Example
///
/// ```rust
/// use bounded_pool::BoundedPool;
///
/// let mut pool = BoundedPool::new(|| Vec::<u8>::with_capacity(4096), 8);
///
/// let mut buffer = pool.acquire();
/// buffer.extend_from_slice(b"payload");
///
/// // Returning the buffer keeps it available for the next acquisition.
/// buffer.clear();
/// pool.release(buffer);
///
/// assert_eq!(pool.len(), 1);
/// ```
pub struct BoundedPool<F>
where
    F: ResourceFactory,
{
    /// Resources available for reuse. Acts as a stack: the most recently released
    /// resource is at the end and is reused first.
    idle: Vec<F::Resource>,

    /// Upper bound on `idle.len()`. Fixed at construction.
    capacity: usize,

    factory: F,
}

impl<F> BoundedPool<F>
where
    F: ResourceFactory,
{
    /// The capacity used by [`builder()`][Self::builder] when none is specified.
    pub const DEFAULT_CAPACITY: usize = 10;

    /// Creates a pool with an empty idle set.
    ///
    /// `capacity` is the maximum number of idle resources the pool will retain. Zero is
    /// a valid degenerate configuration that disables retention.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bounded_pool::BoundedPool;
    ///
    /// let pool = BoundedPool::new(String::new, 4);
    ///
    /// assert!(pool.is_empty());
    /// assert_eq!(pool.capacity(), 4);
    /// ```
    #[must_use]
    pub fn new(factory: F, capacity: usize) -> Self {
        Self {
            idle: Vec::new(),
            capacity,
            factory,
        }
    }

    /// Returns a builder for creating a pool with optional configuration.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bounded_pool::BoundedPool;
    ///
    /// let pool = BoundedPool::builder(String::new).capacity(2).build();
    ///
    /// assert_eq!(pool.capacity(), 2);
    /// ```
    pub fn builder(factory: F) -> BoundedPoolBuilder<F> {
        BoundedPoolBuilder::new(factory)
    }

    /// Acquires a resource, constructing a new one if none is idle.
    ///
    /// If the idle set is non-empty, the most recently released resource is removed and
    /// returned without touching the factory. Otherwise the factory is invoked exactly
    /// once. Ownership of the returned resource transfers to the caller; the pool no
    /// longer tracks it until a matching [`release()`][Self::release].
    ///
    /// # Errors
    ///
    /// Returns the factory's error unchanged if construction fails. The pool is left
    /// exactly as it was before the call.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bounded_pool::{BoundedPool, try_fn};
    ///
    /// let mut pool = BoundedPool::new(try_fn(|| "42".parse::<u32>()), 4);
    ///
    /// assert_eq!(pool.try_acquire(), Ok(42));
    /// ```
    pub fn try_acquire(&mut self) -> Result<F::Resource, F::Error> {
        match self.idle.pop() {
            Some(resource) => Ok(resource),
            None => self.factory.create(),
        }
    }

    /// Acquires a resource from the pool, leasing it back on drop.
    ///
    /// This is [`try_acquire()`][Self::try_acquire] with the return path automated: the
    /// guard dereferences to the resource and releases it back to this pool when
    /// dropped. Use [`Leased::detach()`] to keep the resource instead.
    ///
    /// # Errors
    ///
    /// Returns the factory's error unchanged if construction fails.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bounded_pool::{BoundedPool, try_fn};
    ///
    /// let mut pool = BoundedPool::new(try_fn(|| "9".parse::<u32>()), 4);
    ///
    /// {
    ///     let leased = pool.try_lease().unwrap();
    ///     assert_eq!(*leased, 9);
    /// } // Returned to the pool here.
    ///
    /// assert_eq!(pool.len(), 1);
    /// ```
    pub fn try_lease(&mut self) -> Result<Leased<'_, F>, F::Error> {
        let resource = self.try_acquire()?;
        Ok(Leased::new(self, resource))
    }

    /// Returns a resource to the pool.
    ///
    /// The resource is retained for reuse if the idle set is below capacity; otherwise
    /// it is dropped immediately. This never fails: the pool accepts any value of the
    /// resource type, including one it did not originally hand out.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bounded_pool::BoundedPool;
    ///
    /// let mut pool = BoundedPool::new(String::new, 1);
    ///
    /// pool.release("kept".to_string());
    /// pool.release("discarded".to_string());
    ///
    /// assert_eq!(pool.len(), 1);
    /// assert_eq!(pool.acquire(), "kept");
    /// ```
    pub fn release(&mut self, resource: F::Resource) {
        if self.idle.len() < self.capacity {
            self.idle.push(resource);
        }

        debug_assert!(self.idle.len() <= self.capacity);
    }

    /// Constructs resources into the idle set ahead of demand.
    ///
    /// Construction stops once `count` resources have been added or the idle set
    /// reaches capacity, whichever comes first. Returns the number of resources added.
    ///
    /// # Errors
    ///
    /// Returns the factory's error unchanged if construction fails. Resources already
    /// added by the same call remain in the idle set.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bounded_pool::{BoundedPool, try_fn};
    ///
    /// let mut pool = BoundedPool::new(try_fn(|| "0".parse::<u32>()), 4);
    ///
    /// assert_eq!(pool.try_prefill(10), Ok(4));
    /// assert_eq!(pool.len(), 4);
    /// ```
    pub fn try_prefill(&mut self, count: usize) -> Result<usize, F::Error> {
        let before = self.idle.len();
        let target = before.saturating_add(count).min(self.capacity);

        while self.idle.len() < target {
            let resource = self.factory.create()?;
            self.idle.push(resource);
        }

        Ok(self.idle.len().saturating_sub(before))
    }

    /// Returns the number of idle resources currently available for reuse.
    ///
    /// Resources in circulation with callers are not counted.
    #[must_use]
    pub fn len(&self) -> usize {
        self.idle.len()
    }

    /// Returns `true` if no idle resource is available, so the next acquisition will
    /// invoke the factory.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.idle.is_empty()
    }

    /// Returns the maximum number of idle resources the pool retains.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<F> BoundedPool<F>
where
    F: ResourceFactory<Error = Infallible>,
{
    /// Acquires a resource, constructing a new one if none is idle.
    ///
    /// Available when the factory cannot fail. See
    /// [`try_acquire()`][Self::try_acquire] for the full contract.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bounded_pool::BoundedPool;
    ///
    /// let mut pool = BoundedPool::new(|| vec![0_u8; 1024], 4);
    ///
    /// let buffer = pool.acquire();
    /// assert_eq!(buffer.len(), 1024);
    /// ```
    pub fn acquire(&mut self) -> F::Resource {
        match self.try_acquire() {
            Ok(resource) => resource,
            Err(never) => match never {},
        }
    }

    /// Acquires a resource from the pool, leasing it back on drop.
    ///
    /// Available when the factory cannot fail. See [`try_lease()`][Self::try_lease]
    /// for the full contract.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bounded_pool::BoundedPool;
    ///
    /// let mut pool = BoundedPool::new(|| String::from("fresh"), 4);
    ///
    /// {
    ///     let mut leased = pool.lease();
    ///     leased.push_str(" and reused");
    /// }
    ///
    /// assert_eq!(pool.acquire(), "fresh and reused");
    /// ```
    pub fn lease(&mut self) -> Leased<'_, F> {
        match self.try_lease() {
            Ok(leased) => leased,
            Err(never) => match never {},
        }
    }

    /// Constructs resources into the idle set ahead of demand.
    ///
    /// Available when the factory cannot fail. See
    /// [`try_prefill()`][Self::try_prefill] for the full contract.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bounded_pool::BoundedPool;
    ///
    /// let mut pool = BoundedPool::new(|| vec![0_u8; 1024], 8);
    ///
    /// assert_eq!(pool.prefill(3), 3);
    /// assert_eq!(pool.len(), 3);
    /// ```
    pub fn prefill(&mut self, count: usize) -> usize {
        match self.try_prefill(count) {
            Ok(added) => added,
            Err(never) => match never {},
        }
    }
}

impl<F> fmt::Debug for BoundedPool<F>
where
    F: ResourceFactory,
{
    #[cfg_attr(test, mutants::skip)] // Debug output is not part of the contract.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedPool")
            .field("idle", &self.idle.len())
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}

use std::fmt;

use crate::{BoundedPool, ResourceFactory, SharedBoundedPool};

/// Builder for creating an instance of [`BoundedPool`] or [`SharedBoundedPool`].
///
/// The factory is mandatory and supplied up front; the capacity is optional and
/// defaults to [`BoundedPool::DEFAULT_CAPACITY`].
///
/// # Examples
///
/// ```rust
/// use bounded_pool::BoundedPool;
///
/// // Default capacity.
/// let pool = BoundedPool::builder(String::new).build();
/// assert_eq!(pool.capacity(), 10);
///
/// // With a custom capacity.
/// let pool = BoundedPool::builder(String::new).capacity(2).build();
/// assert_eq!(pool.capacity(), 2);
/// ```
#[must_use]
pub struct BoundedPoolBuilder<F> {
    factory: F,
    capacity: usize,
}

impl<F> BoundedPoolBuilder<F>
where
    F: ResourceFactory,
{
    pub(crate) fn new(factory: F) -> Self {
        Self {
            factory,
            capacity: BoundedPool::<F>::DEFAULT_CAPACITY,
        }
    }

    /// Sets the maximum number of idle resources the pool retains.
    ///
    /// Zero is legal and disables retention.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bounded_pool::BoundedPool;
    ///
    /// let pool = BoundedPool::builder(String::new).capacity(0).build();
    /// assert_eq!(pool.capacity(), 0);
    /// ```
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Creates the configured [`BoundedPool`].
    #[must_use]
    pub fn build(self) -> BoundedPool<F> {
        BoundedPool::new(self.factory, self.capacity)
    }

    /// Creates the configured pool wrapped for thread-safe sharing.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bounded_pool::BoundedPool;
    ///
    /// let pool = BoundedPool::builder(String::new).capacity(2).build_shared();
    /// assert_eq!(pool.capacity(), 2);
    /// ```
    #[must_use]
    pub fn build_shared(self) -> SharedBoundedPool<F> {
        SharedBoundedPool::from(self.build())
    }
}

impl<F> fmt::Debug for BoundedPoolBuilder<F> {
    #[cfg_attr(test, mutants::skip)] // Debug output is not part of the contract.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedPoolBuilder")
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_capacity_matches_constant() {
        let pool = BoundedPool::builder(|| 0_u32).build();

        assert_eq!(pool.capacity(), BoundedPool::<fn() -> u32>::DEFAULT_CAPACITY);
    }

    #[test]
    fn custom_capacity_is_applied() {
        let pool = BoundedPool::builder(|| 0_u32).capacity(3).build();

        assert_eq!(pool.capacity(), 3);
    }

    #[test]
    fn build_shared_preserves_configuration() {
        let pool = BoundedPool::builder(|| 0_u32).capacity(3).build_shared();

        assert_eq!(pool.capacity(), 3);
        assert!(pool.is_empty());
    }
}

use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::constants::ERR_GUARD_EMPTY;
use crate::{BoundedPool, ResourceFactory, SharedBoundedPool};

/// A resource on loan from a [`BoundedPool`], returned to it on drop.
///
/// Dereferences to the resource. The return trip is automatic, which also means a
/// resource can only ever be given back once per acquisition; callers that want to keep
/// the resource call [`detach()`][Self::detach] instead.
///
/// The guard holds an exclusive borrow of the pool, so release the guard before using
/// the pool again.
///
/// # Example
///
/// ```rust
/// use bounded_pool::BoundedPool;
///
/// let mut pool = BoundedPool::new(|| Vec::<u8>::new(), 4);
///
/// {
///     let mut buffer = pool.lease();
///     buffer.extend_from_slice(b"scratch");
/// } // The buffer goes back into the pool here.
///
/// assert_eq!(pool.len(), 1);
/// ```
#[must_use]
pub struct Leased<'a, F>
where
    F: ResourceFactory,
{
    pool: &'a mut BoundedPool<F>,

    /// `Some` until the resource is detached or returned; `None` only during teardown.
    resource: Option<F::Resource>,
}

impl<'a, F> Leased<'a, F>
where
    F: ResourceFactory,
{
    pub(crate) fn new(pool: &'a mut BoundedPool<F>, resource: F::Resource) -> Self {
        Self {
            pool,
            resource: Some(resource),
        }
    }

    /// Takes ownership of the resource, preventing its return to the pool.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bounded_pool::BoundedPool;
    ///
    /// let mut pool = BoundedPool::new(|| String::from("mine now"), 4);
    ///
    /// let kept = pool.lease().detach();
    ///
    /// assert_eq!(kept, "mine now");
    /// assert!(pool.is_empty());
    /// ```
    #[must_use]
    pub fn detach(mut self) -> F::Resource {
        self.resource.take().expect(ERR_GUARD_EMPTY)
    }
}

impl<F> Deref for Leased<'_, F>
where
    F: ResourceFactory,
{
    type Target = F::Resource;

    fn deref(&self) -> &Self::Target {
        self.resource.as_ref().expect(ERR_GUARD_EMPTY)
    }
}

impl<F> DerefMut for Leased<'_, F>
where
    F: ResourceFactory,
{
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.resource.as_mut().expect(ERR_GUARD_EMPTY)
    }
}

impl<F> Drop for Leased<'_, F>
where
    F: ResourceFactory,
{
    fn drop(&mut self) {
        if let Some(resource) = self.resource.take() {
            self.pool.release(resource);
        }
    }
}

impl<F> fmt::Debug for Leased<'_, F>
where
    F: ResourceFactory,
{
    #[cfg_attr(test, mutants::skip)] // Debug output is not part of the contract.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Leased")
            .field("detached", &self.resource.is_none())
            .finish_non_exhaustive()
    }
}

/// A resource on loan from a [`SharedBoundedPool`], returned to it on drop.
///
/// The shared-pool counterpart of [`Leased`]. The guard keeps its own handle to the
/// pool, so it does not borrow from the caller and may outlive the handle it was
/// acquired from, move across threads (when the resource allows), and coexist with
/// further acquisitions.
///
/// # Example
///
/// ```rust
/// use bounded_pool::SharedBoundedPool;
///
/// let pool = SharedBoundedPool::new(|| Vec::<u8>::new(), 4);
///
/// {
///     let mut buffer = pool.lease();
///     buffer.extend_from_slice(b"scratch");
/// } // The buffer goes back into the pool here.
///
/// assert_eq!(pool.len(), 1);
/// ```
#[must_use]
pub struct SharedLeased<F>
where
    F: ResourceFactory,
{
    pool: SharedBoundedPool<F>,

    /// `Some` until the resource is detached or returned; `None` only during teardown.
    resource: Option<F::Resource>,
}

impl<F> SharedLeased<F>
where
    F: ResourceFactory,
{
    pub(crate) fn new(pool: SharedBoundedPool<F>, resource: F::Resource) -> Self {
        Self {
            pool,
            resource: Some(resource),
        }
    }

    /// Takes ownership of the resource, preventing its return to the pool.
    #[must_use]
    pub fn detach(mut self) -> F::Resource {
        self.resource.take().expect(ERR_GUARD_EMPTY)
    }
}

impl<F> Deref for SharedLeased<F>
where
    F: ResourceFactory,
{
    type Target = F::Resource;

    fn deref(&self) -> &Self::Target {
        self.resource.as_ref().expect(ERR_GUARD_EMPTY)
    }
}

impl<F> DerefMut for SharedLeased<F>
where
    F: ResourceFactory,
{
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.resource.as_mut().expect(ERR_GUARD_EMPTY)
    }
}

impl<F> Drop for SharedLeased<F>
where
    F: ResourceFactory,
{
    fn drop(&mut self) {
        if let Some(resource) = self.resource.take() {
            self.pool.release(resource);
        }
    }
}

impl<F> fmt::Debug for SharedLeased<F>
where
    F: ResourceFactory,
{
    #[cfg_attr(test, mutants::skip)] // Debug output is not part of the contract.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedLeased")
            .field("detached", &self.resource.is_none())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lease_returns_resource_on_drop() {
        let mut pool = BoundedPool::new(|| 7_u32, 4);

        {
            let leased = pool.lease();
            assert_eq!(*leased, 7);
        }

        assert_eq!(pool.len(), 1);
        assert_eq!(pool.acquire(), 7);
    }

    #[test]
    fn lease_mutations_survive_the_round_trip() {
        let mut pool = BoundedPool::new(Vec::<u8>::new, 4);

        {
            let mut leased = pool.lease();
            leased.push(1);
            leased.push(2);
        }

        assert_eq!(pool.acquire(), vec![1, 2]);
    }

    #[test]
    fn detach_keeps_resource_out_of_the_pool() {
        let mut pool = BoundedPool::new(|| 7_u32, 4);

        let value = pool.lease().detach();

        assert_eq!(value, 7);
        assert!(pool.is_empty());
    }

    #[test]
    fn lease_into_full_pool_discards_on_return() {
        let mut pool = BoundedPool::new(|| 0_u32, 0);

        {
            let leased = pool.lease();
            assert_eq!(*leased, 0);
        }

        // Zero capacity: the returned resource was discarded, not retained.
        assert!(pool.is_empty());
    }

    #[test]
    fn shared_lease_returns_resource_on_drop() {
        let pool = SharedBoundedPool::new(|| 7_u32, 4);

        {
            let leased = pool.lease();
            assert_eq!(*leased, 7);
        }

        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn shared_lease_outlives_the_acquiring_handle() {
        let pool = SharedBoundedPool::new(|| 7_u32, 4);

        let leased = {
            let handle = pool.clone();
            handle.lease()
        };

        drop(leased);
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn shared_detach_keeps_resource_out_of_the_pool() {
        let pool = SharedBoundedPool::new(|| 7_u32, 4);

        let value = pool.lease().detach();

        assert_eq!(value, 7);
        assert!(pool.is_empty());
    }
}

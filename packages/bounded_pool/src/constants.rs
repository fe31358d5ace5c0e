/// Panic message used when a lock is found poisoned.
///
/// The pool holds no partial state while its mutex is held that could be observed in a
/// broken condition, but a poisoned lock still means a factory or resource panicked
/// mid-operation, so we surface that loudly instead of guessing.
pub(crate) const ERR_POISONED_LOCK: &str =
    "shared pool lock was poisoned by a panic in another thread";

/// Panic message for the guard invariant: a lease holds its resource until it is
/// detached or dropped, so observing `None` outside teardown is a bug in this crate.
pub(crate) const ERR_GUARD_EMPTY: &str = "lease guard no longer holds its resource";

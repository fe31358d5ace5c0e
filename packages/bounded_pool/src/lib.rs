//! This package provides [`BoundedPool`], a bounded reuse cache for
//! expensive-to-construct resources.
//!
//! The pool amortizes construction cost by handing out previously released resources
//! before asking its factory for new ones, while bounding the memory retained by idle
//! resources: releases beyond the configured capacity are silently discarded.
//!
//! # Features
//!
//! - **Reuse before construction**: acquisition pops the most recently released
//!   resource (LIFO, so still-warm resources go first) and only falls back to the
//!   caller-supplied factory when the pool is empty.
//! - **Bounded retention**: a fixed capacity caps the idle set; overflow releases are
//!   dropped on the spot. Capacity zero is legal and disables retention entirely.
//! - **Capability-agnostic**: generic over the resource type, with no inspection of
//!   resource contents and no provenance check on release.
//! - **Error transparency**: a failing factory surfaces its own error unchanged, with
//!   the pool left untouched; the pool itself never originates errors.
//! - **Thread-safe and single-threaded variants**: [`BoundedPool`] for
//!   single-threaded use, [`SharedBoundedPool`] for sharing across threads.
//! - **Optional RAII returns**: [`Leased`] and [`SharedLeased`] guards send resources
//!   back automatically on drop.
//!
//! # Example
//!
//! ```rust
//! use bounded_pool::BoundedPool;
//!
//! // Buffers are expensive to construct, so retain up to four for reuse.
//! let mut pool = BoundedPool::new(|| Vec::<u8>::with_capacity(64 * 1024), 4);
//!
//! let mut buffer = pool.acquire();
//! buffer.extend_from_slice(b"first payload");
//!
//! buffer.clear();
//! pool.release(buffer);
//!
//! // The next acquisition reuses the same allocation instead of constructing anew.
//! let reused = pool.acquire();
//! assert!(reused.capacity() >= 64 * 1024);
//! ```
//!
//! Factories that can fail wrap their closure in [`try_fn()`] and acquire through the
//! `try_` methods:
//!
//! ```rust
//! use bounded_pool::{BoundedPool, try_fn};
//!
//! let mut pool = BoundedPool::new(try_fn(|| "1764".parse::<u32>()), 4);
//!
//! match pool.try_acquire() {
//!     Ok(value) => assert_eq!(value, 1764),
//!     Err(error) => panic!("construction failed: {error}"),
//! }
//! ```
//!
//! For sharing one pool across threads:
//!
//! ```rust
//! use std::thread;
//!
//! use bounded_pool::SharedBoundedPool;
//!
//! let pool = SharedBoundedPool::new(|| vec![0_u8; 1024], 4);
//!
//! let worker_pool = pool.clone();
//! let worker = thread::spawn(move || {
//!     let scratch = worker_pool.acquire();
//!     worker_pool.release(scratch);
//! });
//!
//! worker.join().unwrap();
//! ```

mod builder;
mod constants;
mod factory;
mod pool;
mod pooled;
mod shared_pool;

pub use builder::*;
pub use factory::*;
pub use pool::*;
pub use pooled::*;
pub use shared_pool::*;

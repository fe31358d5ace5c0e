//! Pooling resources whose construction can fail, via [`try_fn()`] and the
//! `try_`-family methods.

use bounded_pool::{BoundedPool, try_fn};

fn main() {
    println!("=== Fallible factories ===\n");

    // Construction parses configuration that may be malformed. The pool surfaces the
    // parse error unchanged instead of inventing its own error type.
    let mut sources = ["4096", "8192", "not a size"].into_iter();

    let mut pool = BoundedPool::new(
        try_fn(move || {
            let raw = sources.next().expect("example uses a finite script");
            raw.parse::<usize>().map(|len| vec![0_u8; len])
        }),
        2,
    );

    match pool.try_acquire() {
        Ok(buffer) => {
            println!("Constructed a {} byte buffer", buffer.len());
            pool.release(buffer);
        }
        Err(error) => println!("Construction failed: {error}"),
    }

    // The released buffer is reused; the factory is not consulted.
    let reused = pool.try_acquire().expect("idle resource needs no construction");
    println!("Reused a {} byte buffer without parsing anything", reused.len());

    // With the pool empty again, the next two constructions run the factory: one
    // succeeds, then the malformed entry fails and the error reaches the caller.
    let second = pool.try_acquire().expect("second source is well-formed");
    println!("Constructed a {} byte buffer", second.len());

    match pool.try_acquire() {
        Ok(buffer) => println!("Unexpected success: {} bytes", buffer.len()),
        Err(error) => println!("Construction failed as scripted: {error}"),
    }
}

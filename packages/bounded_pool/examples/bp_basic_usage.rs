//! Basic usage of [`BoundedPool`]: reuse of expensive buffers with bounded retention.

use bounded_pool::BoundedPool;

fn main() {
    println!("=== BoundedPool basic usage ===\n");

    // Each fresh buffer is a real allocation; the pool keeps up to four for reuse.
    let mut pool = BoundedPool::new(|| Vec::<u8>::with_capacity(64 * 1024), 4);

    let mut buffer = pool.acquire();
    println!("Acquired a fresh buffer with capacity {}", buffer.capacity());

    buffer.extend_from_slice(b"some payload");
    println!("Used it for {} bytes of payload", buffer.len());

    buffer.clear();
    pool.release(buffer);
    println!("Released it back; idle resources: {}", pool.len());

    let reused = pool.acquire();
    println!(
        "Acquired again without reallocating; capacity is still {}",
        reused.capacity()
    );
    pool.release(reused);

    // Releases beyond the capacity are silently discarded.
    for round in 0..8 {
        pool.release(vec![0_u8; 16]);
        println!("Release {round}: idle resources: {}", pool.len());
    }
}

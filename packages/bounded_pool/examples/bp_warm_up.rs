//! Warming a pool ahead of demand with `prefill`, so the first acquisitions on the
//! hot path construct nothing.

use bounded_pool::BoundedPool;

fn main() {
    println!("=== Pool warm-up ===\n");

    let mut pool = BoundedPool::new(|| vec![0_u8; 64 * 1024], 8);

    // Pay the construction cost up front, at startup.
    let added = pool.prefill(8);
    println!("Prefilled {added} buffers; idle resources: {}", pool.len());

    // The hot path is now allocation-free until the idle set is exhausted.
    for round in 0..3 {
        let buffer = pool.acquire();
        println!("Round {round}: served from the idle set ({} left)", pool.len());
        pool.release(buffer);
    }

    // Prefill stops at capacity, so topping up an already-full pool is a no-op.
    let added = pool.prefill(100);
    println!("\nTop-up added {added} buffers; idle resources: {}", pool.len());
}

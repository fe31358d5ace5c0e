//! Sharing one pool across threads with [`SharedBoundedPool`].

use std::thread;

use bounded_pool::SharedBoundedPool;

fn main() {
    println!("=== SharedBoundedPool across threads ===\n");

    let pool = SharedBoundedPool::new(|| vec![0_u8; 4096], 4);

    let workers = (0..4)
        .map(|worker_index| {
            let pool = pool.clone();
            thread::spawn(move || {
                for _ in 0..1000 {
                    let mut scratch = pool.acquire();
                    scratch.extend_from_slice(b"work item");
                    scratch.clear();
                    pool.release(scratch);
                }
                println!("Worker {worker_index} finished");
            })
        })
        .collect::<Vec<_>>();

    for worker in workers {
        worker.join().expect("worker thread panicked");
    }

    println!(
        "\nAll workers done; {} buffer(s) retained for reuse (capacity {})",
        pool.len(),
        pool.capacity()
    );
}

//! Bounded worker pool for independent, order-free install jobs.
//!
//! Used only for toolchain installs where each job writes to its own
//! install path, so jobs may run concurrently and finish in any order.
//! Results flow back over a channel and are handed to the caller on the
//! calling thread, so result handling stays single-threaded.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::mpsc;
use std::thread;

/// Number of concurrent install workers.
pub const DEFAULT_WORKERS: usize = 5;

/// Run `job` over `items` with at most `workers` threads.
///
/// `on_complete` is called on the calling thread as results arrive, in
/// completion order (unspecified). When `stop` becomes true, no new jobs
/// are started; jobs already running finish normally.
pub fn run_bounded<T: Sync>(
    items: &[T],
    workers: usize,
    stop: &AtomicBool,
    job: &(dyn Fn(&T) -> bool + Sync),
    mut on_complete: impl FnMut(&T, bool),
) {
    if items.is_empty() {
        return;
    }

    let next = AtomicUsize::new(0);
    let (tx, rx) = mpsc::channel::<(usize, bool)>();

    thread::scope(|scope| {
        for _ in 0..workers.min(items.len()) {
            let tx = tx.clone();
            let next = &next;
            scope.spawn(move || loop {
                if stop.load(Ordering::SeqCst) {
                    break;
                }
                let index = next.fetch_add(1, Ordering::SeqCst);
                if index >= items.len() {
                    break;
                }
                let ok = job(&items[index]);
                if tx.send((index, ok)).is_err() {
                    break;
                }
            });
        }
        drop(tx);

        for (index, ok) in rx {
            on_complete(&items[index], ok);
        }
    });
}

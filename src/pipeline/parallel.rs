use std::collections::BTreeMap;
use std::sync::mpsc;
use std::thread;

/// Process items in parallel with a bounded reorder buffer, emitting in input order.
///
/// At most `2 * jobs` items are in flight at once. With a single job everything
/// runs on the calling thread.
pub fn process_parallel<T, R, F>(items: Vec<T>, jobs: usize, process: F) -> Vec<R>
where
    T: Send,
    R: Send,
    F: Fn(T) -> R + Sync,
{
    let worker_count = jobs.max(1);
    let in_flight_limit = worker_count.saturating_mul(2).max(1);
    let mut ordered = Vec::with_capacity(items.len());
    let mut indexed = items.into_iter().enumerate();

    loop {
        let Some(first) = indexed.next() else {
            break;
        };

        let mut batch = Vec::with_capacity(in_flight_limit);
        batch.push(first);
        batch.extend(indexed.by_ref().take(in_flight_limit - 1));

        if worker_count == 1 {
            for (_index, item) in batch {
                ordered.push(process(item));
            }
            continue;
        }

        let (result_tx, result_rx) = mpsc::channel::<(usize, R)>();
        thread::scope(|scope| {
            for (index, item) in batch {
                let result_tx = result_tx.clone();
                let process = &process;
                scope.spawn(move || {
                    let processed = process(item);
                    let _ = result_tx.send((index, processed));
                });
            }
        });
        drop(result_tx);

        let pending: BTreeMap<usize, R> = result_rx.into_iter().collect();
        ordered.extend(pending.into_values());
    }

    ordered
}

/// Worker count to use when none was requested.
pub fn default_jobs() -> usize {
    thread::available_parallelism()
        .map(|count| count.get())
        .unwrap_or(1)
}

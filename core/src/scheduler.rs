//! Bounded fan-out of probes over an ordered target list.
//!
//! [`run_bounded`] starts at most `max_concurrency` workers on the tokio
//! runtime. Each worker claims the next unclaimed index from a shared
//! cursor, awaits the work for that target and keeps the outcome next to
//! the index it came from. Once every worker has drained the cursor the
//! outcomes are put back into input order, so completion order never leaks
//! out of this module.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::task::JoinSet;
use tracing::debug;

/// Runs `work` once for every target, at most `max_concurrency` at a time,
/// and returns `(target, outcome)` pairs in the order the targets were given.
///
/// A cap of `0` is treated as `1`. Returns only after every target has been
/// processed. A panic inside `work` is re-raised on the caller.
pub async fn run_bounded<T, F, Fut>(
    targets: Vec<T>,
    max_concurrency: usize,
    work: F,
) -> Vec<(T, bool)>
where
    T: Clone + Send + Sync + 'static,
    F: Fn(T) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = bool> + Send + 'static,
{
    if targets.is_empty() {
        return Vec::new();
    }

    let worker_count: usize = max_concurrency.max(1).min(targets.len());
    let targets: Arc<[T]> = targets.into();
    let cursor: Arc<AtomicUsize> = Arc::new(AtomicUsize::new(0));
    let work: Arc<F> = Arc::new(work);

    debug!("dispatching {} targets over {worker_count} workers", targets.len());

    let mut workers: JoinSet<Vec<(usize, bool)>> = JoinSet::new();
    for _ in 0..worker_count {
        let targets = Arc::clone(&targets);
        let cursor = Arc::clone(&cursor);
        let work = Arc::clone(&work);

        workers.spawn(async move {
            let mut done: Vec<(usize, bool)> = Vec::new();
            loop {
                let idx: usize = cursor.fetch_add(1, Ordering::Relaxed);
                let Some(target) = targets.get(idx).cloned() else {
                    break;
                };
                done.push((idx, work(target).await));
            }
            done
        });
    }

    let mut outcomes: Vec<Option<bool>> = vec![None; targets.len()];
    while let Some(joined) = workers.join_next().await {
        match joined {
            Ok(done) => {
                for (idx, outcome) in done {
                    outcomes[idx] = Some(outcome);
                }
            }
            Err(e) if e.is_panic() => std::panic::resume_unwind(e.into_panic()),
            Err(e) => panic!("scheduler worker was cancelled: {e}"),
        }
    }

    targets
        .iter()
        .cloned()
        .zip(outcomes)
        .map(|(target, outcome)| match outcome {
            Some(outcome) => (target, outcome),
            None => unreachable!("every index is claimed by exactly one worker"),
        })
        .collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Mutex;
    use std::time::Duration;

    #[tokio::test]
    async fn empty_input_yields_empty_output() {
        let results = run_bounded(Vec::<u32>::new(), 4, |_| async { true }).await;
        assert!(results.is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn every_target_runs_exactly_once() {
        for (n, cap) in [(1usize, 1usize), (7, 3), (50, 50), (254, 50), (10, 100), (5, 0)] {
            let calls = Arc::new(AtomicUsize::new(0));
            let seen = Arc::new(Mutex::new(HashSet::new()));
            let targets: Vec<usize> = (0..n).collect();

            let counter = Arc::clone(&calls);
            let seen_ref = Arc::clone(&seen);
            let results = run_bounded(targets.clone(), cap, move |t| {
                counter.fetch_add(1, Ordering::SeqCst);
                let first_visit = seen_ref.lock().unwrap().insert(t);
                async move { first_visit && t % 2 == 0 }
            })
            .await;

            assert_eq!(calls.load(Ordering::SeqCst), n, "n={n} cap={cap}");
            assert_eq!(results.len(), n);
            let order: Vec<usize> = results.iter().map(|(t, _)| *t).collect();
            assert_eq!(order, targets);
            assert!(results.iter().all(|(t, ok)| *ok == (t % 2 == 0)));
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn output_follows_input_not_completion_order() {
        // Earlier targets sleep longer, so they finish last.
        let targets: Vec<u64> = (0..8).collect();
        let results = run_bounded(targets, 8, |t| async move {
            tokio::time::sleep(Duration::from_millis((8 - t) * 15)).await;
            t == 0 || t == 5
        })
        .await;

        assert_eq!(
            results,
            vec![
                (0, true),
                (1, false),
                (2, false),
                (3, false),
                (4, false),
                (5, true),
                (6, false),
                (7, false),
            ]
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn in_flight_work_never_exceeds_cap() {
        let in_flight = Arc::new(AtomicUsize::new(0));
        let peak = Arc::new(AtomicUsize::new(0));

        let (now, max) = (Arc::clone(&in_flight), Arc::clone(&peak));
        let results = run_bounded((0..40).collect(), 5, move |_: u32| {
            let (now, max) = (Arc::clone(&now), Arc::clone(&max));
            async move {
                let current = now.fetch_add(1, Ordering::SeqCst) + 1;
                max.fetch_max(current, Ordering::SeqCst);
                tokio::time::sleep(Duration::from_millis(5)).await;
                now.fetch_sub(1, Ordering::SeqCst);
                true
            }
        })
        .await;

        assert_eq!(results.len(), 40);
        assert!(peak.load(Ordering::SeqCst) <= 5);
        assert_eq!(in_flight.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    #[should_panic(expected = "probe blew up")]
    async fn worker_panic_reaches_caller() {
        run_bounded(vec![1u8, 2, 3], 2, |t| async move {
            if t == 2 {
                panic!("probe blew up");
            }
            true
        })
        .await;
    }
}

//! Sequential batch operations with per-item results.
//!
//! Bulk actions (delete selected blogs, publish selected blogs, fetch fault
//! images) run one request at a time and never abort on a failed item; the
//! caller gets every outcome back and renders a single summary.

use std::future::Future;

#[derive(Debug, Clone, PartialEq)]
pub struct BatchItem<K, E> {
    pub key: K,
    pub result: Result<(), E>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BatchReport<K, E> {
    pub items: Vec<BatchItem<K, E>>,
}

impl<K, E> Default for BatchReport<K, E> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<K, E> BatchReport<K, E> {
    pub fn push(&mut self, key: K, result: Result<(), E>) {
        self.items.push(BatchItem { key, result });
    }

    pub fn total(&self) -> usize {
        self.items.len()
    }

    pub fn succeeded(&self) -> usize {
        self.items.iter().filter(|i| i.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.succeeded()
    }

    pub fn succeeded_keys(&self) -> impl Iterator<Item = &K> {
        self.items
            .iter()
            .filter(|i| i.result.is_ok())
            .map(|i| &i.key)
    }

    pub fn failures(&self) -> impl Iterator<Item = (&K, &E)> {
        self.items.iter().filter_map(|i| match &i.result {
            Ok(()) => None,
            Err(e) => Some((&i.key, e)),
        })
    }

    /// `Successfully deleted 2 out of 3 blog(s)`
    pub fn summary(&self, verb: &str, noun: &str) -> String {
        format!(
            "Successfully {} {} out of {} {}(s)",
            verb,
            self.succeeded(),
            self.total(),
            noun
        )
    }
}

/// Run `op` for every key in order, awaiting each before starting the next.
pub async fn run_batch<K, E, F, Fut>(keys: Vec<K>, mut op: F) -> BatchReport<K, E>
where
    K: Clone,
    F: FnMut(K) -> Fut,
    Fut: Future<Output = Result<(), E>>,
{
    let mut report = BatchReport::default();
    for key in keys {
        let result = op(key.clone()).await;
        report.push(key, result);
    }
    report
}

/// Percentage of processed items, for progress bars that count items rather
/// than bytes.
pub fn progress_percent(processed: usize, total: usize) -> u8 {
    if total == 0 {
        return 100;
    }
    ((processed.min(total) * 100) / total) as u8
}

#[cfg(test)]
pub(crate) mod test_exec {
    use std::future::Future;
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    /// Drive a future that never actually suspends.
    pub fn block_on<F: Future>(fut: F) -> F::Output {
        let mut cx = Context::from_waker(Waker::noop());
        let mut fut = pin!(fut);
        loop {
            if let Poll::Ready(out) = fut.as_mut().poll(&mut cx) {
                return out;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_exec::block_on;
    use super::*;

    #[test]
    fn test_partial_failure_is_aggregated() {
        let ids = vec![1, 2, 3];
        let report = block_on(run_batch(ids, |id| async move {
            if id == 2 {
                Err("HTTP 500".to_string())
            } else {
                Ok(())
            }
        }));
        assert_eq!(report.total(), 3);
        assert_eq!(report.succeeded(), 2);
        assert_eq!(report.failed(), 1);
        assert_eq!(
            report.summary("deleted", "blog"),
            "Successfully deleted 2 out of 3 blog(s)"
        );
        assert_eq!(report.succeeded_keys().copied().collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(report.failures().map(|(k, _)| *k).collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_runs_in_order() {
        let mut seen = Vec::new();
        let report: BatchReport<&str, ()> = block_on(run_batch(vec!["a", "b", "c"], |k| {
            seen.push(k);
            async { Ok(()) }
        }));
        assert_eq!(seen, vec!["a", "b", "c"]);
        assert_eq!(report.failed(), 0);
    }

    #[test]
    fn test_progress_percent() {
        assert_eq!(progress_percent(0, 5), 0);
        assert_eq!(progress_percent(2, 5), 40);
        assert_eq!(progress_percent(5, 5), 100);
        assert_eq!(progress_percent(0, 0), 100);
    }
}

use parking_lot::Mutex;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};

/// Ticket identifying one fetch issued by a view. Tickets are ordered by
/// issue time; only the newest one may apply its result.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// Result slot with latest-query-wins semantics. The owner issues a ticket
/// per fetch; when a fetch completes, its result is applied only if no newer
/// ticket has been issued since. A slow early response can therefore never
/// clobber a faster later one, without cancelling anything in flight.
///
/// A slot must belong to a single view instance (one viewer's sequence of
/// queries). Sharing one across unrelated viewers would apply one viewer's
/// result to another's query.
#[derive(Debug)]
pub struct ViewQuery<T> {
    issued: AtomicU64,
    slot: Mutex<Slot<T>>,
}

impl<T> Default for ViewQuery<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
struct Slot<T> {
    applied: u64,
    value: Option<T>,
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Slot { applied: 0, value: None }
    }
}

impl<T> ViewQuery<T> {
    pub fn new() -> Self {
        Self {
            issued: AtomicU64::new(0),
            slot: Mutex::new(Slot::default()),
        }
    }

    /// Issue a ticket for a fetch that is about to start. Issuing immediately
    /// supersedes every earlier ticket.
    pub fn begin(&self) -> Ticket {
        Ticket(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Apply a completed fetch's result. Returns whether it was applied;
    /// results for superseded tickets are discarded.
    pub fn complete(&self, ticket: Ticket, value: T) -> bool {
        if ticket.0 != self.issued.load(Ordering::SeqCst) {
            return false;
        }
        let mut slot = self.slot.lock();
        // A newer result may have landed between the check and the lock.
        if ticket.0 <= slot.applied {
            return false;
        }
        slot.applied = ticket.0;
        slot.value = Some(value);
        true
    }

    /// The most recent applied result, if any.
    pub fn current(&self) -> Option<T>
    where
        T: Clone,
    {
        self.slot.lock().value.clone()
    }

    /// Run one fetch through the slot: issue a ticket, await the future,
    /// apply under latest-wins. Returns the applied value, or `None` when the
    /// fetch was superseded while in flight.
    pub async fn run<F>(&self, fut: F) -> Option<T>
    where
        F: Future<Output = T>,
        T: Clone,
    {
        let ticket = self.begin();
        let value = fut.await;
        if self.complete(ticket, value.clone()) {
            Some(value)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tokio::sync::oneshot;

    #[test]
    fn t_default_slot_without_default_value_type() {
        // The value type has no Default; only the slot itself starts empty.
        #[derive(Clone, Debug, PartialEq)]
        struct Envelope(u8);
        let vq: ViewQuery<Envelope> = ViewQuery::default();
        assert_eq!(vq.current(), None);
        let t = vq.begin();
        assert!(vq.complete(t, Envelope(1)));
        assert_eq!(vq.current(), Some(Envelope(1)));
    }

    #[test]
    fn t_single_fetch_applies() {
        let vq = ViewQuery::new();
        let t = vq.begin();
        assert!(vq.complete(t, vec!["row"]));
        assert_eq!(vq.current(), Some(vec!["row"]));
    }

    #[test]
    fn t_superseded_result_discarded() {
        // Fetch 1 issued, then fetch 2 issued; 2 resolves first, 1 resolves
        // late. The view must end on result 2.
        let vq = ViewQuery::new();
        let t1 = vq.begin();
        let t2 = vq.begin();
        assert!(vq.complete(t2, "result 2"));
        assert!(!vq.complete(t1, "result 1"));
        assert_eq!(vq.current(), Some("result 2"));
    }

    #[test]
    fn t_late_issue_discards_even_before_newer_completes() {
        // The old result is dropped as soon as a newer ticket exists, not
        // only once the newer result lands.
        let vq: ViewQuery<&str> = ViewQuery::new();
        let t1 = vq.begin();
        let _t2 = vq.begin();
        assert!(!vq.complete(t1, "stale"));
        assert_eq!(vq.current(), None);
    }

    #[tokio::test]
    async fn t_overlapping_fetches_latest_wins() {
        let vq = Arc::new(ViewQuery::new());
        let (tx1, rx1) = oneshot::channel::<Vec<u32>>();
        let (tx2, rx2) = oneshot::channel::<Vec<u32>>();

        let first = {
            let vq = vq.clone();
            tokio::spawn(async move { vq.run(async { rx1.await.unwrap() }).await })
        };
        // Make sure the first ticket is issued before the second.
        tokio::task::yield_now().await;
        let second = {
            let vq = vq.clone();
            tokio::spawn(async move { vq.run(async { rx2.await.unwrap() }).await })
        };
        tokio::task::yield_now().await;

        // Second query resolves before the first.
        tx2.send(vec![2]).unwrap();
        let applied = second.await.unwrap();
        assert_eq!(applied, Some(vec![2]));

        tx1.send(vec![1]).unwrap();
        let stale = first.await.unwrap();
        assert_eq!(stale, None);

        assert_eq!(vq.current(), Some(vec![2]));
    }
}

//! Toast notifications as a publish/subscribe store.
//!
//! Producers call [`Notifier::notify`] (or a kind shorthand); any number of
//! consumers hold a `watch::Receiver` and render the latest snapshot. Toasts
//! expire after a fixed TTL and the queue is bounded, evicting the oldest.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::time::Instant;
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastKind {
    Success,
    Error,
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip)]
    pub expires_at: Instant,
}

impl Toast {
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Producer handle. Cheap to clone; all clones publish to the same queue.
#[derive(Debug, Clone)]
pub struct Notifier {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    tx: watch::Sender<Vec<Toast>>,
    ttl: Duration,
    capacity: usize,
}

impl Notifier {
    /// `capacity` is clamped to at least one toast.
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        let (tx, _rx) = watch::channel(Vec::new());
        Self {
            inner: Arc::new(Inner {
                tx,
                ttl,
                capacity: capacity.max(1),
            }),
        }
    }

    pub fn notify(&self, kind: ToastKind, title: &str, message: &str) -> Uuid {
        let toast = Toast {
            id: Uuid::new_v4(),
            kind,
            title: title.to_string(),
            message: message.to_string(),
            created_at: Utc::now(),
            expires_at: Instant::now() + self.inner.ttl,
        };
        let id = toast.id;
        let capacity = self.inner.capacity;

        self.inner.tx.send_modify(|toasts| {
            while toasts.len() >= capacity {
                toasts.remove(0);
            }
            toasts.push(toast);
        });
        debug!(%id, ?kind, title, "Toast published");

        // Inside a runtime each toast removes itself once its TTL elapses.
        // Without one, consumers rely on `snapshot` or `run_expiry`.
        if let Ok(handle) = Handle::try_current() {
            let notifier = self.clone();
            let ttl = self.inner.ttl;
            handle.spawn(async move {
                tokio::time::sleep(ttl).await;
                notifier.dismiss(id);
            });
        }
        id
    }

    pub fn success(&self, title: &str, message: &str) -> Uuid {
        self.notify(ToastKind::Success, title, message)
    }

    pub fn error(&self, title: &str, message: &str) -> Uuid {
        self.notify(ToastKind::Error, title, message)
    }

    pub fn info(&self, title: &str, message: &str) -> Uuid {
        self.notify(ToastKind::Info, title, message)
    }

    pub fn warning(&self, title: &str, message: &str) -> Uuid {
        self.notify(ToastKind::Warning, title, message)
    }

    /// Removes a toast before it expires. Returns whether it was present.
    pub fn dismiss(&self, id: Uuid) -> bool {
        self.inner.tx.send_if_modified(|toasts| {
            let before = toasts.len();
            toasts.retain(|t| t.id != id);
            toasts.len() != before
        })
    }

    /// Drops expired toasts, notifying subscribers only if something changed.
    /// Returns the number removed.
    pub fn prune_expired(&self) -> usize {
        let now = Instant::now();
        let mut removed = 0;
        self.inner.tx.send_if_modified(|toasts| {
            let before = toasts.len();
            toasts.retain(|t| !t.is_expired_at(now));
            removed = before - toasts.len();
            removed > 0
        });
        removed
    }

    /// Live toasts, oldest first.
    pub fn snapshot(&self) -> Vec<Toast> {
        let now = Instant::now();
        self.inner
            .tx
            .borrow()
            .iter()
            .filter(|t| !t.is_expired_at(now))
            .cloned()
            .collect()
    }

    pub fn subscribe(&self) -> watch::Receiver<Vec<Toast>> {
        self.inner.tx.subscribe()
    }

    /// Periodically prunes expired toasts. Runs until the task is dropped;
    /// spawn it on the runtime that owns the rendering surface.
    pub async fn run_expiry(self, period: Duration) {
        let mut ticker = tokio::time::interval(period);
        loop {
            ticker.tick().await;
            self.prune_expired();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notifier() -> Notifier {
        Notifier::new(Duration::from_secs(5), 3)
    }

    #[test]
    fn test_notify_appends_in_order() {
        let n = notifier();
        n.success("Login Successful", "Welcome!");
        n.error("Login Failed", "Invalid email or password");

        let toasts = n.snapshot();
        assert_eq!(toasts.len(), 2);
        assert_eq!(toasts[0].kind, ToastKind::Success);
        assert_eq!(toasts[1].kind, ToastKind::Error);
        assert_eq!(toasts[1].message, "Invalid email or password");
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let n = notifier();
        for i in 0..5 {
            n.info(&format!("t{i}"), "");
        }
        let titles: Vec<_> = n.snapshot().into_iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["t2", "t3", "t4"]);
    }

    #[test]
    fn test_dismiss() {
        let n = notifier();
        let keep = n.info("keep", "");
        let drop = n.warning("drop", "");
        assert!(n.dismiss(drop));
        assert!(!n.dismiss(drop));
        let ids: Vec<_> = n.snapshot().into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![keep]);
    }

    #[test]
    fn test_subscriber_sees_published_toast() {
        let n = notifier();
        let mut rx = n.subscribe();
        assert!(!rx.has_changed().unwrap());
        n.success("ok", "done");
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().len(), 1);
    }

    #[test]
    fn test_kind_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&ToastKind::Warning).unwrap(),
            "\"warning\""
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_toasts_expire_after_ttl() {
        let n = notifier();
        n.info("hello", "world");

        tokio::time::advance(Duration::from_secs(4)).await;
        assert_eq!(n.snapshot().len(), 1);
        assert_eq!(n.prune_expired(), 0);

        tokio::time::advance(Duration::from_secs(2)).await;
        assert!(n.snapshot().is_empty());
        n.prune_expired();
        assert!(n.subscribe().borrow().is_empty());
    }

    #[test]
    fn test_prune_without_runtime() {
        let n = Notifier::new(Duration::ZERO, 3);
        n.info("gone", "");
        assert!(n.snapshot().is_empty());
        assert_eq!(n.subscribe().borrow().len(), 1);
        assert_eq!(n.prune_expired(), 1);
        assert!(n.subscribe().borrow().is_empty());
        assert_eq!(n.prune_expired(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_toast_removes_itself_after_ttl() {
        let n = notifier();
        let mut rx = n.subscribe();
        n.info("hello", "world");
        assert_eq!(rx.borrow_and_update().len(), 1);

        rx.changed().await.unwrap();
        assert!(rx.borrow_and_update().is_empty());
        assert!(n.snapshot().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismissed_toast_timer_is_harmless() {
        let n = notifier();
        let first = n.info("first", "");
        n.dismiss(first);
        tokio::time::advance(Duration::from_secs(2)).await;
        n.info("second", "");

        // The first timer fires at 5s and finds nothing to remove.
        tokio::time::sleep(Duration::from_secs(4)).await;
        let titles: Vec<_> = n.snapshot().into_iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["second"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_expiry_task_notifies_subscribers() {
        let n = notifier();
        n.error("Login Failed", "Invalid email or password");
        let mut rx = n.subscribe();

        let sweeper = tokio::spawn(n.clone().run_expiry(Duration::from_secs(1)));
        rx.changed().await.unwrap();
        assert!(rx.borrow().is_empty());
        sweeper.abort();
    }
}

//! Transient notices shown in the corner of the page.

use std::time::Duration;

use dioxus::prelude::*;
use session::token::now_millis;
use session::{Notice, NoticeLevel};

use crate::platform::sleep;

/// How long a toast stays visible.
pub const TOAST_DURATION: Duration = Duration::from_secs(4);

/// How often the toaster looks for expired toasts.
const PRUNE_INTERVAL: Duration = Duration::from_millis(250);

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
    /// Epoch milliseconds after which the toast is dropped.
    pub expires_at: i64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u64,
    pub items: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, notice: Notice, now_millis: i64) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast {
            id,
            notice,
            expires_at: now_millis + TOAST_DURATION.as_millis() as i64,
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }

    pub fn has_expired(&self, now_millis: i64) -> bool {
        self.items.iter().any(|toast| toast.expires_at <= now_millis)
    }

    /// Drop every toast whose time is up.
    pub fn prune(&mut self, now_millis: i64) {
        self.items.retain(|toast| toast.expires_at > now_millis);
    }
}

/// Queue `notices` for display. Removal is driven by [`Toaster`], so it
/// happens even if the caller's component is gone by then.
pub(crate) fn show_notices(mut queue: Signal<ToastQueue>, notices: Vec<Notice>) {
    if notices.is_empty() {
        return;
    }
    let now = now_millis();
    let mut queue = queue.write();
    for notice in notices {
        queue.push(notice, now);
    }
}

fn toast_style(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Success => "padding: 1rem 1.25rem; border-radius: 12px; background: rgba(255,255,255,0.95); border: 1px solid rgba(34,197,94,0.3); color: #1f2937; font-weight: 500; cursor: pointer;",
        NoticeLevel::Error => "padding: 1rem 1.25rem; border-radius: 12px; background: rgba(255,255,255,0.95); border: 1px solid rgba(239,68,68,0.3); color: #1f2937; font-weight: 500; cursor: pointer;",
    }
}

/// Renders the toast queue provided by [`crate::SessionProvider`].
#[component]
pub fn Toaster() -> Element {
    let mut queue = use_context::<Signal<ToastQueue>>();

    // Lives as long as the provider, unlike the components raising notices
    use_future(move || async move {
        loop {
            sleep(PRUNE_INTERVAL).await;
            let now = now_millis();
            if queue.peek().has_expired(now) {
                queue.write().prune(now);
            }
        }
    });

    let items: Vec<(u64, &'static str, String)> = queue
        .read()
        .items
        .iter()
        .map(|toast| (toast.id, toast_style(toast.notice.level), toast.notice.message.clone()))
        .collect();

    rsx! {
        div {
            class: "toaster",
            style: "position: fixed; top: 1rem; right: 1rem; display: flex; flex-direction: column; gap: 0.5rem; z-index: 50;",
            for (id, style, message) in items {
                div {
                    key: "{id}",
                    class: "toast",
                    style: "{style}",
                    onclick: move |_| queue.write().dismiss(id),
                    "{message}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_push_and_dismiss() {
        let mut queue = ToastQueue::default();
        let first = queue.push(Notice::success("Logged out successfully"), 0);
        let second = queue.push(Notice::error("Failed to update profile"), 0);
        assert_ne!(first, second);
        assert_eq!(queue.items.len(), 2);

        queue.dismiss(first);
        assert_eq!(queue.items.len(), 1);
        assert_eq!(queue.items[0].id, second);

        // ids are not reused
        let third = queue.push(Notice::success("Welcome back, Ann!"), 0);
        assert!(third > second);
    }

    #[test]
    fn test_toasts_expire_on_their_own() {
        let mut queue = ToastQueue::default();
        let start = 1_700_000_000_000;
        queue.push(Notice::success("Welcome back, Ann!"), start);
        let later = queue.push(Notice::success("Logged out successfully"), start + 1_000);

        let lifetime = TOAST_DURATION.as_millis() as i64;
        assert!(!queue.has_expired(start + lifetime - 1));
        queue.prune(start + lifetime - 1);
        assert_eq!(queue.items.len(), 2);

        assert!(queue.has_expired(start + lifetime));
        queue.prune(start + lifetime);
        assert_eq!(queue.items.len(), 1);
        assert_eq!(queue.items[0].id, later);

        queue.prune(start + 1_000 + lifetime);
        assert!(queue.items.is_empty());
        assert!(!queue.has_expired(i64::MAX));
    }
}

//! Toast Notifications
//!
//! Success and error messages shown after mutations; each toast dismisses
//! itself after the configured duration.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Copy)]
pub struct Notifier {
    pub toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u32>,
    duration_ms: u32,
}

impl Notifier {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
            duration_ms,
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        let message = message.into();
        log::warn!("[NOTIFY] {}", message);
        self.push(ToastKind::Error, message);
    }

    pub fn dismiss(&self, id: u32) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }

    fn push(&self, kind: ToastKind, message: String) {
        let id = self.next_id.get_value().wrapping_add(1);
        self.next_id.set_value(id);
        self.toasts.update(|toasts| toasts.push(Toast { id, kind, message }));

        let notifier = *self;
        spawn_local(async move {
            TimeoutFuture::new(notifier.duration_ms).await;
            notifier.dismiss(id);
        });
    }
}

//! Notification context contract and accessor.

use leptos::*;
use serde::{Deserialize, Serialize};

use crate::ContextError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Severity of a storefront notification.
pub enum NotificationKind {
    /// Neutral information.
    Info,
    /// Completed action.
    Success,
    /// Recoverable problem.
    Warning,
    /// Failed action.
    Error,
}

impl Default for NotificationKind {
    fn default() -> Self {
        Self::Info
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Notification as held by the provider.
pub struct Notification {
    /// Provider-assigned identifier.
    pub id: u64,
    /// Severity.
    pub kind: NotificationKind,
    /// Optional heading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Body copy.
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Notification submitted through [`NotificationContext::notify`]; the provider assigns the id.
pub struct NotificationDraft {
    /// Severity.
    pub kind: NotificationKind,
    /// Optional heading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Body copy.
    pub message: String,
}

impl NotificationDraft {
    /// Creates a draft with no title.
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: None,
            message: message.into(),
        }
    }

    /// Sets the heading.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

#[derive(Clone, Copy)]
/// State and actions published by the storefront's notification provider.
pub struct NotificationContext {
    /// Notifications currently on screen, oldest first.
    pub notifications: RwSignal<Vec<Notification>>,
    /// Queues a notification.
    pub notify: Callback<NotificationDraft>,
    /// Removes a notification by id.
    pub dismiss: Callback<u64>,
}

/// Publishes `context` to descendant components.
pub fn provide_notifications(context: NotificationContext) {
    provide_context(context);
}

/// Returns the current [`NotificationContext`], or [`ContextError::MissingProvider`] outside a
/// provider.
pub fn try_use_notifications() -> Result<NotificationContext, ContextError> {
    use_context::<NotificationContext>().ok_or(ContextError::MissingProvider {
        context: "NotificationContext",
    })
}

/// Returns the current [`NotificationContext`].
///
/// # Panics
///
/// Panics if called outside the notification provider.
pub fn use_notifications() -> NotificationContext {
    try_use_notifications().expect("NotificationContext not provided")
}

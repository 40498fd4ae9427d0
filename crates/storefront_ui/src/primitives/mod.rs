//! Storefront feedback, control, and overlay primitives.

use leptos::ev::MouseEvent;
use leptos::*;

use crate::{Icon, IconName, IconSize};

mod controls;
mod feedback;
mod overlays;

pub use controls::{field_id_from_label, Button, IconButton, TextInput};
pub use feedback::{Alert, Badge};
pub use overlays::{use_dropdown, Dropdown, DropdownContext, DropdownDivider, DropdownItem};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared button variants.
pub enum ButtonVariant {
    /// Filled call-to-action button.
    Primary,
    /// Outlined secondary action.
    Secondary,
    /// Borderless button used in menus and toolbars.
    Ghost,
    /// Destructive action.
    Danger,
}

impl Default for ButtonVariant {
    fn default() -> Self {
        Self::Primary
    }
}

impl ButtonVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Ghost => "ghost",
            Self::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared button sizing tokens.
pub enum ButtonSize {
    /// Dense button.
    Sm,
    /// Default button.
    Md,
    /// Large button.
    Lg,
}

impl Default for ButtonSize {
    fn default() -> Self {
        Self::Md
    }
}

impl ButtonSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Alert severity.
pub enum AlertVariant {
    /// Neutral information.
    Info,
    /// Completed action.
    Success,
    /// Recoverable problem.
    Warning,
    /// Failed action.
    Error,
}

impl Default for AlertVariant {
    fn default() -> Self {
        Self::Info
    }
}

impl AlertVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    /// Warnings and errors interrupt; the rest are polite status updates.
    pub(crate) fn role(self) -> &'static str {
        match self {
            Self::Warning | Self::Error => "alert",
            Self::Info | Self::Success => "status",
        }
    }

    pub(crate) fn icon(self) -> IconName {
        match self {
            Self::Info => IconName::Info,
            Self::Success => IconName::CheckCircle,
            Self::Warning => IconName::Warning,
            Self::Error => IconName::ErrorCircle,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Badge color variants.
pub enum BadgeVariant {
    /// Muted gray.
    Neutral,
    /// Brand color.
    Primary,
    /// Positive status.
    Success,
    /// Attention status.
    Warning,
    /// Negative status.
    Danger,
}

impl Default for BadgeVariant {
    fn default() -> Self {
        Self::Neutral
    }
}

impl BadgeVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Primary => "primary",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Badge sizing tokens.
pub enum BadgeSize {
    /// Compact badge for counters.
    Sm,
    /// Default badge.
    Md,
}

impl Default for BadgeSize {
    fn default() -> Self {
        Self::Md
    }
}

impl BadgeSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

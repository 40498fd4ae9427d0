//! Minimal glyph set rendered by the storefront primitives.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Named glyphs available to primitives.
pub enum IconName {
    /// Informational marker.
    Info,
    /// Success check mark.
    CheckCircle,
    /// Warning triangle.
    Warning,
    /// Error marker.
    ErrorCircle,
    /// Close/dismiss cross.
    Close,
    /// Disclosure chevron.
    ChevronDown,
}

impl IconName {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::CheckCircle => "check-circle",
            Self::Warning => "warning",
            Self::ErrorCircle => "error-circle",
            Self::Close => "close",
            Self::ChevronDown => "chevron-down",
        }
    }

    fn glyph(self) -> &'static str {
        match self {
            Self::Info => "\u{2139}",
            Self::CheckCircle => "\u{2714}",
            Self::Warning => "\u{26A0}",
            Self::ErrorCircle => "\u{2716}",
            Self::Close => "\u{00D7}",
            Self::ChevronDown => "\u{25BE}",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Icon sizing tokens.
pub enum IconSize {
    /// Inline with dense text.
    Sm,
    /// Default.
    Md,
}

impl Default for IconSize {
    fn default() -> Self {
        Self::Md
    }
}

impl IconSize {
    fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
        }
    }
}

#[component]
/// Decorative glyph; always hidden from assistive technology.
pub fn Icon(icon: IconName, #[prop(default = IconSize::Md)] size: IconSize) -> impl IntoView {
    view! {
        <span
            class="ui-icon"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="icon"
            data-ui-icon=icon.token()
            data-ui-size=size.token()
        >
            {icon.glyph()}
        </span>
    }
}

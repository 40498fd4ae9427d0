//! Storefront UI primitive library.
//!
//! The crate owns the storefront's presentational Leptos primitives (alerts, badges, dropdowns,
//! and form inputs) and the stable `data-ui-*` DOM contract consumed by the storefront
//! stylesheet. The dropdown's open/close behavior lives in the headless [`disclosure`] module so
//! it can be driven and tested without a browser; [`dom`] adapts it to document events.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod disclosure;
pub mod dom;
mod icon;
mod primitives;

pub use disclosure::{
    BoundaryRegion, DisclosureController, DisclosureState, InteractionBus, InteractionHandler,
    InteractionListenerHandle, InteractionSource, PanelAlign, Point, Rect, RectRegion, TriggerSlot,
};
pub use dom::{DocumentInteractionSource, DocumentListenerHandle, NodeBoundary};
pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    field_id_from_label, use_dropdown, Alert, AlertVariant, Badge, BadgeSize, BadgeVariant, Button,
    ButtonSize, ButtonVariant, Dropdown, DropdownContext, DropdownDivider, DropdownItem,
    IconButton, TextInput,
};

/// Convenience imports for storefront crates consuming the primitive set.
pub mod prelude {
    pub use crate::{
        use_dropdown, Alert, AlertVariant, Badge, BadgeSize, BadgeVariant, Button, ButtonSize,
        ButtonVariant, DisclosureState, Dropdown, DropdownContext, DropdownDivider, DropdownItem,
        Icon, IconButton, IconName, IconSize, PanelAlign, TextInput,
    };
}

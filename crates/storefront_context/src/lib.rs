//! Context contracts and accessors for storefront-wide state.
//!
//! Providers for the cart and notifications live with the storefront application; this crate
//! only fixes the shape of what they publish and offers the accessors components use to read it.
//! Every accessor has a fallible `try_` form returning [`ContextError`] and a panicking form for
//! components that are always mounted under their provider.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod cart;
mod error;
pub mod notifications;

pub use cart::{provide_cart, try_use_cart, use_cart, CartContext, CartLine, QuantityUpdate};
pub use error::ContextError;
pub use notifications::{
    provide_notifications, try_use_notifications, use_notifications, Notification,
    NotificationContext, NotificationDraft, NotificationKind,
};

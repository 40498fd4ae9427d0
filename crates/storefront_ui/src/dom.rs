//! Browser adapters for [`crate::DisclosureController`].

use leptos::leptos_dom::helpers::WindowListenerHandle;
use leptos::{ev, html, logging, window_event_listener, NodeRef};
use wasm_bindgen::JsCast;

use crate::disclosure::{BoundaryRegion, InteractionHandler, InteractionSource};

#[derive(Debug, Clone, Copy, Default)]
/// Document-level `mousedown` source.
pub struct DocumentInteractionSource;

/// Registration handle returned by [`DocumentInteractionSource`]; removes the listener on drop.
pub struct DocumentListenerHandle {
    listener: Option<WindowListenerHandle>,
}

impl Drop for DocumentListenerHandle {
    fn drop(&mut self) {
        if let Some(listener) = self.listener.take() {
            listener.remove();
        }
    }
}

impl InteractionSource for DocumentInteractionSource {
    type Target = web_sys::EventTarget;
    type Handle = DocumentListenerHandle;

    fn subscribe(&self, handler: InteractionHandler<web_sys::EventTarget>) -> Self::Handle {
        let listener = window_event_listener(ev::mousedown, move |ev| {
            if let Some(target) = ev.target() {
                handler(&target);
            }
        });
        DocumentListenerHandle {
            listener: Some(listener),
        }
    }
}

#[derive(Clone, Copy)]
/// Boundary backed by a mounted root element; "inside" means DOM containment.
pub struct NodeBoundary {
    root: NodeRef<html::Div>,
}

impl NodeBoundary {
    /// Creates a boundary around the element bound to `root`.
    pub fn new(root: NodeRef<html::Div>) -> Self {
        Self { root }
    }
}

impl BoundaryRegion<web_sys::EventTarget> for NodeBoundary {
    fn contains(&self, target: &web_sys::EventTarget) -> bool {
        let Some(root) = self.root.get_untracked() else {
            logging::warn!("disclosure boundary is not mounted; treating interaction as outside");
            return false;
        };
        target
            .dyn_ref::<web_sys::Node>()
            .is_some_and(|node| root.contains(Some(node)))
    }
}

use super::*;
use crate::disclosure::{DisclosureController, DisclosureState, PanelAlign, TriggerSlot};
use crate::dom::{DocumentInteractionSource, NodeBoundary};

#[derive(Clone, Copy)]
/// Leptos context exposed to content rendered inside a [`Dropdown`] panel.
pub struct DropdownContext {
    /// Reactive open/closed state of the enclosing dropdown.
    pub state: Signal<DisclosureState>,
    /// Flips the enclosing dropdown.
    pub toggle: Callback<()>,
    /// Closes the enclosing dropdown.
    pub close: Callback<()>,
}

/// Returns the enclosing [`DropdownContext`], if any.
pub fn use_dropdown() -> Option<DropdownContext> {
    use_context::<DropdownContext>()
}

#[component]
/// Trigger + panel disclosure that dismisses itself on outside `mousedown`.
///
/// `trigger` replaces the default labelled button; clicks anywhere on custom trigger content
/// toggle the panel. The panel is mounted only while open, and the document listener exists only
/// while open.
pub fn Dropdown(
    #[prop(optional, into)] trigger: Option<ViewFn>,
    #[prop(into, default = "Menu".to_string())] label: String,
    #[prop(default = PanelAlign::Left)] align: PanelAlign,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let root_ref = create_node_ref::<html::Div>();
    let state = create_rw_signal(DisclosureState::Closed);

    let controller =
        DisclosureController::new(DocumentInteractionSource, NodeBoundary::new(root_ref));
    controller.on_change(move |next| state.set(next));
    let unmount = controller.clone();
    on_cleanup(move || unmount.dispose());
    let controller = store_value(controller);

    let toggle = Callback::new(move |_: ()| controller.with_value(DisclosureController::toggle));
    let close = Callback::new(move |_: ()| controller.with_value(DisclosureController::close));
    provide_context(DropdownContext {
        state: state.into(),
        toggle,
        close,
    });

    let trigger_view = match TriggerSlot::resolve(trigger, label) {
        TriggerSlot::Custom(content) => view! {
            <div data-ui-slot="trigger" on:click=move |_| toggle.call(())>
                {content.run()}
            </div>
        }
        .into_view(),
        TriggerSlot::Default { label } => view! {
            <Button
                ui_slot="trigger"
                variant=ButtonVariant::Secondary
                aria_haspopup="menu".to_string()
                aria_expanded=Signal::derive(move || state.get().is_open())
                trailing_icon=IconName::ChevronDown
                on_click=Callback::new(move |_| toggle.call(()))
            >
                {label}
            </Button>
        }
        .into_view(),
    };

    view! {
        <div
            node_ref=root_ref
            class=merge_layout_class("ui-dropdown", layout_class)
            id=id
            data-ui-primitive="true"
            data-ui-kind="dropdown"
            data-ui-state=move || state.get().token()
        >
            {trigger_view}
            <Show when=move || state.get().is_open() fallback=|| ()>
                <div
                    class="ui-dropdown-panel"
                    role="menu"
                    data-ui-slot="panel"
                    data-ui-align=align.token()
                >
                    {children()}
                </div>
            </Show>
        </div>
    }
}

#[component]
/// Selectable row inside a [`Dropdown`] panel.
///
/// Selecting closes the enclosing dropdown unless `close_on_select` is `false`.
pub fn DropdownItem(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(default = true)] close_on_select: bool,
    #[prop(optional)] on_select: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let dropdown = use_dropdown();
    view! {
        <Button
            layout_class=layout_class.unwrap_or("")
            role="menuitem"
            ui_slot="dropdown-item"
            variant=ButtonVariant::Ghost
            disabled=disabled
            on_click=Callback::new(move |ev| {
                if let Some(on_select) = on_select.as_ref() {
                    on_select.call(ev);
                }
                if close_on_select {
                    if let Some(dropdown) = dropdown {
                        dropdown.close.call(());
                    }
                }
            })
        >
            {children()}
        </Button>
    }
}

#[component]
/// Horizontal rule between dropdown item groups.
pub fn DropdownDivider(#[prop(optional)] layout_class: Option<&'static str>) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-dropdown-divider", layout_class)
            role="separator"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="dropdown-divider"
        ></div>
    }
}

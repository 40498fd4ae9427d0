use super::*;

/// Derives a stable input id from a field label, e.g. `"Email address"` -> `"field-email-address"`.
pub fn field_id_from_label(label: &str) -> String {
    let mut slug = String::with_capacity(label.len() + 6);
    slug.push_str("field");
    let mut pending_dash = true;
    for ch in label.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash {
                slug.push('-');
                pending_dash = false;
            }
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

#[component]
/// Shared button primitive with standardized states and icon slots.
pub fn Button(
    #[prop(default = ButtonVariant::Primary)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Md)] size: ButtonSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] role: Option<String>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] aria_expanded: MaybeSignal<bool>,
    #[prop(optional, into)] aria_haspopup: MaybeSignal<String>,
    #[prop(optional, into)] title: MaybeSignal<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] full_width: MaybeSignal<bool>,
    #[prop(optional)] leading_icon: Option<IconName>,
    #[prop(optional)] trailing_icon: Option<IconName>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-button", layout_class)
            id=id
            role=role
            aria-label=move || aria_label.get()
            aria-expanded=move || aria_expanded.get()
            aria-haspopup=move || aria_haspopup.get()
            title=move || title.get()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-full-width=move || bool_token(full_width.get())
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {leading_icon.map(|icon| view! { <Icon icon size=IconSize::Sm /> })}
            {children()}
            {trailing_icon.map(|icon| view! { <Icon icon size=IconSize::Sm /> })}
        </button>
    }
}

#[component]
/// Compact glyph-only button.
pub fn IconButton(
    icon: IconName,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-icon-button", layout_class)
            aria-label=move || aria_label.get()
            data-ui-primitive="true"
            data-ui-kind="icon-button"
            data-ui-slot=ui_slot
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            <Icon icon size=IconSize::Sm />
        </button>
    }
}

#[component]
/// Labelled text input with helper and error copy.
///
/// An `error` replaces the helper text and marks the field invalid. Without an explicit `id`,
/// one is derived from the label so the `<label for>` link still holds.
pub fn TextInput(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] helper_text: Option<String>,
    #[prop(optional, into)] error: MaybeSignal<Option<String>>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] autocomplete: Option<&'static str>,
    #[prop(optional)] node_ref: NodeRef<html::Input>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] full_width: bool,
    #[prop(optional)] on_input: Option<Callback<web_sys::Event>>,
) -> impl IntoView {
    let id = id.unwrap_or_else(|| {
        label
            .as_deref()
            .map(field_id_from_label)
            .unwrap_or_else(|| "field".to_string())
    });
    let message_id = format!("{id}-message");
    let error = Signal::derive(move || error.get());
    let has_error = move || error.with(Option::is_some);
    let message = move || error.get().or_else(|| helper_text.clone());
    let has_message = {
        let message = message.clone();
        move || message().is_some()
    };

    view! {
        <div
            class=merge_layout_class("ui-field-group", layout_class)
            data-ui-primitive="true"
            data-ui-kind="text-input"
            data-ui-full-width=bool_token(full_width)
            data-ui-invalid=move || bool_token(has_error())
        >
            {label.map(|label| {
                view! {
                    <label for=id.clone() data-ui-slot="label">
                        {label}
                    </label>
                }
            })}
            <input
                class="ui-field"
                id=id.clone()
                type=input_type.unwrap_or("text")
                placeholder=placeholder
                autocomplete=autocomplete
                node_ref=node_ref
                aria-invalid=move || bool_token(has_error())
                aria-describedby={
                    let message_id = message_id.clone();
                    let has_message = has_message.clone();
                    move || has_message().then(|| message_id.clone())
                }
                prop:value=move || value.get()
                disabled=move || disabled.get()
                data-ui-slot="control"
                data-ui-disabled=move || bool_token(disabled.get())
                on:input=move |ev| {
                    if let Some(on_input) = on_input.as_ref() {
                        on_input.call(ev);
                    }
                }
            />
            <Show when=has_message fallback=|| ()>
                <p
                    id=message_id.clone()
                    data-ui-slot="message"
                    data-ui-tone=move || if has_error() { "error" } else { "helper" }
                >
                    {message.clone()}
                </p>
            </Show>
        </div>
    }
}

use super::*;

#[component]
/// Inline feedback banner with an optional dismiss control.
pub fn Alert(
    #[prop(default = AlertVariant::Info)] variant: AlertVariant,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_dismiss: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-alert", layout_class)
            role=variant.role()
            data-ui-primitive="true"
            data-ui-kind="alert"
            data-ui-variant=variant.token()
        >
            <span data-ui-slot="icon">
                <Icon icon=variant.icon() size=IconSize::Md />
            </span>
            <div data-ui-slot="content">
                {title.map(|title| view! { <p data-ui-slot="title">{title}</p> })}
                <div data-ui-slot="message">{children()}</div>
            </div>
            {on_dismiss.map(|on_dismiss| {
                view! {
                    <IconButton
                        icon=IconName::Close
                        ui_slot="dismiss"
                        aria_label="Dismiss".to_string()
                        on_click=on_dismiss
                    />
                }
            })}
        </div>
    }
}

#[component]
/// Compact status badge primitive.
pub fn Badge(
    #[prop(default = BadgeVariant::Neutral)] variant: BadgeVariant,
    #[prop(default = BadgeSize::Md)] size: BadgeSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-badge", layout_class)
            data-ui-primitive="true"
            data-ui-kind="badge"
            data-ui-variant=variant.token()
            data-ui-size=size.token()
        >
            {children()}
        </span>
    }
}

use leptos::prelude::*;

/// One rounded rectangle in the workers group. Attribute pass-through only.
#[allow(non_snake_case)]
#[component]
pub fn WorkerItem(
    class: Option<&'static str>,
    transform: String,
    width: f64,
    height: f64,
) -> impl IntoView {
    view! {
        <rect
            rx="5"
            ry="5"
            y="0"
            class=class.unwrap_or_default()
            transform=transform
            width=width.to_string()
            height=height.to_string()
        />
    }
}

use leptos::prelude::*;

#[allow(non_snake_case)]
#[component]
pub fn Card(
    children: Children,
    #[prop(into, default = "".into())] class: Signal<String>,
) -> impl IntoView {
    view! {
        <div class=move || {
            format!(
                "max-w-fit p-6 bg-white border border-gray-200 rounded-lg shadow {}",
                class.get(),
            )
        }>{children()}</div>
    }
}

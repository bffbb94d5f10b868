use leptos::prelude::*;

#[allow(non_snake_case)]
#[component]
pub fn Containers() -> impl IntoView {
    view! { <div class="p-4">"Containers"</div> }
}

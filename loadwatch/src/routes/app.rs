use leptos::{either::Either, prelude::*};
use leptos_meta::*;

use crate::{
    components::tabs::TabBar,
    routes::{containers::Containers, workers::Workers},
};

#[allow(non_snake_case)]
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let (active_tab, set_active_tab) = signal(0usize);
    view! {
        <Title text="Loadwatch" />
        <Stylesheet id="leptos" href="/assets/style.css" />
        <div id="root" class="App min-h-screen bg-gray-50">
            <main class="p-4">
                <TabBar
                    tabs=vec!["Workers diagram", "Containers"]
                    active=active_tab
                    set_active=set_active_tab
                />
                {move || match active_tab.get() {
                    0 => Either::Left(view! { <Workers /> }),
                    _ => Either::Right(view! { <Containers /> }),
                }}
            </main>
        </div>
    }
}

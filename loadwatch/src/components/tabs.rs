use leptos::prelude::*;

/// Tab strip over the shell's locally owned tab state. The shell decides
/// which body to mount for the active index.
#[allow(non_snake_case)]
#[component]
pub fn TabBar(
    tabs: Vec<&'static str>,
    active: ReadSignal<usize>,
    set_active: WriteSignal<usize>,
) -> impl IntoView {
    let buttons = tabs
        .into_iter()
        .enumerate()
        .map(|(i, label)| {
            let class = move || {
                if active.get() == i {
                    "px-4 py-2 text-sm font-medium border-b-2 border-blue-500 text-blue-600"
                } else {
                    "px-4 py-2 text-sm font-medium border-b-2 border-transparent text-gray-500 hover:text-gray-700"
                }
            };
            view! {
                <button role="tab" class=class on:click=move |_| set_active.set(i)>
                    {label}
                </button>
            }
        })
        .collect_view();
    view! {
        <div role="tablist" class="flex space-x-2 mb-2 border-b border-gray-200">{buttons}</div>
    }
}

//! テキスト検索バー

use leptos::prelude::*;

#[component]
pub fn SearchBar<F>(on_search: F) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send + Sync,
{
    let (query, set_query) = signal(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_search(query.get_untracked());
    };

    view! {
        <form class="search-bar" on:submit=on_submit>
            <input
                type="text"
                placeholder="Or type search terms, e.g. blazer"
                prop:value=move || query.get()
                on:input=move |ev| {
                    set_query.set(event_target_value(&ev));
                }
            />
            <button
                type="submit"
                class="btn btn-primary"
                disabled=move || query.get().trim().is_empty()
            >
                "Search"
            </button>
        </form>
    }
}

//! カテゴリ管理パネル
//!
//! 追加フォームと、カテゴリごとのカード（インライン編集・削除）。

use gloo::console;
use image_terms_common::{Category, CategoryStore, Notice};
use leptos::prelude::*;

use crate::components::toast::ToastQueue;

/// インライン編集の状態（同時に編集できるのは1件）
#[derive(Clone, Copy)]
struct EditState {
    id: RwSignal<Option<String>>,
    name: RwSignal<String>,
    keywords: RwSignal<String>,
}

impl EditState {
    fn new() -> Self {
        Self {
            id: RwSignal::new(None),
            name: RwSignal::new(String::new()),
            keywords: RwSignal::new(String::new()),
        }
    }

    fn start(&self, category: &Category) {
        self.name.set(category.name.clone());
        self.keywords.set(category.keywords_text());
        self.id.set(Some(category.id.clone()));
    }

    fn cancel(&self) {
        self.id.set(None);
    }
}

#[component]
pub fn CategoryPanel(categories: RwSignal<CategoryStore>, toasts: ToastQueue) -> impl IntoView {
    let (new_name, set_new_name) = signal(String::new());
    let (new_keywords, set_new_keywords) = signal(String::new());
    let edit = EditState::new();

    let on_add = move |_: leptos::ev::MouseEvent| {
        let name = new_name.get_untracked();
        let keywords = new_keywords.get_untracked();
        let now = js_sys::Date::now() as u64;

        let outcome = categories.try_update(|store| store.add(&name, &keywords, now).cloned());
        match outcome {
            Some(Ok(category)) => {
                console::log!(format!("category added: {} ({})", category.name, category.id));
                set_new_name.set(String::new());
                set_new_keywords.set(String::new());
                toasts.push(Notice::category_added(&category));
            }
            Some(Err(e)) => toasts.push(Notice::from_error(&e)),
            None => {}
        }
    };

    let on_save = move |id: String| {
        let name = edit.name.get_untracked();
        let keywords = edit.keywords.get_untracked();

        let outcome = categories.try_update(|store| store.edit(&id, &name, &keywords).cloned());
        match outcome {
            Some(Ok(category)) => {
                edit.cancel();
                toasts.push(Notice::category_updated(&category));
            }
            Some(Err(e)) => toasts.push(Notice::from_error(&e)),
            None => {}
        }
    };

    let on_delete = move |id: String| {
        let removed = categories.try_update(|store| store.delete(&id)).flatten();
        if let Some(category) = removed {
            console::log!(format!("category deleted: {}", category.id));
            if edit.id.get_untracked().as_deref() == Some(category.id.as_str()) {
                edit.cancel();
            }
            toasts.push(Notice::category_deleted(&category));
        }
    };

    view! {
        <div class="category-panel">
            <div class="card">
                <h3>"Add New Category"</h3>
                <div class="form-grid">
                    <div class="form-group">
                        <label for="category-name">"Category Name"</label>
                        <input
                            type="text"
                            id="category-name"
                            placeholder="e.g., Sports & Recreation"
                            prop:value=move || new_name.get()
                            on:input=move |ev| set_new_name.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="category-keywords">"Keywords (comma-separated)"</label>
                        <input
                            type="text"
                            id="category-keywords"
                            placeholder="e.g., sports, athletic, fitness, competition"
                            prop:value=move || new_keywords.get()
                            on:input=move |ev| set_new_keywords.set(event_target_value(&ev))
                        />
                    </div>
                </div>
                <button class="btn btn-primary" on:click=on_add>"+ Add Category"</button>
            </div>

            <div class="category-list">
                <For
                    each=move || categories.with(|store| store.list().to_vec())
                    key=|category| (category.id.clone(), category.name.clone(), category.keywords.clone())
                    children=move |category| view! {
                        <CategoryCard
                            category=category
                            edit=edit
                            on_save=on_save
                            on_delete=on_delete
                        />
                    }
                />
            </div>
        </div>
    }
}

#[component]
fn CategoryCard<FS, FD>(
    category: Category,
    edit: EditState,
    on_save: FS,
    on_delete: FD,
) -> impl IntoView
where
    FS: Fn(String) + 'static + Clone + Send + Sync,
    FD: Fn(String) + 'static + Clone + Send + Sync,
{
    let is_editing = {
        let id = category.id.clone();
        move || edit.id.with(|current| current.as_deref() == Some(id.as_str()))
    };
    let category = StoredValue::new(category);

    view! {
        <div class="card category-card">
            <Show
                when=is_editing
                fallback=move || view! {
                    <div class="category-header">
                        <h3>{category.with_value(|c| c.name.clone())}</h3>
                        <div class="category-actions">
                            <button
                                class="btn btn-secondary btn-small"
                                on:click=move |_| category.with_value(|c| edit.start(c))
                            >
                                "Edit"
                            </button>
                            <button
                                class="btn btn-danger btn-small"
                                on:click={
                                    let on_delete = on_delete.clone();
                                    move |_| on_delete(category.with_value(|c| c.id.clone()))
                                }
                            >
                                "Delete"
                            </button>
                        </div>
                    </div>
                    <div class="badges">
                        {category.with_value(|c| {
                            c.keywords.iter().map(|keyword| view! {
                                <span class="badge badge-secondary">{keyword.clone()}</span>
                            }).collect_view()
                        })}
                    </div>
                }
            >
                <div class="form-grid">
                    <div class="form-group">
                        <label>"Category Name"</label>
                        <input
                            type="text"
                            prop:value=move || edit.name.get()
                            on:input=move |ev| edit.name.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label>"Keywords"</label>
                        <input
                            type="text"
                            prop:value=move || edit.keywords.get()
                            on:input=move |ev| edit.keywords.set(event_target_value(&ev))
                        />
                    </div>
                </div>
                <div class="category-actions">
                    <button
                        class="btn btn-primary btn-small"
                        on:click={
                            let on_save = on_save.clone();
                            move |_| on_save(category.with_value(|c| c.id.clone()))
                        }
                    >
                        "Save"
                    </button>
                    <button class="btn btn-tertiary btn-small" on:click=move |_| edit.cancel()>
                        "Cancel"
                    </button>
                </div>
            </Show>
        </div>
    }
}

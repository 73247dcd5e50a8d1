//! トースト通知コンポーネント

use gloo::timers::callback::Timeout;
use image_terms_common::Notice;
use leptos::prelude::*;

/// 自動で消えるまでの時間
const TOAST_DURATION_MS: u32 = 4000;

#[derive(Clone, PartialEq)]
pub struct ToastItem {
    pub id: u64,
    pub notice: Notice,
}

/// 表示中のトースト一覧
#[derive(Clone, Copy)]
pub struct ToastQueue {
    items: RwSignal<Vec<ToastItem>>,
    next_id: StoredValue<u64>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn push(&self, notice: Notice) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.items.update(|items| items.push(ToastItem { id, notice }));

        let queue = *self;
        Timeout::new(TOAST_DURATION_MS, move || queue.dismiss(id)).forget();
    }

    pub fn dismiss(&self, id: u64) {
        let _ = self.items.try_update(|items| items.retain(|t| t.id != id));
    }

    pub fn items(&self) -> ReadSignal<Vec<ToastItem>> {
        self.items.read_only()
    }
}

#[component]
pub fn Toaster(toasts: ToastQueue) -> impl IntoView {
    view! {
        <div class="toaster">
            <For
                each=move || toasts.items().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=format!("toast {}", toast.notice.kind.as_str())
                            on:click=move |_| toasts.dismiss(id)
                        >
                            <strong>{toast.notice.title.clone()}</strong>
                            <p>{toast.notice.description.clone()}</p>
                        </div>
                    }
                }
            />
        </div>
    }
}

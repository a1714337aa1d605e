//! Category Tab Bar Component
//!
//! "work" / "travel" switch in the header.

use leptos::prelude::*;
use leptos::task::spawn_local;
use crate::models::Category;
use crate::commands;
use crate::store::{store_apply_result, use_app_store, AppStateStoreFields};

#[component]
pub fn CategoryTabBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="category-tab-bar">
            {[Category::Work, Category::Travel].into_iter().map(|category| {
                let is_active = move || store.active_category().get() == category;
                view! {
                    <button
                        class=move || if is_active() { "category-tab active" } else { "category-tab" }
                        on:click=move |_| {
                            spawn_local(async move {
                                store_apply_result(&store, commands::set_active_category(category).await);
                            });
                        }
                    >
                        {category.as_str()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

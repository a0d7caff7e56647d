use crate::auth::use_auth;
use crate::closet::use_closet;
use crate::components::icons::ArrowLeft;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use leptos::prelude::*;
use throwafit::Category;

/// 单个分类的全部衣物；选中后放入预览并回到衣橱页
#[component]
pub fn CategoryPage(category: Category) -> impl IntoView {
    let auth = use_auth();
    let closet = use_closet();
    let router = use_router();

    // 直接打开此页面时衣橱可能尚未加载
    Effect::new(move |_| {
        if auth.is_restoring.get() {
            return;
        }
        if closet.closet.with_untracked(|c| c.is_empty()) {
            closet.load(&auth);
        }
    });

    let items = move || closet.closet.with(|c| c.items_in(category).to_vec());

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-5xl mx-auto space-y-6">
                <div class="flex items-center gap-2">
                    <button class="btn btn-ghost btn-circle" on:click=move |_| router.navigate(AppRoute::Closet)>
                        <ArrowLeft attr:class="h-5 w-5" />
                    </button>
                    <h2 class="text-2xl font-bold">{category.label()}</h2>
                    <Show when=move || closet.is_loading.get()>
                        <span class="loading loading-spinner loading-sm text-primary"></span>
                    </Show>
                </div>

                <Show when=move || !closet.is_loading.get() && items().is_empty()>
                    <div class="text-center py-8 text-base-content/50">"No items in this category yet."</div>
                </Show>

                <div class="grid grid-cols-2 gap-4 sm:grid-cols-3 md:grid-cols-4">
                    <For each=items key=|item| item.id.clone() let:item>
                        {
                            let label = item.display_name().to_string();
                            let src = item.image_url.clone();
                            view! {
                                <button
                                    class="card bg-base-100 shadow hover:shadow-lg p-3 items-center"
                                    on:click=move |_| {
                                        closet.add_to_preview(item.clone());
                                        router.navigate(AppRoute::Closet);
                                    }
                                >
                                    <img src=src alt=label.clone() class="h-32 w-full object-contain" />
                                    <span class="text-sm mt-2 truncate w-full">{label}</span>
                                </button>
                            }
                        }
                    </For>
                </div>
            </div>
        </div>
    }
}

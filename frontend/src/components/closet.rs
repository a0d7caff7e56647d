//! 衣橱页面
//!
//! 上半部分是可拖拽的预览画布，下半部分按分类列出衣物。
//! 拖拽期间 window 上的 move/up/cancel 监听器由 [`DragListeners`] 持有，
//! 拖拽结束、被取消或页面卸载时释放。

use crate::auth::use_auth;
use crate::closet::use_closet;
use crate::components::icons::ArrowLeft;
use crate::web::listener::{DragListeners, GenerationSlot, WindowListener};
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use leptos::html;
use leptos::prelude::*;
use std::time::Duration;
use throwafit::preview::PLACEMENT_FOOTPRINT;
use throwafit::{Category, ContainerSize, Point};

/// 每个分类在衣橱页最多展示的条目数，其余通过 "More" 查看
const STRIP_LIMIT: usize = 4;

/// 指针相对于画布左上角的坐标
fn pointer_in(container: NodeRef<html::Div>, ev: &web_sys::MouseEvent) -> Option<Point> {
    let el = container.get_untracked()?;
    let rect = el.get_bounding_client_rect();
    Some(Point::new(
        f64::from(ev.client_x()) - rect.left(),
        f64::from(ev.client_y()) - rect.top(),
    ))
}

fn measure(container: NodeRef<html::Div>) -> Option<ContainerSize> {
    let rect = container.get_untracked()?.get_bounding_client_rect();
    Some(ContainerSize::new(rect.width(), rect.height()))
}

#[component]
fn PreviewCanvas() -> impl IntoView {
    let closet = use_closet();
    let preview = closet.preview;
    let container_ref = NodeRef::<html::Div>::new();
    let drag_guard = StoredValue::new_local(GenerationSlot::<DragListeners>::default());
    let resize_guard = StoredValue::new_local(None::<WindowListener>);

    // 记录画布尺寸，供新条目居中；窗口尺寸变化时重新测量
    Effect::new(move |_| {
        if container_ref.get().is_none() {
            return;
        }
        if let Some(size) = measure(container_ref) {
            closet.resize(size);
        }
        let on_resize = WindowListener::new("resize", move |_: web_sys::Event| {
            if let Some(size) = measure(container_ref) {
                closet.resize(size);
            }
        });
        resize_guard.set_value(on_resize);
    });

    on_cleanup(move || {
        drag_guard.try_update_value(GenerationSlot::clear);
        resize_guard.try_update_value(|guard| *guard = None);
        preview.try_update(|p| {
            p.end_drag();
        });
    });

    let start_drag = move |index: usize, ev: web_sys::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        ev.prevent_default();

        let Some(pointer) = pointer_in(container_ref, &ev) else {
            return;
        };
        match preview.try_update(|p| p.begin_drag(index, pointer)) {
            Some(Ok(_)) => {}
            Some(Err(e)) => {
                tracing::debug!(error = %e, "drag rejected");
                return;
            }
            None => return,
        }

        let Some(generation) = drag_guard.try_update_value(GenerationSlot::begin) else {
            return;
        };

        let on_move = WindowListener::pointer("pointermove", move |ev| {
            if let Some(pointer) = pointer_in(container_ref, &ev) {
                preview.update(|p| {
                    p.drag_to(pointer);
                });
            }
        });
        // 松开与取消（触摸手势、失去焦点）走同一条结束路径
        let on_end = move |_: web_sys::PointerEvent| {
            preview.update(|p| {
                p.end_drag();
            });
            // 回调执行期间不能释放自身闭包，推迟到下一轮事件循环
            set_timeout(
                move || {
                    drag_guard.try_update_value(|guard| guard.release(generation));
                },
                Duration::ZERO,
            );
        };
        let on_up = WindowListener::pointer("pointerup", on_end);
        let on_cancel = WindowListener::pointer("pointercancel", on_end);

        match (on_move, on_up, on_cancel) {
            (Some(on_move), Some(on_up), Some(on_cancel)) => {
                let listeners = DragListeners::new(vec![on_move, on_up, on_cancel]);
                drag_guard.update_value(|guard| {
                    guard.fill(generation, listeners);
                });
            }
            _ => {
                tracing::warn!("failed to attach drag listeners");
                preview.update(|p| {
                    p.end_drag();
                });
            }
        }
    };

    let remove = move |index: usize| {
        preview.update(|p| {
            p.remove_item(index);
        });
    };

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <div class="flex items-center justify-between">
                    <h3 class="card-title">"Preview"</h3>
                    <button class="btn btn-ghost btn-sm" on:click=move |_| closet.reset_preview()
                        disabled=move || preview.with(|p| p.is_empty())>
                        "Clear"
                    </button>
                </div>
                <div
                    node_ref=container_ref
                    class="relative h-96 w-full overflow-hidden rounded-box bg-base-200 touch-none select-none"
                >
                    <Show when=move || preview.with(|p| p.is_empty())>
                        <p class="absolute inset-0 flex items-center justify-center text-base-content/50">
                            "Pick items below to start building a fit."
                        </p>
                    </Show>
                    <For
                        each=move || 0..preview.with(|p| p.len())
                        key=|index| *index
                        let:index
                    >
                        <img
                            class="absolute cursor-grab object-contain"
                            draggable="false"
                            src=move || preview.with(|p| p.items().get(index).map(|placed| placed.item.image_url.clone()).unwrap_or_default())
                            alt=move || preview.with(|p| p.items().get(index).map(|placed| placed.item.display_name().to_string()).unwrap_or_default())
                            style=move || {
                                let position = preview.with(|p| p.items().get(index).map(|placed| placed.position()).unwrap_or_default());
                                format!(
                                    "left: {}px; top: {}px; width: {}px; height: {}px;",
                                    position.x, position.y, PLACEMENT_FOOTPRINT, PLACEMENT_FOOTPRINT
                                )
                            }
                            on:pointerdown=move |ev| start_drag(index, ev)
                            on:dblclick=move |_| remove(index)
                            on:contextmenu=move |ev| {
                                ev.prevent_default();
                                remove(index);
                            }
                        />
                    </For>
                </div>
                <p class="text-sm text-base-content/60">
                    {move || preview.with(|p| match p.primary() {
                        Some(item) => format!("Last added: {}", item.display_name()),
                        None => "Drag items to arrange them. Double-click or right-click to remove.".to_string(),
                    })}
                </p>
            </div>
        </div>
    }
}

/// 单个分类的横向条目列表
#[component]
fn CategoryStrip(category: Category) -> impl IntoView {
    let closet = use_closet();
    let router = use_router();

    let items = move || {
        closet
            .closet
            .with(|c| c.items_in(category).iter().take(STRIP_LIMIT).cloned().collect::<Vec<_>>())
    };

    view! {
        <div class="card bg-base-100 shadow">
            <div class="card-body py-4">
                <div class="flex items-center justify-between">
                    <h4 class="font-bold">{category.label()}</h4>
                    <button class="btn btn-link btn-sm" on:click=move |_| router.navigate(AppRoute::Category(category))>
                        "More"
                    </button>
                </div>
                <div class="flex gap-3 overflow-x-auto">
                    <Show when=move || closet.closet.with(|c| c.items_in(category).is_empty())>
                        <p class="text-sm text-base-content/50">"Nothing here yet."</p>
                    </Show>
                    <For each=items key=|item| item.id.clone() let:item>
                        {
                            let label = item.display_name().to_string();
                            let src = item.image_url.clone();
                            view! {
                                <button class="flex flex-col items-center w-24 shrink-0"
                                    on:click=move |_| closet.add_to_preview(item.clone())>
                                    <img src=src alt=label.clone() class="h-20 w-20 object-contain rounded bg-base-200" />
                                    <span class="text-xs truncate w-full">{label}</span>
                                </button>
                            }
                        }
                    </For>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn ClosetPage() -> impl IntoView {
    let auth = use_auth();
    let closet = use_closet();
    let router = use_router();

    // 恢复结束后加载，并在登录状态变化时重新加载
    Effect::new(move |_| {
        if auth.is_restoring.get() {
            return;
        }
        auth.user.track();
        closet.load(&auth);
    });

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-5xl mx-auto space-y-6">
                <div class="flex items-center gap-2">
                    <button class="btn btn-ghost btn-circle" on:click=move |_| router.navigate(AppRoute::Home)>
                        <ArrowLeft attr:class="h-5 w-5" />
                    </button>
                    <h2 class="text-2xl font-bold">
                        {move || if auth.user.with(Option::is_some) { "My Closet" } else { "Closet" }}
                    </h2>
                    <Show when=move || closet.is_loading.get()>
                        <span class="loading loading-spinner loading-sm text-primary"></span>
                    </Show>
                </div>

                <PreviewCanvas />

                {Category::ALL
                    .into_iter()
                    .map(|category| view! { <CategoryStrip category=category /> })
                    .collect_view()}
            </div>
        </div>
    }
}

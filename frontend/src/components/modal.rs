//! 模态框组件
//!
//! 由外部的 `open` 信号控制原生 `<dialog>` 的打开与关闭。

use leptos::prelude::*;

#[component]
pub fn Modal(
    /// 是否打开
    open: RwSignal<bool>,
    /// 标题
    #[prop(into)]
    title: String,
    children: Children,
) -> impl IntoView {
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if open.get() {
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else if dialog.open() {
                dialog.close();
            }
        }
    });

    view! {
        <dialog class="modal" node_ref=dialog_ref on:close=move |_| open.set(false)>
            <div class="modal-box">
                <h3 class="font-bold text-lg mb-4">{title}</h3>
                {children()}
            </div>
            <form method="dialog" class="modal-backdrop">
                <button>"close"</button>
            </form>
        </dialog>
    }
}

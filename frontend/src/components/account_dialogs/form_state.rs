//! 表单状态管理模块
//!
//! 将登录、注册、找回密码共用的 signal 整合为 `FormState` 结构体，负责：
//! - 数据的持有
//! - 数据的重置
//! - 提交中与错误提示状态

use leptos::prelude::*;

/// 表单状态结构体
///
/// 使用 `RwSignal` 因为它实现了 `Copy` trait，非常适合作为 Props 在组件间传递。
#[derive(Clone, Copy)]
pub struct FormState {
    pub username: RwSignal<String>,
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,

    pub is_submitting: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl FormState {
    /// 创建新的表单状态，所有字段为空
    pub fn new() -> Self {
        Self {
            username: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            password: RwSignal::new(String::new()),
            is_submitting: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    /// 重置表单到初始状态
    pub fn reset(&self) {
        self.username.set(String::new());
        self.email.set(String::new());
        self.password.set(String::new());
        self.is_submitting.set(false);
        self.error.set(None);
    }

    /// 开始提交：清空旧错误
    pub fn begin_submit(&self) {
        self.is_submitting.set(true);
        self.error.set(None);
    }

    pub fn fail(&self, message: impl Into<String>) {
        self.error.set(Some(message.into()));
        self.is_submitting.set(false);
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

/// 文本输入框
#[component]
pub fn TextField(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    #[prop(default = "text")] input_type: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div class="form-control">
            <label for=id.clone() class="label">
                <span class="label-text">{label}</span>
            </label>
            <input id=id
                type=input_type
                on:input=move |ev| value.set(event_target_value(&ev))
                prop:value=move || value.get()
                class="input input-bordered w-full"
            />
        </div>
    }
}

/// 表单内的错误提示
#[component]
pub fn FormError(state: FormState) -> impl IntoView {
    view! {
        <Show when=move || state.error.with(Option::is_some)>
            <div role="alert" class="alert alert-error text-sm py-2">
                <span>{move || state.error.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}

/// 带加载状态的提交按钮
#[component]
pub fn SubmitButton(state: FormState, label: &'static str, busy_label: &'static str) -> impl IntoView {
    view! {
        <button type="submit" class="btn btn-primary" disabled=move || state.is_submitting.get()>
            {move || if state.is_submitting.get() {
                view! { <span class="loading loading-spinner"></span> {busy_label} }.into_any()
            } else {
                label.into_any()
            }}
        </button>
    }
}

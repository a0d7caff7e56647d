//! 全局消息提示
//!
//! 任何页面都可以通过 [`NoticeContext`] 弹出消息，
//! 跨页面跳转后消息仍会显示，3 秒后自动消失。

use leptos::prelude::*;
use std::time::Duration;
use throwafit::ClientError;

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub text: String,
    pub is_error: bool,
}

#[derive(Clone, Copy)]
pub struct NoticeContext(RwSignal<Option<Notice>>);

impl NoticeContext {
    pub fn new() -> Self {
        Self(RwSignal::new(None))
    }

    pub fn success(&self, text: impl Into<String>) {
        self.0.set(Some(Notice {
            text: text.into(),
            is_error: false,
        }));
    }

    pub fn error(&self, text: impl Into<String>) {
        self.0.set(Some(Notice {
            text: text.into(),
            is_error: true,
        }));
    }

    /// 显示错误消息本身（后端 msg 或回退文案）
    pub fn client_error(&self, err: &ClientError) {
        tracing::warn!(code = err.error_code(), status = ?err.status(), "{}", err);
        self.error(err.message());
    }
}

impl Default for NoticeContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notice() -> NoticeContext {
    use_context::<NoticeContext>().expect("NoticeContext should be provided")
}

/// 消息提示框，放在应用根部
#[component]
pub fn NoticeToast(notice: NoticeContext) -> impl IntoView {
    let current = notice.0;

    // 3秒后清除通知
    Effect::new(move |_| {
        if let Some(shown) = current.get() {
            set_timeout(
                move || {
                    // 期间弹出的新消息不受影响
                    if current.get_untracked().as_ref() == Some(&shown) {
                        current.set(None);
                    }
                },
                Duration::from_secs(3),
            );
        }
    });

    view! {
        <Show when=move || current.with(Option::is_some)>
            <div class="toast toast-top toast-end z-50">
                <div class=move || {
                    let is_error = current.with(|n| n.as_ref().is_some_and(|n| n.is_error));
                    if is_error { "alert alert-error shadow-lg" } else { "alert alert-success shadow-lg" }
                }>
                    <span>{move || current.with(|n| n.as_ref().map(|n| n.text.clone()).unwrap_or_default())}</span>
                </div>
            </div>
        </Show>
    }
}

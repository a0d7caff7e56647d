//! 账户相关对话框：登录、注册、找回密码

pub mod form_state;

use crate::auth::use_auth;
use crate::components::modal::Modal;
use crate::components::notice::use_notice;
use form_state::{FormError, FormState, SubmitButton, TextField};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn LoginDialog(
    open: RwSignal<bool>,
    /// 点击"忘记密码"时打开的对话框
    forgot_open: RwSignal<bool>,
) -> impl IntoView {
    let auth = use_auth();
    let notice = use_notice();
    let state = FormState::new();

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        state.begin_submit();

        let (username, password) = (state.username.get(), state.password.get());
        spawn_local(async move {
            match auth.login(username, password).await {
                Ok(user) => {
                    notice.success(format!("Welcome back, {}!", user.username));
                    state.reset();
                    open.set(false);
                }
                Err(e) => state.fail(e.message()),
            }
        });
    };

    let on_forgot = move |_| {
        open.set(false);
        forgot_open.set(true);
    };

    view! {
        <Modal open=open title="Log in">
            <form on:submit=on_submit class="space-y-4">
                <FormError state=state />
                <TextField id="login_username" label="Username" value=state.username />
                <TextField id="login_password" label="Password" input_type="password" value=state.password />
                <button type="button" class="link link-hover text-sm" on:click=on_forgot>
                    "Forgot password?"
                </button>
                <div class="modal-action">
                    <button type="button" class="btn btn-ghost" on:click=move |_| open.set(false)>"Cancel"</button>
                    <SubmitButton state=state label="Log in" busy_label="Logging in..." />
                </div>
            </form>
        </Modal>
    }
}

#[component]
pub fn SignupDialog(
    open: RwSignal<bool>,
    /// 注册成功后打开登录框
    login_open: RwSignal<bool>,
) -> impl IntoView {
    let auth = use_auth();
    let notice = use_notice();
    let state = FormState::new();

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        state.begin_submit();

        let (username, email, password) = (state.username.get(), state.email.get(), state.password.get());
        spawn_local(async move {
            match auth.signup(username, email, password).await {
                Ok(res) => {
                    notice.success(
                        res.msg
                            .unwrap_or_else(|| "Signup successful! Please log in.".to_string()),
                    );
                    state.reset();
                    open.set(false);
                    login_open.set(true);
                }
                Err(e) => state.fail(e.message()),
            }
        });
    };

    view! {
        <Modal open=open title="Sign up">
            <form on:submit=on_submit class="space-y-4">
                <FormError state=state />
                <TextField id="signup_username" label="Username" value=state.username />
                <TextField id="signup_email" label="Email" input_type="email" value=state.email />
                <TextField id="signup_password" label="Password" input_type="password" value=state.password />
                <div class="modal-action">
                    <button type="button" class="btn btn-ghost" on:click=move |_| open.set(false)>"Cancel"</button>
                    <SubmitButton state=state label="Sign up" busy_label="Signing up..." />
                </div>
            </form>
        </Modal>
    }
}

#[component]
pub fn ForgotPasswordDialog(open: RwSignal<bool>) -> impl IntoView {
    let auth = use_auth();
    let notice = use_notice();
    let state = FormState::new();

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        state.begin_submit();

        let email = state.email.get();
        spawn_local(async move {
            match auth.forgot_password(email).await {
                Ok(msg) => {
                    notice.success(msg);
                    state.reset();
                    open.set(false);
                }
                Err(e) => state.fail(e.message()),
            }
        });
    };

    view! {
        <Modal open=open title="Reset your password">
            <form on:submit=on_submit class="space-y-4">
                <p class="text-base-content/70 text-sm">
                    "Enter the email you signed up with and we'll send you a reset link."
                </p>
                <FormError state=state />
                <TextField id="forgot_email" label="Email" input_type="email" value=state.email />
                <div class="modal-action">
                    <button type="button" class="btn btn-ghost" on:click=move |_| open.set(false)>"Cancel"</button>
                    <SubmitButton state=state label="Send link" busy_label="Sending..." />
                </div>
            </form>
        </Modal>
    }
}

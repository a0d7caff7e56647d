use crate::auth::use_auth;
use crate::components::account_dialogs::form_state::{FormError, FormState, SubmitButton, TextField};
use crate::components::notice::use_notice;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 邮件重置链接的落地页
#[component]
pub fn ResetPasswordPage(user_id: String, token: String) -> impl IntoView {
    let auth = use_auth();
    let notice = use_notice();
    let router = use_router();

    let state = FormState::new();
    let confirm = RwSignal::new(String::new());
    let link = StoredValue::new((user_id, token));

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if state.password.get_untracked() != confirm.get_untracked() {
            state.fail("Passwords do not match");
            return;
        }
        state.begin_submit();

        let (user_id, token) = link.get_value();
        let password = state.password.get_untracked();
        spawn_local(async move {
            match auth.reset_password(user_id, token, password).await {
                Ok(msg) => {
                    notice.success(msg);
                    router.navigate(AppRoute::Home);
                }
                Err(e) => state.fail(e.message()),
            }
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <h1 class="text-3xl font-bold">"Choose a new password"</h1>
                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <FormError state=state />
                        <TextField id="reset_password" label="New password" input_type="password" value=state.password />
                        <TextField id="reset_confirm" label="Confirm password" input_type="password" value=confirm />
                        <div class="form-control mt-6">
                            <SubmitButton state=state label="Update password" busy_label="Updating..." />
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}

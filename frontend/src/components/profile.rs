use crate::auth::use_auth;
use crate::closet::{sign_out, use_closet};
use crate::components::account_dialogs::form_state::{FormError, FormState, SubmitButton, TextField};
use crate::components::icons::{ArrowLeft, LogOut, Trash};
use crate::components::modal::Modal;
use crate::components::notice::use_notice;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = use_auth();
    let closet = use_closet();
    let notice = use_notice();
    let router = use_router();

    let state = FormState::new();
    let confirm_open = RwSignal::new(false);
    let is_deleting = RwSignal::new(false);

    // 用当前用户名预填
    Effect::new(move |_| {
        if let Some(user) = auth.user.get() {
            state.username.set(user.username);
        }
    });

    let on_rename = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        state.begin_submit();

        let name = state.username.get_untracked();
        spawn_local(async move {
            match auth.update_username(name).await {
                Ok(user) => {
                    notice.success(format!("Username updated to {}", user.username));
                    state.is_submitting.set(false);
                }
                Err(e) => state.fail(e.message()),
            }
        });
    };

    let on_logout = move |_| {
        sign_out(&auth, &closet);
        notice.success("Logged out");
        router.navigate(AppRoute::Home);
    };

    let on_delete = move |_| {
        is_deleting.set(true);
        spawn_local(async move {
            match auth.delete_account().await {
                Ok(msg) => {
                    closet.clear();
                    confirm_open.set(false);
                    notice.success(msg);
                    router.navigate(AppRoute::Home);
                }
                Err(e) => notice.client_error(&e),
            }
            is_deleting.set(false);
        });
    };

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-xl mx-auto space-y-6">
                <div class="flex items-center gap-2">
                    <button class="btn btn-ghost btn-circle" on:click=move |_| router.navigate(AppRoute::Home)>
                        <ArrowLeft attr:class="h-5 w-5" />
                    </button>
                    <h2 class="text-2xl font-bold">"Profile"</h2>
                </div>

                <Show
                    when=move || auth.user.with(Option::is_some)
                    fallback=|| view! {
                        <div class="flex justify-center py-8">
                            <span class="loading loading-spinner loading-lg text-primary"></span>
                        </div>
                    }
                >
                    <div class="card bg-base-100 shadow-xl">
                        <form class="card-body space-y-4" on:submit=on_rename>
                            <p class="text-base-content/70">
                                {move || auth.user.with(|u| u.as_ref().and_then(|u| u.email.clone()).unwrap_or_default())}
                            </p>
                            <FormError state=state />
                            <TextField id="profile_username" label="Username" value=state.username />
                            <div class="card-actions justify-end">
                                <SubmitButton state=state label="Save" busy_label="Saving..." />
                            </div>
                        </form>
                    </div>

                    <div class="card bg-base-100 shadow-xl">
                        <div class="card-body flex-row justify-between">
                            <button class="btn btn-outline gap-2" on:click=on_logout>
                                <LogOut attr:class="h-4 w-4" /> "Log out"
                            </button>
                            <button class="btn btn-error gap-2" on:click=move |_| confirm_open.set(true)>
                                <Trash attr:class="h-4 w-4" /> "Delete account"
                            </button>
                        </div>
                    </div>
                </Show>
            </div>

            <Modal open=confirm_open title="Delete account?">
                <p class="text-base-content/70">
                    "This removes your account and every item in your closet. It cannot be undone."
                </p>
                <div class="modal-action">
                    <button type="button" class="btn btn-ghost" on:click=move |_| confirm_open.set(false)>"Cancel"</button>
                    <button type="button" class="btn btn-error" disabled=move || is_deleting.get() on:click=on_delete>
                        {move || if is_deleting.get() { "Deleting..." } else { "Delete" }}
                    </button>
                </div>
            </Modal>
        </div>
    }
}

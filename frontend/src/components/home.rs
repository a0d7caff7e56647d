use crate::auth::use_auth;
use crate::closet::{sign_out, use_closet};
use crate::components::account_dialogs::{ForgotPasswordDialog, LoginDialog, SignupDialog};
use crate::components::fit_dialog::FitDialog;
use crate::components::icons::*;
use crate::components::notice::use_notice;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();
    let closet = use_closet();
    let notice = use_notice();
    let router = use_router();

    let login_open = RwSignal::new(false);
    let signup_open = RwSignal::new(false);
    let forgot_open = RwSignal::new(false);
    let fit_open = RwSignal::new(false);

    let is_logged_in = move || auth.user.with(Option::is_some);
    let username = move || auth.user.with(|u| u.as_ref().map(|u| u.username.clone()).unwrap_or_default());

    // 从首页进入衣橱时清空预览
    let on_closet = move |_| {
        closet.reset_preview();
        router.navigate(AppRoute::Closet);
    };

    let on_upload = move |_| {
        if is_logged_in() {
            router.navigate(AppRoute::Upload);
        } else {
            notice.error("Please log in first");
            login_open.set(true);
        }
    };

    let on_logout = move |_| {
        sign_out(&auth, &closet);
        notice.success("Logged out");
    };

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-5xl mx-auto space-y-8">
                <div class="navbar bg-base-100 rounded-box shadow-xl">
                    <div class="flex-1 gap-2">
                        <Shirt attr:class="text-primary h-6 w-6" />
                        <span class="text-xl font-bold px-2">"Throw A Fit"</span>
                    </div>
                    <div class="flex-none gap-2">
                        <Show
                            when=is_logged_in
                            fallback=move || view! {
                                <button class="btn btn-ghost" on:click=move |_| login_open.set(true)>"Log in"</button>
                                <button class="btn btn-primary" on:click=move |_| signup_open.set(true)>"Sign up"</button>
                            }
                        >
                            <button class="btn btn-ghost gap-2" on:click=move |_| router.navigate(AppRoute::Profile)>
                                <UserIcon attr:class="h-4 w-4" /> {username}
                            </button>
                            <button class="btn btn-outline btn-error gap-2" on:click=on_logout>
                                <LogOut attr:class="h-4 w-4" /> "Log out"
                            </button>
                        </Show>
                    </div>
                </div>

                <div class="hero bg-base-100 rounded-box shadow-xl py-12">
                    <div class="hero-content text-center">
                        <div class="max-w-md space-y-4">
                            <h1 class="text-4xl font-bold">"What are you wearing today?"</h1>
                            <p class="text-base-content/70">
                                "Build outfits from your closet, or let us throw one together for you."
                            </p>
                            <Show when=move || auth.is_restoring.get()>
                                <span class="loading loading-dots loading-md text-primary"></span>
                            </Show>
                        </div>
                    </div>
                </div>

                <div class="grid gap-4 md:grid-cols-3">
                    <button class="btn btn-lg h-32 flex-col gap-2" on:click=on_closet>
                        <Shirt attr:class="h-8 w-8" /> "Closet"
                    </button>
                    <button class="btn btn-lg h-32 flex-col gap-2" on:click=on_upload>
                        <UploadIcon attr:class="h-8 w-8" /> "Upload"
                    </button>
                    <button class="btn btn-lg btn-primary h-32 flex-col gap-2" on:click=move |_| fit_open.set(true)>
                        <Sparkles attr:class="h-8 w-8" /> "Throw a Fit"
                    </button>
                </div>
            </div>

            <LoginDialog open=login_open forgot_open=forgot_open />
            <SignupDialog open=signup_open login_open=login_open />
            <ForgotPasswordDialog open=forgot_open />
            <FitDialog open=fit_open />
        </div>
    }
}

//! Throw A Fit 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route`: 路由定义（领域模型）
//! - `web::router`: 路由服务（核心引擎）
//! - `auth`: 认证状态管理
//! - `closet`: 衣橱与预览的共享状态
//! - `components`: UI 组件层

mod auth;
mod closet;
mod components {
    pub mod account_dialogs;
    pub mod category;
    pub mod closet;
    pub mod fit_dialog;
    pub mod home;
    mod icons;
    pub mod modal;
    pub mod notice;
    pub mod profile;
    pub mod reset_password;
    pub mod upload;
}

use crate::auth::{AuthContext, init_auth};
use crate::closet::ClosetContext;
use crate::components::category::CategoryPage;
use crate::components::closet::ClosetPage;
use crate::components::home::HomePage;
use crate::components::notice::{NoticeContext, NoticeToast};
use crate::components::profile::ProfilePage;
use crate::components::reset_password::ResetPasswordPage;
use crate::components::upload::UploadPage;

use leptos::prelude::*;

// 原生 Web API 封装模块
// 此模块提供对浏览器原生 API 的轻量级封装，替代 gloo-* 系列 crate，
// 以减小 WASM 二进制体积。
pub(crate) mod web {
    mod http;
    pub mod listener;
    pub mod route;
    pub mod router;
    mod storage;

    pub use http::FetchClient;
    pub use storage::LocalStorage;
}

use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::Closet => view! { <ClosetPage /> }.into_any(),
        AppRoute::Category(category) => view! { <CategoryPage category=category /> }.into_any(),
        AppRoute::Upload => view! { <UploadPage /> }.into_any(),
        AppRoute::Profile => view! { <ProfilePage /> }.into_any(),
        AppRoute::ResetPassword { user_id, token } => {
            view! { <ResetPasswordPage user_id=user_id token=token /> }.into_any()
        }
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 创建共享上下文
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);
    provide_context(ClosetContext::new());
    let notice = NoticeContext::new();
    provide_context(notice);

    // 2. 用保存的 token 恢复会话
    init_auth(&auth_ctx);

    // 3. 获取访问许可信号，用于注入路由服务（解耦！）
    let can_access_protected = auth_ctx.can_access_protected_signal();

    view! {
        // 4. 路由器组件：注入许可信号实现守卫
        <Router can_access_protected=can_access_protected>
            <RouterOutlet matcher=route_matcher />
        </Router>
        <NoticeToast notice=notice />
    }
}

//! 路由服务模块
//!
//! 所有对 `window.history` / `window.location` 的访问都集中在这里。
//! 导航、后退/前进、会话失效三条路径共用同一个守卫 [`RouterService::resolve`]。

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::route::AppRoute;

/// 写入浏览器历史的方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HistoryMode {
    /// 新增一条记录（用户主动导航）
    Push,
    /// 覆盖当前记录（重定向，不留下可后退的页面）
    Replace,
}

fn write_history(route: &AppRoute, mode: HistoryMode) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    let url = route.to_path();
    let _ = match mode {
        HistoryMode::Push => history.push_state_with_url(&JsValue::NULL, "", Some(&url)),
        HistoryMode::Replace => history.replace_state_with_url(&JsValue::NULL, "", Some(&url)),
    };
}

/// 从地址栏读取当前路由（路径 + 查询串）
fn read_location() -> AppRoute {
    let Some(location) = web_sys::window().map(|w| w.location()) else {
        return AppRoute::default();
    };
    let path = location.pathname().unwrap_or_else(|_| "/".to_string());
    let search = location.search().unwrap_or_default();
    AppRoute::from_location(&path, &search)
}

/// 路由器服务
///
/// 当前路由保存在 `RwSignal` 中，`RouterOutlet` 订阅它渲染页面。
/// 是否允许进入受保护页面由外部注入，路由层不依赖认证模块。
#[derive(Clone, Copy)]
pub struct RouterService {
    current: RwSignal<AppRoute>,
    can_access_protected: Signal<bool>,
}

impl RouterService {
    fn new(can_access_protected: Signal<bool>) -> Self {
        Self {
            current: RwSignal::new(read_location()),
            can_access_protected,
        }
    }

    /// 当前路由（只读）
    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current.read_only()
    }

    /// 守卫：不允许访问时返回重定向目标
    fn resolve(&self, target: AppRoute) -> Result<AppRoute, AppRoute> {
        if target.requires_auth() && !self.can_access_protected.get_untracked() {
            Err(AppRoute::auth_failure_redirect())
        } else {
            Ok(target)
        }
    }

    /// 导航到目标页面，必要时重定向
    pub fn navigate(&self, target: AppRoute) {
        let route = self.resolve(target).unwrap_or_else(|redirect| {
            tracing::debug!(route = %redirect, "access denied, redirecting");
            redirect
        });
        write_history(&route, HistoryMode::Push);
        self.current.set(route);
    }

    /// 浏览器后退/前进：地址已经变化，只在被拒绝时覆盖
    fn listen_popstate(&self) {
        let router = *self;
        let on_popstate = Closure::<dyn Fn()>::new(move || {
            let route = match router.resolve(read_location()) {
                Ok(route) => route,
                Err(redirect) => {
                    write_history(&redirect, HistoryMode::Replace);
                    redirect
                }
            };
            router.current.set(route);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", on_popstate.as_ref().unchecked_ref());
        }
        // 监听器与应用同寿命
        on_popstate.forget();
    }

    /// 会话结束（登出、删号、恢复失败）时离开受保护页面
    fn watch_access(&self) {
        let router = *self;
        Effect::new(move |_| {
            router.can_access_protected.track();
            let current = router.current.get_untracked();
            if let Err(redirect) = router.resolve(current) {
                tracing::debug!(route = %redirect, "session ended, leaving protected page");
                write_history(&redirect, HistoryMode::Replace);
                router.current.set(redirect);
            }
        });
    }
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件，应在 App 根部使用
#[component]
pub fn Router(
    /// 是否允许访问受保护页面
    can_access_protected: Signal<bool>,
    children: Children,
) -> impl IntoView {
    let router = RouterService::new(can_access_protected);
    router.listen_popstate();
    router.watch_access();
    provide_context(router);

    children()
}

/// 路由出口组件：根据当前路由渲染页面
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || matcher(router.current_route().get())
}

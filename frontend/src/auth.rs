//! 认证模块
//!
//! 管理用户认证状态，与路由系统解耦。
//! 路由服务通过注入的信号来检查是否允许访问受保护页面。

use crate::web::{FetchClient, LocalStorage};
use leptos::prelude::*;
use leptos::task::spawn_local;
use throwafit::{ClientConfig, ClientResult, ClientStorage, Session, ThrowAFitApi};
use throwafit_shared::User;
use throwafit_shared::protocol::SignupResponse;

/// 浏览器环境下的会话类型
pub type AppSession = Session<FetchClient, LocalStorage>;

/// 认证上下文
///
/// 会话本体放在 `StoredValue` 中，界面只订阅 `user` 与 `is_restoring`。
/// 异步操作在会话副本上执行，完成后写回。
#[derive(Clone, Copy)]
pub struct AuthContext {
    session: StoredValue<AppSession>,
    /// 当前登录用户
    pub user: RwSignal<Option<User>>,
    /// 启动时的 token 恢复是否仍在进行
    pub is_restoring: RwSignal<bool>,
}

impl AuthContext {
    /// 创建新的认证上下文
    pub fn new() -> Self {
        let config = ClientConfig::from_env();
        tracing::debug!(api_url = %config.api_url, "client configured");
        let api = ThrowAFitApi::from_config(&config, FetchClient);

        Self {
            session: StoredValue::new(Session::new(api, LocalStorage)),
            user: RwSignal::new(None),
            is_restoring: RwSignal::new(LocalStorage.token().is_some()),
        }
    }

    /// 会话快照，用于调用只读 API
    pub fn session(&self) -> AppSession {
        self.session.get_value()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.with_untracked(Option::is_some)
    }

    /// 允许访问受保护页面的信号（用于路由服务注入）
    ///
    /// 恢复进行中也视为允许，避免刷新页面时被误踢回首页。
    pub fn can_access_protected_signal(&self) -> Signal<bool> {
        let user = self.user;
        let is_restoring = self.is_restoring;
        Signal::derive(move || user.with(Option::is_some) || is_restoring.get())
    }

    /// 写回异步操作的会话副本；期间登录状态被其他操作改变过的副本直接丢弃
    fn commit(&self, session: AppSession) {
        if !session.is_current() {
            tracing::debug!("stale session snapshot dropped");
            return;
        }
        self.user.set(session.user().cloned());
        self.session.set_value(session);
    }

    pub async fn login(&self, username: String, password: String) -> ClientResult<User> {
        let mut session = self.session();
        let result = session.login(&username, &password).await;
        if result.is_ok() {
            self.commit(session);
        }
        result
    }

    pub async fn signup(&self, username: String, email: String, password: String) -> ClientResult<SignupResponse> {
        self.session().signup(&username, &email, &password).await
    }

    /// 注销并清除状态
    ///
    /// 导航由路由服务的认证状态监听处理。
    pub fn logout(&self) {
        let mut session = self.session();
        session.logout();
        self.commit(session);
    }

    pub async fn update_username(&self, name: String) -> ClientResult<User> {
        let mut session = self.session();
        let result = session.update_username(&name).await;
        if result.is_ok() {
            self.commit(session);
        }
        result
    }

    pub async fn delete_account(&self) -> ClientResult<String> {
        let mut session = self.session();
        let result = session.delete_account().await;
        if result.is_ok() {
            self.commit(session);
        }
        result
    }

    pub async fn forgot_password(&self, email: String) -> ClientResult<String> {
        self.session().forgot_password(&email).await
    }

    pub async fn reset_password(&self, user_id: String, token: String, new_password: String) -> ClientResult<String> {
        self.session()
            .reset_password(&user_id, &token, &new_password)
            .await
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 初始化认证状态
///
/// 有保存的 token 时向后端恢复用户；失败由会话清除 token。
/// 恢复期间用户已登录时，恢复结果被丢弃。
pub fn init_auth(ctx: &AuthContext) {
    if !ctx.is_restoring.get_untracked() {
        return;
    }

    let ctx = *ctx;
    spawn_local(async move {
        let mut session = ctx.session();
        session.load_from_persisted_token().await;
        ctx.commit(session);
        ctx.is_restoring.set(false);
    });
}

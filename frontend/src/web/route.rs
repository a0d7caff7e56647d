//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由及其属性。

use std::fmt::Display;
use throwafit::Category;

/// 应用路由枚举
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 首页 (默认路由)
    #[default]
    Home,
    Closet,
    /// 单个分类的全部衣物
    Category(Category),
    /// 上传 (需要认证)
    Upload,
    /// 个人资料 (需要认证)
    Profile,
    /// 邮件中的重置密码链接，`?token=…&id=…`
    ResetPassword { user_id: String, token: String },
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path 与查询串解析为路由枚举
    pub fn from_location(path: &str, search: &str) -> Self {
        match path.trim_end_matches('/') {
            "" => Self::Home,
            "/closet" => Self::Closet,
            "/upload" => Self::Upload,
            "/profile" => Self::Profile,
            "/reset-password" => {
                let mut user_id = String::new();
                let mut token = String::new();
                for (key, value) in url::form_urlencoded::parse(search.trim_start_matches('?').as_bytes()) {
                    match key.as_ref() {
                        "id" => user_id = value.into_owned(),
                        "token" => token = value.into_owned(),
                        _ => {}
                    }
                }
                Self::ResetPassword { user_id, token }
            }
            other => other
                .strip_prefix("/items/")
                .and_then(Category::parse)
                .map(Self::Category)
                .unwrap_or(Self::NotFound),
        }
    }

    /// 获取路由对应的 URL
    pub fn to_path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Closet => "/closet".to_string(),
            Self::Category(category) => format!("/items/{}", category.as_str()),
            Self::Upload => "/upload".to_string(),
            Self::Profile => "/profile".to_string(),
            Self::ResetPassword { user_id, token } => {
                let query = url::form_urlencoded::Serializer::new(String::new())
                    .append_pair("token", token)
                    .append_pair("id", user_id)
                    .finish();
                format!("/reset-password?{}", query)
            }
            Self::NotFound => "/404".to_string(),
        }
    }

    /// **核心守卫逻辑：定义该路由是否需要认证**
    pub fn requires_auth(&self) -> bool {
        matches!(self, Self::Upload | Self::Profile)
    }

    /// 获取认证失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Home
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    impl AppRoute {
        fn from_path(path: &str) -> Self {
            match path.split_once('?') {
                Some((path, search)) => Self::from_location(path, search),
                None => Self::from_location(path, ""),
            }
        }
    }

    #[test]
    fn parses_static_routes() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Home);
        assert_eq!(AppRoute::from_path("/closet"), AppRoute::Closet);
        assert_eq!(AppRoute::from_path("/closet/"), AppRoute::Closet);
        assert_eq!(AppRoute::from_path("/profile"), AppRoute::Profile);
        assert_eq!(AppRoute::from_path("/nope"), AppRoute::NotFound);
    }

    #[test]
    fn parses_category_routes_case_insensitively() {
        assert_eq!(
            AppRoute::from_path("/items/Shoes"),
            AppRoute::Category(Category::Shoes)
        );
        assert_eq!(AppRoute::from_path("/items/hats"), AppRoute::NotFound);
    }

    #[test]
    fn reset_password_reads_query() {
        let route = AppRoute::from_location("/reset-password", "?token=abc%20def&id=42");
        assert_eq!(
            route,
            AppRoute::ResetPassword {
                user_id: "42".to_string(),
                token: "abc def".to_string(),
            }
        );
        assert_eq!(AppRoute::from_path(&route.to_path()), route);
    }

    #[test]
    fn only_account_pages_require_auth() {
        assert!(AppRoute::Upload.requires_auth());
        assert!(AppRoute::Profile.requires_auth());
        assert!(!AppRoute::Closet.requires_auth());
        assert!(!AppRoute::Category(Category::Tops).requires_auth());
    }
}

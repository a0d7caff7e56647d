//! 衣橱与预览的共享状态
//!
//! 衣物列表与预览画布跨页面共享（分类页选中的衣物要回到衣橱页显示），
//! 因此与认证状态一样通过 Context 提供。

use crate::auth::AuthContext;
use leptos::prelude::*;
use leptos::task::spawn_local;
use throwafit::{Closet, ClosetSource, ClothingItem, ContainerSize, Preview};

#[derive(Clone, Copy)]
pub struct ClosetContext {
    pub closet: RwSignal<Closet>,
    pub preview: RwSignal<Preview>,
    pub is_loading: RwSignal<bool>,
    /// 最近一次测得的预览画布尺寸，分类页放入衣物时使用
    pub container: RwSignal<ContainerSize>,
}

impl ClosetContext {
    pub fn new() -> Self {
        Self {
            closet: RwSignal::new(Closet::new()),
            preview: RwSignal::new(Preview::new()),
            is_loading: RwSignal::new(false),
            container: RwSignal::new(ContainerSize::default()),
        }
    }

    /// 拉取衣物：已登录读自己的衣橱，否则读公共分类
    ///
    /// 失败时保留原有列表。
    pub fn load(&self, auth: &AuthContext) {
        let source = if auth.is_authenticated() {
            ClosetSource::Owned
        } else {
            ClosetSource::Public
        };
        let session = auth.session();
        let closet = self.closet;
        let is_loading = self.is_loading;

        is_loading.set(true);
        spawn_local(async move {
            let mut next = closet.get_untracked();
            if next.load_items(session.api(), session.storage(), source).await {
                closet.set(next);
            }
            is_loading.set(false);
        });
    }

    /// 上传成功后合并新条目
    pub fn insert(&self, item: ClothingItem) {
        self.closet.update(|closet| closet.insert(item));
    }

    /// 画布挂载或窗口尺寸变化时更新
    pub fn resize(&self, size: ContainerSize) {
        if self.container.get_untracked() != size {
            self.container.set(size);
        }
    }

    pub fn add_to_preview(&self, item: ClothingItem) {
        let container = self.container.get_untracked();
        self.preview.update(|preview| {
            preview.add_item(item, container);
        });
    }

    pub fn reset_preview(&self) {
        self.preview.update(Preview::reset);
    }

    /// 登出时调用
    pub fn clear(&self) {
        self.closet.update(Closet::clear);
        self.reset_preview();
    }
}

impl Default for ClosetContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_closet() -> ClosetContext {
    use_context::<ClosetContext>().expect("ClosetContext should be provided")
}

/// 登出并清空衣橱与预览
pub fn sign_out(auth: &AuthContext, closet: &ClosetContext) {
    auth.logout();
    closet.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use throwafit::Point;

    #[test]
    fn test_add_to_preview_centers_in_latest_container() {
        let owner = Owner::new();
        owner.set();
        let closet = ClosetContext::new();

        closet.resize(ContainerSize::new(600.0, 400.0));
        closet.add_to_preview(ClothingItem::new("1", "1.png"));
        closet.resize(ContainerSize::new(1000.0, 400.0));
        closet.add_to_preview(ClothingItem::new("2", "2.png"));

        closet.preview.with_untracked(|p| {
            assert_eq!(p.items()[0].position(), Point::new(200.0, 100.0));
            assert_eq!(p.items()[1].position(), Point::new(400.0, 100.0));
            assert_eq!(p.primary().unwrap().id, "2");
        });
    }
}

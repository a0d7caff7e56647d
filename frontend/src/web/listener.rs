//! 全局事件监听封装
//!
//! 当 `WindowListener` 被 drop 时，自动移除监听器。

use wasm_bindgen::prelude::*;

/// 挂在 window 上的事件监听器
pub struct WindowListener {
    event: &'static str,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

impl WindowListener {
    /// 注册监听器；拿不到 window 时返回 None
    pub fn new<E, F>(event: &'static str, mut callback: F) -> Option<Self>
    where
        E: JsCast,
        F: FnMut(E) + 'static,
    {
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
            callback(ev.unchecked_into::<E>());
        });
        let window = web_sys::window()?;
        window
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .ok()?;

        Some(Self { event, closure })
    }

    pub fn pointer<F>(event: &'static str, callback: F) -> Option<Self>
    where
        F: FnMut(web_sys::PointerEvent) + 'static,
    {
        Self::new(event, callback)
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window
                .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
        }
    }
}

/// 一次拖拽持有的全部监听器，drop 时一并释放
pub struct DragListeners(Vec<WindowListener>);

impl DragListeners {
    pub fn new(listeners: Vec<WindowListener>) -> Self {
        Self(listeners)
    }
}

/// 按代次持有的值
///
/// 每次 [`begin`](Self::begin) 开启新的一代并丢弃上一代的值；
/// 延迟执行的释放只对自己那一代生效。
#[derive(Debug)]
pub struct GenerationSlot<T> {
    generation: u64,
    value: Option<T>,
}

impl<T> Default for GenerationSlot<T> {
    fn default() -> Self {
        Self {
            generation: 0,
            value: None,
        }
    }
}

impl<T> GenerationSlot<T> {
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.value = None;
        self.generation
    }

    /// 代次已过期时丢弃传入的值
    pub fn fill(&mut self, generation: u64, value: T) -> bool {
        if generation != self.generation {
            return false;
        }
        self.value = Some(value);
        true
    }

    pub fn release(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        self.value.take().is_some()
    }

    pub fn clear(&mut self) {
        self.value = None;
    }

    pub fn is_held(&self) -> bool {
        self.value.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_late_release_keeps_newer_generation() {
        let mut slot = GenerationSlot::default();
        let first = slot.begin();
        assert!(slot.fill(first, "first drag"));
        let second = slot.begin();
        assert!(slot.fill(second, "second drag"));

        assert!(!slot.release(first));
        assert!(slot.is_held());

        assert!(slot.release(second));
        assert!(!slot.is_held());
    }

    #[test]
    fn test_fill_after_newer_begin_is_dropped() {
        let mut slot = GenerationSlot::default();
        let stale = slot.begin();
        let current = slot.begin();

        assert!(!slot.fill(stale, 1));
        assert!(!slot.is_held());
        assert!(slot.fill(current, 2));
    }

    #[test]
    fn test_clear_drops_value_regardless_of_generation() {
        let mut slot = GenerationSlot::default();
        let generation = slot.begin();
        slot.fill(generation, ());

        slot.clear();

        assert!(!slot.is_held());
        assert!(!slot.release(generation));
    }
}

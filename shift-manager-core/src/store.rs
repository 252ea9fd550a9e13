//! 弹窗状态仓库
//!
//! 每种弹窗一个实例，由宿主显式持有并传递，不存在全局单例。
//!
//! 状态只有两种：
//! - **Closed**：`open == false`
//! - **Open**：`open == true`，可附带实体
//!
//! `set_entity` 只暂存数据，不改变可见性，通常先暂存再打开。

/// 弹窗状态仓库
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalStore<E> {
    open: bool,
    entity: Option<E>,
}

impl<E> ModalStore<E> {
    /// 初始状态：关闭、无实体
    pub const fn new() -> Self {
        Self {
            open: false,
            entity: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    pub fn entity(&self) -> Option<&E> {
        self.entity.as_ref()
    }

    /// 暂存实体，不改变可见性
    pub fn set_entity(&mut self, entity: E) {
        self.entity = Some(entity);
    }

    /// 丢弃暂存的实体
    pub fn clear_entity(&mut self) -> Option<E> {
        self.entity.take()
    }

    /// 打开时的实体；关闭时为 `None`
    pub fn visible_entity(&self) -> Option<&E> {
        if self.open {
            self.entity.as_ref()
        } else {
            None
        }
    }
}

impl<E> Default for ModalStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed_and_empty() {
        let store = ModalStore::<i64>::new();
        assert!(!store.is_open());
        assert!(store.entity().is_none());
    }

    #[test]
    fn open_then_close_returns_to_initial_state() {
        let mut store = ModalStore::<i64>::new();
        store.set_open(true);
        assert!(store.is_open());
        store.set_open(false);
        assert_eq!(store, ModalStore::new());
    }

    #[test]
    fn set_entity_does_not_change_visibility() {
        let mut closed = ModalStore::new();
        closed.set_entity(3_i64);
        assert!(!closed.is_open());
        assert_eq!(closed.entity(), Some(&3));
        assert!(closed.visible_entity().is_none());

        let mut open = ModalStore::new();
        open.set_open(true);
        open.set_entity(4_i64);
        assert!(open.is_open());
        assert_eq!(open.visible_entity(), Some(&4));
    }

    #[test]
    fn store_is_reusable_across_cycles() {
        let mut store = ModalStore::new();
        for id in 1..=3_i64 {
            store.set_entity(id);
            store.set_open(true);
            assert_eq!(store.visible_entity(), Some(&id));
            store.set_open(false);
        }
        assert_eq!(store.clear_entity(), Some(3));
        assert_eq!(store, ModalStore::new());
    }
}

//! 查询缓存层
//!
//! - `QueryKey`：稳定的资源键，用于去重与缓存
//! - `QueryState`：`Pending` / `Error` / `Success` 三态
//! - `QueryCache`：按键去重的异步拉取 + 结果缓存 + 显式取消

mod cache;
mod key;
mod state;

pub use cache::QueryCache;
pub use key::{KeySegment, QueryKey};
pub use state::QueryState;

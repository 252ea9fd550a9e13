//! 远程资源访问抽象

mod api_client;

pub use api_client::ApiClient;

//! 日历订阅链接

use crate::types::UserId;

/// 当前用户的 .ics 订阅地址：`https://{domain}/api/{user_id}.ics`
///
/// 不对 `domain` / `user_id` 做任何校验或转义。
pub fn subscription_url(domain: &str, user_id: &UserId) -> String {
    format!("https://{domain}/api/{user_id}.ics")
}

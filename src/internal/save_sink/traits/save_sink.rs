//! 保存端 trait：下载成功后接收完整数据。

use async_trait::async_trait;
use bytes::Bytes;

use crate::internal::save_sink::structs::save_error::SaveError;

/// 文件保存端，相当于浏览器的「另存为 / 下载」动作。
///
/// 每次成功下载恰好调用一次 `save`；下载失败时不会调用。
#[async_trait]
pub trait SaveSink: Send + Sync {
    /// 以 `file_name` 为目标名保存 `payload`，不检查内容类型和大小。
    async fn save(&self, payload: Bytes, file_name: &str) -> Result<(), SaveError>;
}

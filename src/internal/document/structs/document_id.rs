use core::fmt;

use crate::internal::cmis::constants::DEFAULT_DOCUMENT_ID;

/// 远程文档标识：不透明字符串，保证非空
///
/// 不校验格式（如是否为 UUID），原样拼入请求地址
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentId(String);

impl DocumentId {
    /// 输入框内容为空时返回 `None`，否则原样包装（不去除首尾空白）
    pub fn parse(value: &str) -> Option<Self> {
        if value.is_empty() {
            None
        } else {
            Some(Self(value.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self(DEFAULT_DOCUMENT_ID.to_string())
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

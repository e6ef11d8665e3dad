use core::fmt;
use std::sync::Arc;

use base64::Engine;
use reqwest::header::HeaderValue;
use sha2::{Digest, Sha256};

use crate::internal::trigger::structs::download_error::DownloadError;

/// 认证结构体
///
/// 该结构体定位
/// - 按调用时刻的账号密码生成 Basic 认证请求头
/// - 每次触发下载时重新构建，保证使用的是当时的配置
///
/// 默认Eq只比较token指纹，不直接比较明文
#[derive(Clone)]
pub struct CmisAuth {
    pub(crate) authorization: HeaderValue, // 已标记为 sensitive
    pub(crate) fingerprint: Arc<String>,   // token 的 sha256，对外只暴露前缀
}

impl CmisAuth {
    /// 由账号和密码创建认证结构体，不做任何空值校验
    pub fn new(username: &str, password: &str) -> Result<Self, DownloadError> {
        let token = Self::_encode_token(username, password);

        let mut authorization =
            HeaderValue::from_str(&format!("Basic {}", token))?;
        authorization.set_sensitive(true);

        Ok(Self {
            authorization,
            fingerprint: Arc::new(Self::_hash_str(&token)),
        })
    }

    /// 请求头 `Authorization` 的值
    pub fn header_value(&self) -> &HeaderValue {
        &self.authorization
    }

    /// 指纹前 8 位，仅供日志定位使用
    pub fn fingerprint_short(&self) -> &str {
        &self.fingerprint[..8]
    }

    fn _encode_token(username: &str, password: &str) -> String {
        base64::engine::general_purpose::STANDARD
            .encode(format!("{username}:{password}"))
    }

    fn _hash_str(data: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(data.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}

impl PartialEq for CmisAuth {
    fn eq(&self, other: &Self) -> bool {
        self.fingerprint == other.fingerprint
    }
}

impl Eq for CmisAuth {}

/// 防止debug泄漏账号
impl fmt::Debug for CmisAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CmisAuth")
            .field("authorization", &"<hidden>")
            .field("fingerprint", &self.fingerprint_short())
            .finish()
    }
}

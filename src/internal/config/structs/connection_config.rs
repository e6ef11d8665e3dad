use core::fmt;

/// 连接配置：远程地址、账号、密码
///
/// 在每次触发下载时读取，不做默认值、脱敏之外的任何处理
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ConnectionConfig {
    pub base_url: String,
    pub username: String,
    pub password: String,
}

impl ConnectionConfig {
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            username: username.into(),
            password: password.into(),
        }
    }
}

/// 防止debug泄漏密码
impl fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"<hidden>")
            .finish()
    }
}

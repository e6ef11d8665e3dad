use serde::Deserialize;

/// CMIS 浏览器绑定出错时返回的 JSON 体，例如
/// `{"exception":"objectNotFound","message":"..."}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CmisErrorBody {
    #[serde(default)]
    pub exception: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl CmisErrorBody {
    /// 非 JSON 或字段都缺失时返回 `None`
    pub fn from_slice(body: &[u8]) -> Option<Self> {
        let parsed: Self = serde_json::from_slice(body).ok()?;
        if parsed.exception.is_none() && parsed.message.is_none() {
            return None;
        }
        Some(parsed)
    }
}

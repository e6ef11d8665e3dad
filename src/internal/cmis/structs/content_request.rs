use url::Url;

use crate::internal::auth::structs::cmis_auth::CmisAuth;
use crate::internal::document::structs::document_id::DocumentId;

/// 一次触发对应的请求快照：标识、地址、认证均在触发时确定，之后不再变化
#[derive(Debug, Clone)]
pub struct ContentRequest {
    pub document_id: DocumentId,
    pub url: Url,
    pub auth: CmisAuth,
}

use bytes::Bytes;
use reqwest::header::AUTHORIZATION;
use reqwest::Client;

use crate::internal::cmis::structs::cmis_error_body::CmisErrorBody;
use crate::internal::cmis::structs::content_request::ContentRequest;
use crate::internal::trigger::structs::download_error::DownloadError;

/// 发送一次带认证的 GET，成功时返回完整响应体
///
/// 不重试；非 2xx 时读取响应体并尽量解析 CMIS 错误信息
pub async fn fetch_content(
    client: &Client,
    request: &ContentRequest,
) -> Result<Bytes, DownloadError> {
    let res = client
        .get(request.url.clone())
        .header(AUTHORIZATION, request.auth.header_value().clone())
        .send()
        .await?;

    let status = res.status();

    if !status.is_success() {
        // 读取失败时按空体处理，仍以状态码报错
        let body = res.bytes().await.unwrap_or_default();
        let cmis_error = CmisErrorBody::from_slice(&body).unwrap_or_default();
        return Err(DownloadError::Status {
            status,
            exception: cmis_error.exception,
            message: cmis_error.message,
        });
    }

    Ok(res.bytes().await?)
}

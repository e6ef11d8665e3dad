use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::Url;

use crate::internal::cmis::constants::{
    CONTENT_PATH, CONTENT_QUERY_PREFIX, CONTENT_QUERY_SUFFIX,
};
use crate::internal::document::structs::document_id::DocumentId;
use crate::internal::trigger::structs::download_error::DownloadError;

/// RFC 3986 非保留字符之外全部编码
const OBJECT_ID_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// 拼接内容下载地址
///
/// 字符串直接拼接 `base_url + 路径 + 查询串 + 标识`，base_url 末尾的一个 `/` 会被去掉。
///
/// - `encode_id == false`：标识原样拼入，包含 `&`、`#` 等保留字符时会改变查询串含义
/// - `encode_id == true`：标识先做百分号编码
pub fn build_content_url(
    base_url: &str,
    document_id: &DocumentId,
    encode_id: bool,
) -> Result<Url, DownloadError> {
    if base_url.is_empty() {
        return Err(DownloadError::MissingConfig("base_url"));
    }

    let base = base_url.strip_suffix('/').unwrap_or(base_url);

    let object_id = if encode_id {
        utf8_percent_encode(document_id.as_str(), OBJECT_ID_ENCODE_SET)
            .to_string()
    } else {
        document_id.as_str().to_string()
    };

    let raw = format!(
        "{base}{CONTENT_PATH}{CONTENT_QUERY_PREFIX}{object_id}{CONTENT_QUERY_SUFFIX}"
    );

    Ok(Url::parse(&raw)?)
}

use crate::internal::document::structs::document_id::DocumentId;

/// 一次成功下载交给保存端的内容概要
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadOutcome {
    pub document_id: DocumentId,
    pub file_name: String,
    /// 响应体字节数
    pub bytes: usize,
}

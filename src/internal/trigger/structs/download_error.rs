//! 下载相关错误类型。

use reqwest::header::InvalidHeaderValue;
use reqwest::StatusCode;
use thiserror::Error;

use crate::internal::save_sink::structs::save_error::SaveError;

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("缺少配置项 {0}")]
    MissingConfig(&'static str),

    #[error("下载地址格式错误: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("认证请求头无效: {0}")]
    InvalidHeader(#[from] InvalidHeaderValue),

    #[error("创建 HTTP 客户端失败: {0}")]
    ClientBuild(reqwest::Error),

    #[error("HTTP 请求失败: {0}")]
    Request(#[from] reqwest::Error),

    #[error("服务器返回 {status}{}", format_cmis_error(.exception, .message))]
    Status {
        status: StatusCode,
        exception: Option<String>,
        message: Option<String>,
    },

    #[error("保存文件失败: {0}")]
    Save(#[from] SaveError),

    #[error("获取触发器状态锁失败")]
    StateLockFailed,
}

fn format_cmis_error(
    exception: &Option<String>,
    message: &Option<String>,
) -> String {
    match (exception, message) {
        (Some(e), Some(m)) => format!(" ({e}: {m})"),
        (Some(e), None) => format!(" ({e})"),
        (None, Some(m)) => format!(" ({m})"),
        (None, None) => String::new(),
    }
}

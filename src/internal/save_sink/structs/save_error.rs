use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("创建目录 {path} 失败: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("创建文件失败: {0}")]
    CreateFile(std::io::Error),

    #[error("写入文件失败: {0}")]
    WriteFile(std::io::Error),

    #[error("重命名到 {path} 失败: {source}")]
    Rename {
        path: PathBuf,
        source: std::io::Error,
    },
}

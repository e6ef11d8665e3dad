//! 保存到本地目录的保存端。

use std::path::{Path, PathBuf};
use std::process;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use bytes::Bytes;
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;

use crate::internal::save_sink::structs::save_error::SaveError;
use crate::internal::save_sink::traits::save_sink::SaveSink;

/// 临时文件序号，保证同一进程内并发保存互不覆盖
static TEMP_SEQ: AtomicU64 = AtomicU64::new(0);

/// 写入本地目录；同名文件直接覆盖，不做去重。
///
/// 先写同目录下的临时文件再重命名，多次并发保存同一文件名时最终留下最后完成的那一份完整文件。
#[derive(Debug, Clone)]
pub struct FileSaveSink {
    dir: PathBuf,
}

impl FileSaveSink {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// 用户的下载目录；取不到时退回当前工作目录
    pub fn downloads() -> Self {
        Self::new(dirs::download_dir().unwrap_or_else(|| PathBuf::from(".")))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn temp_path(&self, file_name: &str) -> PathBuf {
        let seq = TEMP_SEQ.fetch_add(1, Ordering::Relaxed);
        self.dir
            .join(format!(".{}.{}.{}.part", file_name, process::id(), seq))
    }
}

/// 写入临时文件；任一步失败都删除已创建的临时文件
async fn write_part(temp_path: &Path, payload: &[u8]) -> Result<(), SaveError> {
    let result = async {
        let mut file =
            File::create(temp_path).await.map_err(SaveError::CreateFile)?;
        file.write_all(payload).await.map_err(SaveError::WriteFile)?;
        file.flush().await.map_err(SaveError::WriteFile)
    }
    .await;

    if result.is_err() {
        let _ = fs::remove_file(temp_path).await;
    }
    result
}

#[async_trait]
impl SaveSink for FileSaveSink {
    async fn save(&self, payload: Bytes, file_name: &str) -> Result<(), SaveError> {
        fs::create_dir_all(&self.dir)
            .await
            .map_err(|source| SaveError::CreateDir {
                path: self.dir.clone(),
                source,
            })?;

        let temp_path = self.temp_path(file_name);
        let target = self.dir.join(file_name);

        write_part(&temp_path, &payload).await?;

        if let Err(source) = fs::rename(&temp_path, &target).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(SaveError::Rename { path: target, source });
        }

        tracing::info!(
            "saved {} bytes to {}",
            payload.len(),
            target.display()
        );
        Ok(())
    }
}

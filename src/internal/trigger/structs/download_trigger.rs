//! 下载触发器
//!
//! 一次「点击」的完整链路：读取输入的文档标识 → 拼接地址 → 带认证 GET → 交给保存端。
//!
//! ## 状态
//!
//! 触发器在整个生命周期内持有两份可变状态：当前文档标识与连接配置。
//! 输入非空时替换当前标识，且替换结果保留到后续触发；输入为空则沿用上一次的标识（初始为默认占位文档）。
//! 连接配置在每次触发时读取，随时可通过 [`DownloadTrigger::set_config`] 修改。
//!
//! ## 并发
//!
//! 标识、地址、认证在触发时同步确定（[`DownloadTrigger::prepare`]），网络请求与保存异步执行。
//! 多次触发互不协调：不去重、不取消，全部写入同一个固定文件名。
//!
//! ## 使用示例
//!
//! ```rust,no_run
//! # use std::sync::Arc;
//! # use cmis_download::DownloadTrigger;
//! # use cmis_download::config::ConnectionConfig;
//! # use cmis_download::save_sink::FileSaveSink;
//! # async fn example() -> Result<(), cmis_download::DownloadError> {
//! let trigger = DownloadTrigger::new(
//!     ConnectionConfig::new("http://localhost:8080/nuxeo", "Administrator", "Administrator"),
//!     Arc::new(FileSaveSink::downloads()),
//! )?;
//!
//! // 等待结果
//! let outcome = trigger.download("").await?;
//!
//! // 触发后不等待；句柄可选择性 await
//! let handle = trigger.activate("5c8a1d3e-0000-4000-8000-000000000000");
//! # let _ = (outcome, handle);
//! # Ok(())
//! # }
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use reqwest::Client;
use tokio::task::JoinHandle;

use crate::internal::auth::structs::cmis_auth::CmisAuth;
use crate::internal::cmis::constants::DEFAULT_FILE_NAME;
use crate::internal::cmis::functions::build_content_url::build_content_url;
use crate::internal::cmis::functions::fetch_content::fetch_content;
use crate::internal::cmis::structs::content_request::ContentRequest;
use crate::internal::config::structs::connection_config::ConnectionConfig;
use crate::internal::document::structs::document_id::DocumentId;
use crate::internal::save_sink::traits::save_sink::SaveSink;

use super::download_error::DownloadError;
use super::download_outcome::DownloadOutcome;

/// 触发器在多次触发之间保留的状态
#[derive(Debug)]
struct TriggerState {
    document_id: DocumentId,
    config: ConnectionConfig,
}

/// 下载触发器；克隆后共享同一份状态与保存端
#[derive(Clone)]
pub struct DownloadTrigger {
    client: Client,
    state: Arc<Mutex<TriggerState>>,
    sink: Arc<dyn SaveSink>,
    file_name: Arc<str>,
    encode_document_id: bool,
}

impl DownloadTrigger {
    /// 创建触发器；当前标识初始为默认占位文档，文件名为 `myFile.pdf`
    pub fn new(
        config: ConnectionConfig,
        sink: Arc<dyn SaveSink>,
    ) -> Result<Self, DownloadError> {
        let client = Client::builder()
            .http1_only()
            .build()
            .map_err(DownloadError::ClientBuild)?;

        Ok(Self {
            client,
            state: Arc::new(Mutex::new(TriggerState {
                document_id: DocumentId::default(),
                config,
            })),
            sink,
            file_name: Arc::from(DEFAULT_FILE_NAME),
            encode_document_id: false,
        })
    }

    /// 替换初始文档标识
    pub fn with_default_document_id(self, document_id: DocumentId) -> Self {
        self.state_recovered().document_id = document_id;
        self
    }

    /// 替换保存时使用的固定文件名
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Arc::from(file_name.into());
        self
    }

    /// 拼接地址前对标识做百分号编码，默认不编码
    pub fn encode_document_id(mut self) -> Self {
        self.encode_document_id = true;
        self
    }

    /// 使用自定义 HTTP 客户端（如需设置超时、代理）
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// 修改连接配置，下一次触发起生效
    pub fn set_config(&self, config: ConnectionConfig) -> Result<(), DownloadError> {
        self.lock_state()?.config = config;
        Ok(())
    }

    pub fn config(&self) -> Result<ConnectionConfig, DownloadError> {
        Ok(self.lock_state()?.config.clone())
    }

    pub fn current_document_id(&self) -> Result<DocumentId, DownloadError> {
        Ok(self.lock_state()?.document_id.clone())
    }

    /// 同步确定本次请求：非空输入替换当前标识，随后拼地址、生成认证头
    ///
    /// 标识替换先于地址校验发生，即使后续步骤失败也会保留
    pub fn prepare(&self, field_value: &str) -> Result<ContentRequest, DownloadError> {
        let (document_id, config) = {
            let mut state = self.lock_state()?;
            if let Some(entered) = DocumentId::parse(field_value) {
                state.document_id = entered;
            }
            (state.document_id.clone(), state.config.clone())
        };

        let url = build_content_url(
            &config.base_url,
            &document_id,
            self.encode_document_id,
        )?;
        let auth = CmisAuth::new(&config.username, &config.password)?;

        tracing::debug!(
            document_id = %document_id,
            url = %url,
            credential = auth.fingerprint_short(),
            "prepared content request"
        );

        Ok(ContentRequest {
            document_id,
            url,
            auth,
        })
    }

    /// 执行一次下载并等待结果；成功时保存端恰好被调用一次
    pub async fn download(&self, field_value: &str) -> Result<DownloadOutcome, DownloadError> {
        let request = self.prepare(field_value)?;
        self.run(request).await
    }

    /// 触发一次下载但不等待：请求在触发时同步确定，之后在后台执行
    ///
    /// 失败会记录 warn 日志，并通过返回的句柄交给调用方（可忽略）
    pub fn activate(&self, field_value: &str) -> JoinHandle<Result<DownloadOutcome, DownloadError>> {
        let prepared = self.prepare(field_value);
        let trigger = self.clone();

        tokio::spawn(async move {
            let result = match prepared {
                Ok(request) => trigger.run(request).await,
                Err(e) => Err(e),
            };
            if let Err(e) = &result {
                tracing::warn!("download failed: {}", e);
            }
            result
        })
    }

    async fn run(&self, request: ContentRequest) -> Result<DownloadOutcome, DownloadError> {
        let payload = fetch_content(&self.client, &request).await?;
        let bytes = payload.len();

        self.sink.save(payload, &self.file_name).await?;

        Ok(DownloadOutcome {
            document_id: request.document_id,
            file_name: self.file_name.to_string(),
            bytes,
        })
    }

    fn lock_state(&self) -> Result<MutexGuard<'_, TriggerState>, DownloadError> {
        self.state.lock().map_err(|_| DownloadError::StateLockFailed)
    }

    /// 构建阶段使用：锁中毒时直接取回内部数据
    fn state_recovered(&self) -> MutexGuard<'_, TriggerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

//! 从环境变量 / `.env` 文件读取连接配置。

use std::env;
use std::path::Path;

use dotenvy::{dotenv, from_filename_override};

use crate::internal::config::structs::config_error::ConfigError;
use crate::internal::config::structs::connection_config::ConnectionConfig;
use crate::internal::document::structs::document_id::DocumentId;

/// 配置所需的环境变量名
pub mod env_var_names {
    /// 远程根地址，例如 `http://localhost:8080/nuxeo`
    pub const CMIS_BASE_URL: &str = "CMIS_BASE_URL";
    /// 账号
    pub const CMIS_USERNAME: &str = "CMIS_USERNAME";
    /// 密码
    pub const CMIS_PASSWORD: &str = "CMIS_PASSWORD";
    /// 可选：默认文档标识
    pub const CMIS_DOCUMENT_ID: &str = "CMIS_DOCUMENT_ID";
}

/// 加载 `.env` 文件
///
/// - 传入路径：文件必须存在，其中的变量覆盖当前进程环境
/// - 未传路径：尝试工作目录下的 `.env`，不存在时静默跳过
pub fn load_env_file(path: Option<&Path>) -> Result<(), ConfigError> {
    match path {
        Some(p) => {
            from_filename_override(p)?;
            tracing::debug!("loaded env file {}", p.display());
        }
        None => match dotenv() {
            Ok(p) => tracing::debug!("loaded env file {}", p.display()),
            Err(e) if e.not_found() => {}
            Err(e) => return Err(e.into()),
        },
    }
    Ok(())
}

impl ConnectionConfig {
    /// 从进程环境读取三项连接配置
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 通过任意键值来源读取配置；缺少任一项时报错，空字符串原样接受
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |name: &'static str| {
            lookup(name).ok_or(ConfigError::MissingVar(name))
        };

        Ok(Self {
            base_url: require(env_var_names::CMIS_BASE_URL)?,
            username: require(env_var_names::CMIS_USERNAME)?,
            password: require(env_var_names::CMIS_PASSWORD)?,
        })
    }
}

/// 读取可选的默认文档标识；未设置或为空时返回 `None`
pub fn default_document_id_from_env() -> Option<DocumentId> {
    env::var(env_var_names::CMIS_DOCUMENT_ID)
        .ok()
        .and_then(|v| DocumentId::parse(&v))
}

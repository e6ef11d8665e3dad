use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("加载 env 文件失败: {0}")]
    Dotenv(#[from] dotenvy::Error),

    #[error("缺少环境变量 {0}")]
    MissingVar(&'static str),
}

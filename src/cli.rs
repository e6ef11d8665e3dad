use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Result};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use cmis_download::cmis::constants::DEFAULT_FILE_NAME;
use cmis_download::config::{
    default_document_id_from_env, env_var_names, load_env_file, ConnectionConfig,
};
use cmis_download::document::DocumentId;
use cmis_download::logging::init_logging;
use cmis_download::save_sink::FileSaveSink;
use cmis_download::{DownloadOutcome, DownloadTrigger};

/// 从 CMIS（Nuxeo）内容接口下载文档的 PDF 渲染。
///
/// 不带 `--id` 时进入交互模式：每输入一行触发一次下载，
/// 行内容为文档标识，空行沿用当前标识。
#[derive(Debug, Parser)]
#[command(name = "cmis-download")]
#[command(about = "Download the PDF rendition of a CMIS document", long_about = None)]
pub struct Cli {
    /// 额外加载的 env 文件；不传时尝试工作目录下的 `.env`
    #[arg(long)]
    pub env_file: Option<PathBuf>,

    /// 远程根地址，覆盖 CMIS_BASE_URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// 账号，覆盖 CMIS_USERNAME
    #[arg(long)]
    pub username: Option<String>,

    /// 密码，覆盖 CMIS_PASSWORD
    #[arg(long)]
    pub password: Option<String>,

    /// 初始文档标识，覆盖 CMIS_DOCUMENT_ID
    #[arg(long)]
    pub default_id: Option<String>,

    /// 保存目录，默认为用户下载目录
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// 保存文件名
    #[arg(long, default_value = DEFAULT_FILE_NAME)]
    pub file_name: String,

    /// 拼接地址前对文档标识做百分号编码
    #[arg(long)]
    pub encode_id: bool,

    /// 只下载一次该文档后退出
    #[arg(long)]
    pub id: Option<String>,

    /// 打开 debug 日志
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        cli.init_environment()?;

        let config = cli.connection_config()?;
        tracing::debug!("loaded config: {:?}", config);

        let sink = match &cli.output_dir {
            Some(dir) => FileSaveSink::new(dir),
            None => FileSaveSink::downloads(),
        };
        let save_dir = sink.dir().to_path_buf();

        let mut trigger = DownloadTrigger::new(config, Arc::new(sink))?
            .with_file_name(cli.file_name.clone());
        if let Some(id) = cli.default_document_id() {
            trigger = trigger.with_default_document_id(id);
        }
        if cli.encode_id {
            trigger = trigger.encode_document_id();
        }

        if let Some(id) = &cli.id {
            let outcome = trigger.download(id).await?;
            report(&outcome, &save_dir);
            return Ok(());
        }

        run_interactive(&trigger, &save_dir).await
    }

    /// 先加载 env 文件，其中的 `RUST_LOG` 才会对日志生效
    pub fn init_environment(&self) -> Result<()> {
        load_env_file(self.env_file.as_deref())?;
        init_logging(self.verbose);
        Ok(())
    }

    /// 命令行参数优先，其次环境变量
    pub fn connection_config(&self) -> Result<ConnectionConfig> {
        let config = ConnectionConfig::from_lookup(|name| {
            let flag = match name {
                env_var_names::CMIS_BASE_URL => self.base_url.clone(),
                env_var_names::CMIS_USERNAME => self.username.clone(),
                env_var_names::CMIS_PASSWORD => self.password.clone(),
                _ => None,
            };
            flag.or_else(|| env::var(name).ok())
        })?;
        Ok(config)
    }

    pub fn default_document_id(&self) -> Option<DocumentId> {
        match &self.default_id {
            Some(id) => DocumentId::parse(id),
            None => default_document_id_from_env(),
        }
    }
}

/// 每行一次触发，互不等待；输入结束后等待所有进行中的下载
async fn run_interactive(trigger: &DownloadTrigger, save_dir: &std::path::Path) -> Result<()> {
    tracing::info!(
        "current document {}; enter an id or an empty line to download",
        trigger.current_document_id()?
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut in_flight = Vec::new();
    while let Some(line) = lines.next_line().await? {
        in_flight.push(trigger.activate(&line));
    }

    let mut failed = 0usize;
    for handle in in_flight {
        match handle.await? {
            Ok(outcome) => report(&outcome, save_dir),
            // 失败已在触发器内记录日志
            Err(_) => failed += 1,
        }
    }

    if failed > 0 {
        bail!("{failed} download(s) failed");
    }
    Ok(())
}

fn report(outcome: &DownloadOutcome, save_dir: &std::path::Path) {
    println!(
        "{} -> {} ({} bytes)",
        outcome.document_id,
        save_dir.join(&outcome.file_name).display(),
        outcome.bytes
    );
}

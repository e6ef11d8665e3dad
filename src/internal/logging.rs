//! 日志初始化：输出到 stderr，级别可由 `RUST_LOG` 覆盖。

use tracing_subscriber::EnvFilter;

/// 默认过滤规则；`verbose` 时打开本 crate 的 debug 日志
fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "info,cmis_download=debug"
    } else {
        "info"
    }
}

/// 安装全局 fmt 订阅器。重复调用时保留第一次的设置。
pub fn init_logging(verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}

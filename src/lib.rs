/// 内部实现模块
mod internal;


/// 导出核心入口：下载触发器
pub use internal::trigger::structs::download_trigger::*;
pub use internal::trigger::structs::download_error::DownloadError;
pub use internal::trigger::structs::download_outcome::DownloadOutcome;

pub mod auth {
    use crate::internal;
    pub use internal::auth::structs::cmis_auth::CmisAuth;
}

pub mod document {
    use crate::internal;
    pub use internal::document::structs::document_id::DocumentId;
}

pub mod config {
    use crate::internal;
    pub use internal::config::functions::load_env::*;
    pub use internal::config::structs::config_error::ConfigError;
    pub use internal::config::structs::connection_config::ConnectionConfig;
}

/// 对外提供 CMIS 基础访问能力，便于不经过触发器直接拼 URL 或发请求
pub mod cmis {
    pub mod constants {
        use crate::internal;
        pub use internal::cmis::constants::*;
    }

    pub mod functions {
        use crate::internal;
        pub use internal::cmis::functions::build_content_url::*;
        pub use internal::cmis::functions::fetch_content::*;
    }

    pub mod structs {
        use crate::internal;
        pub use internal::cmis::structs::cmis_error_body::CmisErrorBody;
        pub use internal::cmis::structs::content_request::ContentRequest;
    }
}

pub mod save_sink {
    use crate::internal;
    pub use internal::save_sink::structs::file_save_sink::FileSaveSink;
    pub use internal::save_sink::structs::save_error::SaveError;
    pub use internal::save_sink::traits::save_sink::SaveSink;
}

pub mod logging {
    use crate::internal;
    pub use internal::logging::*;
}

//! CMIS 浏览器绑定（Nuxeo）内容下载相关常量。

/// 内容接口路径，拼在 base_url 之后
pub const CONTENT_PATH: &str = "/json/cmis/default/root";

/// 查询串前半段，`objectId=` 之后紧跟文档标识
pub const CONTENT_QUERY_PREFIX: &str = "?succinct=true&streamId=nuxeo%3Arendition%3Apdf&cmisselector=content&objectId=";

/// 查询串后半段
pub const CONTENT_QUERY_SUFFIX: &str = "&download=attachment";

/// 未输入标识时使用的占位文档
pub const DEFAULT_DOCUMENT_ID: &str = "07cdb579-b845-46a7-b22f-f49fa4f7de8b";

/// 保存时使用的固定文件名，与源文档真实名称无关
pub const DEFAULT_FILE_NAME: &str = "myFile.pdf";

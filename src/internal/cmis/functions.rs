pub mod build_content_url;
pub mod fetch_content;

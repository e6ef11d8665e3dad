pub mod cmis_error_body;
pub mod content_request;

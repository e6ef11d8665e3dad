pub mod cmis_auth;

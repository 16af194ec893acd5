mod init_tracing;
mod log_sanitizer;
mod request_id;

pub use init_tracing::init_tracing;
pub use log_sanitizer::preview_content;
pub use request_id::{request_id_middleware, RequestId, REQUEST_ID_HEADER};

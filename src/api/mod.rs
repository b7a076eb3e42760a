pub mod handlers;
pub mod routes;

pub use handlers::{convert_upload, health_check, home};
pub use routes::router;

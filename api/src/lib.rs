mod action;
mod error;
mod extractor;
mod init;
mod middleware;

pub mod models;
pub mod openapi;
pub mod routers;

pub use error::ApiError;
pub use init::{build_router, setup_config, setup_db, setup_router};
use serde::Serialize;

/// Envelope returned by state-changing endpoints.
#[derive(Serialize, Debug)]
pub struct ApiResponse<T: Serialize> {
    success: bool,
    message: String,
    data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful API response.
    ///
    /// # Arguments
    ///
    /// * `message` - A descriptive success message.
    /// * `data` - Optional data payload associated with the success.
    pub fn success(message: &str, data: Option<T>) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            data,
        }
    }
}

impl ApiResponse<()> {
    /// A success envelope without payload.
    pub fn message(message: &str) -> Self {
        Self::success(message, None)
    }
}

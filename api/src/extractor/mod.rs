mod auth;
mod json;
mod params;
mod valid;

pub use auth::{AdminUser, CurrentUser};
pub use json::Json;
pub use params::{Path, Query};
pub use valid::Valid;

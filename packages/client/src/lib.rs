pub mod api;
pub mod error;
pub mod http;
pub mod models;
pub mod poll;

pub use error::{ClientError, Result};
pub use http::ApiClient;
pub use poll::{PollConfig, PollUpdate, poll_result};

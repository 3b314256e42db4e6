pub mod client;
pub mod dispatch;
pub mod http_client;

pub use client::TbaClient;
pub use dispatch::{RawResponse, dispatch, dispatch_then};
pub use http_client::create_http_client_with_timeout;

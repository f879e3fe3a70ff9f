mod bind;
mod error;

pub use self::bind::{normalize_bind, request_url};
pub use self::error::BindError;

pub use http::{Method, Request, Uri};

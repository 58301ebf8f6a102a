//! HTTP Request domain types

mod body;
mod header;
mod method;
mod spec;
mod template;

pub use body::{RequestBody, RequestBodyKind};
pub use header::{Header, Headers};
pub use method::HttpMethod;
pub use spec::RequestSpec;
pub use template::{RequestLog, RequestTemplate};

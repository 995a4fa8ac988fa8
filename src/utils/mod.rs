pub mod constants;
pub mod url_utils;

pub use constants::*;
pub use url_utils::{has_host, parse_http_url};

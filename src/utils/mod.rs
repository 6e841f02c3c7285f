pub mod constants;
pub mod url_utils;

pub use constants::*;
pub use url_utils::{
    is_absolute_http, is_data_url, resolve_reference, route_from_link, sanitize_filename,
    strip_fragment,
};

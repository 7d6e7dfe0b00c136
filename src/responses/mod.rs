pub mod html;
pub mod json;

pub use html::{html_response, html_response_with_status};
pub use json::json_response;

pub mod errors;
pub mod html;
pub mod json;
pub mod text;
pub mod xlsx;

pub use errors::{error_to_response, ResultResp};
pub use html::{html_response, redirect_response};
pub use json::json_response;
pub use text::text_response;
pub use xlsx::xlsx_response;

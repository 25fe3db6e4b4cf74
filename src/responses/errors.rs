use crate::errors::ServerError;
use astra::{Body, Response, ResponseBuilder};
use maud::html;

pub type ResultResp = Result<Response, ServerError>;

/// Convert a ServerError into a proper HTML response.
pub fn error_to_response(err: ServerError) -> Response {
    let (status, message) = match err {
        ServerError::NotFound => (404, "Not Found".to_string()),
        ServerError::BadRequest(msg) => (400, msg),
        ServerError::DbError(msg)
        | ServerError::DataError(msg)
        | ServerError::XlsxError(msg) => (500, msg),
        ServerError::InternalError => (500, "Internal Server Error".to_string()),
    };
    html_error_response(status, &message)
}

pub fn html_error_response(status: u16, message: &str) -> Response {
    let markup = html! {
        (maud::DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Error " (status) }
            }
            body {
                h1 { "Error " (status) }
                p { (message) }
                p { a href="/" { "Back to the estimator" } }
            }
        }
    };

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(markup.into_string()))
        .unwrap()
}

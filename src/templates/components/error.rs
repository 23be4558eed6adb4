use crate::errors::ServerError;
use astra::{Body, Response, ResponseBuilder};
use maud::html;

/// Convert a ServerError into a proper HTML response page
pub fn html_error_response(err: ServerError) -> Response {
    let status = err.status();
    match err {
        ServerError::NotFound => render_error(
            status,
            "Property Not Found",
            "The property you are looking for doesn't exist or has been removed.",
        ),

        ServerError::BadRequest(msg) => render_error(status, "Bad Request", &msg),

        ServerError::SourceUnavailable(_) => render_error(
            status,
            "Listings Unavailable",
            "We couldn't load our listings right now. Please try again shortly.",
        ),

        ServerError::InternalError => render_error(status, "Error", "Internal Server Error"),
    }
}

/// Build a basic HTML error page
fn render_error(status: u16, heading: &str, message: &str) -> Response {
    let page = html! {
        (maud::DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Error " (status) }
                style {
                    "body { font-family: system-ui, sans-serif; max-width: 720px; "
                    "margin: 4rem auto; padding: 1rem; }"
                    "h1 { font-size: 2rem; margin-bottom: 1rem; }"
                    "p { font-size: 1.1rem; color: #444; }"
                }
            }
            body {
                h1 { (status) " · " (heading) }
                p { (message) }
                p { a href="/" { "← Back to home" } }
            }
        }
    };

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(page.into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}

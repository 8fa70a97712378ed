use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(#[source] gloo_net::Error),

    /// The server answered with a non-success status
    #[error("{url} returned status {status}")]
    Status { status: u16, url: String },

    /// The response body did not match the expected shape
    #[error("Could not decode response: {0}")]
    Decode(#[source] gloo_net::Error),

    #[error("Could not encode request body: {0}")]
    Encode(#[source] gloo_net::Error),
}

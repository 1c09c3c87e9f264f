use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("URL parameter is required")]
    MissingUrl,

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("No articles found at {0}")]
    EmptyResult(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("External error: {0}")]
    External(#[from] anyhow::Error),
}

impl Error {
    /// Message shown to API clients. Transport details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            Error::MissingUrl => "URL parameter is required".to_string(),
            Error::InvalidUrl(_) => "Invalid URL provided".to_string(),
            Error::Fetch(_) | Error::Http(_) => "Failed to fetch the webpage".to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_message_hides_fetch_details() {
        let err = Error::Fetch("status 503 from https://example.com".to_string());
        assert_eq!(err.public_message(), "Failed to fetch the webpage");
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn test_public_message_for_input_errors() {
        assert_eq!(Error::MissingUrl.public_message(), "URL parameter is required");
        assert_eq!(
            Error::InvalidUrl("nope".to_string()).public_message(),
            "Invalid URL provided"
        );
    }
}

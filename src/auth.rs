use crate::error::Result;
use reqwest::header::{HeaderMap, HeaderValue};

pub fn get_auth_headers(api_key: &str) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert("X-Api-Key", HeaderValue::from_str(api_key)?);
    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_header_is_set() {
        let headers = get_auth_headers("secret-key").unwrap();
        assert_eq!(headers.get("X-Api-Key").unwrap(), "secret-key");
    }

    #[test]
    fn newline_in_key_is_rejected() {
        assert!(get_auth_headers("bad\nkey").is_err());
    }
}

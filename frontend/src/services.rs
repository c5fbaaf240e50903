// API service layer for talking to the datastore backend
use gloo_net::http::Request;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

const API_BASE_URL: &str = "/api/v1";

/// Message substring the datastore puts in its duplicate-entry rejection.
/// Matched for parity with backends that do not send a structured code yet.
pub const DUPLICATE_ENTRY_MESSAGE: &str = "This login already exists";

// ============================================
// ERROR HANDLING
// ============================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub message: String,
    pub code: Option<String>,
}

impl ApiError {
    /// True when a save was rejected because an equivalent entry already
    /// exists. Prefers the structured code, falls back to the legacy
    /// message substring.
    pub fn is_duplicate_entry(&self) -> bool {
        self.code.as_deref() == Some("DUPLICATE_ENTRY")
            || self.message.contains(DUPLICATE_ENTRY_MESSAGE)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

// ============================================
// HTTP CLIENT
// ============================================

pub struct ApiClient;

impl ApiClient {
    async fn request<T: DeserializeOwned>(method: &str, endpoint: &str) -> ApiResult<T> {
        let url = format!("{}{}", API_BASE_URL, endpoint);

        let req = match method {
            "GET" => Request::get(&url),
            "DELETE" => Request::delete(&url),
            _ => return Err(ApiError { message: "Invalid method".to_string(), code: None }),
        };

        let response = req.send().await.map_err(|e| ApiError {
            message: e.to_string(),
            code: Some("NETWORK_ERROR".to_string()),
        })?;

        if response.ok() {
            response.json::<T>().await.map_err(|e| ApiError {
                message: e.to_string(),
                code: Some("PARSE_ERROR".to_string()),
            })
        } else {
            let error = response.json::<ApiError>().await.unwrap_or(ApiError {
                message: format!("HTTP Error: {}", response.status()),
                code: Some(format!("HTTP_{}", response.status())),
            });
            Err(error)
        }
    }

    async fn request_with_body<T: DeserializeOwned, B: Serialize>(
        method: &str,
        endpoint: &str,
        body: &B,
    ) -> ApiResult<T> {
        let url = format!("{}{}", API_BASE_URL, endpoint);

        let req = match method {
            "POST" => Request::post(&url),
            "PUT" => Request::put(&url),
            _ => return Err(ApiError { message: "Invalid method".to_string(), code: None }),
        };

        let response = req
            .header("Content-Type", "application/json")
            .json(body)
            .map_err(|e| ApiError {
                message: e.to_string(),
                code: Some("SERIALIZE_ERROR".to_string()),
            })?
            .send()
            .await
            .map_err(|e| ApiError {
                message: e.to_string(),
                code: Some("NETWORK_ERROR".to_string()),
            })?;

        if response.ok() {
            response.json::<T>().await.map_err(|e| ApiError {
                message: e.to_string(),
                code: Some("PARSE_ERROR".to_string()),
            })
        } else {
            let error = response.json::<ApiError>().await.unwrap_or(ApiError {
                message: format!("HTTP Error: {}", response.status()),
                code: Some(format!("HTTP_{}", response.status())),
            });
            Err(error)
        }
    }

    pub async fn get<T: DeserializeOwned>(endpoint: &str) -> ApiResult<T> {
        Self::request("GET", endpoint).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(endpoint: &str, body: &B) -> ApiResult<T> {
        Self::request_with_body("POST", endpoint, body).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize>(endpoint: &str, body: &B) -> ApiResult<T> {
        Self::request_with_body("PUT", endpoint, body).await
    }

    pub async fn delete<T: DeserializeOwned>(endpoint: &str) -> ApiResult<T> {
        Self::request("DELETE", endpoint).await
    }
}

// ============================================
// ITEMS SERVICE
// ============================================

pub mod items {
    use super::*;
    use keywarden_shared::{Item, ItemFields};

    pub async fn list() -> ApiResult<Vec<Item>> {
        ApiClient::get("/items").await
    }

    pub async fn get(id: &str) -> ApiResult<Item> {
        ApiClient::get(&format!("/items/{}", id)).await
    }

    pub async fn create(fields: &ItemFields) -> ApiResult<Item> {
        ApiClient::post("/items", fields).await
    }

    pub async fn update(id: &str, fields: &ItemFields) -> ApiResult<Item> {
        ApiClient::put(&format!("/items/{}", id), fields).await
    }

    pub async fn delete(id: &str) -> ApiResult<()> {
        ApiClient::delete(&format!("/items/{}", id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_detected_from_message_substring() {
        let error = ApiError {
            message: "This login already exists for example.com".to_string(),
            code: None,
        };
        assert!(error.is_duplicate_entry());
    }

    #[test]
    fn duplicate_detected_from_structured_code() {
        let error = ApiError {
            message: "conflict".to_string(),
            code: Some("DUPLICATE_ENTRY".to_string()),
        };
        assert!(error.is_duplicate_entry());
    }

    #[test]
    fn unrelated_error_is_not_a_duplicate() {
        let error = ApiError {
            message: "HTTP Error: 500".to_string(),
            code: Some("HTTP_500".to_string()),
        };
        assert!(!error.is_duplicate_entry());
    }

    #[test]
    fn display_shows_the_message() {
        let error = ApiError {
            message: "something broke".to_string(),
            code: None,
        };
        assert_eq!(error.to_string(), "something broke");
    }
}

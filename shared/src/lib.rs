use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

const ORIGIN_MAX_BYTES: usize = 2_048;
const USERNAME_MAX_BYTES: usize = 256;
const PASSWORD_MAX_BYTES: usize = 10_000;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("origin must not be empty")]
    EmptyOrigin,
    #[error("field `{field}` exceeds {limit} bytes")]
    TooLong { field: &'static str, limit: usize },
}

/// The editable subset of a credential entry. This is exactly what the edit
/// form hands back on save; the item id travels separately.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemFields {
    pub origin: String,
    pub username: String,
    pub password: String,
}

impl ItemFields {
    pub fn validate(&self) -> Result<(), FieldError> {
        if self.origin.is_empty() {
            return Err(FieldError::EmptyOrigin);
        }
        if self.origin.len() > ORIGIN_MAX_BYTES {
            return Err(FieldError::TooLong {
                field: "origin",
                limit: ORIGIN_MAX_BYTES,
            });
        }
        if self.username.len() > USERNAME_MAX_BYTES {
            return Err(FieldError::TooLong {
                field: "username",
                limit: USERNAME_MAX_BYTES,
            });
        }
        if self.password.len() > PASSWORD_MAX_BYTES {
            return Err(FieldError::TooLong {
                field: "password",
                limit: PASSWORD_MAX_BYTES,
            });
        }
        Ok(())
    }
}

/// One stored credential entry as returned by the datastore API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub title: String,
    pub origin: String,
    pub username: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

impl Item {
    /// Projects the editable fields, dropping the identifier and metadata.
    pub fn fields(&self) -> ItemFields {
        ItemFields {
            origin: self.origin.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
        }
    }
}

/// Extracts the hostname from an origin value.
pub fn parse_hostname(origin: &str) -> Result<String, url::ParseError> {
    let url = Url::parse(origin)?;
    url.host_str()
        .map(str::to_owned)
        .ok_or(url::ParseError::EmptyHost)
}

/// Hostname of the origin, or the raw value when it does not parse as a URL.
/// Display-only; parse failure is not an error worth surfacing.
pub fn host_for_display(origin: &str) -> String {
    parse_hostname(origin).unwrap_or_else(|_| origin.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_item() -> Item {
        Item {
            id: "item-1".to_owned(),
            title: "example.com".to_owned(),
            origin: "https://example.com".to_owned(),
            username: "user@example.com".to_owned(),
            password: "s3cr3t".to_owned(),
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
            modified_at: None,
        }
    }

    #[test]
    fn hostname_from_full_url() {
        assert_eq!(parse_hostname("https://example.com/path").unwrap(), "example.com");
        assert_eq!(host_for_display("https://example.com/path"), "example.com");
    }

    #[test]
    fn hostname_keeps_port_out() {
        assert_eq!(host_for_display("https://example.com:8443/login"), "example.com");
    }

    #[test]
    fn unparseable_origin_falls_back_to_raw_value() {
        assert!(parse_hostname("not a url").is_err());
        assert_eq!(host_for_display("not a url"), "not a url");
    }

    #[test]
    fn hostless_url_falls_back_to_raw_value() {
        // data: URLs parse but carry no host
        assert_eq!(host_for_display("data:text/plain,hi"), "data:text/plain,hi");
    }

    #[test]
    fn empty_origin_falls_back_to_empty_string() {
        assert_eq!(host_for_display(""), "");
    }

    #[test]
    fn fields_projection_excludes_id_and_metadata() {
        let item = sample_item();
        let fields = item.fields();
        assert_eq!(fields.origin, "https://example.com");
        assert_eq!(fields.username, "user@example.com");
        assert_eq!(fields.password, "s3cr3t");
    }

    #[test]
    fn default_fields_are_empty() {
        let fields = ItemFields::default();
        assert_eq!(fields.origin, "");
        assert_eq!(fields.username, "");
        assert_eq!(fields.password, "");
    }

    #[test]
    fn validate_rejects_empty_origin() {
        let fields = ItemFields {
            origin: String::new(),
            username: "user".to_owned(),
            password: "pw".to_owned(),
        };
        assert_eq!(fields.validate(), Err(FieldError::EmptyOrigin));
    }

    #[test]
    fn validate_enforces_byte_ceilings() {
        let fields = ItemFields {
            origin: "https://example.com".to_owned(),
            username: "u".repeat(257),
            password: "pw".to_owned(),
        };
        assert_eq!(
            fields.validate(),
            Err(FieldError::TooLong { field: "username", limit: 256 })
        );

        let fields = ItemFields {
            origin: "https://example.com".to_owned(),
            username: "user".to_owned(),
            password: "p".repeat(10_001),
        };
        assert_eq!(
            fields.validate(),
            Err(FieldError::TooLong { field: "password", limit: 10_000 })
        );
    }

    #[test]
    fn validate_accepts_ordinary_fields() {
        assert_eq!(sample_item().fields().validate(), Ok(()));
    }
}

//! Wire models for the Cervantes REST API.
//!
//! One module per resource family. Entities mirror the JSON payloads the
//! remote API exchanges: camelCase property names, nullable fields as
//! `Option` (never sentinel defaults), enums transmitted as integer codes
//! with a fixed ordinal mapping.
//!
//! Request payloads are explicit named structs per endpoint: create payloads
//! never carry an `id`, update payloads always do.

pub mod client;
pub mod document;
pub mod jira;
pub mod knowledge;
pub mod log;
pub mod note;
pub mod project;
pub mod report;
pub mod role;
pub mod target;
pub mod task;
pub mod user;
pub mod vault;

pub use client::*;
pub use document::*;
pub use jira::*;
pub use knowledge::*;
pub use log::*;
pub use note::*;
pub use project::*;
pub use report::*;
pub use role::*;
pub use target::*;
pub use task::*;
pub use user::*;
pub use vault::*;

/// Declare an enum transmitted as an integer code on the wire.
///
/// The ordinal mapping is part of the wire contract and must stay stable;
/// out-of-range codes fail conversion, which surfaces as an invalid-params
/// error at the tool boundary.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($(#[$vmeta:meta])* $variant:ident = $value:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        #[serde(into = "i32", try_from = "i32")]
        pub enum $name {
            $($(#[$vmeta])* $variant = $value),+
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> i32 {
                value as i32
            }
        }

        impl TryFrom<i32> for $name {
            type Error = String;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                match value {
                    $($value => Ok($name::$variant),)+
                    other => Err(format!(
                        concat!("invalid ", stringify!($name), " code: {}"),
                        other
                    )),
                }
            }
        }
    };
}

pub(crate) use wire_enum;

/// Serde helper for binary content carried as a base64 string on the wire.
///
/// The Cervantes API follows the System.Text.Json convention of encoding
/// byte arrays as base64 strings inside JSON payloads.
pub mod base64_bytes {
    use base64::engine::general_purpose::STANDARD as BASE64;
    use base64::Engine as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(bytes: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match bytes {
            Some(b) => BASE64.encode(b).serialize(serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(text) => BASE64
                .decode(text)
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }

    #[cfg(test)]
    mod tests {
        use serde::{Deserialize, Serialize};

        #[derive(Serialize, Deserialize)]
        struct Carrier {
            #[serde(with = "super")]
            file_content: Option<Vec<u8>>,
        }

        #[test]
        fn test_bytes_round_trip_as_base64_string() {
            let carrier = Carrier {
                file_content: Some(b"hello".to_vec()),
            };
            let json = serde_json::to_string(&carrier).unwrap();
            assert_eq!(json, r#"{"file_content":"aGVsbG8="}"#);

            let back: Carrier = serde_json::from_str(&json).unwrap();
            assert_eq!(back.file_content.as_deref(), Some(b"hello".as_ref()));
        }

        #[test]
        fn test_none_serializes_as_null() {
            let json = serde_json::to_string(&Carrier { file_content: None }).unwrap();
            assert_eq!(json, r#"{"file_content":null}"#);
        }
    }
}

//! Status-in-body response envelope.
//!
//! Every endpoint answers `{ "status": bool, "data": ..., "message": ... }`.
//! `status: true` is success regardless of HTTP status code; on failure
//! `message` carries the user-facing error text.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::domain::ports::MutationOutcome;
use crate::domain::ResourceError;

const FALLBACK_FAILURE: &str = "Request failed";

/// Parsed response body shared by every endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    /// `true` on success; the only success signal the API provides.
    #[serde(default)]
    pub status: bool,
    /// Payload, present on most successful answers.
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    /// User-facing text, mostly present on failures.
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    fn into_data(self) -> Result<(Option<T>, Option<String>), ResourceError> {
        if self.status {
            Ok((self.data, self.message))
        } else {
            Err(ResourceError::server(
                self.message.unwrap_or_else(|| FALLBACK_FAILURE.to_owned()),
            ))
        }
    }
}

fn parse<T: DeserializeOwned>(body: &[u8]) -> Result<Envelope<T>, ResourceError> {
    serde_json::from_slice(body)
        .map_err(|error| ResourceError::network(format!("invalid response body: {error}")))
}

/// Decode a list response into its rows.
///
/// A successful envelope with no `data` yields an empty list, which some
/// endpoints use for "nothing yet".
///
/// # Errors
///
/// [`ResourceError::Server`] when the envelope signals failure,
/// [`ResourceError::Network`] when the body is not a valid envelope.
pub fn decode_rows<T: DeserializeOwned>(body: &[u8]) -> Result<Vec<T>, ResourceError> {
    let (data, _message) = parse::<Vec<T>>(body)?.into_data()?;
    Ok(data.unwrap_or_default())
}

/// Decode a create/update response into a [`MutationOutcome`].
///
/// # Errors
///
/// Same taxonomy as [`decode_rows`].
pub fn decode_mutation<T: DeserializeOwned>(
    body: &[u8],
) -> Result<MutationOutcome<T>, ResourceError> {
    let (data, message) = parse::<T>(body)?.into_data()?;
    Ok(MutationOutcome { row: data, message })
}

/// Decode a delete response, keeping only the server message.
///
/// # Errors
///
/// Same taxonomy as [`decode_rows`].
pub fn decode_ack(body: &[u8]) -> Result<Option<String>, ResourceError> {
    let (_data, message) = parse::<serde_json::Value>(body)?.into_data()?;
    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
    struct Row {
        id: i64,
    }

    #[rstest]
    fn rows_decode_from_a_successful_envelope() {
        let body = br#"{"status":true,"data":[{"id":1},{"id":2}]}"#;
        let rows: Vec<Row> = decode_rows(body).expect("decodes");
        assert_eq!(rows, vec![Row { id: 1 }, Row { id: 2 }]);
    }

    #[rstest]
    fn successful_envelope_without_data_yields_an_empty_list() {
        let body = br#"{"status":true,"message":"Nothing yet"}"#;
        let rows: Vec<Row> = decode_rows(body).expect("decodes");
        assert!(rows.is_empty());
    }

    #[rstest]
    fn failure_envelope_carries_the_server_message() {
        let body = br#"{"status":false,"message":"Name already exists"}"#;
        let error = decode_rows::<Row>(body).expect_err("server failure");
        assert_eq!(error, ResourceError::server("Name already exists"));
    }

    #[rstest]
    fn failure_envelope_without_a_message_uses_the_fallback() {
        let body = br#"{"status":false}"#;
        let error = decode_ack(body).expect_err("server failure");
        assert_eq!(error, ResourceError::server("Request failed"));
    }

    #[rstest]
    fn mutation_keeps_both_the_entity_and_the_message() {
        let body = br#"{"status":true,"data":{"id":9},"message":"Created"}"#;
        let outcome = decode_mutation::<Row>(body).expect("decodes");
        assert_eq!(outcome.row, Some(Row { id: 9 }));
        assert_eq!(outcome.message, Some("Created".to_owned()));
    }

    #[rstest]
    fn mutation_may_acknowledge_without_an_entity() {
        let body = br#"{"status":true,"message":"Updated successfully"}"#;
        let outcome = decode_mutation::<Row>(body).expect("decodes");
        assert!(outcome.row.is_none());
        assert_eq!(outcome.message, Some("Updated successfully".to_owned()));
    }

    #[rstest]
    fn malformed_bodies_share_the_transport_failure_path() {
        let error = decode_ack(b"<html>504</html>").expect_err("not an envelope");
        assert!(matches!(error, ResourceError::Network { .. }));
    }
}

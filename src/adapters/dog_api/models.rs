//! Wire models for the dog.ceo breed list endpoint.

use serde::Deserialize;

/// Envelope returned by `GET /breed/{breed}/list`.
///
/// The `message` field changes shape with `status`: a string array of
/// sub-breed names on success, a human-readable error string otherwise.
#[derive(Debug, Deserialize)]
pub struct BreedListResponse {
    /// `"success"` (case-insensitive) when the breed resolved.
    pub status: String,

    /// Sub-breed names or error text, depending on `status`.
    pub message: Option<MessagePayload>,
}

/// Payload of the `message` field.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum MessagePayload {
    /// Sub-breed names, in the order the API lists them.
    SubBreeds(Vec<String>),
    /// Error text accompanying a non-success `status`.
    Error(String),
}

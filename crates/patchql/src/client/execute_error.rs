use crate::client::GraphQLError;
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExecuteError {
    /// The server answered with a well-formed response listing errors.
    #[error(
        "GraphQL endpoint returned {} error(s): {}",
        .0.len(),
        join_messages(.0),
    )]
    GraphQL(Vec<GraphQLError>),

    #[error(transparent)]
    Transport(#[from] TransportError),
}
impl ExecuteError {
    /// The GraphQL errors, if this is a GraphQL-level failure.
    pub fn graphql_errors(&self) -> Option<&[GraphQLError]> {
        if let Self::GraphQL(errors) = self {
            Some(errors.as_slice())
        } else {
            None
        }
    }
}

fn join_messages(errors: &[GraphQLError]) -> String {
    errors.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("decoding response data (HTTP {status})")]
    DecodeData {
        status: StatusCode,
        #[source]
        source: serde_json::Error,
    },

    #[error("decoding response envelope (HTTP {status})")]
    DecodeEnvelope {
        status: StatusCode,
        #[source]
        source: serde_json::Error,
    },

    #[error("encoding request payload")]
    EncodePayload(#[source] serde_json::Error),

    #[error("invalid header name `{name}`")]
    InvalidHeaderName {
        name: String,
        #[source]
        source: reqwest::header::InvalidHeaderName,
    },

    #[error("invalid value for header `{name}`")]
    InvalidHeaderValue {
        name: String,
        #[source]
        source: reqwest::header::InvalidHeaderValue,
    },

    #[error("reading response body (HTTP {status})")]
    ReadBody {
        status: StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("sending request to {endpoint}")]
    Send {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
}
impl TransportError {
    /// The HTTP status of the response, when one was received.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::DecodeData { status, .. }
            | Self::DecodeEnvelope { status, .. }
            | Self::ReadBody { status, .. } => Some(*status),
            _ => None,
        }
    }
}

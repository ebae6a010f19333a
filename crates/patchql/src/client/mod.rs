//! A small async client for posting GraphQL requests over HTTP.
//!
//! Transport failures (connecting, reading, decoding the response envelope)
//! are reported separately from the GraphQL errors a server returns inside a
//! well-formed response; see [`ExecuteError`].

#[allow(clippy::module_inception)]
mod client;
mod execute_error;
mod graphql_error;
mod payload;

pub use client::Client;
pub use client::DEFAULT_CONTENT_TYPE;
pub use execute_error::ExecuteError;
pub use execute_error::TransportError;
pub use graphql_error::ErrorLocation;
pub use graphql_error::GraphQLError;
pub use graphql_error::PathSegment;
pub use payload::Payload;
pub use payload::ResponseEnvelope;

#[cfg(test)]
mod tests;

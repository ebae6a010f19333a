use crate::client::GraphQLError;
use crate::Variables;
use serde::Deserialize;
use serde::Serialize;

/// The request body posted to a GraphQL endpoint.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Payload<'a> {
    pub query: &'a str,

    #[serde(skip_serializing_if = "variables_are_empty")]
    pub variables: Option<&'a Variables>,
}

fn variables_are_empty(variables: &Option<&Variables>) -> bool {
    variables.is_none_or(|vars| vars.is_empty())
}

/// The `{"data": ..., "errors": [...]}` body returned by a GraphQL endpoint.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct ResponseEnvelope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<GraphQLError>>,
}

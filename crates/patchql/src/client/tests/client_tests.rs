use crate::client::Client;
use crate::client::ExecuteError;
use crate::client::TransportError;
use crate::client::DEFAULT_CONTENT_TYPE;
use crate::Variables;
use serde::Deserialize;
use serde_json::json;
use wiremock::matchers::body_json;
use wiremock::matchers::header;
use wiremock::matchers::method;
use wiremock::matchers::path;
use wiremock::Mock;
use wiremock::MockServer;
use wiremock::ResponseTemplate;

const FILMS_QUERY: &str = "query { allFilms { films { title } } }";

#[derive(Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
struct FilmsData {
    all_films: Films,
}

#[derive(Debug, Deserialize, PartialEq)]
struct Films {
    films: Vec<Film>,
}

#[derive(Debug, Deserialize, PartialEq)]
struct Film {
    title: String,
}

async fn mock_server(template: ResponseTemplate) -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(template)
        .mount(&mock_server)
        .await;

    mock_server
}

fn client_for(server: &MockServer) -> Client {
    Client::new(format!("{}/graphql", server.uri()))
}

#[test]
fn content_type_defaults_to_json() {
    let client = Client::new("http://example.com/graphql");
    assert_eq!(client.content_type(), DEFAULT_CONTENT_TYPE);
    assert_eq!(client.content_type(), "application/json");
}

#[tokio::test]
async fn decodes_data() {
    let server = mock_server(ResponseTemplate::new(200).set_body_json(json!({
        "data": {
            "allFilms": {
                "films": [
                    {"title": "A New Hope"},
                    {"title": "The Empire Strikes Back"},
                ],
            },
        },
    }))).await;

    let data: FilmsData = client_for(&server).execute(FILMS_QUERY).await.unwrap();

    let titles: Vec<&str> = data.all_films.films.iter().map(|f| f.title.as_str()).collect();
    assert_eq!(titles, vec!["A New Hope", "The Empire Strikes Back"]);
}

#[tokio::test]
async fn sends_query_and_variables() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "query": "mutation ($input: UpdateUserInput!) { updateUser(input: $input) { id } }",
            "variables": {"input": {"id": "1", "name": "Marta"}},
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"updateUser": {"id": "1"}},
        })))
        .expect(1)
        .mount(&server)
        .await;

    let variables = Variables::try_from(json!({
        "input": {"id": "1", "name": "Marta"},
    })).unwrap();
    let data: serde_json::Value = client_for(&server)
        .execute_with_variables(
            "mutation ($input: UpdateUserInput!) { updateUser(input: $input) { id } }",
            &variables,
        )
        .await
        .unwrap();

    assert_eq!(data, json!({"updateUser": {"id": "1"}}));
}

#[tokio::test]
async fn omits_empty_variables() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_json(json!({"query": FILMS_QUERY})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": null})))
        .expect(1)
        .mount(&server)
        .await;

    let data: Option<serde_json::Value> = Client::new(server.uri())
        .execute_with_variables(FILMS_QUERY, &Variables::new())
        .await
        .unwrap();

    assert_eq!(data, None);
}

#[tokio::test]
async fn sends_custom_headers_and_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(header("content-type", "application/graphql+json"))
        .and(header("authorization", "Bearer secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"ok": true}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::new(server.uri())
        .with_content_type("application/graphql+json")
        .with_header("Authorization", "Bearer secret")
        .unwrap();
    let data: serde_json::Value = client.execute("{ ok }").await.unwrap();

    assert_eq!(data, json!({"ok": true}));
}

#[tokio::test]
async fn returns_graphql_errors() {
    let server = mock_server(ResponseTemplate::new(200).set_body_json(json!({
        "data": null,
        "errors": [
            {"message": "test response not available"},
            {"message": "second", "path": ["allFilms", 0, "title"]},
        ],
    }))).await;

    let err = client_for(&server)
        .execute::<serde_json::Value>("{ notExistingQuery { id } }")
        .await
        .unwrap_err();

    let errors = err.graphql_errors().expect("GraphQL errors");
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].to_string(), "input: test response not available");
    assert_eq!(errors[1].to_string(), "input: allFilms[0].title second");
}

#[tokio::test]
async fn non_success_status_still_decodes_envelope() {
    let server = mock_server(ResponseTemplate::new(400).set_body_json(json!({
        "errors": [{"message": "Cannot query field \"nope\" on type \"Query\"."}],
    }))).await;

    let err = client_for(&server)
        .execute::<serde_json::Value>("{ nope }")
        .await
        .unwrap_err();

    assert!(matches!(err, ExecuteError::GraphQL(ref errors) if errors.len() == 1));
}

#[tokio::test]
async fn unparseable_body_is_a_transport_error() {
    let server = mock_server(
        ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"),
    ).await;

    let err = client_for(&server)
        .execute::<serde_json::Value>(FILMS_QUERY)
        .await
        .unwrap_err();

    match err {
        ExecuteError::Transport(transport_err @ TransportError::DecodeEnvelope { .. }) =>
            assert_eq!(transport_err.status().map(|s| s.as_u16()), Some(502)),
        other => panic!("Expected DecodeEnvelope, found {other:?}"),
    }
}

#[tokio::test]
async fn data_of_wrong_shape_is_a_transport_error() {
    let server = mock_server(ResponseTemplate::new(200).set_body_json(json!({
        "data": {"allFilms": "not films"},
    }))).await;

    let err = client_for(&server)
        .execute::<FilmsData>(FILMS_QUERY)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ExecuteError::Transport(TransportError::DecodeData { .. }),
    ));
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_error() {
    // Reserve a free port, then release it so nothing is listening there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    let endpoint = format!("http://127.0.0.1:{port}/graphql");

    let err = Client::new(endpoint)
        .execute::<serde_json::Value>(FILMS_QUERY)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ExecuteError::Transport(TransportError::Send { .. }),
    ));
}

#[test]
fn invalid_header_is_rejected() {
    let result = Client::new("http://example.com/graphql")
        .with_header("bad header", "value");
    assert!(matches!(result, Err(TransportError::InvalidHeaderName { .. })));

    let result = Client::new("http://example.com/graphql")
        .with_header("x-ok", "bad\nvalue");
    assert!(matches!(result, Err(TransportError::InvalidHeaderValue { .. })));
}

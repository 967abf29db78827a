use crate::client::{create_rest_client, Config};
use crate::error::{JotFormError, Result};
use crate::flatten::FlatParams;
use crate::response::Envelope;
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use std::fmt;
use tracing::{debug, instrument, warn, Span};
use url::Url;

/// HTTP verbs accepted by the Jotform API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

impl Verb {
    /// Upper-case method name, as sent on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request parameters
#[derive(Debug, Clone, PartialEq)]
pub enum Params {
    /// Form-encoded body, used by POST
    Form(FlatParams),
    /// Raw JSON text, used by PUT
    Json(String),
}

impl From<FlatParams> for Params {
    fn from(params: FlatParams) -> Self {
        Params::Form(params)
    }
}

/// Outgoing request shape. Each variant has a fixed body and header policy.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Request<'a> {
    Get,
    Post(Option<&'a FlatParams>),
    Put(Option<&'a str>),
    Delete,
}

impl<'a> Request<'a> {
    fn new(verb: Verb, params: Option<&'a Params>) -> Result<Self> {
        match (verb, params) {
            (Verb::Get, params) => {
                if params.is_some() {
                    debug!("GET parameters are not sent");
                }
                Ok(Request::Get)
            }
            (Verb::Delete, params) => {
                if params.is_some() {
                    debug!("DELETE parameters are not sent");
                }
                Ok(Request::Delete)
            }
            (Verb::Post, None) => Ok(Request::Post(None)),
            (Verb::Post, Some(Params::Form(form))) => Ok(Request::Post(Some(form))),
            (Verb::Put, None) => Ok(Request::Put(None)),
            (Verb::Put, Some(Params::Json(body))) => Ok(Request::Put(Some(body))),
            (verb, Some(_)) => Err(JotFormError::RequestBuild(format!(
                "{} expects {} parameters",
                verb,
                if verb == Verb::Post { "form" } else { "JSON" }
            ))),
        }
    }

    fn verb(&self) -> Verb {
        match self {
            Request::Get => Verb::Get,
            Request::Post(_) => Verb::Post,
            Request::Put(_) => Verb::Put,
            Request::Delete => Verb::Delete,
        }
    }

    fn build(self, client: &Client, url: Url) -> RequestBuilder {
        match self {
            Request::Get => client.get(url),
            Request::Post(Some(form)) => client.post(url).form(form),
            Request::Post(None) => client.post(url).form(&FlatParams::new()),
            Request::Put(body) => client
                .put(url)
                .header(CONTENT_TYPE, "application/json")
                .body(body.unwrap_or_default().to_string()),
            Request::Delete => client.delete(url),
        }
    }
}

/// Client for the Jotform REST API
#[derive(Debug, Clone)]
pub struct JotForm {
    /// HTTP client
    client: Client,
    /// Configuration
    config: Config,
}

impl JotForm {
    /// Create a client for the given API key against the default host and version
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(Config::new(api_key))
    }

    /// Create a client with custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        Ok(JotForm {
            client: create_rest_client()?,
            config,
        })
    }

    /// Create a client configured from `JOTFORM_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::with_config(Config::from_env()?)
    }

    /// Configuration this client was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Execute a request and return the `content` of the response envelope
    ///
    /// # Arguments
    /// * `endpoint` - Path below the API version, e.g. `form/123/questions`
    /// * `params` - Form parameters for POST, JSON text for PUT; ignored for GET and DELETE
    /// * `verb` - HTTP verb
    pub fn execute(&self, endpoint: &str, params: Option<Params>, verb: Verb) -> Result<Value> {
        self.execute_envelope(endpoint, params, verb)
            .map(Envelope::into_content)
    }

    /// Execute a request and return the whole response envelope
    pub fn execute_envelope(&self, endpoint: &str, params: Option<Params>, verb: Verb) -> Result<Envelope> {
        let request = Request::new(verb, params.as_ref())?;
        self.send(endpoint, request)
    }

    pub(crate) fn execute_get(&self, endpoint: &str) -> Result<Value> {
        self.send(endpoint, Request::Get).map(Envelope::into_content)
    }

    pub(crate) fn execute_post(&self, endpoint: &str, params: &FlatParams) -> Result<Value> {
        self.send(endpoint, Request::Post(Some(params)))
            .map(Envelope::into_content)
    }

    pub(crate) fn execute_put(&self, endpoint: &str, body: &str) -> Result<Value> {
        self.send(endpoint, Request::Put(Some(body)))
            .map(Envelope::into_content)
    }

    pub(crate) fn execute_delete(&self, endpoint: &str) -> Result<Value> {
        self.send(endpoint, Request::Delete).map(Envelope::into_content)
    }

    /// Build the endpoint URL with the API key in the query string
    fn request_url(&self, endpoint: &str) -> Result<Url> {
        let mut url = Url::parse(&self.config.endpoint_url(endpoint))?;
        url.query_pairs_mut()
            .append_pair("apiKey", &self.config.api_key);
        Ok(url)
    }

    #[instrument(
        name = "jotform_request",
        skip(self, request),
        fields(
            http.method = tracing::field::Empty,
            http.status_code = tracing::field::Empty,
        )
    )]
    fn send(&self, endpoint: &str, request: Request<'_>) -> Result<Envelope> {
        let verb = request.verb();
        Span::current().record("http.method", verb.as_str());

        let url = self.request_url(endpoint)?;
        debug!(method = %verb, endpoint, "sending request");

        let http_response = request.build(&self.client, url).send()?;
        let status = http_response.status();
        Span::current().record("http.status_code", status.as_u16());

        let body = http_response.bytes()?;

        if !status.is_success() {
            let error_body: Value = serde_json::from_slice(&body).map_err(|e| {
                JotFormError::http(
                    status.as_u16(),
                    String::from_utf8_lossy(&body).to_string(),
                    Some(Box::new(e)),
                )
            })?;
            warn!(
                status = status.as_u16(),
                endpoint,
                body = %error_body,
                "Jotform API request failed"
            );
            return Err(JotFormError::from_body(status.as_u16(), error_body));
        }

        let envelope: Envelope = serde_json::from_slice(&body)?;
        debug!(status = status.as_u16(), endpoint, "request succeeded");
        Ok(envelope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flatten::into_params;
    use mockito::Matcher;
    use serde_json::json;
    use tracing_test::traced_test;

    fn client_for(server: &mockito::Server) -> JotForm {
        JotForm::with_config(Config::new("test-key").with_base_url(server.url())).unwrap()
    }

    fn api_key() -> Matcher {
        Matcher::UrlEncoded("apiKey".to_string(), "test-key".to_string())
    }

    #[test]
    fn test_client_creation() {
        let client = JotForm::new("abc").unwrap();
        assert_eq!(client.config().base_url, "https://api.jotform.com");
        assert_eq!(client.config().api_version, "v1");
    }

    #[test]
    fn test_request_url_carries_api_key() {
        let client = JotForm::new("abc").unwrap();
        let url = client.request_url("user/usage").unwrap();
        assert_eq!(url.as_str(), "https://api.jotform.com/v1/user/usage?apiKey=abc");
    }

    #[test]
    fn test_request_variants() {
        let form = Params::Form(into_params([("a", "1")]));
        let json = Params::Json("{}".to_string());

        assert_eq!(Request::new(Verb::Get, Some(&form)).unwrap(), Request::Get);
        assert_eq!(Request::new(Verb::Delete, Some(&json)).unwrap(), Request::Delete);
        assert_eq!(Request::new(Verb::Put, Some(&json)).unwrap(), Request::Put(Some("{}")));
        assert!(matches!(
            Request::new(Verb::Post, Some(&json)),
            Err(JotFormError::RequestBuild(_))
        ));
        assert!(matches!(
            Request::new(Verb::Put, Some(&form)),
            Err(JotFormError::RequestBuild(_))
        ));
    }

    #[test]
    fn test_get_never_sends_body() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/v1/user/forms")
            .match_query(api_key())
            .match_header("content-type", Matcher::Missing)
            .match_body(Matcher::Exact(String::new()))
            .with_status(200)
            .with_body(r#"{"responseCode":200,"content":[]}"#)
            .create();

        let client = client_for(&server);
        let params = Params::Form(into_params([("filter", "{\"status\":\"ENABLED\"}")]));
        let content = client
            .execute("user/forms", Some(params), Verb::Get)
            .unwrap();

        assert_eq!(content, json!([]));
        mock.assert();
    }

    #[test]
    fn test_put_sends_raw_json_with_api_key() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("PUT", "/v1/form/9/properties")
            .match_query(api_key())
            .match_header("content-type", "application/json")
            .match_body(Matcher::Exact(r#"{"properties":{"height":"500"}}"#.to_string()))
            .with_status(200)
            .with_body(r#"{"content":{"height":"500"}}"#)
            .create();

        let client = client_for(&server);
        let content = client
            .execute(
                "form/9/properties",
                Some(Params::Json(r#"{"properties":{"height":"500"}}"#.to_string())),
                Verb::Put,
            )
            .unwrap();

        assert_eq!(content, json!({"height": "500"}));
        mock.assert();
    }

    #[test]
    fn test_put_without_params_sends_empty_json_body() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("PUT", "/v1/folder/abc")
            .match_query(api_key())
            .match_header("content-type", "application/json")
            .match_body(Matcher::Exact(String::new()))
            .with_status(200)
            .with_body(r#"{"content":"ok"}"#)
            .create();

        let client = client_for(&server);
        let content = client.execute("folder/abc", None, Verb::Put).unwrap();

        assert_eq!(content, json!("ok"));
        mock.assert();
    }

    #[test]
    #[traced_test]
    fn test_error_status_emits_diagnostic() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/v1/user")
            .match_query(api_key())
            .with_status(401)
            .with_body(r#"{"message":"bad key"}"#)
            .create();

        let client = client_for(&server);
        let err = client.execute("user", None, Verb::Get).unwrap_err();

        assert!(err.is_unauthorized());
        assert_eq!(err.diagnostic(), Some(&json!({"message": "bad key"})));
        assert!(logs_contain("bad key"));
        mock.assert();
    }

    #[test]
    fn test_non_json_error_body_fails_loudly() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("DELETE", "/v1/report/5")
            .match_query(api_key())
            .with_status(502)
            .with_body("<html>Bad Gateway</html>")
            .create();

        let client = client_for(&server);
        match client.execute("report/5", None, Verb::Delete) {
            Err(JotFormError::Http { status, body, source }) => {
                assert_eq!(status, 502);
                assert_eq!(body, "<html>Bad Gateway</html>");
                assert!(source.is_some());
            }
            other => panic!("expected JotFormError::Http, got {:?}", other),
        }
    }

    #[test]
    fn test_execute_envelope_keeps_extra_fields() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/v1/user/usage")
            .match_query(api_key())
            .with_status(200)
            .with_body(r#"{"responseCode":200,"content":{"submissions":"3"},"limit-left":49}"#)
            .create();

        let client = client_for(&server);
        let envelope = client
            .execute_envelope("user/usage", None, Verb::Get)
            .unwrap();

        assert_eq!(envelope.get_string("submissions"), Some("3".to_string()));
        assert_eq!(envelope.field("limit-left"), Some(&json!(49)));
    }

    #[test]
    fn test_mismatched_params_fail_before_io() {
        // Nothing listens here; the error must come from request building.
        let config = Config::new("k").with_base_url("http://127.0.0.1:9");
        let client = JotForm::with_config(config).unwrap();
        let result = client.execute(
            "folder",
            Some(Params::Json("{}".to_string())),
            Verb::Post,
        );
        assert!(matches!(result, Err(JotFormError::RequestBuild(_))));
    }
}

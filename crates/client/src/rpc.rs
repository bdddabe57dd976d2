//! JSON-RPC envelope shared by the bundler and paymaster clients

use crate::error::ClientError;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use url::Url;

#[derive(Debug, Serialize)]
pub struct Request<T> {
    pub jsonrpc: String,
    pub id: u64,
    pub method: String,
    pub params: T,
}

impl<T> Request<T> {
    pub fn new(method: &str, params: T) -> Self {
        Self { jsonrpc: "2.0".into(), id: 1, method: method.into(), params }
    }
}

#[derive(Debug, Deserialize)]
pub struct Response {
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<ErrorObject>,
}

#[derive(Debug, Deserialize)]
pub struct ErrorObject {
    pub code: i64,
    pub message: String,
}

/// Posts one JSON-RPC request and decodes the result, surfacing JSON-RPC
/// error responses as `ClientError::Rpc`
pub async fn post<P, R>(
    client: &reqwest::Client,
    url: &Url,
    method: &str,
    params: P,
) -> Result<R, ClientError>
where
    P: Serialize,
    R: DeserializeOwned,
{
    let response = client.post(url.clone()).json(&Request::new(method, params)).send().await?;
    let body: Response = response.json().await?;

    if let Some(err) = body.error {
        return Err(ClientError::Rpc { method: method.into(), code: err.code, message: err.message });
    }

    serde_json::from_value(body.result.unwrap_or(Value::Null))
        .map_err(|err| ClientError::UnexpectedResponse { inner: format!("{method}: {err}") })
}

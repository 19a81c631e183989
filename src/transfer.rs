//! JSON-over-HTTP requests.
//!
//! [`TransferClient::transfer`] sends one request with a JSON content type and
//! decodes the JSON response. Failures come back as a [`TransferError`] so
//! callers can tell a dead connection from a rejected request or an
//! unreadable body. Transport, encode and decode failures are recorded in the
//! client's [`Logger`]; non-success statuses are not.

use crate::constants::{
    CONTENT_TYPE_JSON, LOG_TRANSFER_DECODE_ERROR, LOG_TRANSFER_NETWORK_ERROR, LOG_TRANSFER_SERIALIZE_ERROR,
};
use crate::logger::Logger;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, IntoUrl, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Why a transfer produced no value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransferError {
    /// The request never completed: DNS, refused connection, malformed URL.
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("HTTP error: {0}")]
    Http(StatusCode),

    /// The response body was not the expected JSON.
    #[error("Decode error: {0}")]
    Decode(String),

    /// The request payload could not be encoded as JSON.
    #[error("Serialize error: {0}")]
    Serialize(String),
}

/// HTTP client for JSON APIs.
#[derive(Clone, Default)]
pub struct TransferClient {
    client: Client,
    logger: Logger,
}

impl TransferClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record diagnostics in `logger` instead of a private buffer.
    pub fn with_logger(logger: Logger) -> Self {
        Self {
            client: Client::new(),
            logger,
        }
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// GET `input` without a body.
    pub async fn get<U: IntoUrl>(&self, input: U) -> Result<Value, TransferError> {
        self.transfer::<U, ()>(input, Method::GET, None).await
    }

    /// POST `data` to `input`.
    pub async fn post<U, T>(&self, input: U, data: &T) -> Result<Value, TransferError>
    where
        U: IntoUrl,
        T: Serialize + ?Sized,
    {
        self.transfer(input, Method::POST, Some(data)).await
    }

    /// Send one request and decode the JSON response.
    ///
    /// `Content-Type: application/json` is always set. `data` is sent as the
    /// JSON body for every method except GET and HEAD, where it is dropped.
    pub async fn transfer<U, T>(&self, input: U, method: Method, data: Option<&T>) -> Result<Value, TransferError>
    where
        U: IntoUrl,
        T: Serialize + ?Sized,
    {
        self.transfer_as(input, method, data).await
    }

    /// [`TransferClient::transfer`] decoding into `R`.
    pub async fn transfer_as<R, U, T>(&self, input: U, method: Method, data: Option<&T>) -> Result<R, TransferError>
    where
        R: DeserializeOwned,
        U: IntoUrl,
        T: Serialize + ?Sized,
    {
        let mut request = self
            .client
            .request(method.clone(), input)
            .header(CONTENT_TYPE, CONTENT_TYPE_JSON);

        if let Some(data) = data {
            if carries_body(&method) {
                let body = serde_json::to_vec(data).map_err(|e| self.report(TransferError::Serialize(e.to_string())))?;
                request = request.body(body);
            } else {
                log::debug!("Not sending a body with {} request", method);
            }
        }

        let response = request
            .send()
            .await
            .map_err(|e| self.report(TransferError::Network(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            log::debug!("{} {} returned {}", method, response.url(), status);
            return Err(TransferError::Http(status));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.report(TransferError::Network(e.to_string())))?;

        serde_json::from_slice(&body).map_err(|e| self.report(TransferError::Decode(e.to_string())))
    }

    /// [`TransferClient::transfer`] with every failure collapsed to `None`.
    pub async fn transfer_or_null<U, T>(&self, input: U, method: Method, data: Option<&T>) -> Option<Value>
    where
        U: IntoUrl,
        T: Serialize + ?Sized,
    {
        self.transfer(input, method, data).await.ok()
    }

    fn report(&self, error: TransferError) -> TransferError {
        let prefix = match error {
            TransferError::Network(_) => LOG_TRANSFER_NETWORK_ERROR,
            TransferError::Decode(_) => LOG_TRANSFER_DECODE_ERROR,
            TransferError::Serialize(_) => LOG_TRANSFER_SERIALIZE_ERROR,
            TransferError::Http(_) => return error,
        };
        log::error!("{}: {}", prefix, error);
        self.logger.log(format!("{}: {}", prefix, error));
        error
    }
}

fn carries_body(method: &Method) -> bool {
    *method != Method::GET && *method != Method::HEAD
}

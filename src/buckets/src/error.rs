// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Errors returned by the bucket client.
//!
//! All operations return [Error]. The type is opaque: applications classify
//! failures through predicates such as [Error::is_not_found()] or
//! [Error::is_precondition_failed()], and may inspect the HTTP response that
//! caused the failure via [Error::http_status_code()],
//! [Error::http_headers()] and [Error::http_payload()].

use http::HeaderMap;
use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The result type for all operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// The core error returned by all client libraries.
///
/// # Example
/// ```
/// use google_cloud_storage_buckets::client::Buckets;
/// async fn sample(client: &Buckets) -> anyhow::Result<()> {
///     match client.get_bucket("my-bucket").send().await {
///         Ok(bucket) => println!("got {bucket:?}"),
///         Err(e) if e.is_not_found() => println!("the bucket does not exist"),
///         Err(e) if e.is_precondition_failed() => println!("the bucket has changed"),
///         Err(e) => return Err(e.into()),
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<BoxError>,
}

impl Error {
    /// Creates an error with the information returned by the service.
    ///
    /// # Example
    /// ```
    /// use google_cloud_storage_buckets::error::{Error, ServiceError};
    /// let error = Error::service(ServiceError::new(404, "No such bucket: my-bucket"));
    /// assert!(error.is_not_found());
    /// assert_eq!(error.service_error().map(|e| e.code), Some(404));
    /// ```
    pub fn service(error: ServiceError) -> Self {
        let details = ServiceDetails {
            status_code: None,
            headers: None,
            payload: None,
            error,
        };
        Self {
            kind: ErrorKind::Service(Box::new(details)),
            source: None,
        }
    }

    /// Creates an error representing an HTTP error response.
    ///
    /// The payload is parsed as a JSON API error body when possible, in which
    /// case [Error::service_error()] returns the parsed contents.
    pub fn http(status_code: u16, headers: HeaderMap, payload: bytes::Bytes) -> Self {
        match serde_json::from_slice::<ErrorReply>(payload.as_ref()) {
            Ok(reply) => {
                let details = ServiceDetails {
                    status_code: Some(status_code),
                    headers: Some(headers),
                    payload: Some(payload),
                    error: reply.error,
                };
                Self {
                    kind: ErrorKind::Service(Box::new(details)),
                    source: None,
                }
            }
            Err(_) => {
                let details = TransportDetails {
                    status_code: Some(status_code),
                    headers: Some(headers),
                    payload: Some(payload),
                };
                Self {
                    kind: ErrorKind::Transport(Box::new(details)),
                    source: None,
                }
            }
        }
    }

    /// Creates an error representing a problem sending the request or
    /// receiving the response.
    pub fn io<T: Into<BoxError>>(source: T) -> Self {
        let details = TransportDetails {
            status_code: None,
            headers: None,
            payload: None,
        };
        Self {
            kind: ErrorKind::Transport(Box::new(details)),
            source: Some(source.into()),
        }
    }

    /// Creates an error representing a timeout.
    pub fn timeout<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Timeout,
            source: Some(source.into()),
        }
    }

    /// Creates an error for a request that could not be formed.
    ///
    /// Typically this is a missing or empty required argument.
    pub fn binding<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Binding,
            source: Some(source.into()),
        }
    }

    /// Creates an error for a request that could not be serialized.
    pub fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Serialization,
            source: Some(source.into()),
        }
    }

    /// Creates an error for a response that could not be deserialized.
    pub fn deser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Deserialization,
            source: Some(source.into()),
        }
    }

    /// Creates an error for a failure to create the authentication headers.
    pub fn authentication<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Authentication,
            source: Some(source.into()),
        }
    }

    /// The bucket does not exist.
    pub fn is_not_found(&self) -> bool {
        self.code() == Some(404)
    }

    /// A metageneration precondition did not hold.
    ///
    /// The service reports `412 Precondition Failed` when
    /// `ifMetagenerationMatch` (or `ifMetagenerationNotMatch` on a mutation)
    /// fails, and `304 Not Modified` when `ifMetagenerationNotMatch` fails on a
    /// read. Both are reported as precondition failures.
    pub fn is_precondition_failed(&self) -> bool {
        matches!(self.code(), Some(412) | Some(304))
    }

    /// The resource already exists.
    pub fn is_already_exists(&self) -> bool {
        self.code() == Some(409)
    }

    /// The request failed while sending it or receiving the response, timed
    /// out, or the service reported an internal error.
    pub fn is_transport(&self) -> bool {
        self.is_io() || self.is_timeout() || self.code().is_some_and(|c| c >= 500)
    }

    /// The request could not be sent or the response could not be received.
    pub fn is_io(&self) -> bool {
        matches!(
        &self.kind,
        ErrorKind::Transport(d) if matches!(**d, TransportDetails {
            status_code: None,
            headers: None,
            payload: None,
        }))
    }

    /// The request exceeded its attempt timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, ErrorKind::Timeout)
    }

    /// The request could not be formed from its arguments.
    pub fn is_binding(&self) -> bool {
        matches!(self.kind, ErrorKind::Binding)
    }

    /// The request body could not be serialized.
    pub fn is_serialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Serialization)
    }

    /// The response could not be deserialized.
    pub fn is_deserialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Deserialization)
    }

    /// The credentials could not produce authentication headers.
    pub fn is_authentication(&self) -> bool {
        matches!(self.kind, ErrorKind::Authentication)
    }

    /// The HTTP status code, if any, associated with this error.
    pub fn http_status_code(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Transport(d) => d.status_code,
            ErrorKind::Service(d) => d.status_code,
            _ => None,
        }
    }

    /// The HTTP headers, if any, associated with this error.
    pub fn http_headers(&self) -> Option<&HeaderMap> {
        match &self.kind {
            ErrorKind::Transport(d) => d.headers.as_ref(),
            ErrorKind::Service(d) => d.headers.as_ref(),
            _ => None,
        }
    }

    /// The HTTP payload, if any, associated with this error.
    pub fn http_payload(&self) -> Option<&bytes::Bytes> {
        match &self.kind {
            ErrorKind::Transport(d) => d.payload.as_ref(),
            ErrorKind::Service(d) => d.payload.as_ref(),
            _ => None,
        }
    }

    /// The error details reported by the service, if any.
    pub fn service_error(&self) -> Option<&ServiceError> {
        match &self.kind {
            ErrorKind::Service(d) => Some(&d.error),
            _ => None,
        }
    }

    fn code(&self) -> Option<u16> {
        self.http_status_code().or_else(|| {
            self.service_error()
                .map(|e| e.code)
                .filter(|c| *c != 0)
        })
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.kind, &self.source) {
            (ErrorKind::Binding, Some(e)) => {
                write!(f, "cannot find a matching binding to send the request {e}")
            }
            (ErrorKind::Serialization, Some(e)) => write!(f, "cannot serialize the request {e}"),
            (ErrorKind::Deserialization, Some(e)) => {
                write!(f, "cannot deserialize the response {e}")
            }
            (ErrorKind::Authentication, Some(e)) => {
                write!(f, "cannot create the authentication headers {e}")
            }
            (ErrorKind::Timeout, Some(e)) => {
                write!(f, "the request exceeded the attempt timeout {e}")
            }
            (ErrorKind::Transport(details), _) => details.display(self.source(), f),
            (ErrorKind::Service(d), _) => {
                write!(
                    f,
                    "the service reports an error with code {} described as: {}",
                    d.status_code.unwrap_or(d.error.code),
                    d.error.message
                )
            }
            (_, None) => unreachable!("no constructor allows this"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error))
    }
}

#[derive(Debug)]
enum ErrorKind {
    Binding,
    Serialization,
    Deserialization,
    Authentication,
    Timeout,
    Transport(Box<TransportDetails>),
    Service(Box<ServiceDetails>),
}

#[derive(Debug)]
struct TransportDetails {
    status_code: Option<u16>,
    headers: Option<HeaderMap>,
    payload: Option<bytes::Bytes>,
}

impl TransportDetails {
    fn display(
        &self,
        source: Option<&(dyn StdError + 'static)>,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match (source, &self) {
            (
                _,
                TransportDetails {
                    status_code: Some(code),
                    payload: Some(p),
                    ..
                },
            ) => {
                if let Ok(message) = std::str::from_utf8(p.as_ref()) {
                    write!(f, "the HTTP transport reports a [{code}] error: {message}")
                } else {
                    write!(f, "the HTTP transport reports a [{code}] error: {p:?}")
                }
            }
            (Some(source), _) => {
                write!(f, "the transport reports an error: {source}")
            }
            (None, _) => unreachable!("no Error constructor allows this"),
        }
    }
}

#[derive(Debug)]
struct ServiceDetails {
    status_code: Option<u16>,
    headers: Option<HeaderMap>,
    payload: Option<bytes::Bytes>,
    error: ServiceError,
}

/// The error body returned by the JSON API.
///
/// The service wraps these details in a top-level `error` field.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ServiceError {
    /// The HTTP status code, repeated in the body.
    pub code: u16,
    /// A human readable description of the problem.
    pub message: String,
    /// Additional details, if any.
    pub errors: Vec<ErrorDetail>,
}

impl ServiceError {
    /// Creates a new error body with the given code and message.
    pub fn new<T: Into<String>>(code: u16, message: T) -> Self {
        Self {
            code,
            message: message.into(),
            errors: Vec::new(),
        }
    }

    /// Appends a detail entry.
    pub fn add_error(mut self, v: ErrorDetail) -> Self {
        self.errors.push(v);
        self
    }
}

/// One entry in [ServiceError::errors].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ErrorDetail {
    pub domain: String,
    pub reason: String,
    pub message: String,
    pub location_type: String,
    pub location: String,
}

impl ErrorDetail {
    pub fn new<R: Into<String>, M: Into<String>>(reason: R, message: M) -> Self {
        Self {
            domain: "global".to_string(),
            reason: reason.into(),
            message: message.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, serde::Deserialize)]
struct ErrorReply {
    error: ServiceError,
}

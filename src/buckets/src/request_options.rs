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

//! Per-request transport configuration.
//!
//! These options apply to the HTTP request, not to the bucket resource. The
//! query parameters understood by each operation are in [crate::options].

use std::time::Duration;

/// Transport options for a single request.
///
/// Clients carry a default set of options, configured via the
/// [ClientBuilder][crate::client::ClientBuilder]. Each request builder starts
/// with a copy of those defaults, and may override them using
/// [RequestOptionsBuilder].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestOptions {
    user_agent: Option<String>,
    attempt_timeout: Option<Duration>,
}

impl RequestOptions {
    /// Prepends this prefix to the user agent header value.
    pub fn set_user_agent<T: Into<String>>(&mut self, v: T) {
        self.user_agent = Some(v.into());
    }

    /// Gets the current user-agent prefix.
    pub fn user_agent(&self) -> &Option<String> {
        &self.user_agent
    }

    /// Sets the per-attempt timeout.
    ///
    /// When using a retry loop in the application, this affects the timeout
    /// for each attempt. The client library never retries.
    pub fn set_attempt_timeout<T: Into<Duration>>(&mut self, v: T) {
        self.attempt_timeout = Some(v.into());
    }

    /// Gets the current per-attempt timeout.
    pub fn attempt_timeout(&self) -> &Option<Duration> {
        &self.attempt_timeout
    }
}

/// Implementations of this trait provide setters to configure request options.
///
/// All request builders in this crate implement this trait.
///
/// # Example
/// ```
/// # use google_cloud_storage_buckets::client::Buckets;
/// # async fn sample(client: &Buckets) -> anyhow::Result<()> {
/// use google_cloud_storage_buckets::request_options::RequestOptionsBuilder;
/// use std::time::Duration;
/// let bucket = client
///     .get_bucket("my-bucket")
///     .with_attempt_timeout(Duration::from_secs(5))
///     .send()
///     .await?;
/// # Ok(()) }
/// ```
pub trait RequestOptionsBuilder: internal::RequestBuilder {
    /// Sets the user agent prefix for this request.
    fn with_user_agent<V: Into<String>>(self, v: V) -> Self;

    /// Sets the per-attempt timeout for this request.
    fn with_attempt_timeout<V: Into<Duration>>(self, v: V) -> Self;
}

#[doc(hidden)]
pub mod internal {
    //! This module contains implementation details. It is not part of the
    //! public API. Types and functions in this module may be changed or removed
    //! without warnings. Applications should not use any types contained
    //! within.
    use super::RequestOptions;

    /// Simplify implementation of the [super::RequestOptionsBuilder] trait in
    /// the request builders.
    pub trait RequestBuilder {
        fn request_options(&mut self) -> &mut RequestOptions;
    }
}

/// Implements the sealed [RequestOptionsBuilder] trait.
impl<T> RequestOptionsBuilder for T
where
    T: internal::RequestBuilder,
{
    fn with_user_agent<V: Into<String>>(mut self, v: V) -> Self {
        self.request_options().set_user_agent(v);
        self
    }

    fn with_attempt_timeout<V: Into<Duration>>(mut self, v: V) -> Self {
        self.request_options().set_attempt_timeout(v);
        self
    }
}

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

use crate::builder::buckets::{
    DeleteBucket, GetBucket, InsertBucket, ListBuckets, PatchBucket, UpdateBucket,
};
use crate::model::BucketTemplate;
use crate::request_options::RequestOptions;
use google_cloud_auth::credentials::{CacheableResource, Credentials};
use http::Extensions;
use std::sync::Arc;

/// Implements a client for the bucket resources in the Cloud Storage JSON API.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use google_cloud_storage_buckets::client::Buckets;
/// let client = Buckets::builder().build().await?;
/// // use `client` to make requests to Cloud Storage.
/// # Ok::<(), anyhow::Error>(()) });
/// ```
///
/// # Configuration
///
/// To configure `Buckets` use the `with_*` methods in the type returned
/// by [builder()][Buckets::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://storage.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks (e.g. a network configured
///   with [Private Google Access with VPC Service Controls]) may want to
///   override this default.
/// * [with_credentials()]: by default this client uses
///   [Application Default Credentials]. Applications using custom
///   authentication may need to override this default.
///
/// # Pooling and Cloning
///
/// `Buckets` holds a connection pool internally, it is advised to
/// create one and then reuse it.  You do not need to wrap `Buckets` in
/// an [Rc](std::rc::Rc) or [Arc] to reuse it, because it already uses an `Arc`
/// internally.
///
/// # Service Description
///
/// Buckets are the basic containers that hold data in Cloud Storage. Bucket
/// names are globally unique. Each bucket carries metadata such as its
/// location, default storage class, versioning, logging, CORS and access
/// control configuration. Every change to this metadata increments the
/// bucket's `metageneration`, which applications can use in conditional
/// requests.
///
/// [with_endpoint()]: ClientBuilder::with_endpoint
/// [with_credentials()]: ClientBuilder::with_credentials
/// [Private Google Access with VPC Service Controls]: https://cloud.google.com/vpc-service-controls/docs/private-connectivity
/// [Application Default Credentials]: https://cloud.google.com/docs/authentication#adc
#[derive(Clone, Debug)]
pub struct Buckets {
    stub: Arc<dyn crate::stub::dynamic::Buckets>,
    options: RequestOptions,
}

#[derive(Clone, Debug)]
pub(crate) struct BucketsInner {
    pub client: reqwest::Client,
    pub cred: Credentials,
    pub endpoint: String,
}

impl Buckets {
    /// Returns a builder for [Buckets].
    ///
    /// # Example
    /// ```
    /// # use google_cloud_storage_buckets::client::Buckets;
    /// # async fn sample() -> anyhow::Result<()> {
    /// let client = Buckets::builder().build().await?;
    /// # Ok(()) }
    /// ```
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: crate::stub::Buckets + 'static,
    {
        Self {
            stub: Arc::new(stub),
            options: RequestOptions::default(),
        }
    }

    /// Creates a new bucket.
    ///
    /// Bucket names are globally unique. If a bucket with the same name
    /// already exists the request returns
    /// [InsertBucketOutcome::AlreadyExists][crate::model::InsertBucketOutcome::AlreadyExists],
    /// and the existing bucket is not modified.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_storage_buckets::client::Buckets;
    /// # async fn sample(client: &Buckets) -> anyhow::Result<()> {
    /// use google_cloud_storage_buckets::model::{BucketTemplate, InsertBucketOutcome};
    /// let template = BucketTemplate::builder()
    ///     .with_name("my-bucket")
    ///     .with_location("US")
    ///     .build();
    /// match client.insert_bucket("my-project", template).send().await? {
    ///     InsertBucketOutcome::Created(bucket) => println!("created {bucket:?}"),
    ///     _ => println!("the bucket already exists"),
    /// }
    /// # Ok(()) }
    /// ```
    ///
    /// # Parameters
    /// * `project` - the project that owns the new bucket, either its id or
    ///   its number.
    /// * `template` - the configuration for the new bucket, it must include a
    ///   name.
    pub fn insert_bucket<P>(&self, project: P, template: BucketTemplate) -> InsertBucket
    where
        P: Into<String>,
    {
        InsertBucket::new(self.stub.clone(), project, template, self.options.clone())
    }

    /// Gets the metadata for a bucket.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_storage_buckets::client::Buckets;
    /// # async fn sample(client: &Buckets) -> anyhow::Result<()> {
    /// let bucket = client.get_bucket("my-bucket").send().await?;
    /// println!("bucket details={bucket:?}");
    /// # Ok(()) }
    /// ```
    pub fn get_bucket<B>(&self, bucket: B) -> GetBucket
    where
        B: Into<String>,
    {
        GetBucket::new(self.stub.clone(), bucket, self.options.clone())
    }

    /// Replaces the metadata for a bucket.
    ///
    /// Fields not set in `template` are reset to their default values.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_storage_buckets::client::Buckets;
    /// # async fn sample(client: &Buckets) -> anyhow::Result<()> {
    /// use google_cloud_storage_buckets::model::*;
    /// let template = BucketTemplate::builder()
    ///     .add_acl(BucketAccessControl::new("allAuthenticatedUsers", BucketRole::Reader))
    ///     .build();
    /// let bucket = client
    ///     .update_bucket("my-bucket", template)
    ///     .with_if_metageneration_match(3)
    ///     .send()
    ///     .await?;
    /// println!("bucket details={bucket:?}");
    /// # Ok(()) }
    /// ```
    pub fn update_bucket<B>(&self, bucket: B, template: BucketTemplate) -> UpdateBucket
    where
        B: Into<String>,
    {
        UpdateBucket::new(self.stub.clone(), bucket, template, self.options.clone())
    }

    /// Modifies the metadata for a bucket.
    ///
    /// Only the fields set in `template` change, all other fields keep their
    /// current values.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_storage_buckets::client::Buckets;
    /// # async fn sample(client: &Buckets) -> anyhow::Result<()> {
    /// use google_cloud_storage_buckets::model::{BucketTemplate, Logging};
    /// let template = BucketTemplate::builder()
    ///     .with_logging(Logging::new("my-log-bucket"))
    ///     .build();
    /// let bucket = client.patch_bucket("my-bucket", template).send().await?;
    /// println!("bucket details={bucket:?}");
    /// # Ok(()) }
    /// ```
    pub fn patch_bucket<B>(&self, bucket: B, template: BucketTemplate) -> PatchBucket
    where
        B: Into<String>,
    {
        PatchBucket::new(self.stub.clone(), bucket, template, self.options.clone())
    }

    /// Deletes a bucket.
    ///
    /// The bucket must be empty. Deleting a bucket that does not exist
    /// succeeds, so this operation is idempotent.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_storage_buckets::client::Buckets;
    /// # async fn sample(client: &Buckets) -> anyhow::Result<()> {
    /// let deleted = client.delete_bucket("my-bucket").send().await?;
    /// assert!(deleted);
    /// # Ok(()) }
    /// ```
    pub fn delete_bucket<B>(&self, bucket: B) -> DeleteBucket
    where
        B: Into<String>,
    {
        DeleteBucket::new(self.stub.clone(), bucket, self.options.clone())
    }

    /// Lists the buckets in a project.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_storage_buckets::client::Buckets;
    /// # async fn sample(client: &Buckets) -> anyhow::Result<()> {
    /// let mut items = client.list_buckets("my-project").by_item();
    /// while let Some(bucket) = items.next().await {
    ///     let bucket = bucket?;
    ///     println!("{}", bucket.name);
    /// }
    /// # Ok(()) }
    /// ```
    pub fn list_buckets<P>(&self, project: P) -> ListBuckets
    where
        P: Into<String>,
    {
        ListBuckets::new(self.stub.clone(), project, self.options.clone())
    }

    pub(crate) fn new(builder: ClientBuilder) -> Result<Self> {
        tracing::info!("builder={builder:?}");
        let client = reqwest::Client::builder().build().map_err(Error::Transport)?;
        let cred = match builder.credentials {
            Some(c) => c,
            None => google_cloud_auth::credentials::Builder::default()
                .build()
                .map_err(|e| Error::Credentials(e.into()))?,
        };
        let endpoint = builder
            .endpoint
            .unwrap_or_else(|| self::DEFAULT_HOST.to_string());
        let inner = Arc::new(BucketsInner {
            client,
            cred,
            endpoint,
        });
        let transport = crate::transport::Buckets::new(inner);
        Ok(Self {
            stub: transport,
            options: builder.default_options,
        })
    }
}

impl BucketsInner {
    // Helper method to apply authentication headers to the request builder.
    pub async fn apply_auth_headers(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> crate::Result<reqwest::RequestBuilder> {
        let cached_auth_headers = self
            .cred
            .headers(Extensions::new())
            .await
            .map_err(crate::Error::authentication)?;

        let auth_headers = match cached_auth_headers {
            CacheableResource::New { data, .. } => data,
            CacheableResource::NotModified => {
                unreachable!("headers are not cached");
            }
        };

        let builder = builder.headers(auth_headers);
        Ok(builder)
    }
}

/// A builder for [Buckets].
///
/// ```
/// # use google_cloud_storage_buckets::client::Buckets;
/// # async fn sample() -> anyhow::Result<()> {
/// let builder = Buckets::builder();
/// let client = builder
///     .with_endpoint("https://storage.googleapis.com")
///     .build()
///     .await?;
/// # Ok(()) }
/// ```
pub struct ClientBuilder {
    pub(crate) endpoint: Option<String>,
    pub(crate) credentials: Option<Credentials>,
    // Default options for requests.
    pub(crate) default_options: RequestOptions,
}

impl std::fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("endpoint", &self.endpoint)
            // skip the credentials, only report if they are set.
            .field("has_credentials", &self.credentials.is_some())
            .field("default_options", &self.default_options)
            .finish()
    }
}

impl ClientBuilder {
    pub(crate) fn new() -> Self {
        Self {
            endpoint: None,
            credentials: None,
            default_options: RequestOptions::default(),
        }
    }

    /// Creates a new client.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_storage_buckets::client::Buckets;
    /// # async fn sample() -> anyhow::Result<()> {
    /// let client = Buckets::builder().build().await?;
    /// # Ok(()) }
    /// ```
    pub async fn build(self) -> Result<Buckets> {
        Buckets::new(self)
    }

    /// Sets the endpoint.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_storage_buckets::client::Buckets;
    /// # async fn sample() -> anyhow::Result<()> {
    /// let client = Buckets::builder()
    ///     .with_endpoint("https://private.googleapis.com")
    ///     .build()
    ///     .await?;
    /// # Ok(()) }
    /// ```
    pub fn with_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.endpoint = Some(v.into());
        self
    }

    /// Configures the authentication credentials.
    ///
    /// Google Cloud Storage requires authentication for most buckets. Use this
    /// method to change the credentials used by the client. More information
    /// about valid credentials types can be found in the [google-cloud-auth]
    /// crate documentation.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_storage_buckets::client::Buckets;
    /// # async fn sample() -> anyhow::Result<()> {
    /// use google_cloud_auth::credentials::anonymous;
    /// let client = Buckets::builder()
    ///     .with_credentials(anonymous::Builder::new().build())
    ///     .build()
    ///     .await?;
    /// # Ok(()) }
    /// ```
    ///
    /// [google-cloud-auth]: https://docs.rs/google-cloud-auth
    pub fn with_credentials<V: Into<Credentials>>(mut self, v: V) -> Self {
        self.credentials = Some(v.into());
        self
    }

    /// Sets a prefix for the user agent header in all requests.
    ///
    /// Applications can override this value for each request.
    pub fn with_user_agent<V: Into<String>>(mut self, v: V) -> Self {
        self.default_options.set_user_agent(v);
        self
    }

    /// Sets the timeout for each request attempt.
    ///
    /// Applications can override this value for each request.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_storage_buckets::client::Buckets;
    /// # async fn sample() -> anyhow::Result<()> {
    /// use std::time::Duration;
    /// let client = Buckets::builder()
    ///     .with_attempt_timeout(Duration::from_secs(30))
    ///     .build()
    ///     .await?;
    /// # Ok(()) }
    /// ```
    pub fn with_attempt_timeout<V: Into<std::time::Duration>>(mut self, v: V) -> Self {
        self.default_options.set_attempt_timeout(v);
        self
    }
}

/// The result of [ClientBuilder::build].
pub type Result<T> = std::result::Result<T, Error>;

/// Represents an error creating a client.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The default credentials could not be created.
    #[error("cannot create the default credentials: {0}")]
    Credentials(#[source] Box<dyn std::error::Error + Send + Sync>),
    /// The HTTP client could not be created.
    #[error("cannot create the HTTP client: {0}")]
    Transport(#[source] reqwest::Error),
}

/// The default host used by the service.
const DEFAULT_HOST: &str = "https://storage.googleapis.com";

pub(crate) mod info {
    const NAME: &str = env!("CARGO_PKG_NAME");
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The value of the `x-goog-api-client` header.
    pub(crate) fn x_goog_api_client() -> String {
        format!("gl-rust/unknown gccl/{VERSION}")
    }

    /// The value of the `user-agent` header, with an optional prefix.
    pub(crate) fn user_agent(prefix: Option<&str>) -> String {
        match prefix {
            Some(p) => format!("{p} {NAME}/{VERSION}"),
            None => format!("{NAME}/{VERSION}"),
        }
    }
}

/// The set of characters that are percent encoded.
///
/// This set is defined at https://cloud.google.com/storage/docs/request-endpoints#encoding:
///
/// Encode the following characters when they appear in either the object name
/// or query string of a request URL:
///     !, #, $, &, ', (, ), *, +, ,, /, :, ;, =, ?, @, [, ], and space characters.
const ENCODED_CHARS: percent_encoding::AsciiSet = percent_encoding::CONTROLS
    .add(b'!')
    .add(b'#')
    .add(b'$')
    .add(b'&')
    .add(b'\'')
    .add(b'(')
    .add(b')')
    .add(b'*')
    .add(b'+')
    .add(b',')
    .add(b'/')
    .add(b':')
    .add(b';')
    .add(b'=')
    .add(b'?')
    .add(b'@')
    .add(b'[')
    .add(b']')
    .add(b' ');

/// Percent encode a string.
///
/// Bucket names appear in the request path and must be encoded.
pub(crate) fn enc(value: &str) -> String {
    percent_encoding::utf8_percent_encode(value, &ENCODED_CHARS).to_string()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use google_cloud_auth::credentials::anonymous;
    use std::time::Duration;
    use test_case::test_case;

    pub(crate) fn test_builder() -> ClientBuilder {
        ClientBuilder::new()
            .with_credentials(anonymous::Builder::new().build())
            .with_endpoint("http://private.googleapis.com")
    }

    #[tokio::test]
    async fn build_with_credentials() -> anyhow::Result<()> {
        let client = test_builder()
            .with_user_agent("test-only")
            .with_attempt_timeout(Duration::from_secs(5))
            .build()
            .await?;
        assert_eq!(client.options.user_agent().as_deref(), Some("test-only"));
        assert_eq!(
            client.options.attempt_timeout(),
            &Some(Duration::from_secs(5))
        );
        Ok(())
    }

    #[test]
    fn builder_debug_skips_credentials() {
        let builder = test_builder();
        let got = format!("{builder:?}");
        assert!(got.contains("has_credentials: true"), "{got}");
        assert!(got.contains("private.googleapis.com"), "{got}");
    }

    #[test]
    fn client_is_send_and_sync() {
        static_assertions::assert_impl_all!(Buckets: Clone, Send, Sync, std::fmt::Debug);
    }

    #[test_case("my-bucket", "my-bucket")]
    #[test_case("my.bucket_with-dots", "my.bucket_with-dots")]
    #[test_case("a b", "a%20b")]
    #[test_case("a/b?c", "a%2Fb%3Fc")]
    fn encoding(input: &str, want: &str) {
        assert_eq!(enc(input), want);
    }

    #[test]
    fn user_agent() {
        let got = info::user_agent(None);
        assert!(got.starts_with("google-cloud-storage-buckets/"), "{got}");
        let got = info::user_agent(Some("my-app/1.0"));
        assert!(got.starts_with("my-app/1.0 google-cloud-storage-buckets/"), "{got}");
    }
}

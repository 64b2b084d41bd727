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

//! Request builders for [Buckets][crate::client::Buckets].
//!
//! Each function in the client returns one of these builders. Use the
//! `with_*` functions to set optional parameters and then call `send()`.

use crate::Result;
use crate::model::{
    Bucket, BucketTemplate, DeleteBucketRequest, GetBucketRequest, InsertBucketOutcome,
    InsertBucketRequest, ListBucketsRequest, ListPage, PredefinedBucketAcl, PredefinedObjectAcl,
    Projection, UpdateBucketRequest,
};
use crate::options::{
    DeleteBucketOptions, GetBucketOptions, InsertBucketOptions, ListBucketsOptions,
    UpdateBucketOptions,
};
use crate::paginator::{ItemPaginator, Paginator};
use crate::request_options::{RequestOptions, internal::RequestBuilder};
use crate::stub::dynamic::Buckets as Stub;
use std::sync::Arc;

/// The request builder for [Buckets::insert_bucket][crate::client::Buckets::insert_bucket] calls.
///
/// # Example
/// ```
/// # use google_cloud_storage_buckets::client::Buckets;
/// # async fn sample(client: &Buckets) -> anyhow::Result<()> {
/// use google_cloud_storage_buckets::model::{BucketTemplate, Projection};
/// let template = BucketTemplate::builder().with_name("my-bucket").build();
/// let outcome = client
///     .insert_bucket("my-project", template)
///     .with_projection(Projection::Full)
///     .send()
///     .await?;
/// println!("outcome={outcome:?}");
/// # Ok(()) }
/// ```
#[derive(Clone, Debug)]
pub struct InsertBucket {
    stub: Arc<dyn Stub>,
    request: InsertBucketRequest,
    options: RequestOptions,
}

impl InsertBucket {
    pub(crate) fn new<P>(
        stub: Arc<dyn Stub>,
        project: P,
        template: BucketTemplate,
        options: RequestOptions,
    ) -> Self
    where
        P: Into<String>,
    {
        let request = InsertBucketRequest {
            project: project.into(),
            template,
            options: InsertBucketOptions::default(),
        };
        Self {
            stub,
            request,
            options,
        }
    }

    /// Sets the properties returned in the response.
    ///
    /// The service defaults to [Projection::NoAcl] unless the template
    /// includes access control entries.
    pub fn with_projection<T: Into<Projection>>(mut self, v: T) -> Self {
        self.request.options.projection = Some(v.into());
        self
    }

    /// Applies a canned access control list to the new bucket.
    pub fn with_predefined_acl<T: Into<PredefinedBucketAcl>>(mut self, v: T) -> Self {
        self.request.options.predefined_acl = Some(v.into());
        self
    }

    /// Applies a canned default access control list for new objects.
    pub fn with_predefined_default_object_acl<T: Into<PredefinedObjectAcl>>(
        mut self,
        v: T,
    ) -> Self {
        self.request.options.predefined_default_object_acl = Some(v.into());
        self
    }

    /// Sets the project billed for this request.
    pub fn with_user_project<T: Into<String>>(mut self, v: T) -> Self {
        self.request.options.user_project = Some(v.into());
        self
    }

    /// Replaces all the optional parameters.
    pub fn with_options(mut self, v: InsertBucketOptions) -> Self {
        self.request.options = v;
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<InsertBucketOutcome> {
        self.stub.insert_bucket(self.request, self.options).await
    }
}

impl RequestBuilder for InsertBucket {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}

/// The request builder for [Buckets::get_bucket][crate::client::Buckets::get_bucket] calls.
///
/// # Example
/// ```
/// # use google_cloud_storage_buckets::client::Buckets;
/// # async fn sample(client: &Buckets) -> anyhow::Result<()> {
/// let bucket = client
///     .get_bucket("my-bucket")
///     .with_if_metageneration_not_match(3)
///     .send()
///     .await?;
/// println!("bucket={bucket:?}");
/// # Ok(()) }
/// ```
#[derive(Clone, Debug)]
pub struct GetBucket {
    stub: Arc<dyn Stub>,
    request: GetBucketRequest,
    options: RequestOptions,
}

impl GetBucket {
    pub(crate) fn new<B>(stub: Arc<dyn Stub>, bucket: B, options: RequestOptions) -> Self
    where
        B: Into<String>,
    {
        let request = GetBucketRequest {
            bucket: bucket.into(),
            options: GetBucketOptions::default(),
        };
        Self {
            stub,
            request,
            options,
        }
    }

    /// Returns the bucket only if its metageneration matches this value.
    ///
    /// The request fails with a precondition error otherwise.
    pub fn with_if_metageneration_match<T: Into<i64>>(mut self, v: T) -> Self {
        self.request.options.if_metageneration_match = Some(v.into());
        self
    }

    /// Returns the bucket only if its metageneration does not match this
    /// value.
    ///
    /// The request fails with a precondition error otherwise.
    pub fn with_if_metageneration_not_match<T: Into<i64>>(mut self, v: T) -> Self {
        self.request.options.if_metageneration_not_match = Some(v.into());
        self
    }

    /// Sets the properties returned in the response.
    pub fn with_projection<T: Into<Projection>>(mut self, v: T) -> Self {
        self.request.options.projection = Some(v.into());
        self
    }

    /// Sets the project billed for this request.
    pub fn with_user_project<T: Into<String>>(mut self, v: T) -> Self {
        self.request.options.user_project = Some(v.into());
        self
    }

    /// Replaces all the optional parameters.
    pub fn with_options(mut self, v: GetBucketOptions) -> Self {
        self.request.options = v;
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<Bucket> {
        self.stub.get_bucket(self.request, self.options).await
    }
}

impl RequestBuilder for GetBucket {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}

/// The request builder for [Buckets::update_bucket][crate::client::Buckets::update_bucket] calls.
#[derive(Clone, Debug)]
pub struct UpdateBucket {
    stub: Arc<dyn Stub>,
    request: UpdateBucketRequest,
    options: RequestOptions,
}

/// The request builder for [Buckets::patch_bucket][crate::client::Buckets::patch_bucket] calls.
#[derive(Clone, Debug)]
pub struct PatchBucket {
    stub: Arc<dyn Stub>,
    request: UpdateBucketRequest,
    options: RequestOptions,
}

// Update and patch accept the same parameters, they differ in the HTTP
// method and in how the service treats fields missing from the template.
macro_rules! modify_bucket_builder {
    ($name:ident, $method:ident) => {
        impl $name {
            pub(crate) fn new<B>(
                stub: Arc<dyn Stub>,
                bucket: B,
                template: BucketTemplate,
                options: RequestOptions,
            ) -> Self
            where
                B: Into<String>,
            {
                let request = UpdateBucketRequest {
                    bucket: bucket.into(),
                    template,
                    options: UpdateBucketOptions::default(),
                };
                Self {
                    stub,
                    request,
                    options,
                }
            }

            /// Applies the change only if the bucket metageneration matches
            /// this value.
            pub fn with_if_metageneration_match<T: Into<i64>>(mut self, v: T) -> Self {
                self.request.options.if_metageneration_match = Some(v.into());
                self
            }

            /// Applies the change only if the bucket metageneration does not
            /// match this value.
            pub fn with_if_metageneration_not_match<T: Into<i64>>(mut self, v: T) -> Self {
                self.request.options.if_metageneration_not_match = Some(v.into());
                self
            }

            /// Sets the properties returned in the response.
            pub fn with_projection<T: Into<Projection>>(mut self, v: T) -> Self {
                self.request.options.projection = Some(v.into());
                self
            }

            /// Applies a canned access control list to the bucket.
            pub fn with_predefined_acl<T: Into<PredefinedBucketAcl>>(mut self, v: T) -> Self {
                self.request.options.predefined_acl = Some(v.into());
                self
            }

            /// Applies a canned default access control list for new objects.
            pub fn with_predefined_default_object_acl<T: Into<PredefinedObjectAcl>>(
                mut self,
                v: T,
            ) -> Self {
                self.request.options.predefined_default_object_acl = Some(v.into());
                self
            }

            /// Sets the project billed for this request.
            pub fn with_user_project<T: Into<String>>(mut self, v: T) -> Self {
                self.request.options.user_project = Some(v.into());
                self
            }

            /// Replaces all the optional parameters.
            pub fn with_options(mut self, v: UpdateBucketOptions) -> Self {
                self.request.options = v;
                self
            }

            /// Sends the request.
            pub async fn send(self) -> Result<Bucket> {
                self.stub.$method(self.request, self.options).await
            }
        }

        impl RequestBuilder for $name {
            fn request_options(&mut self) -> &mut RequestOptions {
                &mut self.options
            }
        }
    };
}

modify_bucket_builder!(UpdateBucket, update_bucket);
modify_bucket_builder!(PatchBucket, patch_bucket);

/// The request builder for [Buckets::delete_bucket][crate::client::Buckets::delete_bucket] calls.
///
/// # Example
/// ```
/// # use google_cloud_storage_buckets::client::Buckets;
/// # async fn sample(client: &Buckets) -> anyhow::Result<()> {
/// let deleted = client
///     .delete_bucket("my-bucket")
///     .with_if_metageneration_match(7)
///     .send()
///     .await?;
/// # Ok(()) }
/// ```
#[derive(Clone, Debug)]
pub struct DeleteBucket {
    stub: Arc<dyn Stub>,
    request: DeleteBucketRequest,
    options: RequestOptions,
}

impl DeleteBucket {
    pub(crate) fn new<B>(stub: Arc<dyn Stub>, bucket: B, options: RequestOptions) -> Self
    where
        B: Into<String>,
    {
        let request = DeleteBucketRequest {
            bucket: bucket.into(),
            options: DeleteBucketOptions::default(),
        };
        Self {
            stub,
            request,
            options,
        }
    }

    /// Deletes the bucket only if its metageneration matches this value.
    pub fn with_if_metageneration_match<T: Into<i64>>(mut self, v: T) -> Self {
        self.request.options.if_metageneration_match = Some(v.into());
        self
    }

    /// Deletes the bucket only if its metageneration does not match this
    /// value.
    pub fn with_if_metageneration_not_match<T: Into<i64>>(mut self, v: T) -> Self {
        self.request.options.if_metageneration_not_match = Some(v.into());
        self
    }

    /// Sets the project billed for this request.
    pub fn with_user_project<T: Into<String>>(mut self, v: T) -> Self {
        self.request.options.user_project = Some(v.into());
        self
    }

    /// Replaces all the optional parameters.
    pub fn with_options(mut self, v: DeleteBucketOptions) -> Self {
        self.request.options = v;
        self
    }

    /// Sends the request.
    ///
    /// Returns `true` if the bucket was deleted or did not exist.
    pub async fn send(self) -> Result<bool> {
        self.stub.delete_bucket(self.request, self.options).await
    }
}

impl RequestBuilder for DeleteBucket {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}

/// The request builder for [Buckets::list_buckets][crate::client::Buckets::list_buckets] calls.
///
/// # Example
/// ```
/// # use google_cloud_storage_buckets::client::Buckets;
/// # async fn sample(client: &Buckets) -> anyhow::Result<()> {
/// let mut pages = client
///     .list_buckets("my-project")
///     .with_prefix("logs-")
///     .by_page();
/// while let Some(page) = pages.next().await {
///     let page = page?;
///     for bucket in page {
///         println!("{}", bucket.name);
///     }
/// }
/// # Ok(()) }
/// ```
#[derive(Clone, Debug)]
pub struct ListBuckets {
    stub: Arc<dyn Stub>,
    request: ListBucketsRequest,
    options: RequestOptions,
}

impl ListBuckets {
    pub(crate) fn new<P>(stub: Arc<dyn Stub>, project: P, options: RequestOptions) -> Self
    where
        P: Into<String>,
    {
        let request = ListBucketsRequest {
            project: project.into(),
            options: ListBucketsOptions::default(),
        };
        Self {
            stub,
            request,
            options,
        }
    }

    /// Sets the maximum number of buckets in each page.
    pub fn with_max_results(mut self, v: u32) -> Self {
        self.request.options.max_results = Some(v);
        self
    }

    /// Starts listing at the page identified by this token.
    pub fn with_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.request.options.page_token = Some(v.into());
        self
    }

    /// Only lists buckets whose names start with this prefix.
    pub fn with_prefix<T: Into<String>>(mut self, v: T) -> Self {
        self.request.options.prefix = Some(v.into());
        self
    }

    /// Sets the properties returned for each bucket.
    pub fn with_projection<T: Into<Projection>>(mut self, v: T) -> Self {
        self.request.options.projection = Some(v.into());
        self
    }

    /// Sets the project billed for this request.
    pub fn with_user_project<T: Into<String>>(mut self, v: T) -> Self {
        self.request.options.user_project = Some(v.into());
        self
    }

    /// Replaces all the optional parameters.
    pub fn with_options(mut self, v: ListBucketsOptions) -> Self {
        self.request.options = v;
        self
    }

    /// Sends the request and returns a single page.
    ///
    /// Use [ListPage::next_page_token] with
    /// [with_page_token()][ListBuckets::with_page_token] to fetch the
    /// following pages, or use [by_page()][ListBuckets::by_page] and
    /// [by_item()][ListBuckets::by_item] to iterate over all the results.
    pub async fn send(self) -> Result<ListPage<Bucket>> {
        self.stub.list_buckets(self.request, self.options).await
    }

    /// Streams the pages of results, fetching each page on demand.
    pub fn by_page(self) -> Paginator<ListPage<Bucket>, crate::Error> {
        let token = self.request.options.page_token.clone().unwrap_or_default();
        let execute = move |token: String| {
            let mut builder = self.clone();
            builder.request.options.page_token = Some(token).filter(|t| !t.is_empty());
            builder.send()
        };
        Paginator::new(token, execute)
    }

    /// Streams the buckets, fetching additional pages on demand.
    pub fn by_item(self) -> ItemPaginator<ListPage<Bucket>, crate::Error> {
        self.by_page().items()
    }
}

impl RequestBuilder for ListBuckets {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}

#[cfg(test)]
mod tests {
    use crate::client::Buckets;
    use crate::client::tests::test_builder;
    use crate::model::*;
    use crate::options::GetBucketOptions;
    use crate::request_options::RequestOptionsBuilder;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::time::Duration;
    use test_case::test_case;

    type Result = anyhow::Result<()>;

    async fn test_client(server: &Server) -> anyhow::Result<Buckets> {
        let client = test_builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .build()
            .await?;
        Ok(client)
    }

    fn bucket_json(name: &str, metageneration: i64) -> serde_json::Value {
        json!({
            "kind": "storage#bucket",
            "id": name,
            "name": name,
            "projectNumber": "123456",
            "metageneration": metageneration.to_string(),
            "location": "US",
            "storageClass": "STANDARD",
            "etag": "CAE="
        })
    }

    // Verify the builders meet normal Send, Sync, requirements.
    #[tokio::test]
    async fn test_builders_are_send_and_static() -> Result {
        let server = Server::run();
        let client = test_client(&server).await?;

        fn need_send<T: Send>(_val: &T) {}
        fn need_sync<T: Sync>(_val: &T) {}
        fn need_static<T: 'static>(_val: &T) {}

        let get = client.get_bucket("test-bucket");
        need_send(&get);
        need_sync(&get);
        need_static(&get);

        let get = client.get_bucket("test-bucket").send();
        need_send(&get);
        need_static(&get);

        let items = client.list_buckets("test-project").by_item();
        need_send(&items);
        need_static(&items);
        Ok(())
    }

    #[tokio::test]
    async fn insert_bucket() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/storage/v1/b"),
                request::query(url_decoded(contains(("project", "test-project")))),
                request::query(url_decoded(contains(("alt", "json")))),
                request::query(url_decoded(contains(("projection", "full")))),
                request::query(url_decoded(contains(("predefinedAcl", "publicRead")))),
                request::headers(contains(("content-type", "application/json"))),
                request::body(json_decoded(eq(json!({
                    "name": "test-bucket",
                    "location": "US",
                    "versioning": {"enabled": true}
                })))),
            ])
            .respond_with(json_encoded(bucket_json("test-bucket", 1))),
        );

        let client = test_client(&server).await?;
        let template = BucketTemplate::builder()
            .with_name("test-bucket")
            .with_location("US")
            .with_versioning(true)
            .build();
        let outcome = client
            .insert_bucket("test-project", template)
            .with_projection(Projection::Full)
            .with_predefined_acl(PredefinedBucketAcl::PublicRead)
            .send()
            .await?;
        let bucket = outcome.into_bucket().expect("bucket should be created");
        assert_eq!(bucket.name, "test-bucket");
        assert_eq!(bucket.metageneration, 1);
        assert_eq!(bucket.project_number, 123456);
        Ok(())
    }

    #[tokio::test]
    async fn insert_bucket_already_exists() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/storage/v1/b")).respond_with(
                status_code(409).body(
                    json!({"error": {
                        "code": 409,
                        "message": "Your previous request to create the named bucket succeeded and you already own it."
                    }})
                    .to_string(),
                ),
            ),
        );

        let client = test_client(&server).await?;
        let template = BucketTemplate::builder().with_name("test-bucket").build();
        let outcome = client.insert_bucket("test-project", template).send().await?;
        assert_eq!(outcome, InsertBucketOutcome::AlreadyExists);
        Ok(())
    }

    #[tokio::test]
    async fn insert_bucket_missing_name() -> Result {
        let server = Server::run();
        let client = test_client(&server).await?;
        let err = client
            .insert_bucket("test-project", BucketTemplate::builder().build())
            .send()
            .await
            .unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn get_bucket() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/storage/v1/b/test-bucket"),
                request::query(url_decoded(contains(("alt", "json")))),
                request::query(url_decoded(not(contains(key("ifMetagenerationMatch"))))),
                request::query(url_decoded(not(contains(key("projection"))))),
                request::headers(contains(("x-goog-api-client", any()))),
                request::headers(contains(key("user-agent"))),
            ])
            .respond_with(json_encoded(bucket_json("test-bucket", 3))),
        );

        let client = test_client(&server).await?;
        let bucket = client.get_bucket("test-bucket").send().await?;
        assert_eq!(bucket.name, "test-bucket");
        assert_eq!(bucket.metageneration, 3);
        assert_eq!(bucket.storage_class, Some(StorageClass::Standard));
        Ok(())
    }

    #[tokio::test]
    async fn get_bucket_with_options() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/storage/v1/b/test-bucket"),
                request::query(url_decoded(contains(("ifMetagenerationMatch", "3")))),
                request::query(url_decoded(contains(("ifMetagenerationNotMatch", "4")))),
                request::query(url_decoded(contains(("projection", "noAcl")))),
                request::query(url_decoded(contains(("userProject", "billing")))),
            ])
            .respond_with(json_encoded(bucket_json("test-bucket", 3))),
        );

        let client = test_client(&server).await?;
        let options = GetBucketOptions::default()
            .with_if_metageneration_match(3)
            .with_if_metageneration_not_match(4)
            .with_projection(Projection::NoAcl);
        let bucket = client
            .get_bucket("test-bucket")
            .with_options(options)
            .with_user_project("billing")
            .send()
            .await?;
        assert_eq!(bucket.metageneration, 3);
        Ok(())
    }

    #[test_case(404; "not found")]
    #[test_case(412; "precondition failed")]
    #[test_case(304; "not modified")]
    #[tokio::test]
    async fn get_bucket_errors(code: u16) -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/storage/v1/b/test-bucket"))
                .respond_with(status_code(code)),
        );

        let client = test_client(&server).await?;
        let err = client
            .get_bucket("test-bucket")
            .with_if_metageneration_not_match(3)
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(code), "{err:?}");
        assert_eq!(err.is_not_found(), code == 404, "{err:?}");
        assert_eq!(err.is_precondition_failed(), code != 404, "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn get_bucket_server_error() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/storage/v1/b/test-bucket"))
                .respond_with(status_code(503).body("try again later")),
        );

        let client = test_client(&server).await?;
        let err = client.get_bucket("test-bucket").send().await.unwrap_err();
        assert!(err.is_transport(), "{err:?}");
        assert_eq!(
            err.http_payload(),
            Some(&bytes::Bytes::from_static(b"try again later"))
        );
        Ok(())
    }

    #[tokio::test]
    async fn get_bucket_rejected_precondition() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/storage/v1/b/test-bucket"),
                request::query(url_decoded(contains(("ifMetagenerationMatch", "-1")))),
            ])
            .respond_with(
                status_code(400).body(
                    json!({"error": {"code": 400, "message": "Invalid argument"}}).to_string(),
                ),
            ),
        );

        let client = test_client(&server).await?;
        let err = client
            .get_bucket("test-bucket")
            .with_if_metageneration_match(-1)
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(400), "{err:?}");
        assert!(!err.is_precondition_failed(), "{err:?}");
        assert!(!err.is_not_found(), "{err:?}");
        assert!(!err.is_transport(), "{err:?}");
        assert_eq!(
            err.service_error().map(|e| e.message.as_str()),
            Some("Invalid argument")
        );
        Ok(())
    }

    #[tokio::test]
    async fn get_bucket_bad_response() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/storage/v1/b/test-bucket"))
                .respond_with(status_code(200).body("not json")),
        );

        let client = test_client(&server).await?;
        let err = client.get_bucket("test-bucket").send().await.unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn get_bucket_empty_name() -> Result {
        let server = Server::run();
        let client = test_client(&server).await?;
        let err = client.get_bucket("").send().await.unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn get_bucket_encodes_name() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/storage/v1/b/a%20b"))
                .respond_with(json_encoded(bucket_json("a b", 1))),
        );

        let client = test_client(&server).await?;
        let bucket = client.get_bucket("a b").send().await?;
        assert_eq!(bucket.name, "a b");
        Ok(())
    }

    #[tokio::test]
    async fn get_bucket_user_agent() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/storage/v1/b/test-bucket"),
                request::headers(contains(("user-agent", matches("^my-app/1.0 ")))),
            ])
            .respond_with(json_encoded(bucket_json("test-bucket", 1))),
        );

        let client = test_client(&server).await?;
        client
            .get_bucket("test-bucket")
            .with_user_agent("my-app/1.0")
            .send()
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn get_bucket_attempt_timeout() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/storage/v1/b/test-bucket"))
                .respond_with(delay_and_then(
                    Duration::from_millis(500),
                    json_encoded(bucket_json("test-bucket", 1)),
                )),
        );

        let client = test_client(&server).await?;
        let err = client
            .get_bucket("test-bucket")
            .with_attempt_timeout(Duration::from_millis(20))
            .send()
            .await
            .unwrap_err();
        assert!(err.is_timeout(), "{err:?}");
        assert!(err.is_transport(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn update_bucket() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PUT", "/storage/v1/b/test-bucket"),
                request::query(url_decoded(contains(("ifMetagenerationMatch", "3")))),
                request::query(url_decoded(contains(("projection", "full")))),
                request::body(json_decoded(eq(json!({
                    "acl": [{"entity": "allAuthenticatedUsers", "role": "OWNER"}]
                })))),
            ])
            .respond_with(json_encoded(bucket_json("test-bucket", 4))),
        );

        let client = test_client(&server).await?;
        let template = BucketTemplate::builder()
            .add_acl(BucketAccessControl::new(
                "allAuthenticatedUsers",
                BucketRole::Owner,
            ))
            .build();
        let bucket = client
            .update_bucket("test-bucket", template)
            .with_if_metageneration_match(3)
            .with_projection(Projection::Full)
            .send()
            .await?;
        assert_eq!(bucket.metageneration, 4);
        Ok(())
    }

    #[tokio::test]
    async fn update_bucket_precondition_failed() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("PUT", "/storage/v1/b/test-bucket"))
                .respond_with(
                    status_code(412).body(
                        json!({"error": {"code": 412, "message": "Precondition Failed"}})
                            .to_string(),
                    ),
                ),
        );

        let client = test_client(&server).await?;
        let err = client
            .update_bucket("test-bucket", BucketTemplate::builder().build())
            .with_if_metageneration_match(1)
            .send()
            .await
            .unwrap_err();
        assert!(err.is_precondition_failed(), "{err:?}");
        assert_eq!(
            err.service_error().map(|e| e.message.as_str()),
            Some("Precondition Failed")
        );
        Ok(())
    }

    #[tokio::test]
    async fn patch_bucket() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PATCH", "/storage/v1/b/test-bucket"),
                request::query(url_decoded(contains((
                    "predefinedDefaultObjectAcl",
                    "bucketOwnerRead"
                )))),
                request::body(json_decoded(eq(json!({
                    "logging": {"logBucket": "log-bucket", "logObjectPrefix": "test-bucket"}
                })))),
            ])
            .respond_with(json_encoded(json!({
                "name": "test-bucket",
                "metageneration": "5",
                "logging": {"logBucket": "log-bucket", "logObjectPrefix": "test-bucket"},
                "versioning": {"enabled": true}
            }))),
        );

        let client = test_client(&server).await?;
        let template = BucketTemplate::builder()
            .with_logging(Logging::new("log-bucket").set_log_object_prefix("test-bucket"))
            .build();
        let bucket = client
            .patch_bucket("test-bucket", template)
            .with_predefined_default_object_acl(PredefinedObjectAcl::BucketOwnerRead)
            .send()
            .await?;
        assert_eq!(
            bucket.logging.map(|l| l.log_bucket),
            Some("log-bucket".to_string())
        );
        assert!(bucket.versioning.is_some_and(|v| v.enabled));
        Ok(())
    }

    #[tokio::test]
    async fn patch_bucket_keeps_unset_logging_prefix() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PATCH", "/storage/v1/b/test-bucket"),
                request::body(json_decoded(eq(json!({
                    "logging": {"logBucket": "log-bucket"}
                })))),
            ])
            .respond_with(json_encoded(json!({
                "name": "test-bucket",
                "metageneration": "6",
                "logging": {"logBucket": "log-bucket", "logObjectPrefix": "existing"}
            }))),
        );

        let client = test_client(&server).await?;
        let template = BucketTemplate::builder()
            .with_logging(Logging::new("log-bucket"))
            .build();
        let bucket = client.patch_bucket("test-bucket", template).send().await?;
        assert_eq!(
            bucket.logging.map(|l| l.log_object_prefix),
            Some("existing".to_string())
        );
        Ok(())
    }

    #[test_case(200; "ok")]
    #[test_case(204; "no content")]
    #[test_case(404; "not found")]
    #[tokio::test]
    async fn delete_bucket(code: u16) -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("DELETE", "/storage/v1/b/test-bucket"),
                request::query(url_decoded(contains(("ifMetagenerationMatch", "3")))),
                request::query(url_decoded(contains(("ifMetagenerationNotMatch", "4")))),
            ])
            .respond_with(status_code(code)),
        );

        let client = test_client(&server).await?;
        let deleted = client
            .delete_bucket("test-bucket")
            .with_if_metageneration_match(3)
            .with_if_metageneration_not_match(4)
            .send()
            .await?;
        assert!(deleted);
        Ok(())
    }

    #[tokio::test]
    async fn delete_bucket_precondition_failed() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("DELETE", "/storage/v1/b/test-bucket"))
                .respond_with(status_code(412)),
        );

        let client = test_client(&server).await?;
        let err = client
            .delete_bucket("test-bucket")
            .with_if_metageneration_match(1)
            .send()
            .await
            .unwrap_err();
        assert!(err.is_precondition_failed(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn list_buckets_single_page() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/storage/v1/b"),
                request::query(url_decoded(contains(("project", "test-project")))),
                request::query(url_decoded(contains(("maxResults", "2")))),
                request::query(url_decoded(contains(("prefix", "test-")))),
                request::query(url_decoded(not(contains(key("pageToken"))))),
            ])
            .respond_with(json_encoded(json!({
                "kind": "storage#buckets",
                "items": [bucket_json("test-a", 1), bucket_json("test-b", 1)],
                "nextPageToken": "page-2"
            }))),
        );

        let client = test_client(&server).await?;
        let page = client
            .list_buckets("test-project")
            .with_max_results(2)
            .with_prefix("test-")
            .send()
            .await?;
        let names = page.items.iter().map(|b| b.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["test-a", "test-b"]);
        assert_eq!(page.next_page_token.as_deref(), Some("page-2"));
        Ok(())
    }

    fn expect_two_pages(server: &Server) {
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/storage/v1/b"),
                request::query(url_decoded(not(contains(key("pageToken"))))),
            ])
            .respond_with(json_encoded(json!({
                "items": [bucket_json("b1", 1), bucket_json("b2", 1)],
                "nextPageToken": "page-2"
            }))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/storage/v1/b"),
                request::query(url_decoded(contains(("pageToken", "page-2")))),
            ])
            .respond_with(json_encoded(json!({
                "items": [bucket_json("b3", 1)]
            }))),
        );
    }

    #[tokio::test]
    async fn list_buckets_by_page() -> Result {
        let server = Server::run();
        expect_two_pages(&server);

        let client = test_client(&server).await?;
        let mut pages = client.list_buckets("test-project").by_page();
        let mut sizes = Vec::new();
        while let Some(page) = pages.next().await {
            sizes.push(page?.items.len());
        }
        assert_eq!(sizes, vec![2, 1]);
        Ok(())
    }

    #[tokio::test]
    async fn list_buckets_by_item() -> Result {
        let server = Server::run();
        expect_two_pages(&server);

        let client = test_client(&server).await?;
        let mut items = client.list_buckets("test-project").by_item();
        let mut names = Vec::new();
        while let Some(bucket) = items.next().await {
            names.push(bucket?.name);
        }
        assert_eq!(names, vec!["b1", "b2", "b3"]);
        Ok(())
    }

    #[tokio::test]
    async fn list_buckets_error() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/storage/v1/b"))
                .respond_with(status_code(400).body("bad maxResults")),
        );

        let client = test_client(&server).await?;
        let mut items = client.list_buckets("test-project").by_item();
        let err = items.next().await.expect("one result").unwrap_err();
        assert_eq!(err.http_status_code(), Some(400), "{err:?}");
        assert!(items.next().await.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn list_buckets_empty_project() -> Result {
        let server = Server::run();
        let client = test_client(&server).await?;
        let err = client.list_buckets("").send().await.unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        Ok(())
    }
}

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

//! Traits to mock the client.
//!
//! Application developers may need to mock the client in their own tests.
//! Implement [Buckets] in a test double and wrap it with
//! [Buckets::from_stub()][crate::client::Buckets::from_stub]. The default
//! implementation of each function panics, so test doubles only need to
//! implement the functions used by the code under test.

use crate::Result;
use crate::model::{
    Bucket, DeleteBucketRequest, GetBucketRequest, InsertBucketOutcome, InsertBucketRequest,
    ListBucketsRequest, ListPage, UpdateBucketRequest,
};
use crate::request_options::RequestOptions;

/// Defines the trait used to implement [crate::client::Buckets].
///
/// # Example
/// ```
/// # use google_cloud_storage_buckets::{client::Buckets, model::*};
/// # use google_cloud_storage_buckets::request_options::RequestOptions;
/// # use google_cloud_storage_buckets::Result;
/// #[derive(Debug)]
/// struct AlwaysEmpty;
/// impl google_cloud_storage_buckets::stub::Buckets for AlwaysEmpty {
///     async fn list_buckets(
///         &self,
///         _req: ListBucketsRequest,
///         _options: RequestOptions,
///     ) -> Result<ListPage<Bucket>> {
///         Ok(ListPage::default())
///     }
/// }
/// let client = Buckets::from_stub(AlwaysEmpty);
/// ```
pub trait Buckets: std::fmt::Debug + Send + Sync {
    /// Implements [crate::client::Buckets::insert_bucket].
    fn insert_bucket(
        &self,
        _req: InsertBucketRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<InsertBucketOutcome>> + Send {
        unimplemented_stub::<InsertBucketOutcome>()
    }

    /// Implements [crate::client::Buckets::get_bucket].
    fn get_bucket(
        &self,
        _req: GetBucketRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Bucket>> + Send {
        unimplemented_stub::<Bucket>()
    }

    /// Implements [crate::client::Buckets::update_bucket].
    fn update_bucket(
        &self,
        _req: UpdateBucketRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Bucket>> + Send {
        unimplemented_stub::<Bucket>()
    }

    /// Implements [crate::client::Buckets::patch_bucket].
    fn patch_bucket(
        &self,
        _req: UpdateBucketRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<Bucket>> + Send {
        unimplemented_stub::<Bucket>()
    }

    /// Implements [crate::client::Buckets::delete_bucket].
    fn delete_bucket(
        &self,
        _req: DeleteBucketRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<bool>> + Send {
        unimplemented_stub::<bool>()
    }

    /// Implements [crate::client::Buckets::list_buckets].
    fn list_buckets(
        &self,
        _req: ListBucketsRequest,
        _options: RequestOptions,
    ) -> impl std::future::Future<Output = Result<ListPage<Bucket>>> + Send {
        unimplemented_stub::<ListPage<Bucket>>()
    }
}

pub(crate) mod dynamic {
    use super::*;

    /// An object-safe version of [super::Buckets].
    #[async_trait::async_trait]
    pub trait Buckets: std::fmt::Debug + Send + Sync {
        async fn insert_bucket(
            &self,
            req: InsertBucketRequest,
            options: RequestOptions,
        ) -> Result<InsertBucketOutcome>;

        async fn get_bucket(&self, req: GetBucketRequest, options: RequestOptions)
        -> Result<Bucket>;

        async fn update_bucket(
            &self,
            req: UpdateBucketRequest,
            options: RequestOptions,
        ) -> Result<Bucket>;

        async fn patch_bucket(
            &self,
            req: UpdateBucketRequest,
            options: RequestOptions,
        ) -> Result<Bucket>;

        async fn delete_bucket(
            &self,
            req: DeleteBucketRequest,
            options: RequestOptions,
        ) -> Result<bool>;

        async fn list_buckets(
            &self,
            req: ListBucketsRequest,
            options: RequestOptions,
        ) -> Result<ListPage<Bucket>>;
    }

    /// All implementations of [super::Buckets] also implement [Buckets].
    #[async_trait::async_trait]
    impl<T: super::Buckets> Buckets for T {
        async fn insert_bucket(
            &self,
            req: InsertBucketRequest,
            options: RequestOptions,
        ) -> Result<InsertBucketOutcome> {
            T::insert_bucket(self, req, options).await
        }

        async fn get_bucket(
            &self,
            req: GetBucketRequest,
            options: RequestOptions,
        ) -> Result<Bucket> {
            T::get_bucket(self, req, options).await
        }

        async fn update_bucket(
            &self,
            req: UpdateBucketRequest,
            options: RequestOptions,
        ) -> Result<Bucket> {
            T::update_bucket(self, req, options).await
        }

        async fn patch_bucket(
            &self,
            req: UpdateBucketRequest,
            options: RequestOptions,
        ) -> Result<Bucket> {
            T::patch_bucket(self, req, options).await
        }

        async fn delete_bucket(
            &self,
            req: DeleteBucketRequest,
            options: RequestOptions,
        ) -> Result<bool> {
            T::delete_bucket(self, req, options).await
        }

        async fn list_buckets(
            &self,
            req: ListBucketsRequest,
            options: RequestOptions,
        ) -> Result<ListPage<Bucket>> {
            T::list_buckets(self, req, options).await
        }
    }
}

async fn unimplemented_stub<T: Send>() -> Result<T> {
    unimplemented!(concat!(
        "to prevent breaking changes as the service gains new operations, the ",
        "stub traits provide default implementations of each method. In the ",
        "client library, all implementations of the traits override all ",
        "methods. Therefore, this error should not appear in normal code using ",
        "the client library. The only expected context for this error is test ",
        "code mocking the client library. If that is how you got this error, ",
        "verify that you have mocked all methods used in your test."
    ));
}

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

//! Optional query parameters for each operation.
//!
//! The default value of each record sends no optional parameters, and the
//! service defaults apply. The request builders in [crate::builder] expose
//! the same options as `with_*` functions.
//!
//! # Example
//! ```
//! # use google_cloud_storage_buckets::client::Buckets;
//! # async fn sample(client: &Buckets) -> anyhow::Result<()> {
//! use google_cloud_storage_buckets::model::Projection;
//! use google_cloud_storage_buckets::options::GetBucketOptions;
//! let options = GetBucketOptions::default()
//!     .with_if_metageneration_match(3)
//!     .with_projection(Projection::Full);
//! let bucket = client
//!     .get_bucket("my-bucket")
//!     .with_options(options)
//!     .send()
//!     .await?;
//! # Ok(()) }
//! ```

use crate::model::{PredefinedBucketAcl, PredefinedObjectAcl, Projection};

/// A rendered query parameter.
pub(crate) type QueryParameter = (&'static str, String);

/// The options for [insert_bucket][crate::client::Buckets::insert_bucket].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct InsertBucketOptions {
    pub projection: Option<Projection>,
    pub predefined_acl: Option<PredefinedBucketAcl>,
    pub predefined_default_object_acl: Option<PredefinedObjectAcl>,
    /// The project billed for the request, for requester pays buckets.
    pub user_project: Option<String>,
}

impl InsertBucketOptions {
    /// Sets the value of [projection][InsertBucketOptions::projection].
    pub fn with_projection<T: Into<Projection>>(mut self, v: T) -> Self {
        self.projection = Some(v.into());
        self
    }

    /// Sets the value of [predefined_acl][InsertBucketOptions::predefined_acl].
    pub fn with_predefined_acl<T: Into<PredefinedBucketAcl>>(mut self, v: T) -> Self {
        self.predefined_acl = Some(v.into());
        self
    }

    /// Sets the value of [predefined_default_object_acl][InsertBucketOptions::predefined_default_object_acl].
    pub fn with_predefined_default_object_acl<T: Into<PredefinedObjectAcl>>(
        mut self,
        v: T,
    ) -> Self {
        self.predefined_default_object_acl = Some(v.into());
        self
    }

    /// Sets the value of [user_project][InsertBucketOptions::user_project].
    pub fn with_user_project<T: Into<String>>(mut self, v: T) -> Self {
        self.user_project = Some(v.into());
        self
    }

    pub(crate) fn query_parameters(&self) -> Vec<QueryParameter> {
        [
            param("projection", &self.projection),
            param("predefinedAcl", &self.predefined_acl),
            param(
                "predefinedDefaultObjectAcl",
                &self.predefined_default_object_acl,
            ),
            param("userProject", &self.user_project),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

/// The options for [get_bucket][crate::client::Buckets::get_bucket].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetBucketOptions {
    /// Return the bucket only if its metageneration matches this value.
    pub if_metageneration_match: Option<i64>,
    /// Return the bucket only if its metageneration does not match this value.
    pub if_metageneration_not_match: Option<i64>,
    pub projection: Option<Projection>,
    pub user_project: Option<String>,
}

impl GetBucketOptions {
    /// Sets the value of [if_metageneration_match][GetBucketOptions::if_metageneration_match].
    pub fn with_if_metageneration_match<T: Into<i64>>(mut self, v: T) -> Self {
        self.if_metageneration_match = Some(v.into());
        self
    }

    /// Sets the value of [if_metageneration_not_match][GetBucketOptions::if_metageneration_not_match].
    pub fn with_if_metageneration_not_match<T: Into<i64>>(mut self, v: T) -> Self {
        self.if_metageneration_not_match = Some(v.into());
        self
    }

    /// Sets the value of [projection][GetBucketOptions::projection].
    pub fn with_projection<T: Into<Projection>>(mut self, v: T) -> Self {
        self.projection = Some(v.into());
        self
    }

    /// Sets the value of [user_project][GetBucketOptions::user_project].
    pub fn with_user_project<T: Into<String>>(mut self, v: T) -> Self {
        self.user_project = Some(v.into());
        self
    }

    pub(crate) fn query_parameters(&self) -> Vec<QueryParameter> {
        [
            param("ifMetagenerationMatch", &self.if_metageneration_match),
            param("ifMetagenerationNotMatch", &self.if_metageneration_not_match),
            param("projection", &self.projection),
            param("userProject", &self.user_project),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

/// The options for [update_bucket][crate::client::Buckets::update_bucket] and
/// [patch_bucket][crate::client::Buckets::patch_bucket].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UpdateBucketOptions {
    /// Apply the change only if the bucket metageneration matches this value.
    pub if_metageneration_match: Option<i64>,
    /// Apply the change only if the bucket metageneration does not match this
    /// value.
    pub if_metageneration_not_match: Option<i64>,
    pub projection: Option<Projection>,
    pub predefined_acl: Option<PredefinedBucketAcl>,
    pub predefined_default_object_acl: Option<PredefinedObjectAcl>,
    pub user_project: Option<String>,
}

impl UpdateBucketOptions {
    /// Sets the value of [if_metageneration_match][UpdateBucketOptions::if_metageneration_match].
    pub fn with_if_metageneration_match<T: Into<i64>>(mut self, v: T) -> Self {
        self.if_metageneration_match = Some(v.into());
        self
    }

    /// Sets the value of [if_metageneration_not_match][UpdateBucketOptions::if_metageneration_not_match].
    pub fn with_if_metageneration_not_match<T: Into<i64>>(mut self, v: T) -> Self {
        self.if_metageneration_not_match = Some(v.into());
        self
    }

    /// Sets the value of [projection][UpdateBucketOptions::projection].
    pub fn with_projection<T: Into<Projection>>(mut self, v: T) -> Self {
        self.projection = Some(v.into());
        self
    }

    /// Sets the value of [predefined_acl][UpdateBucketOptions::predefined_acl].
    pub fn with_predefined_acl<T: Into<PredefinedBucketAcl>>(mut self, v: T) -> Self {
        self.predefined_acl = Some(v.into());
        self
    }

    /// Sets the value of [predefined_default_object_acl][UpdateBucketOptions::predefined_default_object_acl].
    pub fn with_predefined_default_object_acl<T: Into<PredefinedObjectAcl>>(
        mut self,
        v: T,
    ) -> Self {
        self.predefined_default_object_acl = Some(v.into());
        self
    }

    /// Sets the value of [user_project][UpdateBucketOptions::user_project].
    pub fn with_user_project<T: Into<String>>(mut self, v: T) -> Self {
        self.user_project = Some(v.into());
        self
    }

    pub(crate) fn query_parameters(&self) -> Vec<QueryParameter> {
        [
            param("ifMetagenerationMatch", &self.if_metageneration_match),
            param("ifMetagenerationNotMatch", &self.if_metageneration_not_match),
            param("projection", &self.projection),
            param("predefinedAcl", &self.predefined_acl),
            param(
                "predefinedDefaultObjectAcl",
                &self.predefined_default_object_acl,
            ),
            param("userProject", &self.user_project),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

/// The options for [delete_bucket][crate::client::Buckets::delete_bucket].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteBucketOptions {
    /// Delete the bucket only if its metageneration matches this value.
    pub if_metageneration_match: Option<i64>,
    /// Delete the bucket only if its metageneration does not match this value.
    pub if_metageneration_not_match: Option<i64>,
    pub user_project: Option<String>,
}

impl DeleteBucketOptions {
    /// Sets the value of [if_metageneration_match][DeleteBucketOptions::if_metageneration_match].
    pub fn with_if_metageneration_match<T: Into<i64>>(mut self, v: T) -> Self {
        self.if_metageneration_match = Some(v.into());
        self
    }

    /// Sets the value of [if_metageneration_not_match][DeleteBucketOptions::if_metageneration_not_match].
    pub fn with_if_metageneration_not_match<T: Into<i64>>(mut self, v: T) -> Self {
        self.if_metageneration_not_match = Some(v.into());
        self
    }

    /// Sets the value of [user_project][DeleteBucketOptions::user_project].
    pub fn with_user_project<T: Into<String>>(mut self, v: T) -> Self {
        self.user_project = Some(v.into());
        self
    }

    pub(crate) fn query_parameters(&self) -> Vec<QueryParameter> {
        [
            param("ifMetagenerationMatch", &self.if_metageneration_match),
            param("ifMetagenerationNotMatch", &self.if_metageneration_not_match),
            param("userProject", &self.user_project),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

/// The options for [list_buckets][crate::client::Buckets::list_buckets].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListBucketsOptions {
    /// The maximum number of buckets in each page.
    pub max_results: Option<u32>,
    /// Start listing at this page, as returned in a previous `nextPageToken`.
    pub page_token: Option<String>,
    /// Only list buckets whose names start with this prefix.
    pub prefix: Option<String>,
    pub projection: Option<Projection>,
    pub user_project: Option<String>,
}

impl ListBucketsOptions {
    /// Sets the value of [max_results][ListBucketsOptions::max_results].
    pub fn with_max_results(mut self, v: u32) -> Self {
        self.max_results = Some(v);
        self
    }

    /// Sets the value of [page_token][ListBucketsOptions::page_token].
    pub fn with_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = Some(v.into());
        self
    }

    /// Sets the value of [prefix][ListBucketsOptions::prefix].
    pub fn with_prefix<T: Into<String>>(mut self, v: T) -> Self {
        self.prefix = Some(v.into());
        self
    }

    /// Sets the value of [projection][ListBucketsOptions::projection].
    pub fn with_projection<T: Into<Projection>>(mut self, v: T) -> Self {
        self.projection = Some(v.into());
        self
    }

    /// Sets the value of [user_project][ListBucketsOptions::user_project].
    pub fn with_user_project<T: Into<String>>(mut self, v: T) -> Self {
        self.user_project = Some(v.into());
        self
    }

    pub(crate) fn query_parameters(&self) -> Vec<QueryParameter> {
        [
            param("maxResults", &self.max_results),
            param("pageToken", &self.page_token),
            param("prefix", &self.prefix),
            param("projection", &self.projection),
            param("userProject", &self.user_project),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

fn param<T: std::fmt::Display>(name: &'static str, value: &Option<T>) -> Option<QueryParameter> {
    value.as_ref().map(|v| (name, v.to_string()))
}

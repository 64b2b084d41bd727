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

//! The resources, requests and responses used by the bucket client.
//!
//! [Bucket] is the server-owned representation returned by every operation.
//! [BucketTemplate] is the write-only subset of fields sent when creating or
//! modifying a bucket.

use crate::options::{
    DeleteBucketOptions, GetBucketOptions, InsertBucketOptions, ListBucketsOptions,
    UpdateBucketOptions,
};
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, PickFirst};
use std::collections::BTreeMap;

mod template;
pub use template::{BucketTemplate, BucketTemplateBuilder};

/// Defines an enum mapped to the strings used by the JSON API.
///
/// Values unknown to this version of the library are preserved in the
/// `Unknown` variant.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
        #[serde(from = "String", into = "String")]
        #[non_exhaustive]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// A value not known to this version of the library.
            Unknown(String),
        }

        impl $name {
            /// Gets the value as used in the JSON API.
            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $wire, )+
                    Self::Unknown(v) => v.as_str(),
                }
            }
        }

        impl std::convert::From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $( $wire => Self::$variant, )+
                    _ => Self::Unknown(value.to_string()),
                }
            }
        }

        impl std::convert::From<String> for $name {
            fn from(value: String) -> Self {
                Self::from(value.as_str())
            }
        }

        impl std::convert::From<$name> for String {
            fn from(value: $name) -> Self {
                value.as_str().to_string()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

wire_enum! {
    /// The set of properties returned in a response.
    Projection {
        /// Omit the `acl` and `defaultObjectAcl` properties.
        NoAcl => "noAcl",
        /// Include all properties.
        Full => "full",
    }
}

wire_enum! {
    /// The default storage class for objects in a bucket.
    StorageClass {
        Standard => "STANDARD",
        Nearline => "NEARLINE",
        Coldline => "COLDLINE",
        Archive => "ARCHIVE",
        MultiRegional => "MULTI_REGIONAL",
        Regional => "REGIONAL",
        DurableReducedAvailability => "DURABLE_REDUCED_AVAILABILITY",
    }
}

wire_enum! {
    /// A role granted to an entity on a bucket.
    BucketRole {
        Owner => "OWNER",
        Reader => "READER",
        Writer => "WRITER",
    }
}

wire_enum! {
    /// A role granted to an entity on an object.
    ObjectRole {
        Owner => "OWNER",
        Reader => "READER",
    }
}

wire_enum! {
    /// A canned access control list applied to a bucket.
    PredefinedBucketAcl {
        AuthenticatedRead => "authenticatedRead",
        Private => "private",
        ProjectPrivate => "projectPrivate",
        PublicRead => "publicRead",
        PublicReadWrite => "publicReadWrite",
    }
}

wire_enum! {
    /// A canned access control list applied to new objects in a bucket.
    PredefinedObjectAcl {
        AuthenticatedRead => "authenticatedRead",
        BucketOwnerFullControl => "bucketOwnerFullControl",
        BucketOwnerRead => "bucketOwnerRead",
        Private => "private",
        ProjectPrivate => "projectPrivate",
        PublicRead => "publicRead",
    }
}

/// A bucket, as returned by the service.
///
/// The client library never caches these values. Every operation returns a
/// fresh snapshot of the server state.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Bucket {
    /// Always `storage#bucket`.
    pub kind: String,
    pub id: String,
    pub self_link: String,
    pub name: String,
    /// The project number of the project owning the bucket.
    #[serde_as(as = "PickFirst<(DisplayFromStr, _)>")]
    pub project_number: u64,
    /// Incremented each time the bucket metadata changes.
    #[serde_as(as = "PickFirst<(DisplayFromStr, _)>")]
    pub metageneration: i64,
    pub location: String,
    pub location_type: String,
    pub storage_class: Option<StorageClass>,
    pub etag: String,
    pub time_created: Option<chrono::DateTime<chrono::Utc>>,
    pub updated: Option<chrono::DateTime<chrono::Utc>>,
    pub versioning: Option<Versioning>,
    pub logging: Option<Logging>,
    pub website: Option<Website>,
    pub lifecycle: Option<Lifecycle>,
    pub owner: Option<Owner>,
    pub labels: BTreeMap<String, String>,
    pub cors: Vec<Cors>,
    /// Only present when the request uses [Projection::Full].
    pub acl: Vec<BucketAccessControl>,
    /// Only present when the request uses [Projection::Full].
    pub default_object_acl: Vec<ObjectAccessControl>,
}

impl Bucket {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][Bucket::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [metageneration][Bucket::metageneration].
    pub fn set_metageneration<T: Into<i64>>(mut self, v: T) -> Self {
        self.metageneration = v.into();
        self
    }

    /// Sets the value of [location][Bucket::location].
    pub fn set_location<T: Into<String>>(mut self, v: T) -> Self {
        self.location = v.into();
        self
    }

    /// Sets the value of [storage_class][Bucket::storage_class].
    pub fn set_storage_class<T: Into<StorageClass>>(mut self, v: T) -> Self {
        self.storage_class = Some(v.into());
        self
    }

    /// Sets the value of [versioning][Bucket::versioning].
    pub fn set_versioning<T: Into<Versioning>>(mut self, v: T) -> Self {
        self.versioning = Some(v.into());
        self
    }

    /// Sets the value of [logging][Bucket::logging].
    pub fn set_logging<T: Into<Logging>>(mut self, v: T) -> Self {
        self.logging = Some(v.into());
        self
    }

    /// Returns true if object versioning is enabled.
    pub fn versioning_enabled(&self) -> bool {
        self.versioning.as_ref().is_some_and(|v| v.enabled)
    }
}

/// The bucket's versioning configuration.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Versioning {
    pub enabled: bool,
}

impl Versioning {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl std::convert::From<bool> for Versioning {
    fn from(enabled: bool) -> Self {
        Self::new(enabled)
    }
}

/// The bucket's access log configuration.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Logging {
    /// The destination bucket for the access logs.
    pub log_bucket: String,
    /// A prefix for the log object names.
    ///
    /// Empty values are not sent, so a patch keeps the current prefix.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub log_object_prefix: String,
}

impl Logging {
    pub fn new<T: Into<String>>(log_bucket: T) -> Self {
        Self {
            log_bucket: log_bucket.into(),
            log_object_prefix: String::new(),
        }
    }

    /// Sets the value of [log_object_prefix][Logging::log_object_prefix].
    pub fn set_log_object_prefix<T: Into<String>>(mut self, v: T) -> Self {
        self.log_object_prefix = v.into();
        self
    }
}

/// The bucket's website configuration.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Website {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub main_page_suffix: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub not_found_page: String,
}

impl Website {
    pub fn new<M: Into<String>, N: Into<String>>(main_page_suffix: M, not_found_page: N) -> Self {
        Self {
            main_page_suffix: main_page_suffix.into(),
            not_found_page: not_found_page.into(),
        }
    }
}

/// The bucket's lifecycle configuration.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Lifecycle {
    pub rule: Vec<LifecycleRule>,
}

/// A lifecycle management rule: an action and the condition that triggers it.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LifecycleRule {
    pub action: LifecycleAction,
    pub condition: LifecycleCondition,
}

impl LifecycleRule {
    pub fn new(action: LifecycleAction, condition: LifecycleCondition) -> Self {
        Self { action, condition }
    }
}

/// The action taken by a lifecycle rule.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LifecycleAction {
    /// Either `Delete` or `SetStorageClass`.
    #[serde(rename = "type")]
    pub r#type: String,
    /// The target storage class, only used with `SetStorageClass`.
    pub storage_class: Option<StorageClass>,
}

impl LifecycleAction {
    /// Deletes the matching objects.
    pub fn delete() -> Self {
        Self {
            r#type: "Delete".to_string(),
            storage_class: None,
        }
    }

    /// Changes the storage class of the matching objects.
    pub fn set_storage_class<T: Into<StorageClass>>(v: T) -> Self {
        Self {
            r#type: "SetStorageClass".to_string(),
            storage_class: Some(v.into()),
        }
    }
}

/// The condition for a lifecycle rule. All the fields that are set must match.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LifecycleCondition {
    /// Age of the object in days.
    pub age: Option<i32>,
    /// A date in `YYYY-MM-DD` format.
    pub created_before: Option<String>,
    pub is_live: Option<bool>,
    pub num_newer_versions: Option<i32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub matches_storage_class: Vec<StorageClass>,
}

impl LifecycleCondition {
    /// Sets the value of [age][LifecycleCondition::age].
    pub fn set_age(mut self, v: i32) -> Self {
        self.age = Some(v);
        self
    }

    /// Sets the value of [is_live][LifecycleCondition::is_live].
    pub fn set_is_live(mut self, v: bool) -> Self {
        self.is_live = Some(v);
        self
    }

    /// Sets the value of [num_newer_versions][LifecycleCondition::num_newer_versions].
    pub fn set_num_newer_versions(mut self, v: i32) -> Self {
        self.num_newer_versions = Some(v);
        self
    }
}

/// The owner of a bucket.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Owner {
    pub entity: String,
    pub entity_id: String,
}

/// A Cross-Origin Resource Sharing rule.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Cors {
    /// The origins allowed, `*` means any origin.
    pub origin: Vec<String>,
    /// The HTTP methods allowed, `*` means any method.
    pub method: Vec<String>,
    /// The response headers the browser may expose.
    pub response_header: Vec<String>,
    /// How long the browser may cache the preflight response.
    pub max_age_seconds: Option<i32>,
}

impl Cors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [origin][Cors::origin].
    pub fn set_origin<I, V>(mut self, v: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.origin = v.into_iter().map(|v| v.into()).collect();
        self
    }

    /// Sets the value of [method][Cors::method].
    pub fn set_method<I, V>(mut self, v: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.method = v.into_iter().map(|v| v.into()).collect();
        self
    }

    /// Sets the value of [response_header][Cors::response_header].
    pub fn set_response_header<I, V>(mut self, v: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.response_header = v.into_iter().map(|v| v.into()).collect();
        self
    }

    /// Sets the value of [max_age_seconds][Cors::max_age_seconds].
    pub fn set_max_age_seconds(mut self, v: i32) -> Self {
        self.max_age_seconds = Some(v);
        self
    }
}

/// The project team associated with an entity, if any.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ProjectTeam {
    pub project_number: String,
    /// One of `owners`, `editors` or `viewers`.
    pub team: String,
}

/// An access control entry on a bucket.
///
/// The `entity` has the forms `user-{email}`, `group-{email}`,
/// `domain-{domain}`, `project-{team}-{projectId}`, `allUsers` or
/// `allAuthenticatedUsers`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct BucketAccessControl {
    pub entity: String,
    pub role: BucketRole,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub bucket: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub entity_id: Option<String>,
    #[serde(default)]
    pub etag: Option<String>,
    #[serde(default)]
    pub project_team: Option<ProjectTeam>,
}

impl BucketAccessControl {
    /// Creates an entry granting `role` to `entity`.
    pub fn new<E: Into<String>, R: Into<BucketRole>>(entity: E, role: R) -> Self {
        Self {
            entity: entity.into(),
            role: role.into(),
            kind: None,
            id: None,
            bucket: None,
            email: None,
            domain: None,
            entity_id: None,
            etag: None,
            project_team: None,
        }
    }
}

/// A default access control entry applied to new objects in a bucket.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct ObjectAccessControl {
    pub entity: String,
    pub role: ObjectRole,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub bucket: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub entity_id: Option<String>,
    #[serde(default)]
    pub etag: Option<String>,
    #[serde(default)]
    pub project_team: Option<ProjectTeam>,
}

impl ObjectAccessControl {
    /// Creates an entry granting `role` to `entity`.
    pub fn new<E: Into<String>, R: Into<ObjectRole>>(entity: E, role: R) -> Self {
        Self {
            entity: entity.into(),
            role: role.into(),
            kind: None,
            id: None,
            bucket: None,
            email: None,
            domain: None,
            entity_id: None,
            etag: None,
            project_team: None,
        }
    }
}

/// One page of results from a list operation.
///
/// # Example
/// ```
/// # use google_cloud_storage_buckets::client::Buckets;
/// # async fn sample(client: &Buckets) -> anyhow::Result<()> {
/// let page = client.list_buckets("my-project").send().await?;
/// for bucket in &page {
///     println!("{}", bucket.name);
/// }
/// # Ok(()) }
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListPage<T> {
    /// The items in this page, in the order returned by the service.
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    /// The token to fetch the next page, `None` on the last page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

impl<T> ListPage<T> {
    pub fn new<I: IntoIterator<Item = T>>(items: I) -> Self {
        Self {
            items: items.into_iter().collect(),
            next_page_token: None,
        }
    }

    /// Sets the value of [next_page_token][ListPage::next_page_token].
    pub fn set_next_page_token<V: Into<String>>(mut self, v: V) -> Self {
        self.next_page_token = Some(v.into()).filter(|t: &String| !t.is_empty());
        self
    }

    /// Returns true if there are more pages to fetch.
    pub fn has_next_page(&self) -> bool {
        self.next_page_token.is_some()
    }
}

impl<T> std::default::Default for ListPage<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_page_token: None,
        }
    }
}

impl<T> IntoIterator for ListPage<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ListPage<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Send> crate::paginator::PageableResponse for ListPage<T> {
    type PageItem = T;

    fn items(self) -> Vec<T> {
        self.items
    }

    fn next_page_token(&self) -> String {
        self.next_page_token.clone().unwrap_or_default()
    }
}

/// The result of [insert_bucket][crate::client::Buckets::insert_bucket].
///
/// Bucket names are globally unique. Attempting to create a bucket that
/// already exists is not an error, the application receives
/// [AlreadyExists][InsertBucketOutcome::AlreadyExists] instead.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum InsertBucketOutcome {
    /// The bucket was created.
    Created(Bucket),
    /// A bucket with the same name already exists. It was not modified.
    AlreadyExists,
}

impl InsertBucketOutcome {
    /// The newly created bucket, if any.
    pub fn bucket(&self) -> Option<&Bucket> {
        match self {
            Self::Created(b) => Some(b),
            _ => None,
        }
    }

    /// Converts into the newly created bucket, if any.
    pub fn into_bucket(self) -> Option<Bucket> {
        match self {
            Self::Created(b) => Some(b),
            _ => None,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }

    pub fn is_already_exists(&self) -> bool {
        matches!(self, Self::AlreadyExists)
    }
}

/// The request message for [insert_bucket][crate::stub::Buckets::insert_bucket].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct InsertBucketRequest {
    /// The project that owns the new bucket.
    pub project: String,
    pub template: BucketTemplate,
    pub options: InsertBucketOptions,
}

/// The request message for [get_bucket][crate::stub::Buckets::get_bucket].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetBucketRequest {
    pub bucket: String,
    pub options: GetBucketOptions,
}

/// The request message for [update_bucket][crate::stub::Buckets::update_bucket]
/// and [patch_bucket][crate::stub::Buckets::patch_bucket].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UpdateBucketRequest {
    pub bucket: String,
    pub template: BucketTemplate,
    pub options: UpdateBucketOptions,
}

/// The request message for [delete_bucket][crate::stub::Buckets::delete_bucket].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteBucketRequest {
    pub bucket: String,
    pub options: DeleteBucketOptions,
}

/// The request message for [list_buckets][crate::stub::Buckets::list_buckets].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListBucketsRequest {
    pub project: String,
    pub options: ListBucketsOptions,
}

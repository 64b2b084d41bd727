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

use super::{
    BucketAccessControl, Cors, Lifecycle, LifecycleRule, Logging, ObjectAccessControl,
    StorageClass, Versioning, Website,
};
use serde::Serialize;
use std::collections::BTreeMap;

/// The settable fields of a bucket.
///
/// Templates are the request body for
/// [insert_bucket][crate::client::Buckets::insert_bucket],
/// [update_bucket][crate::client::Buckets::update_bucket] and
/// [patch_bucket][crate::client::Buckets::patch_bucket]. Fields that are not
/// set are omitted from the request. With `patch_bucket` omitted fields keep
/// their current value. With `update_bucket` omitted fields are reset to the
/// service defaults.
///
/// Templates are immutable, use [BucketTemplate::builder()] to create them.
///
/// # Example
/// ```
/// # use google_cloud_storage_buckets::model::{BucketTemplate, StorageClass};
/// let template = BucketTemplate::builder()
///     .with_name("my-bucket")
///     .with_location("US")
///     .with_storage_class(StorageClass::Nearline)
///     .with_versioning(true)
///     .build();
/// assert_eq!(template.name(), Some("my-bucket"));
/// ```
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketTemplate {
    name: Option<String>,
    location: Option<String>,
    storage_class: Option<StorageClass>,
    versioning: Option<Versioning>,
    logging: Option<Logging>,
    website: Option<Website>,
    lifecycle: Option<Lifecycle>,
    labels: Option<BTreeMap<String, String>>,
    cors: Option<Vec<Cors>>,
    acl: Option<Vec<BucketAccessControl>>,
    default_object_acl: Option<Vec<ObjectAccessControl>>,
}

impl BucketTemplate {
    /// Returns a builder for [BucketTemplate].
    pub fn builder() -> BucketTemplateBuilder {
        BucketTemplateBuilder::new()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn storage_class(&self) -> Option<&StorageClass> {
        self.storage_class.as_ref()
    }

    pub fn versioning(&self) -> Option<&Versioning> {
        self.versioning.as_ref()
    }

    pub fn logging(&self) -> Option<&Logging> {
        self.logging.as_ref()
    }

    pub fn website(&self) -> Option<&Website> {
        self.website.as_ref()
    }

    pub fn lifecycle(&self) -> Option<&Lifecycle> {
        self.lifecycle.as_ref()
    }

    pub fn labels(&self) -> Option<&BTreeMap<String, String>> {
        self.labels.as_ref()
    }

    pub fn cors(&self) -> Option<&[Cors]> {
        self.cors.as_deref()
    }

    pub fn acl(&self) -> Option<&[BucketAccessControl]> {
        self.acl.as_deref()
    }

    pub fn default_object_acl(&self) -> Option<&[ObjectAccessControl]> {
        self.default_object_acl.as_deref()
    }
}

/// A builder for [BucketTemplate].
///
/// Scalar setters overwrite any previous value. The `add_*` functions append
/// to the corresponding list, preserving the insertion order.
///
/// # Example
/// ```
/// # use google_cloud_storage_buckets::model::*;
/// let template = BucketTemplate::builder()
///     .with_name("my-bucket")
///     .add_acl(BucketAccessControl::new("allUsers", BucketRole::Reader))
///     .add_cors(
///         Cors::new()
///             .set_origin(["https://example.com"])
///             .set_method(["GET"]),
///     )
///     .add_label("env", "test")
///     .build();
/// assert_eq!(template.acl().map(|v| v.len()), Some(1));
/// ```
#[derive(Debug, Default)]
pub struct BucketTemplateBuilder {
    template: BucketTemplate,
}

impl BucketTemplateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the template.
    pub fn build(self) -> BucketTemplate {
        self.template
    }

    /// Sets the bucket name.
    ///
    /// Required when creating a bucket, and ignored by the other operations
    /// as the name is part of the request path.
    pub fn with_name<T: Into<String>>(mut self, v: T) -> Self {
        self.template.name = Some(v.into());
        self
    }

    /// Sets the bucket location, for example `US`, `EU` or `US-CENTRAL1`.
    pub fn with_location<T: Into<String>>(mut self, v: T) -> Self {
        self.template.location = Some(v.into());
        self
    }

    /// Sets the default storage class for new objects.
    pub fn with_storage_class<T: Into<StorageClass>>(mut self, v: T) -> Self {
        self.template.storage_class = Some(v.into());
        self
    }

    /// Enables or disables object versioning.
    pub fn with_versioning<T: Into<Versioning>>(mut self, v: T) -> Self {
        self.template.versioning = Some(v.into());
        self
    }

    /// Sets the access log configuration.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_storage_buckets::model::{BucketTemplate, Logging};
    /// let template = BucketTemplate::builder()
    ///     .with_logging(Logging::new("my-log-bucket").set_log_object_prefix("my-bucket"))
    ///     .build();
    /// ```
    pub fn with_logging<T: Into<Logging>>(mut self, v: T) -> Self {
        self.template.logging = Some(v.into());
        self
    }

    /// Sets the static website configuration.
    pub fn with_website<T: Into<Website>>(mut self, v: T) -> Self {
        self.template.website = Some(v.into());
        self
    }

    /// Appends an access control entry.
    pub fn add_acl(mut self, v: BucketAccessControl) -> Self {
        self.template.acl.get_or_insert_with(Vec::new).push(v);
        self
    }

    /// Appends a default access control entry for new objects.
    pub fn add_default_object_acl(mut self, v: ObjectAccessControl) -> Self {
        self.template
            .default_object_acl
            .get_or_insert_with(Vec::new)
            .push(v);
        self
    }

    /// Appends a CORS rule.
    pub fn add_cors(mut self, v: Cors) -> Self {
        self.template.cors.get_or_insert_with(Vec::new).push(v);
        self
    }

    /// Appends a lifecycle rule.
    pub fn add_lifecycle_rule(mut self, v: LifecycleRule) -> Self {
        self.template
            .lifecycle
            .get_or_insert_with(Lifecycle::default)
            .rule
            .push(v);
        self
    }

    /// Inserts a label, replacing any previous value for the same key.
    pub fn add_label<K: Into<String>, V: Into<String>>(mut self, k: K, v: V) -> Self {
        self.template
            .labels
            .get_or_insert_with(BTreeMap::new)
            .insert(k.into(), v.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::super::{BucketRole, LifecycleAction, LifecycleCondition, ObjectRole};
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn empty() -> anyhow::Result<()> {
        let template = BucketTemplate::builder().build();
        assert_eq!(template, BucketTemplate::default());
        assert_eq!(serde_json::to_value(&template)?, json!({}));
        Ok(())
    }

    #[test]
    fn unset_fields_are_omitted() -> anyhow::Result<()> {
        let template = BucketTemplate::builder()
            .with_logging(Logging::new("log-bucket"))
            .build();
        let got = serde_json::to_value(&template)?;
        assert_eq!(got, json!({"logging": {"logBucket": "log-bucket"}}));
        Ok(())
    }

    #[test]
    fn empty_website_fields_are_omitted() -> anyhow::Result<()> {
        let template = BucketTemplate::builder()
            .with_website(Website::new("index.html", ""))
            .build();
        let got = serde_json::to_value(&template)?;
        assert_eq!(got, json!({"website": {"mainPageSuffix": "index.html"}}));
        Ok(())
    }

    #[test]
    fn last_write_wins() {
        let template = BucketTemplate::builder()
            .with_location("US")
            .with_location("EU")
            .with_storage_class(StorageClass::Standard)
            .with_storage_class(StorageClass::Nearline)
            .with_versioning(true)
            .with_versioning(false)
            .build();
        assert_eq!(template.location(), Some("EU"));
        assert_eq!(template.storage_class(), Some(&StorageClass::Nearline));
        assert_eq!(template.versioning(), Some(&Versioning::new(false)));
    }

    #[test]
    fn lists_preserve_order() {
        let template = BucketTemplate::builder()
            .add_acl(BucketAccessControl::new("allUsers", BucketRole::Owner))
            .add_acl(BucketAccessControl::new("group-a@example.com", BucketRole::Reader))
            .add_default_object_acl(ObjectAccessControl::new("allUsers", ObjectRole::Reader))
            .add_cors(Cors::new().set_origin(["a"]))
            .add_cors(Cors::new().set_origin(["b"]))
            .build();
        let entities = template
            .acl()
            .unwrap_or_default()
            .iter()
            .map(|a| a.entity.as_str())
            .collect::<Vec<_>>();
        assert_eq!(entities, vec!["allUsers", "group-a@example.com"]);
        let origins = template
            .cors()
            .unwrap_or_default()
            .iter()
            .flat_map(|c| c.origin.iter().map(String::as_str))
            .collect::<Vec<_>>();
        assert_eq!(origins, vec!["a", "b"]);
        assert_eq!(template.default_object_acl().map(|v| v.len()), Some(1));
    }

    #[test]
    fn labels_and_lifecycle() {
        let template = BucketTemplate::builder()
            .add_label("b", "2")
            .add_label("a", "1")
            .add_label("b", "3")
            .add_lifecycle_rule(LifecycleRule::new(
                LifecycleAction::delete(),
                LifecycleCondition::default().set_age(365),
            ))
            .build();
        let labels = template
            .labels()
            .map(|m| m.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect::<Vec<_>>());
        assert_eq!(labels, Some(vec![("a", "1"), ("b", "3")]));
        assert_eq!(template.lifecycle().map(|l| l.rule.len()), Some(1));
    }

    #[test]
    fn full_template_to_json() -> anyhow::Result<()> {
        let template = BucketTemplate::builder()
            .with_name("my-bucket")
            .with_location("US")
            .with_storage_class(StorageClass::DurableReducedAvailability)
            .with_versioning(true)
            .with_logging(Logging::new("my-logs").set_log_object_prefix("my-bucket"))
            .with_website(Website::new("index.html", "404.html"))
            .add_acl(BucketAccessControl::new("allUsers", BucketRole::Owner))
            .add_default_object_acl(ObjectAccessControl::new("allUsers", ObjectRole::Owner))
            .add_cors(
                Cors::new()
                    .set_origin(["http://example.appspot.com"])
                    .set_method(["GET", "HEAD"])
                    .set_response_header(["x-meta-goog-custom"])
                    .set_max_age_seconds(10),
            )
            .build();
        let got = serde_json::to_value(&template)?;
        let want = json!({
            "name": "my-bucket",
            "location": "US",
            "storageClass": "DURABLE_REDUCED_AVAILABILITY",
            "versioning": {"enabled": true},
            "logging": {"logBucket": "my-logs", "logObjectPrefix": "my-bucket"},
            "website": {"mainPageSuffix": "index.html", "notFoundPage": "404.html"},
            "acl": [{"entity": "allUsers", "role": "OWNER"}],
            "defaultObjectAcl": [{"entity": "allUsers", "role": "OWNER"}],
            "cors": [{
                "origin": ["http://example.appspot.com"],
                "method": ["GET", "HEAD"],
                "responseHeader": ["x-meta-goog-custom"],
                "maxAgeSeconds": 10
            }]
        });
        assert_eq!(got, want);
        Ok(())
    }
}

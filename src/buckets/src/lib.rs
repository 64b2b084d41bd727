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

//! Google Cloud Client Libraries for Rust - Storage Buckets
//!
//! This crate contains traits, types, and functions to manage buckets in
//! [Google Cloud Storage] using the JSON API. Most applications will use
//! [Buckets][client::Buckets] to create, inspect, modify, list, and delete
//! buckets.
//!
//! ```
//! # use google_cloud_storage_buckets::client::Buckets;
//! # async fn sample() -> anyhow::Result<()> {
//! use google_cloud_storage_buckets::model::BucketTemplate;
//! let client = Buckets::builder().build().await?;
//! let template = BucketTemplate::builder()
//!     .with_name("my-bucket")
//!     .with_location("US")
//!     .build();
//! let outcome = client.insert_bucket("my-project", template).send().await?;
//! println!("outcome={outcome:?}");
//! # Ok(()) }
//! ```
//!
//! **WARNING:** this crate is under active development. We expect multiple
//! breaking changes in the upcoming releases. Testing is also incomplete, we do
//! **not** recommend that you use this crate in production. We welcome feedback
//! about the APIs, documentation, missing features, bugs, etc.
//!
//! [Google Cloud Storage]: https://cloud.google.com/storage

pub use error::Error;
pub use error::Result;

/// Request builders.
pub mod builder {
    pub mod buckets;
    pub use crate::client::ClientBuilder;
}
pub mod client;
pub mod error;
pub mod model;
pub mod options;
pub mod paginator;
pub mod request_options;
pub mod stub;

mod transport;

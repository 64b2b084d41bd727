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

// [START storage_enable_bucket_logging]
use google_cloud_storage_buckets::client::Buckets;
use google_cloud_storage_buckets::model::{BucketTemplate, Logging};

pub async fn sample(client: &Buckets, bucket_id: &str, log_bucket: &str) -> anyhow::Result<()> {
    let template = BucketTemplate::builder()
        .with_logging(Logging::new(log_bucket).set_log_object_prefix(bucket_id))
        .build();
    let bucket = client.patch_bucket(bucket_id, template).send().await?;
    println!(
        "logging for bucket {bucket_id} is now {:?}, versioning is still {}",
        bucket.logging,
        bucket.versioning_enabled()
    );
    Ok(())
}
// [END storage_enable_bucket_logging]

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

// [START storage_create_bucket]
use google_cloud_storage_buckets::client::Buckets;
use google_cloud_storage_buckets::model::{BucketTemplate, InsertBucketOutcome};

pub async fn sample(client: &Buckets, project_id: &str, bucket_id: &str) -> anyhow::Result<()> {
    let template = BucketTemplate::builder()
        .with_name(bucket_id)
        .with_versioning(true)
        .build();
    match client.insert_bucket(project_id, template).send().await? {
        InsertBucketOutcome::Created(bucket) => {
            println!("successfully created bucket {bucket:?}")
        }
        _ => println!("bucket {bucket_id} already exists"),
    }
    Ok(())
}
// [END storage_create_bucket]

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

// [START storage_print_bucket_acl]
use google_cloud_storage_buckets::client::Buckets;
use google_cloud_storage_buckets::model::Projection;

pub async fn sample(client: &Buckets, bucket_id: &str) -> anyhow::Result<()> {
    let bucket = client
        .get_bucket(bucket_id)
        .with_projection(Projection::Full)
        .send()
        .await?;
    println!("ACL for bucket {bucket_id}:");
    for entry in &bucket.acl {
        println!("{}: {}", entry.role, entry.entity);
    }
    Ok(())
}
// [END storage_print_bucket_acl]

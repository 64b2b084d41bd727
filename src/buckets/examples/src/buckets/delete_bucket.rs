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

// [START storage_delete_bucket]
use google_cloud_storage_buckets::client::Buckets;

pub async fn sample(client: &Buckets, bucket_id: &str) -> anyhow::Result<()> {
    let deleted = client.delete_bucket(bucket_id).send().await?;
    println!("bucket {bucket_id} deleted={deleted}");
    Ok(())
}
// [END storage_delete_bucket]

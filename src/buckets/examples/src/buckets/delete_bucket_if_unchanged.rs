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

// [START storage_delete_bucket_if_unchanged]
use google_cloud_storage_buckets::client::Buckets;
use google_cloud_storage_buckets::options::DeleteBucketOptions;

pub async fn sample(client: &Buckets, bucket_id: &str) -> anyhow::Result<()> {
    let bucket = client.get_bucket(bucket_id).send().await?;
    let options = DeleteBucketOptions::default()
        .with_if_metageneration_match(bucket.metageneration);
    match client.delete_bucket(bucket_id).with_options(options).send().await {
        Ok(_) => println!("bucket {bucket_id} deleted"),
        Err(e) if e.is_precondition_failed() => {
            println!("bucket {bucket_id} changed since it was read, not deleted")
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
// [END storage_delete_bucket_if_unchanged]

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

// [START storage_cors_configuration]
use google_cloud_storage_buckets::client::Buckets;
use google_cloud_storage_buckets::model::{BucketTemplate, Cors};

pub async fn sample(client: &Buckets, bucket_id: &str) -> anyhow::Result<()> {
    let template = BucketTemplate::builder()
        .add_cors(
            Cors::new()
                .set_origin(["http://example.appspot.com"])
                .set_method(["GET", "HEAD", "DELETE"])
                .set_response_header(["Content-Type"])
                .set_max_age_seconds(3600),
        )
        .build();
    let bucket = client.patch_bucket(bucket_id, template).send().await?;
    println!("set CORS policies for bucket {bucket_id}: {:?}", bucket.cors);
    Ok(())
}
// [END storage_cors_configuration]

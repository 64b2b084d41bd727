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

// [START storage_add_bucket_owner]
use google_cloud_storage_buckets::client::Buckets;
use google_cloud_storage_buckets::model::{
    BucketAccessControl, BucketRole, BucketTemplate, Projection,
};

pub async fn sample(client: &Buckets, bucket_id: &str, user: &str) -> anyhow::Result<()> {
    let bucket = client
        .get_bucket(bucket_id)
        .with_projection(Projection::Full)
        .send()
        .await?;
    // Updates replace the full ACL, start from the existing entries.
    let template = bucket
        .acl
        .iter()
        .filter(|entry| entry.entity != format!("user-{user}"))
        .fold(BucketTemplate::builder(), |builder, entry| {
            builder.add_acl(BucketAccessControl::new(&entry.entity, entry.role.clone()))
        })
        .add_acl(BucketAccessControl::new(
            format!("user-{user}"),
            BucketRole::Owner,
        ))
        .build();
    let bucket = client
        .update_bucket(bucket_id, template)
        .with_if_metageneration_match(bucket.metageneration)
        .with_projection(Projection::Full)
        .send()
        .await?;
    println!("added user {user} as an owner of bucket {bucket_id}");
    println!("{:?}", bucket.acl);
    Ok(())
}
// [END storage_add_bucket_owner]

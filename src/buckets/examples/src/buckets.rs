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

pub mod add_bucket_owner;
pub mod cors_configuration;
pub mod create_bucket;
pub mod create_bucket_class_location;
pub mod delete_bucket;
pub mod delete_bucket_if_unchanged;
pub mod enable_logging;
pub mod get_bucket_if_changed;
pub mod get_bucket_metadata;
pub mod list_buckets;
pub mod print_bucket_acl;

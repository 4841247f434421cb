/*
 * Copyright 2020 Google LLC
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! Envoy xDS v2 discovery against Pilot.
//!
//! Every operation on [`XdsClient`] is a single poll: it opens a fresh
//! connection and aggregated discovery stream, sends one `DiscoveryRequest`,
//! waits for one `DiscoveryResponse` and closes the connection again. The
//! version and nonce of the last successful response of each
//! [`ResourceKind`] are echoed back on the next request of that kind.

pub use crate::generated::envoy::{api::v2 as api, service::discovery::v2 as discovery};

pub mod cache;
pub mod channel;
pub mod client;
pub mod cluster_name;
pub mod error;
pub(crate) mod metrics;
pub mod node;
pub mod resource;

pub use self::{
    cache::{DiscoveryCache, SyncState},
    channel::{AdsStream, Connection, Credentials, DiscoveryChannel, DiscoveryTransport},
    client::{
        endpoint_addresses, route_clusters, PilotClient, XdsClient, HTTP_PROXY_RESOURCE,
    },
    cluster_name::ClusterKey,
    error::{Error, TransportError},
    node::NodeIdentity,
    resource::{
        decode_all, Cardinality, DecodeCause, DecodeError, Decoded, DiscoveryResource,
        ResourceKind, UnknownResourceType,
    },
};

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

//! A poll-based Envoy xDS v2 client for reading service mesh configuration
//! (clusters, endpoints, listeners and routes) from an Istio Pilot control
//! plane.

#![deny(unused_must_use)]

pub mod config;
pub mod generated;
pub mod metrics;
pub mod panel;
pub mod xds;


pub type Result<T, E = eyre::Error> = std::result::Result<T, E>;

#[doc(inline)]
pub use self::{
    config::Config,
    panel::{ControlPanel, PilotPanel},
    xds::{ClusterKey, Error, NodeIdentity, PilotClient, ResourceKind, XdsClient},
};

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

use prost::Message;
use prost_types::Any;

use crate::xds::api::{Cluster, ClusterLoadAssignment, Listener, RouteConfiguration};

macro_rules! type_urls {
     ($($base_url:literal : {$($const_name:ident = $type_url:literal),+ $(,)?})+) => {
         $(
             $(
                 pub const $const_name : &str = concat!($base_url, "/", $type_url);
             )+
         )+
     }
 }

type_urls! {
    "type.googleapis.com": {
        CLUSTER_TYPE = "envoy.api.v2.Cluster",
        ENDPOINT_TYPE = "envoy.api.v2.ClusterLoadAssignment",
        LISTENER_TYPE = "envoy.api.v2.Listener",
        ROUTE_TYPE = "envoy.api.v2.RouteConfiguration",
    }
}

/// The four xDS resource types requested from Pilot.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, enum_map::Enum)]
pub enum ResourceKind {
    Cluster,
    Endpoint,
    Listener,
    Route,
}

impl ResourceKind {
    pub const VARIANTS: [Self; 4] = [Self::Cluster, Self::Endpoint, Self::Listener, Self::Route];

    /// Returns the corresponding type URL for the resource kind.
    pub const fn type_url(&self) -> &'static str {
        match self {
            Self::Cluster => CLUSTER_TYPE,
            Self::Endpoint => ENDPOINT_TYPE,
            Self::Listener => LISTENER_TYPE,
            Self::Route => ROUTE_TYPE,
        }
    }

    /// Short name of the discovery service, used in logs and metric labels.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Cluster => "cds",
            Self::Endpoint => "eds",
            Self::Listener => "lds",
            Self::Route => "rds",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<&'_ str> for ResourceKind {
    type Error = UnknownResourceType;

    fn try_from(url: &str) -> Result<Self, UnknownResourceType> {
        Ok(match url {
            CLUSTER_TYPE => Self::Cluster,
            ENDPOINT_TYPE => Self::Endpoint,
            LISTENER_TYPE => Self::Listener,
            ROUTE_TYPE => Self::Route,
            unknown => return Err(UnknownResourceType(unknown.to_owned())),
        })
    }
}

impl TryFrom<String> for ResourceKind {
    type Error = UnknownResourceType;

    fn try_from(url: String) -> Result<Self, UnknownResourceType> {
        Self::try_from(&*url)
    }
}

/// Error indicating an unknown resource type was found.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Unknown resource type: {0}")]
pub struct UnknownResourceType(pub String);

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Cluster {}
    impl Sealed for super::ClusterLoadAssignment {}
    impl Sealed for super::Listener {}
    impl Sealed for super::RouteConfiguration {}
}

/// A protobuf message that Pilot serves for exactly one [`ResourceKind`].
pub trait DiscoveryResource: Message + Default + sealed::Sealed + Send + 'static {
    const KIND: ResourceKind;

    /// The name the control plane addresses this resource by.
    fn name(&self) -> &str;
}

impl DiscoveryResource for Cluster {
    const KIND: ResourceKind = ResourceKind::Cluster;

    fn name(&self) -> &str {
        &self.name
    }
}

impl DiscoveryResource for ClusterLoadAssignment {
    const KIND: ResourceKind = ResourceKind::Endpoint;

    fn name(&self) -> &str {
        &self.cluster_name
    }
}

impl DiscoveryResource for Listener {
    const KIND: ResourceKind = ResourceKind::Listener;

    fn name(&self) -> &str {
        &self.name
    }
}

impl DiscoveryResource for RouteConfiguration {
    const KIND: ResourceKind = ResourceKind::Route;

    fn name(&self) -> &str {
        &self.name
    }
}

/// How many resources a discovery call expects back.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Cardinality {
    /// Decoding stops at the first resource that decodes; later resources are
    /// not inspected.
    Single,
    /// Every resource is decoded.
    Many,
}

/// A resource in a discovery response that was skipped.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("resource #{index} (`{type_url}`) could not be decoded: {cause}")]
pub struct DecodeError {
    /// Position of the resource in the response.
    pub index: usize,
    /// The type URL the resource declared.
    pub type_url: String,
    #[source]
    pub cause: DecodeCause,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeCause {
    #[error("expected `{expected}`")]
    TypeMismatch { expected: &'static str },
    #[error(transparent)]
    Malformed(#[from] prost::DecodeError),
}

/// The outcome of decoding a batch of resources: everything that decoded,
/// plus one [`DecodeError`] per resource that did not.
#[derive(Debug, PartialEq)]
pub struct Decoded<R> {
    pub resources: Vec<R>,
    pub errors: Vec<DecodeError>,
}

impl<R> Default for Decoded<R> {
    fn default() -> Self {
        Self {
            resources: Vec::new(),
            errors: Vec::new(),
        }
    }
}

impl<R> Decoded<R> {
    /// Takes the first decoded resource, returning the decode errors if there
    /// is none.
    pub fn into_first(self) -> Result<R, Vec<DecodeError>> {
        self.resources.into_iter().next().ok_or(self.errors)
    }
}

/// Decodes every resource in `resources` as `R`.
///
/// A resource that declares another type URL or whose payload is malformed
/// is skipped and recorded in [`Decoded::errors`]; it never aborts the batch.
pub fn decode_all<R: DiscoveryResource>(resources: &[Any], cardinality: Cardinality) -> Decoded<R> {
    let kind = R::KIND;
    let mut decoded = Decoded::default();

    for (index, any) in resources.iter().enumerate() {
        match decode_one::<R>(any) {
            Ok(resource) => {
                decoded.resources.push(resource);
                if cardinality == Cardinality::Single {
                    break;
                }
            }
            Err(cause) => {
                let error = DecodeError {
                    index,
                    type_url: any.type_url.clone(),
                    cause,
                };
                tracing::warn!(%kind, %error, "skipping resource");
                crate::xds::metrics::decode_failures(kind).inc();
                decoded.errors.push(error);
            }
        }
    }

    decoded
}

fn decode_one<R: DiscoveryResource>(any: &Any) -> Result<R, DecodeCause> {
    let expected = R::KIND.type_url();
    if any.type_url != expected {
        return Err(DecodeCause::TypeMismatch { expected });
    }

    Ok(R::decode(&*any.value)?)
}

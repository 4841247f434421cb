/// Upstream host identifier.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Endpoint {
    /// The upstream host address.
    ///
    /// .. attention::
    ///
    /// The form of host address depends on the given cluster type. For STATIC or EDS,
    /// it is expected to be a direct IP address (or something resolvable by the
    /// specified :ref:`resolver <envoy_api_field_core.SocketAddress.resolver_name>`
    /// in the Address). For LOGICAL or STRICT DNS, it is expected to be hostname,
    /// and will be resolved via DNS.
    #[prost(message, optional, tag = "1")]
    pub address: ::core::option::Option<super::core::Address>,
    /// The hostname associated with this endpoint. This hostname is not used for routing or address
    /// resolution. If provided, it will be associated with the endpoint, and can be used for features
    /// that require a hostname, like
    /// :ref:`auto_host_rewrite <envoy_api_field_route.RouteAction.auto_host_rewrite>`.
    #[prost(string, tag = "3")]
    pub hostname: ::prost::alloc::string::String,
}
/// An Endpoint that Envoy can route traffic to.
/// \[#next-free-field: 6\]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LbEndpoint {
    /// Optional health status when known and supplied by EDS server.
    #[prost(enumeration = "super::core::HealthStatus", tag = "2")]
    pub health_status: i32,
    /// The endpoint metadata specifies values that may be used by the load
    /// balancer to select endpoints in a cluster for a given request. The filter
    /// name should be specified as *envoy.lb*. An example boolean key-value pair
    /// is *canary*, providing the optional canary status of the upstream host.
    /// This may be matched against in a route's
    /// :ref:`RouteAction <envoy_api_msg_route.RouteAction>` metadata_match field
    /// to subset the endpoints considered in cluster load balancing.
    #[prost(message, optional, tag = "3")]
    pub metadata: ::core::option::Option<super::core::Metadata>,
    /// The optional load balancing weight of the upstream host; at least 1.
    /// Envoy uses the load balancing weight in some of the built in load
    /// balancers. The load balancing weight for an endpoint is divided by the sum
    /// of the weights of all endpoints in the endpoint's locality to produce a
    /// percentage of traffic for the endpoint. This percentage is then further
    /// weighted by the endpoint's locality's load balancing weight from
    /// LocalityLbEndpoints. If unspecified, each host is presumed to have equal
    /// weight in a locality.
    #[prost(message, optional, tag = "4")]
    pub load_balancing_weight: ::core::option::Option<u32>,
    /// Upstream host identifier or a named reference.
    #[prost(oneof = "lb_endpoint::HostIdentifier", tags = "1, 5")]
    pub host_identifier: ::core::option::Option<lb_endpoint::HostIdentifier>,
}
/// Nested message and enum types in `LbEndpoint`.
pub mod lb_endpoint {
    /// Upstream host identifier or a named reference.
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum HostIdentifier {
        #[prost(message, tag = "1")]
        Endpoint(super::Endpoint),
        /// \[#not-implemented-hide:\]
        #[prost(string, tag = "5")]
        EndpointName(::prost::alloc::string::String),
    }
}
/// A group of endpoints belonging to a Locality.
/// One can have multiple LocalityLbEndpoints for a locality, but this is
/// generally only done if the different groups need to have different load
/// balancing weights or different priorities.
/// \[#next-free-field: 7\]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LocalityLbEndpoints {
    /// Identifies location of where the upstream hosts run.
    #[prost(message, optional, tag = "1")]
    pub locality: ::core::option::Option<super::core::Locality>,
    /// The group of endpoints belonging to the locality specified.
    #[prost(message, repeated, tag = "2")]
    pub lb_endpoints: ::prost::alloc::vec::Vec<LbEndpoint>,
    /// Optional: Per priority/region/zone/sub_zone weight; at least 1. The load
    /// balancing weight for a locality is divided by the sum of the weights of all
    /// localities  at the same priority level to produce the effective percentage
    /// of traffic for the locality.
    #[prost(message, optional, tag = "3")]
    pub load_balancing_weight: ::core::option::Option<u32>,
    /// Optional: the priority for this LocalityLbEndpoints. If unspecified this will
    /// default to the highest priority (0).
    #[prost(uint32, tag = "5")]
    pub priority: u32,
}

/// :ref:`Circuit breaking<arch_overview_circuit_break>` settings can be
/// specified individually for each defined priority.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CircuitBreakers {
    /// If multiple :ref:`Thresholds<envoy_api_msg_cluster.CircuitBreakers.Thresholds>`
    /// are defined with the same :ref:`RoutingPriority<envoy_api_enum_core.RoutingPriority>`,
    /// the first one in the list is used. If no Thresholds is defined for a given
    /// :ref:`RoutingPriority<envoy_api_enum_core.RoutingPriority>`, the default values
    /// are used.
    #[prost(message, repeated, tag = "1")]
    pub thresholds: ::prost::alloc::vec::Vec<circuit_breakers::Thresholds>,
}
/// Nested message and enum types in `CircuitBreakers`.
pub mod circuit_breakers {
    /// A Thresholds defines CircuitBreaker settings for a
    /// :ref:`RoutingPriority<envoy_api_enum_core.RoutingPriority>`.
    /// \[#next-free-field: 9\]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Thresholds {
        /// The :ref:`RoutingPriority<envoy_api_enum_core.RoutingPriority>`
        /// the specified CircuitBreaker settings apply to.
        #[prost(enumeration = "super::super::core::RoutingPriority", tag = "1")]
        pub priority: i32,
        /// The maximum number of connections that Envoy will make to the upstream
        /// cluster. If not specified, the default is 1024.
        #[prost(message, optional, tag = "2")]
        pub max_connections: ::core::option::Option<u32>,
        /// The maximum number of pending requests that Envoy will allow to the
        /// upstream cluster. If not specified, the default is 1024.
        #[prost(message, optional, tag = "3")]
        pub max_pending_requests: ::core::option::Option<u32>,
        /// The maximum number of parallel requests that Envoy will make to the
        /// upstream cluster. If not specified, the default is 1024.
        #[prost(message, optional, tag = "4")]
        pub max_requests: ::core::option::Option<u32>,
        /// The maximum number of parallel retries that Envoy will allow to the
        /// upstream cluster. If not specified, the default is 3.
        #[prost(message, optional, tag = "5")]
        pub max_retries: ::core::option::Option<u32>,
    }
}
/// See the :ref:`architecture overview <arch_overview_outlier_detection>` for
/// more information on outlier detection.
/// \[#next-free-field: 21\]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OutlierDetection {
    /// The number of consecutive 5xx responses or local origin errors that are mapped
    /// to 5xx error codes before a consecutive 5xx ejection
    /// occurs. Defaults to 5.
    #[prost(message, optional, tag = "1")]
    pub consecutive_5xx: ::core::option::Option<u32>,
    /// The time interval between ejection analysis sweeps. This can result in
    /// both new ejections as well as hosts being returned to service. Defaults
    /// to 10000ms or 10s.
    #[prost(message, optional, tag = "2")]
    pub interval: ::core::option::Option<::prost_types::Duration>,
    /// The base time that a host is ejected for. The real time is equal to the
    /// base time multiplied by the number of times the host has been ejected.
    /// Defaults to 30000ms or 30s.
    #[prost(message, optional, tag = "3")]
    pub base_ejection_time: ::core::option::Option<::prost_types::Duration>,
    /// The maximum % of an upstream cluster that can be ejected due to outlier
    /// detection. Defaults to 10% but will eject at least one host regardless of the value.
    #[prost(message, optional, tag = "4")]
    pub max_ejection_percent: ::core::option::Option<u32>,
}
// The `envoy.api.v2.cluster` package and the nested types of `Cluster` share
// this module.

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Oneof)]
pub enum ClusterDiscoveryType {
    /// The :ref:`service discovery type <arch_overview_service_discovery_types>`
    /// to use for resolving the cluster.
    #[prost(enumeration = "DiscoveryType", tag = "2")]
    Type(i32),
}
/// Only valid when discovery type is EDS.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EdsClusterConfig {
    /// Optional alternative to cluster name to present to EDS. This does not
    /// have the same restrictions as cluster name, i.e. it may be arbitrary
    /// length.
    #[prost(string, tag = "2")]
    pub service_name: ::prost::alloc::string::String,
}
/// Refer to :ref:`service discovery type <arch_overview_service_discovery_types>`
/// for an explanation on each type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum DiscoveryType {
    /// Refer to the :ref:`static discovery type<arch_overview_service_discovery_types_static>`
    /// for an explanation.
    Static = 0,
    /// Refer to the :ref:`strict DNS discovery
    /// type<arch_overview_service_discovery_types_strict_dns>`
    /// for an explanation.
    StrictDns = 1,
    /// Refer to the :ref:`logical DNS discovery
    /// type<arch_overview_service_discovery_types_logical_dns>`
    /// for an explanation.
    LogicalDns = 2,
    /// Refer to the :ref:`service discovery type<arch_overview_service_discovery_types_eds>`
    /// for an explanation.
    Eds = 3,
    /// Refer to the :ref:`original destination discovery
    /// type<arch_overview_service_discovery_types_original_destination>`
    /// for an explanation.
    OriginalDst = 4,
}
impl DiscoveryType {
    /// String value of the enum field names used in the ProtoBuf definition.
    ///
    /// The values are not transformed in any way and thus are considered stable
    /// (if the ProtoBuf definition does not change) and safe for programmatic use.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            DiscoveryType::Static => "STATIC",
            DiscoveryType::StrictDns => "STRICT_DNS",
            DiscoveryType::LogicalDns => "LOGICAL_DNS",
            DiscoveryType::Eds => "EDS",
            DiscoveryType::OriginalDst => "ORIGINAL_DST",
        }
    }
    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "STATIC" => Some(Self::Static),
            "STRICT_DNS" => Some(Self::StrictDns),
            "LOGICAL_DNS" => Some(Self::LogicalDns),
            "EDS" => Some(Self::Eds),
            "ORIGINAL_DST" => Some(Self::OriginalDst),
            _ => None,
        }
    }
}
/// Refer to :ref:`load balancer type <arch_overview_load_balancing_types>` architecture
/// overview section for information on each type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum LbPolicy {
    /// Refer to the :ref:`round robin load balancing
    /// policy<arch_overview_load_balancing_types_round_robin>`
    /// for an explanation.
    RoundRobin = 0,
    /// Refer to the :ref:`least request load balancing
    /// policy<arch_overview_load_balancing_types_least_request>`
    /// for an explanation.
    LeastRequest = 1,
    /// Refer to the :ref:`ring hash load balancing
    /// policy<arch_overview_load_balancing_types_ring_hash>`
    /// for an explanation.
    RingHash = 2,
    /// Refer to the :ref:`random load balancing
    /// policy<arch_overview_load_balancing_types_random>`
    /// for an explanation.
    Random = 3,
    /// Refer to the :ref:`original destination load balancing
    /// policy<arch_overview_load_balancing_types_original_destination>`
    /// for an explanation.
    OriginalDstLb = 4,
    /// Refer to the :ref:`Maglev load balancing policy<arch_overview_load_balancing_types_maglev>`
    /// for an explanation.
    Maglev = 5,
    /// This load balancer type must be specified if the configured cluster provides a cluster
    /// specific load balancer.
    ClusterProvided = 6,
    /// \[#not-implemented-hide:\] Use the new :ref:`load_balancing_policy
    /// <envoy_api_field_Cluster.load_balancing_policy>` field to determine the LB policy.
    LoadBalancingPolicyConfig = 7,
}
impl LbPolicy {
    /// String value of the enum field names used in the ProtoBuf definition.
    ///
    /// The values are not transformed in any way and thus are considered stable
    /// (if the ProtoBuf definition does not change) and safe for programmatic use.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            LbPolicy::RoundRobin => "ROUND_ROBIN",
            LbPolicy::LeastRequest => "LEAST_REQUEST",
            LbPolicy::RingHash => "RING_HASH",
            LbPolicy::Random => "RANDOM",
            LbPolicy::OriginalDstLb => "ORIGINAL_DST_LB",
            LbPolicy::Maglev => "MAGLEV",
            LbPolicy::ClusterProvided => "CLUSTER_PROVIDED",
            LbPolicy::LoadBalancingPolicyConfig => "LOAD_BALANCING_POLICY_CONFIG",
        }
    }
    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "ROUND_ROBIN" => Some(Self::RoundRobin),
            "LEAST_REQUEST" => Some(Self::LeastRequest),
            "RING_HASH" => Some(Self::RingHash),
            "RANDOM" => Some(Self::Random),
            "ORIGINAL_DST_LB" => Some(Self::OriginalDstLb),
            "MAGLEV" => Some(Self::Maglev),
            "CLUSTER_PROVIDED" => Some(Self::ClusterProvided),
            "LOAD_BALANCING_POLICY_CONFIG" => Some(Self::LoadBalancingPolicyConfig),
            _ => None,
        }
    }
}

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Filter {
    /// The name of the filter to instantiate. The name must match a
    /// :ref:`supported filter <config_network_filters>`.
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    /// Filter specific configuration which depends on the filter being
    /// instantiated. See the supported filters for further documentation.
    #[prost(oneof = "filter::ConfigType", tags = "2, 4")]
    pub config_type: ::core::option::Option<filter::ConfigType>,
}
/// Nested message and enum types in `Filter`.
pub mod filter {
    /// Filter specific configuration which depends on the filter being
    /// instantiated. See the supported filters for further documentation.
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum ConfigType {
        #[prost(message, tag = "2")]
        Config(::prost_types::Struct),
        #[prost(message, tag = "4")]
        TypedConfig(::prost_types::Any),
    }
}
/// A filter chain wraps a set of match criteria, an option TLS context, a set of filters, and
/// various other parameters.
/// \[#next-free-field: 8\]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FilterChain {
    /// A list of individual network filters that make up the filter chain for
    /// connections established with the listener. Order matters as the filters are
    /// processed sequentially as connection events happen. Note: If the filter
    /// list is empty, the connection will close by default.
    #[prost(message, repeated, tag = "3")]
    pub filters: ::prost::alloc::vec::Vec<Filter>,
    /// \[#not-implemented-hide:\] filter chain metadata.
    #[prost(message, optional, tag = "5")]
    pub metadata: ::core::option::Option<super::core::Metadata>,
    /// \[#not-implemented-hide:\] The unique name (or empty) by which this filter chain is known. If no
    /// name is provided, Envoy will allocate an internal UUID for the filter chain. If the filter
    /// chain is to be dynamically updated or removed via FCDS a unique name must be provided.
    #[prost(string, tag = "7")]
    pub name: ::prost::alloc::string::String,
}

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

use std::time::Duration;

use tonic::transport::ClientTlsConfig;

use crate::{
    config::{Config, REQUEST_TIMEOUT},
    xds::{
        api::{
            core::{address, socket_address},
            endpoint::lb_endpoint::HostIdentifier,
            route::{route, route_action::ClusterSpecifier, VirtualHost},
            Cluster, ClusterLoadAssignment, DiscoveryRequest, DiscoveryResponse, Listener,
            RouteConfiguration,
        },
        decode_all, metrics, Cardinality, ClusterKey, Decoded, DiscoveryCache, DiscoveryChannel,
        DiscoveryResource, DiscoveryTransport, Error, NodeIdentity, ResourceKind, SyncState,
    },
};

/// The route configuration Pilot serves for the sidecar's HTTP proxy
/// listener, which holds the routes of every service.
pub const HTTP_PROXY_RESOURCE: &str = "http_proxy";

/// The lookups routing and load balancing need from Pilot.
#[async_trait::async_trait]
pub trait PilotClient: Send + Sync {
    async fn clusters(&self) -> Result<Vec<Cluster>, Error>;
    async fn cluster(&self, name: &str) -> Result<Cluster, Error>;
    async fn all_route_configurations(&self) -> Result<RouteConfiguration, Error>;
    async fn route_configurations_by_port(&self, port: u16) -> Result<RouteConfiguration, Error>;
}

/// Client that polls Pilot using the aggregated discovery service.
///
/// Each call performs exactly one exchange. Calls for the same
/// [`ResourceKind`] wait for each other so the version and nonce they send
/// are always those of the last accepted response; calls for different kinds
/// run concurrently.
#[derive(Debug)]
pub struct XdsClient<T = DiscoveryChannel> {
    node: NodeIdentity,
    transport: T,
    cache: DiscoveryCache,
    request_timeout: Duration,
}

impl XdsClient<DiscoveryChannel> {
    /// Creates a client for the Pilot endpoints in `config`. `tls` is the
    /// credential to use for `https`/`grpcs` endpoints.
    pub fn from_config(config: &Config, tls: Option<ClientTlsConfig>) -> Result<Self, Error> {
        let channel = config.channel(tls)?;
        Ok(Self::new(config.node.resolve()?, channel).with_request_timeout(config.request_timeout))
    }
}

impl<T: DiscoveryTransport> XdsClient<T> {
    pub fn new(node: NodeIdentity, transport: T) -> Self {
        Self {
            node,
            transport,
            cache: DiscoveryCache::new(),
            request_timeout: REQUEST_TIMEOUT,
        }
    }

    /// Bounds every exchange, from dialling Pilot to receiving its response.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn node(&self) -> &NodeIdentity {
        &self.node
    }

    pub fn cache(&self) -> &DiscoveryCache {
        &self.cache
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// All clusters known to Pilot.
    #[tracing::instrument(skip(self), level = "debug")]
    pub async fn clusters(&self) -> Result<Vec<Cluster>, Error> {
        Ok(self.discover::<Cluster>(Vec::new(), Cardinality::Many).await?.resources)
    }

    /// The cluster called `name`.
    #[tracing::instrument(skip(self), level = "debug")]
    pub async fn cluster(&self, name: &str) -> Result<Cluster, Error> {
        let decoded: Decoded<Cluster> =
            self.discover(vec![name.to_owned()], Cardinality::Many).await?;

        match decoded.resources.into_iter().find(|cluster| cluster.name == name) {
            Some(cluster) => Ok(cluster),
            None => Err(Error::NotFound {
                kind: ResourceKind::Cluster,
                name: name.to_owned(),
                decode_errors: decoded.errors,
            }),
        }
    }

    /// The load assignment of `cluster_name`.
    #[tracing::instrument(skip(self), level = "debug")]
    pub async fn endpoints(&self, cluster_name: &str) -> Result<ClusterLoadAssignment, Error> {
        self.discover_one(cluster_name).await
    }

    /// All listeners known to Pilot.
    #[tracing::instrument(skip(self), level = "debug")]
    pub async fn listeners(&self) -> Result<Vec<Listener>, Error> {
        Ok(self.discover::<Listener>(Vec::new(), Cardinality::Many).await?.resources)
    }

    /// The virtual hosts routing traffic to `cluster_name`, that is every
    /// virtual host named `service:port` across the route configurations
    /// returned for it. The name is validated before Pilot is contacted.
    #[tracing::instrument(skip(self), level = "debug")]
    pub async fn route_virtual_hosts(&self, cluster_name: &str) -> Result<Vec<VirtualHost>, Error> {
        let key = ClusterKey::parse(cluster_name)?;
        let selector = key.virtual_host_selector();

        let decoded: Decoded<RouteConfiguration> = self
            .discover(vec![cluster_name.to_owned()], Cardinality::Many)
            .await?;

        Ok(decoded
            .resources
            .into_iter()
            .flat_map(|route_configuration| route_configuration.virtual_hosts)
            .filter(|virtual_host| virtual_host.name == selector)
            .collect())
    }

    /// The route configuration of the sidecar HTTP proxy.
    #[tracing::instrument(skip(self), level = "debug")]
    pub async fn all_route_configurations(&self) -> Result<RouteConfiguration, Error> {
        self.discover_one(HTTP_PROXY_RESOURCE).await
    }

    /// The route configuration of the listener on `port`.
    #[tracing::instrument(skip(self), level = "debug")]
    pub async fn route_configurations_by_port(&self, port: u16) -> Result<RouteConfiguration, Error> {
        self.discover_one(&port.to_string()).await
    }

    /// The clusters the routes of `cluster_name` send traffic to, in route
    /// order. A cluster appears once per route referring to it.
    #[tracing::instrument(skip(self), level = "debug")]
    pub async fn router_clusters_for(&self, cluster_name: &str) -> Result<Vec<String>, Error> {
        let virtual_hosts = self.route_virtual_hosts(cluster_name).await?;
        Ok(route_clusters(&virtual_hosts))
    }

    async fn discover_one<R: DiscoveryResource>(&self, name: &str) -> Result<R, Error> {
        self.discover::<R>(vec![name.to_owned()], Cardinality::Single)
            .await?
            .into_first()
            .map_err(|decode_errors| Error::NotFound {
                kind: R::KIND,
                name: name.to_owned(),
                decode_errors,
            })
    }

    /// Performs one exchange for `R::KIND` and decodes the response. The
    /// version and nonce are only advanced once a response of the right type
    /// has been received; on any failure the next request is a replay of
    /// this one.
    async fn discover<R: DiscoveryResource>(
        &self,
        resource_names: Vec<String>,
        cardinality: Cardinality,
    ) -> Result<Decoded<R>, Error> {
        let kind = R::KIND;
        let mut state = self.cache.lock(kind).await;

        let request = DiscoveryRequest {
            version_info: state.version_info.clone(),
            node: Some(self.node.to_node()),
            resource_names,
            type_url: kind.type_url().into(),
            response_nonce: state.nonce.clone(),
            error_detail: None,
        };

        let response = match self.exchange(kind, request).await {
            Ok(response) => response,
            Err(error) => {
                if let Some(reason) = error.reason() {
                    metrics::exchange_errors(kind, reason).inc();
                }
                return Err(error);
            }
        };

        metrics::discovery_responses(kind).inc();
        tracing::debug!(
            %kind,
            version = %response.version_info,
            nonce = %response.nonce,
            resources = response.resources.len(),
            "received discovery response"
        );

        *state = SyncState {
            version_info: response.version_info,
            nonce: response.nonce,
        };
        drop(state);

        Ok(decode_all(&response.resources, cardinality))
    }

    async fn exchange(
        &self,
        kind: ResourceKind,
        request: DiscoveryRequest,
    ) -> Result<DiscoveryResponse, Error> {
        tracing::trace!(?request, "sending discovery request");
        metrics::discovery_requests(kind).inc();

        let response = tokio::time::timeout(self.request_timeout, self.transport.exchange(request))
            .await
            .map_err(|_| Error::Timeout {
                kind,
                after: self.request_timeout,
            })
            .and_then(|result| result);

        let response = match response {
            Ok(response) => response,
            Err(error) => {
                tracing::warn!(%kind, %error, "discovery exchange failed");
                return Err(error);
            }
        };

        if response.type_url != kind.type_url() {
            let error = Error::Protocol(format!(
                "requested `{}` but received `{}`",
                kind.type_url(),
                response.type_url
            ));
            tracing::error!(%kind, %error, "control plane answered with the wrong type");
            return Err(error);
        }

        Ok(response)
    }
}

#[async_trait::async_trait]
impl<T: DiscoveryTransport> PilotClient for XdsClient<T> {
    async fn clusters(&self) -> Result<Vec<Cluster>, Error> {
        XdsClient::clusters(self).await
    }

    async fn cluster(&self, name: &str) -> Result<Cluster, Error> {
        XdsClient::cluster(self, name).await
    }

    async fn all_route_configurations(&self) -> Result<RouteConfiguration, Error> {
        XdsClient::all_route_configurations(self).await
    }

    async fn route_configurations_by_port(&self, port: u16) -> Result<RouteConfiguration, Error> {
        XdsClient::route_configurations_by_port(self, port).await
    }
}

/// The clusters `virtual_hosts` route to: the target of every route
/// forwarding to a single cluster and each member of every weighted split.
/// Redirects and header selected clusters contribute nothing.
pub fn route_clusters(virtual_hosts: &[VirtualHost]) -> Vec<String> {
    virtual_hosts
        .iter()
        .flat_map(|virtual_host| &virtual_host.routes)
        .filter_map(|route| match &route.action {
            Some(route::Action::Route(action)) => action.cluster_specifier.as_ref(),
            _ => None,
        })
        .flat_map(|specifier| match specifier {
            ClusterSpecifier::Cluster(name) => vec![name.clone()],
            ClusterSpecifier::WeightedClusters(weighted) => weighted
                .clusters
                .iter()
                .map(|cluster| cluster.name.clone())
                .collect(),
            ClusterSpecifier::ClusterHeader(_) => Vec::new(),
        })
        .filter(|name| !name.is_empty())
        .collect()
}

/// The `host:port` of every socket address endpoint in `assignment`, in
/// locality order.
pub fn endpoint_addresses(assignment: &ClusterLoadAssignment) -> Vec<String> {
    assignment
        .endpoints
        .iter()
        .flat_map(|locality| &locality.lb_endpoints)
        .filter_map(|lb_endpoint| match &lb_endpoint.host_identifier {
            Some(HostIdentifier::Endpoint(endpoint)) => endpoint.address.as_ref(),
            _ => None,
        })
        .filter_map(|address| match &address.address {
            Some(address::Address::SocketAddress(socket)) => Some(socket),
            _ => None,
        })
        .filter_map(|socket| match &socket.port_specifier {
            Some(socket_address::PortSpecifier::PortValue(port)) => {
                Some(format!("{}:{port}", socket.address))
            }
            Some(socket_address::PortSpecifier::NamedPort(port)) => {
                Some(format!("{}:{port}", socket.address))
            }
            None => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pretty_assertions::assert_eq;
    use tracing_test::traced_test;

    use super::*;
    use crate::{
        test::{
            cluster, load_assignment, node_identity, response, route_configuration,
            virtual_host, weighted_route, ScriptedTransport,
        },
        xds::TransportError,
    };

    const REVIEWS: &str = "outbound|9080|v1|reviews.default.svc.cluster.local";

    fn client(transport: ScriptedTransport) -> XdsClient<ScriptedTransport> {
        XdsClient::new(node_identity(), transport)
    }

    fn unavailable() -> Error {
        Error::Transport {
            endpoint: "scripted".into(),
            source: TransportError::Status(tonic::Status::unavailable("pilot is down")),
        }
    }

    #[tokio::test]
    async fn first_request_is_empty_then_echoes_the_last_response() {
        let transport = ScriptedTransport::new([
            Ok(response("v1", "n1", &[cluster("a")])),
            Ok(response("v2", "n2", &[cluster("a"), cluster("b")])),
        ]);
        let client = client(transport);

        assert_eq!(client.clusters().await.unwrap().len(), 1);
        assert_eq!(client.clusters().await.unwrap().len(), 2);

        let requests = client.transport().requests();
        assert_eq!(requests[0].version_info, "");
        assert_eq!(requests[0].response_nonce, "");
        assert_eq!(requests[1].version_info, "v1");
        assert_eq!(requests[1].response_nonce, "n1");
        assert_eq!(
            client.cache().get(ResourceKind::Cluster).await,
            SyncState {
                version_info: "v2".into(),
                nonce: "n2".into(),
            }
        );
    }

    #[tokio::test]
    async fn requests_carry_node_and_type() {
        let transport = ScriptedTransport::new([Ok(response::<Listener>("1", "a", &[]))]);
        let client = client(transport);

        client.listeners().await.unwrap();

        let request = &client.transport().requests()[0];
        assert_eq!(request.type_url, "type.googleapis.com/envoy.api.v2.Listener");
        assert!(request.resource_names.is_empty());
        let node = request.node.as_ref().unwrap();
        assert_eq!(node.id, "sidecar~10.0.0.1~app-7~ns1");
        assert_eq!(node.cluster, "app-7");
    }

    #[tokio::test]
    async fn failed_exchange_does_not_advance_state() {
        let transport = ScriptedTransport::new([
            Ok(response("v1", "n1", &[load_assignment(REVIEWS, &[])])),
            Err(unavailable()),
            Ok(response("v2", "n2", &[load_assignment(REVIEWS, &[])])),
        ]);
        let client = client(transport);

        client.endpoints(REVIEWS).await.unwrap();
        let error = client.endpoints(REVIEWS).await.unwrap_err();
        assert!(error.is_retryable());
        client.endpoints(REVIEWS).await.unwrap();

        let requests = client.transport().requests();
        assert_eq!(requests.len(), 3);
        assert_eq!(requests[1].version_info, "v1");
        assert_eq!(requests[1].response_nonce, "n1");
        // The retry replays the failed request.
        assert_eq!(requests[2], requests[1]);
        assert_eq!(requests[2].resource_names, [REVIEWS]);
    }

    #[tokio::test]
    #[traced_test]
    async fn wrong_type_url_is_a_protocol_error() {
        let transport = ScriptedTransport::new([
            Ok(response("v1", "n1", &[cluster("a")])),
            Ok(response::<Listener>("v2", "n2", &[])),
        ]);
        let client = client(transport);

        client.clusters().await.unwrap();
        let error = client.clusters().await.unwrap_err();

        assert!(matches!(error, Error::Protocol(_)), "{error}");
        assert!(error.is_retryable());
        assert_eq!(
            client.cache().get(ResourceKind::Cluster).await,
            SyncState {
                version_info: "v1".into(),
                nonce: "n1".into(),
            }
        );
        assert!(logs_contain("control plane answered with the wrong type"));
    }

    #[tokio::test]
    async fn endpoints_not_found() {
        let transport = ScriptedTransport::new([Ok(response::<ClusterLoadAssignment>(
            "v1",
            "n1",
            &[],
        ))]);
        let client = client(transport);

        let error = client.endpoints(REVIEWS).await.unwrap_err();
        match error {
            Error::NotFound {
                kind,
                name,
                decode_errors,
            } => {
                assert_eq!(kind, ResourceKind::Endpoint);
                assert_eq!(name, REVIEWS);
                assert!(decode_errors.is_empty());
            }
            error => panic!("unexpected error: {error}"),
        }
        // The response itself was valid, so it is acknowledged.
        assert_eq!(client.cache().get(ResourceKind::Endpoint).await.version_info, "v1");
    }

    #[tokio::test]
    async fn endpoints_not_found_keeps_decode_errors() {
        let mut broken = response("v1", "n1", &[load_assignment(REVIEWS, &[])]);
        broken.resources[0].value = vec![0x0a, 0xff, 0x01];
        let client = client(ScriptedTransport::new([Ok(broken)]));

        let error = client.endpoints(REVIEWS).await.unwrap_err();
        assert!(
            matches!(&error, Error::NotFound { decode_errors, .. } if decode_errors.len() == 1),
            "{error}"
        );
    }

    #[tokio::test]
    async fn endpoints_takes_the_first_assignment() {
        let transport = ScriptedTransport::new([Ok(response(
            "v1",
            "n1",
            &[
                load_assignment(REVIEWS, &[("10.1.0.1", 9080)]),
                load_assignment("other", &[("10.1.0.2", 9080)]),
            ],
        ))]);
        let client = client(transport);

        let assignment = client.endpoints(REVIEWS).await.unwrap();
        assert_eq!(endpoint_addresses(&assignment), ["10.1.0.1:9080"]);
    }

    #[tokio::test]
    async fn cluster_by_name() {
        let transport = ScriptedTransport::new([
            Ok(response("v1", "n1", &[cluster("a"), cluster("b")])),
            Ok(response("v2", "n2", &[cluster("a")])),
        ]);
        let client = client(transport);

        assert_eq!(client.cluster("b").await.unwrap().name, "b");
        assert!(matches!(
            client.cluster("b").await,
            Err(Error::NotFound {
                kind: ResourceKind::Cluster,
                ..
            })
        ));
        assert_eq!(client.transport().requests()[0].resource_names, ["b"]);
    }

    #[tokio::test]
    async fn route_virtual_hosts_filters_by_service_and_port() {
        let transport = ScriptedTransport::new([Ok(response(
            "v1",
            "n1",
            &[
                route_configuration(
                    "9080",
                    vec![
                        virtual_host("svc:80", &["outbound|80|v1|svc.ns.svc.cluster.local"]),
                        virtual_host("other:80", &["outbound|80||other.ns.svc.cluster.local"]),
                    ],
                ),
                route_configuration(
                    "80",
                    vec![virtual_host("svc:80", &["outbound|80|v2|svc.ns.svc.cluster.local"])],
                ),
            ],
        ))]);
        let client = client(transport);

        let hosts = client
            .route_virtual_hosts("egress|80|v1|svc.ns.svc.cluster.local")
            .await
            .unwrap();

        let names: Vec<_> = hosts.iter().map(|host| host.name.as_str()).collect();
        assert_eq!(names, ["svc:80", "svc:80"]);
        let request = &client.transport().requests()[0];
        assert_eq!(request.resource_names, ["egress|80|v1|svc.ns.svc.cluster.local"]);
        assert_eq!(request.type_url, ResourceKind::Route.type_url());
    }

    #[tokio::test]
    async fn invalid_cluster_name_fails_before_any_exchange() {
        let client = client(ScriptedTransport::new([]));

        let error = client.route_virtual_hosts("svc.ns").await.unwrap_err();
        assert!(matches!(error, Error::InvalidName { .. }));
        assert!(client.router_clusters_for("a|b|c|d").await.is_err());
        assert!(client.transport().requests().is_empty());
    }

    #[tokio::test]
    async fn router_clusters() {
        let mut host = virtual_host(
            "reviews:9080",
            &[
                "outbound|9080|v1|reviews.default.svc.cluster.local",
                "outbound|9080|v2|reviews.default.svc.cluster.local",
            ],
        );
        host.routes.push(weighted_route(&[
            ("outbound|9080|v1|reviews.default.svc.cluster.local", 90),
            ("outbound|9080|v3|reviews.default.svc.cluster.local", 10),
        ]));
        host.routes.push(Default::default());
        let transport = ScriptedTransport::new([Ok(response(
            "v1",
            "n1",
            &[route_configuration("9080", vec![host])],
        ))]);
        let client = client(transport);

        let clusters = client.router_clusters_for(REVIEWS).await.unwrap();
        assert_eq!(
            clusters,
            [
                "outbound|9080|v1|reviews.default.svc.cluster.local",
                "outbound|9080|v2|reviews.default.svc.cluster.local",
                "outbound|9080|v1|reviews.default.svc.cluster.local",
                "outbound|9080|v3|reviews.default.svc.cluster.local",
            ]
        );
    }

    #[tokio::test]
    async fn route_configuration_lookups() {
        let transport = ScriptedTransport::new([
            Ok(response("v1", "n1", &[route_configuration(HTTP_PROXY_RESOURCE, vec![])])),
            Ok(response("v2", "n2", &[route_configuration("8080", vec![])])),
        ]);
        let client = client(transport);

        let all = client.all_route_configurations().await.unwrap();
        assert_eq!(all.name, HTTP_PROXY_RESOURCE);
        let by_port = client.route_configurations_by_port(8080).await.unwrap();
        assert_eq!(by_port.name, "8080");

        let requests = client.transport().requests();
        assert_eq!(requests[0].resource_names, [HTTP_PROXY_RESOURCE]);
        assert_eq!(requests[1].resource_names, ["8080"]);
        // Both lookups share the route version and nonce.
        assert_eq!(requests[1].version_info, "v1");
        assert_eq!(requests[1].response_nonce, "n1");
    }

    #[tokio::test(start_paused = true)]
    async fn timeout_does_not_advance_state() {
        let transport = ScriptedTransport::new([Ok(response("v1", "n1", &[cluster("a")]))])
            .with_delay(Duration::from_secs(60));
        let client = client(transport).with_request_timeout(Duration::from_secs(1));

        let error = client.clusters().await.unwrap_err();
        assert!(matches!(
            error,
            Error::Timeout {
                kind: ResourceKind::Cluster,
                ..
            }
        ));
        assert_eq!(
            client.cache().get(ResourceKind::Cluster).await,
            SyncState::default()
        );
    }

    #[tokio::test(start_paused = true)]
    async fn same_kind_calls_are_serialised() {
        let transport = ScriptedTransport::new([
            Ok(response("v1", "n1", &[cluster("a")])),
            Ok(response("v2", "n2", &[cluster("a")])),
        ])
        .with_delay(Duration::from_millis(10));
        let client = Arc::new(client(transport));

        let (first, second) = tokio::join!(client.clusters(), client.clusters());
        first.unwrap();
        second.unwrap();

        let requests = client.transport().requests();
        // Whichever ran second saw the response to the first.
        assert_eq!(requests[0].version_info, "");
        assert_eq!(requests[1].version_info, "v1");
        assert_eq!(requests[1].response_nonce, "n1");
    }

    #[tokio::test]
    async fn different_kinds_run_concurrently() {
        let barrier = Arc::new(tokio::sync::Barrier::new(2));
        let transport = ScriptedTransport::responding(|request| {
            Ok(DiscoveryResponse {
                version_info: "1".into(),
                nonce: "a".into(),
                type_url: request.type_url.clone(),
                ..DiscoveryResponse::default()
            })
        })
        .with_barrier(barrier);
        let client = client(transport);

        // Both exchanges must be in flight at once to pass the barrier.
        let result = tokio::time::timeout(Duration::from_secs(5), async {
            tokio::join!(client.clusters(), client.listeners())
        })
        .await;

        let (clusters, listeners) = result.expect("exchanges of different kinds were serialised");
        clusters.unwrap();
        listeners.unwrap();
    }

    #[tokio::test]
    async fn exchanges_are_counted() {
        let kind = ResourceKind::Listener;
        let requests = metrics::discovery_requests(kind).get();
        let responses = metrics::discovery_responses(kind).get();
        let errors = metrics::exchange_errors(kind, "transport").get();

        let client = client(ScriptedTransport::new([
            Ok(response::<Listener>("1", "a", &[])),
            Err(unavailable()),
        ]));
        client.listeners().await.unwrap();
        client.listeners().await.unwrap_err();

        // Other tests share the counters.
        assert!(metrics::discovery_requests(kind).get() >= requests + 2);
        assert!(metrics::discovery_responses(kind).get() > responses);
        assert!(metrics::exchange_errors(kind, "transport").get() > errors);
    }

    #[test]
    fn endpoint_addresses_flattens_localities() {
        let mut assignment = load_assignment(REVIEWS, &[("10.1.0.1", 9080), ("10.1.0.2", 9081)]);
        assignment
            .endpoints
            .extend(load_assignment(REVIEWS, &[("10.2.0.1", 9080)]).endpoints);

        assert_eq!(
            endpoint_addresses(&assignment),
            ["10.1.0.1:9080", "10.1.0.2:9081", "10.2.0.1:9080"]
        );
    }

    #[test]
    fn route_clusters_skips_redirects() {
        let mut host = virtual_host("svc:80", &["a"]);
        host.routes.push(crate::xds::api::route::Route {
            action: Some(route::Action::Redirect(Default::default())),
            ..Default::default()
        });
        assert_eq!(route_clusters(&[host]), ["a"]);
    }
}

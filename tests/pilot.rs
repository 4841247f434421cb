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

use std::{
    sync::atomic::{AtomicUsize, Ordering},
    time::Duration,
};

use pretty_assertions::assert_eq;

use pilot_xds::{
    config::Config,
    panel::{ControlPanel, Invocation, LoadBalancingStrategy},
    test::{
        cluster, cluster_with_policy, listener, load_assignment, response, route_configuration,
        virtual_host, FakePilot, Reply,
    },
    xds::{
        api::{cluster::LbPolicy, DiscoveryRequest, DiscoveryResponse},
        endpoint_addresses, Credentials, DiscoveryChannel, Error, ResourceKind, SyncState,
        TransportError, HTTP_PROXY_RESOURCE,
    },
    PilotPanel, XdsClient,
};

const REVIEWS_V1: &str = "outbound|9080|v1|reviews.default.svc.cluster.local";
const REVIEWS_V2: &str = "outbound|9080|v2|reviews.default.svc.cluster.local";
const RATINGS: &str = "outbound|9080||ratings.default.svc.cluster.local";

/// Serves a small bookinfo mesh, bumping the version on every response.
fn bookinfo() -> impl Fn(&DiscoveryRequest) -> Reply + Send + Sync + 'static {
    let counter = AtomicUsize::new(0);

    move |request| {
        let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
        let version = format!("v{n}");
        let nonce = format!("n{n}");

        let Ok(kind) = ResourceKind::try_from(request.type_url.as_str()) else {
            return Reply::Status(tonic::Status::invalid_argument("unknown type"));
        };

        let response = match kind {
            ResourceKind::Cluster => response(
                &version,
                &nonce,
                &[
                    cluster_with_policy(REVIEWS_V1, LbPolicy::RingHash),
                    cluster_with_policy(REVIEWS_V2, LbPolicy::RingHash),
                    cluster_with_policy(RATINGS, LbPolicy::Random),
                ],
            ),
            ResourceKind::Endpoint => {
                let assignments: Vec<_> = request
                    .resource_names
                    .iter()
                    .map(|name| load_assignment(name, &[("10.1.0.1", 9080), ("10.1.0.2", 9080)]))
                    .collect();
                response(&version, &nonce, assignments.as_slice())
            }
            ResourceKind::Listener => response(
                &version,
                &nonce,
                &[listener("0.0.0.0_9080", 9080), listener("virtual", 15001)],
            ),
            ResourceKind::Route => {
                let name = request
                    .resource_names
                    .first()
                    .cloned()
                    .unwrap_or_default();
                response(
                    &version,
                    &nonce,
                    &[route_configuration(
                        &name,
                        vec![
                            virtual_host("reviews:9080", &[REVIEWS_V1, REVIEWS_V2]),
                            virtual_host("ratings:9080", &[RATINGS]),
                        ],
                    )],
                )
            }
        };

        Reply::Response(response)
    }
}

#[tokio::test]
async fn acknowledges_each_response() {
    let pilot = FakePilot::spawn(bookinfo()).await.unwrap();
    let client = pilot.client().unwrap();

    let clusters = client.clusters().await.unwrap();
    assert_eq!(clusters.len(), 3);
    client.clusters().await.unwrap();
    client.listeners().await.unwrap();

    let requests = pilot.requests();
    assert_eq!(requests.len(), 3);
    assert_eq!(requests[0].version_info, "");
    assert_eq!(requests[0].response_nonce, "");
    assert_eq!(requests[1].version_info, "v1");
    assert_eq!(requests[1].response_nonce, "n1");
    // Listeners have their own version.
    assert_eq!(requests[2].version_info, "");
    assert_eq!(requests[2].type_url, ResourceKind::Listener.type_url());

    let node = requests[0].node.as_ref().unwrap();
    assert_eq!(node.id, "sidecar~10.0.0.1~app-7~ns1");
    assert_eq!(node.cluster, "app-7");
}

#[tokio::test]
async fn endpoints() {
    let pilot = FakePilot::spawn(bookinfo()).await.unwrap();
    let client = pilot.client().unwrap();

    let assignment = client.endpoints(REVIEWS_V1).await.unwrap();

    assert_eq!(assignment.cluster_name, REVIEWS_V1);
    assert_eq!(endpoint_addresses(&assignment), ["10.1.0.1:9080", "10.1.0.2:9080"]);
    assert_eq!(pilot.requests()[0].resource_names, [REVIEWS_V1]);
}

#[tokio::test]
async fn listeners() {
    let pilot = FakePilot::spawn(bookinfo()).await.unwrap();
    let client = pilot.client().unwrap();

    let names: Vec<_> = client
        .listeners()
        .await
        .unwrap()
        .into_iter()
        .map(|listener| listener.name)
        .collect();
    assert_eq!(names, ["0.0.0.0_9080", "virtual"]);
}

#[tokio::test]
async fn routes() {
    let pilot = FakePilot::spawn(bookinfo()).await.unwrap();
    let client = pilot.client().unwrap();

    let hosts = client.route_virtual_hosts(REVIEWS_V1).await.unwrap();
    assert_eq!(hosts.len(), 1);
    assert_eq!(hosts[0].name, "reviews:9080");

    let clusters = client.router_clusters_for(REVIEWS_V1).await.unwrap();
    assert_eq!(clusters, [REVIEWS_V1, REVIEWS_V2]);

    let all = client.all_route_configurations().await.unwrap();
    assert_eq!(all.name, HTTP_PROXY_RESOURCE);
    assert_eq!(all.virtual_hosts.len(), 2);

    let by_port = client.route_configurations_by_port(9080).await.unwrap();
    assert_eq!(by_port.name, "9080");

    let requests = pilot.requests();
    assert_eq!(requests.len(), 4);
    // Every route lookup shares one version and nonce.
    for (index, request) in requests.iter().enumerate().skip(1) {
        assert_eq!(request.version_info, format!("v{index}"));
        assert_eq!(request.response_nonce, format!("n{index}"));
    }
}

#[tokio::test]
async fn invalid_cluster_name_never_reaches_pilot() {
    let pilot = FakePilot::spawn(bookinfo()).await.unwrap();
    let client = pilot.client().unwrap();

    let error = client.route_virtual_hosts("reviews.default").await.unwrap_err();

    assert!(matches!(error, Error::InvalidName { .. }), "{error}");
    assert!(!error.is_retryable());
    assert!(pilot.requests().is_empty());
}

#[tokio::test]
async fn failed_status_keeps_the_last_version() {
    let counter = AtomicUsize::new(0);
    let pilot = FakePilot::spawn(move |_| match counter.fetch_add(1, Ordering::SeqCst) {
        0 => Reply::Response(response("v1", "n1", &[cluster(RATINGS)])),
        1 => Reply::Status(tonic::Status::unavailable("pilot is restarting")),
        _ => Reply::Response(response("v2", "n2", &[cluster(RATINGS)])),
    })
    .await
    .unwrap();
    let client = pilot.client().unwrap();

    client.clusters().await.unwrap();
    let error = client.clusters().await.unwrap_err();
    assert!(
        matches!(
            &error,
            Error::Transport {
                source: TransportError::Status(status),
                ..
            } if status.code() == tonic::Code::Unavailable
        ),
        "{error}"
    );
    assert_eq!(
        client.cache().get(ResourceKind::Cluster).await,
        SyncState {
            version_info: "v1".into(),
            nonce: "n1".into(),
        }
    );
    client.clusters().await.unwrap();

    let requests = pilot.requests();
    assert_eq!(requests[1], requests[2]);
    assert_eq!(client.cache().get(ResourceKind::Cluster).await.version_info, "v2");
}

#[tokio::test]
async fn closed_stream_is_a_protocol_error() {
    let pilot = FakePilot::spawn(|_| Reply::Close).await.unwrap();
    let client = pilot.client().unwrap();

    let error = client.endpoints(REVIEWS_V1).await.unwrap_err();

    assert!(matches!(error, Error::Protocol(_)), "{error}");
    assert_eq!(client.cache().get(ResourceKind::Endpoint).await, SyncState::default());
}

#[tokio::test]
async fn wrong_type_is_a_protocol_error() {
    let pilot = FakePilot::spawn(|_| Reply::Response(response("v1", "n1", &[cluster(RATINGS)])))
        .await
        .unwrap();
    let client = pilot.client().unwrap();

    let error = client.listeners().await.unwrap_err();

    assert!(matches!(error, Error::Protocol(_)), "{error}");
    assert_eq!(client.cache().get(ResourceKind::Listener).await, SyncState::default());
}

#[tokio::test]
async fn missing_endpoints_are_not_found() {
    let pilot = FakePilot::spawn(|_| {
        Reply::Response(DiscoveryResponse {
            version_info: "v1".into(),
            nonce: "n1".into(),
            type_url: ResourceKind::Endpoint.type_url().into(),
            ..DiscoveryResponse::default()
        })
    })
    .await
    .unwrap();
    let client = pilot.client().unwrap();

    let error = client.endpoints(REVIEWS_V1).await.unwrap_err();
    assert!(
        matches!(
            &error,
            Error::NotFound {
                kind: ResourceKind::Endpoint,
                name,
                ..
            } if name == REVIEWS_V1
        ),
        "{error}"
    );
}

#[tokio::test]
async fn hanging_pilot_times_out() {
    let pilot = FakePilot::spawn(|_| Reply::Hang).await.unwrap();
    let client = pilot
        .client()
        .unwrap()
        .with_request_timeout(Duration::from_millis(200));

    let error = client.clusters().await.unwrap_err();

    assert!(matches!(error, Error::Timeout { .. }), "{error}");
    assert!(error.is_retryable());
    assert_eq!(client.cache().get(ResourceKind::Cluster).await, SyncState::default());
}

#[tokio::test]
async fn fails_over_to_the_next_endpoint() {
    let pilot = FakePilot::spawn(bookinfo()).await.unwrap();
    let addresses: Vec<url::Url> = ["http://127.0.0.1:9".to_owned(), pilot.endpoint()]
        .iter()
        .map(|address| address.parse().unwrap())
        .collect();
    let channel = DiscoveryChannel::new(&addresses, &Credentials::Insecure)
        .unwrap()
        .connect_timeout(Duration::from_millis(500));
    let client = XdsClient::new(pilot_xds::test::node_identity(), channel);

    assert_eq!(client.clusters().await.unwrap().len(), 3);
    assert_eq!(pilot.requests().len(), 1);
}

#[tokio::test]
async fn client_from_config() {
    let pilot = FakePilot::spawn(bookinfo()).await.unwrap();
    let yaml = format!(
        "
endpoints: {}
node:
  instance_ip: 10.0.0.9
  pod_name: reviews-v1-abc
  namespace: default
request_timeout: 5
        ",
        pilot.endpoint()
    );
    let config = Config::from_yaml(&yaml).unwrap();
    let client = XdsClient::from_config(&config, None).unwrap();

    client.listeners().await.unwrap();

    let node = pilot.requests()[0].node.clone().unwrap();
    assert_eq!(node.id, "sidecar~10.0.0.9~reviews-v1-abc~default");
    assert_eq!(node.cluster, "reviews-v1-abc");
}

#[tokio::test]
async fn panel_reads_load_balancing() {
    let pilot = FakePilot::spawn(bookinfo()).await.unwrap();
    let panel = PilotPanel::new(pilot.client().unwrap());

    let config = panel
        .load_balancing(&Invocation {
            microservice_name: "reviews".into(),
            ..Invocation::default()
        })
        .await;

    assert_eq!(config.strategy, Some(LoadBalancingStrategy::SessionStickiness));
    assert_eq!(config.clusters, [REVIEWS_V1, REVIEWS_V2]);
}

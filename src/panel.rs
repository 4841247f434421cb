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

//! Translation of Pilot configuration into the settings the request
//! handlers of a microservice consume.

use std::{fmt, time::Duration};

use tonic::transport::ClientTlsConfig;

use crate::{
    config::Config,
    xds::{api::cluster::LbPolicy, ClusterKey, Error, PilotClient, XdsClient},
};

/// The call a configuration lookup is made for.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Invocation {
    /// The service making the call.
    pub source_microservice: String,
    /// The service being called.
    pub microservice_name: String,
    pub version: String,
    pub schema_id: String,
    pub operation_id: String,
}

/// Which side of an [`Invocation`] a lookup is for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceType {
    Consumer,
    Provider,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CircuitBreakerConfig {
    pub timeout: Duration,
    pub max_concurrent_requests: u32,
    pub request_volume_threshold: u32,
    pub sleep_window: Duration,
    pub error_percent_threshold: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadBalancingStrategy {
    RoundRobin,
    Random,
    WeightedResponse,
    SessionStickiness,
}

impl LoadBalancingStrategy {
    pub fn name(&self) -> &'static str {
        match self {
            Self::RoundRobin => "RoundRobin",
            Self::Random => "Random",
            Self::WeightedResponse => "WeightedResponse",
            Self::SessionStickiness => "SessionStickiness",
        }
    }

    /// The strategy closest to an Envoy load balancing policy, if any.
    pub fn from_lb_policy(policy: LbPolicy) -> Option<Self> {
        match policy {
            LbPolicy::RoundRobin => Some(Self::RoundRobin),
            LbPolicy::LeastRequest => Some(Self::WeightedResponse),
            LbPolicy::Random => Some(Self::Random),
            LbPolicy::RingHash | LbPolicy::Maglev => Some(Self::SessionStickiness),
            LbPolicy::OriginalDstLb
            | LbPolicy::ClusterProvided
            | LbPolicy::LoadBalancingPolicyConfig => None,
        }
    }
}

impl fmt::Display for LoadBalancingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The load balancing settings of the called service. The default leaves
/// the strategy to the caller.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadBalancingConfig {
    pub strategy: Option<LoadBalancingStrategy>,
    /// The Pilot clusters of the called service.
    pub clusters: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RateLimitingConfig {
    pub key: String,
    pub enabled: bool,
    pub rate: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FaultInjection {
    pub abort_percent: u32,
    pub abort_http_status: u16,
    pub delay_percent: u32,
    pub fixed_delay: Duration,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EgressRule {
    pub hosts: Vec<String>,
    pub ports: Vec<u16>,
}

/// A source of handler configuration.
///
/// Lookups never fail: a panel that cannot answer returns the neutral default
/// of the setting, which leaves the handler's own defaults in place.
#[async_trait::async_trait]
pub trait ControlPanel: Send + Sync {
    /// The circuit breaker command name and settings for `invocation`.
    async fn circuit_breaker(
        &self,
        invocation: &Invocation,
        service_type: ServiceType,
    ) -> (String, CircuitBreakerConfig);

    async fn load_balancing(&self, invocation: &Invocation) -> LoadBalancingConfig;

    async fn rate_limiting(
        &self,
        invocation: &Invocation,
        service_type: ServiceType,
    ) -> RateLimitingConfig;

    async fn fault_injection(&self, invocation: &Invocation) -> FaultInjection;

    async fn egress_rules(&self, invocation: &Invocation) -> Vec<EgressRule>;
}

/// A [`ControlPanel`] backed by Pilot.
///
/// Only load balancing is read from Pilot, from the clusters of the called
/// service. Every other lookup returns its neutral default.
#[derive(Debug)]
pub struct PilotPanel<C = XdsClient> {
    client: C,
}

impl PilotPanel<XdsClient> {
    pub fn from_config(config: &Config, tls: Option<ClientTlsConfig>) -> Result<Self, Error> {
        Ok(Self::new(XdsClient::from_config(config, tls)?))
    }
}

impl<C: PilotClient> PilotPanel<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Like [`ControlPanel::load_balancing`], but returns the error instead
    /// of the default when Pilot cannot be read.
    #[tracing::instrument(skip_all, fields(service = %invocation.microservice_name))]
    pub async fn try_load_balancing(
        &self,
        invocation: &Invocation,
    ) -> Result<LoadBalancingConfig, Error> {
        let mut config = LoadBalancingConfig::default();

        for cluster in self.client.clusters().await? {
            let key = match ClusterKey::parse(&cluster.name) {
                Ok(key) => key,
                Err(error) => {
                    tracing::trace!(%error, "ignoring cluster");
                    continue;
                }
            };

            if key.service_name() != invocation.microservice_name {
                continue;
            }

            if config.strategy.is_none() {
                config.strategy = LoadBalancingStrategy::from_lb_policy(cluster.lb_policy());
            }
            config.clusters.push(cluster.name);
        }

        tracing::debug!(strategy = ?config.strategy, clusters = config.clusters.len(), "load balancing from pilot");
        Ok(config)
    }
}

#[async_trait::async_trait]
impl<C: PilotClient> ControlPanel for PilotPanel<C> {
    async fn circuit_breaker(
        &self,
        _invocation: &Invocation,
        _service_type: ServiceType,
    ) -> (String, CircuitBreakerConfig) {
        (String::new(), CircuitBreakerConfig::default())
    }

    async fn load_balancing(&self, invocation: &Invocation) -> LoadBalancingConfig {
        match self.try_load_balancing(invocation).await {
            Ok(config) => config,
            Err(error) => {
                tracing::warn!(%error, service = %invocation.microservice_name, "unable to read load balancing from pilot");
                LoadBalancingConfig::default()
            }
        }
    }

    async fn rate_limiting(
        &self,
        _invocation: &Invocation,
        _service_type: ServiceType,
    ) -> RateLimitingConfig {
        RateLimitingConfig::default()
    }

    async fn fault_injection(&self, _invocation: &Invocation) -> FaultInjection {
        FaultInjection::default()
    }

    async fn egress_rules(&self, _invocation: &Invocation) -> Vec<EgressRule> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tracing_test::traced_test;

    use super::*;
    use crate::{
        test::{cluster, cluster_with_policy},
        xds::{
            api::{Cluster, RouteConfiguration},
            ResourceKind, TransportError,
        },
    };

    struct FakeClient {
        clusters: Option<Vec<Cluster>>,
    }

    #[async_trait::async_trait]
    impl PilotClient for FakeClient {
        async fn clusters(&self) -> Result<Vec<Cluster>, Error> {
            self.clusters.clone().ok_or_else(|| Error::Transport {
                endpoint: "fake".into(),
                source: TransportError::Closed,
            })
        }

        async fn cluster(&self, name: &str) -> Result<Cluster, Error> {
            self.clusters()
                .await?
                .into_iter()
                .find(|cluster| cluster.name == name)
                .ok_or_else(|| Error::NotFound {
                    kind: ResourceKind::Cluster,
                    name: name.into(),
                    decode_errors: Vec::new(),
                })
        }

        async fn all_route_configurations(&self) -> Result<RouteConfiguration, Error> {
            Ok(RouteConfiguration::default())
        }

        async fn route_configurations_by_port(
            &self,
            _port: u16,
        ) -> Result<RouteConfiguration, Error> {
            Ok(RouteConfiguration::default())
        }
    }

    fn calling(service: &str) -> Invocation {
        Invocation {
            source_microservice: "productpage".into(),
            microservice_name: service.into(),
            ..Invocation::default()
        }
    }

    #[test]
    fn lb_policy_mapping() {
        for (policy, strategy) in [
            (LbPolicy::RoundRobin, Some(LoadBalancingStrategy::RoundRobin)),
            (LbPolicy::LeastRequest, Some(LoadBalancingStrategy::WeightedResponse)),
            (LbPolicy::Random, Some(LoadBalancingStrategy::Random)),
            (LbPolicy::RingHash, Some(LoadBalancingStrategy::SessionStickiness)),
            (LbPolicy::Maglev, Some(LoadBalancingStrategy::SessionStickiness)),
            (LbPolicy::OriginalDstLb, None),
            (LbPolicy::ClusterProvided, None),
        ] {
            assert_eq!(LoadBalancingStrategy::from_lb_policy(policy), strategy);
        }
        assert_eq!(LoadBalancingStrategy::WeightedResponse.to_string(), "WeightedResponse");
    }

    #[tokio::test]
    async fn load_balancing_of_the_called_service() {
        let panel = PilotPanel::new(FakeClient {
            clusters: Some(vec![
                cluster("BlackHoleCluster"),
                cluster_with_policy(
                    "outbound|9080||ratings.default.svc.cluster.local",
                    LbPolicy::Random,
                ),
                cluster_with_policy(
                    "outbound|9080|v1|reviews.default.svc.cluster.local",
                    LbPolicy::LeastRequest,
                ),
                cluster_with_policy(
                    "outbound|9080|v2|reviews.default.svc.cluster.local",
                    LbPolicy::RingHash,
                ),
            ]),
        });

        let config = panel.load_balancing(&calling("reviews")).await;

        assert_eq!(
            config,
            LoadBalancingConfig {
                strategy: Some(LoadBalancingStrategy::WeightedResponse),
                clusters: vec![
                    "outbound|9080|v1|reviews.default.svc.cluster.local".into(),
                    "outbound|9080|v2|reviews.default.svc.cluster.local".into(),
                ],
            }
        );
    }

    #[tokio::test]
    async fn unknown_service_gets_the_default() {
        let panel = PilotPanel::new(FakeClient {
            clusters: Some(vec![cluster("outbound|9080||ratings.default.svc.cluster.local")]),
        });

        assert_eq!(
            panel.load_balancing(&calling("details")).await,
            LoadBalancingConfig::default()
        );
    }

    #[tokio::test]
    #[traced_test]
    async fn errors_fall_back_to_the_default() {
        let panel = PilotPanel::new(FakeClient { clusters: None });

        assert!(panel.try_load_balancing(&calling("reviews")).await.is_err());
        assert_eq!(
            panel.load_balancing(&calling("reviews")).await,
            LoadBalancingConfig::default()
        );
        assert!(logs_contain("unable to read load balancing from pilot"));
    }

    #[tokio::test]
    async fn other_lookups_are_neutral() {
        let panel = PilotPanel::new(FakeClient { clusters: None });
        let invocation = calling("reviews");

        assert_eq!(
            panel.circuit_breaker(&invocation, ServiceType::Consumer).await,
            (String::new(), CircuitBreakerConfig::default())
        );
        assert_eq!(
            panel.rate_limiting(&invocation, ServiceType::Provider).await,
            RateLimitingConfig::default()
        );
        assert_eq!(panel.fault_injection(&invocation).await, FaultInjection::default());
        assert!(panel.egress_rules(&invocation).await.is_empty());
    }
}

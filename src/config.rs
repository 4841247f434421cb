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

//! Configuration for reaching Pilot.

use std::{fmt, io, str::FromStr, time::Duration};

use serde::{de::Visitor, Deserialize, Deserializer, Serialize, Serializer};
use tonic::transport::ClientTlsConfig;
use url::Url;

use crate::xds::{Credentials, DiscoveryChannel, Error, NodeIdentity};

/// How long to wait for a connection to Pilot to be established.
pub const CONNECTION_TIMEOUT: Duration = Duration::from_secs(5);
/// How long a whole discovery exchange may take.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
/// Largest discovery message sent or accepted, the gRPC default.
pub const DEFAULT_MAX_MESSAGE_SIZE: usize = 4 * 1024 * 1024;
/// Name of the TLS profile the chassis keeps the Pilot credentials under.
pub const ROUTER_TLS: &str = "router";

pub(crate) const BACKOFF_INITIAL_DELAY_MILLISECONDS: u64 = 500;
pub(crate) const BACKOFF_MAX_DELAY_SECONDS: u64 = 30;

const INSTANCE_IP_ENV: &str = "INSTANCE_IP";
const POD_NAME_ENV: &str = "POD_NAME";
const POD_NAMESPACE_ENV: &str = "POD_NAMESPACE";

/// Config is the configuration of an [`XdsClient`][crate::XdsClient].
///
/// ```yaml
/// endpoints: grpc://istio-pilot.istio-system:15010
/// node:
///   namespace: default
/// request_timeout: 2.5
/// ```
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub endpoints: Endpoints,
    #[serde(default)]
    pub node: NodeConfig,
    /// Seconds.
    #[serde(default = "default_connect_timeout", with = "seconds")]
    pub connect_timeout: Duration,
    /// Seconds.
    #[serde(default = "default_request_timeout", with = "seconds")]
    pub request_timeout: Duration,
    #[serde(default = "default_max_message_size")]
    pub max_message_size: usize,
    /// Extra attempts at connecting to each endpoint before the next one is
    /// tried.
    #[serde(default)]
    pub connect_retries: u32,
}

fn default_connect_timeout() -> Duration {
    CONNECTION_TIMEOUT
}

fn default_request_timeout() -> Duration {
    REQUEST_TIMEOUT
}

fn default_max_message_size() -> usize {
    DEFAULT_MAX_MESSAGE_SIZE
}

impl Config {
    pub fn new(endpoints: Endpoints) -> Self {
        Self {
            endpoints,
            node: NodeConfig::default(),
            connect_timeout: CONNECTION_TIMEOUT,
            request_timeout: REQUEST_TIMEOUT,
            max_message_size: DEFAULT_MAX_MESSAGE_SIZE,
            connect_retries: 0,
        }
    }

    /// from_reader returns a config from a given Reader
    pub fn from_reader<R: io::Read>(input: R) -> Result<Config, serde_yaml::Error> {
        serde_yaml::from_reader(input)
    }

    pub fn from_yaml(input: &str) -> Result<Config, serde_yaml::Error> {
        serde_yaml::from_str(input)
    }

    /// The credentials to connect with. `tls` must be provided when the
    /// endpoints use a secure scheme, and is ignored otherwise.
    pub fn credentials(&self, tls: Option<ClientTlsConfig>) -> Result<Credentials, Error> {
        match (self.endpoints.is_secure(), tls) {
            (false, _) => Ok(Credentials::Insecure),
            (true, Some(tls)) => Ok(Credentials::Tls(tls)),
            (true, None) => Err(Error::Config(format!(
                "`{}` requires a TLS configuration for the `{ROUTER_TLS}` profile",
                self.endpoints
            ))),
        }
    }

    /// A channel to the configured endpoints.
    pub fn channel(&self, tls: Option<ClientTlsConfig>) -> Result<DiscoveryChannel, Error> {
        Ok(
            DiscoveryChannel::new(self.endpoints.urls(), &self.credentials(tls)?)?
                .connect_timeout(self.connect_timeout)
                .max_message_size(self.max_message_size)
                .connect_retries(self.connect_retries),
        )
    }
}

/// The ordered control plane addresses.
///
/// Written either as one comma separated string or as a list. Addresses
/// without a scheme are plain text; every address must be either plain text
/// (`http`, `grpc`) or secure (`https`, `grpcs`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
    urls: Vec<Url>,
    secure: bool,
}

impl Endpoints {
    pub fn new<I, S>(addresses: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut urls = Vec::new();
        let mut secure = None;

        for address in addresses {
            let address = address.as_ref().trim();
            if address.is_empty() {
                continue;
            }

            let url = if address.contains("://") {
                Url::parse(address)
            } else {
                Url::parse(&format!("http://{address}"))
            }
            .map_err(|error| Error::Config(format!("invalid endpoint `{address}`: {error}")))?;

            let is_secure = matches!(url.scheme(), "https" | "grpcs");
            match secure {
                None => secure = Some(is_secure),
                Some(previous) if previous != is_secure => {
                    return Err(Error::Config(
                        "endpoints mix secure and plain text schemes".into(),
                    ))
                }
                Some(_) => {}
            }

            urls.push(url);
        }

        match secure {
            Some(secure) => Ok(Self { urls, secure }),
            None => Err(Error::Config("no control plane endpoints".into())),
        }
    }

    pub fn urls(&self) -> &[Url] {
        &self.urls
    }

    /// Whether the endpoints must be reached over TLS.
    pub fn is_secure(&self) -> bool {
        self.secure
    }
}

impl FromStr for Endpoints {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::new(value.split(','))
    }
}

impl fmt::Display for Endpoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, url) in self.urls.iter().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }
            f.write_str(url.as_str())?;
        }
        Ok(())
    }
}

impl Serialize for Endpoints {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.urls.iter().map(Url::as_str))
    }
}

impl<'de> Deserialize<'de> for Endpoints {
    fn deserialize<D>(deserializer: D) -> Result<Endpoints, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(EndpointsVisitor)
    }
}

/// EndpointsVisitor deserialises Endpoints from a comma separated string or
/// a list of strings.
struct EndpointsVisitor;

impl<'de> Visitor<'de> for EndpointsVisitor {
    type Value = Endpoints;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a comma separated string or a list of endpoints")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        v.parse().map_err(serde::de::Error::custom)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut addresses: Vec<String> = Vec::new();
        while let Some(address) = seq.next_element()? {
            addresses.push(address);
        }
        Endpoints::new(addresses).map_err(serde::de::Error::custom)
    }
}

/// The node identity, with any missing field taken from the pod environment.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct NodeConfig {
    pub instance_ip: Option<String>,
    pub pod_name: Option<String>,
    pub namespace: Option<String>,
}

impl NodeConfig {
    /// Fills missing fields from `INSTANCE_IP`, `POD_NAME` and
    /// `POD_NAMESPACE`.
    pub fn resolve(&self) -> Result<NodeIdentity, Error> {
        self.resolve_with(|name| std::env::var(name).ok())
    }

    pub fn resolve_with(
        &self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<NodeIdentity, Error> {
        let field = |value: &Option<String>, env: &str| {
            value
                .clone()
                .or_else(|| lookup(env))
                .filter(|value| !value.is_empty())
                .ok_or_else(|| Error::Config(format!("node identity is missing `{env}`")))
        };

        NodeIdentity::new(
            field(&self.instance_ip, INSTANCE_IP_ENV)?,
            field(&self.pod_name, POD_NAME_ENV)?,
            field(&self.namespace, POD_NAMESPACE_ENV)?,
        )
    }
}

mod seconds {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(duration.as_secs_f64())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let seconds = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(seconds).map_err(serde::de::Error::custom)
    }
}

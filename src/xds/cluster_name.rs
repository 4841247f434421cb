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

use std::{fmt, str::FromStr};

use crate::xds::Error;

const FIELD_SEPARATOR: char = '|';
const LABEL_SEPARATOR: char = '.';

/// A Pilot cluster name, `direction|port|subset|host`, split into its
/// fields. The host is `service.namespace[.domain.suffix...]`.
///
/// Fields are kept exactly as they appear in the name: nothing is trimmed or
/// case folded, so the full name can always be rebuilt with
/// [`fmt::Display`].
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ClusterKey {
    cluster_name: String,
    direction: String,
    port: String,
    subset: String,
    host_name: String,
    service_name: String,
    namespace: String,
    domain_suffix: String,
}

impl ClusterKey {
    pub fn parse(name: &str) -> Result<Self, Error> {
        let invalid = |reason| Error::InvalidName {
            name: name.to_owned(),
            reason,
        };

        let fields: Vec<&str> = name.split(FIELD_SEPARATOR).collect();
        let [direction, port, subset, host_name] = &fields[..] else {
            return Err(invalid("expected 4 `|` separated fields"));
        };

        let labels: Vec<&str> = host_name.split(LABEL_SEPARATOR).collect();
        let [service_name, namespace, suffix @ ..] = &labels[..] else {
            return Err(invalid("host name needs at least a service and a namespace"));
        };

        Ok(Self {
            cluster_name: name.to_owned(),
            direction: (*direction).to_owned(),
            port: (*port).to_owned(),
            subset: (*subset).to_owned(),
            host_name: (*host_name).to_owned(),
            service_name: (*service_name).to_owned(),
            namespace: (*namespace).to_owned(),
            domain_suffix: suffix.join("."),
        })
    }

    /// The full name this key was parsed from.
    pub fn cluster_name(&self) -> &str {
        &self.cluster_name
    }

    pub fn direction(&self) -> &str {
        &self.direction
    }

    pub fn port(&self) -> &str {
        &self.port
    }

    pub fn subset(&self) -> &str {
        &self.subset
    }

    pub fn host_name(&self) -> &str {
        &self.host_name
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Everything in the host name after the namespace, empty when the host
    /// is only `service.namespace`.
    pub fn domain_suffix(&self) -> &str {
        &self.domain_suffix
    }

    /// The name of the virtual host routing traffic for this cluster,
    /// `service:port`.
    pub fn virtual_host_selector(&self) -> String {
        format!("{}:{}", self.service_name, self.port)
    }
}

impl FromStr for ClusterKey {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::parse(name)
    }
}

impl fmt::Display for ClusterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}|{}|{}|{}",
            self.direction, self.port, self.subset, self.host_name
        )
    }
}

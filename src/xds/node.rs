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

use crate::xds::{api::core::Node, Error};

/// The role Pilot expects in the id of a sidecar node.
pub const SIDECAR_ROLE: &str = "sidecar";

const SEPARATOR: char = '~';
const USER_AGENT: &str = "pilot-xds";

/// Identifies this client to Pilot.
///
/// Pilot parses the node id as `role~ip~pod~namespace`, so none of the fields
/// may contain `~`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NodeIdentity {
    instance_ip: String,
    pod_name: String,
    namespace: String,
}

impl NodeIdentity {
    pub fn new(
        instance_ip: impl Into<String>,
        pod_name: impl Into<String>,
        namespace: impl Into<String>,
    ) -> Result<Self, Error> {
        let identity = Self {
            instance_ip: instance_ip.into(),
            pod_name: pod_name.into(),
            namespace: namespace.into(),
        };

        for (field, value) in [
            ("instance ip", &identity.instance_ip),
            ("pod name", &identity.pod_name),
            ("namespace", &identity.namespace),
        ] {
            if value.contains(SEPARATOR) {
                return Err(Error::InvalidNode {
                    field,
                    value: value.clone(),
                });
            }
        }

        Ok(identity)
    }

    pub fn instance_ip(&self) -> &str {
        &self.instance_ip
    }

    pub fn pod_name(&self) -> &str {
        &self.pod_name
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// `sidecar~{ip}~{pod}~{namespace}`
    pub fn id(&self) -> String {
        format!(
            "{SIDECAR_ROLE}{SEPARATOR}{}{SEPARATOR}{}{SEPARATOR}{}",
            self.instance_ip, self.pod_name, self.namespace
        )
    }

    /// The node cluster, which Pilot expects to be the pod name.
    pub fn cluster(&self) -> &str {
        &self.pod_name
    }

    /// The node sent with every discovery request.
    pub fn to_node(&self) -> Node {
        Node {
            id: self.id(),
            cluster: self.cluster().to_owned(),
            user_agent_name: USER_AGENT.into(),
            user_agent_version_type: Some(
                crate::xds::api::core::node::UserAgentVersionType::UserAgentVersion(
                    env!("CARGO_PKG_VERSION").into(),
                ),
            ),
            ..Node::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_id() {
        let identity = NodeIdentity::new("10.0.0.1", "app-7", "ns1").unwrap();

        assert_eq!(identity.id(), "sidecar~10.0.0.1~app-7~ns1");
        assert_eq!(identity.cluster(), "app-7");

        let node = identity.to_node();
        assert_eq!(node.id, "sidecar~10.0.0.1~app-7~ns1");
        assert_eq!(node.cluster, "app-7");
        assert_eq!(node.user_agent_name, "pilot-xds");
    }

    #[test]
    fn rejects_separator() {
        let error = NodeIdentity::new("10.0.0.1", "app~7", "ns1").unwrap_err();
        assert!(matches!(
            error,
            Error::InvalidNode {
                field: "pod name",
                ..
            }
        ));
        assert!(NodeIdentity::new("10.0.0.1~", "app", "ns1").is_err());
        assert!(NodeIdentity::new("10.0.0.1", "app", "~").is_err());
    }
}

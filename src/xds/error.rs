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

use crate::xds::{DecodeError, ResourceKind};

/// Errors returned by a discovery call.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The cluster name does not follow `direction|port|subset|host`.
    #[error("invalid cluster name `{name}`: {reason}")]
    InvalidName { name: String, reason: &'static str },

    /// The node identity cannot be encoded into a node id.
    #[error("invalid node {field} `{value}`: must not contain `~`")]
    InvalidNode { field: &'static str, value: String },

    /// A control plane address cannot be used to connect to.
    #[error("invalid endpoint `{endpoint}`: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("transport error talking to {endpoint}: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: TransportError,
    },

    /// Pilot answered with something other than what was asked for.
    #[error("protocol error: {0}")]
    Protocol(String),

    #[error("{kind} exchange timed out after {after:?}")]
    Timeout { kind: ResourceKind, after: Duration },

    /// None of the resources in the response decoded. `decode_errors` holds
    /// the reason each of them was skipped, and is empty when Pilot returned
    /// no resources at all.
    #[error("no {kind} resource found for `{name}` ({} failed to decode)", .decode_errors.len())]
    NotFound {
        kind: ResourceKind,
        name: String,
        decode_errors: Vec<DecodeError>,
    },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Whether replaying the same exchange can succeed. Replays are safe as the
    /// request carries the last acknowledged version and nonce.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Transport { .. } | Self::Protocol(_) | Self::Timeout { .. }
        )
    }

    /// Label for the `exchange_errors` metric, if this error fails an exchange.
    pub(crate) fn reason(&self) -> Option<&'static str> {
        match self {
            Self::Transport { .. } => Some("transport"),
            Self::Protocol(_) => Some("protocol"),
            Self::Timeout { .. } => Some("timeout"),
            _ => None,
        }
    }
}

/// The network level cause of [`Error::Transport`].
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("failed to connect: {0}")]
    Connect(#[source] tonic::transport::Error),

    #[error("stream failed: {0}")]
    Status(#[from] tonic::Status),

    #[error("request stream closed before the request was sent")]
    Closed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retryable() {
        let transport = Error::Transport {
            endpoint: "http://pilot:15010".into(),
            source: TransportError::Status(tonic::Status::unavailable("down")),
        };
        assert!(transport.is_retryable());
        assert!(Error::Protocol("wrong type".into()).is_retryable());
        assert!(Error::Timeout {
            kind: ResourceKind::Cluster,
            after: Duration::from_secs(1),
        }
        .is_retryable());

        assert!(!Error::InvalidName {
            name: "a|b".into(),
            reason: "expected 4 `|` separated fields",
        }
        .is_retryable());
        assert!(!Error::NotFound {
            kind: ResourceKind::Endpoint,
            name: "a".into(),
            decode_errors: Vec::new(),
        }
        .is_retryable());
    }

    #[test]
    fn not_found_mentions_decode_failures() {
        let error = Error::NotFound {
            kind: ResourceKind::Endpoint,
            name: "outbound|80||svc.ns".into(),
            decode_errors: Vec::new(),
        };
        assert_eq!(
            error.to_string(),
            "no eds resource found for `outbound|80||svc.ns` (0 failed to decode)"
        );
    }
}

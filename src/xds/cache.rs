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

use enum_map::EnumMap;
use tokio::sync::{Mutex, MutexGuard};

use crate::xds::ResourceKind;

/// The version and nonce of the last response accepted for a resource kind.
/// Both are empty until the first successful exchange.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SyncState {
    pub version_info: String,
    pub nonce: String,
}

/// Per [`ResourceKind`] [`SyncState`].
///
/// Every kind has its own lock. An exchange holds it from building the
/// request until the response has been accepted, so exchanges of one kind
/// are serialised while different kinds never wait on each other.
#[derive(Debug, Default)]
pub struct DiscoveryCache {
    states: EnumMap<ResourceKind, Mutex<SyncState>>,
}

impl DiscoveryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the current state of `kind`, waiting for any exchange
    /// of that kind in flight to finish.
    pub async fn get(&self, kind: ResourceKind) -> SyncState {
        self.states[kind].lock().await.clone()
    }

    pub async fn set(
        &self,
        kind: ResourceKind,
        version_info: impl Into<String>,
        nonce: impl Into<String>,
    ) {
        *self.states[kind].lock().await = SyncState {
            version_info: version_info.into(),
            nonce: nonce.into(),
        };
    }

    /// Enters the critical section of `kind`. The state may be read to build
    /// a request and written once the response is accepted; dropping the
    /// guard without writing leaves it untouched.
    pub async fn lock(&self, kind: ResourceKind) -> MutexGuard<'_, SyncState> {
        self.states[kind].lock().await
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn starts_empty() {
        let cache = DiscoveryCache::new();
        for kind in ResourceKind::VARIANTS {
            assert_eq!(cache.get(kind).await, SyncState::default());
        }
    }

    #[tokio::test]
    async fn kinds_are_independent() {
        let cache = DiscoveryCache::new();
        cache.set(ResourceKind::Cluster, "1", "a").await;

        assert_eq!(
            cache.get(ResourceKind::Cluster).await,
            SyncState {
                version_info: "1".into(),
                nonce: "a".into(),
            }
        );
        assert_eq!(cache.get(ResourceKind::Route).await, SyncState::default());
    }

    #[tokio::test]
    async fn lock_is_per_kind() {
        let cache = DiscoveryCache::new();
        let _cluster = cache.lock(ResourceKind::Cluster).await;

        // Another kind is still available.
        let listener = tokio::time::timeout(
            Duration::from_millis(100),
            cache.lock(ResourceKind::Listener),
        )
        .await;
        assert!(listener.is_ok());

        // The same kind is not.
        let cluster = tokio::time::timeout(
            Duration::from_millis(100),
            cache.get(ResourceKind::Cluster),
        )
        .await;
        assert!(cluster.is_err());
    }

    #[tokio::test]
    async fn dropping_the_guard_keeps_the_state() {
        let cache = DiscoveryCache::new();
        cache.set(ResourceKind::Endpoint, "3", "n3").await;

        {
            let state = cache.lock(ResourceKind::Endpoint).await;
            assert_eq!(state.version_info, "3");
        }

        assert_eq!(cache.get(ResourceKind::Endpoint).await.nonce, "n3");
    }
}

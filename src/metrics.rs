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

use once_cell::sync::{Lazy, OnceCell};
use prometheus::{Opts, Registry};

const NAMESPACE: &str = "pilot";

static REGISTRY: OnceCell<&'static Registry> = OnceCell::new();
static DEFAULT_REGISTRY: Lazy<Registry> = Lazy::new(Registry::new);

/// Sets the [`Registry`] that every metric in this crate is registered with.
///
/// Only the first call has any effect, and it must happen before the first
/// discovery exchange, otherwise the crate's own registry is used.
pub fn set_registry(registry: &'static Registry) {
    if REGISTRY.set(registry).is_err() {
        tracing::debug!("metrics registry already set, ignoring");
    }
}

/// Returns the [`Registry`] containing all the metrics registered by this crate.
#[inline]
pub fn registry() -> &'static Registry {
    REGISTRY.get_or_init(|| &*DEFAULT_REGISTRY)
}

pub fn opts(name: &str, subsystem: &str, description: &str) -> Opts {
    Opts::new(name, description)
        .namespace(NAMESPACE)
        .subsystem(subsystem)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opts_are_namespaced() {
        let opts = opts("discovery_requests", "xds", "help");
        assert_eq!(opts.fq_name(), "pilot_xds_discovery_requests");
    }

    #[test]
    fn registry_is_stable() {
        assert!(std::ptr::eq(registry(), registry()));
    }
}

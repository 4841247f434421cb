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

use once_cell::sync::Lazy;
use prometheus::{IntCounter, IntCounterVec};

use crate::{metrics::opts, xds::ResourceKind};

pub(crate) const SUBSYSTEM: &str = "xds";
pub(crate) const TYPE_LABEL: &str = "type";
pub(crate) const REASON_LABEL: &str = "reason";

pub(crate) fn discovery_requests(kind: ResourceKind) -> IntCounter {
    static DISCOVERY_REQUESTS: Lazy<IntCounterVec> = Lazy::new(|| {
        prometheus::register_int_counter_vec_with_registry! {
            opts(
                "discovery_requests",
                SUBSYSTEM,
                "Total number of xDS discovery requests sent to Pilot",
            ),
            &[TYPE_LABEL],
            crate::metrics::registry(),
        }
        .unwrap()
    });

    DISCOVERY_REQUESTS.with_label_values(&[kind.label()])
}

pub(crate) fn discovery_responses(kind: ResourceKind) -> IntCounter {
    static DISCOVERY_RESPONSES: Lazy<IntCounterVec> = Lazy::new(|| {
        prometheus::register_int_counter_vec_with_registry! {
            opts(
                "discovery_responses",
                SUBSYSTEM,
                "Total number of xDS discovery responses accepted from Pilot",
            ),
            &[TYPE_LABEL],
            crate::metrics::registry(),
        }
        .unwrap()
    });

    DISCOVERY_RESPONSES.with_label_values(&[kind.label()])
}

pub(crate) fn decode_failures(kind: ResourceKind) -> IntCounter {
    static DECODE_FAILURES: Lazy<IntCounterVec> = Lazy::new(|| {
        prometheus::register_int_counter_vec_with_registry! {
            opts(
                "decode_failures",
                SUBSYSTEM,
                "Total number of resources skipped because they could not be decoded",
            ),
            &[TYPE_LABEL],
            crate::metrics::registry(),
        }
        .unwrap()
    });

    DECODE_FAILURES.with_label_values(&[kind.label()])
}

pub(crate) fn exchange_errors(kind: ResourceKind, reason: &str) -> IntCounter {
    static EXCHANGE_ERRORS: Lazy<IntCounterVec> = Lazy::new(|| {
        prometheus::register_int_counter_vec_with_registry! {
            opts(
                "exchange_errors",
                SUBSYSTEM,
                "Total number of discovery exchanges that failed",
            ),
            &[TYPE_LABEL, REASON_LABEL],
            crate::metrics::registry(),
        }
        .unwrap()
    });

    EXCHANGE_ERRORS.with_label_values(&[kind.label(), reason])
}

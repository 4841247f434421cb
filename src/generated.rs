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

//! Checked-in protobuf bindings for the subset of the Envoy v2 API spoken with
//! Pilot.

// We don't control the codegen, so disable any code warnings in the
// proto modules.
#[allow(warnings, clippy::all)]
pub mod envoy {
    pub mod api {
        pub mod v2 {
            include!("generated/envoy/api/v2.rs");

            pub mod cluster {
                include!("generated/envoy/api/v2/cluster.rs");
            }
            pub mod core {
                include!("generated/envoy/api/v2/core.rs");
            }
            pub mod endpoint {
                include!("generated/envoy/api/v2/endpoint.rs");
            }
            pub mod listener {
                include!("generated/envoy/api/v2/listener.rs");
            }
            pub mod route {
                include!("generated/envoy/api/v2/route.rs");
            }
        }
    }
    pub mod service {
        pub mod discovery {
            pub mod v2 {
                include!("generated/envoy/service/discovery/v2.rs");
            }
        }
    }
}

#[allow(warnings, clippy::all)]
pub mod google {
    pub mod rpc {
        #![doc(hidden)]
        include!("generated/google/rpc.rs");
    }
}

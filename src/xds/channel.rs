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

use std::{sync::Arc, time::Duration};

use tokio::sync::mpsc;
use tonic::transport::{Channel as TonicChannel, ClientTlsConfig, Endpoint};
use tracing::Instrument;
use tryhard::RetryFutureConfig;

use crate::{
    config::{
        BACKOFF_INITIAL_DELAY_MILLISECONDS, BACKOFF_MAX_DELAY_SECONDS, CONNECTION_TIMEOUT,
        DEFAULT_MAX_MESSAGE_SIZE,
    },
    xds::{
        api::{DiscoveryRequest, DiscoveryResponse},
        discovery::aggregated_discovery_service_client::AggregatedDiscoveryServiceClient,
        Error, TransportError,
    },
};

type AdsGrpcClient = AggregatedDiscoveryServiceClient<TonicChannel>;

/// How the connection to Pilot is secured.
#[derive(Clone, Debug, Default)]
pub enum Credentials {
    #[default]
    Insecure,
    Tls(ClientTlsConfig),
}

/// Something that can perform one discovery round trip with Pilot.
#[async_trait::async_trait]
pub trait DiscoveryTransport: Send + Sync {
    /// Sends `request` and returns the first response to it.
    async fn exchange(&self, request: DiscoveryRequest) -> Result<DiscoveryResponse, Error>;
}

/// The control plane addresses and how to reach them.
///
/// No connection is held: [`DiscoveryChannel::open`] dials a new one each
/// time, trying every address in order.
#[derive(Clone, Debug)]
pub struct DiscoveryChannel {
    endpoints: Vec<Endpoint>,
    max_message_size: usize,
    connect_retries: u32,
}

impl DiscoveryChannel {
    /// Creates a channel to `addresses`, which must have a scheme and a host.
    /// `grpc` and `grpcs` schemes are treated as `http` and `https`.
    pub fn new<'a>(
        addresses: impl IntoIterator<Item = &'a url::Url>,
        credentials: &Credentials,
    ) -> Result<Self, Error> {
        let endpoints = addresses
            .into_iter()
            .map(|address| endpoint(address, credentials))
            .collect::<Result<Vec<_>, _>>()?;

        if endpoints.is_empty() {
            return Err(Error::Config("no control plane endpoints".into()));
        }

        Ok(Self {
            endpoints: endpoints
                .into_iter()
                .map(|endpoint| endpoint.connect_timeout(CONNECTION_TIMEOUT))
                .collect(),
            max_message_size: DEFAULT_MAX_MESSAGE_SIZE,
            connect_retries: 0,
        })
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.endpoints = self
            .endpoints
            .into_iter()
            .map(|endpoint| endpoint.connect_timeout(timeout))
            .collect();
        self
    }

    /// Limits the size of encoded and decoded discovery messages.
    pub fn max_message_size(mut self, limit: usize) -> Self {
        self.max_message_size = limit;
        self
    }

    /// How many more times each endpoint is dialled, with exponential backoff,
    /// before moving on to the next one. Defaults to 0.
    pub fn connect_retries(mut self, retries: u32) -> Self {
        self.connect_retries = retries;
        self
    }

    /// Opens a new connection to the first endpoint that accepts one.
    pub async fn open(&self) -> Result<Connection, Error> {
        let mut last_error = None;

        for endpoint in &self.endpoints {
            let uri = endpoint.uri().to_string();
            let config = RetryFutureConfig::new(self.connect_retries)
                .exponential_backoff(Duration::from_millis(BACKOFF_INITIAL_DELAY_MILLISECONDS))
                .max_delay(Duration::from_secs(BACKOFF_MAX_DELAY_SECONDS));

            let result = tryhard::retry_fn(move || endpoint.connect())
                .with_config(config)
                .instrument(tracing::debug_span!("AggregatedDiscoveryServiceClient::connect", %uri))
                .await;

            match result {
                Ok(channel) => {
                    tracing::debug!(%uri, "connected to pilot");
                    let client = AdsGrpcClient::new(channel)
                        .max_decoding_message_size(self.max_message_size)
                        .max_encoding_message_size(self.max_message_size);
                    return Ok(Connection {
                        client,
                        endpoint: uri.into(),
                    });
                }
                Err(error) => {
                    tracing::warn!(%uri, %error, "unable to connect to pilot");
                    last_error = Some(Error::Transport {
                        endpoint: uri,
                        source: TransportError::Connect(error),
                    });
                }
            }
        }

        Err(last_error.unwrap_or_else(|| Error::Config("no control plane endpoints".into())))
    }
}

#[async_trait::async_trait]
impl DiscoveryTransport for DiscoveryChannel {
    async fn exchange(&self, request: DiscoveryRequest) -> Result<DiscoveryResponse, Error> {
        let mut stream = self.open().await?.stream();
        stream.send(request).await?;
        let response = stream.receive().await;
        stream.close();
        response
    }
}

fn endpoint(address: &url::Url, credentials: &Credentials) -> Result<Endpoint, Error> {
    let invalid = |reason: &str| Error::InvalidEndpoint {
        endpoint: address.to_string(),
        reason: reason.into(),
    };

    let scheme = match address.scheme() {
        "http" | "grpc" => "http",
        "https" | "grpcs" => "https",
        _ => return Err(invalid("scheme must be one of http, https, grpc or grpcs")),
    };
    let host = address.host_str().ok_or_else(|| invalid("no host provided"))?;
    let port = address
        .port_or_known_default()
        .ok_or_else(|| invalid("no port provided"))?;

    let endpoint = Endpoint::from_shared(format!("{scheme}://{host}:{port}"))
        .map_err(|error| invalid(&error.to_string()))?;

    match credentials {
        Credentials::Insecure => Ok(endpoint),
        Credentials::Tls(tls) => endpoint
            .tls_config(tls.clone())
            .map_err(|error| invalid(&error.to_string())),
    }
}

/// An open connection to one Pilot instance.
pub struct Connection {
    client: AdsGrpcClient,
    endpoint: Arc<str>,
}

impl Connection {
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Prepares an aggregated discovery stream on this connection. The
    /// stream is started by the first [`AdsStream::send`].
    pub fn stream(self) -> AdsStream {
        let (requests, pending) = mpsc::channel(1);
        AdsStream {
            client: self.client,
            endpoint: self.endpoint,
            requests,
            pending: Some(pending),
            responses: None,
        }
    }
}

/// One `StreamAggregatedResources` call.
pub struct AdsStream {
    client: AdsGrpcClient,
    endpoint: Arc<str>,
    requests: mpsc::Sender<DiscoveryRequest>,
    pending: Option<mpsc::Receiver<DiscoveryRequest>>,
    responses: Option<tonic::Streaming<DiscoveryResponse>>,
}

impl AdsStream {
    pub async fn send(&mut self, request: DiscoveryRequest) -> Result<(), Error> {
        // The request is queued before the call starts, as some servers only
        // send response headers once they have seen the first request.
        self.requests
            .send(request)
            .await
            .map_err(|_| self.transport_error(TransportError::Closed))?;

        if let Some(pending) = self.pending.take() {
            let responses = self
                .client
                .stream_aggregated_resources(tokio_stream::wrappers::ReceiverStream::new(pending))
                .in_current_span()
                .await
                .map_err(|status| self.transport_error(status.into()))?
                .into_inner();
            self.responses = Some(responses);
        }

        Ok(())
    }

    pub async fn receive(&mut self) -> Result<DiscoveryResponse, Error> {
        let Some(responses) = self.responses.as_mut() else {
            return Err(Error::Protocol(
                "no request has been sent on this stream".into(),
            ));
        };

        match responses.message().await {
            Ok(Some(response)) => Ok(response),
            Ok(None) => Err(Error::Protocol(format!(
                "{} closed the stream without a response",
                self.endpoint
            ))),
            Err(status) => Err(self.transport_error(status.into())),
        }
    }

    /// Ends the stream and closes the connection.
    pub fn close(self) {
        tracing::trace!(endpoint = %self.endpoint, "closing discovery stream");
    }

    fn transport_error(&self, source: TransportError) -> Error {
        Error::Transport {
            endpoint: self.endpoint.to_string(),
            source,
        }
    }
}

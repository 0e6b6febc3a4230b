//! HTTP client for the REST interface

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use shared::error::ApiResponse;
use shared::{
    AvailabilityParams, AvailabilityResponse, CancelResponse, CreateReservationRequest,
    Reservation, ReservationCreated,
};

/// HTTP client for making network requests to the reservation service
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    config: ClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    async fn send<T: DeserializeOwned>(request: RequestBuilder) -> ClientResult<T> {
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return match serde_json::from_str::<ApiResponse<()>>(&text)
                .ok()
                .and_then(ApiResponse::into_error)
            {
                Some(err) => Err(ClientError::Api(err)),
                None => Err(ClientError::InvalidResponse(format!("HTTP {status}: {text}"))),
            };
        }

        serde_json::from_str(&text).map_err(Into::into)
    }

    // ========== Service ==========

    /// GET /health
    pub async fn health(&self) -> ClientResult<serde_json::Value> {
        Self::send(self.client.get(self.config.url("/health"))).await
    }

    // ========== Reservations ==========

    /// GET /api/availability
    pub async fn availability(&self, params: &AvailabilityParams) -> ClientResult<AvailabilityResponse> {
        Self::send(self.client.get(self.config.url("/api/availability")).query(params)).await
    }

    /// POST /api/reservations
    pub async fn create_reservation(
        &self,
        request: &CreateReservationRequest,
    ) -> ClientResult<ReservationCreated> {
        Self::send(self.client.post(self.config.url("/api/reservations")).json(request)).await
    }

    /// GET /api/reservations/{id}
    pub async fn get_reservation(&self, id: &str) -> ClientResult<Reservation> {
        let path = format!("/api/reservations/{id}");
        Self::send(self.client.get(self.config.url(&path))).await
    }

    /// DELETE /api/reservations/{id}
    pub async fn cancel_reservation(&self, id: &str) -> ClientResult<CancelResponse> {
        let path = format!("/api/reservations/{id}");
        Self::send(self.client.delete(self.config.url(&path))).await
    }

    /// POST /api/integration/reservations (server forwards over SOAP)
    pub async fn create_reservation_via_integration(
        &self,
        request: &CreateReservationRequest,
    ) -> ClientResult<ReservationCreated> {
        Self::send(
            self.client
                .post(self.config.url("/api/integration/reservations"))
                .json(request),
        )
        .await
    }
}

use gloo_net::http::Request;
use log::info;
use thiserror::Error;

use super::PendingSubmission;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DeliveryError {
    #[error("could not reach the inquiry endpoint: {0}")]
    Network(String),
    #[error("inquiry endpoint answered with status {0}")]
    Rejected(u16),
    #[error("could not encode the inquiry: {0}")]
    Encode(String),
}

/// Sends a pending inquiry as JSON. Any 2xx answer counts as delivered.
pub async fn deliver(pending: &PendingSubmission) -> Result<(), DeliveryError> {
    let request = Request::post(&pending.endpoint)
        .header("Content-Type", "application/json")
        .json(&pending.fields)
        .map_err(|e| DeliveryError::Encode(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| DeliveryError::Network(e.to_string()))?;

    if response.ok() {
        info!("inquiry delivered to {}", pending.endpoint);
        Ok(())
    } else {
        Err(DeliveryError::Rejected(response.status()))
    }
}

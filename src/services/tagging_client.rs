use std::time::Duration;

use reqwest::{Client, multipart};
use serde::Deserialize;
use thiserror::Error;

use crate::services::tagging::RawTag;

/// The single outbound call is bounded by this timeout; on expiry the whole
/// upload request fails. No retries.
const GATEWAY_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("tagging gateway request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("tagging gateway returned {status}: {body}")]
    Api { status: u16, body: String },
}

#[derive(Debug, Deserialize)]
struct TaggingResponse {
    result: TaggingResult,
}

#[derive(Debug, Deserialize)]
struct TaggingResult {
    tags: Vec<RawTag>,
}

/// HTTP client for the third-party tagging API. Submits the raw image as a
/// basic-authenticated multipart POST and returns the candidate tags.
pub struct TaggingClient {
    client: Client,
    api_url: String,
    api_key: String,
    api_secret: String,
}

impl TaggingClient {
    pub fn new(
        api_url: String,
        api_key: String,
        api_secret: String,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(GATEWAY_TIMEOUT).build()?;
        Ok(Self {
            client,
            api_url,
            api_key,
            api_secret,
        })
    }

    pub async fn tag_image(
        &self,
        image_data: Vec<u8>,
        filename: &str,
        mime_type: &str,
        language: &str,
    ) -> Result<Vec<RawTag>, GatewayError> {
        let part = multipart::Part::bytes(image_data)
            .file_name(filename.to_owned())
            .mime_str(mime_type)?;
        let form = multipart::Form::new().part("image", part);

        let response = self
            .client
            .post(&self.api_url)
            .basic_auth(&self.api_key, Some(&self.api_secret))
            .query(&[("language", language)])
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(GatewayError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let payload: TaggingResponse = response.json().await?;
        Ok(payload.result.tags)
    }
}

/*
 * Copyright (c) Huawei Technologies Co., Ltd. 2025. All rights reserved.
 * Integrity Gateway is licensed under the Mulan PSL v2.
 * You can use this software according to the terms and conditions of the Mulan PSL v2.
 * You may obtain a copy of Mulan PSL v2 at:
 *     http://license.coscl.org.cn/MulanPSL2
 * THIS SOFTWARE IS PROVIDED ON AN "AS IS" BASIS, WITHOUT WARRANTIES OF ANY KIND, EITHER EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO NON-INFRINGEMENT, MERCHANTABILITY OR FIT FOR A PARTICULAR
 * PURPOSE.
 * See the Mulan PSL v2 for more details.
 */

use std::time::Duration;

use async_trait::async_trait;
use credential::BearerCredential;
use log::{debug, error};
use mockall::automock;
use serde_json::json;

use crate::constants::ATTESTATION_API_BASE_URL;
use crate::entity::{DecodeIntegrityTokenResponse, IntegrityVerdict};
use crate::error::VerdictError;

const ATTESTATION_CONNECTION_TIMEOUT: u64 = 60; // Attestation service timeout in seconds

/// Capability to trade one attestation token for a decoded integrity verdict.
#[automock]
#[async_trait]
pub trait AttestationClient: Send + Sync {
    async fn decode_integrity_token(
        &self,
        package_name: &str,
        integrity_token: &str,
        credential: &BearerCredential,
    ) -> Result<IntegrityVerdict, VerdictError>;
}

/// Client for the Play Integrity `decodeIntegrityToken` endpoint.
pub struct PlayIntegrityClient {
    base_url: String,
    client: reqwest::Client,
}

impl PlayIntegrityClient {
    /// Builds a client against the public attestation host.
    ///
    /// # Errors
    ///
    /// * `VerdictError::Network` - if the HTTP client cannot be built
    pub fn new() -> Result<Self, VerdictError> {
        Self::with_base_url(ATTESTATION_API_BASE_URL)
    }

    /// Builds a client against a non-default host, for deployments that
    /// reach the attestation service through a forward proxy.
    pub fn with_base_url(base_url: &str) -> Result<Self, VerdictError> {
        let client =
            reqwest::Client::builder().timeout(Duration::from_secs(ATTESTATION_CONNECTION_TIMEOUT)).build().map_err(
                |e| {
                    error!("failed to build attestation client: {}", e);
                    VerdictError::Network(e.to_string())
                },
            )?;
        Ok(Self { base_url: base_url.trim_end_matches('/').to_string(), client })
    }

    fn decode_url(&self, package_name: &str) -> String {
        format!("{}/v1/{}:decodeIntegrityToken", self.base_url, package_name)
    }
}

#[async_trait]
impl AttestationClient for PlayIntegrityClient {
    /// Posts the attestation token under bearer authentication and unwraps
    /// the verdict envelope.
    ///
    /// # Errors
    ///
    /// * `VerdictError::Network` - if the service is unreachable or times out
    /// * `VerdictError::ServiceStatus` - if the service answers with a non-success status
    /// * `VerdictError::VerdictDecode` - if the body does not decode into a verdict
    async fn decode_integrity_token(
        &self,
        package_name: &str,
        integrity_token: &str,
        credential: &BearerCredential,
    ) -> Result<IntegrityVerdict, VerdictError> {
        let url = self.decode_url(package_name);
        debug!("Requesting verdict decode for package {}", package_name);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&credential.access_token)
            .json(&json!({ "integrity_token": integrity_token }))
            .send()
            .await
            .map_err(|e| {
                error!("attestation service request failed: {}", e);
                VerdictError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            error!("attestation service returned status {}", status);
            return Err(VerdictError::ServiceStatus(status.as_u16()));
        }

        let decoded = response.json::<DecodeIntegrityTokenResponse>().await.map_err(|e| {
            error!("integrity verdict could not be decoded: {}", e);
            VerdictError::VerdictDecode(e.to_string())
        })?;
        Ok(decoded.token_payload_external)
    }
}

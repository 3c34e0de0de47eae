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

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use log::{debug, error, info};
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::entities::{BearerCredential, ServiceCredentials};
use crate::error::CredentialError;

const EXCHANGE_CONNECTION_TIMEOUT: u64 = 60; // Token endpoint timeout in seconds
const JWT_BEARER_GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_LIFETIME_SECS: u64 = 3600;

/// Capability to exchange long-lived service credentials for a short-lived
/// bearer credential scoped to one downstream API. The credential is minted
/// fresh per call and never cached here.
#[automock]
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    async fn access_token(&self, scope: &str) -> Result<BearerCredential, CredentialError>;
}

#[derive(Debug, Serialize, Deserialize)]
struct AssertionClaims {
    iss: String,
    scope: String,
    aud: String,
    iat: u64,
    exp: u64,
}

/// Exchanges a Google service account for an OAuth2 access token through the
/// JWT-bearer grant: an RS256-signed assertion is posted as a form to the
/// account's token endpoint.
pub struct GoogleCredentialProvider {
    credentials: ServiceCredentials,
    signing_key: EncodingKey,
    client: reqwest::Client,
}

impl GoogleCredentialProvider {
    /// Builds a provider from parsed service credentials.
    ///
    /// # Arguments
    ///
    /// * `credentials` - validated service-account material
    ///
    /// # Returns
    ///
    /// * `Result<GoogleCredentialProvider, CredentialError>` - a provider ready to exchange
    ///
    /// # Errors
    ///
    /// * `CredentialError::InvalidCredentials` - if the private key is not a usable RSA PEM
    /// * `CredentialError::NetworkError` - if the HTTP client cannot be built
    pub fn new(credentials: ServiceCredentials) -> Result<Self, CredentialError> {
        let signing_key = EncodingKey::from_rsa_pem(credentials.private_key.as_bytes()).map_err(|e| {
            error!("service account private key is not a usable RSA PEM: {}", e);
            CredentialError::InvalidCredentials(String::from("private_key is not a usable RSA PEM"))
        })?;
        let client =
            reqwest::Client::builder().timeout(Duration::from_secs(EXCHANGE_CONNECTION_TIMEOUT)).build().map_err(
                |e| {
                    error!("failed to build token endpoint client: {}", e);
                    CredentialError::NetworkError(e.to_string())
                },
            )?;
        Ok(Self { credentials, signing_key, client })
    }

    fn build_claims(&self, scope: &str, issued_at: u64) -> AssertionClaims {
        AssertionClaims {
            iss: self.credentials.client_email.clone(),
            scope: scope.to_string(),
            aud: self.credentials.token_uri.clone(),
            iat: issued_at,
            exp: issued_at.saturating_add(ASSERTION_LIFETIME_SECS),
        }
    }

    fn sign_assertion(&self, scope: &str) -> Result<String, CredentialError> {
        let issued_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| {
                error!("failed to get system time: {}", e);
                CredentialError::AssertionError(e.to_string())
            })?
            .as_secs();
        let claims = self.build_claims(scope, issued_at);
        encode(&Header::new(Algorithm::RS256), &claims, &self.signing_key).map_err(|e| {
            error!("failed to sign credential assertion: {}", e);
            CredentialError::AssertionError(e.to_string())
        })
    }
}

#[async_trait]
impl CredentialProvider for GoogleCredentialProvider {
    /// Performs one exchange against the token endpoint and returns the
    /// minted bearer credential.
    ///
    /// # Errors
    ///
    /// * `CredentialError::AssertionError` - if the assertion cannot be signed
    /// * `CredentialError::NetworkError` - if the endpoint is unreachable
    /// * `CredentialError::ExchangeRefused` - if the endpoint answers with a non-success status
    /// * `CredentialError::DecodeError` - if the response body is not a token response
    async fn access_token(&self, scope: &str) -> Result<BearerCredential, CredentialError> {
        let assertion = self.sign_assertion(scope)?;
        debug!("Exchanging credential assertion at {}", self.credentials.token_uri);
        let response = self
            .client
            .post(&self.credentials.token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT_TYPE), ("assertion", assertion.as_str())])
            .send()
            .await
            .map_err(|e| {
                error!("token endpoint request failed: {}", e);
                CredentialError::NetworkError(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("token endpoint refused the exchange, status {}: {}", status, body);
            return Err(CredentialError::ExchangeRefused(status.as_u16()));
        }

        let credential = response.json::<BearerCredential>().await.map_err(|e| {
            error!("token endpoint response could not be decoded: {}", e);
            CredentialError::DecodeError(e.to_string())
        })?;
        info!("Obtained bearer credential, expires in {}s", credential.expires_in);
        Ok(credential)
    }
}

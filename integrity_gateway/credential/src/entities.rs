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

use log::error;
use serde::Deserialize;
use validator::Validate;

use crate::error::CredentialError;

/// Long-lived service-account material, read once from the deployment
/// environment. Only the fields the exchange needs are kept; the rest of the
/// service-account document is ignored.
#[derive(Clone, Debug, Deserialize, Validate)]
pub struct ServiceCredentials {
    /// Issuing principal named in the signed assertion.
    #[validate(email)]
    pub client_email: String,
    /// RSA signing key in PEM form. Never logged.
    #[validate(length(min = 1))]
    pub private_key: String,
    /// OAuth2 token endpoint the assertion is posted to.
    #[validate(url)]
    pub token_uri: String,
}

impl ServiceCredentials {
    /// Parses and validates a service-account JSON document.
    ///
    /// # Arguments
    ///
    /// * `document` - the JSON document provided by the deployment environment
    ///
    /// # Returns
    ///
    /// * `Result<ServiceCredentials, CredentialError>` - the validated credentials
    ///
    /// # Errors
    ///
    /// * `CredentialError::InvalidCredentials` - if the document is not valid
    ///   JSON or a required field fails validation
    pub fn from_json(document: &str) -> Result<Self, CredentialError> {
        let credentials: ServiceCredentials = serde_json::from_str(document).map_err(|e| {
            error!("service credentials document is not valid JSON: {}", e);
            CredentialError::InvalidCredentials(format!("malformed document: {}", e))
        })?;
        credentials.validate()?;
        Ok(credentials)
    }
}

/// Short-lived access token minted by the token endpoint. Held for the
/// duration of one request, then dropped.
#[derive(Clone, Debug, Deserialize)]
pub struct BearerCredential {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    /// Remaining validity in seconds, as reported by the endpoint.
    #[serde(default)]
    pub expires_in: u64,
}

fn default_token_type() -> String {
    String::from("Bearer")
}

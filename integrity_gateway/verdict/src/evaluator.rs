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

use std::sync::Arc;

use credential::CredentialProvider;
use log::{error, info};

use crate::client::AttestationClient;
use crate::constants::PLAY_INTEGRITY_SCOPE;
use crate::entity::IntegrityVerdict;
use crate::error::VerdictError;
use crate::policy::{TrustDecision, VerdictPolicy};

/// Drives one evaluation end to end: exchange the service credentials for a
/// bearer credential, trade the attestation token for a verdict, reduce the
/// verdict to a decision. The two collaborators are injected so the pipeline
/// runs against deterministic fakes in tests.
pub struct VerdictEvaluator {
    credential_provider: Arc<dyn CredentialProvider>,
    attestation_client: Arc<dyn AttestationClient>,
    package_name: String,
}

impl VerdictEvaluator {
    pub fn new(
        credential_provider: Arc<dyn CredentialProvider>,
        attestation_client: Arc<dyn AttestationClient>,
        package_name: String,
    ) -> Self {
        Self { credential_provider, attestation_client, package_name }
    }

    /// Evaluates one attestation token.
    ///
    /// A rejected verdict is a *successful* evaluation: it comes back as
    /// `Ok(TrustDecision::Rejected)` with the full verdict already written to
    /// the diagnostic log. An `Err` means the evaluation itself could not
    /// finish.
    ///
    /// # Arguments
    ///
    /// * `attestation_token` - the opaque token supplied by the client app
    ///
    /// # Errors
    ///
    /// * `VerdictError::CredentialExchange` - the bearer credential could not be obtained
    /// * `VerdictError::Network` / `VerdictError::ServiceStatus` /
    ///   `VerdictError::VerdictDecode` - the attestation service call failed
    pub async fn evaluate(&self, attestation_token: &str) -> Result<TrustDecision, VerdictError> {
        let credential = self.credential_provider.access_token(PLAY_INTEGRITY_SCOPE).await?;
        let verdict =
            self.attestation_client.decode_integrity_token(&self.package_name, attestation_token, &credential).await?;
        match VerdictPolicy::evaluate(&verdict) {
            TrustDecision::Accepted => {
                info!("Verdict accepted for package {}", self.package_name);
                Ok(TrustDecision::Accepted)
            },
            TrustDecision::Rejected => {
                self.log_rejected(&verdict);
                Ok(TrustDecision::Rejected)
            },
        }
    }

    // Operators diagnose false negatives from this record; never drop the
    // verdict silently.
    fn log_rejected(&self, verdict: &IntegrityVerdict) {
        let rendered = serde_json::to_string(verdict).unwrap_or_else(|_| format!("{:?}", verdict));
        error!(
            "Verdict rejected for package {}, failed checks [{}]: {}",
            self.package_name,
            VerdictPolicy::failed_checks(verdict).join(", "),
            rendered
        );
    }
}

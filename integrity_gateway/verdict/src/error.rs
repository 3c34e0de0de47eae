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

use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use credential::CredentialError;
use log::error;
use thiserror::Error;

// The status code carries the whole signal, the body text is not a contract.
const ERROR_BODY: &str = "Error";

mod error_codes {
    pub const MISSING_TOKEN: u16 = 30001;
    pub const CREDENTIAL_EXCHANGE: u16 = 30002;
    pub const ATTESTATION_NETWORK: u16 = 30003;
    pub const ATTESTATION_STATUS: u16 = 30004;
    pub const VERDICT_DECODE: u16 = 30005;
}

/// Failures along the evaluation pipeline. A rejected verdict is not an
/// error; it travels back as a decision.
#[derive(Error, Debug)]
pub enum VerdictError {
    #[error("attestation token is missing from the request")]
    MissingToken,

    #[error("credential exchange failed: {0}")]
    CredentialExchange(#[from] CredentialError),

    #[error("attestation service request failed: {0}")]
    Network(String),

    #[error("attestation service returned status {0}")]
    ServiceStatus(u16),

    #[error("integrity verdict could not be decoded: {0}")]
    VerdictDecode(String),
}

impl VerdictError {
    /// Stable per-variant code, logged so that operators can separate client
    /// defects, exchange failures, and attestation service failures.
    pub fn error_code(&self) -> u16 {
        match self {
            Self::MissingToken => error_codes::MISSING_TOKEN,
            Self::CredentialExchange(_) => error_codes::CREDENTIAL_EXCHANGE,
            Self::Network(_) => error_codes::ATTESTATION_NETWORK,
            Self::ServiceStatus(_) => error_codes::ATTESTATION_STATUS,
            Self::VerdictDecode(_) => error_codes::VERDICT_DECODE,
        }
    }
}

impl ResponseError for VerdictError {
    // Every pipeline failure closes the gate; callers only ever learn 401.
    fn status_code(&self) -> StatusCode {
        StatusCode::UNAUTHORIZED
    }

    fn error_response(&self) -> HttpResponse {
        error!("attestation request failed, code {}: {}", self.error_code(), self);
        HttpResponse::build(self.status_code()).insert_header(ContentType::plaintext()).body(ERROR_BODY)
    }
}

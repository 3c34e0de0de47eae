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

use thiserror::Error;
use validator::ValidationErrors;

/// Failures while exchanging service credentials for a bearer credential.
#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("service credentials are invalid: {0}")]
    InvalidCredentials(String),

    #[error("failed to sign credential assertion: {0}")]
    AssertionError(String),

    #[error("token endpoint request failed: {0}")]
    NetworkError(String),

    #[error("token endpoint refused the exchange, status {0}")]
    ExchangeRefused(u16),

    #[error("token endpoint response could not be decoded: {0}")]
    DecodeError(String),
}

// Only field names are reported, credential values must never travel in an
// error message.
impl From<ValidationErrors> for CredentialError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors.field_errors().keys().map(|field| field.to_string()).collect();
        fields.sort_unstable();
        CredentialError::InvalidCredentials(format!("invalid fields: {}", fields.join(", ")))
    }
}

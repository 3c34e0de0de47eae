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

mod client;
mod constants;
mod entity;
mod error;
mod evaluator;
mod policy;

pub use crate::client::{AttestationClient, MockAttestationClient, PlayIntegrityClient};
pub use crate::constants::PLAY_INTEGRITY_SCOPE;
pub use crate::entity::{
    AccountDetails, AppIntegrity, DecodeIntegrityTokenResponse, DeviceIntegrity, IntegrityVerdict, RequestDetails,
    TokenRequest,
};
pub use crate::error::VerdictError;
pub use crate::evaluator::VerdictEvaluator;
pub use crate::policy::{TrustDecision, VerdictPolicy};

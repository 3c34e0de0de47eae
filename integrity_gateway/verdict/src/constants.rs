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

// OAuth2 scope required by the attestation API
pub const PLAY_INTEGRITY_SCOPE: &str = "https://www.googleapis.com/auth/playintegrity";

// Public attestation service host
pub const ATTESTATION_API_BASE_URL: &str = "https://playintegrity.googleapis.com";

// Verdict values the acceptance policy requires
pub const APP_RECOGNIZED_VERDICT: &str = "PLAY_RECOGNIZED";
pub const DEVICE_INTEGRITY_VERDICT: &str = "MEETS_DEVICE_INTEGRITY";
pub const APP_LICENSED_VERDICT: &str = "LICENSED";

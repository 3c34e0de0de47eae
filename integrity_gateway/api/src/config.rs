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

pub mod config {
    pub const GATEWAY_PORT: &'static str = "GATEWAY_PORT";
    pub const GATEWAY_LOG_LEVEL: &'static str = "GATEWAY_LOG_LEVEL";
    pub const GATEWAY_LOG_PATH: &'static str = "GATEWAY_LOG_PATH";
    pub const GATEWAY_CERT_PATH: &'static str = "GATEWAY_CERT_FILE_PATH";
    pub const GATEWAY_KEY_PATH: &'static str = "GATEWAY_KEY_FILE_PATH";
    pub const HTTPS_SWITCH: &'static str = "HTTPS_SWITCH";
    pub const GOOGLE_CLOUD_CREDENTIALS: &'static str = "GOOGLE_CLOUD_CREDENTIALS";
    pub const PACKAGE_NAME: &'static str = "PACKAGE_NAME";
}

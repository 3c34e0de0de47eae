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

use serde::{Deserialize, Serialize};

use crate::error::VerdictError;

/// Inbound request body carrying the client's attestation token.
#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    pub token: String,
}

impl TokenRequest {
    /// Parses the raw request body and checks that a token is present.
    ///
    /// An absent field, a null or empty token, and a body that is not JSON
    /// all collapse to the same terminal client error; nothing downstream may
    /// have been contacted at this point.
    pub fn from_bytes(body: &[u8]) -> Result<Self, VerdictError> {
        let request: TokenRequest = serde_json::from_slice(body).map_err(|_| VerdictError::MissingToken)?;
        if request.token.is_empty() {
            return Err(VerdictError::MissingToken);
        }
        Ok(request)
    }
}

/// Envelope the decode endpoint wraps the verdict in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodeIntegrityTokenResponse {
    pub token_payload_external: IntegrityVerdict,
}

/// Decoded integrity verdict. Fields the acceptance policy reads are
/// mandatory so that their absence fails decoding instead of defaulting;
/// the records kept only for diagnostics are optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrityVerdict {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_details: Option<RequestDetails>,
    pub app_integrity: AppIntegrity,
    pub device_integrity: DeviceIntegrity,
    pub account_details: AccountDetails,
}

/// Correlation data echoed by the attestation service, not policy input.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_package_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp_millis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonce: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppIntegrity {
    pub app_recognition_verdict: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_sha256_digest: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_code: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceIntegrity {
    /// Zero or more trust tiers. An absent set is a decoding failure, not an
    /// empty set.
    pub device_recognition_verdict: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDetails {
    pub app_licensing_verdict: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RESPONSE: &str = r#"{
        "tokenPayloadExternal": {
            "requestDetails": {
                "requestPackageName": "com.example.app",
                "timestampMillis": "1617893780",
                "nonce": "aGVsbG8gd29ybGQ"
            },
            "appIntegrity": {
                "appRecognitionVerdict": "PLAY_RECOGNIZED",
                "packageName": "com.example.app",
                "certificateSha256Digest": ["6a6a1474b5cbbb2b1aa57e0b"],
                "versionCode": "42"
            },
            "deviceIntegrity": {
                "deviceRecognitionVerdict": ["MEETS_DEVICE_INTEGRITY"]
            },
            "accountDetails": {
                "appLicensingVerdict": "LICENSED"
            }
        }
    }"#;

    #[test]
    fn test_decode_documented_response() {
        let decoded: DecodeIntegrityTokenResponse = serde_json::from_str(SAMPLE_RESPONSE).unwrap();
        let verdict = decoded.token_payload_external;
        assert_eq!(verdict.app_integrity.app_recognition_verdict, "PLAY_RECOGNIZED");
        assert_eq!(verdict.device_integrity.device_recognition_verdict, vec!["MEETS_DEVICE_INTEGRITY"]);
        assert_eq!(verdict.account_details.app_licensing_verdict, "LICENSED");
        let details = verdict.request_details.unwrap();
        assert_eq!(details.request_package_name.as_deref(), Some("com.example.app"));
        assert_eq!(details.nonce.as_deref(), Some("aGVsbG8gd29ybGQ"));
    }

    #[test]
    fn test_decode_without_diagnostic_records() {
        let body = r#"{
            "tokenPayloadExternal": {
                "appIntegrity": { "appRecognitionVerdict": "PLAY_RECOGNIZED" },
                "deviceIntegrity": { "deviceRecognitionVerdict": [] },
                "accountDetails": { "appLicensingVerdict": "LICENSED" }
            }
        }"#;
        let decoded: DecodeIntegrityTokenResponse = serde_json::from_str(body).unwrap();
        let verdict = decoded.token_payload_external;
        assert!(verdict.request_details.is_none());
        assert!(verdict.app_integrity.package_name.is_none());
        assert!(verdict.device_integrity.device_recognition_verdict.is_empty());
    }

    #[test]
    fn test_decode_when_policy_field_is_absent_then_fails() {
        // deviceRecognitionVerdict missing entirely: must not default to [].
        let body = r#"{
            "tokenPayloadExternal": {
                "appIntegrity": { "appRecognitionVerdict": "PLAY_RECOGNIZED" },
                "deviceIntegrity": {},
                "accountDetails": { "appLicensingVerdict": "LICENSED" }
            }
        }"#;
        assert!(serde_json::from_str::<DecodeIntegrityTokenResponse>(body).is_err());
    }

    #[test]
    fn test_decode_when_envelope_is_absent_then_fails() {
        assert!(serde_json::from_str::<DecodeIntegrityTokenResponse>(r#"{"appIntegrity":{}}"#).is_err());
    }

    #[test]
    fn test_serialized_verdict_keeps_wire_names() {
        let decoded: DecodeIntegrityTokenResponse = serde_json::from_str(SAMPLE_RESPONSE).unwrap();
        let logged = serde_json::to_string(&decoded.token_payload_external).unwrap();
        assert!(logged.contains("appRecognitionVerdict"));
        assert!(logged.contains("deviceRecognitionVerdict"));
        assert!(logged.contains("appLicensingVerdict"));
    }

    #[test]
    fn test_from_bytes_reads_token() {
        let request = TokenRequest::from_bytes(br#"{"token":"abc123"}"#).unwrap();
        assert_eq!(request.token, "abc123");
    }

    #[test]
    fn test_from_bytes_when_token_is_absent_then_missing() {
        assert!(matches!(TokenRequest::from_bytes(br#"{}"#), Err(VerdictError::MissingToken)));
    }

    #[test]
    fn test_from_bytes_when_token_is_null_then_missing() {
        assert!(matches!(TokenRequest::from_bytes(br#"{"token":null}"#), Err(VerdictError::MissingToken)));
    }

    #[test]
    fn test_from_bytes_when_token_is_empty_then_missing() {
        assert!(matches!(TokenRequest::from_bytes(br#"{"token":""}"#), Err(VerdictError::MissingToken)));
    }

    #[test]
    fn test_from_bytes_when_token_is_not_a_string_then_missing() {
        assert!(matches!(TokenRequest::from_bytes(br#"{"token":42}"#), Err(VerdictError::MissingToken)));
    }

    #[test]
    fn test_from_bytes_when_body_is_not_json_then_missing() {
        assert!(matches!(TokenRequest::from_bytes(b"plain text"), Err(VerdictError::MissingToken)));
    }
}

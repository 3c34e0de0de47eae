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

use crate::constants::{APP_LICENSED_VERDICT, APP_RECOGNIZED_VERDICT, DEVICE_INTEGRITY_VERDICT};
use crate::entity::IntegrityVerdict;

/// Final outcome of one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrustDecision {
    Accepted,
    Rejected,
}

/// The acceptance policy, kept free of I/O so it can be exercised directly.
pub struct VerdictPolicy;

impl VerdictPolicy {
    /// Reduces a decoded verdict to the final decision.
    ///
    /// Acceptance requires the app to be Play-recognized, the device set to
    /// contain the device-integrity tier, and the install to be licensed.
    /// Anything else rejects.
    pub fn evaluate(verdict: &IntegrityVerdict) -> TrustDecision {
        if Self::failed_checks(verdict).is_empty() {
            TrustDecision::Accepted
        } else {
            TrustDecision::Rejected
        }
    }

    /// Names the checks the verdict did not pass, for the rejection log.
    pub fn failed_checks(verdict: &IntegrityVerdict) -> Vec<&'static str> {
        let mut failed = Vec::new();
        if verdict.app_integrity.app_recognition_verdict != APP_RECOGNIZED_VERDICT {
            failed.push("app_recognition");
        }
        // Membership, not set equality: a device may carry extra qualifiers.
        if !verdict.device_integrity.device_recognition_verdict.iter().any(|tier| tier == DEVICE_INTEGRITY_VERDICT) {
            failed.push("device_integrity");
        }
        if verdict.account_details.app_licensing_verdict != APP_LICENSED_VERDICT {
            failed.push("app_licensing");
        }
        failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{AccountDetails, AppIntegrity, DeviceIntegrity};

    fn verdict(app: &str, device: Vec<&str>, licensing: &str) -> IntegrityVerdict {
        IntegrityVerdict {
            request_details: None,
            app_integrity: AppIntegrity {
                app_recognition_verdict: app.to_string(),
                package_name: None,
                certificate_sha256_digest: None,
                version_code: None,
            },
            device_integrity: DeviceIntegrity {
                device_recognition_verdict: device.into_iter().map(String::from).collect(),
            },
            account_details: AccountDetails { app_licensing_verdict: licensing.to_string() },
        }
    }

    #[test]
    fn test_evaluate_accepts_when_all_checks_pass() {
        let verdict = verdict("PLAY_RECOGNIZED", vec!["MEETS_DEVICE_INTEGRITY"], "LICENSED");
        assert_eq!(VerdictPolicy::evaluate(&verdict), TrustDecision::Accepted);
        assert!(VerdictPolicy::failed_checks(&verdict).is_empty());
    }

    #[test]
    fn test_evaluate_accepts_extra_device_qualifiers() {
        let verdict =
            verdict("PLAY_RECOGNIZED", vec!["MEETS_DEVICE_INTEGRITY", "MEETS_STRONG_INTEGRITY"], "LICENSED");
        assert_eq!(VerdictPolicy::evaluate(&verdict), TrustDecision::Accepted);
    }

    #[test]
    fn test_evaluate_rejects_unrecognized_app() {
        let verdict = verdict("UNRECOGNIZED_VERSION", vec!["MEETS_DEVICE_INTEGRITY"], "LICENSED");
        assert_eq!(VerdictPolicy::evaluate(&verdict), TrustDecision::Rejected);
        assert_eq!(VerdictPolicy::failed_checks(&verdict), vec!["app_recognition"]);
    }

    #[test]
    fn test_evaluate_rejects_basic_integrity_only() {
        let verdict = verdict("PLAY_RECOGNIZED", vec!["MEETS_BASIC_INTEGRITY"], "LICENSED");
        assert_eq!(VerdictPolicy::evaluate(&verdict), TrustDecision::Rejected);
        assert_eq!(VerdictPolicy::failed_checks(&verdict), vec!["device_integrity"]);
    }

    #[test]
    fn test_evaluate_rejects_empty_device_verdict_set() {
        let verdict = verdict("PLAY_RECOGNIZED", vec![], "LICENSED");
        assert_eq!(VerdictPolicy::evaluate(&verdict), TrustDecision::Rejected);
    }

    #[test]
    fn test_evaluate_rejects_unlicensed_account() {
        let verdict = verdict("PLAY_RECOGNIZED", vec!["MEETS_DEVICE_INTEGRITY"], "UNLICENSED");
        assert_eq!(VerdictPolicy::evaluate(&verdict), TrustDecision::Rejected);
        assert_eq!(VerdictPolicy::failed_checks(&verdict), vec!["app_licensing"]);
    }

    #[test]
    fn test_failed_checks_lists_every_failed_check() {
        let verdict = verdict("UNEVALUATED", vec![], "UNEVALUATED");
        assert_eq!(
            VerdictPolicy::failed_checks(&verdict),
            vec!["app_recognition", "device_integrity", "app_licensing"]
        );
    }
}

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
use actix_web::{post, web, HttpResponse, ResponseError};
use verdict::{TokenRequest, TrustDecision, VerdictEvaluator};

// Body text is informative only; callers act on the status code.
const ACCEPTED_BODY: &str = "Your device looks legit!";
const REJECTED_BODY: &str = "Failed";

/// desc: decode and evaluate an integrity token
/// Accepted verdicts answer 200, everything else closes the gate with 401.
#[post("/integrity-gateway/v1/attest")]
pub async fn attest(evaluator: web::Data<VerdictEvaluator>, body: web::Bytes) -> HttpResponse {
    let request = match TokenRequest::from_bytes(&body) {
        Ok(request) => request,
        Err(err) => return err.error_response(),
    };

    match evaluator.evaluate(&request.token).await {
        Ok(TrustDecision::Accepted) => {
            HttpResponse::Ok().insert_header(ContentType::plaintext()).body(ACCEPTED_BODY)
        },
        Ok(TrustDecision::Rejected) => {
            HttpResponse::Unauthorized().insert_header(ContentType::plaintext()).body(REJECTED_BODY)
        },
        Err(err) => err.error_response(),
    }
}

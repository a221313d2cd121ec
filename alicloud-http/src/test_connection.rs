/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Connection that replays canned responses

use crate::rpc::{signed_query, SigningParams};
use crate::{CommonRequest, CommonResponse, ProcessCommonRequest};
use alicloud_auth::{BoxError, Signer};
use std::collections::BTreeMap;
use std::fmt;
use std::ops::Deref;
use std::sync::{Arc, Mutex};
use std::time::{Duration, UNIX_EPOCH};

/// A request as the connection saw it
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub request: CommonRequest,
    /// The full signed query, computed with the signer the request was sent with
    pub signed_query: BTreeMap<String, String>,
}

impl CapturedRequest {
    pub fn query(&self, key: &str) -> Option<&str> {
        self.signed_query.get(key).map(String::as_str)
    }
}

/// TestConnection for driving signers in tests
///
/// It will:
/// - sign every request with the signer it is given, using a fixed nonce and timestamp
/// - respond with a preloaded series of responses, in order
/// - record requests for later examination
///
/// Once the responses run out, or when signing fails, requests fail with a dispatch error.
#[derive(Clone)]
pub struct TestConnection {
    data: Arc<Mutex<Vec<Result<CommonResponse, BoxError>>>>,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl fmt::Debug for TestConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestConnection")
            .field("remaining", &self.data.lock().unwrap().len())
            .field("requests", &self.requests.lock().unwrap().len())
            .finish()
    }
}

impl TestConnection {
    pub fn new(responses: Vec<CommonResponse>) -> Self {
        Self::with_results(responses.into_iter().map(Ok).collect())
    }

    /// Like [`TestConnection::new`], but entries may also be dispatch failures
    pub fn with_results(mut results: Vec<Result<CommonResponse, BoxError>>) -> Self {
        results.reverse();
        TestConnection {
            data: Arc::new(Mutex::new(results)),
            requests: Default::default(),
        }
    }

    pub fn requests(&self) -> impl Deref<Target = Vec<CapturedRequest>> + '_ {
        self.requests.lock().unwrap()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn signing_params() -> SigningParams {
        SigningParams::new(
            "test-nonce",
            UNIX_EPOCH + Duration::from_secs(1_609_459_200),
        )
    }
}

impl ProcessCommonRequest for TestConnection {
    fn process_common_request(
        &self,
        request: &CommonRequest,
        signer: &dyn Signer,
    ) -> Result<CommonResponse, BoxError> {
        let signed_query = signed_query(request, signer, &Self::signing_params())?;
        self.requests.lock().unwrap().push(CapturedRequest {
            request: request.clone(),
            signed_query,
        });
        self.data
            .lock()
            .unwrap()
            .pop()
            .unwrap_or_else(|| Err("No more data".into()))
    }
}

#[cfg(test)]
mod test {
    use crate::test_connection::TestConnection;
    use crate::{CommonRequest, CommonResponse, ProcessCommonRequest};
    use alicloud_auth::{Signer, SignerError};
    use http::StatusCode;
    use std::collections::HashMap;

    #[derive(Debug)]
    struct Fixed;

    impl Signer for Fixed {
        fn name(&self) -> &'static str {
            "FIXED"
        }

        fn signer_type(&self) -> &'static str {
            ""
        }

        fn version(&self) -> &'static str {
            "1.0"
        }

        fn access_key_id(&self) -> Result<String, SignerError> {
            Ok("fixed-id".into())
        }

        fn extra_params(&self) -> Result<HashMap<String, String>, SignerError> {
            Ok(HashMap::new())
        }

        fn sign(&self, _string_to_sign: &str, _secret_suffix: &str) -> Result<String, SignerError> {
            Ok("fixed-signature".into())
        }
    }

    #[test]
    fn replays_in_order_and_records() {
        let conn = TestConnection::new(vec![
            CommonResponse::new(StatusCode::OK, "first"),
            CommonResponse::new(StatusCode::INTERNAL_SERVER_ERROR, "second"),
        ]);
        let request = CommonRequest::new("Sts", "2015-04-01", "GetCallerIdentity");

        let first = conn.process_common_request(&request, &Fixed).unwrap();
        assert_eq!(first.body_str(), "first");
        let second = conn.process_common_request(&request, &Fixed).unwrap();
        assert_eq!(second.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(conn.process_common_request(&request, &Fixed).is_err());

        assert_eq!(conn.request_count(), 3);
        let requests = conn.requests();
        let captured = &requests[0];
        assert_eq!(captured.request.api_name(), "GetCallerIdentity");
        assert_eq!(captured.query("AccessKeyId"), Some("fixed-id"));
        assert_eq!(captured.query("Signature"), Some("fixed-signature"));
        assert_eq!(captured.query("SignatureNonce"), Some("test-nonce"));
    }

    #[test]
    fn dispatch_failures_are_replayed() {
        let conn = TestConnection::with_results(vec![Err("connection reset".into())]);
        let request = CommonRequest::new("Sts", "2015-04-01", "GetCallerIdentity");
        let err = conn
            .process_common_request(&request, &Fixed)
            .expect_err("canned failure");
        assert_eq!(err.to_string(), "connection reset");
    }
}

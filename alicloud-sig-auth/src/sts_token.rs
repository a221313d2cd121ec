/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::digest::hmac_sha1;
use alicloud_auth::{Signer, SignerError};
use alicloud_types::StsTokenCredential;
use std::collections::HashMap;

/// HMAC-SHA1 signer over a static STS credential
///
/// Identical to [`AccessKeySigner`](crate::access_key::AccessKeySigner) except that every request
/// also carries the `SecurityToken` parameter.
#[derive(Debug, Clone)]
pub struct StsTokenSigner {
    credential: StsTokenCredential,
}

impl StsTokenSigner {
    pub fn new(credential: StsTokenCredential) -> Self {
        StsTokenSigner { credential }
    }
}

impl Signer for StsTokenSigner {
    fn name(&self) -> &'static str {
        "HMAC-SHA1"
    }

    fn signer_type(&self) -> &'static str {
        ""
    }

    fn version(&self) -> &'static str {
        "1.0"
    }

    fn access_key_id(&self) -> Result<String, SignerError> {
        Ok(self.credential.access_key_id().to_string())
    }

    fn extra_params(&self) -> Result<HashMap<String, String>, SignerError> {
        let mut params = HashMap::new();
        params.insert(
            "SecurityToken".to_string(),
            self.credential.security_token().to_string(),
        );
        Ok(params)
    }

    fn sign(&self, string_to_sign: &str, secret_suffix: &str) -> Result<String, SignerError> {
        let secret = format!("{}{}", self.credential.access_key_secret(), secret_suffix);
        Ok(hmac_sha1(string_to_sign, &secret))
    }
}

#[cfg(test)]
mod test {
    use crate::digest::hmac_sha1;
    use crate::sts_token::StsTokenSigner;
    use alicloud_auth::Signer;
    use alicloud_types::StsTokenCredential;

    #[test]
    fn security_token_is_an_extra_param() {
        let signer = StsTokenSigner::new(StsTokenCredential::new("STS.id", "secret", "token"));
        assert_eq!(signer.access_key_id().unwrap(), "STS.id");
        let params = signer.extra_params().unwrap();
        assert_eq!(params.len(), 1);
        assert_eq!(params["SecurityToken"], "token");
        assert_eq!(
            signer.sign("source", "&").unwrap(),
            hmac_sha1("source", "secret&")
        );
    }
}

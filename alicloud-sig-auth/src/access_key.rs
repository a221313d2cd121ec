/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::digest::hmac_sha1;
use alicloud_auth::{Signer, SignerError};
use alicloud_types::AccessKeyCredential;
use std::collections::HashMap;

/// HMAC-SHA1 signer over a static access key
#[derive(Debug, Clone)]
pub struct AccessKeySigner {
    credential: AccessKeyCredential,
}

impl AccessKeySigner {
    pub fn new(credential: AccessKeyCredential) -> Self {
        AccessKeySigner { credential }
    }
}

impl Signer for AccessKeySigner {
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
        Ok(HashMap::new())
    }

    fn sign(&self, string_to_sign: &str, secret_suffix: &str) -> Result<String, SignerError> {
        let secret = format!("{}{}", self.credential.access_key_secret(), secret_suffix);
        Ok(hmac_sha1(string_to_sign, &secret))
    }
}

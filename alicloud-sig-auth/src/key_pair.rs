/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::digest::PrivateKey;
use alicloud_auth::{Signer, SignerError};
use alicloud_types::KeyPairCredential;
use std::collections::HashMap;

/// `SHA256withRSA` signer over a key pair
///
/// This is the bootstrap signer: the token service only accepts it for `GenerateSessionAccessKey`.
/// Other APIs are signed by [`SessionKeyPairSigner`](crate::session::SessionKeyPairSigner) with the
/// session access key obtained through this signer. `secret_suffix` is ignored.
#[derive(Debug, Clone)]
pub struct RsaKeyPairSigner {
    public_key_id: String,
    private_key: PrivateKey,
}

impl RsaKeyPairSigner {
    /// Fails with [`SignerError::InvalidKey`] if the private key cannot be decoded
    pub fn new(credential: &KeyPairCredential) -> Result<Self, SignerError> {
        Ok(RsaKeyPairSigner {
            public_key_id: credential.public_key_id().to_string(),
            private_key: PrivateKey::from_key_material(credential.private_key())?,
        })
    }
}

impl Signer for RsaKeyPairSigner {
    fn name(&self) -> &'static str {
        "SHA256withRSA"
    }

    fn signer_type(&self) -> &'static str {
        "PRIVATEKEY"
    }

    fn version(&self) -> &'static str {
        "1.0"
    }

    fn access_key_id(&self) -> Result<String, SignerError> {
        Ok(self.public_key_id.clone())
    }

    fn extra_params(&self) -> Result<HashMap<String, String>, SignerError> {
        Ok(HashMap::new())
    }

    fn sign(&self, string_to_sign: &str, _secret_suffix: &str) -> Result<String, SignerError> {
        self.private_key.sha256_with_rsa(string_to_sign)
    }
}

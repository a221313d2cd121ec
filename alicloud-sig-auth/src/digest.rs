/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Signing primitives shared by the signers

use alicloud_auth::SignerError;
use hmac::{Hmac, Mac};
use rsa::pkcs1::DecodeRsaPrivateKey;
use rsa::pkcs8::DecodePrivateKey;
use rsa::{Pkcs1v15Sign, RsaPrivateKey};
use sha1::Sha1;
use sha2::{Digest, Sha256};
use std::fmt;

/// `base64(HMAC-SHA1(secret, string_to_sign))`
pub fn hmac_sha1(string_to_sign: &str, secret: &str) -> String {
    let mut mac =
        Hmac::<Sha1>::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(string_to_sign.as_bytes());
    base64::encode(mac.finalize().into_bytes())
}

/// RSA private key used for `SHA256withRSA` signatures
#[derive(Clone)]
pub struct PrivateKey(Box<RsaPrivateKey>);

impl PrivateKey {
    /// Decode private key material
    ///
    /// Accepts PKCS#1 PEM (`BEGIN RSA PRIVATE KEY`), PKCS#8 PEM (`BEGIN PRIVATE KEY`), or the
    /// bare base64 PKCS#8 DER body that the console hands out.
    pub fn from_key_material(material: &str) -> Result<Self, SignerError> {
        let material = material.trim();
        let key = if material.contains("BEGIN RSA PRIVATE KEY") {
            RsaPrivateKey::from_pkcs1_pem(material).map_err(SignerError::invalid_key)?
        } else if material.contains("BEGIN PRIVATE KEY") {
            RsaPrivateKey::from_pkcs8_pem(material).map_err(SignerError::invalid_key)?
        } else {
            let compact: String = material.split_whitespace().collect();
            let der = base64::decode(compact).map_err(SignerError::invalid_key)?;
            RsaPrivateKey::from_pkcs8_der(&der).map_err(SignerError::invalid_key)?
        };
        Ok(PrivateKey(Box::new(key)))
    }

    /// `base64(RSASSA-PKCS1-v1_5(SHA-256(string_to_sign)))`
    pub fn sha256_with_rsa(&self, string_to_sign: &str) -> Result<String, SignerError> {
        let digest = Sha256::digest(string_to_sign.as_bytes());
        let signature = self
            .0
            .sign(Pkcs1v15Sign::new::<Sha256>(), &digest)
            .map_err(SignerError::signing_failure)?;
        Ok(base64::encode(signature))
    }

    #[cfg(test)]
    pub(crate) fn rsa(&self) -> &RsaPrivateKey {
        &self.0
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(** redacted **)")
    }
}

/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::SignerError;
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::Arc;

/// Turns a canonical string-to-sign into a signature
///
/// Implementations differ in the credential material they hold. Some (the session key-pair signer)
/// fetch that material from a remote service, so every accessor that needs it is fallible.
pub trait Signer: Debug + Send + Sync {
    /// Signature method, sent as `SignatureMethod`
    fn name(&self) -> &'static str;

    /// Signature type, sent as `SignatureType` when non-empty
    fn signer_type(&self) -> &'static str;

    /// Signature version, sent as `SignatureVersion`
    fn version(&self) -> &'static str;

    /// Access key id to send as `AccessKeyId`
    ///
    /// Signers that refresh their credential keep returning the retained id while it has not
    /// expired. Once it has, a failed refresh returns [`SignerError::Stale`] carrying that id.
    fn access_key_id(&self) -> Result<String, SignerError>;

    /// Additional query parameters this signer requires, eg. `SecurityToken`
    fn extra_params(&self) -> Result<HashMap<String, String>, SignerError>;

    /// Sign `string_to_sign`. `secret_suffix` is appended to HMAC secrets (`&` for RPC requests).
    fn sign(&self, string_to_sign: &str, secret_suffix: &str) -> Result<String, SignerError>;

    /// Release any resources held by the signer
    fn shutdown(&self) {}
}

pub type SharedSigner = Arc<dyn Signer>;

impl Signer for SharedSigner {
    fn name(&self) -> &'static str {
        self.as_ref().name()
    }

    fn signer_type(&self) -> &'static str {
        self.as_ref().signer_type()
    }

    fn version(&self) -> &'static str {
        self.as_ref().version()
    }

    fn access_key_id(&self) -> Result<String, SignerError> {
        self.as_ref().access_key_id()
    }

    fn extra_params(&self) -> Result<HashMap<String, String>, SignerError> {
        self.as_ref().extra_params()
    }

    fn sign(&self, string_to_sign: &str, secret_suffix: &str) -> Result<String, SignerError> {
        self.as_ref().sign(string_to_sign, secret_suffix)
    }

    fn shutdown(&self) {
        self.as_ref().shutdown()
    }
}

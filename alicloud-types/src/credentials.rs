/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Credential records
//!
//! Every record is cheap to clone (the fields live behind an `Arc`) and redacts its secret
//! material from `Debug` output.

use std::fmt;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use zeroize::Zeroizing;

const REDACTED: &str = "** redacted **";

/// Long-lived access key id and secret
#[derive(Clone)]
pub struct AccessKeyCredential(Arc<AccessKeyInner>);

struct AccessKeyInner {
    access_key_id: String,
    access_key_secret: Zeroizing<String>,
}

impl AccessKeyCredential {
    pub fn new(access_key_id: impl Into<String>, access_key_secret: impl Into<String>) -> Self {
        AccessKeyCredential(Arc::new(AccessKeyInner {
            access_key_id: access_key_id.into(),
            access_key_secret: Zeroizing::new(access_key_secret.into()),
        }))
    }

    pub fn access_key_id(&self) -> &str {
        &self.0.access_key_id
    }

    pub fn access_key_secret(&self) -> &str {
        &self.0.access_key_secret
    }
}

impl fmt::Debug for AccessKeyCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessKeyCredential")
            .field("access_key_id", &self.0.access_key_id)
            .field("access_key_secret", &REDACTED)
            .finish()
    }
}

/// Temporary access key id, secret, and security token issued by STS
#[derive(Clone)]
pub struct StsTokenCredential(Arc<StsTokenInner>);

struct StsTokenInner {
    access_key_id: String,
    access_key_secret: Zeroizing<String>,
    security_token: Zeroizing<String>,
}

impl StsTokenCredential {
    pub fn new(
        access_key_id: impl Into<String>,
        access_key_secret: impl Into<String>,
        security_token: impl Into<String>,
    ) -> Self {
        StsTokenCredential(Arc::new(StsTokenInner {
            access_key_id: access_key_id.into(),
            access_key_secret: Zeroizing::new(access_key_secret.into()),
            security_token: Zeroizing::new(security_token.into()),
        }))
    }

    pub fn access_key_id(&self) -> &str {
        &self.0.access_key_id
    }

    pub fn access_key_secret(&self) -> &str {
        &self.0.access_key_secret
    }

    pub fn security_token(&self) -> &str {
        &self.0.security_token
    }
}

impl fmt::Debug for StsTokenCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StsTokenCredential")
            .field("access_key_id", &self.0.access_key_id)
            .field("access_key_secret", &REDACTED)
            .field("security_token", &REDACTED)
            .finish()
    }
}

/// RSA key pair registered with the account
///
/// The key pair is never used to sign ordinary requests. It is exchanged for a short-lived
/// [`SessionCredential`] by the session key-pair signer.
///
/// `session_expiration` is the requested lifetime of each session credential in seconds. Zero means
/// "use the default"; range checking happens when a signer is built from the credential.
#[derive(Clone)]
pub struct KeyPairCredential(Arc<KeyPairInner>);

struct KeyPairInner {
    public_key_id: String,
    private_key: Zeroizing<String>,
    session_expiration: u64,
}

impl KeyPairCredential {
    pub fn new(public_key_id: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self::with_session_expiration(public_key_id, private_key, 0)
    }

    pub fn with_session_expiration(
        public_key_id: impl Into<String>,
        private_key: impl Into<String>,
        session_expiration: u64,
    ) -> Self {
        KeyPairCredential(Arc::new(KeyPairInner {
            public_key_id: public_key_id.into(),
            private_key: Zeroizing::new(private_key.into()),
            session_expiration,
        }))
    }

    pub fn public_key_id(&self) -> &str {
        &self.0.public_key_id
    }

    /// Private key material as given: PEM, or base64 encoded PKCS#8 DER
    pub fn private_key(&self) -> &str {
        &self.0.private_key
    }

    pub fn session_expiration(&self) -> u64 {
        self.0.session_expiration
    }
}

impl fmt::Debug for KeyPairCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPairCredential")
            .field("public_key_id", &self.0.public_key_id)
            .field("private_key", &REDACTED)
            .field("session_expiration", &self.0.session_expiration)
            .finish()
    }
}

/// Short-lived session access key obtained by exchanging a [`KeyPairCredential`]
///
/// A session credential is always replaced as a whole; there is no way to update one field.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionCredential(Arc<SessionInner>);

#[derive(PartialEq, Eq)]
struct SessionInner {
    access_key_id: String,
    access_key_secret: Zeroizing<String>,
    expiry: SystemTime,
}

impl SessionCredential {
    pub fn new(
        access_key_id: impl Into<String>,
        access_key_secret: impl Into<String>,
        expiry: SystemTime,
    ) -> Self {
        SessionCredential(Arc::new(SessionInner {
            access_key_id: access_key_id.into(),
            access_key_secret: Zeroizing::new(access_key_secret.into()),
            expiry,
        }))
    }

    pub fn access_key_id(&self) -> &str {
        &self.0.access_key_id
    }

    pub fn access_key_secret(&self) -> &str {
        &self.0.access_key_secret
    }

    /// Point in time after which the remote service rejects this credential
    pub fn expiry(&self) -> SystemTime {
        self.0.expiry
    }
}

impl fmt::Debug for SessionCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut dbg = f.debug_struct("SessionCredential");
        dbg.field("access_key_id", &self.0.access_key_id)
            .field("access_key_secret", &REDACTED);
        match self.0.expiry.duration_since(UNIX_EPOCH) {
            Ok(since_epoch) => dbg.field("expiry_epoch_secs", &since_epoch.as_secs()),
            Err(_) => dbg.field("expiry", &self.0.expiry),
        };
        dbg.finish()
    }
}

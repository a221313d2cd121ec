/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use http::StatusCode;
use std::borrow::Cow;
use std::error::Error as StdError;
use thiserror::Error;

pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Errors returned while building a signer, refreshing a session credential, or signing
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SignerError {
    /// The requested session lifetime is outside the range the token service accepts
    #[error("key pair session duration must be between {min} and {max} seconds, got {seconds}")]
    InvalidSessionExpiration { seconds: u64, min: u64, max: u64 },

    /// A required builder field was missing or a setting was out of range
    #[error("invalid signer configuration: {0}")]
    InvalidConfiguration(Cow<'static, str>),

    /// Private key material could not be decoded
    #[error("invalid private key")]
    InvalidKey(#[source] BoxError),

    /// The signature could not be computed
    #[error("signing operation failed")]
    SigningFailure(#[source] BoxError),

    /// The refresh request failed before a response was received
    #[error("failed to dispatch the session access key request")]
    DispatchFailure(#[source] BoxError),

    /// The token service answered with a non-200 status
    ///
    /// `body` is the response body decoded as UTF-8, with invalid sequences replaced by `U+FFFD`.
    #[error("refresh session AccessKey failed: {status}: {body}")]
    ServiceError { status: StatusCode, body: String },

    /// A 200 response body was not valid JSON
    #[error("failed to parse the session access key response")]
    ParseFailure(#[source] BoxError),

    /// A 200 response body was missing one of the expected fields, or the field was null
    #[error("session access key response is missing `{path}`")]
    MalformedResponse { path: &'static str },

    /// A refresh failed while a previously issued session credential is still held
    ///
    /// Signers keep signing with the retained credential until it expires and only return this
    /// error once it has; explicit freshness checks return it right away. `access_key_id`
    /// identifies the retained credential.
    #[error("refreshing the session credential failed; retained access key id `{access_key_id}` may be expired")]
    Stale {
        access_key_id: String,
        #[source]
        source: Box<SignerError>,
    },
}

impl SignerError {
    pub fn invalid_configuration(message: impl Into<Cow<'static, str>>) -> Self {
        SignerError::InvalidConfiguration(message.into())
    }

    pub fn invalid_key(source: impl Into<BoxError>) -> Self {
        SignerError::InvalidKey(source.into())
    }

    pub fn signing_failure(source: impl Into<BoxError>) -> Self {
        SignerError::SigningFailure(source.into())
    }

    pub fn dispatch_failure(source: impl Into<BoxError>) -> Self {
        SignerError::DispatchFailure(source.into())
    }

    pub fn parse_failure(source: impl Into<BoxError>) -> Self {
        SignerError::ParseFailure(source.into())
    }

    /// Wrap `self` as [`SignerError::Stale`] when a retained access key id is known
    pub fn retaining(self, access_key_id: Option<&str>) -> Self {
        match (self, access_key_id) {
            (stale @ SignerError::Stale { .. }, _) => stale,
            (err, Some(id)) if !id.is_empty() => SignerError::Stale {
                access_key_id: id.to_string(),
                source: Box::new(err),
            },
            (err, _) => err,
        }
    }

    /// Access key id of the session credential retained across a failed refresh, if any
    pub fn retained_access_key_id(&self) -> Option<&str> {
        match self {
            SignerError::Stale { access_key_id, .. } => Some(access_key_id),
            _ => None,
        }
    }

    /// The underlying failure, looking through [`SignerError::Stale`]
    pub fn root_cause(&self) -> &SignerError {
        match self {
            SignerError::Stale { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Sources of long-lived key-pair credentials

pub mod env;

use crate::BoxError;
use alicloud_types::KeyPairCredential;
use std::borrow::Cow;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CredentialsError {
    /// Required configuration was not set
    #[error("the provider could not provide credentials: {0}")]
    CredentialsNotLoaded(Cow<'static, str>),

    /// Configuration was present but could not be used
    #[error("the credentials provider was not properly configured")]
    InvalidConfiguration(#[source] BoxError),

    /// Loading failed, eg. the private key file could not be read
    #[error("an error occurred while loading credentials")]
    ProviderError(#[source] BoxError),
}

/// Synchronous source of a [`KeyPairCredential`]
pub trait ProvideKeyPair: Send + Sync {
    fn key_pair(&self) -> Result<KeyPairCredential, CredentialsError>;
}

impl ProvideKeyPair for KeyPairCredential {
    fn key_pair(&self) -> Result<KeyPairCredential, CredentialsError> {
        Ok(self.clone())
    }
}

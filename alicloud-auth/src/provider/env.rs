/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::provider::{CredentialsError, ProvideKeyPair};
use alicloud_types::os_shim_internal::{Env, Fs};
use alicloud_types::KeyPairCredential;

const PUBLIC_KEY_ID: &str = "ALIBABA_CLOUD_PUBLIC_KEY_ID";
const PRIVATE_KEY: &str = "ALIBABA_CLOUD_PRIVATE_KEY";
const PRIVATE_KEY_FILE: &str = "ALIBABA_CLOUD_PRIVATE_KEY_FILE";
const SESSION_EXPIRATION: &str = "ALIBABA_CLOUD_SESSION_EXPIRATION";

/// Load a [`KeyPairCredential`] from environment variables
///
/// - `ALIBABA_CLOUD_PUBLIC_KEY_ID`: required
/// - `ALIBABA_CLOUD_PRIVATE_KEY`: the private key itself, or
/// - `ALIBABA_CLOUD_PRIVATE_KEY_FILE`: path to a file holding it
/// - `ALIBABA_CLOUD_SESSION_EXPIRATION`: optional session lifetime in seconds
///
/// When both private key variables are set, the inline key wins.
#[derive(Debug, Clone)]
pub struct EnvironmentVariableKeyPairProvider {
    env: Env,
    fs: Fs,
}

impl EnvironmentVariableKeyPairProvider {
    pub fn new() -> Self {
        Self::new_with_env(Env::real(), Fs::real())
    }

    /// Read from the given environment and file system instead of the process's
    pub fn new_with_env(env: Env, fs: Fs) -> Self {
        EnvironmentVariableKeyPairProvider { env, fs }
    }

    fn var(&self, key: &str) -> Option<String> {
        self.env
            .get(key)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }

    fn private_key(&self) -> Result<String, CredentialsError> {
        if let Some(key) = self.var(PRIVATE_KEY) {
            return Ok(key);
        }
        let path = self.var(PRIVATE_KEY_FILE).ok_or_else(|| {
            CredentialsError::CredentialsNotLoaded(
                format!("neither {} nor {} is set", PRIVATE_KEY, PRIVATE_KEY_FILE).into(),
            )
        })?;
        let contents = self
            .fs
            .read_to_end(&path)
            .map_err(|err| CredentialsError::ProviderError(err.into()))?;
        String::from_utf8(contents).map_err(|err| CredentialsError::InvalidConfiguration(err.into()))
    }

    fn session_expiration(&self) -> Result<u64, CredentialsError> {
        match self.var(SESSION_EXPIRATION) {
            None => Ok(0),
            Some(value) => value.parse::<u64>().map_err(|err| {
                CredentialsError::InvalidConfiguration(
                    format!("{} must be a whole number of seconds: {}", SESSION_EXPIRATION, err)
                        .into(),
                )
            }),
        }
    }
}

impl Default for EnvironmentVariableKeyPairProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ProvideKeyPair for EnvironmentVariableKeyPairProvider {
    fn key_pair(&self) -> Result<KeyPairCredential, CredentialsError> {
        let public_key_id = self.var(PUBLIC_KEY_ID).ok_or_else(|| {
            CredentialsError::CredentialsNotLoaded(format!("{} is not set", PUBLIC_KEY_ID).into())
        })?;
        let private_key = self.private_key()?;
        let session_expiration = self.session_expiration()?;
        tracing::debug!(
            public_key_id = %public_key_id,
            session_expiration,
            "loaded key pair from the environment"
        );
        Ok(KeyPairCredential::with_session_expiration(
            public_key_id,
            private_key,
            session_expiration,
        ))
    }
}

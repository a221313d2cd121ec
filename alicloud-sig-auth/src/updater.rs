/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Session lifetime and refresh window bookkeeping

use alicloud_auth::SignerError;
use alicloud_types::SessionCredential;
use std::time::{Duration, SystemTime};

/// Shortest session lifetime the token service accepts
pub const MIN_SESSION_EXPIRATION: Duration = Duration::from_secs(900);

/// Longest session lifetime the token service accepts
pub const MAX_SESSION_EXPIRATION: Duration = Duration::from_secs(3600);

/// Session lifetime used when the key pair does not request one
pub const DEFAULT_SESSION_EXPIRATION: Duration = Duration::from_secs(3600);

/// Fraction of the session lifetime after which the credential is refreshed
pub const DEFAULT_IN_ADVANCE_SCALE: f64 = 0.95;

/// Decides when a session credential is due for refresh
///
/// A credential issued at `t` with a lifetime of `window` expires at `t + window` and is refreshed
/// once `window * in_advance_scale` has elapsed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CredentialUpdater {
    expiration: Duration,
    in_advance_scale: f64,
}

impl Default for CredentialUpdater {
    fn default() -> Self {
        CredentialUpdater {
            expiration: DEFAULT_SESSION_EXPIRATION,
            in_advance_scale: DEFAULT_IN_ADVANCE_SCALE,
        }
    }
}

impl CredentialUpdater {
    /// Validate a requested session lifetime in seconds
    ///
    /// `0` selects [`DEFAULT_SESSION_EXPIRATION`]. Any other value outside
    /// [`MIN_SESSION_EXPIRATION`]..=[`MAX_SESSION_EXPIRATION`] is rejected.
    pub fn from_session_expiration(seconds: u64) -> Result<Self, SignerError> {
        if seconds == 0 {
            return Ok(Self::default());
        }
        let requested = Duration::from_secs(seconds);
        if requested < MIN_SESSION_EXPIRATION || requested > MAX_SESSION_EXPIRATION {
            return Err(SignerError::InvalidSessionExpiration {
                seconds,
                min: MIN_SESSION_EXPIRATION.as_secs(),
                max: MAX_SESSION_EXPIRATION.as_secs(),
            });
        }
        Ok(CredentialUpdater {
            expiration: requested,
            ..Self::default()
        })
    }

    /// Override [`DEFAULT_IN_ADVANCE_SCALE`]; must be in `(0, 1]`
    pub fn with_in_advance_scale(mut self, scale: f64) -> Result<Self, SignerError> {
        if !(scale > 0.0 && scale <= 1.0) {
            return Err(SignerError::invalid_configuration(format!(
                "in_advance_scale must be in (0, 1], got {}",
                scale
            )));
        }
        self.in_advance_scale = scale;
        Ok(self)
    }

    /// Session lifetime requested from the token service
    pub fn expiration(&self) -> Duration {
        self.expiration
    }

    pub fn in_advance_scale(&self) -> f64 {
        self.in_advance_scale
    }

    /// Expiry of a credential accepted at `issued_at`
    pub fn expiry_for(&self, issued_at: SystemTime) -> SystemTime {
        issued_at + self.expiration
    }

    /// Whether `credential` must be refreshed before it is used at `now`
    ///
    /// No credential always needs a refresh.
    pub fn needs_refresh(&self, credential: Option<&SessionCredential>, now: SystemTime) -> bool {
        let credential = match credential {
            Some(credential) => credential,
            None => return true,
        };
        let lead_time = self.expiration.mul_f64(1.0 - self.in_advance_scale);
        match credential.expiry().checked_sub(lead_time) {
            Some(refresh_at) => now >= refresh_at,
            None => true,
        }
    }
}

/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Shims over process state so configuration loading can be tested:
//! - environment variables
//! - reading files (eg. a private key file named by an environment variable)

use std::collections::HashMap;
use std::env::VarError;
use std::ffi::OsString;
use std::path::Path;
use std::sync::Arc;

/// Environment variable source
///
/// The process environment is global and racy under a multi-threaded test runner, so providers read
/// through `Env` instead of calling [`std::env::var`] directly. Cloning is cheap in both modes.
#[derive(Clone, Debug)]
pub struct Env(Arc<EnvInner>);

#[derive(Debug)]
enum EnvInner {
    Real,
    Fake(HashMap<String, String>),
}

impl Default for Env {
    fn default() -> Self {
        Env::real()
    }
}

impl Env {
    /// Delegate to the real process environment
    pub fn real() -> Self {
        Env(Arc::new(EnvInner::Real))
    }

    /// Build a fake environment from `(name, value)` pairs
    ///
    /// ```rust
    /// use alicloud_types::os_shim_internal::Env;
    /// let env = Env::from_slice(&[("ALIBABA_CLOUD_PUBLIC_KEY_ID", "KP-example")]);
    /// assert_eq!(env.get("ALIBABA_CLOUD_PUBLIC_KEY_ID").unwrap(), "KP-example");
    /// ```
    pub fn from_slice(vars: &[(&str, &str)]) -> Self {
        Env(Arc::new(EnvInner::Fake(
            vars.iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )))
    }

    pub fn get(&self, key: &str) -> Result<String, VarError> {
        match self.0.as_ref() {
            EnvInner::Real => std::env::var(key),
            EnvInner::Fake(vars) => vars.get(key).cloned().ok_or(VarError::NotPresent),
        }
    }
}

impl From<HashMap<String, String>> for Env {
    fn from(vars: HashMap<String, String>) -> Self {
        Env(Arc::new(EnvInner::Fake(vars)))
    }
}

/// File system source
#[derive(Clone, Debug)]
pub struct Fs(Arc<FsInner>);

#[derive(Debug)]
enum FsInner {
    Real,
    Fake(HashMap<OsString, Vec<u8>>),
}

impl Default for Fs {
    fn default() -> Self {
        Fs::real()
    }
}

impl Fs {
    /// Delegate to [`std::fs`]
    pub fn real() -> Self {
        Fs(Arc::new(FsInner::Real))
    }

    /// In-memory file system keyed by path
    pub fn from_map(files: HashMap<String, Vec<u8>>) -> Self {
        Fs(Arc::new(FsInner::Fake(
            files.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        )))
    }

    pub fn read_to_end(&self, path: impl AsRef<Path>) -> std::io::Result<Vec<u8>> {
        let path = path.as_ref();
        match self.0.as_ref() {
            FsInner::Real => std::fs::read(path),
            FsInner::Fake(files) => files
                .get(path.as_os_str())
                .cloned()
                .ok_or_else(|| std::io::ErrorKind::NotFound.into()),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::os_shim_internal::{Env, Fs};
    use std::collections::HashMap;
    use std::env::VarError;

    #[test]
    fn fake_env() {
        let env = Env::from_slice(&[("FOO", "BAR")]);
        assert_eq!(env.get("FOO").unwrap(), "BAR");
        assert_eq!(env.get("MISSING").expect_err("not set"), VarError::NotPresent);
    }

    #[test]
    fn fake_fs() {
        let mut files = HashMap::new();
        files.insert("/keys/kp.pem".to_string(), b"pem contents".to_vec());
        let fs = Fs::from_map(files);
        assert_eq!(fs.read_to_end("/keys/kp.pem").unwrap(), b"pem contents");
        assert_eq!(
            fs.read_to_end("/keys/missing.pem")
                .expect_err("file does not exist")
                .kind(),
            std::io::ErrorKind::NotFound
        );
    }
}

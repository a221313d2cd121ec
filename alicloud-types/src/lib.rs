/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Types shared across the Alibaba Cloud SDK crates.
//!
//! This crate holds the credential records handed to signers, the time source used to decide when
//! a session credential is due for refresh, and small shims over the process environment.

pub mod credentials;
pub mod os_shim_internal;
pub mod time;

pub use credentials::{
    AccessKeyCredential, KeyPairCredential, SessionCredential, StsTokenCredential,
};

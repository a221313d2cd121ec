/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Alibaba Cloud signers
//!
//! - [`AccessKeySigner`](access_key::AccessKeySigner) and [`StsTokenSigner`](sts_token::StsTokenSigner)
//!   sign with static credentials.
//! - [`RsaKeyPairSigner`](key_pair::RsaKeyPairSigner) signs with an RSA private key. It is only used
//!   to call `GenerateSessionAccessKey`.
//! - [`SessionKeyPairSigner`](session::SessionKeyPairSigner) exchanges a key pair for a session
//!   access key and signs with that, refreshing it as it nears expiry.

pub mod access_key;
pub mod digest;
pub mod key_pair;
pub mod session;
pub mod sts_token;
pub mod updater;

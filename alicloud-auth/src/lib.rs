/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Alibaba Cloud request signing abstractions
//!
//! [`Signer`] is the capability the request pipeline uses to turn a canonical string-to-sign into a
//! signature. Concrete signers live in `alicloud-sig-auth`.

pub mod error;
pub mod provider;
pub mod signer;

pub use error::{BoxError, SignerError};
pub use signer::{SharedSigner, Signer};

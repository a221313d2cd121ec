/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

pub mod connection;
pub mod request;
pub mod response;
pub mod rpc;

#[cfg(any(test, feature = "test-util"))]
pub mod test_connection;

pub use connection::{ProcessCommonRequest, SharedConnection};
pub use request::{CommonRequest, Scheme};
pub use response::CommonResponse;

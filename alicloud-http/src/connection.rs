/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::{CommonRequest, CommonResponse};
use alicloud_auth::{BoxError, Signer};
use std::fmt::Debug;
use std::sync::Arc;

/// Sends a [`CommonRequest`] signed by the given signer and returns the buffered response
///
/// The connection owns endpoint resolution and the HTTP client. It must not treat non-2xx statuses
/// as errors: callers inspect the status themselves. `Err` is reserved for failures where no
/// response was received.
pub trait ProcessCommonRequest: Debug + Send + Sync {
    fn process_common_request(
        &self,
        request: &CommonRequest,
        signer: &dyn Signer,
    ) -> Result<CommonResponse, BoxError>;
}

pub type SharedConnection = Arc<dyn ProcessCommonRequest>;

impl ProcessCommonRequest for SharedConnection {
    fn process_common_request(
        &self,
        request: &CommonRequest,
        signer: &dyn Signer,
    ) -> Result<CommonResponse, BoxError> {
        self.as_ref().process_common_request(request, signer)
    }
}

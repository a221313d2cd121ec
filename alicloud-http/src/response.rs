/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use http::StatusCode;
use std::borrow::Cow;

/// Raw response to a [`CommonRequest`](crate::CommonRequest), body fully buffered
#[derive(Debug)]
pub struct CommonResponse {
    inner: http::Response<Bytes>,
}

impl CommonResponse {
    pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
        let mut inner = http::Response::new(body.into());
        *inner.status_mut() = status;
        CommonResponse { inner }
    }

    pub fn status(&self) -> StatusCode {
        self.inner.status()
    }

    pub fn body(&self) -> &Bytes {
        self.inner.body()
    }

    /// Body as text, with invalid UTF-8 replaced
    pub fn body_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.inner.body())
    }

    pub fn http(&self) -> &http::Response<Bytes> {
        &self.inner
    }

    pub fn into_http(self) -> http::Response<Bytes> {
        self.inner
    }
}

impl From<http::Response<Bytes>> for CommonResponse {
    fn from(inner: http::Response<Bytes>) -> Self {
        CommonResponse { inner }
    }
}

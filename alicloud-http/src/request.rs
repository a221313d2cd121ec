/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use http::Method;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Http,
    Https,
}

impl Scheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Product-agnostic RPC request
///
/// A `CommonRequest` names an API by product, version, and action, and carries the action's own
/// query parameters. The common parameters and signature are added by [`rpc::signed_query`](crate::rpc::signed_query)
/// when a connection sends it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonRequest {
    product: Cow<'static, str>,
    version: Cow<'static, str>,
    api_name: Cow<'static, str>,
    scheme: Scheme,
    method: Method,
    domain: Option<String>,
    query_params: BTreeMap<String, String>,
}

impl CommonRequest {
    /// New HTTPS `GET` request with no query parameters
    pub fn new(
        product: impl Into<Cow<'static, str>>,
        version: impl Into<Cow<'static, str>>,
        api_name: impl Into<Cow<'static, str>>,
    ) -> Self {
        CommonRequest {
            product: product.into(),
            version: version.into(),
            api_name: api_name.into(),
            scheme: Scheme::Https,
            method: Method::GET,
            domain: None,
            query_params: BTreeMap::new(),
        }
    }

    pub fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Send to `domain` instead of the endpoint the connection would resolve for the product
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_query_param(key, value);
        self
    }

    pub fn set_query_param(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.query_params.insert(key.into(), value.into());
    }

    pub fn product(&self) -> &str {
        &self.product
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn api_name(&self) -> &str {
        &self.api_name
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn domain(&self) -> Option<&str> {
        self.domain.as_deref()
    }

    pub fn query_params(&self) -> &BTreeMap<String, String> {
        &self.query_params
    }
}

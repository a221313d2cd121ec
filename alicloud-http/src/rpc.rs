/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! RPC-style request signing
//!
//! RPC APIs carry every parameter, including the signature, in the query string. The string to
//! sign is `METHOD&%2F&` followed by the percent-encoded canonical query.

use crate::CommonRequest;
use alicloud_auth::{Signer, SignerError};
use http::Method;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::collections::BTreeMap;
use std::time::SystemTime;

/// Everything except the RFC 3986 unreserved characters
const RPC_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Appended to HMAC secrets when signing RPC requests
pub const SECRET_SUFFIX: &str = "&";

/// Per-request values that make each signature unique
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningParams {
    nonce: String,
    time: SystemTime,
}

impl SigningParams {
    pub fn new(nonce: impl Into<String>, time: SystemTime) -> Self {
        SigningParams {
            nonce: nonce.into(),
            time,
        }
    }

    pub fn nonce(&self) -> &str {
        &self.nonce
    }

    pub fn time(&self) -> SystemTime {
        self.time
    }

    fn timestamp(&self) -> String {
        chrono::DateTime::<chrono::Utc>::from(self.time)
            .format(TIMESTAMP_FORMAT)
            .to_string()
    }
}

pub fn percent_encode(value: &str) -> String {
    utf8_percent_encode(value, RPC_ENCODE_SET).to_string()
}

/// `key=value` pairs, both percent-encoded, sorted by key and joined with `&`
pub fn canonical_query(params: &BTreeMap<String, String>) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", percent_encode(k), percent_encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

pub fn string_to_sign(method: &Method, params: &BTreeMap<String, String>) -> String {
    format!(
        "{}&{}&{}",
        method.as_str(),
        percent_encode("/"),
        percent_encode(&canonical_query(params))
    )
}

/// Build the complete signed query for `request`
///
/// The request's own parameters are applied first. Common parameters and the signer's extra
/// parameters overwrite any request parameter with the same name.
pub fn signed_query(
    request: &CommonRequest,
    signer: &dyn Signer,
    params: &SigningParams,
) -> Result<BTreeMap<String, String>, SignerError> {
    let access_key_id = signer.access_key_id()?;
    let mut query = request.query_params().clone();
    query.insert("Format".into(), "JSON".into());
    query.insert("Version".into(), request.version().into());
    query.insert("Action".into(), request.api_name().into());
    query.insert("AccessKeyId".into(), access_key_id);
    query.insert("SignatureMethod".into(), signer.name().into());
    if !signer.signer_type().is_empty() {
        query.insert("SignatureType".into(), signer.signer_type().into());
    }
    query.insert("SignatureVersion".into(), signer.version().into());
    query.insert("SignatureNonce".into(), params.nonce().into());
    query.insert("Timestamp".into(), params.timestamp());
    query.extend(signer.extra_params()?);

    let string_to_sign = string_to_sign(request.method(), &query);
    tracing::trace!(string_to_sign = %string_to_sign, "computed string to sign");
    let signature = signer.sign(&string_to_sign, SECRET_SUFFIX)?;
    query.insert("Signature".into(), signature);
    Ok(query)
}

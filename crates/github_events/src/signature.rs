//! Webhook delivery signature verification.
//!
//! GitHub signs each delivery with HMAC-SHA256 over the raw request body and
//! sends the result in the `x-hub-signature-256` header as
//! `sha256=<lowercase hex>`. Verification recomputes the digest with the
//! shared secret and compares the two full header strings in constant time.
//!
//! See [GitHub webhook delivery validation](https://docs.github.com/en/webhooks/using-webhooks/validating-webhook-deliveries).

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

#[cfg(test)]
#[path = "signature_tests.rs"]
mod tests;

/// Header carrying the HMAC-SHA256 signature of the request body.
pub const SIGNATURE_HEADER: &str = "x-hub-signature-256";

/// Prefix GitHub puts in front of the hex digest.
pub const SIGNATURE_PREFIX: &str = "sha256=";

/// Computes the signature header value for a payload.
///
/// Returns the full header value, `sha256=<lowercase hex>`. Used by the
/// verifier to build the expected value, and by tests to sign synthetic
/// deliveries.
pub fn sign_payload(payload: &[u8], secret: &[u8]) -> String {
    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(payload);

    format!(
        "{}{}",
        SIGNATURE_PREFIX,
        hex::encode(mac.finalize().into_bytes())
    )
}

/// Verifies the claimed signature header against the request body.
///
/// The claimed value is compared against the expected `sha256=<hex>` string
/// as a whole, in constant time. Anything that deviates from the expected
/// encoding fails: a missing header, a different prefix, uppercase hex, or
/// truncated or extended digests. No decoding or normalization is applied to
/// the claimed value before comparison.
pub fn verify_signature(payload: &[u8], signature_header: Option<&str>, secret: &[u8]) -> bool {
    let Some(claimed) = signature_header else {
        return false;
    };

    let expected = sign_payload(payload, secret);
    constant_time_eq(claimed.as_bytes(), expected.as_bytes())
}

/// Constant-time byte comparison to prevent timing attacks.
///
/// Slices of different lengths are unequal immediately; the claimed length
/// is not secret. For equal lengths every byte pair is folded into the
/// accumulator, so the duration does not depend on where the first mismatch
/// sits.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }
    result == 0
}

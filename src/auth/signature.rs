//! HMAC-SHA256 signature generation for CEX.IO API authentication.
//!
//! CEX.IO private commands require a signature computed as:
//! ```text
//! HEX_UPPER(HMAC-SHA256(nonce + username + api_key, api_secret))
//! ```
//!
//! The signature is sent in the `signature` form field next to `key` and `nonce`.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::auth::Credentials;

type HmacSha256 = Hmac<Sha256>;

/// Compute the CEX.IO signature for a nonce.
///
/// The message is the plain concatenation of `nonce`, `username` and `api_key`
/// with no separators. Inputs are not validated.
///
/// # Example
///
/// ```rust
/// use cexio_api_client::auth::sign;
///
/// let signature = sign("1513177918000", "up123456789", "api_key", "api_secret");
/// assert_eq!(signature.len(), 64);
/// assert_eq!(signature, signature.to_uppercase());
/// ```
pub fn sign(nonce: &str, username: &str, api_key: &str, api_secret: &str) -> String {
    let mut hmac =
        HmacSha256::new_from_slice(api_secret.as_bytes()).expect("HMAC can take key of any size");
    hmac.update(nonce.as_bytes());
    hmac.update(username.as_bytes());
    hmac.update(api_key.as_bytes());
    hex::encode_upper(hmac.finalize().into_bytes())
}

/// Sign a private request for the given credentials and nonce.
pub fn sign_request(credentials: &Credentials, nonce: u64) -> String {
    sign(
        &nonce.to_string(),
        &credentials.username,
        &credentials.api_key,
        credentials.expose_secret(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_known_vector() {
        // RFC 4231 test case 2: key "Jefe", data "what do ya want for nothing?".
        let signature = sign("what do ya", " want for ", "nothing?", "Jefe");
        assert_eq!(
            signature,
            "5BDCC146BF60754E6A042426089575C75A003F089D2739839DEC58B964EC3843"
        );
    }

    #[test]
    fn test_signature_format() {
        let signature = sign("1616492376594", "up100000000", "test_key", "test_secret");
        // HMAC-SHA256 produces 32 bytes, hex encoded = 64 chars
        assert_eq!(signature.len(), 64);
        assert!(
            signature
                .chars()
                .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c))
        );
    }

    #[test]
    fn test_signature_consistency() {
        let sig1 = sign("12345", "user", "key", "secret");
        let sig2 = sign("12345", "user", "key", "secret");
        assert_eq!(sig1, sig2);
    }

    #[test]
    fn test_signature_changes_with_each_input() {
        let base = sign("12345", "user", "key", "secret");
        assert_ne!(base, sign("12346", "user", "key", "secret"));
        assert_ne!(base, sign("12345", "user2", "key", "secret"));
        assert_ne!(base, sign("12345", "user", "key2", "secret"));
        assert_ne!(base, sign("12345", "user", "key", "secret2"));
    }

    #[test]
    fn test_adjacent_nonces_never_collide() {
        let start = 1_700_000_000_000u64;
        let signatures: std::collections::HashSet<String> = (start..start + 1000)
            .map(|n| sign(&n.to_string(), "user", "key", "secret"))
            .collect();
        assert_eq!(signatures.len(), 1000);
    }

    #[test]
    fn test_sign_request_matches_sign() {
        let credentials = Credentials::new("user", "key", "secret");
        assert_eq!(
            sign_request(&credentials, 42),
            sign("42", "user", "key", "secret")
        );
    }
}

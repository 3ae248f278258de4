//! Spelling helpers for type and class mnemonics.
//!
//! Mnemonics are case-insensitive on lookup but stored exactly as discovered (lower case, digits and `-`).
//! Generated identifiers need `-` turned into `_`, and the generated text accessors need upper case.

use crate::errors::RegistryError;

/// Turn a mnemonic into an identifier fragment (`nsec3-param` → `nsec3_param`).
///
/// ## Examples
/// ```rust
/// assert_eq!(rdatagen_core::funname("smime-a"), "smime_a");
/// ```
pub fn funname(mnemonic: &str) -> String {
    mnemonic.replace('-', "_")
}

/// ASCII upper-case; anything outside `a-z` passes through untouched.
pub fn upper(s: &str) -> String {
    s.to_ascii_uppercase()
}

/// Default attribute expression for a type registered without an explicit one.
///
/// ## Examples
/// ```rust
/// assert_eq!(rdatagen_core::mnemonic::default_attributes("nsec3-param"), "RRTYPE_NSEC3_PARAM_ATTRIBUTES");
/// ```
pub fn default_attributes(mnemonic: &str) -> String {
    format!("RRTYPE_{}_ATTRIBUTES", upper(&funname(mnemonic)))
}

/// Compute the bucket of a mnemonic in the generated text-to-type lookup.
///
/// `hash(s) = ((lower(s[0]) + len) * lower(s[len - 1])) mod 256`
///
/// The arithmetic wraps at 64 bits; since 256 divides 2^64 the result is the exact residue.
///
/// ## Errors
/// - [`RegistryError::EmptyMnemonic`] for `""`.
///
/// ## Examples
/// ```rust
/// use rdatagen_core::mnemonic_hash;
///
/// assert_eq!(mnemonic_hash("A"), mnemonic_hash("a"));
/// assert_eq!(mnemonic_hash("a").unwrap(), 34);
/// ```
pub fn mnemonic_hash(mnemonic: &str) -> Result<u8, RegistryError> {
    let bytes = mnemonic.as_bytes();
    let (Some(first), Some(last)) = (bytes.first(), bytes.last()) else {
        return Err(RegistryError::EmptyMnemonic);
    };
    let a = u64::from(first.to_ascii_lowercase());
    let b = u64::from(last.to_ascii_lowercase());
    let n = bytes.len() as u64;
    Ok((a.wrapping_add(n).wrapping_mul(b) % 256) as u8)
}

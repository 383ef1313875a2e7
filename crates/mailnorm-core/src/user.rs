use precis_core::profile::PrecisFastInvocation;
use precis_profiles::UsernameCaseMapped;

use crate::error::NormalizeError;
use crate::outcome::Normalized;

/// Normalizes a username with the PRECIS UsernameCaseMapped profile (RFC 8265).
///
/// Width mapping, case mapping and NFC are applied, and code points outside
/// the identifier class are rejected. A rejected username comes back
/// unchanged together with the profile error.
pub fn normalize_user(user: &str) -> Normalized {
    match UsernameCaseMapped::enforce(user) {
        Ok(mapped) => Normalized::ok(mapped.into_owned()),
        Err(err) => Normalized::fallback(user, NormalizeError::UserProfile(err.to_string())),
    }
}

use tracing::debug;

use crate::domain::normalize_domain;
use crate::outcome::Normalized;
use crate::split::{AddressSplitter, SeparatorSplitter};
use crate::user::normalize_user;

/// Null reverse-path used for bounces. Never split or normalized.
pub const NULL_ADDRESS: &str = "<>";

/// Address normalization over a pluggable splitter.
///
/// Holds no state besides the splitter, so one instance can be shared freely.
#[derive(Debug, Clone, Default)]
pub struct Normalizer<S = SeparatorSplitter> {
    splitter: S,
}

impl<S: AddressSplitter> Normalizer<S> {
    pub fn new(splitter: S) -> Self {
        Self { splitter }
    }

    pub fn splitter(&self) -> &S {
        &self.splitter
    }

    pub fn user(&self, user: &str) -> Normalized {
        normalize_user(user)
    }

    pub fn domain(&self, domain: &str) -> Normalized {
        normalize_domain(domain)
    }

    /// Normalizes both parts of an address and rejoins them with `@`.
    ///
    /// Either the whole address is normalized or the original comes back
    /// unchanged; the domain is not looked at when the user fails. The null
    /// address is returned as is.
    pub fn address(&self, address: &str) -> Normalized {
        if address == NULL_ADDRESS {
            return Normalized::ok(NULL_ADDRESS);
        }

        let (user, domain) = self.splitter.split(address);

        let user = match normalize_user(user).into_result() {
            Ok(user) => user,
            Err(err) => {
                debug!(address, error = %err, "address user not normalized");
                return Normalized::fallback(address, err);
            }
        };

        let domain = match normalize_domain(domain).into_result() {
            Ok(domain) => domain,
            Err(err) => {
                debug!(address, error = %err, "address domain not normalized");
                return Normalized::fallback(address, err);
            }
        };

        Normalized::ok(format!("{user}@{domain}"))
    }

    /// Converts the domain of an address to Unicode for display.
    ///
    /// The local part is kept byte for byte. If the domain fails, the result
    /// still joins the untouched local part with the original domain.
    pub fn domain_to_unicode(&self, address: &str) -> Normalized {
        if address == NULL_ADDRESS {
            return Normalized::ok(NULL_ADDRESS);
        }

        let (user, domain) = self.splitter.split(address);
        let (domain, error) = normalize_domain(domain).into_parts();
        let joined = format!("{user}@{domain}");
        match error {
            None => Normalized::ok(joined),
            Some(err) => {
                debug!(address, error = %err, "display domain not normalized");
                Normalized::fallback(joined, err)
            }
        }
    }

    /// True when both addresses normalize cleanly to the same value.
    ///
    /// The null address names no mailbox and never matches, not even itself.
    pub fn same_mailbox(&self, a: &str, b: &str) -> bool {
        if a == NULL_ADDRESS || b == NULL_ADDRESS {
            return false;
        }
        let a = self.address(a);
        let b = self.address(b);
        a.is_ok() && b.is_ok() && a.value() == b.value()
    }
}

pub fn normalize_address(address: &str) -> Normalized {
    Normalizer::<SeparatorSplitter>::default().address(address)
}

pub fn domain_to_unicode(address: &str) -> Normalized {
    Normalizer::<SeparatorSplitter>::default().domain_to_unicode(address)
}

pub fn same_mailbox(a: &str, b: &str) -> bool {
    Normalizer::<SeparatorSplitter>::default().same_mailbox(a, b)
}

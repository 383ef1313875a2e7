use idna::uts46::{AsciiDenyList, DnsLength, Hyphens, Uts46};
use unicode_normalization::UnicodeNormalization;

use crate::error::NormalizeError;
use crate::outcome::Normalized;

const INVALID_LABEL: &str = "malformed internationalized domain label";

/// Normalizes a DNS domain into its Unicode comparison form.
///
/// The steps run in a fixed order: IDNA `ToUnicode` (punycode labels are
/// decoded and label structure checked), then NFC, then lowercase. ASCII in
/// a label is limited to letters, digits and inner hyphens, and each label
/// is at most 63 octets in its ASCII form. A domain that fails IDNA processing comes back unchanged with
/// the error. The result is stable: normalizing it again yields the same
/// string.
pub fn normalize_domain(domain: &str) -> Normalized {
    if domain.is_empty() {
        return Normalized::ok("");
    }

    let uts46 = Uts46::new();
    let checked = uts46.to_ascii(
        domain.as_bytes(),
        AsciiDenyList::STD3,
        Hyphens::CheckFirstLast,
        DnsLength::VerifyAllowRootDot,
    );
    if checked.is_err() {
        return invalid(domain);
    }

    let (decoded, status) =
        uts46.to_unicode(domain.as_bytes(), AsciiDenyList::STD3, Hyphens::CheckFirstLast);
    if status.is_err() {
        return invalid(domain);
    }

    let composed: String = decoded.nfc().collect();
    Normalized::ok(composed.to_lowercase())
}

fn invalid(domain: &str) -> Normalized {
    Normalized::fallback(domain, NormalizeError::DomainFormat(INVALID_LABEL.to_string()))
}

#[cfg(test)]
mod tests {
    use super::normalize_domain;

    #[test]
    fn normalize_domain_lowercases() {
        assert_eq!(normalize_domain("EXAMPLE.COM").value(), "example.com");
        assert_eq!(normalize_domain("ÑAndÚ").value(), "ñandú");
    }

    #[test]
    fn normalize_domain_decodes_punycode() {
        let outcome = normalize_domain("xn--aca-6ma");
        assert!(outcome.is_ok());
        assert_eq!(outcome.value(), "ñaca");
    }

    #[test]
    fn normalize_domain_decodes_mixed_labels() {
        assert_eq!(
            normalize_domain("mail.XN--MNCHEN-3YA.de").value(),
            "mail.münchen.de"
        );
    }

    #[test]
    fn normalize_domain_composes() {
        // "u" followed by a combining diaeresis.
        let outcome = normalize_domain("mu\u{0308}nchen.de");
        assert_eq!(outcome.value(), "m\u{00fc}nchen.de");
    }

    #[test]
    fn normalize_domain_rejects_malformed_punycode() {
        let outcome = normalize_domain("xn--ñ.com");
        assert_eq!(outcome.value(), "xn--ñ.com");
        assert!(outcome.error().expect("error").is_domain());
    }

    #[test]
    fn normalize_domain_error_names_the_problem() {
        let err = normalize_domain("xn--ñ.com").into_result().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid domain: malformed internationalized domain label"
        );
    }

    #[test]
    fn normalize_domain_rejects_edge_hyphens() {
        for raw in ["-abc.com", "abc-.com", "mail.-abc.com"] {
            let outcome = normalize_domain(raw);
            assert_eq!(outcome.value(), raw, "value for {raw:?}");
            assert!(outcome.error().expect("error").is_domain(), "{raw:?}");
        }
    }

    #[test]
    fn normalize_domain_rejects_long_labels() {
        let raw = format!("{}.com", "a".repeat(64));
        let outcome = normalize_domain(&raw);
        assert_eq!(outcome.value(), raw);
        assert!(outcome.error().expect("error").is_domain());

        let longest = format!("{}.com", "a".repeat(63));
        assert!(normalize_domain(&longest).is_ok());
    }

    #[test]
    fn normalize_domain_rejects_non_ldh_ascii() {
        for raw in ["a b.com", "x@y.com", "a\0b.com"] {
            let outcome = normalize_domain(raw);
            assert_eq!(outcome.value(), raw, "value for {raw:?}");
            assert!(!outcome.is_ok(), "{raw:?}");
        }
    }

    #[test]
    fn normalize_domain_keeps_inner_hyphens() {
        assert_eq!(
            normalize_domain("Mail-Relay.example").value(),
            "mail-relay.example"
        );
    }

    #[test]
    fn normalize_domain_empty_is_ok() {
        let outcome = normalize_domain("");
        assert!(outcome.is_ok());
        assert_eq!(outcome.value(), "");
    }
}

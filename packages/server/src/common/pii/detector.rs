use lazy_static::lazy_static;
use regex::Regex;

/// Kind of PII a redaction pass targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RedactionCategory {
    Email,
    Phone,
    NationalId,
    ProfileUrl,
    Address,
    MessagingContact,
    LinkedIn,
    SocialHandle,
}

impl RedactionCategory {
    /// Every category, in the order the passes must run.
    ///
    /// Each pass sees the output of the previous one. Email has to run before
    /// the social handle pass, otherwise `@domain` would be eaten as a handle.
    pub const ALL: [RedactionCategory; 8] = [
        RedactionCategory::Email,
        RedactionCategory::Phone,
        RedactionCategory::NationalId,
        RedactionCategory::ProfileUrl,
        RedactionCategory::Address,
        RedactionCategory::MessagingContact,
        RedactionCategory::LinkedIn,
        RedactionCategory::SocialHandle,
    ];

    /// Token that replaces every match of this category.
    ///
    /// None of these contain digits or `@`, so scrubbing already scrubbed text
    /// leaves it unchanged.
    pub fn placeholder(&self) -> &'static str {
        match self {
            RedactionCategory::Email => "[EMAIL REDACTED]",
            RedactionCategory::Phone => "[PHONE REDACTED]",
            RedactionCategory::NationalId => "[ID REDACTED]",
            RedactionCategory::ProfileUrl => "[URL REDACTED]",
            RedactionCategory::Address => "[ADDRESS REDACTED]",
            RedactionCategory::MessagingContact => "[CONTACT REDACTED]",
            RedactionCategory::LinkedIn => "[LINKEDIN REDACTED]",
            RedactionCategory::SocialHandle => "[SOCIAL MEDIA HANDLE REDACTED]",
        }
    }

    /// Stable name for logs and metrics labels
    pub fn as_str(&self) -> &'static str {
        match self {
            RedactionCategory::Email => "email",
            RedactionCategory::Phone => "phone",
            RedactionCategory::NationalId => "national_id",
            RedactionCategory::ProfileUrl => "profile_url",
            RedactionCategory::Address => "address",
            RedactionCategory::MessagingContact => "messaging_contact",
            RedactionCategory::LinkedIn => "linkedin",
            RedactionCategory::SocialHandle => "social_handle",
        }
    }

    pub(crate) fn pattern(&self) -> &'static Regex {
        match self {
            RedactionCategory::Email => &*EMAIL_REGEX,
            RedactionCategory::Phone => &*PHONE_REGEX,
            RedactionCategory::NationalId => &*NATIONAL_ID_REGEX,
            RedactionCategory::ProfileUrl => &*PROFILE_URL_REGEX,
            RedactionCategory::Address => &*ADDRESS_REGEX,
            RedactionCategory::MessagingContact => &*MESSAGING_CONTACT_REGEX,
            RedactionCategory::LinkedIn => &*LINKEDIN_REGEX,
            RedactionCategory::SocialHandle => &*SOCIAL_HANDLE_REGEX,
        }
    }
}

impl std::fmt::Display for RedactionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One match found by a redaction pass.
///
/// `start`/`end` are byte offsets into the text that pass ran over, which is
/// the original text already rewritten by every earlier pass.
#[derive(Debug, Clone)]
pub struct PiiMatch {
    pub category: RedactionCategory,
    pub value: String,
    pub start: usize,
    pub end: usize,
}

/// Collection of matches, in pass order
#[derive(Debug, Default, Clone)]
pub struct PiiFindings {
    pub matches: Vec<PiiMatch>,
}

impl PiiFindings {
    pub fn new() -> Self {
        Self {
            matches: Vec::new(),
        }
    }

    pub fn add(&mut self, category: RedactionCategory, value: String, start: usize, end: usize) {
        self.matches.push(PiiMatch {
            category,
            value,
            start,
            end,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn count(&self) -> usize {
        self.matches.len()
    }

    pub fn by_category(&self, category: RedactionCategory) -> Vec<&PiiMatch> {
        self.matches
            .iter()
            .filter(|m| m.category == category)
            .collect()
    }

    /// Distinct categories that matched, in pass order.
    pub fn categories(&self) -> Vec<RedactionCategory> {
        RedactionCategory::ALL
            .into_iter()
            .filter(|category| self.matches.iter().any(|m| m.category == *category))
            .collect()
    }
}

lazy_static! {
    // local-part@domain.tld
    static ref EMAIL_REGEX: Regex = Regex::new(
        r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}"
    ).unwrap();

    // Word boundaries below are ASCII-only: CJK or accented letters next to
    // the digits still count as a boundary.

    // Optional country code, optional parens around the area code, 3-3-4 digits
    static ref PHONE_REGEX: Regex = Regex::new(
        r"(?-u:\b)(\+[0-9]{1,3}[\s-]?)?\(?[0-9]{3}\)?[\s.-]?[0-9]{3}[\s.-]?[0-9]{4}(?-u:\b)"
    ).unwrap();

    // XXX-XX-XXXX with optional dash or space separators
    static ref NATIONAL_ID_REGEX: Regex = Regex::new(
        r"(?-u:\b)[0-9]{3}[-\s]?[0-9]{2}[-\s]?[0-9]{4}(?-u:\b)"
    ).unwrap();

    static ref PROFILE_URL_REGEX: Regex = Regex::new(
        r"https?://[^\s/]+/(?:user|profile|account|u)/[a-zA-Z0-9_-]+"
    ).unwrap();

    // House number, street words, then a street suffix
    static ref ADDRESS_REGEX: Regex = Regex::new(
        r"(?-u:\b)[0-9]+\s+[A-Za-z0-9\s,]+(?:Avenue|Ave|Street|St|Road|Rd|Boulevard|Blvd|Lane|Ln|Drive|Dr|Way|Court|Ct|Plaza|Square|Sq|Trail|Tr|Parkway|Pkwy|Circle|Cir)(?-u:\b)"
    ).unwrap();

    static ref MESSAGING_CONTACT_REGEX: Regex = Regex::new(
        r"(?-u:\b)(?:whatsapp|telegram|signal|viber)(?:\s+at)?\s+[+]?[0-9][0-9\s-]{7,}"
    ).unwrap();

    static ref LINKEDIN_REGEX: Regex = Regex::new(
        r"linkedin\.com/in/[a-zA-Z0-9_-]+"
    ).unwrap();

    static ref SOCIAL_HANDLE_REGEX: Regex = Regex::new(
        r"@[a-zA-Z0-9_]{2,}"
    ).unwrap();
}

/// Run every pass over `text` and report what each one matched.
///
/// The passes rewrite the text as they go, exactly as scrubbing does, so a
/// later category never reports something an earlier category already
/// replaced.
pub fn detect_pii(text: &str) -> PiiFindings {
    super::redactor::scrub_pii_with_report(text).findings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_emails() {
        let findings = detect_pii("Contact me at john.doe@example.com or jane@test.org");

        let emails = findings.by_category(RedactionCategory::Email);
        assert_eq!(emails.len(), 2);
        assert_eq!(emails[0].value, "john.doe@example.com");
        assert_eq!(emails[1].value, "jane@test.org");
    }

    #[test]
    fn test_detect_phones() {
        let findings = detect_pii("Call me at 555.987.6543 or 555-111-2222");

        let phones = findings.by_category(RedactionCategory::Phone);
        assert_eq!(phones.len(), 2);
        assert_eq!(phones[0].value, "555.987.6543");
    }

    #[test]
    fn test_detect_national_id() {
        let findings = detect_pii("My ID is 123-45-6789 for verification.");

        let ids = findings.by_category(RedactionCategory::NationalId);
        assert_eq!(ids.len(), 1);
        assert_eq!(ids[0].value, "123-45-6789");
        assert!(findings.by_category(RedactionCategory::Phone).is_empty());
    }

    #[test]
    fn test_detect_digits_between_cjk_text() {
        let findings = detect_pii("电话5551234567号码, 身份证123-45-6789");

        let phones = findings.by_category(RedactionCategory::Phone);
        assert_eq!(phones.len(), 1);
        assert_eq!(phones[0].value, "5551234567");

        let ids = findings.by_category(RedactionCategory::NationalId);
        assert_eq!(ids.len(), 1);
        assert_eq!(ids[0].value, "123-45-6789");
    }

    #[test]
    fn test_email_is_not_reported_as_handle() {
        let findings = detect_pii("Mail jane@example.com");

        assert_eq!(findings.by_category(RedactionCategory::Email).len(), 1);
        assert!(findings.by_category(RedactionCategory::SocialHandle).is_empty());
    }

    #[test]
    fn test_categories_follow_pass_order() {
        let findings = detect_pii("@handle then jane@example.com then 555-123-4567");

        assert_eq!(
            findings.categories(),
            vec![
                RedactionCategory::Email,
                RedactionCategory::Phone,
                RedactionCategory::SocialHandle
            ]
        );
    }

    #[test]
    fn test_placeholders_are_safe_from_every_pattern() {
        for category in RedactionCategory::ALL {
            let token = category.placeholder();
            assert!(!token.contains('@'));
            assert!(!token.chars().any(|c| c.is_ascii_digit()));
            for pattern_owner in RedactionCategory::ALL {
                assert!(
                    !pattern_owner.pattern().is_match(token),
                    "{} pattern matches {} placeholder",
                    pattern_owner,
                    category
                );
            }
        }
    }

    #[test]
    fn test_empty_text() {
        let findings = detect_pii("");
        assert!(findings.is_empty());
        assert_eq!(findings.count(), 0);
    }
}

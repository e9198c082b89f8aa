use regex::NoExpand;

use super::detector::{PiiFindings, RedactionCategory};

/// Result of scrubbing a piece of text
#[derive(Debug, Clone)]
pub struct ScrubResult {
    pub clean_text: String,
    pub findings: PiiFindings,
    pub pii_detected: bool,
}

/// Replace every PII match in `text` with its category placeholder.
///
/// Categories run in [`RedactionCategory::ALL`] order and each pass rewrites
/// the output of the previous one. Total: any input is accepted and text
/// without PII comes back unchanged.
pub fn scrub_pii(text: &str) -> String {
    RedactionCategory::ALL
        .iter()
        .fold(text.to_string(), |current, category| {
            category
                .pattern()
                .replace_all(&current, NoExpand(category.placeholder()))
                .into_owned()
        })
}

/// Same as [`scrub_pii`], also returning what each pass replaced.
pub fn scrub_pii_with_report(text: &str) -> ScrubResult {
    let mut findings = PiiFindings::new();
    let mut current = text.to_string();

    for category in RedactionCategory::ALL {
        let pattern = category.pattern();

        for mat in pattern.find_iter(&current) {
            findings.add(category, mat.as_str().to_string(), mat.start(), mat.end());
        }

        current = pattern
            .replace_all(&current, NoExpand(category.placeholder()))
            .into_owned();
    }

    let pii_detected = !findings.is_empty();

    ScrubResult {
        clean_text: current,
        findings,
        pii_detected,
    }
}

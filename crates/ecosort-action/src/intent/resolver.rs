//! Waste-category resolution.
//!
//! Maps a slot value to a response identifier using the ordered rule table.
//! Resolution is pure and total: every input yields exactly one
//! [`ResolutionResult`].

use ecosort_core::types::ResolutionResult;
use tracing::debug;

use crate::intent::rules::RuleSet;

/// A resolution together with the keyword that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Explanation<'a> {
    pub result: ResolutionResult,
    /// Keyword that triggered the match; `None` unless `result` is `Matched`.
    pub keyword: Option<&'a str>,
}

/// Stateless resolver over an immutable rule table.
///
/// Safe to share across threads; the table is never mutated after
/// construction.
#[derive(Debug, Clone, Default)]
pub struct CategoryResolver {
    rules: RuleSet,
}

impl CategoryResolver {
    /// Create a resolver over a custom rule table.
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// Rules in evaluation order.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Resolve a slot value.
    ///
    /// Blank or absent input yields `NeedsInput`. Otherwise the input is
    /// lowercased (nothing else is normalized) and the first rule with a
    /// keyword substring wins. No match yields `Unmatched` with the
    /// original, case-preserved text.
    pub fn resolve(&self, input: Option<&str>) -> ResolutionResult {
        self.explain(input).result
    }

    /// Like [`resolve`](Self::resolve), also reporting the matching keyword.
    pub fn explain<'a>(&'a self, input: Option<&str>) -> Explanation<'a> {
        let text = match input {
            Some(text) if !text.trim().is_empty() => text,
            _ => {
                debug!("Waste category missing");
                return Explanation {
                    result: ResolutionResult::NeedsInput,
                    keyword: None,
                };
            }
        };

        let lowered = text.to_lowercase();
        match self.rules.first_match(&lowered) {
            Some((rule, keyword)) => {
                debug!(response_id = %rule.response_id(), keyword, "Waste category matched");
                Explanation {
                    result: ResolutionResult::Matched(rule.response_id()),
                    keyword: Some(keyword),
                }
            }
            None => {
                debug!(input_len = text.len(), "Waste category unmatched");
                Explanation {
                    result: ResolutionResult::Unmatched(text.to_string()),
                    keyword: None,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::rules::CategoryRule;
    use ecosort_core::types::ResponseId;

    fn resolver() -> CategoryResolver {
        CategoryResolver::default()
    }

    fn matched(id: ResponseId) -> ResolutionResult {
        ResolutionResult::Matched(id)
    }

    // =====================================================================
    // Missing input
    // =====================================================================

    #[test]
    fn test_absent_input_needs_input() {
        assert_eq!(resolver().resolve(None), ResolutionResult::NeedsInput);
    }

    #[test]
    fn test_blank_input_needs_input() {
        for blank in ["", "  ", "\t", "\n \r\n"] {
            assert_eq!(
                resolver().resolve(Some(blank)),
                ResolutionResult::NeedsInput,
                "{:?} should need input",
                blank
            );
        }
    }

    // =====================================================================
    // Single-rule matches
    // =====================================================================

    #[test]
    fn test_every_keyword_selects_its_rule() {
        let r = resolver();
        for rule in r.rules() {
            for keyword in rule.keywords() {
                let input = format!("some {} stuff", keyword);
                assert_eq!(
                    r.resolve(Some(&input)),
                    matched(rule.response_id()),
                    "keyword {}",
                    keyword
                );
            }
        }
    }

    #[test]
    fn test_aluminum_cans() {
        assert_eq!(
            resolver().resolve(Some("Aluminum cans")),
            matched(ResponseId::MetalRecycling)
        );
    }

    #[test]
    fn test_old_laptop_device() {
        assert_eq!(
            resolver().resolve(Some("old laptop device")),
            matched(ResponseId::EWasteDisposal)
        );
    }

    #[test]
    fn test_keyword_inside_longer_word() {
        // Substring semantics: "newspapers" contains "paper".
        assert_eq!(
            resolver().resolve(Some("newspapers")),
            matched(ResponseId::PaperRecycling)
        );
        assert_eq!(
            resolver().resolve(Some("composting scraps")),
            matched(ResponseId::Composting)
        );
    }

    #[test]
    fn test_hyphenated_keyword() {
        assert_eq!(
            resolver().resolve(Some("E-Waste drop off")),
            matched(ResponseId::EWasteDisposal)
        );
    }

    // =====================================================================
    // Case handling
    // =====================================================================

    #[test]
    fn test_case_insensitive() {
        let r = resolver();
        assert_eq!(
            r.resolve(Some("PLASTIC bottle")),
            matched(ResponseId::PlasticRecycling)
        );
        assert_eq!(
            r.resolve(Some("plastic bottle")),
            matched(ResponseId::PlasticRecycling)
        );
        assert_eq!(
            r.resolve(Some("ToXiC paint")),
            matched(ResponseId::HazardousWaste)
        );
    }

    #[test]
    fn test_surrounding_whitespace_still_matches() {
        assert_eq!(
            resolver().resolve(Some("   glass   ")),
            matched(ResponseId::GlassRecycling)
        );
    }

    // =====================================================================
    // Tie-break
    // =====================================================================

    #[test]
    fn test_plastic_beats_glass() {
        assert_eq!(
            resolver().resolve(Some("plastic and glass bottles")),
            matched(ResponseId::PlasticRecycling)
        );
    }

    #[test]
    fn test_earliest_rule_wins_regardless_of_text_position() {
        let r = resolver();
        // "steel" appears first in the text, but paper precedes metal.
        assert_eq!(
            r.resolve(Some("steel and cardboard")),
            matched(ResponseId::PaperRecycling)
        );
        // Composting precedes hazardous.
        assert_eq!(
            r.resolve(Some("toxic food waste")),
            matched(ResponseId::Composting)
        );
    }

    #[test]
    fn test_custom_table_order_is_honored() {
        let rules = RuleSet::new(vec![
            CategoryRule::new(ResponseId::HazardousWaste, ["battery"]).unwrap(),
            CategoryRule::new(ResponseId::EWasteDisposal, ["battery", "phone"]).unwrap(),
        ])
        .unwrap();
        let r = CategoryResolver::new(rules);
        assert_eq!(
            r.resolve(Some("phone battery")),
            matched(ResponseId::HazardousWaste)
        );
        assert_eq!(r.resolve(Some("phone")), matched(ResponseId::EWasteDisposal));
    }

    // =====================================================================
    // Unmatched
    // =====================================================================

    #[test]
    fn test_rubber_tires_unmatched() {
        assert_eq!(
            resolver().resolve(Some("rubber tires")),
            ResolutionResult::Unmatched("rubber tires".to_string())
        );
    }

    #[test]
    fn test_unmatched_preserves_original_text() {
        assert_eq!(
            resolver().resolve(Some("  Rubber TIRES!  ")),
            ResolutionResult::Unmatched("  Rubber TIRES!  ".to_string())
        );
    }

    #[test]
    fn test_no_normalization_beyond_case() {
        // Accents and inner spacing are not folded.
        assert_eq!(
            resolver().resolve(Some("pâper")),
            ResolutionResult::Unmatched("pâper".to_string())
        );
        assert_eq!(
            resolver().resolve(Some("e waste")),
            ResolutionResult::Unmatched("e waste".to_string())
        );
    }

    // =====================================================================
    // Explain
    // =====================================================================

    #[test]
    fn test_explain_reports_keyword() {
        let r = resolver();
        let explanation = r.explain(Some("Steel beams"));
        assert_eq!(explanation.result, matched(ResponseId::MetalRecycling));
        assert_eq!(explanation.keyword, Some("steel"));

        let explanation = r.explain(Some("rubber"));
        assert_eq!(explanation.keyword, None);

        let explanation = r.explain(None);
        assert_eq!(explanation.result, ResolutionResult::NeedsInput);
        assert_eq!(explanation.keyword, None);
    }

    #[test]
    fn test_resolver_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CategoryResolver>();
    }
}

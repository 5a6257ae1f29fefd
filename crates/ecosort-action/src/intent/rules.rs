//! Declarative category rule table.
//!
//! Each rule pairs a response identifier with the lowercase keywords that
//! trigger it. Rules are evaluated top to bottom and the first match wins,
//! so table order is the tie-break policy.

use ecosort_core::error::{EcosortError, Result};
use ecosort_core::types::ResponseId;

/// A response identifier and the keywords that select it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRule {
    response_id: ResponseId,
    keywords: Vec<String>,
}

impl CategoryRule {
    /// Build a rule, rejecting empty or non-lowercase keywords.
    pub fn new<I, S>(response_id: ResponseId, keywords: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let keywords: Vec<String> = keywords.into_iter().map(Into::into).collect();

        if keywords.is_empty() {
            return Err(EcosortError::InvalidRule(format!(
                "{} has no keywords",
                response_id
            )));
        }
        for keyword in &keywords {
            if keyword.is_empty() {
                return Err(EcosortError::InvalidRule(format!(
                    "{} has an empty keyword",
                    response_id
                )));
            }
            if keyword.to_lowercase() != *keyword {
                return Err(EcosortError::InvalidRule(format!(
                    "{} keyword '{}' is not lowercase",
                    response_id, keyword
                )));
            }
        }

        Ok(Self {
            response_id,
            keywords,
        })
    }

    pub fn response_id(&self) -> ResponseId {
        self.response_id
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Return the first keyword contained in `lowered`, if any.
    ///
    /// `lowered` must already be lowercase.
    pub fn first_hit(&self, lowered: &str) -> Option<&str> {
        self.keywords
            .iter()
            .map(String::as_str)
            .find(|keyword| lowered.contains(keyword))
    }
}

/// Ordered, immutable list of category rules.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<CategoryRule>,
}

impl Default for RuleSet {
    /// The fixed waste-category table.
    fn default() -> Self {
        let table: [(ResponseId, &[&str]); 7] = [
            (ResponseId::PlasticRecycling, &["plastic"]),
            (ResponseId::PaperRecycling, &["paper", "cardboard"]),
            (ResponseId::GlassRecycling, &["glass"]),
            (ResponseId::MetalRecycling, &["metal", "aluminum", "steel"]),
            (ResponseId::Composting, &["food", "organic", "compost"]),
            (
                ResponseId::EWasteDisposal,
                &["electronic", "e-waste", "device"],
            ),
            (
                ResponseId::HazardousWaste,
                &["hazardous", "chemical", "toxic"],
            ),
        ];

        let rules = table
            .iter()
            .map(|(id, keywords)| CategoryRule {
                response_id: *id,
                keywords: keywords.iter().map(|k| k.to_string()).collect(),
            })
            .collect();

        Self { rules }
    }
}

impl RuleSet {
    /// Build a rule set from already-validated rules, in evaluation order.
    pub fn new(rules: Vec<CategoryRule>) -> Result<Self> {
        if rules.is_empty() {
            return Err(EcosortError::InvalidRule("rule set is empty".into()));
        }
        Ok(Self { rules })
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rules in evaluation order.
    pub fn iter(&self) -> std::slice::Iter<'_, CategoryRule> {
        self.rules.iter()
    }

    /// First rule with a keyword in `lowered`, plus the keyword that hit.
    pub fn first_match(&self, lowered: &str) -> Option<(&CategoryRule, &str)> {
        self.rules
            .iter()
            .find_map(|rule| rule.first_hit(lowered).map(|keyword| (rule, keyword)))
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a CategoryRule;
    type IntoIter = std::slice::Iter<'a, CategoryRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

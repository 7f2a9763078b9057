// ABOUTME: Prompt template for the district strategy insight
// ABOUTME: Renders location facts and style rules into the single user-role prompt
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pyxis Store Info

//! # Insight Prompt
//!
//! The template is loaded at compile time from a markdown file. Placeholders
//! `{dong}`, `{peak_hour}`, `{main_age}`, `{top_category}` and
//! `{style_rules}` are substituted on render.

/// Default strategy prompt
pub const INSIGHT_STRATEGY_TEMPLATE: &str = include_str!("insight_strategy.md");

/// Sampling temperature for strategy narratives
pub const INSIGHT_TEMPERATURE: f32 = 0.7;

/// Default style rules appended as a bullet list
pub const DEFAULT_STYLE_RULES: [&str; 3] = [
    "너무 길지 않게",
    "분석가 스타일",
    "실질적인 전략 한 가지 포함",
];

/// Derived facts embedded into the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsightFacts<'a> {
    /// Location key
    pub dong: &'a str,
    /// Peak hour label or the unknown sentinel
    pub peak_hour: &'a str,
    /// Dominant age bracket label or the unknown sentinel
    pub main_age: &'a str,
    /// Top shop category or the unknown sentinel
    pub top_category: &'a str,
}

/// Template string plus fixed style rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsightPromptTemplate {
    template: String,
    style_rules: Vec<String>,
}

impl Default for InsightPromptTemplate {
    fn default() -> Self {
        Self {
            template: INSIGHT_STRATEGY_TEMPLATE.to_owned(),
            style_rules: DEFAULT_STYLE_RULES.iter().map(|r| (*r).to_owned()).collect(),
        }
    }
}

impl InsightPromptTemplate {
    /// Substitute the facts and rules into the template
    ///
    /// Only the template text is scanned for `{name}` tokens; substituted
    /// values are copied verbatim, so a value that itself looks like a
    /// placeholder is never expanded. Unknown tokens are left as written.
    #[must_use]
    pub fn render(&self, facts: &InsightFacts<'_>) -> String {
        let rules = self
            .style_rules
            .iter()
            .map(|rule| format!("- {rule}"))
            .collect::<Vec<_>>()
            .join("\n");

        let mut out = String::with_capacity(self.template.len() + rules.len() + 64);
        let mut rest = self.template.as_str();
        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let value = after.find('}').and_then(|close| {
                let value = match &after[..close] {
                    "dong" => facts.dong,
                    "peak_hour" => facts.peak_hour,
                    "main_age" => facts.main_age,
                    "top_category" => facts.top_category,
                    "style_rules" => rules.as_str(),
                    _ => return None,
                };
                Some((value, close))
            });
            match value {
                Some((value, close)) => {
                    out.push_str(value);
                    rest = &after[close + 1..];
                }
                None => {
                    out.push('{');
                    rest = after;
                }
            }
        }
        out.push_str(rest);
        out.trim().to_owned()
    }
}

//! Deciding whether a node carries a documentation comment.
//!
//! A node is documented when the run of own-line comments directly above it
//! contains at least one comment that is not an annotation (`# TODO: ...`
//! for a configured keyword), an interpreter magic comment, or a linter
//! directive. When the node itself has no such comment, the check is repeated
//! once for its preceding sibling if that sibling is a signature wrapper, so
//! a comment above `sig { void }` documents the `def` that follows.

use crate::error::LintError;
use lazy_static::lazy_static;
use regex::Regex;
use scribe_config::AnalysisConfig;
use scribe_pattern::NodePattern;
use scribe_syntax::{NodeId, SyntaxTree};

/// Section holding the annotation keyword list.
pub const ANNOTATION_SECTION: &str = "Style/CommentAnnotation";

/// Option listing the annotation keywords.
pub const KEYWORDS: &str = "Keywords";

/// Section holding documentation lookup settings.
pub const DOCUMENTATION_SECTION: &str = "Documentation";

/// Option holding the signature wrapper pattern.
pub const ANNOTATION_WRAPPER: &str = "AnnotationWrapper";

/// The signature wrapper recognised when none is configured.
pub const DEFAULT_ANNOTATION_WRAPPER: &str = "(block (send nil? :sig) (args) ...)";

lazy_static! {
    static ref MAGIC_COMMENT: Regex =
        Regex::new(r"^#\s*(frozen_string_literal|encoding):").unwrap();

    static ref LINTER_DIRECTIVE: Regex =
        Regex::new(r"^#\s*rubocop\s*:\s*(disable|enable|todo)\b").unwrap();
}

/// Shared documentation check used by the documentation rules.
#[derive(Clone, Debug)]
pub struct DocumentationHeuristic {
    /// Matches `# KEYWORD`, capturing keyword, colon, spacing and note.
    /// `None` when no keywords are configured.
    annotation: Option<Regex>,
    wrapper: NodePattern,
}

impl DocumentationHeuristic {
    /// Creates a heuristic for the given annotation keywords and wrapper.
    pub fn new(keywords: &[String], wrapper: NodePattern) -> Result<Self, regex::Error> {
        let annotation = if keywords.is_empty() {
            None
        } else {
            let alternatives: Vec<String> = keywords.iter().map(|k| regex::escape(k)).collect();
            Some(Regex::new(&format!(
                r"(?i)^# ?\b({})\b(\s*:)?(\s+)?(\S+)?",
                alternatives.join("|")
            ))?)
        };
        Ok(Self {
            annotation,
            wrapper,
        })
    }

    /// Builds the heuristic from the `Style/CommentAnnotation` and
    /// `Documentation` sections.
    pub fn from_config(config: &AnalysisConfig) -> Result<Self, LintError> {
        let annotations = config.rule(ANNOTATION_SECTION);
        let keywords = annotations.get_string_list(KEYWORDS)?;
        if keywords.iter().any(|keyword| keyword.trim().is_empty()) {
            return Err(annotations
                .invalid_value(KEYWORDS, "annotation keywords must not be blank")
                .into());
        }

        let documentation = config.rule(DOCUMENTATION_SECTION);
        let wrapper = documentation
            .get_str(ANNOTATION_WRAPPER)?
            .unwrap_or(DEFAULT_ANNOTATION_WRAPPER);
        let wrapper = NodePattern::compile(wrapper)?;

        Self::new(&keywords, wrapper).map_err(|err| {
            annotations
                .invalid_value(KEYWORDS, format!("keywords do not form a valid pattern: {err}"))
                .into()
        })
    }

    /// Returns the signature wrapper pattern.
    pub fn wrapper(&self) -> &NodePattern {
        &self.wrapper
    }

    /// Returns `true` if `node` is documented, directly or through a
    /// documented signature wrapper right before it.
    pub fn has_documentation(&self, tree: &SyntaxTree, node: NodeId) -> bool {
        if self.has_leading_documentation(tree, node) {
            return true;
        }
        match tree.preceding_sibling(node) {
            Some(wrapper) if self.wrapper.matches(tree, wrapper) => {
                self.has_leading_documentation(tree, wrapper)
            }
            _ => false,
        }
    }

    /// Returns `true` if the comment block directly above `node` contains a
    /// documentation comment. Wrappers are not consulted.
    pub fn has_leading_documentation(&self, tree: &SyntaxTree, node: NodeId) -> bool {
        tree.leading_comments(node)
            .iter()
            .any(|comment| self.is_documentation(&comment.text))
    }

    /// Returns `true` if a comment's text counts as documentation.
    pub fn is_documentation(&self, text: &str) -> bool {
        !self.is_annotation(text) && !MAGIC_COMMENT.is_match(text) && !LINTER_DIRECTIVE.is_match(text)
    }

    /// Returns `true` for a keyword annotation such as `# TODO: fix`.
    ///
    /// The keyword must be followed by a colon or whitespace. A capitalized
    /// keyword followed by a space and more text but no colon reads as the
    /// first word of a sentence (`# Note that ...`) and is not an annotation.
    pub fn is_annotation(&self, text: &str) -> bool {
        let Some(annotation) = &self.annotation else {
            return false;
        };
        let Some(captures) = annotation.captures(text) else {
            return false;
        };
        let keyword = captures.get(1).map_or("", |m| m.as_str());
        let colon = captures.get(2).is_some();
        let space = captures.get(3).is_some();
        let note = captures.get(4).is_some();

        if !colon && !space {
            return false;
        }
        let starts_sentence = keyword == capitalize(keyword) && !colon && space && note;
        !starts_sentence
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scribe_config::RuleConfig;

    fn heuristic(keywords: &[&str]) -> DocumentationHeuristic {
        let keywords: Vec<String> = keywords.iter().map(|k| k.to_string()).collect();
        DocumentationHeuristic::new(&keywords, NodePattern::compile(DEFAULT_ANNOTATION_WRAPPER).unwrap())
            .unwrap()
    }

    #[test]
    fn plain_comments_document() {
        let docs = heuristic(&["TODO"]);
        assert!(docs.is_documentation("# Returns the user id"));
        assert!(docs.is_documentation("#"));
    }

    #[test]
    fn keyword_annotations_do_not_document() {
        let docs = heuristic(&["TODO", "FIXME", "NOTE"]);
        assert!(docs.is_annotation("# TODO: handle nil"));
        assert!(docs.is_annotation("# TODO handle nil"));
        assert!(docs.is_annotation("# todo: handle nil"));
        assert!(docs.is_annotation("#FIXME: later"));
        assert!(!docs.is_documentation("# TODO: handle nil"));
    }

    #[test]
    fn keyword_without_separator_is_not_annotation() {
        let docs = heuristic(&["TODO"]);
        assert!(!docs.is_annotation("# TODO"));
        assert!(docs.is_documentation("# FIXME"));
        assert!(!docs.is_annotation("# TODOS are tracked elsewhere"));
    }

    #[test]
    fn capitalized_keyword_starting_a_sentence() {
        let docs = heuristic(&["TODO", "NOTE"]);
        assert!(!docs.is_annotation("# Todo list of items"));
        assert!(!docs.is_annotation("# Note that this is cached"));
        assert!(docs.is_annotation("# Note: this is cached"));
        assert!(docs.is_documentation("# Todo list of items"));
    }

    #[test]
    fn no_keywords_means_no_annotations() {
        let docs = heuristic(&[]);
        assert!(!docs.is_annotation("# TODO: handle nil"));
        assert!(docs.is_documentation("# TODO: handle nil"));
    }

    #[test]
    fn magic_comments_and_directives_do_not_document() {
        let docs = heuristic(&[]);
        assert!(!docs.is_documentation("# frozen_string_literal: true"));
        assert!(!docs.is_documentation("# encoding: utf-8"));
        assert!(!docs.is_documentation("# rubocop:disable Style/Foo"));
        assert!(!docs.is_documentation("# rubocop: enable Style/Foo"));
        assert!(!docs.is_documentation("# rubocop:todo Style/Foo"));
        assert!(docs.is_documentation("# rubocop is our linter"));
    }

    #[test]
    fn keywords_are_matched_literally() {
        let docs = heuristic(&["C++"]);
        assert!(!docs.is_annotation("# C: not a keyword"));
    }

    #[test]
    fn capitalize_words() {
        assert_eq!(capitalize("TODO"), "Todo");
        assert_eq!(capitalize("note"), "Note");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn from_config_reads_sections() {
        let config = AnalysisConfig::new()
            .with_rule(RuleConfig::new(ANNOTATION_SECTION).set(KEYWORDS, vec!["HACK"]))
            .with_rule(
                RuleConfig::new(DOCUMENTATION_SECTION)
                    .set(ANNOTATION_WRAPPER, "(block (send nil? :signature) ...)"),
            );
        let docs = DocumentationHeuristic::from_config(&config).unwrap();
        assert!(docs.is_annotation("# HACK: tmp"));
        assert_eq!(docs.wrapper().source(), "(block (send nil? :signature) ...)");
    }

    #[test]
    fn from_config_defaults() {
        let docs = DocumentationHeuristic::from_config(&AnalysisConfig::new()).unwrap();
        assert_eq!(docs.wrapper().source(), DEFAULT_ANNOTATION_WRAPPER);
        assert!(!docs.is_annotation("# TODO: x"));
    }

    #[test]
    fn from_config_rejects_bad_values() {
        let config = AnalysisConfig::new().with_rule(
            RuleConfig::new(DOCUMENTATION_SECTION).set(ANNOTATION_WRAPPER, "(block"),
        );
        assert!(matches!(
            DocumentationHeuristic::from_config(&config),
            Err(LintError::Pattern(_))
        ));

        let config = AnalysisConfig::new()
            .with_rule(RuleConfig::new(ANNOTATION_SECTION).set(KEYWORDS, "TODO"));
        assert!(matches!(
            DocumentationHeuristic::from_config(&config),
            Err(LintError::Config(_))
        ));

        let config = AnalysisConfig::new()
            .with_rule(RuleConfig::new(ANNOTATION_SECTION).set(KEYWORDS, vec![" "]));
        assert!(matches!(
            DocumentationHeuristic::from_config(&config),
            Err(LintError::Config(_))
        ));
    }
}

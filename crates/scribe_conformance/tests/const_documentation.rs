//! Conformance tests for Sorbet/ConstDocumentation.

use scribe_conformance::{lint, lint_with_config};

const MESSAGE: &str = "Missing documentation comment for const attribute.";

const TODO_KEYWORD: &str = r#"
["Style/CommentAnnotation"]
Keywords = ["TODO", "FIXME"]
"#;

#[test]
fn undocumented_const_is_reported() {
    let result = lint("const :foo, String\n");
    assert_eq!(result.messages(), [MESSAGE]);
    assert_eq!(result.snippets(), ["const :foo, String"]);
    assert_eq!(result.lines(), [1]);
    assert_eq!(result.rule_ids(), ["Sorbet/ConstDocumentation"]);
}

#[test]
fn documented_const_is_accepted() {
    let result = lint(
        r#"
# Documentation for this nice const
const :foo, String
"#,
    );
    assert!(result.offenses.is_empty());
}

#[test]
fn consts_in_struct_body() {
    let result = lint(
        r#"
class Foo < T::Struct
  # Neat little baz
  const :baz, String

  const :qux, Integer
  const :quux, T::Boolean
end
"#,
    );
    assert_eq!(result.snippets(), ["const :qux, Integer", "const :quux, T::Boolean"]);
    assert_eq!(result.lines(), [6, 7]);
}

#[test]
fn blank_line_breaks_attachment() {
    let result = lint(
        r#"
# Stale comment

const :foo, String
"#,
    );
    assert_eq!(result.messages(), [MESSAGE]);
}

#[test]
fn multi_line_comment_block_documents() {
    let result = lint(
        r#"
# The foo.
#
# Used everywhere.
const :foo, String
"#,
    );
    assert!(result.offenses.is_empty());
}

#[test]
fn trailing_comment_on_previous_line_does_not_document() {
    let result = lint(
        r#"
bar # the foo
const :foo, String
"#,
    );
    assert_eq!(result.snippets(), ["const :foo, String"]);
}

#[test]
fn annotations_are_not_documentation_when_configured() {
    let source = r#"
# TODO: document this
const :foo, String
"#;
    assert_eq!(lint_with_config(source, TODO_KEYWORD).messages(), [MESSAGE]);
    // Without keywords, the same comment reads as documentation.
    assert!(lint(source).offenses.is_empty());
}

#[test]
fn annotation_without_colon() {
    let result = lint_with_config(
        r#"
# FIXME later
const :foo, String
"#,
        TODO_KEYWORD,
    );
    assert_eq!(result.messages(), [MESSAGE]);
}

#[test]
fn keyword_starting_a_sentence_documents() {
    let result = lint_with_config(
        r#"
# Todo list of items
const :items, T::Array
"#,
        TODO_KEYWORD,
    );
    assert!(result.offenses.is_empty());
}

#[test]
fn annotation_next_to_real_documentation() {
    let result = lint_with_config(
        r#"
# TODO: rename
# The foo.
const :foo, String
"#,
        TODO_KEYWORD,
    );
    assert!(result.offenses.is_empty());
}

#[test]
fn magic_comments_and_directives_are_not_documentation() {
    for comment in [
        "# frozen_string_literal: true",
        "# encoding: utf-8",
        "# rubocop:disable Style/Foo",
        "# rubocop:todo Style/Foo",
    ] {
        let source = format!("{comment}\nconst :foo, String\n");
        assert_eq!(lint(&source).messages(), [MESSAGE], "comment: {comment}");
    }

    let result = lint(
        r#"
# rubocop:disable Style/Foo
# The foo.
const :foo, String
"#,
    );
    assert!(result.offenses.is_empty());
}

#[test]
fn const_with_receiver_or_other_name_is_ignored() {
    let result = lint(
        r#"
prop :foo, String
constant :bar
self.const :baz, String
"#,
    );
    assert!(result.offenses.is_empty());
}

#[test]
fn const_is_checked_regardless_of_visibility() {
    let result = lint(
        r#"
class Foo < T::Struct
  private
  const :foo, String
end
"#,
    );
    assert_eq!(result.messages(), [MESSAGE]);
}

#[test]
fn block_comment_documents() {
    let result = lint(
        r#"
=begin
The foo.
=end
const :foo, String
"#,
    );
    assert!(result.offenses.is_empty());
}

#[test]
fn heredoc_text_is_not_a_comment() {
    let result = lint(
        r#"
class Foo < T::Struct
  const :banner, String, default: <<~TEXT
    # Looks like documentation
  TEXT
  const :foo, String
end
"#,
    );
    assert_eq!(result.lines(), [3, 6]);
    assert!(result.tree.comments().is_empty());
}

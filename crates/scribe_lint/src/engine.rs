//! Lint engine that manages rule registration, configuration, and execution.
//!
//! The `LintEngine` validates every rule's configuration when the rule is
//! registered, then walks trees with the registered rules. A walk never
//! fails; setup problems surface as [`LintError`] before any tree is seen.

use std::collections::HashSet;

use rayon::prelude::*;
use scribe_config::{AnalysisConfig, RuleConfig, SEVERITY};
use scribe_diagnostics::{Offense, OffenseSink, RuleId, Severity};
use scribe_syntax::{NodeId, NodeKind, SyntaxTree};
use tracing::{debug, trace};

use crate::context::VisitContext;
use crate::error::LintError;
use crate::rules::register_builtin_rules;
use crate::visibility::{Visibility, VisibilityState};
use crate::LintRule;

/// A rule together with the settings it was registered with.
struct RegisteredRule {
    rule: Box<dyn LintRule>,
    id: RuleId,
    severity: Severity,
    kinds: HashSet<NodeKind>,
}

/// The engine that runs lint rules over syntax trees.
///
/// Rules run in registration order at every node, which fixes the order of
/// offenses for nodes flagged by more than one rule. The engine is immutable
/// once built and can run many trees concurrently.
pub struct LintEngine {
    rules: Vec<RegisteredRule>,
}

impl LintEngine {
    /// Creates an engine with no rules.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Creates an engine with the built-in rules configured by `config`.
    ///
    /// Rules whose `Enabled` option is `false` are left out. Any pattern or
    /// option that fails to validate aborts construction.
    pub fn new(config: &AnalysisConfig) -> Result<Self, LintError> {
        let mut engine = Self::empty();
        register_builtin_rules(&mut engine, config)?;
        Ok(engine)
    }

    /// Creates an engine with the built-in rules and default options.
    pub fn with_defaults() -> Result<Self, LintError> {
        Self::new(&AnalysisConfig::new())
    }

    /// Registers a rule at its default severity.
    pub fn register(&mut self, rule: Box<dyn LintRule>) -> Result<(), LintError> {
        let severity = rule.default_severity();
        self.insert(rule, severity)
    }

    /// Registers a rule with its `Enabled` and `Severity` options applied.
    ///
    /// Returns `false` if the rule is disabled and was not registered.
    pub fn register_configured(
        &mut self,
        rule: Box<dyn LintRule>,
        config: &RuleConfig,
    ) -> Result<bool, LintError> {
        if !config.enabled()? {
            debug!(rule = %rule.id(), "rule disabled, not registering");
            return Ok(false);
        }
        let severity = match config.get_str(SEVERITY)? {
            None => rule.default_severity(),
            Some(name) => Severity::from_name(name).ok_or_else(|| {
                config.invalid_value(SEVERITY, format!("unknown severity `{name}`"))
            })?,
        };
        self.insert(rule, severity)?;
        Ok(true)
    }

    fn insert(&mut self, rule: Box<dyn LintRule>, severity: Severity) -> Result<(), LintError> {
        let id = rule.id();
        if self.rules.iter().any(|registered| registered.id == id) {
            return Err(LintError::DuplicateRule(id));
        }
        debug!(rule = %id, %severity, description = rule.description(), "registered rule");
        let kinds = rule.interested_kinds().into_iter().collect();
        self.rules.push(RegisteredRule {
            rule,
            id,
            severity,
            kinds,
        });
        Ok(())
    }

    /// Returns the number of registered rules.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns the ids of all registered rules in registration order.
    pub fn rule_ids(&self) -> Vec<&RuleId> {
        self.rules.iter().map(|registered| &registered.id).collect()
    }

    /// Returns the severity a registered rule reports at.
    pub fn severity_of(&self, id: &str) -> Option<Severity> {
        self.rules
            .iter()
            .find(|registered| registered.id.as_str() == id)
            .map(|registered| registered.severity)
    }

    /// Walks `tree` and returns the offenses found, in walk order.
    pub fn run(&self, tree: &SyntaxTree) -> Vec<Offense> {
        let sink = OffenseSink::new();
        self.run_into(tree, &sink);
        sink.take_all()
    }

    /// Walks `tree`, recording offenses into `sink`.
    pub fn run_into(&self, tree: &SyntaxTree, sink: &OffenseSink) {
        let mut walk = Walk {
            engine: self,
            tree,
            visibility: VisibilityState::new(),
            sink,
            recorded: 0,
        };
        walk.visit(tree.root());
        debug!(
            file = %tree.file().path.display(),
            offenses = walk.recorded,
            "run finished"
        );
    }

    /// Runs every tree independently in parallel.
    ///
    /// The result holds one offense list per tree, in input order, identical
    /// to calling [`run`](Self::run) on each tree in turn.
    pub fn run_all(&self, trees: &[SyntaxTree]) -> Vec<Vec<Offense>> {
        trees.par_iter().map(|tree| self.run(tree)).collect()
    }
}

/// State of a single pre-order walk.
struct Walk<'a> {
    engine: &'a LintEngine,
    tree: &'a SyntaxTree,
    visibility: VisibilityState,
    sink: &'a OffenseSink,
    recorded: usize,
}

impl<'a> Walk<'a> {
    fn visit(&mut self, id: NodeId) {
        let tree = self.tree;
        let node = tree.node(id);

        if let Some(visibility) = self.visibility_change(id) {
            self.visibility.set(visibility);
        }

        let ctx = VisitContext::new(tree, self.visibility.current());
        for registered in &self.engine.rules {
            if !registered.kinds.contains(&node.kind) {
                continue;
            }
            if let Some(offense) = registered.rule.visit(id, &ctx) {
                trace!(
                    rule = %registered.id,
                    line = tree.first_line(id),
                    "offense recorded"
                );
                self.sink.record(offense.with_severity(registered.severity));
                self.recorded += 1;
            }
        }

        let opens_scope = node.kind.opens_scope();
        if opens_scope {
            self.visibility.push_scope();
        }
        for child in node.child_nodes() {
            self.visit(child);
        }
        if opens_scope {
            self.visibility.pop_scope();
        }
    }

    /// Returns the visibility selected by a bare `private`, `protected`, or
    /// `public` with no arguments, written as a statement of the current
    /// class body or of the top level.
    fn visibility_change(&self, id: NodeId) -> Option<Visibility> {
        let node = self.tree.node(id);
        if node.kind != NodeKind::Send
            || !node.receiver().is_some_and(|receiver| receiver.is_nil())
            || !node.arguments().is_empty()
        {
            return None;
        }
        let visibility = Visibility::from_modifier(node.method_name()?)?;
        self.is_body_statement(id).then_some(visibility)
    }

    fn is_body_statement(&self, id: NodeId) -> bool {
        let tree = self.tree;
        let Some(parent) = tree.parent(id) else {
            return true;
        };
        if tree.kind(parent).opens_scope() {
            return is_body_slot(tree, parent, id);
        }
        if *tree.kind(parent) != NodeKind::Begin {
            return false;
        }
        match tree.parent(parent) {
            None => true,
            Some(scope) => tree.kind(scope).opens_scope() && is_body_slot(tree, scope, parent),
        }
    }
}

/// The body is the last child slot of `class`, `module` and `sclass`.
fn is_body_slot(tree: &SyntaxTree, scope: NodeId, child: NodeId) -> bool {
    let slots = tree.node(scope).children.len();
    slots > 0 && tree.sibling_index(child) == Some(slots - 1)
}

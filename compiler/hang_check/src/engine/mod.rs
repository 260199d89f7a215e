//! One-file analysis: resolve brackets, walk the tree, collect diagnostics.

use tracing::debug;

use hang_diagnostic::Diagnostic;
use hang_ir::{SyntaxTree, TokenList, Visitor};

use crate::brackets::BracketIndex;
use crate::rules::RuleVisitor;
use crate::{CheckConfig, InputContractError};

/// Analyzer for one parsed file and its token stream.
///
/// ```text
/// let engine = Engine::new(&tree, &tokens, CheckConfig::default())?;
/// for diagnostic in engine.run() {
///     println!("{diagnostic}");
/// }
/// ```
#[derive(Debug)]
pub struct Engine<'a> {
    tree: &'a SyntaxTree,
    brackets: BracketIndex<'a>,
    config: CheckConfig,
}

impl<'a> Engine<'a> {
    /// Pair the brackets of `tokens` up front.
    ///
    /// Fails when the token stream cannot belong to `tree`; nothing about
    /// the file should be reported in that case.
    pub fn new(
        tree: &'a SyntaxTree,
        tokens: &'a TokenList,
        config: CheckConfig,
    ) -> Result<Self, InputContractError> {
        let brackets = BracketIndex::resolve(tokens)?;
        Ok(Engine {
            tree,
            brackets,
            config,
        })
    }

    /// Diagnostics of the enabled rules, sorted by position.
    ///
    /// Every call starts from an empty collector, so repeated runs agree.
    /// Disabled rules are filtered after deduplication: a disabled rule that
    /// claimed a position first still hides later rules there.
    pub fn run(&self) -> Vec<Diagnostic> {
        let mut visitor = RuleVisitor::new(&self.brackets, self.config.indent_width);
        visitor.visit_tree(self.tree);
        let mut diagnostics = visitor.into_queue().results();

        let rules = self.config.rules;
        diagnostics.retain(|diagnostic| rules.is_enabled(diagnostic.rule));
        debug!(diagnostics = diagnostics.len(), "check finished");
        diagnostics
    }

    #[inline]
    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    #[inline]
    pub fn brackets(&self) -> &BracketIndex<'a> {
        &self.brackets
    }
}

/// Build an [`Engine`] and run it once.
pub fn check(
    tree: &SyntaxTree,
    tokens: &TokenList,
    config: CheckConfig,
) -> Result<Vec<Diagnostic>, InputContractError> {
    Ok(Engine::new(tree, tokens, config)?.run())
}

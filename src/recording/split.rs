use std::fmt;

use super::{
    SemanticArgumentRecorder, SemanticRecorders, SemanticTypeRecorder,
    SyntacticConstructorRecorder, SyntacticExpressionRecorder, SyntacticRecorders,
};

/// A semantic recorder and a syntactic recorder registered for the same
/// parameter, each writing to its own record.
#[derive(Debug, Clone)]
pub struct SplitRecorderProvider<Sem, Syn> {
    pub semantic: Sem,
    pub syntactic: Syn,
}

impl<Sem, Syn> SplitRecorderProvider<Sem, Syn> {
    pub fn new(semantic: Sem, syntactic: Syn) -> Self {
        Self {
            semantic,
            syntactic,
        }
    }
}

pub type SplitTypeRecorder<S, Y> =
    SplitRecorderProvider<SemanticTypeRecorder<S>, SyntacticExpressionRecorder<Y>>;
pub type SplitConstructorRecorder<S, Y> =
    SplitRecorderProvider<SemanticArgumentRecorder<S>, SyntacticConstructorRecorder<Y>>;
pub type SplitNamedRecorder<S, Y> =
    SplitRecorderProvider<SemanticArgumentRecorder<S>, SyntacticExpressionRecorder<Y>>;

/// Builds split recorder pairs for a semantic record `S` and a syntactic
/// record `Y`.
pub struct SplitRecorders<S, Y> {
    semantic: SemanticRecorders<S>,
    syntactic: SyntacticRecorders<Y>,
}

impl<S: 'static, Y: 'static> SplitRecorders<S, Y> {
    pub fn new() -> Self {
        Self {
            semantic: SemanticRecorders::new(),
            syntactic: SyntacticRecorders::new(),
        }
    }

    pub fn semantic(&self) -> &SemanticRecorders<S> {
        &self.semantic
    }

    pub fn syntactic(&self) -> &SyntacticRecorders<Y> {
        &self.syntactic
    }

    /// Pair two recorders for one parameter.
    pub fn pair<Sem, Syn>(&self, semantic: Sem, syntactic: Syn) -> SplitRecorderProvider<Sem, Syn> {
        SplitRecorderProvider::new(semantic, syntactic)
    }
}

impl<S: 'static, Y: 'static> Default for SplitRecorders<S, Y> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, Y> fmt::Debug for SplitRecorders<S, Y> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SplitRecorders")
    }
}

use std::marker::PhantomData;

use crate::recording::{
    CombinedConstructorRecorder, CombinedNamedRecorder, CombinedRecorders, CombinedTypeRecorder,
    SemanticArgumentRecorder, SemanticRecorders, SemanticTypeRecorder, SplitConstructorRecorder,
    SplitNamedRecorder, SplitRecorders, SplitTypeRecorder, SyntacticConstructorRecorder,
    SyntacticExpressionRecorder, SyntacticRecorders,
};

/// What a repository stores for each parameter category, and the factory
/// its registration hooks receive.
pub trait MappingUseCase: 'static {
    type TypeRecorder: Clone + Send + Sync + 'static;
    type ConstructorRecorder: Clone + Send + Sync + 'static;
    type NamedRecorder: Clone + Send + Sync + 'static;
    type Recorders: Send + Sync + 'static;

    fn recorders() -> Self::Recorders;
}

/// Bound values recorded into `R`.
pub struct Semantic<R>(PhantomData<fn(&mut R)>);

/// Argument syntax recorded into `R`.
pub struct Syntactic<R>(PhantomData<fn(&mut R)>);

/// Bound values recorded into `S`, argument syntax into `Y`.
pub struct Split<S, Y>(PhantomData<fn(&mut S, &mut Y)>);

/// Bound values and syntax recorded together into `R`.
pub struct Combined<R>(PhantomData<fn(&mut R)>);

impl<R: 'static> MappingUseCase for Semantic<R> {
    type TypeRecorder = SemanticTypeRecorder<R>;
    type ConstructorRecorder = SemanticArgumentRecorder<R>;
    type NamedRecorder = SemanticArgumentRecorder<R>;
    type Recorders = SemanticRecorders<R>;

    fn recorders() -> Self::Recorders {
        SemanticRecorders::new()
    }
}

impl<R: 'static> MappingUseCase for Syntactic<R> {
    type TypeRecorder = SyntacticExpressionRecorder<R>;
    type ConstructorRecorder = SyntacticConstructorRecorder<R>;
    type NamedRecorder = SyntacticExpressionRecorder<R>;
    type Recorders = SyntacticRecorders<R>;

    fn recorders() -> Self::Recorders {
        SyntacticRecorders::new()
    }
}

impl<S: 'static, Y: 'static> MappingUseCase for Split<S, Y> {
    type TypeRecorder = SplitTypeRecorder<S, Y>;
    type ConstructorRecorder = SplitConstructorRecorder<S, Y>;
    type NamedRecorder = SplitNamedRecorder<S, Y>;
    type Recorders = SplitRecorders<S, Y>;

    fn recorders() -> Self::Recorders {
        SplitRecorders::new()
    }
}

impl<R: 'static> MappingUseCase for Combined<R> {
    type TypeRecorder = CombinedTypeRecorder<R>;
    type ConstructorRecorder = CombinedConstructorRecorder<R>;
    type NamedRecorder = CombinedNamedRecorder<R>;
    type Recorders = CombinedRecorders<R>;

    fn recorders() -> Self::Recorders {
        CombinedRecorders::new()
    }
}

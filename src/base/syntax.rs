//! Argument expression syntax.
//!
//! Only the shapes the locator and the syntactic parser distinguish are
//! modelled; everything else is [`ExpressionKind::Other`] and is threaded
//! through untouched.

use text_size::TextRange;

/// An expression at the call site, with its source range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionSyntax {
    pub kind: ExpressionKind,
    pub range: TextRange,
}

/// The shape of an [`ExpressionSyntax`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpressionKind {
    /// A literal other than `null`, e.g. `42` or `"Fib"`
    Literal,
    /// The `null` literal
    Null,
    /// `typeof(T)`
    TypeOf,
    /// `default` or `default(T)`
    Default,
    /// `(expr)`
    Parenthesized(Box<ExpressionSyntax>),
    /// `(T)expr`; of `T`, only whether it is an array type is modelled
    Cast {
        to_array: bool,
        operand: Box<ExpressionSyntax>,
    },
    /// `new T[] { .. }`, `new[] { .. }` or `new T[n]`
    ArrayCreation {
        initializer: Option<InitializerSyntax>,
    },
    /// `[a, b, c]`
    Collection { elements: Vec<ExpressionSyntax> },
    /// Anything else, e.g. a constant reference or `nameof(..)`
    Other,
}

/// The `{ .. }` part of an array creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitializerSyntax {
    pub elements: Vec<ExpressionSyntax>,
    pub range: TextRange,
}

impl ExpressionSyntax {
    pub fn new(kind: ExpressionKind, range: TextRange) -> Self {
        Self { kind, range }
    }

    pub fn literal(range: TextRange) -> Self {
        Self::new(ExpressionKind::Literal, range)
    }

    pub fn null(range: TextRange) -> Self {
        Self::new(ExpressionKind::Null, range)
    }

    pub fn type_of(range: TextRange) -> Self {
        Self::new(ExpressionKind::TypeOf, range)
    }

    pub fn parenthesized(inner: ExpressionSyntax, range: TextRange) -> Self {
        Self::new(ExpressionKind::Parenthesized(Box::new(inner)), range)
    }

    /// `(T)expr` where `T` is not an array type, e.g. `(object)null`.
    pub fn cast(operand: ExpressionSyntax, range: TextRange) -> Self {
        Self::new(
            ExpressionKind::Cast {
                to_array: false,
                operand: Box::new(operand),
            },
            range,
        )
    }

    /// `(T[])expr`, e.g. `(object[])null`.
    pub fn array_cast(operand: ExpressionSyntax, range: TextRange) -> Self {
        Self::new(
            ExpressionKind::Cast {
                to_array: true,
                operand: Box::new(operand),
            },
            range,
        )
    }

    pub fn array_creation(initializer: Option<InitializerSyntax>, range: TextRange) -> Self {
        Self::new(ExpressionKind::ArrayCreation { initializer }, range)
    }

    pub fn collection(elements: Vec<ExpressionSyntax>, range: TextRange) -> Self {
        Self::new(ExpressionKind::Collection { elements }, range)
    }

    /// The innermost expression once parentheses and casts are removed.
    ///
    /// Idempotent: stripping an already stripped expression returns it.
    pub fn stripped(&self) -> &ExpressionSyntax {
        let mut current = self;
        while let ExpressionKind::Parenthesized(inner)
        | ExpressionKind::Cast { operand: inner, .. } = &current.kind
        {
            current = &**inner;
        }
        current
    }

    /// The innermost expression once parentheses alone are removed.
    fn unparenthesized(&self) -> &ExpressionSyntax {
        let mut current = self;
        while let ExpressionKind::Parenthesized(inner) = &current.kind {
            current = &**inner;
        }
        current
    }

    /// Whether this expression, passed alone to a `params` parameter,
    /// supplies the array itself rather than a single element.
    ///
    /// A cast decides by its target type: `(object)null` is one element,
    /// `(object[])null` is the array.
    pub fn is_array_like(&self) -> bool {
        matches!(
            self.unparenthesized().kind,
            ExpressionKind::ArrayCreation { .. }
                | ExpressionKind::Collection { .. }
                | ExpressionKind::Null
                | ExpressionKind::Default
                | ExpressionKind::Cast { to_array: true, .. }
        )
    }
}

impl InitializerSyntax {
    pub fn new(elements: Vec<ExpressionSyntax>, range: TextRange) -> Self {
        Self { elements, range }
    }
}

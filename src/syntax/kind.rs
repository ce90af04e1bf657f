//! Syntax kinds for the rowan-based CST.
//!
//! This enum defines all possible node and token kinds in the syntax tree
//! of the object-literal definition dialect.

/// All syntax kinds (tokens and nodes).
///
/// Tokens are leaf nodes (identifiers, keywords, punctuation).
/// Nodes are composite (object literals, properties, member accesses).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA (preserved but not semantically meaningful)
    // =========================================================================
    WHITESPACE = 0,
    LINE_COMMENT,
    BLOCK_COMMENT,

    // =========================================================================
    // LITERAL TOKENS
    // =========================================================================
    IDENT,   // identifier
    STRING,  // "hello" or 'hello'
    NUMBER,  // 42, 3.14, 1e3

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    L_BRACE,   // {
    R_BRACE,   // }
    L_BRACKET, // [
    R_BRACKET, // ]
    L_PAREN,   // (
    R_PAREN,   // )
    COLON,     // :
    SEMICOLON, // ;
    COMMA,     // ,
    DOT,       // .
    EQ,        // =
    PLUS,      // +
    MINUS,     // -
    BANG,      // !

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    THIS_KW,
    FUNCTION_KW,
    TRUE_KW,
    FALSE_KW,
    NULL_KW,
    VAR_KW,
    NEW_KW,
    RETURN_KW,

    // =========================================================================
    // NODES
    // =========================================================================
    PROGRAM,
    EXPR_STMT,
    VAR_STMT,
    RETURN_STMT,
    OBJECT_EXPR,
    ARRAY_EXPR,
    PROPERTY,
    MEMBER_EXPR,
    CALL_EXPR,
    ARG_LIST,
    ASSIGN_EXPR,
    LITERAL,
    NAME_REF,
    THIS_EXPR,
    FUNCTION_EXPR,
    PARAM_LIST,
    BLOCK,
    PAREN_EXPR,
    UNARY_EXPR,
    NEW_EXPR,

    // Special
    ERROR,

    #[doc(hidden)]
    __LAST,
}

impl SyntaxKind {
    /// Check if this is a trivia token (whitespace or comment).
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::WHITESPACE | Self::LINE_COMMENT | Self::BLOCK_COMMENT)
    }

    /// Check if this is a keyword.
    pub fn is_keyword(self) -> bool {
        (self as u16) >= (Self::THIS_KW as u16) && (self as u16) <= (Self::RETURN_KW as u16)
    }

    /// Check if this token can appear as an object-literal key.
    pub fn is_key(self) -> bool {
        matches!(self, Self::IDENT | Self::STRING | Self::NUMBER)
    }

    /// Tokens the user is in the middle of typing (word-shaped).
    pub fn is_word(self) -> bool {
        matches!(self, Self::IDENT | Self::STRING | Self::NUMBER) || self.is_keyword()
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

impl From<rowan::SyntaxKind> for SyntaxKind {
    fn from(raw: rowan::SyntaxKind) -> Self {
        assert!(raw.0 < SyntaxKind::__LAST as u16);
        // Safety: we control all syntax kinds and check bounds above
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }
}

/// Language definition for rowan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DashLanguage {}

impl rowan::Language for DashLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        raw.into()
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for convenience
pub type SyntaxNode = rowan::SyntaxNode<DashLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<DashLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<DashLanguage>;

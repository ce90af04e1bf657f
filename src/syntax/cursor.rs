//! Offset → token association.

use rowan::TokenAtOffset;
use text_size::TextSize;

use super::kind::{SyntaxNode, SyntaxToken};

/// Pick the token a cursor offset belongs to.
///
/// At a boundary between two tokens the choice matters: completion runs at
/// the end of the word being typed, so a word-shaped token on the left wins.
/// Failing that, the token whose parent sits deeper in the tree carries the
/// more specific context (e.g. the whitespace after `visible: ` belongs to
/// the property, not to the enclosing object).
pub fn token_for_offset(root: &SyntaxNode, offset: TextSize) -> Option<SyntaxToken> {
    let offset = offset.min(root.text_range().end());
    match root.token_at_offset(offset) {
        TokenAtOffset::None => None,
        TokenAtOffset::Single(token) => Some(token),
        TokenAtOffset::Between(left, right) => {
            if left.kind().is_word() {
                return Some(left);
            }
            if right.kind().is_word() {
                return Some(right);
            }
            let left_depth = left.parent_ancestors().count();
            let right_depth = right.parent_ancestors().count();
            if right_depth > left_depth { Some(right) } else { Some(left) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use crate::syntax::SyntaxKind;

    fn token_at(input: &str, offset: u32) -> SyntaxToken {
        let parse = parse(input);
        token_for_offset(&parse.syntax(), TextSize::new(offset)).unwrap()
    }

    #[test]
    fn test_word_end_prefers_ident() {
        // after "ti" in `{ ti }`
        let token = token_at("{ ti }", 4);
        assert_eq!(token.kind(), SyntaxKind::IDENT);
        assert_eq!(token.text(), "ti");
    }

    #[test]
    fn test_inside_string() {
        let token = token_at("{ type: 'But' }", 11);
        assert_eq!(token.kind(), SyntaxKind::STRING);
    }

    #[test]
    fn test_after_dot_associates_with_member() {
        // after the trailing dot in `x.Library.`
        let token = token_at("x.Library. ", 10);
        assert_eq!(token.kind(), SyntaxKind::DOT);
        assert_eq!(token.parent().unwrap().kind(), SyntaxKind::MEMBER_EXPR);
    }

    #[test]
    fn test_missing_value_stays_with_property() {
        // `{ visible: }` — offset just before `}`
        let token = token_at("{ visible: }", 11);
        assert_eq!(token.parent().unwrap().kind(), SyntaxKind::PROPERTY);
    }

    #[test]
    fn test_offset_past_end_clamps() {
        let parse = parse("x");
        assert!(token_for_offset(&parse.syntax(), TextSize::new(999)).is_some());
    }
}

//! Expression lexing and parsing.
//!
//! The lexer canonicalizes the display glyphs (`×`, `÷`, `−`) into their
//! arithmetic operations and folds a percent marker into the literal it
//! immediately follows; any character outside the arithmetic alphabet is
//! rejected here. The parser is a recursive-descent grammar with
//! conventional precedence.

use crate::core::{CalcError, CalcResult, Operation};

/// Token types from lexical analysis.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Numeric literal
    Number(f64),
    /// Numeric literal immediately followed by `%` (no whitespace between)
    Percent(f64),
    /// Binary operator
    Operator(Operation),
    /// Left parenthesis
    LeftParen,
    /// Right parenthesis
    RightParen,
}

impl Token {
    /// Returns true if this token is an operator.
    #[must_use]
    pub const fn is_operator(&self) -> bool {
        matches!(self, Self::Operator(_))
    }

    /// Returns true if this token is a plain or percent literal.
    #[must_use]
    pub const fn is_literal(&self) -> bool {
        matches!(self, Self::Number(_) | Self::Percent(_))
    }
}

/// Abstract syntax tree node.
#[derive(Debug, Clone, PartialEq)]
pub enum AstNode {
    /// Numeric literal
    Number(f64),
    /// Binary operation
    BinaryOp {
        /// Left operand
        left: Box<AstNode>,
        /// Operator
        op: Operation,
        /// Right operand
        right: Box<AstNode>,
    },
    /// Unary negation
    Negate(Box<AstNode>),
}

impl AstNode {
    /// Creates a number node.
    #[must_use]
    pub fn number(value: f64) -> Self {
        Self::Number(value)
    }

    /// Creates a binary operation node.
    #[must_use]
    pub fn binary(left: AstNode, op: Operation, right: AstNode) -> Self {
        Self::BinaryOp {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    /// Creates a negation node.
    #[must_use]
    pub fn negate(inner: AstNode) -> Self {
        Self::Negate(Box::new(inner))
    }
}

/// Tokenizer for the calculator's expression alphabet.
#[derive(Debug)]
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    /// Creates a new tokenizer for the given input.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Returns the remaining input.
    #[must_use]
    pub fn remaining(&self) -> &str {
        &self.input[self.pos..]
    }

    /// Tokenizes the entire input.
    pub fn tokenize(&mut self) -> CalcResult<Vec<Token>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    /// Returns the next token, or `None` at end of input.
    pub fn next_token(&mut self) -> CalcResult<Option<Token>> {
        self.skip_whitespace();

        let Some(ch) = self.current_char() else {
            return Ok(None);
        };

        let token = match ch {
            '0'..='9' | '.' => self.read_number()?,
            '(' => {
                self.advance();
                Token::LeftParen
            }
            ')' => {
                self.advance();
                Token::RightParen
            }
            // A `%` not glued to a literal was not consumed by read_number
            // and is outside the arithmetic alphabet, like any other
            // unexpected character.
            _ => match Operation::from_char(ch) {
                Some(op) => {
                    self.advance();
                    Token::Operator(op)
                }
                None => return Err(CalcError::InvalidCharacter(ch)),
            },
        };

        Ok(Some(token))
    }

    fn current_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.pos += ch.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn read_number(&mut self) -> CalcResult<Token> {
        let start = self.pos;
        let mut has_dot = false;

        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                self.advance();
            } else if ch == '.' && !has_dot {
                has_dot = true;
                self.advance();
            } else {
                break;
            }
        }

        let num_str = &self.input[start..self.pos];
        let value: f64 = num_str
            .parse()
            .map_err(|_| CalcError::Parse(format!("invalid number '{num_str}'")))?;

        // Percent binds to the literal it directly follows.
        if self.current_char() == Some('%') {
            self.advance();
            return Ok(Token::Percent(value));
        }

        Ok(Token::Number(value))
    }
}

/// Recursive descent parser.
///
/// Grammar:
/// ```text
/// expression ::= term (('+' | '-') term)*
/// term       ::= unary (('*' | '/') unary)*
/// unary      ::= '-' unary | '+' unary | primary
/// primary    ::= NUMBER | PERCENT | '(' expression ')'
/// ```
///
/// A `PERCENT` literal parses to a division-by-100 node.
#[derive(Debug)]
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    /// Creates a parser from tokens.
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Parses a string expression into an AST.
    pub fn parse_str(input: &str) -> CalcResult<AstNode> {
        let mut tokenizer = Tokenizer::new(input.trim());
        let tokens = tokenizer.tokenize()?;
        let mut parser = Self::new(tokens);
        parser.parse()
    }

    /// Parses the token stream into an AST, requiring all tokens consumed.
    pub fn parse(&mut self) -> CalcResult<AstNode> {
        if self.tokens.is_empty() {
            return Err(CalcError::Parse("empty expression".into()));
        }

        let ast = self.parse_expression()?;

        if self.pos < self.tokens.len() {
            return Err(CalcError::Parse(format!(
                "unexpected token at position {}",
                self.pos
            )));
        }

        Ok(ast)
    }

    fn current(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn parse_expression(&mut self) -> CalcResult<AstNode> {
        let mut left = self.parse_term()?;

        while let Some(&Token::Operator(op @ (Operation::Add | Operation::Subtract))) =
            self.current()
        {
            self.advance();
            let right = self.parse_term()?;
            left = AstNode::binary(left, op, right);
        }

        Ok(left)
    }

    fn parse_term(&mut self) -> CalcResult<AstNode> {
        let mut left = self.parse_unary()?;

        while let Some(&Token::Operator(op @ (Operation::Multiply | Operation::Divide))) =
            self.current()
        {
            self.advance();
            let right = self.parse_unary()?;
            left = AstNode::binary(left, op, right);
        }

        Ok(left)
    }

    fn parse_unary(&mut self) -> CalcResult<AstNode> {
        match self.current() {
            Some(Token::Operator(Operation::Subtract)) => {
                self.advance();
                Ok(AstNode::negate(self.parse_unary()?))
            }
            Some(Token::Operator(Operation::Add)) => {
                self.advance();
                self.parse_unary()
            }
            _ => self.parse_primary(),
        }
    }

    fn parse_primary(&mut self) -> CalcResult<AstNode> {
        let token = self
            .advance()
            .ok_or_else(|| CalcError::Parse("unexpected end of expression".into()))?;

        match *token {
            Token::Number(n) => Ok(AstNode::number(n)),
            Token::Percent(n) => Ok(AstNode::binary(
                AstNode::number(n),
                Operation::Divide,
                AstNode::number(100.0),
            )),
            Token::LeftParen => {
                let expr = self.parse_expression()?;
                match self.advance() {
                    Some(Token::RightParen) => Ok(expr),
                    Some(t) => Err(CalcError::Parse(format!("expected ')' but found {t:?}"))),
                    None => Err(CalcError::Parse("unclosed parenthesis".into())),
                }
            }
            ref t => Err(CalcError::Parse(format!("unexpected token: {t:?}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== Token tests =====

    #[test]
    fn test_token_is_operator() {
        assert!(Token::Operator(Operation::Add).is_operator());
        assert!(!Token::Number(5.0).is_operator());
        assert!(!Token::LeftParen.is_operator());
    }

    #[test]
    fn test_token_is_literal() {
        assert!(Token::Number(5.0).is_literal());
        assert!(Token::Percent(5.0).is_literal());
        assert!(!Token::Operator(Operation::Add).is_literal());
    }

    // ===== Tokenizer tests =====

    #[test]
    fn test_tokenize_single_number() {
        let tokens = Tokenizer::new("42").tokenize().unwrap();
        assert_eq!(tokens, vec![Token::Number(42.0)]);
    }

    #[test]
    fn test_tokenize_decimal_number() {
        let tokens = Tokenizer::new("3.14").tokenize().unwrap();
        assert_eq!(tokens, vec![Token::Number(3.14)]);
    }

    #[test]
    fn test_tokenize_ascii_operators() {
        let tokens = Tokenizer::new("+ - * /").tokenize().unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Operator(Operation::Add),
                Token::Operator(Operation::Subtract),
                Token::Operator(Operation::Multiply),
                Token::Operator(Operation::Divide),
            ]
        );
    }

    #[test]
    fn test_tokenize_glyph_operators() {
        // Display glyphs canonicalize to the same operations
        let tokens = Tokenizer::new("6×7÷2−1").tokenize().unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Number(6.0),
                Token::Operator(Operation::Multiply),
                Token::Number(7.0),
                Token::Operator(Operation::Divide),
                Token::Number(2.0),
                Token::Operator(Operation::Subtract),
                Token::Number(1.0),
            ]
        );
    }

    #[test]
    fn test_tokenize_percent_glued_to_literal() {
        let tokens = Tokenizer::new("50%").tokenize().unwrap();
        assert_eq!(tokens, vec![Token::Percent(50.0)]);
    }

    #[test]
    fn test_tokenize_percent_after_decimal_literal() {
        let tokens = Tokenizer::new("12.5%").tokenize().unwrap();
        assert_eq!(tokens, vec![Token::Percent(12.5)]);
    }

    #[test]
    fn test_tokenize_percent_with_space_rejected() {
        let result = Tokenizer::new("50 %").tokenize();
        assert_eq!(result, Err(CalcError::InvalidCharacter('%')));
    }

    #[test]
    fn test_tokenize_stray_percent_rejected() {
        assert_eq!(
            Tokenizer::new("%").tokenize(),
            Err(CalcError::InvalidCharacter('%'))
        );
        assert_eq!(
            Tokenizer::new("2+%").tokenize(),
            Err(CalcError::InvalidCharacter('%'))
        );
    }

    #[test]
    fn test_tokenize_double_percent_rejected() {
        // The first % folds into the literal, the second is stray
        assert_eq!(
            Tokenizer::new("50%%").tokenize(),
            Err(CalcError::InvalidCharacter('%'))
        );
    }

    #[test]
    fn test_tokenize_percent_after_paren_rejected() {
        assert_eq!(
            Tokenizer::new("(50)%").tokenize(),
            Err(CalcError::InvalidCharacter('%'))
        );
    }

    #[test]
    fn test_tokenize_parentheses() {
        let tokens = Tokenizer::new("()").tokenize().unwrap();
        assert_eq!(tokens, vec![Token::LeftParen, Token::RightParen]);
    }

    #[test]
    fn test_tokenize_expression_no_spaces() {
        let tokens = Tokenizer::new("1+2*3").tokenize().unwrap();
        assert_eq!(tokens.len(), 5);
    }

    #[test]
    fn test_tokenize_invalid_letter() {
        assert_eq!(
            Tokenizer::new("2a").tokenize(),
            Err(CalcError::InvalidCharacter('a'))
        );
    }

    #[test]
    fn test_tokenize_invalid_caret() {
        assert_eq!(
            Tokenizer::new("2 ^ 3").tokenize(),
            Err(CalcError::InvalidCharacter('^'))
        );
    }

    #[test]
    fn test_tokenize_empty_and_whitespace() {
        assert!(Tokenizer::new("").tokenize().unwrap().is_empty());
        assert!(Tokenizer::new("   ").tokenize().unwrap().is_empty());
    }

    #[test]
    fn test_tokenize_leading_decimal() {
        let tokens = Tokenizer::new(".5").tokenize().unwrap();
        assert_eq!(tokens, vec![Token::Number(0.5)]);
    }

    #[test]
    fn test_tokenize_bare_dot_rejected() {
        assert!(matches!(
            Tokenizer::new(".").tokenize(),
            Err(CalcError::Parse(_))
        ));
    }

    #[test]
    fn test_tokenize_second_dot_splits_literal() {
        // "1.2.3" reads as 1.2 followed by 0.3; the parser rejects it later
        let tokens = Tokenizer::new("1.2.3").tokenize().unwrap();
        assert_eq!(tokens, vec![Token::Number(1.2), Token::Number(0.3)]);
    }

    #[test]
    fn test_tokenizer_remaining() {
        let mut t = Tokenizer::new("1 + 2");
        t.next_token().unwrap();
        assert_eq!(t.remaining(), " + 2");
    }

    // ===== Parser tests =====

    #[test]
    fn test_parse_single_number() {
        assert_eq!(Parser::parse_str("42").unwrap(), AstNode::Number(42.0));
    }

    #[test]
    fn test_parse_simple_addition() {
        assert_eq!(
            Parser::parse_str("2+3").unwrap(),
            AstNode::binary(AstNode::number(2.0), Operation::Add, AstNode::number(3.0))
        );
    }

    #[test]
    fn test_parse_precedence_mul_over_add() {
        // 2 + 3 * 4 parses as 2 + (3 * 4)
        let ast = Parser::parse_str("2+3*4").unwrap();
        match ast {
            AstNode::BinaryOp {
                op: Operation::Add,
                right,
                ..
            } => assert!(matches!(
                *right,
                AstNode::BinaryOp {
                    op: Operation::Multiply,
                    ..
                }
            )),
            _ => panic!("expected Add at top level"),
        }
    }

    #[test]
    fn test_parse_left_associative_subtraction() {
        // 10 - 3 - 2 parses as (10 - 3) - 2
        let ast = Parser::parse_str("10-3-2").unwrap();
        match ast {
            AstNode::BinaryOp {
                op: Operation::Subtract,
                left,
                right,
            } => {
                assert!(matches!(
                    *left,
                    AstNode::BinaryOp {
                        op: Operation::Subtract,
                        ..
                    }
                ));
                assert_eq!(*right, AstNode::Number(2.0));
            }
            _ => panic!("expected Subtract at top level"),
        }
    }

    #[test]
    fn test_parse_parentheses_override() {
        let ast = Parser::parse_str("(2+3)*4").unwrap();
        match ast {
            AstNode::BinaryOp {
                op: Operation::Multiply,
                left,
                ..
            } => assert!(matches!(
                *left,
                AstNode::BinaryOp {
                    op: Operation::Add,
                    ..
                }
            )),
            _ => panic!("expected Multiply at top level"),
        }
    }

    #[test]
    fn test_parse_nested_parentheses() {
        let ast = Parser::parse_str("((2+3))").unwrap();
        assert!(matches!(
            ast,
            AstNode::BinaryOp {
                op: Operation::Add,
                ..
            }
        ));
    }

    #[test]
    fn test_parse_percent_is_division_node() {
        assert_eq!(
            Parser::parse_str("50%").unwrap(),
            AstNode::binary(
                AstNode::number(50.0),
                Operation::Divide,
                AstNode::number(100.0)
            )
        );
    }

    #[test]
    fn test_parse_percent_inside_expression() {
        // 200*50% parses as 200 * (50/100)
        let ast = Parser::parse_str("200*50%").unwrap();
        match ast {
            AstNode::BinaryOp {
                op: Operation::Multiply,
                right,
                ..
            } => assert!(matches!(
                *right,
                AstNode::BinaryOp {
                    op: Operation::Divide,
                    ..
                }
            )),
            _ => panic!("expected Multiply at top level"),
        }
    }

    #[test]
    fn test_parse_percent_then_literal_rejected() {
        // "50%2" has no operator between the percent node and the literal
        assert!(matches!(
            Parser::parse_str("50%2"),
            Err(CalcError::Parse(_))
        ));
    }

    #[test]
    fn test_parse_unary_minus() {
        let ast = Parser::parse_str("-5").unwrap();
        assert_eq!(ast, AstNode::negate(AstNode::number(5.0)));
    }

    #[test]
    fn test_parse_unary_plus() {
        assert_eq!(Parser::parse_str("+5").unwrap(), AstNode::Number(5.0));
    }

    #[test]
    fn test_parse_double_negative() {
        let ast = Parser::parse_str("--5").unwrap();
        assert_eq!(
            ast,
            AstNode::negate(AstNode::negate(AstNode::number(5.0)))
        );
    }

    #[test]
    fn test_parse_unary_in_expression() {
        let ast = Parser::parse_str("3+-2").unwrap();
        match ast {
            AstNode::BinaryOp {
                op: Operation::Add,
                right,
                ..
            } => assert!(matches!(*right, AstNode::Negate(_))),
            _ => panic!("expected Add"),
        }
    }

    #[test]
    fn test_parse_wrapped_negation_form() {
        // The engine's sign toggle produces this literal shape
        let ast = Parser::parse_str("(0-5)").unwrap();
        assert!(matches!(
            ast,
            AstNode::BinaryOp {
                op: Operation::Subtract,
                ..
            }
        ));
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(Parser::parse_str(""), Err(CalcError::Parse(_))));
        assert!(matches!(Parser::parse_str("  "), Err(CalcError::Parse(_))));
    }

    #[test]
    fn test_parse_unclosed_paren() {
        assert!(matches!(
            Parser::parse_str("(2+3"),
            Err(CalcError::Parse(_))
        ));
    }

    #[test]
    fn test_parse_extra_close_paren() {
        assert!(matches!(
            Parser::parse_str("2+3)"),
            Err(CalcError::Parse(_))
        ));
    }

    #[test]
    fn test_parse_missing_operand() {
        assert!(matches!(Parser::parse_str("2+"), Err(CalcError::Parse(_))));
    }

    #[test]
    fn test_parse_consecutive_multiplies() {
        assert!(matches!(
            Parser::parse_str("2**3"),
            Err(CalcError::Parse(_))
        ));
    }

    #[test]
    fn test_parser_new_starts_at_zero() {
        let parser = Parser::new(vec![Token::Number(5.0)]);
        assert_eq!(parser.pos, 0);
    }

    #[test]
    fn test_parser_empty_tokens() {
        let mut parser = Parser::new(vec![]);
        assert!(matches!(parser.parse(), Err(CalcError::Parse(_))));
    }
}

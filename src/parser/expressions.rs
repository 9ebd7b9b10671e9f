//! Expression parsing implementation
//!
//! Binary operators are parsed by precedence climbing over a fixed table;
//! unary, postfix, and primary forms use recursive descent.
//!
//! # Precedence (lowest to highest)
//!
//! 1. `||`
//! 2. `&&`
//! 3. `==` `!=`
//! 4. `<` `<=` `>` `>=`
//! 5. `+` `-`
//! 6. `*` `/` `%`
//!
//! All binary operators are left-associative.

use crate::parser::ast::*;
use crate::parser::lexer::Token;
use crate::parser::parse::{ParseError, Parser};

fn binary_operator(token: &Token) -> Option<(u8, BinOp)> {
    let entry = match token {
        Token::OrOr(_) => (1, BinOp::Or),
        Token::AndAnd(_) => (2, BinOp::And),
        Token::EqEq(_) => (3, BinOp::Eq),
        Token::NotEq(_) => (3, BinOp::Ne),
        Token::Lt(_) => (4, BinOp::Lt),
        Token::Le(_) => (4, BinOp::Le),
        Token::Gt(_) => (4, BinOp::Gt),
        Token::Ge(_) => (4, BinOp::Ge),
        Token::Plus(_) => (5, BinOp::Add),
        Token::Minus(_) => (5, BinOp::Sub),
        Token::Star(_) => (6, BinOp::Mul),
        Token::Slash(_) => (6, BinOp::Div),
        Token::Percent(_) => (6, BinOp::Mod),
        _ => return None,
    };
    Some(entry)
}

impl Parser {
    /// Parse expression (top-level entry point)
    pub(crate) fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        self.parse_binary(1)
    }

    fn parse_binary(&mut self, min_precedence: u8) -> Result<Expr, ParseError> {
        let mut left = self.parse_unary()?;

        while let Some((precedence, op)) = binary_operator(self.peek()) {
            if precedence < min_precedence {
                break;
            }
            let location = self.current_location();
            self.advance();
            let right = self.parse_binary(precedence + 1)?;
            left = Expr::BinaryOp {
                op,
                left: Box::new(left),
                right: Box::new(right),
                location,
            };
        }

        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        let location = self.current_location();
        let op = match self.peek() {
            Token::Minus(_) => Some(UnOp::Neg),
            Token::Plus(_) => Some(UnOp::Plus),
            Token::Bang(_) => Some(UnOp::Not),
            _ => None,
        };

        let Some(op) = op else {
            return self.parse_postfix();
        };

        self.advance();
        self.descend()?;
        let operand = self.parse_unary();
        self.ascend();

        Ok(Expr::UnaryOp {
            op,
            operand: Box::new(operand?),
            location,
        })
    }

    /// Parse postfix forms: indexing `x[i]` and the `.length` property
    fn parse_postfix(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_primary()?;

        loop {
            let location = self.current_location();
            if self.match_token(&Token::LBracket(location)) {
                self.descend()?;
                let index = self.parse_expression();
                self.ascend();
                let index = index?;
                self.expect_token(&Token::RBracket(location), "Expected ']' after index")?;
                expr = Expr::Index {
                    target: Box::new(expr),
                    index: Box::new(index),
                    location,
                };
            } else if self.match_token(&Token::Dot(location)) {
                let property_location = self.current_location();
                let property = self.expect_identifier()?;
                if property != "length" {
                    return Err(ParseError {
                        message: format!("Unsupported property '{}'", property),
                        location: property_location,
                    });
                }
                expr = Expr::Length {
                    target: Box::new(expr),
                    location,
                };
            } else {
                break;
            }
        }

        Ok(expr)
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let location = self.current_location();

        match self.peek().clone() {
            Token::Number(value, _) => {
                self.advance();
                Ok(Expr::Number { value, location })
            }
            Token::True(_) => {
                self.advance();
                Ok(Expr::Bool {
                    value: true,
                    location,
                })
            }
            Token::False(_) => {
                self.advance();
                Ok(Expr::Bool {
                    value: false,
                    location,
                })
            }
            Token::Ident(name, _) => {
                self.advance();
                Ok(Expr::Variable { name, location })
            }
            Token::LParen(_) => {
                self.advance();
                self.descend()?;
                let inner = self.parse_expression();
                self.ascend();
                let inner = inner?;
                self.expect_token(&Token::RParen(location), "Expected ')' to close group")?;
                Ok(inner)
            }
            Token::LBracket(_) => {
                self.advance();
                self.descend()?;
                let elements = self.parse_array_elements();
                self.ascend();
                Ok(Expr::ArrayLiteral {
                    elements: elements?,
                    location,
                })
            }
            other => Err(ParseError {
                message: format!("Expected expression, found {}", other),
                location,
            }),
        }
    }

    /// Parse comma-separated elements up to the closing `]`; the opening
    /// bracket has already been consumed. A single trailing comma is allowed.
    fn parse_array_elements(&mut self) -> Result<Vec<Expr>, ParseError> {
        let mut elements = Vec::new();

        while !self.check(&Token::RBracket(self.current_location())) {
            elements.push(self.parse_expression()?);

            if !self.match_token(&Token::Comma(self.current_location())) {
                break;
            }
        }

        self.expect_token(
            &Token::RBracket(self.current_location()),
            "Expected ',' or ']' in array literal",
        )?;

        Ok(elements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> Expr {
        Parser::new(source).unwrap().parse().unwrap()
    }

    #[test]
    fn test_multiplication_binds_tighter() {
        match parse("1 + 2 * 3") {
            Expr::BinaryOp { op, right, .. } => {
                assert_eq!(op, BinOp::Add);
                assert!(matches!(*right, Expr::BinaryOp { op: BinOp::Mul, .. }));
            }
            other => panic!("unexpected tree {:?}", other),
        }
    }

    #[test]
    fn test_left_associative_subtraction() {
        // (n - i) - 1
        match parse("n - i - 1") {
            Expr::BinaryOp { op, left, right, .. } => {
                assert_eq!(op, BinOp::Sub);
                assert!(matches!(*left, Expr::BinaryOp { op: BinOp::Sub, .. }));
                assert!(matches!(*right, Expr::Number { value, .. } if value == 1.0));
            }
            other => panic!("unexpected tree {:?}", other),
        }
    }

    #[test]
    fn test_array_literal_with_trailing_comma() {
        match parse("[64, 34, -25,]") {
            Expr::ArrayLiteral { elements, .. } => {
                assert_eq!(elements.len(), 3);
                assert!(matches!(elements[2], Expr::UnaryOp { op: UnOp::Neg, .. }));
            }
            other => panic!("unexpected tree {:?}", other),
        }
        assert!(matches!(parse("[]"), Expr::ArrayLiteral { ref elements, .. } if elements.is_empty()));
    }

    #[test]
    fn test_length_and_index_chain() {
        match parse("arr.length - 1") {
            Expr::BinaryOp { left, .. } => assert!(matches!(*left, Expr::Length { .. })),
            other => panic!("unexpected tree {:?}", other),
        }
    }

    #[test]
    fn test_unknown_property_rejected() {
        let err = Parser::new("arr.push").unwrap().parse().unwrap_err();
        assert!(err.message.contains("Unsupported property 'push'"));
    }

    #[test]
    fn test_unclosed_array_reports_location() {
        let err = Parser::new("[1, 2").unwrap().parse().unwrap_err();
        assert!(err.message.contains("array literal"));
        assert_eq!(err.location.column, 6);
    }
}

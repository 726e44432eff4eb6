/// Associativity of an infix operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Assoc {
    Left,
    Right,
}

/// The operator table, ordered so longer tokens shadow their prefixes
/// (`>=` and `>>` before `>`, `++` before `+`). Higher precedence binds
/// tighter.
const OPERATORS: &[(&str, BinOp, u8, Assoc)] = &[
    ("|>", BinOp::Pipe, 1, Assoc::Left),
    ("||", BinOp::Or, 2, Assoc::Right),
    ("&&", BinOp::And, 3, Assoc::Right),
    ("==", BinOp::Eq, 4, Assoc::Left),
    ("!=", BinOp::NotEq, 4, Assoc::Left),
    ("<=", BinOp::Lte, 4, Assoc::Left),
    (">=", BinOp::Gte, 4, Assoc::Left),
    (">>", BinOp::Compose, 9, Assoc::Right),
    ("::", BinOp::Cons, 5, Assoc::Right),
    ("++", BinOp::Join, 5, Assoc::Right),
    ("<", BinOp::Lt, 4, Assoc::Left),
    (">", BinOp::Gt, 4, Assoc::Left),
    ("+", BinOp::Add, 6, Assoc::Left),
    ("-", BinOp::Sub, 6, Assoc::Left),
    ("*", BinOp::Mul, 7, Assoc::Left),
    ("^", BinOp::Pow, 7, Assoc::Right),
    ("%", BinOp::Mod, 7, Assoc::Right),
];

impl<'src> Parser<'src> {
    /// Pratt driver: parse a prefix expression, then fold infix
    /// operators of at least `min_prec` onto it. Left-associative
    /// operators recurse one level tighter, right-associative ones at
    /// their own level.
    ///
    /// Ignorables (including line comments) are consumed between
    /// expression tokens; when no operator follows, the lookahead is
    /// rewound so trailing whitespace stays outside the expression.
    fn pratt_expr(&mut self, min_prec: u8, mode: ExprMode) -> ParseResult<Expr> {
        let mut lhs = self.prefix_expr(mode)?;
        loop {
            let checkpoint = self.cursor.checkpoint();
            self.ignorables();
            let Some(&(token, op, prec, assoc)) = self.peek_operator() else {
                self.cursor.restore(checkpoint);
                break;
            };
            if prec < min_prec {
                self.cursor.restore(checkpoint);
                break;
            }
            if !self.cursor.eat_str(token) {
                return Err(self.error_here(ParseErrorKind::Internal(format!(
                    "operator {token:?} matched but could not be consumed"
                ))));
            }
            self.ignorables();
            let next_min = match assoc {
                Assoc::Left => prec + 1,
                Assoc::Right => prec,
            };
            let rhs = self.pratt_expr(next_min, mode)?;
            lhs = Expr::infix(op, lhs, rhs);
        }
        Ok(lhs)
    }

    fn peek_operator(&self) -> Option<&'static (&'static str, BinOp, u8, Assoc)> {
        OPERATORS.iter().find(|(token, ..)| self.cursor.starts_with(token))
    }
}

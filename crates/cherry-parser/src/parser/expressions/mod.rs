impl<'src> Parser<'src> {
    /// Entry point for the expression grammar.
    fn expression(&mut self, mode: ExprMode) -> ParseResult<Expr> {
        self.with_recursion_guard(|p| {
            p.in_context(ParseContext::InExpr, |p| p.pratt_expr(0, mode))
        })
    }

    /// The ordered prefix alternatives of the Pratt grammar. The first
    /// alternative whose committed prefix matches wins; the rest
    /// backtrack. Guards skip annotations and lambdas.
    fn prefix_expr(&mut self, mode: ExprMode) -> ParseResult<Expr> {
        if let Some(expr) = self.attempt(|p| p.conditional(mode))? {
            return Ok(expr);
        }
        if let Some(expr) = self.attempt(|p| p.match_expr(mode))? {
            return Ok(expr);
        }
        if mode == ExprMode::Full {
            if let Some(expr) = self.attempt(Self::annotation)? {
                return Ok(expr);
            }
            if let Some(expr) = self.attempt(Self::lambda)? {
                return Ok(expr);
            }
        }
        if let Some(expr) = self.attempt(Self::application)? {
            return Ok(expr);
        }
        if let Some(expr) = self.attempt(Self::access)? {
            return Ok(expr);
        }
        if let Some(expr) = self.attempt(Self::identifier_expr)? {
            return Ok(expr);
        }
        if let Some(expr) = self.attempt(Self::subexpression)? {
            return Ok(expr);
        }
        if let Some(expr) = self.attempt(Self::block)? {
            return Ok(expr);
        }
        self.literal_expr(true)
    }

    /// `if test then consequent else alternative`
    fn conditional(&mut self, mode: ExprMode) -> ParseResult<Expr> {
        let start = self.cursor.position();
        self.keyword("if")?;
        self.commit();
        self.ignorables();
        let test = self.expression(mode)?;
        self.ignorables();
        self.keyword("then")?;
        self.ignorables();
        let consequent = self.expression(mode)?;
        self.ignorables();
        self.keyword("else")?;
        self.ignorables();
        let alternative = self.expression(mode)?;
        Ok(self.finish_expr(
            start,
            ExprKind::Conditional {
                test: Box::new(test),
                consequent: Box::new(consequent),
                alternative: Box::new(alternative),
            },
        ))
    }

    /// `where scrutinee (is pattern [if guard] => body)*`
    ///
    /// A match with no arms parses successfully.
    fn match_expr(&mut self, mode: ExprMode) -> ParseResult<Expr> {
        let start = self.cursor.position();
        self.keyword("where")?;
        self.commit();
        self.ignorables();
        let scrutinee = self.expression(mode)?;
        let mut arms = Vec::new();
        while let Some(arm) = self.attempt(|p| p.match_arm(mode))? {
            arms.push(arm);
        }
        Ok(self.finish_expr(start, ExprKind::Match { scrutinee: Box::new(scrutinee), arms }))
    }

    fn match_arm(&mut self, mode: ExprMode) -> ParseResult<MatchArm> {
        self.ignorables();
        self.keyword("is")?;
        self.commit();
        self.ignorables();
        let pattern = self.pattern()?;
        // After the pattern, `if` can only introduce a guard; the
        // restricted guard grammar keeps it from eating the `=>`.
        let guard = self.attempt(|p| {
            p.ignorables();
            p.keyword("if")?;
            p.commit();
            p.ignorables();
            p.expression(ExprMode::Guard)
        })?;
        self.ignorables();
        self.symbol("=>")?;
        self.ignorables();
        let body = self.expression(mode)?;
        Ok(MatchArm { pattern, guard, body })
    }

    /// `parenthesised as type`
    fn annotation(&mut self) -> ParseResult<Expr> {
        let start = self.cursor.position();
        let target = self.parenthesised()?;
        self.ignorables();
        self.keyword("as")?;
        self.commit();
        self.ignorables();
        let signature = self.type_expr()?;
        Ok(self.finish_expr(
            start,
            ExprKind::Annotation { target: Box::new(target), signature },
        ))
    }

    /// `pattern pattern… => body` — a bare name with no `=>` after it
    /// backtracks so the identifier alternative can claim it.
    fn lambda(&mut self) -> ParseResult<Expr> {
        let start = self.cursor.position();
        let mut params = vec![self.pattern()?];
        while let Some(param) = self.attempt(|p| {
            p.whitespace();
            p.pattern()
        })? {
            params.push(param);
        }
        self.whitespace();
        self.symbol("=>")?;
        self.commit();
        self.ignorables();
        let body = self.expression(ExprMode::Full)?;
        Ok(self.finish_expr(start, ExprKind::Lambda { params, body: Box::new(body) }))
    }

    /// `callee arg arg…` — arguments are parenthesised operands on the
    /// same line, so the list cannot swallow following expressions.
    fn application(&mut self) -> ParseResult<Expr> {
        let start = self.cursor.position();
        let callee = self.application_callee()?;
        self.whitespace();
        let mut args = vec![self.parenthesised()?];
        while let Some(arg) = self.attempt(|p| {
            p.whitespace();
            p.parenthesised()
        })? {
            args.push(arg);
        }
        Ok(self.finish_expr(
            start,
            ExprKind::Application { callee: Box::new(callee), args },
        ))
    }

    fn application_callee(&mut self) -> ParseResult<Expr> {
        if let Some(expr) = self.attempt(Self::access)? {
            return Ok(expr);
        }
        if let Some(expr) = self.attempt(Self::block)? {
            return Ok(expr);
        }
        if let Some(expr) = self.attempt(Self::subexpression)? {
            return Ok(expr);
        }
        self.identifier_expr()
    }

    /// `parenthesised . name (. name)*` — committed at the first dot.
    fn access(&mut self) -> ParseResult<Expr> {
        let start = self.cursor.position();
        let target = self.parenthesised()?;
        self.symbol(".")?;
        self.commit();
        let mut fields = vec![self.lower_name()?];
        while let Some(field) = self.attempt(|p| {
            p.symbol(".")?;
            p.lower_name()
        })? {
            fields.push(field);
        }
        Ok(self.finish_expr(start, ExprKind::Access { target: Box::new(target), fields }))
    }

    fn identifier_expr(&mut self) -> ParseResult<Expr> {
        let start = self.cursor.position();
        let id = self.id_form()?;
        Ok(self.finish_expr(start, ExprKind::Identifier(id)))
    }

    /// Placeholder (`_name`), local (`name`), or scoped
    /// (`Module.Path.name`) identifier.
    fn id_form(&mut self) -> ParseResult<IdForm> {
        if self.attempt(|p| p.symbol("_"))?.is_some() {
            let name = self.attempt(Self::lower_name)?;
            return Ok(IdForm::Placeholder(name));
        }
        if let Some(name) = self.attempt(Self::lower_name)? {
            return Ok(IdForm::Local(name));
        }
        let mut modules = vec![self.upper_name()?];
        loop {
            self.symbol(".")?;
            if self.cursor.peek().is_some_and(|ch| ch.is_ascii_uppercase()) {
                modules.push(self.upper_name()?);
            } else {
                let name = self.lower_name()?;
                return Ok(IdForm::Scoped { modules, inner: Box::new(IdForm::Local(name)) });
            }
        }
    }

    /// `( expr )` — the node keeps the inner expression's span, so
    /// infix spans stay equal to their operand extent.
    fn subexpression(&mut self) -> ParseResult<Expr> {
        self.symbol("(")?;
        self.ignorables();
        let expr = self.expression(ExprMode::Full)?;
        self.ignorables();
        self.symbol(")")?;
        Ok(expr)
    }

    /// `{ (run expr | let name = expr)* ret expr }` — backtrackable
    /// from the brace so record literals get their turn.
    fn block(&mut self) -> ParseResult<Expr> {
        let start = self.cursor.position();
        self.symbol("{")?;
        self.ignorables();
        let mut bindings = Vec::new();
        while let Some(binding) = self.attempt(|p| {
            let binding = p.block_binding()?;
            p.ignorables();
            Ok(binding)
        })? {
            bindings.push(binding);
        }
        self.keyword("ret")?;
        self.commit();
        self.ignorables();
        let ret = self.expression(ExprMode::Full)?;
        self.ignorables();
        self.symbol("}")?;
        Ok(self.finish_expr(start, ExprKind::Block { bindings, ret: Box::new(ret) }))
    }

    /// One block binding. A discarded `run` is stored under `"_"`.
    fn block_binding(&mut self) -> ParseResult<(String, Expr)> {
        if self.attempt(|p| p.keyword("run"))?.is_some() {
            self.commit();
            self.ignorables();
            let value = self.expression(ExprMode::Full)?;
            return Ok(("_".to_string(), value));
        }
        self.keyword("let")?;
        self.commit();
        self.whitespace();
        let name = self.lower_name()?;
        self.whitespace();
        self.symbol("=")?;
        self.ignorables();
        let value = self.expression(ExprMode::Full)?;
        Ok((name, value))
    }

    /// The restricted operand grammar used by access targets,
    /// application arguments, annotation targets, and variant
    /// arguments: a block, a non-variant literal, or an identifier —
    /// or, falling through, a fully parenthesised subexpression.
    fn parenthesised(&mut self) -> ParseResult<Expr> {
        if let Some(expr) = self.attempt(Self::block)? {
            return Ok(expr);
        }
        if let Some(expr) = self.attempt(|p| p.literal_expr(false))? {
            return Ok(expr);
        }
        if let Some(expr) = self.attempt(Self::identifier_expr)? {
            return Ok(expr);
        }
        self.subexpression()
    }
}

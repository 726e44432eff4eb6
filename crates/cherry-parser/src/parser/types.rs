impl<'src> Parser<'src> {
    /// Entry point for the type grammar.
    ///
    /// Arrow types are right-associative: the left operand is an
    /// application or atom, the right operand is a full type.
    fn type_expr(&mut self) -> ParseResult<Type> {
        self.with_recursion_guard(|p| {
            let left = p.type_app_or_atomic()?;
            if p.attempt(|p| {
                p.whitespace();
                p.arrow()
            })?
            .is_some()
            {
                p.ignorables();
                let right = p.type_expr()?;
                return Ok(Type::Fun { from: Box::new(left), to: Box::new(right) });
            }
            Ok(left)
        })
    }

    fn arrow(&mut self) -> ParseResult<()> {
        if self.cursor.eat_str("->") || self.cursor.eat_str("→") {
            Ok(())
        } else {
            Err(self.error_here(ParseErrorKind::ExpectingSymbol("->".to_string())))
        }
    }

    /// An atom, or an application when more atoms follow the head.
    fn type_app_or_atomic(&mut self) -> ParseResult<Type> {
        let head = self.type_atomic(true)?;
        let mut args = Vec::new();
        while let Some(arg) = self.attempt(|p| {
            p.whitespace();
            p.type_atomic(true)
        })? {
            args.push(arg);
        }
        if args.is_empty() { Ok(head) } else { Ok(Type::App { head: Box::new(head), args }) }
    }

    /// One atomic type: subtype, var, con, record row, sum, `*`, `?`.
    ///
    /// `allow_sum` is false for sum-variant parameters, where a bare
    /// `#tag` must read as the next variant rather than a nested sum.
    fn type_atomic(&mut self, allow_sum: bool) -> ParseResult<Type> {
        if let Some(ty) = self.attempt(Self::subtype)? {
            return Ok(ty);
        }
        if let Some(name) = self.attempt(Self::lower_name)? {
            return Ok(Type::Var(name));
        }
        if let Some(name) = self.attempt(Self::upper_name)? {
            return Ok(Type::Con(name));
        }
        if self.attempt(|p| p.symbol("()"))?.is_some() {
            return Ok(Type::Con("()".to_string()));
        }
        if let Some(fields) = self.attempt(Self::record_row_braced)? {
            return Ok(Type::Record(fields));
        }
        if allow_sum {
            if let Some(variants) = self.attempt(Self::sum_type)? {
                return Ok(Type::Sum(variants));
            }
        }
        if self.attempt(|p| p.symbol("*"))?.is_some() {
            return Ok(Type::Any);
        }
        if self.attempt(|p| p.symbol("?"))?.is_some() {
            return Ok(Type::Hole);
        }
        Err(self.error_here(ParseErrorKind::ExpectingType))
    }

    /// `( type )`
    fn subtype(&mut self) -> ParseResult<Type> {
        self.symbol("(")?;
        self.ignorables();
        let ty = self.type_expr()?;
        self.ignorables();
        self.symbol(")")?;
        Ok(ty)
    }

    /// `{ field: type, … }` — trailing comma forbidden.
    fn record_row_braced(&mut self) -> ParseResult<Vec<(String, Type)>> {
        self.symbol("{")?;
        self.ignorables();
        let fields = self.record_row_fields()?;
        self.ignorables();
        self.symbol("}")?;
        Ok(fields)
    }

    /// The comma-separated fields of a record row, shared with `type`
    /// declaration record bodies.
    fn record_row_fields(&mut self) -> ParseResult<Vec<(String, Type)>> {
        let mut fields = vec![self.record_row_field()?];
        while self
            .attempt(|p| {
                p.ignorables();
                p.symbol(",")
            })?
            .is_some()
        {
            self.ignorables();
            fields.push(self.record_row_field()?);
        }
        Ok(fields)
    }

    fn record_row_field(&mut self) -> ParseResult<(String, Type)> {
        let name = self.lower_name()?;
        self.ignorables();
        self.symbol(":")?;
        self.ignorables();
        let ty = self.type_expr()?;
        Ok((name, ty))
    }

    /// One or more `#tag params` clauses, juxtaposed.
    fn sum_type(&mut self) -> ParseResult<Vec<(String, Vec<Type>)>> {
        let mut variants = vec![self.sum_clause()?];
        while let Some(clause) = self.attempt(|p| {
            p.whitespace();
            p.sum_clause()
        })? {
            variants.push(clause);
        }
        Ok(variants)
    }

    /// `#tag` followed by greedily-consumed atomic parameters.
    fn sum_clause(&mut self) -> ParseResult<(String, Vec<Type>)> {
        self.symbol("#")?;
        self.commit();
        let tag = self.lower_name()?;
        let mut params = Vec::new();
        while let Some(param) = self.attempt(|p| {
            p.whitespace();
            p.type_atomic(false)
        })? {
            params.push(param);
        }
        Ok((tag, params))
    }
}

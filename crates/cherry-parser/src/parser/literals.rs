impl<'src> Parser<'src> {
    /// The literal grammar: arrays, booleans, numbers, records,
    /// strings, templates, `()`, and variants, tried in that order.
    ///
    /// `allow_variant` is false in argument position, where a bare
    /// `#tag` would blur into the enclosing call; variant arguments
    /// there need parentheses.
    fn literal_expr(&mut self, allow_variant: bool) -> ParseResult<Expr> {
        let start = self.cursor.position();
        if let Some(items) = self.attempt(Self::array_literal)? {
            return Ok(self.finish_expr(start, ExprKind::Literal(Lit::Array(items))));
        }
        if let Some(value) = self.attempt(Self::boolean_literal)? {
            return Ok(self.finish_expr(start, ExprKind::Literal(Lit::Boolean(value))));
        }
        if let Some(value) = self.attempt(Self::number)? {
            return Ok(self.finish_expr(start, ExprKind::Literal(Lit::Number(value))));
        }
        if let Some(fields) = self.attempt(Self::record_literal)? {
            return Ok(self.finish_expr(start, ExprKind::Literal(Lit::Record(fields))));
        }
        if let Some(value) = self.attempt(Self::string_literal)? {
            return Ok(self.finish_expr(start, ExprKind::Literal(Lit::String(value))));
        }
        if let Some(segments) = self.attempt(Self::template_literal)? {
            return Ok(self.finish_expr(start, ExprKind::Literal(Lit::Template(segments))));
        }
        if self.attempt(|p| p.symbol("()"))?.is_some() {
            return Ok(self.finish_expr(start, ExprKind::Literal(Lit::Undefined)));
        }
        if !allow_variant {
            return Err(self.error_here(ParseErrorKind::ExpectingSymbol("#".to_string())));
        }
        let (tag, args) = self.variant_literal()?;
        Ok(self.finish_expr(start, ExprKind::Literal(Lit::Variant { tag, args })))
    }

    /// `[ expr (, expr)* ]` — empty allowed, trailing comma forbidden.
    fn array_literal(&mut self) -> ParseResult<Vec<Expr>> {
        self.symbol("[")?;
        self.commit();
        self.ignorables();
        let mut items = Vec::new();
        if self.attempt(|p| p.symbol("]"))?.is_some() {
            return Ok(items);
        }
        loop {
            items.push(self.expression(ExprMode::Full)?);
            if self.attempt(|p| {
                p.ignorables();
                p.symbol(",")
            })?
            .is_some()
            {
                self.ignorables();
                continue;
            }
            break;
        }
        self.ignorables();
        self.symbol("]")?;
        Ok(items)
    }

    fn boolean_literal(&mut self) -> ParseResult<bool> {
        if self.attempt(|p| p.keyword("true"))?.is_some() {
            return Ok(true);
        }
        self.keyword("false")?;
        Ok(false)
    }

    /// `{ field: expr, … }` with `{ foo }` shorthand. Backtrackable in
    /// full so a `{ … }` can still be read as a block by an earlier
    /// alternative's caller.
    fn record_literal(&mut self) -> ParseResult<Vec<(String, Expr)>> {
        self.symbol("{")?;
        self.ignorables();
        let mut fields = vec![self.record_field()?];
        while self
            .attempt(|p| {
                p.ignorables();
                p.symbol(",")
            })?
            .is_some()
        {
            self.ignorables();
            fields.push(self.record_field()?);
        }
        self.ignorables();
        self.symbol("}")?;
        Ok(fields)
    }

    fn record_field(&mut self) -> ParseResult<(String, Expr)> {
        let name_start = self.cursor.position();
        let name = self.lower_name()?;
        let name_end = self.cursor.position();
        if self
            .attempt(|p| {
                p.ignorables();
                p.symbol(":")
            })?
            .is_some()
        {
            self.ignorables();
            let value = self.expression(ExprMode::Full)?;
            return Ok((name, value));
        }
        // `{ foo }` expands to `{ foo: foo }`; the synthesized
        // identifier spans the shorthand itself.
        let value = Expr::new(
            ExprKind::Identifier(IdForm::Local(name.clone())),
            Span::new(name_start, name_end),
        );
        Ok((name, value))
    }

    /// Back-tick template: character runs interleaved with `${ expr }`
    /// interpolations. Adjacent character runs coalesce into single
    /// text segments.
    fn template_literal(&mut self) -> ParseResult<Vec<TemplateSegment>> {
        self.symbol("`")?;
        self.commit();
        let mut segments = Vec::new();
        let mut text = String::new();
        loop {
            if self.cursor.starts_with("${") {
                self.symbol("${")?;
                if !text.is_empty() {
                    segments.push(TemplateSegment::Text(std::mem::take(&mut text)));
                }
                self.ignorables();
                let expr = self.expression(ExprMode::Full)?;
                self.ignorables();
                self.symbol("}")?;
                segments.push(TemplateSegment::Expr(expr));
                continue;
            }
            match self.cursor.peek() {
                None => {
                    return Err(self.error_here(ParseErrorKind::ExpectingSymbol("`".to_string())));
                }
                Some('`') => {
                    self.cursor.bump();
                    if !text.is_empty() {
                        segments.push(TemplateSegment::Text(text));
                    }
                    return Ok(segments);
                }
                Some('\\') => {
                    self.cursor.bump();
                    text.push(self.escape_char(true)?);
                }
                Some(ch) => {
                    text.push(ch);
                    self.cursor.bump();
                }
            }
        }
    }

    /// `#tag (parenthesised)*`
    fn variant_literal(&mut self) -> ParseResult<(String, Vec<Expr>)> {
        self.symbol("#")?;
        self.commit();
        let tag = self.lower_name()?;
        let mut args = Vec::new();
        while let Some(arg) = self.attempt(|p| {
            p.whitespace();
            p.parenthesised()
        })? {
            args.push(arg);
        }
        Ok((tag, args))
    }
}

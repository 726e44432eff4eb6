impl<'src> Parser<'src> {
    /// `import (ext|pkg)? "path" [as Upper.Path] [exposing { a, b }]`
    fn import_clause(&mut self) -> ParseResult<Import> {
        self.keyword("import")?;
        self.commit();
        self.in_context(ParseContext::InImport, |p| {
            p.whitespace();
            let specifier = p.import_specifier()?;
            let alias = p
                .attempt(|p| {
                    p.whitespace();
                    p.keyword("as")?;
                    p.commit();
                    p.whitespace();
                    p.upper_path()
                })?
                .unwrap_or_default();
            let exposing = p
                .attempt(|p| {
                    p.whitespace();
                    p.keyword("exposing")?;
                    p.commit();
                    p.whitespace();
                    p.exposing_list()
                })?
                .unwrap_or_default();
            Ok(Import { specifier, alias, exposing })
        })
    }

    fn import_specifier(&mut self) -> ParseResult<ImportSpecifier> {
        if self.attempt(|p| p.keyword("ext"))?.is_some() {
            self.whitespace();
            return Ok(ImportSpecifier::External(self.quoted_path()?));
        }
        if self.attempt(|p| p.keyword("pkg"))?.is_some() {
            self.whitespace();
            return Ok(ImportSpecifier::Package(self.quoted_path()?));
        }
        Ok(ImportSpecifier::Local(self.quoted_path()?))
    }

    /// One or more upper-case names separated by dots.
    fn upper_path(&mut self) -> ParseResult<Vec<String>> {
        let mut path = vec![self.upper_name()?];
        while let Some(segment) = self.attempt(|p| {
            p.symbol(".")?;
            p.upper_name()
        })? {
            path.push(segment);
        }
        Ok(path)
    }

    /// `{ name (, name)* }` — trailing comma forbidden.
    fn exposing_list(&mut self) -> ParseResult<Vec<String>> {
        self.symbol("{")?;
        self.ignorables();
        let mut names = vec![self.lower_name()?];
        while self
            .attempt(|p| {
                p.ignorables();
                p.symbol(",")
            })?
            .is_some()
        {
            self.ignorables();
            names.push(self.lower_name()?);
        }
        self.ignorables();
        self.symbol("}")?;
        Ok(names)
    }

    /// The four declaration forms, tried in order: `run`, `ext`,
    /// `let`, `type`. The `ext` and `let` alternatives rewind past a
    /// consumed `pub` marker when their keyword does not follow.
    fn declaration(&mut self) -> ParseResult<Declaration> {
        if let Some(decl) = self.attempt(Self::run_declaration)? {
            return Ok(decl);
        }
        if let Some(decl) = self.attempt(Self::ext_declaration)? {
            return Ok(decl);
        }
        if let Some(decl) = self.attempt(Self::let_declaration)? {
            return Ok(decl);
        }
        self.type_declaration()
    }

    /// `run expr`
    fn run_declaration(&mut self) -> ParseResult<Declaration> {
        let start = self.cursor.position();
        self.keyword("run")?;
        self.commit();
        self.in_context(ParseContext::InDeclaration, |p| {
            p.ignorables();
            let body = p.expression(ExprMode::Full)?;
            let span = Span::new(start, p.cursor.position());
            Ok(Declaration::new(DeclKind::Run(body), span))
        })
    }

    fn public_marker(&mut self) -> ParseResult<bool> {
        if self.attempt(|p| p.keyword("pub"))?.is_some() {
            self.whitespace();
            return Ok(true);
        }
        Ok(false)
    }

    /// `[pub] ext name [: type]`
    fn ext_declaration(&mut self) -> ParseResult<Declaration> {
        let start = self.cursor.position();
        let public = self.public_marker()?;
        self.keyword("ext")?;
        self.commit();
        self.in_context(ParseContext::InDeclaration, |p| {
            p.whitespace();
            let name = p.lower_name()?;
            let signature = p.type_annotation()?;
            let span = Span::new(start, p.cursor.position());
            Ok(Declaration::new(DeclKind::Ext { public, name, signature }, span))
        })
    }

    /// `[pub] let name [: type] = expr`
    fn let_declaration(&mut self) -> ParseResult<Declaration> {
        let start = self.cursor.position();
        let public = self.public_marker()?;
        self.keyword("let")?;
        self.commit();
        self.in_context(ParseContext::InDeclaration, |p| {
            p.whitespace();
            let name = p.lower_name()?;
            let signature = p.type_annotation()?;
            p.whitespace();
            p.symbol("=")?;
            p.ignorables();
            let body = p.expression(ExprMode::Full)?;
            let span = Span::new(start, p.cursor.position());
            Ok(Declaration::new(DeclKind::Let { public, name, signature, body }, span))
        })
    }

    /// Optional `: type` annotation; [`Type::Any`] when absent.
    fn type_annotation(&mut self) -> ParseResult<Type> {
        let annotated = self.attempt(|p| {
            p.whitespace();
            p.symbol(":")?;
            p.commit();
            p.ignorables();
            p.type_expr()
        })?;
        Ok(annotated.unwrap_or(Type::Any))
    }

    /// `[pub] type Name tvars… [= body]`
    fn type_declaration(&mut self) -> ParseResult<Declaration> {
        let start = self.cursor.position();
        let public = self.public_marker()?;
        self.keyword("type")?;
        self.commit();
        self.in_context(ParseContext::InDeclaration, |p| {
            p.whitespace();
            let name_start = p.cursor.position();
            let name = p.upper_name()?;
            if RESERVED_TYPE_NAMES.contains(name.as_str()) {
                return Err(p.error_at(ParseErrorKind::ExpectingCapitalCase, name_start));
            }
            let mut type_vars = Vec::new();
            while let Some(var) = p.attempt(|p| {
                p.whitespace();
                p.lower_name()
            })? {
                type_vars.push(var);
            }
            let body = p.type_def_body()?;
            let span = Span::new(start, p.cursor.position());
            Ok(Declaration::new(DeclKind::Type { public, name, type_vars, body }, span))
        })
    }

    /// Enum body, then record body, then no body at all (abstract).
    /// The enum attempt rewinds past its `=` so `= {` can re-parse as
    /// a record body.
    fn type_def_body(&mut self) -> ParseResult<TypeDefBody> {
        if let Some(variants) = self.attempt(Self::enum_body)? {
            return Ok(TypeDefBody::Enum(variants));
        }
        if let Some(fields) = self.attempt(Self::record_body)? {
            return Ok(TypeDefBody::Record(fields));
        }
        Ok(TypeDefBody::Abstract)
    }

    /// `= #tag params (| #tag params)*`
    fn enum_body(&mut self) -> ParseResult<Vec<(String, Vec<Type>)>> {
        self.whitespace();
        self.symbol("=")?;
        self.ignorables();
        let mut variants = vec![self.sum_clause()?];
        while self
            .attempt(|p| {
                p.ignorables();
                p.symbol("|")
            })?
            .is_some()
        {
            self.commit();
            self.ignorables();
            variants.push(self.sum_clause()?);
        }
        Ok(variants)
    }

    /// `= { field: type, … }`
    fn record_body(&mut self) -> ParseResult<Vec<(String, Type)>> {
        self.whitespace();
        self.symbol("=")?;
        self.ignorables();
        self.symbol("{")?;
        self.commit();
        self.ignorables();
        let fields = self.record_row_fields()?;
        self.ignorables();
        self.symbol("}")?;
        Ok(fields)
    }
}

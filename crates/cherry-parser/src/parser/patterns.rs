impl<'src> Parser<'src> {
    /// Entry point for the pattern grammar.
    fn pattern(&mut self) -> ParseResult<Pattern> {
        self.with_recursion_guard(Self::pattern_inner)
    }

    fn pattern_inner(&mut self) -> ParseResult<Pattern> {
        if let Some(items) = self.attempt(Self::array_destructure)? {
            return Ok(Pattern::ArrayDestructure(items));
        }
        if let Some(lit) = self.attempt(Self::literal_pattern)? {
            return Ok(Pattern::Literal(lit));
        }
        if let Some(binding) = self.attempt(Self::wildcard_pattern)? {
            return Ok(Pattern::Wildcard(binding));
        }
        if let Some(name) = self.attempt(Self::lower_name)? {
            return Ok(Pattern::Name(name));
        }
        if let Some(entries) = self.attempt(Self::record_destructure)? {
            return Ok(Pattern::RecordDestructure(entries));
        }
        if let Some(segments) = self.attempt(Self::template_destructure)? {
            return Ok(Pattern::TemplateDestructure(segments));
        }
        if let Some(pattern) = self.attempt(Self::typeof_pattern)? {
            return Ok(pattern);
        }
        if let Some((tag, args)) = self.attempt(Self::variant_destructure)? {
            return Ok(Pattern::VariantDestructure { tag, args });
        }
        // Fallback: a parenthesised pattern.
        self.symbol("(")?;
        self.ignorables();
        let inner = self.pattern()?;
        self.ignorables();
        self.symbol(")")?;
        Ok(inner)
    }

    /// `[ p, p, ...rest ]` — committed at the opening bracket.
    fn array_destructure(&mut self) -> ParseResult<Vec<Pattern>> {
        self.symbol("[")?;
        self.commit();
        self.ignorables();
        let mut items = Vec::new();
        if self.attempt(|p| p.symbol("]"))?.is_some() {
            return Ok(items);
        }
        loop {
            if let Some(name) = self.attempt(Self::spread)? {
                // Spread closes the list; only `]` may follow.
                items.push(Pattern::Spread(name));
                break;
            }
            items.push(self.pattern()?);
            if self
                .attempt(|p| {
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

    /// `...name`
    fn spread(&mut self) -> ParseResult<String> {
        self.symbol("...")?;
        self.commit();
        self.lower_name()
    }

    /// Literal patterns cover booleans, numbers, strings, and `()`.
    /// Arrays, records, and templates destructure instead.
    fn literal_pattern(&mut self) -> ParseResult<Lit> {
        if self.attempt(|p| p.keyword("true"))?.is_some() {
            return Ok(Lit::Boolean(true));
        }
        if self.attempt(|p| p.keyword("false"))?.is_some() {
            return Ok(Lit::Boolean(false));
        }
        if let Some(value) = self.attempt(Self::number)? {
            return Ok(Lit::Number(value));
        }
        if let Some(value) = self.attempt(Self::string_literal)? {
            return Ok(Lit::String(value));
        }
        self.symbol("()")?;
        Ok(Lit::Undefined)
    }

    /// `_` optionally followed by a lower-case name.
    fn wildcard_pattern(&mut self) -> ParseResult<Option<String>> {
        self.symbol("_")?;
        self.attempt(Self::lower_name)
    }

    /// `{ key, key: pattern, ...rest }`
    fn record_destructure(&mut self) -> ParseResult<Vec<(String, Option<Pattern>)>> {
        self.symbol("{")?;
        self.ignorables();
        let mut entries = Vec::new();
        loop {
            if let Some(name) = self.attempt(Self::spread)? {
                entries.push((name.clone(), Some(Pattern::Spread(name))));
                break;
            }
            let name = self.lower_name()?;
            if self
                .attempt(|p| {
                    p.ignorables();
                    p.symbol(":")
                })?
                .is_some()
            {
                self.ignorables();
                entries.push((name, Some(self.pattern()?)));
            } else {
                entries.push((name, None));
            }
            if self
                .attempt(|p| {
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
        self.symbol("}")?;
        Ok(entries)
    }

    /// Back-tick template matching literal text around `${ pattern }`
    /// holes.
    fn template_destructure(&mut self) -> ParseResult<Vec<TemplatePattern>> {
        self.symbol("`")?;
        let mut segments = Vec::new();
        let mut text = String::new();
        loop {
            if self.cursor.starts_with("${") {
                self.symbol("${")?;
                if !text.is_empty() {
                    segments.push(TemplatePattern::Text(std::mem::take(&mut text)));
                }
                self.ignorables();
                let pattern = self.pattern()?;
                self.ignorables();
                self.symbol("}")?;
                segments.push(TemplatePattern::Pattern(pattern));
                continue;
            }
            match self.cursor.peek() {
                None => {
                    return Err(self.error_here(ParseErrorKind::ExpectingSymbol("`".to_string())));
                }
                Some('`') => {
                    self.cursor.bump();
                    if !text.is_empty() {
                        segments.push(TemplatePattern::Text(text));
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

    /// `@TypeName pattern`
    fn typeof_pattern(&mut self) -> ParseResult<Pattern> {
        self.symbol("@")?;
        self.commit();
        let name = self.upper_name()?;
        self.whitespace();
        let pattern = self.pattern()?;
        Ok(Pattern::Typeof { name, pattern: Box::new(pattern) })
    }

    /// `#tag pattern…` — sub-patterns consumed greedily.
    fn variant_destructure(&mut self) -> ParseResult<(String, Vec<Pattern>)> {
        self.symbol("#")?;
        self.commit();
        let tag = self.lower_name()?;
        let mut args = Vec::new();
        while let Some(arg) = self.attempt(|p| {
            p.whitespace();
            p.pattern()
        })? {
            args.push(arg);
        }
        Ok((tag, args))
    }
}

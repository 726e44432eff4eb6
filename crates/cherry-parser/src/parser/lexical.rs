impl<'src> Parser<'src> {
    /// Consume any mixture of spaces, tabs, newlines, and `//` line
    /// comments. Never fails.
    fn ignorables(&mut self) {
        loop {
            match self.cursor.peek() {
                Some(' ' | '\t' | '\n' | '\r') => {
                    self.cursor.bump();
                }
                Some('/') if self.cursor.starts_with("//") => {
                    while let Some(ch) = self.cursor.peek() {
                        if ch == '\n' {
                            break;
                        }
                        self.cursor.bump();
                    }
                }
                _ => break,
            }
        }
    }

    /// Consume only inline whitespace. Used between the parts of a
    /// single logical form (import clauses, declaration headers,
    /// argument lists), where a newline ends the form.
    fn whitespace(&mut self) {
        while matches!(self.cursor.peek(), Some(' ' | '\t')) {
            self.cursor.bump();
        }
    }

    /// Match a literal symbol such as `=`, `{`, or `=>`.
    fn symbol(&mut self, expected: &str) -> ParseResult<()> {
        if self.cursor.eat_str(expected) {
            Ok(())
        } else {
            Err(self.error_here(ParseErrorKind::ExpectingSymbol(expected.to_string())))
        }
    }

    /// Match a reserved word. The next character must not continue a
    /// name, so `iffy` never matches `if`.
    fn keyword(&mut self, expected: &str) -> ParseResult<()> {
        let checkpoint = self.cursor.checkpoint();
        if self.cursor.eat_str(expected) && !self.cursor.peek().is_some_and(is_name_continue) {
            return Ok(());
        }
        self.cursor.restore(checkpoint);
        Err(self.error_here(ParseErrorKind::ExpectingKeyword(expected.to_string())))
    }

    /// A lower-case name: `[a-z_][A-Za-z0-9_]*`, excluding keywords.
    fn lower_name(&mut self) -> ParseResult<String> {
        match self.cursor.peek() {
            Some(ch) if ch.is_ascii_lowercase() || ch == '_' => {}
            _ => return Err(self.error_here(ParseErrorKind::ExpectingCamelCase)),
        }
        let checkpoint = self.cursor.checkpoint();
        let name = self.take_name_chars();
        if KEYWORDS.contains(name.as_str()) {
            self.cursor.restore(checkpoint);
            return Err(self.error_here(ParseErrorKind::ExpectingCamelCase));
        }
        Ok(name)
    }

    /// An upper-case name: `[A-Z][A-Za-z0-9_]*`.
    fn upper_name(&mut self) -> ParseResult<String> {
        match self.cursor.peek() {
            Some(ch) if ch.is_ascii_uppercase() => {}
            _ => return Err(self.error_here(ParseErrorKind::ExpectingCapitalCase)),
        }
        Ok(self.take_name_chars())
    }

    fn take_name_chars(&mut self) -> String {
        let mut name = String::new();
        while let Some(ch) = self.cursor.peek() {
            if is_name_continue(ch) {
                name.push(ch);
                self.cursor.bump();
            } else {
                break;
            }
        }
        name
    }

    /// Scan a numeric literal: optional leading `-`, then integer,
    /// hex, octal, binary, or decimal float. Every form produces a
    /// double.
    ///
    /// A letter dangling off the end (`123abc`) is a committed error,
    /// not a shorter number.
    fn number(&mut self) -> ParseResult<f64> {
        let negative = self.cursor.eat('-');
        let magnitude = if self.cursor.eat_str("0x") {
            self.radix_digits(16)?
        } else if self.cursor.eat_str("0o") {
            self.radix_digits(8)?
        } else if self.cursor.eat_str("0b") {
            self.radix_digits(2)?
        } else {
            self.decimal_number()?
        };
        if let Some(ch) = self.cursor.peek() {
            if ch.is_ascii_alphabetic() {
                self.commit();
                return Err(self.error_here(ParseErrorKind::UnexpectedChar(ch)));
            }
        }
        Ok(if negative { -magnitude } else { magnitude })
    }

    fn radix_digits(&mut self, radix: u32) -> ParseResult<f64> {
        let mut value = 0.0_f64;
        let mut seen_digit = false;
        while let Some(digit) = self.cursor.peek().and_then(|ch| ch.to_digit(radix)) {
            value = value * f64::from(radix) + f64::from(digit);
            self.cursor.bump();
            seen_digit = true;
        }
        if seen_digit { Ok(value) } else { Err(self.error_here(ParseErrorKind::ExpectingNumber)) }
    }

    fn decimal_number(&mut self) -> ParseResult<f64> {
        let mut text = String::new();
        while let Some(ch) = self.cursor.peek() {
            if ch.is_ascii_digit() {
                text.push(ch);
                self.cursor.bump();
            } else {
                break;
            }
        }
        if text.is_empty() {
            return Err(self.error_here(ParseErrorKind::ExpectingNumber));
        }
        // A `.` only joins the number when a digit follows, so `1.foo`
        // stays a field access on `1`.
        let rest = self.cursor.rest();
        if rest.starts_with('.') && rest[1..].starts_with(|ch: char| ch.is_ascii_digit()) {
            text.push('.');
            self.cursor.bump();
            while let Some(ch) = self.cursor.peek() {
                if ch.is_ascii_digit() {
                    text.push(ch);
                    self.cursor.bump();
                } else {
                    break;
                }
            }
        }
        text.parse::<f64>().map_err(|_| {
            self.error_here(ParseErrorKind::Internal(format!("unreadable number {text:?}")))
        })
    }

    /// A double-quoted string literal with escape decoding.
    fn string_literal(&mut self) -> ParseResult<String> {
        self.symbol("\"")?;
        let mut value = String::new();
        loop {
            match self.cursor.peek() {
                None => {
                    return Err(
                        self.error_here(ParseErrorKind::ExpectingSymbol("\"".to_string()))
                    );
                }
                Some('"') => {
                    self.cursor.bump();
                    return Ok(value);
                }
                Some('\\') => {
                    self.cursor.bump();
                    value.push(self.escape_char(false)?);
                }
                Some(ch) => {
                    value.push(ch);
                    self.cursor.bump();
                }
            }
        }
    }

    /// Decode the character after a backslash. Templates additionally
    /// escape the backtick.
    fn escape_char(&mut self, in_template: bool) -> ParseResult<char> {
        let Some(ch) = self.cursor.peek() else {
            return Err(self.error_here(ParseErrorKind::ExpectingChar));
        };
        let decoded = match ch {
            '\\' => '\\',
            '"' => '"',
            '\'' => '\'',
            'n' => '\n',
            't' => '\t',
            'r' => '\r',
            '`' if in_template => '`',
            _ => return Err(self.error_here(ParseErrorKind::UnexpectedChar(ch))),
        };
        self.cursor.bump();
        Ok(decoded)
    }

    /// Raw text between double quotes, no escapes. Used by import
    /// specifiers, where the path is taken verbatim.
    fn quoted_path(&mut self) -> ParseResult<String> {
        self.symbol("\"")?;
        let mut path = String::new();
        loop {
            match self.cursor.peek() {
                None => {
                    return Err(
                        self.error_here(ParseErrorKind::ExpectingSymbol("\"".to_string()))
                    );
                }
                Some('"') => {
                    self.cursor.bump();
                    return Ok(path);
                }
                Some(ch) => {
                    path.push(ch);
                    self.cursor.bump();
                }
            }
        }
    }
}

fn is_name_continue(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

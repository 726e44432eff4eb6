impl<'src> Parser<'src> {
    /// Snapshot the parser, run `f`, and on failure rewind the cursor
    /// and context stack — unless `f` crossed a commit point, in which
    /// case the error propagates untouched.
    ///
    /// Returns `Ok(None)` for a soft failure so callers can fall
    /// through to the next alternative.
    fn attempt<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<Option<T>> {
        let checkpoint = self.cursor.checkpoint();
        let context_depth = self.contexts.len();
        let was_committed = self.committed;
        self.committed = false;
        match f(self) {
            Ok(value) => {
                self.committed = was_committed;
                Ok(Some(value))
            }
            // The flag stays raised so enclosing attempts propagate too.
            Err(err) if self.committed => Err(err),
            Err(_) => {
                self.cursor.restore(checkpoint);
                self.contexts.truncate(context_depth);
                self.committed = was_committed;
                Ok(None)
            }
        }
    }

    /// Mark the current alternative as committed. Called immediately
    /// after the keyword or symbol that uniquely identifies a
    /// construct; later failures then refer to that construct instead
    /// of rewinding into an unrelated alternative.
    fn commit(&mut self) {
        self.committed = true;
    }

    /// Run `f` with `context` pushed onto the error-context stack.
    /// The entry is popped on success and kept on failure, so the
    /// error snapshot names the construct being parsed.
    fn in_context<T>(
        &mut self,
        context: ParseContext,
        f: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<T> {
        self.contexts.push(context);
        let value = f(self)?;
        self.contexts.pop();
        Ok(value)
    }

    /// Build an error at the current position with the live context stack.
    fn error_here(&self, kind: ParseErrorKind) -> ParseError {
        self.error_at(kind, self.cursor.position())
    }

    fn error_at(&self, kind: ParseErrorKind, position: Position) -> ParseError {
        ParseError::new(kind, position, self.contexts.clone())
    }

    /// Run `f` under the nesting depth budget.
    ///
    /// Depth is decremented on scope exit even when `f` fails, so
    /// backtracking never leaks depth.
    fn with_recursion_guard<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<T> {
        self.recursion_depth += 1;
        if self.recursion_depth > MAX_RECURSION_DEPTH {
            self.recursion_depth -= 1;
            // Committed: no alternative can do better on input this deep.
            self.commit();
            return Err(self.error_here(ParseErrorKind::Internal(format!(
                "nesting depth limit exceeded ({MAX_RECURSION_DEPTH})"
            ))));
        }

        struct Guard<'guard, 'src>(&'guard mut Parser<'src>);
        impl Drop for Guard<'_, '_> {
            fn drop(&mut self) {
                self.0.recursion_depth = self.0.recursion_depth.saturating_sub(1);
            }
        }

        let guard = Guard(self);
        f(guard.0)
    }

    /// Wrap `kind` into an expression spanning from `start` to the
    /// current cursor position.
    fn finish_expr(&self, start: Position, kind: ExprKind) -> Expr {
        Expr::new(kind, Span::new(start, self.cursor.position()))
    }
}

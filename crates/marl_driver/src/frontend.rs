//! Compilation pipeline entry points.
//!
//! `Driver` ties the pipeline crates together: normalize → lex → parse →
//! lower → analyze, accumulating diagnostics across stages and recording
//! per-stage wall time. `_text` variants take source directly; `_file`
//! variants read the file first and are the only ones that can fail.
use std::fs;
use std::rc::Rc;
use std::time::Instant;

use marl_ir::{Module, Program, Thunk, lower_expr, lower_module};
use marl_lexer::{Lexer, normalize_source};
use marl_parser::Parser;
use marl_syntax::{Diagnostic, SourceFile, SourceId, Token};

use crate::analyzer::analyze_module;

/// Pipeline driver.
#[derive(Default)]
pub struct Driver;

/// Microseconds spent in each stage. Stages that did not run stay zero.
#[derive(Clone, Copy, Debug, Default)]
pub struct Timings {
    pub normalize_us: u128,
    pub lex_us: u128,
    pub parse_us: u128,
    pub lower_us: u128,
    pub analyze_us: u128,
}

#[derive(Clone, Debug)]
pub struct LexedSource {
    pub path: String,
    pub source: SourceFile,
    pub tokens: Vec<Token>,
    pub diagnostics: Vec<Diagnostic>,
    pub timings: Timings,
}

#[derive(Clone, Debug)]
pub struct ParsedSource {
    pub path: String,
    pub source: SourceFile,
    pub tokens: Vec<Token>,
    pub module: Module,
    pub diagnostics: Vec<Diagnostic>,
    pub timings: Timings,
}

#[derive(Clone, Debug)]
pub struct CompiledSource {
    pub path: String,
    pub source: SourceFile,
    pub module: Module,
    pub program: Program,
    pub diagnostics: Vec<Diagnostic>,
    pub timings: Timings,
}

/// A single compiled expression (REPL input).
#[derive(Clone, Debug)]
pub struct CompiledExpr {
    pub source: SourceFile,
    pub thunk: Thunk,
    pub diagnostics: Vec<Diagnostic>,
}

impl Driver {
    pub fn new() -> Self {
        Self
    }

    pub fn lex_file(&self, path: &str) -> Result<LexedSource, String> {
        let input =
            fs::read_to_string(path).map_err(|e| format!("Failed to read file {path}: {e}"))?;
        Ok(self.lex_text(path, &input))
    }

    pub fn lex_text(&self, path: &str, input: &str) -> LexedSource {
        let t1 = Instant::now();
        let normalized = normalize_source(input);
        let t2 = Instant::now();
        let mut diagnostics = normalized.diagnostics;
        let source = SourceFile::new(SourceId(0), path, normalized.text);
        let lex = Lexer::new(source.text.as_str()).lex();
        let t3 = Instant::now();
        diagnostics.extend(lex.diagnostics);

        LexedSource {
            path: path.to_string(),
            source,
            tokens: lex.tokens,
            diagnostics,
            timings: Timings {
                normalize_us: (t2 - t1).as_micros(),
                lex_us: (t3 - t2).as_micros(),
                ..Timings::default()
            },
        }
    }

    pub fn parse_file(&self, path: &str) -> Result<ParsedSource, String> {
        let input =
            fs::read_to_string(path).map_err(|e| format!("Failed to read file {path}: {e}"))?;
        Ok(self.parse_text(path, &input))
    }

    pub fn parse_text(&self, path: &str, input: &str) -> ParsedSource {
        let lexed = self.lex_text(path, input);
        let t = Instant::now();
        let parse = Parser::new(lexed.source.text.as_str(), &lexed.tokens).parse();
        let parse_us = t.elapsed().as_micros();

        let mut diagnostics = lexed.diagnostics;
        diagnostics.extend(parse.diagnostics);
        let mut timings = lexed.timings;
        timings.parse_us = parse_us;

        ParsedSource {
            path: lexed.path,
            source: lexed.source,
            tokens: lexed.tokens,
            module: parse.module,
            diagnostics,
            timings,
        }
    }

    pub fn compile_file(&self, path: &str) -> Result<CompiledSource, String> {
        let input =
            fs::read_to_string(path).map_err(|e| format!("Failed to read file {path}: {e}"))?;
        Ok(self.compile_text(path, &input))
    }

    pub fn compile_text(&self, path: &str, input: &str) -> CompiledSource {
        let mut compiled = self.compile_text_no_analyze(path, input);
        let t = Instant::now();
        compiled
            .diagnostics
            .extend(analyze_module(&compiled.module));
        compiled.timings.analyze_us = t.elapsed().as_micros();
        compiled
    }

    /// Same pipeline without the analyzer pass. REPL lines go through
    /// here: they legitimately reference names defined by earlier lines,
    /// which a per-module analysis cannot see.
    pub fn compile_text_no_analyze(&self, path: &str, input: &str) -> CompiledSource {
        let parsed = self.parse_text(path, input);
        let t = Instant::now();
        let src: Rc<str> = Rc::from(parsed.source.text.as_str());
        let program = lower_module(&parsed.module, &src);
        let mut timings = parsed.timings;
        timings.lower_us = t.elapsed().as_micros();

        CompiledSource {
            path: parsed.path,
            source: parsed.source,
            module: parsed.module,
            program,
            diagnostics: parsed.diagnostics,
            timings,
        }
    }

    pub fn compile_expr_text(&self, path: &str, input: &str) -> CompiledExpr {
        let lexed = self.lex_text(path, input);
        let parsed = Parser::new(lexed.source.text.as_str(), &lexed.tokens).parse_expr_entry();
        let mut diagnostics = lexed.diagnostics;
        diagnostics.extend(parsed.diagnostics);
        let src: Rc<str> = Rc::from(lexed.source.text.as_str());
        let thunk = lower_expr(&parsed.expr, &src);

        CompiledExpr {
            source: lexed.source,
            thunk,
            diagnostics,
        }
    }
}

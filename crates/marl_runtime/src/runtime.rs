//! Runtime state and the module/expression entry points.

use std::rc::Rc;

use marl_ir::{Program, Thunk, ThunkStmt};

use crate::builtins_registry::{BuiltinProvider, BuiltinRegistry, StdBuiltinProvider};
use crate::core::env::Env;
use crate::core::value::Value;
use crate::errors::EvalError;

/// Evaluation knobs.
#[derive(Clone, Copy, Debug)]
pub struct RuntimeConfig {
    /// Extern statements echo their source text to the output sink. The
    /// REPL turns this off; a line you just typed needs no echo.
    pub echo_externs: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self { echo_externs: true }
    }
}

/// Owns the root and session environments, the buffered output sink, and
/// the config. One runtime can load any number of modules; each gets a
/// fresh scope under the shared root bindings.
pub struct Runtime {
    root: Env,
    session: Env,
    output: String,
    pub(crate) config: RuntimeConfig,
}

impl Runtime {
    pub fn new() -> Self {
        Self::with_config(RuntimeConfig::default())
    }

    pub fn with_config(config: RuntimeConfig) -> Self {
        Self::with_provider(config, &StdBuiltinProvider)
    }

    pub fn with_provider(config: RuntimeConfig, provider: &dyn BuiltinProvider) -> Self {
        let root = Env::new();
        let mut registry = BuiltinRegistry::new();
        provider.install(&mut registry);
        registry.install_into(&root);
        let session = root.child();
        Self {
            root,
            session,
            output: String::new(),
            config,
        }
    }

    /// Evaluate a module: all statements in order against a fresh child of
    /// the root environment, then the frozen frame as a record.
    pub fn load_module(&mut self, program: &Program) -> Result<Value, EvalError> {
        let env = self.root.child();
        self.exec_stmts(&env, &program.stmts)?;
        Ok(Value::Record(Rc::new(env.freeze_top())))
    }

    /// Evaluate one expression against the persistent session environment.
    pub fn eval_expr(&mut self, thunk: &Thunk) -> Result<Value, EvalError> {
        let env = self.session.clone();
        self.eval_thunk(&env, thunk)
    }

    /// Run statements against the persistent session environment, so their
    /// definitions stay visible to later lines.
    pub fn exec_session(&mut self, stmts: &[ThunkStmt]) -> Result<(), EvalError> {
        let env = self.session.clone();
        self.exec_stmts(&env, stmts)
    }

    /// Bind a host-provided value in the session environment.
    pub fn define(&mut self, name: &str, value: Value) {
        self.session.define(name, value);
    }

    /// Drain the buffered trace/echo output.
    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }

    pub(crate) fn write_line(&mut self, line: &str) {
        self.output.push_str(line);
        self.output.push('\n');
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}

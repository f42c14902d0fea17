use marl_ir::ThunkStmt;

use crate::core::env::Env;
use crate::errors::{EvalError, messages};
use crate::runtime::Runtime;

impl Runtime {
    pub(crate) fn exec_stmts(&mut self, env: &Env, stmts: &[ThunkStmt]) -> Result<(), EvalError> {
        for stmt in stmts {
            self.exec_stmt(env, stmt)?;
        }
        Ok(())
    }

    fn exec_stmt(&mut self, env: &Env, stmt: &ThunkStmt) -> Result<(), EvalError> {
        match stmt {
            ThunkStmt::Assign { name, value } => {
                let value = self.eval_thunk(env, value)?;
                env.define(name.clone(), value);
                Ok(())
            }
            ThunkStmt::Extern { value, text } => {
                // Echo strictly before evaluating: an error in the wrapped
                // expression must not suppress the echo.
                if self.config.echo_externs {
                    self.write_line(text);
                }
                self.eval_thunk(env, value)?;
                Ok(())
            }
            ThunkStmt::Error(_) => Err(EvalError::Type(messages::MALFORMED.into())),
        }
    }
}

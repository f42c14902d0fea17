use std::rc::Rc;

use marl_ir::Thunk;
use smallvec::SmallVec;

use crate::core::env::Env;
use crate::core::value::{Closure, Value, get_attribute};
use crate::errors::{EvalError, messages};
use crate::render::value_to_literal;
use crate::runtime::Runtime;

impl Runtime {
    pub(crate) fn eval_thunk(&mut self, env: &Env, thunk: &Thunk) -> Result<Value, EvalError> {
        match thunk {
            Thunk::Str(s) => Ok(Value::Str(s.clone())),
            Thunk::Int(v) => Ok(Value::Int(*v)),
            Thunk::Float(v) => Ok(Value::Float(*v)),
            Thunk::Load(name) => env
                .lookup(name)
                .ok_or_else(|| EvalError::Name(name.clone())),
            Thunk::List(items) => {
                let mut out = Vec::with_capacity(items.len());
                for item in items.iter() {
                    out.push(self.eval_thunk(env, item)?);
                }
                Ok(Value::List(out.into()))
            }
            Thunk::Record(stmts) => {
                let scope = env.child();
                self.exec_stmts(&scope, stmts)?;
                Ok(Value::Record(Rc::new(scope.freeze_top())))
            }
            Thunk::If(cond) => {
                // Only the taken branch runs.
                if self.eval_thunk(env, &cond.cond)?.is_truthy() {
                    self.eval_thunk(env, &cond.then)
                } else {
                    self.eval_thunk(env, &cond.otherwise)
                }
            }
            Thunk::Switch(switch) => {
                let scrutinee = self.eval_thunk(env, &switch.scrutinee)?;
                for case in switch.cases.iter() {
                    // Guards run in order; the first hit wins and nothing
                    // after it is evaluated.
                    if self.eval_thunk(env, &case.guard)? == scrutinee {
                        return self.eval_thunk(env, &case.body);
                    }
                }
                Err(EvalError::NoMatch(value_to_literal(&scrutinee)))
            }
            Thunk::Func(func) => Ok(Value::Closure(Rc::new(Closure::new(
                func.clone(),
                env.clone(),
            )))),
            Thunk::Call(call) => {
                let callee = self.eval_thunk(env, &call.callee)?;
                let mut args: SmallVec<[Value; 4]> = SmallVec::with_capacity(call.args.len());
                for arg in call.args.iter() {
                    args.push(self.eval_thunk(env, arg)?);
                }
                self.call_value(&callee, &args)
            }
            Thunk::Attr(attr) => {
                let object = self.eval_thunk(env, &attr.object)?;
                get_attribute(&object, &attr.name)
            }
            Thunk::Error(_) => Err(EvalError::Type(messages::MALFORMED.into())),
        }
    }
}

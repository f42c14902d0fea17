use crate::core::value::Value;
use crate::errors::{EvalError, messages};
use crate::runtime::Runtime;

impl Runtime {
    /// Apply a callable to already-evaluated arguments. Public so hosts and
    /// tests can drive closures obtained from loaded modules.
    pub fn call_value(&mut self, callee: &Value, args: &[Value]) -> Result<Value, EvalError> {
        match callee {
            Value::Closure(closure) => {
                let params = closure.params();
                if params.len() != args.len() {
                    return Err(EvalError::Arity {
                        expected: params.len(),
                        given: args.len(),
                    });
                }
                let frame = closure.env.child();
                for (param, arg) in params.iter().zip(args) {
                    frame.define(param.clone(), arg.clone());
                }
                self.eval_thunk(&frame, closure.body())
            }
            Value::Native(native) => (native.f)(self, args),
            other => Err(EvalError::Type(messages::not_callable(other.type_name()))),
        }
    }
}

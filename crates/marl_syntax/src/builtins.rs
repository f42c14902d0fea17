//! Names bound in the root environment, mirrored here so the static
//! analyzer can resolve them without depending on the runtime crate.

pub const ROOT_BINDINGS: &[&str] = &["true", "false", "builtins", "math"];

pub fn is_root_binding(name: &str) -> bool {
    ROOT_BINDINGS.contains(&name)
}

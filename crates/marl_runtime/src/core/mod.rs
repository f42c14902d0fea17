pub(crate) mod env;
pub(crate) mod value;

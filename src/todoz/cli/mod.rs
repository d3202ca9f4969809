pub(crate) mod demo;
pub(crate) mod print;
pub(crate) mod script;

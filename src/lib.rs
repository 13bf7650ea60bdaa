//! Developer toolbox: JSON-to-code generation plus small document/text
//! utilities, exposed both as a library and through the `dto-kit` binary.

pub mod brdoc;
pub mod cli;
pub mod codec;
pub mod input;
pub mod jsonfmt;
pub mod textgen;
pub mod typegen;
pub mod xmlfmt;

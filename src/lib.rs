use lalrpop_util::lalrpop_mod;

lalrpop_mod!(pub boogie, "/parser/boogie.rs");

pub mod ast;
pub mod config;
pub mod parser;
pub mod subst;

pub mod chunk;
pub mod eval;
pub mod fasta;
pub mod io;
pub mod lev;
pub mod sink;
pub mod tier;

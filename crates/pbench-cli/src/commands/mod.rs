pub mod graph;
pub mod info;
pub mod run;

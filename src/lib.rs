pub mod applet;
pub mod circuit;
pub mod color;
pub mod error;
pub mod ir;
pub mod output;
pub mod parser;
pub mod quantity;
pub mod render;
pub mod signal;
pub mod stats;
pub mod vector;

pub mod board;

pub use board::{Board, BoardObject, FontSpec, ObjectTheme, Position};

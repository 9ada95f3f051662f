//! Error: only structs get a synthesized equality.

use equate_macros::Equatable;

#[derive(Equatable)]
pub enum Direction {
    Up,
    Down,
}

fn main() {
    let _ = [Direction::Up, Direction::Down];
}

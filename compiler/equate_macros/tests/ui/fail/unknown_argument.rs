//! Error: `view` is the only struct-level argument.

use equate_macros::Equatable;

#[derive(Equatable)]
#[equatable(deep)]
pub struct Tree {
    pub left: u8,
}

fn main() {
    assert_eq!(Tree { left: 1 }.left, 1);
}

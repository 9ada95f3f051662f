//! Every named field is compared.

use equate_macros::Equatable;

#[derive(Equatable, Debug)]
struct Point {
    x: i32,
    y: i32,
}

fn main() {
    assert_eq!(Point { x: 1, y: 2 }, Point { x: 1, y: 2 });
    assert_ne!(Point { x: 1, y: 2 }, Point { x: 1, y: 3 });
}

//! Error: tuple fields have no name to compare by.

use equate_macros::Equatable;

#[derive(Equatable)]
struct Meters(f64);

fn main() {
    let Meters(m) = Meters(1.0);
    assert!(m > 0.0);
}

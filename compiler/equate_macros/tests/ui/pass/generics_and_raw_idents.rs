//! Generic parameters and raw identifiers carry over to the impl.

use equate_macros::Equatable;

#[derive(Equatable)]
struct Tagged<T>
where
    T: PartialEq,
{
    r#type: T,
    label: &'static str,
}

fn main() {
    let a = Tagged { r#type: 1u8, label: "x" };
    let b = Tagged { r#type: 1u8, label: "x" };
    assert!(a == b);
    assert!(a != Tagged { r#type: 2u8, label: "x" });
}

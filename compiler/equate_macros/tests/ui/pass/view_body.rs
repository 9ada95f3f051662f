//! With the view role, `body` is not compared.

use equate_macros::Equatable;

struct Rendered(Vec<u8>);

#[derive(Equatable)]
#[equatable(view)]
struct Row {
    title: String,
    body: Rendered,
}

fn main() {
    let a = Row { title: "a".to_string(), body: Rendered(vec![1]) };
    let b = Row { title: "a".to_string(), body: Rendered(vec![2]) };
    assert!(a == b);
    assert_eq!(a.body.0.len() + b.body.0.len(), 2);
}

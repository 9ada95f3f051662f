//! `#[skip_equatable]` fields don't affect equality.

use equate_macros::Equatable;

#[derive(Equatable)]
pub struct Item {
    pub id: u32,
    #[skip_equatable]
    pub cached_label: String,
}

fn main() {
    let a = Item { id: 7, cached_label: "seven".to_string() };
    let b = Item { id: 7, cached_label: String::new() };
    assert!(a == b);
    assert!(a != Item { id: 8, cached_label: "seven".to_string() });
}

//! Test that a read-only view keeps its source from being dropped while in use.

use combiner::collection::{Collection, Sequence};
use combiner::combine::read_only_view;

fn main() {
    let source = Sequence::from([1, 2, 3]);
    let view = read_only_view(&source);
    drop(source);
    assert_eq!(view.len(), 3);
}

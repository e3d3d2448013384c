//! Test that a merged view cannot be used after one of its sources goes out of scope.

use combiner::collection::{Collection, UniqueSet};
use combiner::combine::view_merge;

fn main() {
    let first = UniqueSet::from([1, 2, 3]);
    let view = {
        let second = UniqueSet::from([4, 5]);
        view_merge(&first, &second)
    };
    assert_eq!(view.len(), 5);
}

use std::collections::HashSet;

use classic_ds::tree::Tree;
use quickcheck_macros::quickcheck;

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(i32::from(*x));
    }

    xs.iter().all(|x| tree.contains(i32::from(*x)))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(i32::from(*x));
    }
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(i32::from(*x)))
}

#[quickcheck]
fn duplicates_change_nothing(xs: Vec<i16>) -> bool {
    let mut tree: Tree = xs.iter().map(|x| i32::from(*x)).collect();
    let height = tree.height();
    let len = tree.len();

    let any_inserted = xs.iter().any(|x| tree.insert(i32::from(*x)));

    !any_inserted && tree.height() == height && tree.len() == len
}

#[quickcheck]
fn increasing_input_is_a_chain(len: u8) -> bool {
    let tree: Tree = (0..i32::from(len)).collect();
    tree.height() == usize::from(len)
}

use orx_linked_nodes::*;

#[test]
fn equal_to_itself() {
    let (nodes, head) = LinkedNodes::<Doubly<i32>>::from_values([1, 2, 3]);
    let chain = nodes.chain(head);
    assert!(chain == nodes.chain(head));
    assert!(chain.equals_by(&chain, |a, b| a == b));
}

#[test]
fn empty_chains() {
    let (a, head_a) = LinkedNodes::<Singly<i32>>::from_values([]);
    let (b, head_b) = LinkedNodes::<Singly<i32>>::from_values([1]);

    assert!(a.chain(head_a) == a.chain(None));
    assert!(a.chain(head_a) != b.chain(head_b));
    assert!(b.chain(head_b) != a.chain(head_a));
}

#[test]
fn different_lengths() {
    let (a, head_a) = LinkedNodes::<Singly<i32>>::from_values([1, 2, 3]);
    let (b, head_b) = LinkedNodes::<Singly<i32>>::from_values([1, 2]);

    assert!(a.chain(head_a) != b.chain(head_b));
    assert!(b.chain(head_b) != a.chain(head_a));
    assert!(!a.chain(head_a).equals_by(&b.chain(head_b), |_, _| true));
}

#[test]
fn different_values() {
    let (a, head_a) = LinkedNodes::<Doubly<char>>::from_values(['a', 'b', 'c']);
    let (b, head_b) = LinkedNodes::<Doubly<char>>::from_values(['a', 'x', 'c']);

    assert!(a.chain(head_a) != b.chain(head_b));

    let same_case = |x: &char, y: &char| x.is_lowercase() == y.is_lowercase();
    assert!(a.chain(head_a).equals_by(&b.chain(head_b), same_case));
}

#[test]
fn chains_of_the_same_storage() {
    let mut nodes = LinkedNodes::<Singly<u8>>::new();
    let a = nodes.build_list([4, 5, 6]);
    let b = nodes.build_list([4, 5, 6]);
    let c = nodes.build_list([4, 5, 7]);

    assert_ne!(a, b);
    assert!(nodes.chain(a) == nodes.chain(b));
    assert!(nodes.chain(a) != nodes.chain(c));
}

#[test]
fn broken_back_link() {
    let (a, head_a) = LinkedNodes::<Doubly<i32>>::from_values([1, 2, 3]);
    let (mut b, head_b) = LinkedNodes::<Doubly<i32>>::from_values([1, 2, 3]);
    assert!(a.chain(head_a) == b.chain(head_b));

    let head = head_b.expect("non-empty");
    let third = b.get_next_at(&head, 2).expect("must exist");
    b.node_mut(&third).prev_mut().set_some(head);

    // values are identical, yet the back link of the third node is inconsistent
    assert_eq!(b.format(&head), "[1 <> 2 <> 3]");
    assert!(a.chain(head_a) != b.chain(head_b));
    assert!(b.chain(head_b) != a.chain(head_a));
    assert!(!b.chain(head_b).equals_by(&b.chain(head_b), |_, _| true));
}

#[test]
fn singly_has_no_back_links_to_check() {
    let (mut a, head_a) = LinkedNodes::<Singly<i32>>::from_values([1, 2]);
    let head = head_a.expect("non-empty");
    let tail = a.get_last(&head);

    let (b, head_b) = LinkedNodes::<Singly<i32>>::from_values([2]);
    assert!(a.chain(Some(tail)) == b.chain(head_b));

    a.node_mut(&head).next_mut().set_none();
    assert!(a.chain(Some(head)) != b.chain(head_b));
}

#[test]
fn float_tolerance() {
    let (a, head_a) = LinkedNodes::<Doubly<f64>>::from_values([0.1 + 0.2, 1.0]);
    let (b, head_b) = LinkedNodes::<Doubly<f64>>::from_values([0.3, 1.0]);

    let close = |x: &f64, y: &f64| (x - y).abs() < 1e-9;
    assert!(a.chain(head_a).equals_by(&b.chain(head_b), close));
    assert!(a.chain(head_a) != b.chain(head_b));
}

use orx_linked_nodes::*;

type Nodes<T> = LinkedNodes<Doubly<T>>;
type Ptr<T> = NodePtr<Doubly<T>>;

fn forward<T: Clone>(nodes: &Nodes<T>, head: &Ptr<T>) -> Vec<T> {
    nodes.iter_from(head).cloned().collect()
}

fn backward<T: Clone>(nodes: &Nodes<T>, tail: &Ptr<T>) -> Vec<T> {
    nodes.iter_back_from(tail).cloned().collect()
}

fn check_next<T>(nodes: &Nodes<T>, node: &Ptr<T>, steps: usize, expected: T)
where
    T: PartialEq + std::fmt::Debug,
{
    let next = nodes.get_next_at(node, steps).expect("must exist");
    assert_eq!(nodes.value(&next), Some(&expected));
}

fn check_prev<T>(nodes: &Nodes<T>, node: &Ptr<T>, steps: usize, expected: T)
where
    T: PartialEq + std::fmt::Debug,
{
    let prev = nodes.get_prev_at(node, steps).expect("must exist");
    assert_eq!(nodes.value(&prev), Some(&expected));
}

#[test]
fn build_list() {
    let mut nodes = Nodes::new();
    let head = nodes
        .build_list([1.1, 2.01, 4.31, 8.901, 16.32])
        .expect("non-empty");

    check_next(&nodes, &head, 0, 1.1);
    check_next(&nodes, &head, 1, 2.01);
    check_next(&nodes, &head, 2, 4.31);
    check_next(&nodes, &head, 3, 8.901);
    check_next(&nodes, &head, 4, 16.32);

    let last = nodes.get_last(&head);

    check_prev(&nodes, &last, 0, 16.32);
    check_prev(&nodes, &last, 1, 8.901);
    check_prev(&nodes, &last, 2, 4.31);
    check_prev(&nodes, &last, 3, 2.01);
    check_prev(&nodes, &last, 4, 1.1);

    assert_eq!(nodes.get_prev_at(&last, 5), None);
    assert_eq!(nodes.get_next_at(&head, 5), None);
    assert_eq!(nodes.get_head(&last), head);
}

#[test]
fn build_list_links_back() {
    for len in [1, 2, 3, 17, 64] {
        let (nodes, head) = Nodes::from_values(0..len);
        let head = head.expect("non-empty");

        assert!(nodes.is_valid(&head));
        assert_eq!(nodes.first_broken_link(&head), None);
        assert_eq!(nodes.node(&head).prev().get(), None);

        for ptr in nodes.iter_ptr_from(&head) {
            if let Some(next) = nodes.next_of(&ptr) {
                assert!(nodes.node(&next).prev().points_to(&ptr));
                assert_eq!(nodes.prev_of(&next), Some(ptr));
            }
        }

        let last = nodes.get_last(&head);
        assert_eq!(forward(&nodes, &head), (0..len).collect::<Vec<_>>());
        assert_eq!(backward(&nodes, &last), (0..len).rev().collect::<Vec<_>>());
    }
}

#[test]
fn build_list_empty() {
    let mut nodes = Nodes::<i32>::new();
    assert_eq!(nodes.build_list([]), None);
    assert!(nodes.chain(None).is_valid());
    assert!(nodes.is_empty());
}

#[test]
fn head_and_tail_reachable_from_any_node() {
    let (nodes, head) = Nodes::from_values('a'..='h');
    let head = head.expect("non-empty");
    let last = nodes.get_last(&head);

    for node in nodes.iter_ptr_from(&head) {
        assert_eq!(nodes.get_head(&node), head);
        assert_eq!(nodes.get_last(&node), last);
        assert_eq!(nodes.get_last(&nodes.get_head(&node)), nodes.get_last(&node));
        assert_eq!(nodes.get_head(&nodes.get_last(&node)), nodes.get_head(&node));
    }
}

#[test]
fn get_prev_at_zero_is_identity() {
    let (nodes, head) = Nodes::from_values([7]);
    let head = head.expect("non-empty");

    assert_eq!(nodes.get_prev_at(&head, 0), Some(head));
    assert_eq!(nodes.get_next_at(&head, 0), Some(head));
    assert_eq!(nodes.get_head(&head), head);
    assert_eq!(nodes.get_last(&head), head);
    assert_eq!(nodes.get_prev_at(&head, 1), None);
}

#[test]
fn new_node_does_not_validate() {
    let mut nodes = Nodes::new();
    let a = nodes.new_node(None, None, 'a');
    let b = nodes.new_node(Some(a), None, 'b');

    // a does not link forward yet
    assert_eq!(forward(&nodes, &a), ['a']);
    assert_eq!(backward(&nodes, &b), ['b', 'a']);

    nodes.node_mut(&a).next_mut().set_some(b);
    assert_eq!(forward(&nodes, &a), ['a', 'b']);
    assert!(nodes.is_valid(&a));

    let c = nodes.new_node(None, None, 'c');
    nodes.node_mut(&b).next_mut().set_some(c);
    assert_eq!(forward(&nodes, &a), ['a', 'b', 'c']);
    assert!(!nodes.is_valid(&a));
    assert_eq!(nodes.first_broken_link(&a), Some(b));
}

#[test]
fn new_empty_node() {
    let mut nodes = Nodes::<String>::new();
    let ptr = nodes.new_empty_node();

    let node = nodes.node(&ptr);
    assert_eq!(node.value().map(|x| x.as_str()), Some(""));
    assert!(node.prev().get().is_none());
    assert!(node.next().get().is_none());
}

#[test]
fn invalid_at_first_broken_link() {
    let (mut nodes, head) = Nodes::from_values(0..6);
    let head = head.expect("non-empty");

    let second = nodes.get_next_at(&head, 1).expect("must exist");
    let fourth = nodes.get_next_at(&head, 3).expect("must exist");
    let fifth = nodes.get_next_at(&head, 4).expect("must exist");

    // fifth links back to second instead of fourth
    nodes.node_mut(&fifth).prev_mut().set_some(second);

    assert!(!nodes.is_valid(&head));
    assert_eq!(nodes.first_broken_link(&head), Some(fourth));
    assert!(nodes.is_valid(&fifth));
    assert!(!nodes.chain(Some(head)).is_valid());

    // break an earlier link; the first position is reported
    let third = nodes.get_next_at(&head, 2).expect("must exist");
    nodes.node_mut(&third).prev_mut().set_none();
    assert_eq!(nodes.first_broken_link(&head), Some(second));

    // forward walks and formatting are not affected by back links
    assert_eq!(forward(&nodes, &head), [0, 1, 2, 3, 4, 5]);
    assert_eq!(nodes.format(&head), "[0 <> 1 <> 2 <> 3 <> 4 <> 5]");
}

#[test]
fn release_middle_detaches_predecessor() {
    let (mut nodes, head) = Nodes::from_values((0..6).map(|x| x.to_string()));
    let head = head.expect("non-empty");
    let fourth = nodes.get_next_at(&head, 3).expect("must exist");
    let third = nodes.get_prev_at(&fourth, 1).expect("must exist");

    assert_eq!(nodes.release(&fourth), 3);

    assert_eq!(nodes.len(), 3);
    assert_eq!(forward(&nodes, &head), ["0", "1", "2"]);
    assert_eq!(nodes.get_last(&head), third);
    assert_eq!(nodes.node(&third).next().get(), None);
    assert!(nodes.is_valid(&head));
    assert!(!fourth.is_valid_for(&nodes));
}

#[test]
fn release_never_follows_prev() {
    let (mut nodes, head) = Nodes::from_values([1, 2, 3, 4]);
    let head = head.expect("non-empty");
    let last = nodes.get_last(&head);

    assert_eq!(nodes.release(&last), 1);
    assert_eq!(forward(&nodes, &head), [1, 2, 3]);

    assert_eq!(nodes.release(&head), 3);
    assert!(nodes.is_empty());

    let utilization = nodes.utilization();
    assert_eq!(utilization.num_active_nodes, 0);
    assert_eq!(utilization.num_closed_nodes, 4);
}

#[test]
fn release_keeps_other_chains() {
    let mut nodes = Nodes::new();
    let a = nodes.build_list([1, 2, 3]).expect("non-empty");
    let b = nodes.build_list([10, 20]).expect("non-empty");

    assert_eq!(nodes.release(&a), 3);
    assert_eq!(nodes.len(), 2);
    assert_eq!(forward(&nodes, &b), [10, 20]);
    assert!(nodes.is_valid(&b));
}

#[test]
fn chain_view() {
    let (nodes, head) = Nodes::from_values(["x", "y", "z"]);
    let chain = nodes.chain(head);

    assert!(!chain.is_empty());
    assert_eq!(chain.len(), 3);
    assert_eq!(chain.head(), head);
    assert_eq!(chain.last().and_then(|x| nodes.value(&x)), Some(&"z"));
    assert_eq!(chain.iter().copied().collect::<Vec<_>>(), ["x", "y", "z"]);
    assert_eq!((&chain).into_iter().count(), 3);
    assert_eq!(chain.to_string(), "[x <> y <> z]");
    assert!(chain.is_valid());
}

#[test]
fn reused_position_is_not_reachable_from_other_chains() {
    let mut nodes = Nodes::new();
    let a = nodes.build_list([1, 2]).expect("non-empty");
    let x = nodes.build_list([10, 20]).expect("non-empty");

    // x links back into the first chain
    nodes.node_mut(&x).prev_mut().set_some(a);
    assert_eq!(backward(&nodes, &x), [10, 1]);

    assert_eq!(nodes.release(&a), 2);
    assert_eq!(backward(&nodes, &x), [10]);

    let b = nodes.build_list([7, 8]).expect("non-empty");
    assert_eq!(nodes.node(&x).prev().get(), None);
    assert_eq!(backward(&nodes, &x), [10]);
    assert_eq!(forward(&nodes, &b), [7, 8]);
    assert_eq!(forward(&nodes, &x), [10, 20]);
    assert!(nodes.is_valid(&b));
    assert_eq!(nodes.utilization().num_closed_nodes, 0);
}

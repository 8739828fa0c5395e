use rand::prelude::*;
use sllist::{LinkedList, List, ListError};
use std::sync::Arc;
use std::thread;

fn contents<T: Clone>(list: &LinkedList<T>) -> Vec<T> {
    list.iter().cloned().collect()
}

#[test]
fn demonstration() {
    let mut list = LinkedList::from_values(vec![1, 2, 3, 4, 5]);
    assert_eq!(
        "Node(1)\nNode(2)\nNode(3)\nNode(4)\nNode(5)\n",
        list.to_string()
    );
    list.push(6);
    assert_eq!(vec![1, 2, 3, 4, 5, 6], contents(&list));
    assert_eq!(Some(6), list.pop());
    assert_eq!(vec![1, 2, 3, 4, 5], contents(&list));
}

#[test]
fn empty_then_push() {
    let mut list: LinkedList<i32> = LinkedList::from_values(vec![]);
    assert_eq!(None, list.pop());
    assert_eq!(Err(ListError::Empty), list.try_pop());
    list.push(10);
    assert_eq!(vec![10], contents(&list));
}

#[test]
fn matches_vec_model() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..50 {
        let init: Vec<i64> = (0..rng.gen_range(0usize, 20)).map(|_| rng.gen()).collect();
        let mut list = LinkedList::from_values(init.clone());
        let mut model = init;
        assert_eq!(model, contents(&list));

        for _ in 0..100 {
            if rng.gen_bool(0.5) {
                let v: i64 = rng.gen();
                List::push(&mut list, v);
                List::push(&mut model, v);
            } else {
                assert_eq!(List::pop(&mut model), List::pop(&mut list));
            }
            assert_eq!(model.len(), list.len());
            assert_eq!(model, contents(&list));
        }
    }
}

#[test]
fn drain_exactly() {
    let mut rng = StdRng::seed_from_u64(7);
    for n in 0..16usize {
        let values: Vec<u32> = (0..n).map(|_| rng.gen()).collect();
        let mut list = LinkedList::from_values(values.clone());
        for expected in values.iter().rev() {
            assert_eq!(Some(*expected), list.pop());
        }
        assert!(list.is_empty());
        assert_eq!(0, list.len());
        assert_eq!(None, list.pop());
    }
}

#[test]
fn externally_locked() {
    let shared = Arc::new(spin::Mutex::new(LinkedList::new()));
    let handles: Vec<_> = (0..4)
        .map(|t| {
            let shared = shared.clone();
            thread::spawn(move || {
                for i in 0..25 {
                    shared.lock().push(t * 100 + i);
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    let mut list = shared.lock();
    assert_eq!(100, list.len());
    let mut seen: Vec<i32> = list.iter().copied().collect();
    seen.sort();
    let expected: Vec<i32> = (0..4)
        .flat_map(|t| (0..25).map(move |i| t * 100 + i))
        .collect();
    assert_eq!(expected, seen);
    while list.pop().is_some() {}
    assert!(list.is_empty());
}

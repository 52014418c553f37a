//! Ownership hand-off checks: every element placed into the list must be
//! dropped exactly once, whether it leaves through `remove`/`pop`, gets
//! replaced by `set`, or is still live when the list is cleared or dropped.

use std::rc::Rc;

use dynlist::DynList;

#[test]
fn test_clear_drops_all_live_elements() {
    let marker = Rc::new(());
    let mut list = DynList::new();
    for _ in 0..5 {
        list.push_back(Rc::clone(&marker));
    }
    assert_eq!(Rc::strong_count(&marker), 6);

    list.clear();

    assert_eq!(Rc::strong_count(&marker), 1);
}

#[test]
fn test_list_drop_releases_live_elements() {
    let marker = Rc::new(());
    {
        let mut list = DynList::new();
        for _ in 0..7 {
            list.push_back(Rc::clone(&marker));
        }
        assert_eq!(Rc::strong_count(&marker), 8);
    }
    assert_eq!(Rc::strong_count(&marker), 1);
}

#[test]
fn test_growth_neither_leaks_nor_double_drops() {
    let marker = Rc::new(());
    {
        let mut list = DynList::with_capacity(2);
        // Forces several buffer reallocations.
        for _ in 0..25 {
            list.push_back(Rc::clone(&marker));
        }
        assert_eq!(Rc::strong_count(&marker), 26);
    }
    assert_eq!(Rc::strong_count(&marker), 1);
}

#[test]
fn test_remove_hands_ownership_to_caller() {
    let marker = Rc::new(());
    let mut list = DynList::new();
    for _ in 0..3 {
        list.push_back(Rc::clone(&marker));
    }

    let removed = list.remove(1).unwrap();
    assert_eq!(Rc::strong_count(&marker), 4); // still alive in caller's hands

    drop(removed);
    assert_eq!(Rc::strong_count(&marker), 3);

    drop(list);
    assert_eq!(Rc::strong_count(&marker), 1);
}

#[test]
fn test_pop_front_shift_does_not_double_drop() {
    let marker = Rc::new(());
    let mut list = DynList::new();
    for _ in 0..4 {
        list.push_back(Rc::clone(&marker));
    }

    drop(list.pop_front().unwrap());
    drop(list.pop_front().unwrap());
    assert_eq!(Rc::strong_count(&marker), 3);

    drop(list);
    assert_eq!(Rc::strong_count(&marker), 1);
}

#[test]
fn test_set_returns_replaced_element_intact() {
    let old = Rc::new(1);
    let new = Rc::new(2);
    let mut list = DynList::new();
    list.push_back(Rc::clone(&old));

    let previous = list.set(0, Rc::clone(&new)).unwrap();
    assert_eq!(*previous, 1);
    assert_eq!(Rc::strong_count(&old), 2);

    drop(previous);
    assert_eq!(Rc::strong_count(&old), 1);
    assert_eq!(Rc::strong_count(&new), 2);
}

#[test]
fn test_remove_item_drops_only_the_match() {
    let a = Rc::new(1);
    let b = Rc::new(2);
    let mut list = DynList::new();
    list.push_back(Rc::clone(&a));
    list.push_back(Rc::clone(&b));

    assert!(list.remove_item(&Rc::new(1)));

    assert_eq!(Rc::strong_count(&a), 1);
    assert_eq!(Rc::strong_count(&b), 2);
    assert_eq!(list.len(), 1);
}

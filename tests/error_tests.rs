use dynlist::{DynList, DynListError};

fn sample() -> DynList<&'static str> {
    let mut list = DynList::new();
    list.push_back("A");
    list.push_back("B");
    list.push_back("C");
    list
}

fn snapshot(list: &DynList<&'static str>) -> (usize, usize, Vec<&'static str>) {
    let items = (0..list.len()).map(|i| *list.get(i).unwrap()).collect();
    (list.len(), list.capacity(), items)
}

#[test]
fn test_insert_index_beyond_len() {
    let mut list = sample();
    let before = snapshot(&list);

    assert_eq!(
        list.insert(4, "X"),
        Err(DynListError::IndexOutOfBounds {
            index: 4,
            length: 3
        })
    );
    assert_eq!(snapshot(&list), before); // failure must not mutate
}

#[test]
fn test_get_out_of_bounds() {
    let list = sample();

    assert_eq!(
        list.get(3),
        Err(DynListError::IndexOutOfBounds {
            index: 3,
            length: 3
        })
    );
}

#[test]
fn test_set_out_of_bounds() {
    let mut list = sample();
    let before = snapshot(&list);

    assert_eq!(
        list.set(7, "X"),
        Err(DynListError::IndexOutOfBounds {
            index: 7,
            length: 3
        })
    );
    assert_eq!(snapshot(&list), before);
}

#[test]
fn test_remove_out_of_bounds() {
    let mut list = sample();
    let before = snapshot(&list);

    assert_eq!(
        list.remove(3),
        Err(DynListError::IndexOutOfBounds {
            index: 3,
            length: 3
        })
    );
    assert_eq!(snapshot(&list), before);
}

#[test]
fn test_empty_list_operations() {
    let mut list: DynList<&str> = DynList::new();

    assert_eq!(list.front(), Err(DynListError::EmptyList));
    assert_eq!(list.back(), Err(DynListError::EmptyList));
    assert_eq!(list.pop_front(), Err(DynListError::EmptyList));
    assert_eq!(list.pop_back(), Err(DynListError::EmptyList));

    assert!(list.is_empty());
    assert_eq!(list.capacity(), 10);
}

#[test]
fn test_get_on_empty_list() {
    let list: DynList<u8> = DynList::new();

    assert_eq!(
        list.get(0),
        Err(DynListError::IndexOutOfBounds {
            index: 0,
            length: 0
        })
    );
}

#[test]
fn test_insert_at_zero_on_empty_list_is_valid() {
    let mut list = DynList::new();

    assert_eq!(list.insert(0, "A"), Ok(()));
    assert_eq!(list.len(), 1);
}

#[test]
fn test_error_display_messages() {
    let oob = DynListError::IndexOutOfBounds {
        index: 5,
        length: 2,
    };
    assert_eq!(
        oob.to_string(),
        "Index out of bounds: index 5 is beyond list length 2"
    );

    assert_eq!(
        DynListError::EmptyList.to_string(),
        "Operation attempted on an empty list"
    );
}

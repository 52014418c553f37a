//! Walks the list through its operation families, printing a buffer
//! snapshot after every step. Run with:
//!
//! ```sh
//! cargo run --example walkthrough
//! ```

use dynlist::DynList;

fn main() {
    let mut list: DynList<&str> = DynList::new();

    println!("===== Initial empty list =====");
    println!("{}\n", list.dump());

    println!("===== Appending A, B, C =====");
    for item in ["A", "B", "C"] {
        list.push_back(item);
        println!("After push_back({item:?}):\n{}\n", list.dump());
    }

    println!("===== Positional insert =====");
    list.insert(1, "X").expect("index 1 is valid for a list of 3");
    println!("After insert(1, \"X\"):\n{}\n", list.dump());

    println!("===== Insert after an existing element =====");
    let inserted = list.insert_after(&"A", "Y");
    println!("insert_after(\"A\", \"Y\") -> {inserted}\n{}\n", list.dump());
    let inserted = list.insert_after(&"Z", "Y");
    println!("insert_after(\"Z\", \"Y\") -> {inserted} (list unchanged)\n");

    println!("===== Removal family =====");
    let removed = list.remove(2).expect("index 2 is valid");
    println!("remove(2) -> {removed:?}\n{}\n", list.dump());
    let removed = list.remove_item(&"Y");
    println!("remove_item(\"Y\") -> {removed}\n{}\n", list.dump());
    let first = list.pop_front().expect("list is not empty");
    println!("pop_front() -> {first:?}\n{}\n", list.dump());

    println!("===== Growth past the default capacity =====");
    list.clear();
    for item in ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"] {
        list.push_back(item);
    }
    println!("Filled to capacity:\n{}\n", list.dump());
    list.push_back("K");
    println!("After push_back(\"K\") triggered doubling:\n{}\n", list.dump());

    println!("===== Clear retains capacity =====");
    list.clear();
    println!("After clear():\n{}", list.dump());
}

use avlmap::AvlMap;

fn main() {
    let mut map = AvlMap::new();
    map.add(0, "zero").unwrap();
    map.add(1, "one").unwrap();
    map.add(2, "two").unwrap();
    map.add(3, "three").unwrap();
    map.add(4, "four").unwrap();
    map.add(5, "five").unwrap();
    assert!(map.add(2, "two again").is_err());

    assert_eq!(map.get(&1), Some(&"one"));
    map.remove_key(&1);
    assert!(!map.contains_key(&1));

    map.traverse_in_order(|k, v| {
        println!("{k} => {v}");
    });

    println!("len: {}, height: {}", map.len(), map.height());
}

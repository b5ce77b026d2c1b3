use avlmap::AvlMap;

fn main() {
    let mut map = AvlMap::new();
    for key in 1..=10 {
        map.add(key, ()).unwrap();
    }

    println!("Tree of height {}:", map.height());
    println!("{}", map.render());

    println!("Level-order traversal:");
    map.traverse_level_order(|k, _| {
        print!("{k} ");
    });
    println!();
}

use cordyceps_rbtree::RbTree;

fn main() {
    let mut tree: RbTree<u32> = [15, 12, 19, 13, 23].into_iter().collect();
    tree.assert_invariants();

    for (value, color) in tree.iter() {
        print!("{value} ({color:?}) ");
    }
    println!();

    println!(
        "level order: {:?}",
        tree.snapshot().map(|(&v, c)| (v, c)).collect::<Vec<_>>()
    );

    match tree.remove(&15) {
        Some(value) => println!("removed {value}"),
        None => println!("15 not found"),
    }
    tree.assert_invariants();

    match tree.remove(&1) {
        Some(value) => println!("removed {value}"),
        None => println!("1 not found"),
    }
    tree.assert_invariants();

    println!(
        "level order: {:?}",
        tree.snapshot().map(|(&v, c)| (v, c)).collect::<Vec<_>>()
    );

    let mut dot = String::new();
    tree.dotgraph("demo", &mut dot).unwrap();
    println!("{dot}");
}

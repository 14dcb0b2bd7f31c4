use gapscan::{min_adjacent_pairs, min_separated_difference, zeroed, DenseGrid};

fn main() {
    println!("gapscan: minimum-gap scans and zero-propagation");

    // Separation-constrained minimum difference
    let sequence = [1, 3, 6, 10, 15];
    let min_separation = 1;

    println!("\nSequence: {:?}", sequence);
    println!("Minimum separation: {}", min_separation);
    match min_separated_difference(&sequence, min_separation) {
        Some(diff) => println!("Minimum separated difference: {}", diff),
        None => println!("No qualifying pair"),
    }

    // Closest adjacent pairs after sorting
    let values = [6, 2, 4, 10];

    println!("\nSequence: {:?}", values);
    match min_adjacent_pairs(&values) {
        Some(result) => {
            println!("Minimum adjacent difference: {}", result.min_diff);
            println!("Closest pairs:");
            for (low, high) in &result.pairs {
                println!("  ({}, {})", low, high);
            }
        }
        None => println!("Sequence too short for adjacent pairs"),
    }

    // Zero-propagation over a grid
    let grid = DenseGrid::from_rows(vec![vec![3, 4, 0], vec![5, 0, 9], vec![12, 13, 14]])
        .expect("rows share one width");

    println!("\nGrid before zeroing:");
    println!("{:?}", grid);

    let result = zeroed(&grid);
    println!("\nGrid after zeroing:");
    println!("{:?}", result);
}

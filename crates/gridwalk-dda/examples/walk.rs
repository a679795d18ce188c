use gridwalk_dda::*;

fn main() {
    let start = Point::new(-1.3, 0.4);
    let end = Point::new(3.6, 2.7);

    match GridTraversal::new(start, end) {
        Ok(traversal) => {
            println!("Walking grid cells...");
            println!("  Start: {} (cell {})", start, traversal.start_cell());
            println!("  End:   {} (cell {})", end, traversal.end_cell());
            println!();

            let mut steps = traversal.include_start().with_max_steps(64).steps();
            for (i, step) in steps.by_ref().enumerate() {
                println!("Step {:>2}: cell {} entered at t = {:.3}", i, step.cell, step.t);
            }

            let walk = steps.traversal();
            println!();
            println!("Reached end cell: {} ({} steps)", walk.is_complete(), walk.steps_taken());
        }
        Err(e) => {
            eprintln!("Failed to set up traversal: {}", e);
        }
    }

    // Degenerate input is not an error, it simply visits nothing.
    let visited = traverse(end, end, |cell| println!("unexpected cell {}", cell));
    println!("\nZero-length segment visited: {:?}", visited);
}

use maze_pathfinding::{MazeGrid, MazeSolver, Strategy};

// In this example the maze contains a teleporter (T) and counter tiles
// (C adds 50 steps, c removes 50). The run is seeded so the teleport
// destinations are reproducible.
fn main() {
    let maze = MazeGrid::from_ascii("A C  \n#### \nT  c \n ####\n    B").unwrap();
    println!("{maze}");
    let mut solver = MazeSolver::with_seed(maze, 7).unwrap();
    match solver.solve(Strategy::Bfs) {
        Ok(true) => {
            println!("Path found in {} steps:", solver.counter());
            for p in solver.reconstruct_path().unwrap() {
                println!("  ({}, {})", p.x, p.y);
            }
        }
        Ok(false) => println!("No path found after {} steps", solver.counter()),
        Err(e) => println!("Solve failed: {e}"),
    }
}

use maze_pathfinding::{MazeGrid, MazeSolver, Strategy};

// In this example the 3x3 maze
// A
//  #
//   B
// is solved with every strategy, where
// - # marks a wall
// - A marks the start
// - B marks the end
fn main() {
    let maze = MazeGrid::from_ascii("A  \n # \n  B").unwrap();
    println!("{maze}");
    for strategy in Strategy::ALL {
        let mut solver = MazeSolver::new(maze.clone()).unwrap();
        let found = solver.solve(strategy).unwrap();
        println!(
            "{:?}: found={}, steps={}",
            strategy,
            found,
            solver.counter()
        );
        if found {
            let path = solver.reconstruct_path().unwrap();
            for p in path {
                println!("  ({}, {})", p.x, p.y);
            }
        }
    }
}

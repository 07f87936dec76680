//! Progress notification seam for an external observer (typically a UI
//! rendering incremental search state). The solver makes no assumption
//! about hook latency and works the same with no observer installed.

use grid_util::point::Point;

/// Callbacks fired by the solver while a strategy runs. All hooks have
/// empty default bodies so an observer only implements what it renders.
pub trait ProgressObserver {
    /// The step counter changed (ordinary step, counter tile or reset).
    fn on_counter(&mut self, _value: i64) {}

    /// A tile was marked visited and assigned its parent back-link.
    fn on_discover(&mut self, _tile: Point, _parent: Option<Point>) {}

    /// The dead-end-fill scan proved a tile dead.
    fn on_dead_end(&mut self, _tile: Point) {}

    /// A strategy run completed with the given outcome and final counter.
    fn on_finished(&mut self, _found: bool, _counter: i64) {}
}

pub mod clock;
pub mod grid;
pub mod io;
pub mod simulator;

pub use clock::SimulationClock;
pub use grid::SandGrid;
pub use io::{FixedInput, InputSource, PointerState, Renderer};
pub use simulator::GridSimulator;

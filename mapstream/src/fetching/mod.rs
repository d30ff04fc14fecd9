mod grab;
pub use grab::*;

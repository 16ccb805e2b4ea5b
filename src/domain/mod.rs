// Domain layer: the board/list/card models and the port the engine talks to.

pub mod model;
pub mod ports;

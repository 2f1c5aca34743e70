mod grid;
mod question;

pub use grid::{Cell, Grid, GridError, OPEN, WALL};
pub use question::{Answer, Question};

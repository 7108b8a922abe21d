// Rules engine first, presentation elsewhere: the binaries consume the
// same four operations any front-end would.
pub mod board;
pub mod game;
pub mod perft;
pub mod rules;

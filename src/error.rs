use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("the game is already over")]
    GameOver,
    #[error("strategy returned no move for a position that is still in play")]
    NoMove,
    #[error("`{0}` is not a legal move")]
    InvalidMove(String),
    #[error("unsupported board side length {0}, expected 1 to 5")]
    UnsupportedSideLength(usize),
}

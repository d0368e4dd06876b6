pub mod index;

pub use index::{
    Color, Coordinate, Direction, IndexCoordinator, IndexError, LineId, Piece, PieceKind,
    PieceType,
};

/// Errors reported by the strict position loader.
///
/// The lenient loader never fails; these only surface when strict parsing is
/// explicitly requested.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// Fewer than four or more than six whitespace-separated fields.
    #[error("position must have 4 to 6 fields, got {0}")]
    FieldCount(usize),

    #[error("board layout must contain 8 ranks, got {0}")]
    RankCount(usize),

    /// A rank whose pieces and empty-square digits do not add up to eight files.
    #[error("rank {rank} covers {files} files instead of 8")]
    RankWidth { rank: usize, files: usize },

    #[error("invalid piece character '{0}' in board layout")]
    InvalidPiece(char),

    #[error("invalid side-to-move field: {0}")]
    InvalidSideToMove(String),

    #[error("invalid castling rights field: {0}")]
    InvalidCastling(String),

    #[error("invalid en-passant square: {0}")]
    InvalidEnPassant(String),

    #[error("invalid move counter: {0}")]
    InvalidCounter(String),

    /// Each side must have exactly one king.
    #[error("expected one king per side, got {light} white and {dark} black")]
    KingCount { light: u32, dark: u32 },
}

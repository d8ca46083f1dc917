use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArenaError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid match config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("invalid results file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid start position: {0}")]
    Fen(#[from] chess_core::FenError),

    #[error("unknown opponent '{0}' (expected 'random' or 'tactical')")]
    UnknownOpponent(String),

    #[error("{engine} returned no move in a live position: {fen}")]
    NoMove { engine: String, fen: String },

    #[error("{engine} played illegal move {mv} in {fen}")]
    IllegalMove {
        engine: String,
        mv: String,
        fen: String,
    },
}

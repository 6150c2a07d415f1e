// ============================================
// src/error.rs
// 起動時の読み込みで発生するエラー
// ============================================

use std::path::PathBuf;

/// 設定ファイル・ストーリーファイル読み込み時のエラー
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not determine a configuration directory for this platform")]
    NoConfigDir,
}

pub type Result<T> = std::result::Result<T, Error>;

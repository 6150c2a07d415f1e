// ============================================
// src/config.rs
// 設定ファイル (config.json) の読み込み
// ============================================

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::game::{DEFAULT_MAX_HINTS, DEFAULT_POINTS_PER_WORD};

const CONFIG_FILE: &str = "config.json";
const LOG_FILE: &str = "wordhunt.log";

/// 設定値 (全部省略可)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub points_per_word: u32,
    pub max_hints: usize,
    /// 生成ストーリーの JSON ファイル
    pub generated_stories: Option<PathBuf>,
    /// 組み込み辞書に足すスペルミス
    pub extra_corrections: HashMap<String, String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            points_per_word: DEFAULT_POINTS_PER_WORD,
            max_hints: DEFAULT_MAX_HINTS,
            generated_stories: None,
            extra_corrections: HashMap::new(),
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("jp", "Fukumoto0141", "WORD_HUNT")
}

/// OS ごとの設定ファイルの場所
pub fn default_config_path() -> Result<PathBuf> {
    project_dirs()
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
        .ok_or(Error::NoConfigDir)
}

/// ログファイルの場所 (取得できなければカレントディレクトリ)
pub fn log_file_path() -> PathBuf {
    match project_dirs() {
        Some(dirs) => dirs.data_local_dir().join(LOG_FILE),
        None => PathBuf::from(LOG_FILE),
    }
}

impl GameConfig {
    /// MARK:ファイルから読み込む
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_reader(BufReader::new(file)).map_err(|source| Error::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// 明示されたパスがあればそれを読む (無ければエラー)
    /// 無指定なら既定の場所を見て、ファイルが無ければデフォルト値
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            log::info!("using config {}", path.display());
            return Self::load(path);
        }

        let path = match default_config_path() {
            Ok(path) => path,
            Err(err) => {
                log::warn!("{err}; using default settings");
                return Ok(Self::default());
            }
        };
        if path.exists() {
            log::info!("using config {}", path.display());
            Self::load(&path)
        } else {
            log::debug!("no config at {}; using default settings", path.display());
            Ok(Self::default())
        }
    }
}

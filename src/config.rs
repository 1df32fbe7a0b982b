use std::path::{Path, PathBuf};
use std::{fs, io};

use clap::ValueEnum;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum ConfigError {
    #[error("Failed to load {0}. error: {1}")]
    LoadFileError(PathBuf, io::ErrorKind),
    #[error(transparent)]
    TomlParseError(#[from] toml::de::Error),
}

/// 出力する形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub(crate) enum OutputMode {
    /// 表示形式のみ
    Display,
    /// 保存形式のみ
    Save,
    /// 表示形式と保存形式
    #[default]
    Both,
}

impl OutputMode {
    pub(crate) fn shows_display(self) -> bool {
        matches!(self, OutputMode::Display | OutputMode::Both)
    }

    pub(crate) fn shows_save(self) -> bool {
        matches!(self, OutputMode::Save | OutputMode::Both)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct Config {
    /// 名前を使わず常に数値で表示するか
    /// デフォルトはfalse
    #[serde(default)]
    pub(crate) numeric: bool,

    /// 出力する形式
    /// デフォルトは表示形式と保存形式の両方
    #[serde(default)]
    pub(crate) output: OutputMode,

    /// 表示形式の先頭にマッチ名を付けるか
    /// デフォルトはtrue
    #[serde(default = "Config::default_print_match_name")]
    pub(crate) print_match_name: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            numeric: false,
            output: OutputMode::default(),
            print_match_name: Self::default_print_match_name(),
        }
    }
}
impl Config {
    pub(crate) fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::LoadFileError(path.to_path_buf(), e.kind()))?;
        toml::from_str(&content).map_err(ConfigError::TomlParseError)
    }

    /// 設定ファイルが指定されていなければデフォルト値
    pub(crate) fn load_or_default(path: Option<impl AsRef<Path>>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    const fn default_print_match_name() -> bool {
        true
    }
}

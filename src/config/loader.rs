// 配置加载逻辑
//
// 此文件负责从文件和环境变量加载配置。

use config::{Config, Environment, File};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

use super::structs::AppConfig;
use crate::error::Result;

/// Project-level config file, looked up in the current directory.
pub const PROJECT_CONFIG_FILE: &str = ".wizard-commit.toml";

/// Environment variable prefix (`WIZARD_COMMIT__LLM__DEFAULT_PROVIDER=gemini`).
const ENV_PREFIX: &str = "WIZARD_COMMIT";

/// 加载应用配置
///
/// 配置加载优先级（从高到低）：
/// 1. 环境变量（WIZARD_COMMIT__* 前缀，双下划线表示嵌套）
///    - 例如：`WIZARD_COMMIT__LLM__DEFAULT_PROVIDER=gemini`
///    - 例如：`WIZARD_COMMIT__LLM__PROVIDERS__GEMINI__API_KEY=AIza...`
/// 2. 项目配置文件（./.wizard-commit.toml）
/// 3. 用户配置文件（~/.config/wizard-commit/config.toml）
/// 4. 默认值（Default trait 和 serde(default) 属性）
pub fn load_config() -> Result<AppConfig> {
    load_config_from(get_config_path().as_deref(), Some(Path::new(PROJECT_CONFIG_FILE)))
}

/// Loads configuration from explicit file locations.
///
/// Missing files are skipped; a file that exists but fails to parse is an error.
pub fn load_config_from(user_config: Option<&Path>, project_config: Option<&Path>) -> Result<AppConfig> {
    let mut builder = Config::builder();

    for path in [user_config, project_config].into_iter().flatten() {
        if path.exists() {
            tracing::debug!("Loading config file: {}", path.display());
            builder = builder.add_source(File::from(path.to_path_buf()));
        }
    }

    // 使用双下划线作为嵌套层级分隔符，避免与字段名中的单下划线冲突
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;
    let app_config: AppConfig = config.try_deserialize()?;
    app_config.validate()?;

    Ok(app_config)
}

/// 获取配置文件路径
///
/// 返回 ~/.config/wizard-commit/config.toml
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.toml"))
}

/// 获取配置目录路径
pub fn get_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "wizard-commit").map(|dirs| dirs.config_dir().to_path_buf())
}

//! # wizard-commit
//!
//! 根据当前 git diff 生成 commit message 的命令行工具。
//!
//! ## 功能
//! - **多 Provider 支持**：Ollama（本地模型）、DeepSeek（OpenAI 风格 chat completions）、Gemini
//! - **容错的响应解析**：本地模型返回的非标准 JSON 也能提取出消息
//! - **可选自动提交**：确认后直接执行 `git commit`
//!
//! ## 快速开始
//!
//! ### 作为 CLI 使用
//! ```bash
//! # 使用本地 Ollama 生成 commit message
//! git add .
//! wizard-commit
//!
//! # 使用 Gemini 生成并提交
//! wizard-commit -p gemini --api-key AIza... -a
//!
//! # 保存设置
//! wizard-commit -p deepseek --api-key sk-... --save-config
//! ```
//!
//! ### 作为库使用
//! ```no_run
//! use wizard_commit::config::{ApiStyle, NetworkConfig};
//! use wizard_commit::git::{collect_diff, repository::GitRepository};
//! use wizard_commit::llm::prompt::{DEFAULT_PROMPT_TEMPLATE, render_prompt};
//! use wizard_commit::llm::{GenerationRequest, generate_commit_message};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let repo = GitRepository::open()?;
//! let diff = collect_diff(&repo)?.diff;
//!
//! let request = GenerationRequest::new(
//!     "ollama",
//!     ApiStyle::Ollama,
//!     "gemma3:1b",
//!     render_prompt(DEFAULT_PROMPT_TEMPLATE, &diff),
//!     ApiStyle::Ollama.default_endpoint(),
//!     None,
//! );
//! let message = generate_commit_message(&request, &NetworkConfig::default()).await?;
//! println!("Generated: {}", message);
//! # Ok(())
//! # }
//! ```
//!
//! ## 核心模块
//! - [`git`] - Git 操作抽象
//! - [`llm`] - 生成流程、provider 接口和实现
//! - [`commands`] - CLI 命令实现
//! - [`config`] - 配置管理
//! - [`error`] - 统一错误类型
//! - [`ui`] - 用户界面工具
//!
//! ## 配置
//! 配置文件位置：
//! - Linux: `~/.config/wizard-commit/config.toml`
//! - macOS: `~/Library/Application Support/wizard-commit/config.toml`
//! - Windows: `%APPDATA%\wizard-commit\config\config.toml`
//! - 项目级（可选）: `./.wizard-commit.toml`
//!
//! 示例配置：
//! ```toml
//! [llm]
//! default_provider = "gemini"
//!
//! [llm.providers.gemini]
//! api_key = "AIza..."
//!
//! [network]
//! request_timeout = 60
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod git;
pub mod llm;
pub mod ui;

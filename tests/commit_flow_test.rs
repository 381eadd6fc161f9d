/// commit 命令主流程集成测试
///
/// 通过 run_with_deps() 注入 mock 的 git 操作，LLM 接口由 mockito 提供。
///
/// 覆盖：
/// - 生成后自动提交（-a -y）
/// - 只生成不提交
/// - 无变更时正常退出
/// - 仅有未暂存变更时的回退
/// - LLM 失败时错误向上传递
/// - 命令行覆盖 provider 设置
use mockito::{Matcher, Server, ServerGuard};
use pretty_assertions::assert_eq;
use std::sync::Mutex;
use wizard_commit::commands::commit::run_with_deps;
use wizard_commit::commands::{CommitOptions, ProviderOverrides};
use wizard_commit::config::{AppConfig, ProviderConfig};
use wizard_commit::error::{Result, WizardError};
use wizard_commit::git::GitOperations;

fn ensure_crypto_provider() {
    let _ = rustls::crypto::ring::default_provider().install_default();
}

// === Mock GitOperations ===

struct MockGitOps {
    staged: String,
    unstaged: String,
    should_fail_commit: bool,
    committed: Mutex<Vec<String>>,
}

impl MockGitOps {
    fn new() -> Self {
        Self {
            staged: "diff --git a/src/lib.rs b/src/lib.rs\n+pub fn hello() {}".to_string(),
            unstaged: String::new(),
            should_fail_commit: false,
            committed: Mutex::new(Vec::new()),
        }
    }

    fn unstaged_only() -> Self {
        Self {
            staged: String::new(),
            unstaged: "diff --git a/README.md b/README.md\n+usage".to_string(),
            ..Self::new()
        }
    }

    fn no_changes() -> Self {
        Self {
            staged: String::new(),
            ..Self::new()
        }
    }

    fn with_commit_failure() -> Self {
        Self {
            should_fail_commit: true,
            ..Self::new()
        }
    }

    fn committed(&self) -> Vec<String> {
        self.committed.lock().unwrap().clone()
    }
}

impl GitOperations for MockGitOps {
    fn get_staged_diff(&self) -> Result<String> {
        Ok(self.staged.clone())
    }

    fn get_uncommitted_diff(&self) -> Result<String> {
        Ok(self.unstaged.clone())
    }

    fn commit(&self, message: &str) -> Result<()> {
        if self.should_fail_commit {
            return Err(WizardError::GitCommand(
                "pre-commit hook failed".to_string(),
            ));
        }
        self.committed.lock().unwrap().push(message.to_string());
        Ok(())
    }
}

// === 辅助函数 ===

/// 指向 mock server 的 Ollama 配置
fn config_for(server: &ServerGuard) -> AppConfig {
    let mut config = AppConfig::default();
    config.ui.colored = false;
    config.llm.providers.insert(
        "ollama".to_string(),
        ProviderConfig {
            endpoint: Some(format!("{}/api/generate", server.url())),
            ..Default::default()
        },
    );
    config
}

fn commit_yes() -> CommitOptions<'static> {
    CommitOptions {
        commit: true,
        yes: true,
        overrides: ProviderOverrides::default(),
    }
}

async fn ollama_reply(server: &mut ServerGuard, body: &str) -> mockito::Mock {
    server
        .mock("POST", "/api/generate")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}

// === 测试 ===

#[tokio::test]
async fn test_generate_and_commit() {
    ensure_crypto_provider();
    let mut server = Server::new_async().await;
    let mock = ollama_reply(&mut server, r#"{"response":"\"feat: add hello\"\n"}"#).await;

    let git = MockGitOps::new();
    run_with_deps(&commit_yes(), &config_for(&server), &git)
        .await
        .unwrap();

    assert_eq!(git.committed(), vec!["feat: add hello".to_string()]);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_prompt_contains_staged_diff() {
    ensure_crypto_provider();
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/generate")
        .match_body(Matcher::Regex(r"pub fn hello\(\) \{\}".to_string()))
        .with_status(200)
        .with_body(r#"{"response":"feat: add hello"}"#)
        .create_async()
        .await;

    let git = MockGitOps::new();
    run_with_deps(&commit_yes(), &config_for(&server), &git)
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_generate_only_does_not_commit() {
    ensure_crypto_provider();
    let mut server = Server::new_async().await;
    let mock = ollama_reply(&mut server, r#"{"response":"docs: add usage"}"#).await;

    let git = MockGitOps::new();
    let options = CommitOptions::default();
    run_with_deps(&options, &config_for(&server), &git)
        .await
        .unwrap();

    assert!(git.committed().is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_no_changes_skips_llm() {
    ensure_crypto_provider();
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let git = MockGitOps::no_changes();
    let result = run_with_deps(&commit_yes(), &config_for(&server), &git).await;

    assert!(result.is_ok());
    assert!(git.committed().is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_unstaged_changes_are_used() {
    ensure_crypto_provider();
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/generate")
        .match_body(Matcher::Regex("README.md".to_string()))
        .with_status(200)
        .with_body(r#"{"response":"docs: describe usage"}"#)
        .create_async()
        .await;

    let git = MockGitOps::unstaged_only();
    run_with_deps(&commit_yes(), &config_for(&server), &git)
        .await
        .unwrap();

    assert_eq!(git.committed(), vec!["docs: describe usage".to_string()]);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_llm_failure_propagates() {
    ensure_crypto_provider();
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/generate")
        .with_status(500)
        .with_body("internal error")
        .create_async()
        .await;

    let git = MockGitOps::new();
    let err = run_with_deps(&commit_yes(), &config_for(&server), &git)
        .await
        .unwrap_err();

    assert!(matches!(err, WizardError::UpstreamStatus { status: 500, .. }));
    assert!(git.committed().is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_commit_failure_propagates() {
    ensure_crypto_provider();
    let mut server = Server::new_async().await;
    let mock = ollama_reply(&mut server, r#"{"response":"fix: typo"}"#).await;

    let git = MockGitOps::with_commit_failure();
    let err = run_with_deps(&commit_yes(), &config_for(&server), &git)
        .await
        .unwrap_err();

    assert!(matches!(err, WizardError::GitCommand(ref msg) if msg.contains("pre-commit")));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_confirmation_disabled_in_config() {
    ensure_crypto_provider();
    let mut server = Server::new_async().await;
    let mock = ollama_reply(&mut server, r#"{"response":"test: cover commit flow"}"#).await;

    let mut config = config_for(&server);
    config.commit.confirm_before_commit = false;
    let options = CommitOptions {
        commit: true,
        ..Default::default()
    };

    let git = MockGitOps::new();
    run_with_deps(&options, &config, &git).await.unwrap();

    assert_eq!(git.committed(), vec!["test: cover commit flow".to_string()]);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_cli_overrides_select_deepseek() {
    ensure_crypto_provider();
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .match_header("authorization", "Bearer sk-from-cli")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "model": "deepseek-reasoner"
        })))
        .with_status(200)
        .with_body(
            r#"{"choices":[{"message":{"role":"assistant","content":"feat: switch provider"},"finish_reason":"stop"}]}"#,
        )
        .create_async()
        .await;

    let url = format!("{}/v1/chat/completions", server.url());
    let options = CommitOptions {
        commit: true,
        yes: true,
        overrides: ProviderOverrides {
            provider: Some("deepseek"),
            model: Some("deepseek-reasoner"),
            url: Some(&url),
            api_key: Some("sk-from-cli"),
        },
    };

    let git = MockGitOps::new();
    run_with_deps(&options, &config_for(&server), &git)
        .await
        .unwrap();

    assert_eq!(git.committed(), vec!["feat: switch provider".to_string()]);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_missing_api_key_is_config_error() {
    ensure_crypto_provider();
    let server = Server::new_async().await;

    let options = CommitOptions {
        commit: true,
        yes: true,
        overrides: ProviderOverrides {
            provider: Some("gemini"),
            ..Default::default()
        },
    };

    let git = MockGitOps::new();
    let err = run_with_deps(&options, &config_for(&server), &git)
        .await
        .unwrap_err();

    assert!(matches!(err, WizardError::Config(ref msg) if msg.contains("Gemini")));
    assert!(err.suggestion().is_some());
}

use crate::commands::options::CommitOptions;
use crate::config::AppConfig;
use crate::error::{Result, WizardError};
use crate::git::{DiffSource, GitOperations, collect_diff, repository::GitRepository};
use crate::llm::prompt::{render_prompt, truncate_diff};
use crate::llm::{GenerationRequest, generate_commit_message};
use crate::ui;

/// 执行 commit 命令
pub async fn run(options: &CommitOptions<'_>, config: &AppConfig) -> Result<()> {
    let repo = GitRepository::open()?;
    run_with_deps(options, config, &repo).await
}

/// 执行 commit 命令（可测试版本，接受 trait 对象）
///
/// diff -> prompt -> generate -> show -> (confirm) -> commit
pub async fn run_with_deps(
    options: &CommitOptions<'_>,
    config: &AppConfig,
    repo: &dyn GitOperations,
) -> Result<()> {
    let colored = config.ui.colored;
    let config = options.overrides.apply(config);
    config.validate()?;
    let resolved = config.llm.resolve_provider(&config.llm.default_provider)?;

    let collected = match collect_diff(repo) {
        Ok(collected) => collected,
        Err(WizardError::NoChanges) => {
            ui::warning("No changes to commit", colored);
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    let diff = truncate_diff(&collected.diff, config.llm.max_diff_size);
    let prompt = render_prompt(&config.llm.prompt_template, &diff);
    let request = GenerationRequest::from_resolved(resolved, prompt);
    tracing::debug!("{:?}", request);

    println!(
        "{}",
        ui::info(
            &format!("Using {} with model {}", request.name, request.model),
            colored
        )
    );

    let spinner = ui::Spinner::new("Generating commit message...");
    let result = generate_commit_message(&request, &config.network).await;
    spinner.finish_and_clear();
    let message = result?;

    println!("Generated commit message:");
    println!("{}", ui::format_commit_message(message.as_str(), colored));

    if !options.commit {
        println!(
            "{}",
            ui::info("Use -a to commit with this message", colored)
        );
        return Ok(());
    }

    if collected.source == DiffSource::Unstaged {
        ui::warning(
            "Nothing is staged; git commit only records staged changes. Run 'git add' first.",
            colored,
        );
    }

    if !options.yes && config.commit.confirm_before_commit {
        match ui::confirm("Use this commit message?", true) {
            Ok(true) => {}
            Ok(false) | Err(WizardError::UserCancelled) => {
                println!("Commit aborted.");
                return Ok(());
            }
            Err(e) => return Err(e),
        }
    }

    repo.commit(message.as_str())?;
    ui::success("Changes committed successfully!", colored);
    Ok(())
}

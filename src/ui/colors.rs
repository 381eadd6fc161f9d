use colored::Colorize;

/// 分隔线宽度
const RULE_WIDTH: usize = 40;

/// 显示成功消息（绿色 ✓）
pub fn success(msg: &str, colored: bool) {
    if colored {
        println!("{} {}", "✓".green().bold(), msg.green());
    } else {
        println!("✓ {}", msg);
    }
}

/// 显示错误消息（红色 ✗）
pub fn error(msg: &str, colored: bool) {
    if colored {
        eprintln!("{} {}", "✗".red().bold(), msg.red());
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// 显示警告消息（黄色 ⚠）
pub fn warning(msg: &str, colored: bool) {
    if colored {
        println!("{} {}", "⚠".yellow().bold(), msg.yellow());
    } else {
        println!("⚠ {}", msg);
    }
}

/// 显示信息消息（蓝色 ℹ）
pub fn info(msg: &str, colored: bool) -> String {
    if colored {
        format!("{} {}", "ℹ".blue().bold(), msg.blue())
    } else {
        format!("ℹ {}", msg)
    }
}

/// Renders a commit message between two horizontal rules.
pub fn format_commit_message(message: &str, colored: bool) -> String {
    let rule = "─".repeat(RULE_WIDTH);
    if colored {
        format!(
            "{}\n{}\n{}",
            rule.bright_black(),
            message.bold(),
            rule.bright_black()
        )
    } else {
        format!("{}\n{}\n{}", rule, message, rule)
    }
}

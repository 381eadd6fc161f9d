use inquire::Confirm;

use crate::error::Result;

/// 交互式确认提示
///
/// # Arguments
/// * `message` - 提示信息
/// * `default` - 默认值（true = Yes, false = No）
///
/// # Returns
/// * `Ok(true)` - 用户选择 Yes
/// * `Ok(false)` - 用户选择 No
/// * `Err(WizardError::UserCancelled)` - Esc / Ctrl+C
pub fn confirm(message: &str, default: bool) -> Result<bool> {
    let result = Confirm::new(message).with_default(default).prompt()?;
    Ok(result)
}

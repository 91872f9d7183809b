//! 检查选项（模块）
use std::path::PathBuf;

/// 输出格式
/// - Text：清单式中文报告，通过时附带部署指南。
/// - Json：结构化报告，便于 CI 解析。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// 检查选项
#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// 站点根目录；默认当前工作目录
    pub site_dir: PathBuf,
    /// 规则文件路径（TOML）；为空则使用内置规则
    pub rules_path: Option<PathBuf>,
    /// 输出格式
    pub format: OutputFormat,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            site_dir: PathBuf::from("."),
            rules_path: None,
            format: OutputFormat::Text,
        }
    }
}

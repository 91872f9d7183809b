//! 部署指南（纯输出）
use std::io::{self, Write};

/// 推送到 GitHub 并启用 GitHub Pages 的步骤
const DEPLOYMENT_GUIDE: &[&str] = &[
    "=== 部署指南 ===",
    "1. 初始化Git仓库（如果尚未初始化）:",
    "   git init",
    "2. 添加所有文件:",
    "   git add .",
    "3. 提交更改:",
    "   git commit -m 'Initial commit'",
    "4. 推送到GitHub（需要先在GitHub创建仓库）:",
    "   git remote add origin https://github.com/yourusername/your-repo-name.git",
    "   git push -u origin main",
    "5. 在GitHub仓库设置中启用GitHub Pages:",
    "   - 进入Settings > Pages",
    "   - 选择main分支和根目录(/)",
    "   - 点击Save",
    "   - 几分钟后网站将可访问",
];

/// 输出部署指南（前置一个空行与上文分隔）
pub fn write_deployment_guide(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out)?;
    for line in DEPLOYMENT_GUIDE {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

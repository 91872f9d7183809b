//! 文本报告渲染
use std::io::{self, Write};

use crate::guide::write_deployment_guide;
use crate::types::{CheckKind, CheckOutcome, SiteReport};

const HEADER: &str = "开始验证静态网站文件结构...";
const PASS_BANNER: &str = "✅ 静态网站验证通过！可以部署到GitHub Pages。";
const FAIL_BANNER: &str = "❌ 静态网站验证未完全通过，请检查上述问题。";

/// (失败标题, 通过标题)
fn section_titles(kind: CheckKind) -> (&'static str, &'static str) {
    match kind {
        CheckKind::Files => ("[错误] 缺少以下必要文件:", "[成功] 所有必要文件都已存在"),
        CheckKind::Structure => ("[警告] HTML文件结构检查发现问题:", "[成功] HTML文件结构检查通过"),
        CheckKind::Behavior => ("[警告] JavaScript功能检查发现问题:", "[成功] JavaScript功能检查通过"),
    }
}

fn write_section(out: &mut dyn Write, outcome: &CheckOutcome) -> io::Result<()> {
    let (failed, passed) = section_titles(outcome.kind);
    if outcome.passed() {
        return writeln!(out, "{passed}");
    }
    writeln!(out, "{failed}")?;
    for issue in &outcome.issues {
        writeln!(out, "  - {issue}")?;
    }
    Ok(())
}

/// 输出完整清单式报告；全部通过时附带部署指南
pub fn write_report(out: &mut dyn Write, report: &SiteReport) -> io::Result<()> {
    writeln!(out, "{HEADER}")?;
    write_section(out, &report.files)?;
    write_section(out, &report.structure)?;
    write_section(out, &report.behavior)?;

    writeln!(out)?;
    if report.passed() {
        writeln!(out, "{PASS_BANNER}")?;
        write_deployment_guide(out)?;
    } else {
        writeln!(out, "{FAIL_BANNER}")?;
    }
    Ok(())
}

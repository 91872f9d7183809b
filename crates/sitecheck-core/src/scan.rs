//! 检查主流程
use anyhow::Result;
use std::io::Write;
use tracing::info;

use crate::checks::{check_behavior_markers, check_files, check_html_structure};
use crate::options::{CheckOptions, OutputFormat};
use crate::report::write_report;
use crate::rules::{load_rules, SiteRules};
use crate::source::{DirSource, SiteSource};
use crate::types::{JsonReport, SiteReport};

/// 依固定顺序执行三项检查；不短路，保证报告完整
pub fn run_checks(src: &dyn SiteSource, rules: &SiteRules) -> SiteReport {
    let files = check_files(src, rules);
    let structure = check_html_structure(src, rules);
    let behavior = check_behavior_markers(src, rules);
    SiteReport { files, structure, behavior }
}

/// 按选项加载规则并检查站点目录
/// 仅规则文件无法加载时返回错误；站点本身的问题都体现在报告中
pub fn check_site(opts: &CheckOptions) -> Result<SiteReport> {
    let rules = match &opts.rules_path {
        Some(path) => load_rules(path)?,
        None => SiteRules::builtin(),
    };
    let src = DirSource::new(&opts.site_dir);
    let report = run_checks(&src, &rules);
    info!(site = %src.root().display(), passed = report.passed(), "site checked");
    Ok(report)
}

/// 检查站点并将结果写入 `out`（文本或 JSON），返回报告供调用方决定退出码
pub fn check_and_write(opts: &CheckOptions, out: &mut dyn Write) -> Result<SiteReport> {
    let report = check_site(opts)?;
    match opts.format {
        OutputFormat::Text => write_report(out, &report)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &JsonReport::from(&report))?;
            writeln!(out)?;
        }
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_site(dir: &TempDir) {
        let p = dir.path();
        std::fs::write(
            p.join("index.html"),
            "<!DOCTYPE html><html><head></head><body>handleFileSelection processBtn.addEventListener showMessage</body></html>",
        )
        .unwrap();
        std::fs::write(
            p.join("success.html"),
            "<!DOCTYPE html><html><head></head><body>getURLParams initPageData simulateDownload</body></html>",
        )
        .unwrap();
        for name in [".gitignore", "README.md", "package.json"] {
            std::fs::write(p.join(name), "").unwrap();
        }
    }

    fn opts_for(dir: &TempDir) -> CheckOptions {
        CheckOptions { site_dir: dir.path().to_path_buf(), ..CheckOptions::default() }
    }

    #[test]
    fn empty_directory_runs_every_check() {
        let dir = TempDir::new().unwrap();
        let report = check_site(&opts_for(&dir)).unwrap();
        assert_eq!(report.files.issues.len(), 5);
        // 两个页面各一条读取错误，且未中断
        assert_eq!(report.structure.issues.len(), 2);
        assert_eq!(report.behavior.issues.len(), 2);
        assert_eq!(report.exit_code(), 1);
    }

    #[test]
    fn complete_site_exits_zero() {
        let dir = TempDir::new().unwrap();
        write_site(&dir);
        let report = check_site(&opts_for(&dir)).unwrap();
        assert!(report.passed());
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn repeated_runs_are_identical() {
        let dir = TempDir::new().unwrap();
        write_site(&dir);
        std::fs::remove_file(dir.path().join("package.json")).unwrap();
        let opts = opts_for(&dir);

        let mut first = Vec::new();
        let mut second = Vec::new();
        let a = check_and_write(&opts, &mut first).unwrap();
        let b = check_and_write(&opts, &mut second).unwrap();
        assert_eq!(a, b);
        assert_eq!(first, second);
    }

    #[test]
    fn json_output_carries_verdict() {
        let dir = TempDir::new().unwrap();
        write_site(&dir);
        let opts = CheckOptions { format: OutputFormat::Json, ..opts_for(&dir) };
        let mut buf = Vec::new();
        check_and_write(&opts, &mut buf).unwrap();

        let v: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(v["passed"], serde_json::json!(true));
        assert_eq!(v["checks"][1]["kind"], serde_json::json!("structure"));
    }

    #[test]
    fn unreadable_rules_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let opts = CheckOptions { rules_path: Some(dir.path().join("nope.toml")), ..opts_for(&dir) };
        assert!(check_site(&opts).is_err());
    }
}

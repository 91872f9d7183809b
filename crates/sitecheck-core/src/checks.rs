//! 三类检查器：文件存在性、HTML 结构标记、页面功能标记
//!
//! 检查器只返回结构化结果，不直接打印；读取失败在单个文件处被捕获
//! 并转为问题描述，不会中断其他文件或其他类别的检查。
use tracing::{debug, warn};

use crate::markers::present_markers;
use crate::rules::{PageMarkers, SiteRules};
use crate::source::{ReadError, SiteSource};
use crate::types::{CheckKind, CheckOutcome};

/// 读取失败时的问题描述
fn read_issue(file: &str, err: &ReadError) -> String {
    format!("读取{file}时出错: {err}")
}

/// 检查必要文件是否都存在；问题列表为缺失的文件名（保持规则顺序）
pub fn check_files(src: &dyn SiteSource, rules: &SiteRules) -> CheckOutcome {
    let missing: Vec<String> = rules
        .required_files
        .iter()
        .filter(|name| !src.exists(name))
        .cloned()
        .collect();
    debug!(required = rules.required_files.len(), missing = missing.len(), "file existence checked");
    CheckOutcome::new(CheckKind::Files, missing)
}

/// 检查每个 HTML 页面是否包含全部结构标记
pub fn check_html_structure(src: &dyn SiteSource, rules: &SiteRules) -> CheckOutcome {
    let needles: Vec<&str> = rules.structure_markers.iter().map(|m| m.marker.as_str()).collect();
    let mut issues = Vec::new();

    for file in &rules.html_files {
        let content = match src.read_text(file) {
            Ok(c) => c,
            Err(e) => {
                warn!(%file, error = %e, "cannot read page for structure check");
                issues.push(read_issue(file, &e));
                continue;
            }
        };
        let hits = present_markers(&content, &needles);
        for (marker, hit) in rules.structure_markers.iter().zip(hits) {
            if !hit {
                issues.push(format!("{file}: 缺少{}", marker.label));
            }
        }
        debug!(%file, "structure checked");
    }

    CheckOutcome::new(CheckKind::Structure, issues)
}

/// 检查每个页面是否包含其专属的功能标记（与结构检查相互独立地重新读取）
pub fn check_behavior_markers(src: &dyn SiteSource, rules: &SiteRules) -> CheckOutcome {
    let mut issues = Vec::new();

    for PageMarkers { file, markers } in &rules.behavior_markers {
        let content = match src.read_text(file) {
            Ok(c) => c,
            Err(e) => {
                warn!(%file, error = %e, "cannot read page for behavior check");
                issues.push(read_issue(file, &e));
                continue;
            }
        };
        let hits = present_markers(&content, markers);
        for (marker, hit) in markers.iter().zip(hits) {
            if !hit {
                issues.push(format!("{file}: 缺少{marker}功能"));
            }
        }
        debug!(%file, "behavior markers checked");
    }

    CheckOutcome::new(CheckKind::Behavior, issues)
}

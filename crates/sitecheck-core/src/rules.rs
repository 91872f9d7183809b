//! 检查规则：内置默认值 + 可选 TOML 覆盖
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// 内置必要文件（仅检查存在性）
const REQUIRED_FILES: [&str; 5] = ["index.html", "success.html", ".gitignore", "README.md", "package.json"];

/// 需要检查内容的 HTML 页面
const HTML_FILES: [&str; 2] = ["index.html", "success.html"];

/// 结构标记：(字面量, 缺失时的描述)
const STRUCTURE_MARKERS: [(&str, &str); 4] = [
    ("<!DOCTYPE html>", "DOCTYPE声明"),
    ("<html", "html标签"),
    ("<head", "head标签"),
    ("<body", "body标签"),
];

/// 各页面必须出现的功能标记（视为不透明字面量）
const BEHAVIOR_MARKERS: [(&str, [&str; 3]); 2] = [
    ("index.html", ["handleFileSelection", "processBtn.addEventListener", "showMessage"]),
    ("success.html", ["getURLParams", "initPageData", "simulateDownload"]),
];

/// 单条结构标记
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StructureMarker {
    pub marker: String,
    pub label: String,
}

/// 单个页面的功能标记集合
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PageMarkers {
    pub file: String,
    pub markers: Vec<String>,
}

/// 归一化后的完整规则集
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteRules {
    pub required_files: Vec<String>,
    pub html_files: Vec<String>,
    pub structure_markers: Vec<StructureMarker>,
    pub behavior_markers: Vec<PageMarkers>,
}

impl SiteRules {
    /// 内置规则
    pub fn builtin() -> Self {
        Self {
            required_files: REQUIRED_FILES.iter().map(|s| s.to_string()).collect(),
            html_files: HTML_FILES.iter().map(|s| s.to_string()).collect(),
            structure_markers: STRUCTURE_MARKERS
                .iter()
                .map(|(marker, label)| StructureMarker { marker: marker.to_string(), label: label.to_string() })
                .collect(),
            behavior_markers: BEHAVIOR_MARKERS
                .iter()
                .map(|(file, markers)| PageMarkers {
                    file: file.to_string(),
                    markers: markers.iter().map(|m| m.to_string()).collect(),
                })
                .collect(),
        }
    }
}

impl Default for SiteRules {
    fn default() -> Self {
        Self::builtin()
    }
}

/// 规则文件的顶层结构；缺省的表回落到内置值
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RuleFile {
    #[serde(default)]
    required_files: Option<Vec<String>>,
    #[serde(default)]
    html_files: Option<Vec<String>>,
    #[serde(default)]
    structure: Option<Vec<StructureMarker>>,
    #[serde(default)]
    pages: Option<Vec<PageMarkers>>,
}

/// 解析 TOML 文本为规则集
pub fn parse_rules(txt: &str) -> Result<SiteRules> {
    let parsed: RuleFile = toml::from_str(txt)?;
    let base = SiteRules::builtin();
    Ok(SiteRules {
        required_files: parsed.required_files.unwrap_or(base.required_files),
        html_files: parsed.html_files.unwrap_or(base.html_files),
        structure_markers: parsed.structure.unwrap_or(base.structure_markers),
        behavior_markers: parsed.pages.unwrap_or(base.behavior_markers),
    })
}

/// 从 TOML 规则文件加载规则集
pub fn load_rules(path: &Path) -> Result<SiteRules> {
    let txt = std::fs::read_to_string(path).with_context(|| format!("read rules file {}", path.display()))?;
    parse_rules(&txt).with_context(|| format!("parse rules file {}", path.display()))
}

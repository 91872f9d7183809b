//! 公共类型（对外暴露）
use serde::Serialize;

/// 检查类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    /// 必要文件存在性
    Files,
    /// HTML 基本结构标记
    Structure,
    /// 页面脚本功能标记
    Behavior,
}

/// 单项检查结果：问题列表为空即通过
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    pub kind: CheckKind,
    /// Files 类别下为缺失的文件名，其余类别为可读的问题描述
    pub issues: Vec<String>,
}

impl CheckOutcome {
    pub fn new(kind: CheckKind, issues: Vec<String>) -> Self {
        Self { kind, issues }
    }

    pub fn passed(&self) -> bool {
        self.issues.is_empty()
    }
}

/// 一次完整运行的汇总报告
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteReport {
    pub files: CheckOutcome,
    pub structure: CheckOutcome,
    pub behavior: CheckOutcome,
}

impl SiteReport {
    /// 三项检查全部通过才算整体通过
    pub fn passed(&self) -> bool {
        self.files.passed() && self.structure.passed() && self.behavior.passed()
    }

    /// 进程退出码：通过为 0，否则为 1
    pub fn exit_code(&self) -> u8 {
        if self.passed() { 0 } else { 1 }
    }
}

/// JSON 输出形态（在报告基础上补充整体结论）
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub passed: bool,
    pub checks: [&'a CheckOutcome; 3],
}

impl<'a> From<&'a SiteReport> for JsonReport<'a> {
    fn from(report: &'a SiteReport) -> Self {
        Self {
            passed: report.passed(),
            checks: [&report.files, &report.structure, &report.behavior],
        }
    }
}

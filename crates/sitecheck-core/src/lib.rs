//! 静态网站发布前检查库
//!
//! 流程：
//! - 必要文件存在性检查（仅看是否存在，不读内容）。
//! - 两个页面的 HTML 基本结构标记检查（字面量、区分大小写）。
//! - 两个页面各自的脚本功能标记检查（独立于结构检查重新读取）。
//! - 三项检查总是全部执行，结果汇总为 `SiteReport`，由展示层负责输出。

mod options;
mod types;
mod rules;
mod source;
mod markers;
mod checks;
mod guide;
mod report;
mod scan;

pub use options::{CheckOptions, OutputFormat};
pub use types::{CheckKind, CheckOutcome, JsonReport, SiteReport};
pub use rules::{load_rules, parse_rules, PageMarkers, SiteRules, StructureMarker};
pub use source::{DirSource, ReadError, SiteSource};
pub use checks::{check_behavior_markers, check_files, check_html_structure};
pub use guide::write_deployment_guide;
pub use report::write_report;
pub use scan::{check_and_write, check_site, run_checks};

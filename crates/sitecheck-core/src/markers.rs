//! 字面量标记匹配（Aho-Corasick 单遍扫描）
//!
//! 一个页面的全部标记编译为一台自动机，对正文只扫描一次；
//! 采用重叠匹配，保证任意标记都不会被另一个标记的命中遮挡。

use aho_corasick::AhoCorasick;
use tracing::debug;

/// 返回与 `markers` 一一对应的命中情况（区分大小写）
pub(crate) fn present_markers<S: AsRef<str>>(content: &str, markers: &[S]) -> Vec<bool> {
    let mut found = vec![false; markers.len()];
    if markers.is_empty() {
        return found;
    }

    let ac = match AhoCorasick::new(markers.iter().map(|m| m.as_ref())) {
        Ok(ac) => ac,
        Err(e) => {
            // 自动机超出构建上限时退回逐个查找
            debug!(error = %e, "aho-corasick build failed, falling back to str::contains");
            for (slot, m) in found.iter_mut().zip(markers) {
                *slot = content.contains(m.as_ref());
            }
            return found;
        }
    };

    let mut remaining = markers.len();
    for m in ac.find_overlapping_iter(content) {
        let idx = m.pattern().as_usize();
        if !found[idx] {
            found[idx] = true;
            remaining -= 1;
            if remaining == 0 {
                break;
            }
        }
    }
    found
}

//! 站点文件来源（磁盘目录或可注入的实现）
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::string::FromUtf8Error;
use thiserror::Error;

/// 读取页面失败的原因；文本会原样嵌入问题描述
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("无法按 UTF-8 解码: {0}")]
    Utf8(#[from] FromUtf8Error),
}

/// 检查器依赖的最小文件能力
pub trait SiteSource {
    /// 路径是否存在；任何失败都视为不存在，不得报错
    fn exists(&self, name: &str) -> bool;
    /// 读取完整文本（严格 UTF-8）
    fn read_text(&self, name: &str) -> Result<String, ReadError>;
}

/// 以某个目录为根的磁盘来源
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl SiteSource for DirSource {
    fn exists(&self, name: &str) -> bool {
        self.root.join(name).exists()
    }

    fn read_text(&self, name: &str) -> Result<String, ReadError> {
        // 句柄在本作用域结束时释放（含错误路径）
        let file = File::open(self.root.join(name))?;
        let mut reader = BufReader::new(file);
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        Ok(String::from_utf8(buf)?)
    }
}

#[cfg(test)]
pub(crate) mod memory {
    use super::{ReadError, SiteSource};
    use std::collections::HashMap;

    /// 测试用内存来源：值为原始字节，便于构造非法 UTF-8
    #[derive(Debug, Default)]
    pub(crate) struct MemorySource {
        files: HashMap<String, Vec<u8>>,
    }

    impl MemorySource {
        pub(crate) fn with(mut self, name: &str, content: impl Into<Vec<u8>>) -> Self {
            self.files.insert(name.to_string(), content.into());
            self
        }
    }

    impl SiteSource for MemorySource {
        fn exists(&self, name: &str) -> bool {
            self.files.contains_key(name)
        }

        fn read_text(&self, name: &str) -> Result<String, ReadError> {
            match self.files.get(name) {
                Some(bytes) => Ok(String::from_utf8(bytes.clone())?),
                None => Err(std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory").into()),
            }
        }
    }
}

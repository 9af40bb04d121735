use std::collections::HashSet;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use chrono::Utc;
use utils_common::compression::{to_compressed, BUNDLE_VERSION};
use utils_common::models::{BundleMetadata, JobBundle, JobPosting};

use crate::error::{DataLoadError, Result};
use crate::logging;

/// 职位包构建器
pub struct BundleBuilder {
    jobs: Vec<JobPosting>,
}

impl BundleBuilder {
    pub fn new() -> Self {
        Self {
            jobs: Vec::new(),
        }
    }

    /// 添加职位，保持添加顺序
    pub fn add_job(&mut self, job: JobPosting) {
        self.jobs.push(job);
    }

    /// 构建职位包：职位列表不能为空，且 id 必须唯一
    pub fn build_bundle(&self) -> Result<JobBundle> {
        if self.jobs.is_empty() {
            return Err(DataLoadError::Validation("没有职位数据".to_string()));
        }

        let mut ids = HashSet::new();
        if let Some(duplicate) = self.jobs.iter().find(|job| !ids.insert(job.id)) {
            return Err(DataLoadError::Validation(format!("职位 id 重复: {}", duplicate.id)));
        }

        let tag_count = self
            .jobs
            .iter()
            .flat_map(|job| job.tags())
            .collect::<HashSet<_>>()
            .len();

        Ok(JobBundle {
            metadata: BundleMetadata {
                job_count: self.jobs.len(),
                tag_count,
                created_at: Utc::now(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            jobs: self.jobs.clone(),
        })
    }

    /// 构建并保存职位包到文件，返回写入的元数据
    pub fn save_bundle(&self, path: &Path) -> Result<BundleMetadata> {
        let bundle = self.build_bundle()?;
        logging::info(&format!(
            "职位包构建完成，职位: {}，标签: {}",
            bundle.metadata.job_count, bundle.metadata.tag_count
        ));

        let data = to_compressed(&bundle, BUNDLE_VERSION)?;
        let mut file = File::create(path)?;
        file.write_all(&data)?;
        logging::info(&format!("职位包已写入: {}，大小: {} 字节", path.display(), data.len()));

        Ok(bundle.metadata)
    }
}

impl Default for BundleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

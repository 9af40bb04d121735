use std::collections::HashSet;

use utils_common::compression::{from_compressed, is_compressed};
use utils_common::models::{JobBundle, JobPosting};

use crate::error::Result;
use crate::logging;

/// 解析职位数据：以职位包魔数开头时按职位包解压，否则按 JSON 数组解析
pub fn decode_jobs(data: &[u8]) -> Result<Vec<JobPosting>> {
    if is_compressed(data) {
        let bundle: JobBundle = from_compressed(data)?;
        return Ok(bundle.jobs);
    }

    Ok(serde_json::from_slice(data)?)
}

/// 职位存储 - 保存完整且不可变的职位列表
#[derive(Debug, Default)]
pub struct JobStore {
    jobs: Vec<JobPosting>,
}

impl JobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_jobs(jobs: Vec<JobPosting>) -> Self {
        Self { jobs }
    }

    /// 加载职位数据并整体替换当前列表
    ///
    /// 解析失败时保留原有列表不变。
    pub fn load(&mut self, data: &[u8]) -> Result<usize> {
        let jobs = decode_jobs(data)?;
        if jobs.is_empty() {
            logging::warn("职位数据为空");
        }
        self.jobs = jobs;
        Ok(self.jobs.len())
    }

    /// 全部职位，保持数据源顺序
    pub fn all(&self) -> &[JobPosting] {
        &self.jobs
    }

    pub fn get(&self, id: u32) -> Option<&JobPosting> {
        self.jobs.iter().find(|job| job.id == id)
    }

    /// 去重后的全部标签，按首次出现顺序排列
    pub fn tags(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.jobs
            .iter()
            .flat_map(|job| job.tags())
            .filter(|tag| seen.insert(*tag))
            .map(str::to_string)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DataLoadError;
    use crate::fixtures::{job, sample_jobs};
    use chrono::Utc;
    use utils_common::compression::{to_compressed, BUNDLE_VERSION, MAGIC_BYTES};
    use utils_common::models::BundleMetadata;

    fn json_payload(jobs: &[JobPosting]) -> Vec<u8> {
        serde_json::to_vec(jobs).unwrap()
    }

    #[test]
    fn test_load_json_replaces_jobs() {
        let mut store = JobStore::from_jobs(vec![job(99, "Backend", "Junior", &[], &[])]);

        let count = store.load(&json_payload(&sample_jobs())).unwrap();

        assert_eq!(count, 5);
        assert_eq!(store.all(), sample_jobs().as_slice());
        assert!(store.get(99).is_none());
    }

    #[test]
    fn test_failed_load_keeps_previous_jobs() {
        let mut store = JobStore::new();
        store.load(&json_payload(&sample_jobs())).unwrap();

        let err = store.load(b"{\"not\": \"a list\"").unwrap_err();

        assert!(matches!(err, DataLoadError::Malformed(_)));
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn test_failed_first_load_leaves_store_empty() {
        let mut store = JobStore::new();
        assert!(store.load(b"<html>404</html>").is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_missing_required_field_is_malformed() {
        let payload = br#"[{"id": 1, "company": "Photosnap"}]"#;
        assert!(matches!(decode_jobs(payload), Err(DataLoadError::Malformed(_))));
    }

    #[test]
    fn test_bundle_and_json_decode_to_same_jobs() {
        let jobs = sample_jobs();
        let bundle = JobBundle {
            metadata: BundleMetadata {
                job_count: jobs.len(),
                tag_count: 0,
                created_at: Utc::now(),
                version: "test".to_string(),
            },
            jobs: jobs.clone(),
        };
        let data = to_compressed(&bundle, BUNDLE_VERSION).unwrap();

        assert_eq!(decode_jobs(&data).unwrap(), decode_jobs(&json_payload(&jobs)).unwrap());
    }

    #[test]
    fn test_corrupted_bundle_is_rejected() {
        let mut data = to_compressed(&Vec::<JobPosting>::new(), BUNDLE_VERSION).unwrap();
        // 篡改头部记录的原始大小
        let size_offset = MAGIC_BYTES.len() + 2;
        data[size_offset] = data[size_offset].wrapping_add(7);
        assert!(matches!(decode_jobs(&data), Err(DataLoadError::Bundle(_))));
    }

    #[test]
    fn test_forged_bundle_size_is_rejected_without_touching_store() {
        let mut data = MAGIC_BYTES.to_vec();
        data.extend_from_slice(&BUNDLE_VERSION);
        data.extend_from_slice(&u32::MAX.to_le_bytes());
        data.extend_from_slice(b"garbage");

        let mut store = JobStore::from_jobs(sample_jobs());
        assert!(matches!(store.load(&data), Err(DataLoadError::Bundle(_))));
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn test_tags_are_distinct_in_first_seen_order() {
        let store = JobStore::from_jobs(vec![
            job(1, "Frontend", "Senior", &["JavaScript"], &["React"]),
            job(2, "Backend", "Senior", &["JavaScript", "Python"], &["Django"]),
        ]);

        assert_eq!(
            store.tags(),
            vec!["Frontend", "Senior", "JavaScript", "React", "Backend", "Python", "Django"]
        );
    }

    #[test]
    fn test_get_by_id() {
        let store = JobStore::from_jobs(sample_jobs());
        assert_eq!(store.get(4).map(|job| job.role.as_str()), Some("Backend"));
        assert!(store.get(42).is_none());
    }
}

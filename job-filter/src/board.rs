use utils_common::models::JobPosting;

use crate::engine;
use crate::error::DataLoadError;
use crate::logging;
use crate::models::{BoardView, FilterSet, JobCard};
use crate::store::JobStore;

/// 在加载边界记录错误，不再向上传播
pub fn report_load_error(error: &DataLoadError) {
    logging::error(&format!("加载职位数据失败: {}", error));
}

/// 职位看板 - 持有职位存储与当前筛选集合的状态容器
///
/// 渲染层显式持有该对象，每次状态变化后通过 [`JobBoard::view`] 获取新的快照。
#[derive(Debug, Default)]
pub struct JobBoard {
    store: JobStore,
    filters: FilterSet,
}

impl JobBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_jobs(jobs: Vec<JobPosting>) -> Self {
        Self {
            store: JobStore::from_jobs(jobs),
            filters: FilterSet::new(),
        }
    }

    /// 加载职位数据；失败时记录日志并保留原有数据，返回是否成功
    pub fn load_payload(&mut self, data: &[u8]) -> bool {
        match self.store.load(data) {
            Ok(count) => {
                logging::info(&format!("职位数据加载完成，共 {} 条", count));
                true
            }
            Err(e) => {
                report_load_error(&e);
                false
            }
        }
    }

    pub fn add_filter(&mut self, tag: &str) -> bool {
        self.filters.insert(tag)
    }

    pub fn remove_filter(&mut self, tag: &str) -> bool {
        self.filters.remove(tag)
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    pub fn store(&self) -> &JobStore {
        &self.store
    }

    /// 从完整职位列表重新计算可见职位
    pub fn visible(&self) -> Vec<&JobPosting> {
        engine::visible(self.store.all(), &self.filters)
    }

    pub fn view(&self) -> BoardView<'_> {
        let jobs: Vec<JobCard<'_>> = self.visible().into_iter().map(JobCard::from).collect();

        BoardView {
            visible: jobs.len(),
            total: self.store.len(),
            has_filters: !self.filters.is_empty(),
            filters: &self.filters,
            jobs,
        }
    }
}

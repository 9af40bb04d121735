use serde::{Deserialize, Serialize};
use utils_common::models::JobPosting;

/// 默认的职位数据地址
pub const DEFAULT_DATA_URL: &str = "/data.json";

/// 看板配置 - 客户端在构造时传入（可选）
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// 职位数据文档地址，JSON 或职位包
    #[serde(default = "default_data_url")]
    pub data_url: String,
}

fn default_data_url() -> String {
    DEFAULT_DATA_URL.to_string()
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            data_url: default_data_url(),
        }
    }
}

/// 筛选集合 - 保持插入顺序且不含重复标签
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct FilterSet {
    tags: Vec<String>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加标签，已存在时不做任何修改；返回是否发生了变化
    pub fn insert(&mut self, tag: &str) -> bool {
        if self.contains(tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    /// 移除标签，不存在时不做任何修改；返回是否发生了变化
    pub fn remove(&mut self, tag: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t != tag);
        self.tags.len() != before
    }

    pub fn clear(&mut self) {
        self.tags.clear();
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for FilterSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = FilterSet::new();
        for tag in iter {
            set.insert(tag.as_ref());
        }
        set
    }
}

/// 职位卡片 - 职位信息加上按展示顺序排列的标签
#[derive(Serialize, Debug)]
pub struct JobCard<'a> {
    #[serde(flatten)]
    pub job: &'a JobPosting,
    pub tags: Vec<&'a str>,
}

impl<'a> From<&'a JobPosting> for JobCard<'a> {
    fn from(job: &'a JobPosting) -> Self {
        Self {
            job,
            tags: job.tags().collect(),
        }
    }
}

/// 看板视图 - 渲染层需要的全部状态快照
#[derive(Serialize, Debug)]
pub struct BoardView<'a> {
    /// 可见职位，保持数据源顺序
    pub jobs: Vec<JobCard<'a>>,
    /// 当前筛选标签，保持插入顺序
    pub filters: &'a FilterSet,
    /// 是否显示筛选栏与清除按钮
    pub has_filters: bool,
    /// 全部职位数量
    pub total: usize,
    /// 可见职位数量
    pub visible: usize,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 职位信息 - 数据源中的一条招聘记录，加载后不可变
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct JobPosting {
    /// 职位唯一标识符，由数据源分配
    pub id: u32,
    /// 公司名称
    pub company: String,
    /// 公司 logo 路径
    pub logo: String,
    /// 是否为新发布职位
    #[serde(rename = "new")]
    pub is_new: bool,
    /// 是否为推荐职位
    pub featured: bool,
    /// 职位名称
    pub position: String,
    /// 职位角色（标签）
    pub role: String,
    /// 资历级别（标签）
    pub level: String,
    /// 发布时间的展示文本，例如 "1d ago"
    #[serde(rename = "postedAt")]
    pub posted_at: String,
    /// 合同类型
    pub contract: String,
    /// 工作地点
    pub location: String,
    /// 编程语言标签列表
    #[serde(default)]
    pub languages: Vec<String>,
    /// 工具标签列表
    #[serde(default)]
    pub tools: Vec<String>,
}

impl JobPosting {
    /// 按展示顺序遍历职位的全部标签：角色、级别、语言、工具
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        [self.role.as_str(), self.level.as_str()]
            .into_iter()
            .chain(self.languages.iter().map(String::as_str))
            .chain(self.tools.iter().map(String::as_str))
    }
}

/// 职位包元数据
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BundleMetadata {
    /// 包含的职位数量
    pub job_count: usize,
    /// 去重后的标签数量
    pub tag_count: usize,
    /// 创建时间
    pub created_at: DateTime<Utc>,
    /// 生成工具版本
    pub version: String,
}

/// 职位包 - 压缩二进制格式中保存的完整内容
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct JobBundle {
    pub metadata: BundleMetadata,
    /// 按数据源顺序排列的全部职位
    pub jobs: Vec<JobPosting>,
}

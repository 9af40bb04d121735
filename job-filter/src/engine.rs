//! 筛选引擎：根据全部职位与筛选集合计算可见职位。
//!
//! 每次都从完整职位列表重新计算，不在上一次结果上增量修改。

use crate::models::FilterSet;
use utils_common::models::JobPosting;

/// 判断职位是否满足所有筛选标签
///
/// 每个标签只要出现在职位的角色、级别、语言或工具中任意一处即算命中，
/// 所有标签都必须命中。比较区分大小写，不做任何规范化。
pub fn matches(job: &JobPosting, filters: &FilterSet) -> bool {
    filters.iter().all(|filter| job.tags().any(|tag| tag == filter))
}

/// 计算可见职位，结果保持输入顺序
pub fn visible<'a>(all: &'a [JobPosting], filters: &FilterSet) -> Vec<&'a JobPosting> {
    if filters.is_empty() {
        return all.iter().collect();
    }

    all.iter().filter(|job| matches(job, filters)).collect()
}

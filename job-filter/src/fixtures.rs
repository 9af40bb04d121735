use utils_common::models::JobPosting;

/// 构造测试用职位，只填写与筛选相关的字段
pub fn job(id: u32, role: &str, level: &str, languages: &[&str], tools: &[&str]) -> JobPosting {
    JobPosting {
        id,
        company: format!("Company {}", id),
        logo: format!("./images/company-{}.svg", id),
        is_new: false,
        featured: false,
        position: format!("{} {} Developer", level, role),
        role: role.to_string(),
        level: level.to_string(),
        posted_at: "1d ago".to_string(),
        contract: "Full Time".to_string(),
        location: "Remote".to_string(),
        languages: languages.iter().map(|s| s.to_string()).collect(),
        tools: tools.iter().map(|s| s.to_string()).collect(),
    }
}

pub fn sample_jobs() -> Vec<JobPosting> {
    vec![
        job(1, "Frontend", "Senior", &["HTML", "CSS", "JavaScript"], &[]),
        job(2, "Fullstack", "Midweight", &["Python"], &["React"]),
        job(3, "Frontend", "Junior", &["JavaScript"], &["React", "Sass"]),
        job(4, "Backend", "Senior", &["Ruby"], &["RoR"]),
        job(5, "Frontend", "Midweight", &["JavaScript"], &["Vue"]),
    ]
}

pub fn ids(jobs: &[&JobPosting]) -> Vec<u32> {
    jobs.iter().map(|job| job.id).collect()
}

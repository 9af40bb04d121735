use std::collections::BTreeMap;
use std::path::Path;

use clap::{Arg, ArgAction, Command};

use job_filter::builder::BundleBuilder;
use job_filter::store::decode_jobs;
use utils_common::JobPosting;

// 主函数
fn main() {
    let matches = Command::new("职位包生成器")
        .version(env!("CARGO_PKG_VERSION"))
        .about("将职位数据文档打包为压缩职位包")
        .arg(Arg::new("source")
            .short('s')
            .long("source")
            .value_name("SOURCE_FILE")
            .help("职位数据 JSON 文件路径")
            .required(true))
        .arg(Arg::new("output")
            .short('o')
            .long("output")
            .value_name("OUTPUT_DIR")
            .help("职位包输出目录路径")
            .required(true))
        .arg(Arg::new("verbose")
            .short('v')
            .long("verbose")
            .help("显示每个标签的职位数量")
            .action(ArgAction::SetTrue))
        .get_matches();

    // required(true) 保证参数存在
    let source = matches.get_one::<String>("source").map(String::as_str).unwrap_or_default();
    let output_dir = matches.get_one::<String>("output").map(String::as_str).unwrap_or_default();
    let verbose = matches.get_flag("verbose");

    if !Path::new(source).is_file() {
        eprintln!("错误: 职位数据文件不存在 '{}'", source);
        std::process::exit(1);
    }

    let output_path = Path::new(output_dir);
    if !output_path.exists() {
        if let Err(e) = std::fs::create_dir_all(output_path) {
            eprintln!("错误: 无法创建输出目录 '{}': {}", output_dir, e);
            std::process::exit(1);
        }
    }

    match generate_bundle(source, output_dir, verbose) {
        Ok(_) => println!("职位包生成成功！"),
        Err(e) => {
            eprintln!("错误: 职位包生成失败: {}", e);
            std::process::exit(1);
        }
    }
}

// 读取数据文档并写出职位包
fn generate_bundle(source: &str, output_dir: &str, verbose: bool) -> Result<(), String> {
    let start_time = std::time::Instant::now();

    let data = std::fs::read(source).map_err(|e| format!("无法读取 '{}': {}", source, e))?;
    let jobs = decode_jobs(&data).map_err(|e| e.to_string())?;
    println!("读取完成，共 {} 条职位", jobs.len());

    if verbose {
        for (tag, count) in count_tags(&jobs) {
            println!("  {:<16} {}", tag, count);
        }
    }

    let mut builder = BundleBuilder::new();
    for job in jobs {
        builder.add_job(job);
    }

    let bundle_path = Path::new(output_dir).join("jobs.bin");
    let metadata = builder.save_bundle(&bundle_path).map_err(|e| e.to_string())?;

    println!(
        "职位: {}，标签: {}，生成时间: {}，耗时: {:?}",
        metadata.job_count,
        metadata.tag_count,
        metadata.created_at.format("%Y-%m-%d %H:%M:%S"),
        start_time.elapsed()
    );
    Ok(())
}

// 统计每个标签出现在多少个职位中
fn count_tags(jobs: &[JobPosting]) -> BTreeMap<&str, usize> {
    let mut counts = BTreeMap::new();
    for job in jobs {
        for tag in job.tags() {
            *counts.entry(tag).or_insert(0) += 1;
        }
    }
    counts
}

pub mod compression;
pub mod models;

// 重新导出常用模块和函数，方便直接使用
pub use compression::{to_compressed, from_compressed, is_compressed};
pub use models::{JobPosting, JobBundle, BundleMetadata};

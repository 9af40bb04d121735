use std::io::{self, Read, Write};
use flate2::{Compression, write::GzEncoder, read::GzDecoder};

/// 魔数常量 - 用于标识职位包格式
pub const MAGIC_BYTES: &[u8] = b"JBCMP"; // Job Bundle Compressed

/// 当前职位包格式版本
pub const BUNDLE_VERSION: [u8; 2] = [1, 0];

/// 头部长度：魔数 + 版本号(2) + 原始大小(4)
const HEADER_LEN: usize = MAGIC_BYTES.len() + 2 + 4;

/// 判断数据是否以职位包魔数开头
pub fn is_compressed(data: &[u8]) -> bool {
    data.starts_with(MAGIC_BYTES)
}

// 将对象序列化为二进制格式
fn to_binary<T: serde::Serialize>(obj: &T) -> Result<Vec<u8>, io::Error> {
    bincode::serde::encode_to_vec(obj, bincode::config::standard())
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("序列化失败: {}", e)))
}

// 从二进制格式反序列化对象
fn from_binary<T: for<'a> serde::de::Deserialize<'a>>(data: &[u8]) -> Result<T, io::Error> {
    bincode::serde::decode_from_slice(data, bincode::config::standard())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("反序列化失败: {}", e)))
        .map(|(value, _)| value)
}

/// 将对象序列化为压缩的二进制格式
///
/// 布局：魔数 | 版本号 [主, 次] | 原始数据大小 (u32 小端) | gzip 数据
pub fn to_compressed<T: serde::Serialize>(obj: &T, version: [u8; 2]) -> Result<Vec<u8>, io::Error> {
    let binary = to_binary(obj)?;

    let mut output = Vec::with_capacity(HEADER_LEN + binary.len() / 2);
    output.extend_from_slice(MAGIC_BYTES);
    output.extend_from_slice(&version);
    output.extend_from_slice(&(binary.len() as u32).to_le_bytes());

    let mut encoder = GzEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(&binary)?;
    output.extend_from_slice(&encoder.finish()?);

    Ok(output)
}

/// 从压缩的二进制格式反序列化对象，支持当前主版本
pub fn from_compressed<T: for<'a> serde::de::Deserialize<'a>>(data: &[u8]) -> Result<T, io::Error> {
    from_compressed_with_max_version(data, BUNDLE_VERSION[0])
}

// 从压缩的二进制格式反序列化对象，允许指定支持的最大主版本
fn from_compressed_with_max_version<T: for<'a> serde::de::Deserialize<'a>>(
    data: &[u8],
    max_version: u8,
) -> Result<T, io::Error> {
    let (_, original_size) = read_header(data, max_version)?;

    // 头部大小不可信：预分配有上限，解压最多读取声明大小加一字节
    let decoder = GzDecoder::new(&data[HEADER_LEN..]);
    let mut decompressed = Vec::with_capacity(original_size.min(data.len() * 4));
    decoder
        .take(original_size as u64 + 1)
        .read_to_end(&mut decompressed)?;

    if decompressed.len() != original_size {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("解压后数据大小不匹配: 期望 {} 字节, 实际 {} 字节",
                   original_size, decompressed.len())
        ));
    }

    from_binary(&decompressed)
}

// 解析并校验头部，返回版本号与原始数据大小
fn read_header(data: &[u8], max_version: u8) -> Result<([u8; 2], usize), io::Error> {
    if data.len() < HEADER_LEN {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("数据太短，无法解析: {} 字节", data.len())
        ));
    }

    if !is_compressed(data) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "无效的文件格式：魔数不匹配"
        ));
    }

    let version_offset = MAGIC_BYTES.len();
    let version = [data[version_offset], data[version_offset + 1]];
    if version[0] > max_version {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("不支持的版本: {}.{}", version[0], version[1])
        ));
    }

    let size_offset = version_offset + 2;
    let mut size_bytes = [0u8; 4];
    size_bytes.copy_from_slice(&data[size_offset..size_offset + 4]);

    Ok((version, u32::from_le_bytes(size_bytes) as usize))
}

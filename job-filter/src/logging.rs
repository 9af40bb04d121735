//! 日志输出：WASM 环境写入浏览器控制台，其他环境写入标准输出/错误

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;
#[cfg(target_arch = "wasm32")]
use web_sys::console;

pub fn info(message: &str) {
    #[cfg(target_arch = "wasm32")]
    console::log_1(&JsValue::from_str(message));
    #[cfg(not(target_arch = "wasm32"))]
    println!("{}", message);
}

pub fn warn(message: &str) {
    #[cfg(target_arch = "wasm32")]
    console::warn_1(&JsValue::from_str(message));
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("警告: {}", message);
}

pub fn error(message: &str) {
    #[cfg(target_arch = "wasm32")]
    console::error_1(&JsValue::from_str(message));
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("错误: {}", message);
}

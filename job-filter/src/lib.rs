use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Promise, Uint8Array};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{future_to_promise, JsFuture};
use web_sys::Response;

// 导出模块
pub mod board;
pub mod builder;
pub mod engine;
pub mod error;
pub mod logging;
pub mod models;
pub mod store;

#[cfg(test)]
mod fixtures;

pub use board::JobBoard;
pub use error::DataLoadError;
pub use models::{BoardConfig, BoardView, FilterSet};
pub use store::JobStore;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// 初始化函数 - 设置错误处理
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// 版本信息
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// 序列化为普通 JS 对象，而不是 Map
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&format!("序列化结果失败: {}", e)))
}

fn js_error(value: JsValue) -> DataLoadError {
    DataLoadError::Network(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

/// 通过浏览器 fetch 获取职位数据，不重试也不设置超时
async fn fetch_payload(url: &str) -> Result<Vec<u8>, DataLoadError> {
    let window = web_sys::window()
        .ok_or_else(|| DataLoadError::Network("无法获取 window 对象".to_string()))?;

    let response = JsFuture::from(window.fetch_with_str(url)).await.map_err(js_error)?;
    let response: Response = response.dyn_into().map_err(js_error)?;
    if !response.ok() {
        return Err(DataLoadError::Status { status: response.status() });
    }

    let buffer = JsFuture::from(response.array_buffer().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    Ok(Uint8Array::new(&buffer).to_vec())
}

/// 职位看板JS接口 - 提供给渲染层使用的API
///
/// 加载过程中看板仍可操作，未完成前可见列表为空。
#[wasm_bindgen]
pub struct JobBoardJS {
    board: Rc<RefCell<JobBoard>>,
    config: BoardConfig,
}

#[wasm_bindgen]
impl JobBoardJS {
    /// 创建看板，`config_json` 为可选的 JSON 配置
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<JobBoardJS, JsValue> {
        let config = match config_json.as_deref().map(str::trim) {
            Some(json) if !json.is_empty() => serde_json::from_str(json)
                .map_err(|e| JsValue::from_str(&format!("解析配置失败: {}", e)))?,
            _ => BoardConfig::default(),
        };

        Ok(JobBoardJS {
            board: Rc::new(RefCell::new(JobBoard::new())),
            config,
        })
    }

    /// 从配置的地址加载职位数据，Promise 结果为是否成功
    #[wasm_bindgen]
    pub fn load(&self) -> Promise {
        let board = Rc::clone(&self.board);
        let url = self.config.data_url.clone();

        future_to_promise(async move {
            let loaded = match fetch_payload(&url).await {
                Ok(data) => board.borrow_mut().load_payload(&data),
                Err(e) => {
                    board::report_load_error(&e);
                    false
                }
            };
            Ok(JsValue::from_bool(loaded))
        })
    }

    /// 加载宿主已经获取的数据（JSON 或职位包）
    #[wasm_bindgen(js_name = loadData)]
    pub fn load_data(&self, data: &[u8]) -> bool {
        self.board.borrow_mut().load_payload(data)
    }

    #[wasm_bindgen(js_name = addFilter)]
    pub fn add_filter(&self, tag: &str) -> bool {
        self.board.borrow_mut().add_filter(tag)
    }

    #[wasm_bindgen(js_name = removeFilter)]
    pub fn remove_filter(&self, tag: &str) -> bool {
        self.board.borrow_mut().remove_filter(tag)
    }

    #[wasm_bindgen(js_name = clearFilters)]
    pub fn clear_filters(&self) {
        self.board.borrow_mut().clear_filters();
    }

    /// 当前筛选标签
    #[wasm_bindgen]
    pub fn filters(&self) -> Result<JsValue, JsValue> {
        to_js(self.board.borrow().filters())
    }

    /// 获取所有标签
    #[wasm_bindgen(js_name = allTags)]
    pub fn all_tags(&self) -> Result<JsValue, JsValue> {
        to_js(&self.board.borrow().store().tags())
    }

    /// 渲染所需的完整快照
    #[wasm_bindgen]
    pub fn view(&self) -> Result<JsValue, JsValue> {
        to_js(&self.board.borrow().view())
    }

    #[wasm_bindgen(js_name = jobCount)]
    pub fn job_count(&self) -> usize {
        self.board.borrow().store().len()
    }
}

// 日志工具模块
//
// 合并层通过 `log` 宏输出收集统计和分片失败信息，
// 独立运行或测试时用这里的 flexi_logger 封装把日志写到文件

use crate::config::LogConfig;
use crate::core::error::{MergeError, MergeResult};
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use std::sync::Mutex;

/// 全局日志句柄，用于程序退出时 flush
static LOGGER_HANDLE: Mutex<Option<LoggerHandle>> = Mutex::new(None);

/// 初始化合并层日志
///
/// 嵌入方已有日志实现时不需要调用此函数
///
/// # Arguments
/// * `config` - `[log]` 配置段，`level` 使用 flexi_logger 的日志规格语法，
///   例如 `info` 或 `warn, sharding_merge::query::merge=debug`
///
/// # Returns
/// * `Ok(())` - 初始化成功
/// * `Err(MergeError::Config)` - 日志规格无法解析、日志目录不可用或已经初始化过
///
/// # Examples
/// ```no_run
/// use sharding_merge::config::Config;
/// use sharding_merge::utils::logging;
///
/// let config = Config::default();
/// logging::init(&config.log).expect("日志初始化失败");
/// ```
pub fn init(config: &LogConfig) -> MergeResult<()> {
    if is_initialized() {
        return Err(MergeError::Config("日志系统已初始化".to_string()));
    }

    let handle = Logger::try_with_str(&config.level)
        .map_err(|e| MergeError::Config(format!("日志级别无效 '{}': {}", config.level, e)))?
        .log_to_file(
            FileSpec::default()
                .basename(&config.file)
                .directory(&config.dir),
        )
        .rotate(
            Criterion::Size(config.max_file_size),
            Naming::Numbers,
            Cleanup::KeepLogFiles(config.max_files),
        )
        .write_mode(WriteMode::Async)
        .append()
        .start()
        .map_err(|e| MergeError::Config(format!("日志启动失败: {}", e)))?;

    if let Ok(mut guard) = LOGGER_HANDLE.lock() {
        *guard = Some(handle);
    }

    log::info!(
        "合并层日志已启用: {}/{} (级别 {})",
        config.dir,
        config.file,
        config.level
    );
    Ok(())
}

/// 刷新并关闭日志系统
///
/// 阻塞直到异步日志线程写完当前内容
pub fn shutdown() {
    if let Ok(mut guard) = LOGGER_HANDLE.lock() {
        if let Some(handle) = guard.take() {
            handle.flush();
        }
    }
}

/// 检查日志系统是否已初始化
///
/// # Returns
/// * `true` - 已通过 [`init`] 初始化且尚未关闭
/// * `false` - 未初始化
pub fn is_initialized() -> bool {
    LOGGER_HANDLE
        .lock()
        .map(|guard| guard.is_some())
        .unwrap_or(false)
}

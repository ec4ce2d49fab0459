use std::io::Write;

use crate::error::{CommonError, CommonResult};

/// Installs the process-wide logger.
///
/// Log lines go to standard error so that command output on standard output
/// stays machine-readable. The level defaults to `info` and can be
/// overridden with `RUST_LOG`.
pub fn init_logger() -> CommonResult<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(move |buf, record| {
            let level = record.level();
            let target = record.target();
            let style = buf.default_level_style(level);
            let timestamp = buf.timestamp();
            let args = record.args();
            writeln!(buf, "[{timestamp} {style}{level}{style:#} {target}] {args}")
        })
        .try_init()
        .map_err(|e| CommonError::internal(format!("failed to initialize logger: {e}")))
}

/*
 * Copyright (c) Huawei Technologies Co., Ltd. 2025. All rights reserved.
 * Integrity Gateway is licensed under the Mulan PSL v2.
 * You can use this software according to the terms and conditions of the Mulan PSL v2.
 * You may obtain a copy of Mulan PSL v2 at:
 *     http://license.coscl.org.cn/MulanPSL2
 * THIS SOFTWARE IS PROVIDED ON AN "AS IS" BASIS, WITHOUT WARRANTIES OF ANY KIND, EITHER EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO NON-INFRINGEMENT, MERCHANTABILITY OR FIT FOR A PARTICULAR
 * PURPOSE.
 * See the Mulan PSL v2 for more details.
 */

use crate::utils::env_setting_center::Environment;
use log::{info, LevelFilter, SetLoggerError};
use log4rs::{
    append::console::{ConsoleAppender, Target},
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
};
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

const LOG_PATTERN: &'static str = "{d(%Y-%m-%dT%H:%M:%S%.3f)} {P} [{l}] {t} - {m}{n}";

fn parse_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        "off" => LevelFilter::Off,
        _ => LevelFilter::Info,
    }
}

/// desc: initialize the global logger from env config, file appender only
/// when a log path is configured
pub fn init_logger(enable_stdout: bool) -> Result<(), SetLoggerError> {
    let config = Environment::global();
    let level = parse_level(&config.log_level);

    let mut appenders: Vec<Appender> = Vec::new();
    let mut root_appenders: Vec<String> = Vec::new();

    if let Some(log_path) = &config.log_path {
        let path = Path::new(log_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create log directory");
            fs::set_permissions(parent, fs::Permissions::from_mode(0o750))
                .expect("failed to set log directory permissions");
        }

        let file_appender = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build(path)
            .expect("failed to create file appender");
        fs::set_permissions(path, fs::Permissions::from_mode(0o640)).expect("failed to set log file permissions");

        appenders.push(Appender::builder().build("file_appender", Box::new(file_appender)));
        root_appenders.push(String::from("file_appender"));
    }

    if enable_stdout || root_appenders.is_empty() {
        let stdout_appender = ConsoleAppender::builder()
            .target(Target::Stdout)
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build();
        appenders.push(Appender::builder().build("stdout", Box::new(stdout_appender)));
        root_appenders.push(String::from("stdout"));
    }

    let mut config_builder = Config::builder();
    for appender in appenders {
        config_builder = config_builder.appender(appender);
    }

    let root = Root::builder().appenders(root_appenders).build(level);
    let config = config_builder.build(root).expect("failed to build log config");

    log4rs::init_config(config)?;
    info!("init logger successfully");
    Ok(())
}

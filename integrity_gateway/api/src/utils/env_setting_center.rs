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

use crate::config::config::{
    GATEWAY_CERT_PATH, GATEWAY_KEY_PATH, GATEWAY_LOG_LEVEL, GATEWAY_LOG_PATH, GATEWAY_PORT, GOOGLE_CLOUD_CREDENTIALS,
    HTTPS_SWITCH, PACKAGE_NAME,
};
use crate::utils::errors::GatewayError;
use std::{env, sync};

/// desc: load .env next to the binary when present; a pure-env deployment
/// (container secrets) needs no file
pub fn load_env() -> Result<(), Box<dyn std::error::Error>> {
    let exe_path = env::current_exe()?;
    let bin_dir = if let Some(dir) = exe_path.parent() {
        dir
    } else {
        return Err("failed to get parent directory".into());
    };
    let env_path = bin_dir.join(".env");

    if env_path.exists() {
        dotenv::from_path(env_path)?;
    }

    Ok(())
}

#[derive(Debug)]
pub struct Environment {
    pub port: u16,
    pub credentials: String,
    pub package_name: String,
    pub log_level: String,
    pub log_path: Option<String>,
}

pub static ENVIRONMENT_CONFIG: sync::OnceLock<Environment> = sync::OnceLock::new();

impl Environment {
    /// desc: check required env config is present
    pub fn check() -> Result<(), GatewayError> {
        get_port()?;
        get_credentials()?;
        get_package_name()?;
        get_log_level()?;
        Ok(())
    }

    /// desc: set env value to global static params
    pub fn global() -> &'static Environment {
        ENVIRONMENT_CONFIG.get_or_init(|| Environment {
            port: get_port().expect("failed to get port number"),
            credentials: get_credentials().expect("failed to get service credentials"),
            package_name: get_package_name().expect("failed to get package name"),
            log_level: get_log_level().expect("failed to get log level"),
            log_path: get_log_path(),
        })
    }
}

/// desc: get listen port from env config
pub fn get_port() -> Result<u16, GatewayError> {
    let port_str = env::var(GATEWAY_PORT).map_err(|_| GatewayError::EnvConfigError(String::from(GATEWAY_PORT)))?;
    let port = port_str.parse::<u16>().map_err(|_| GatewayError::EnvConfigError(String::from(GATEWAY_PORT)))?;
    Ok(port)
}

/// desc: get the service-account JSON document from env config
pub fn get_credentials() -> Result<String, GatewayError> {
    let credentials = env::var(GOOGLE_CLOUD_CREDENTIALS)
        .map_err(|_| GatewayError::EnvConfigError(String::from(GOOGLE_CLOUD_CREDENTIALS)))?;
    Ok(credentials)
}

/// desc: get the attested application package from env config
pub fn get_package_name() -> Result<String, GatewayError> {
    let package_name = env::var(PACKAGE_NAME).map_err(|_| GatewayError::EnvConfigError(String::from(PACKAGE_NAME)))?;
    Ok(package_name)
}

/// desc: get log level from env config
pub fn get_log_level() -> Result<String, GatewayError> {
    let log_level =
        env::var(GATEWAY_LOG_LEVEL).map_err(|_| GatewayError::EnvConfigError(String::from(GATEWAY_LOG_LEVEL)))?;
    Ok(log_level)
}

/// desc: optional log file; stdout-only when unset
pub fn get_log_path() -> Option<String> {
    env::var(GATEWAY_LOG_PATH).ok()
}

/// desc: TLS binding is off unless the switch is set to 1
pub fn get_https_switch() -> bool {
    env::var(HTTPS_SWITCH).map(|value| value == "1").unwrap_or(false)
}

/// desc: get server certificate chain path, required when TLS is on
pub fn get_cert_path() -> Result<String, GatewayError> {
    let cert = env::var(GATEWAY_CERT_PATH).map_err(|_| GatewayError::EnvConfigError(String::from(GATEWAY_CERT_PATH)))?;
    Ok(cert)
}

/// desc: get server private key path, required when TLS is on
pub fn get_key_path() -> Result<String, GatewayError> {
    let key = env::var(GATEWAY_KEY_PATH).map_err(|_| GatewayError::EnvConfigError(String::from(GATEWAY_KEY_PATH)))?;
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn set_required_vars() {
        env::set_var(GATEWAY_PORT, "8080");
        env::set_var(GOOGLE_CLOUD_CREDENTIALS, "{}");
        env::set_var(PACKAGE_NAME, "com.example.app");
        env::set_var(GATEWAY_LOG_LEVEL, "info");
    }

    #[test]
    #[serial]
    fn test_check_passes_with_required_vars() {
        set_required_vars();
        assert!(Environment::check().is_ok());
    }

    #[test]
    #[serial]
    fn test_check_fails_without_credentials() {
        set_required_vars();
        env::remove_var(GOOGLE_CLOUD_CREDENTIALS);
        let result = Environment::check();
        assert!(matches!(result, Err(GatewayError::EnvConfigError(ref var)) if var == GOOGLE_CLOUD_CREDENTIALS));
    }

    #[test]
    #[serial]
    fn test_check_fails_when_port_does_not_parse() {
        set_required_vars();
        env::set_var(GATEWAY_PORT, "not-a-port");
        assert!(Environment::check().is_err());
    }

    #[test]
    #[serial]
    fn test_https_switch_defaults_off() {
        env::remove_var(HTTPS_SWITCH);
        assert!(!get_https_switch());
        env::set_var(HTTPS_SWITCH, "1");
        assert!(get_https_switch());
        env::remove_var(HTTPS_SWITCH);
    }

    #[test]
    #[serial]
    fn test_log_path_is_optional() {
        env::remove_var(GATEWAY_LOG_PATH);
        assert!(get_log_path().is_none());
        env::set_var(GATEWAY_LOG_PATH, "/var/log/integrity_gateway/gateway.log");
        assert_eq!(get_log_path().as_deref(), Some("/var/log/integrity_gateway/gateway.log"));
        env::remove_var(GATEWAY_LOG_PATH);
    }
}

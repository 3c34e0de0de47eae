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

use std::io;
use std::sync::Arc;
use actix_web::{middleware, web, App, HttpServer};
use openssl::ssl::{SslAcceptor, SslAcceptorBuilder, SslFiletype, SslMethod};
use credential::{GoogleCredentialProvider, ServiceCredentials};
use verdict::{PlayIntegrityClient, VerdictEvaluator};
use integrity_gateway::controllers::attest_controller::attest;
use integrity_gateway::utils::env_setting_center::{
    get_cert_path, get_https_switch, get_key_path, load_env, Environment,
};
use integrity_gateway::utils::errors::GatewayError;
use integrity_gateway::utils::logger::init_logger;

fn build_evaluator(config: &Environment) -> Result<VerdictEvaluator, io::Error> {
    let credentials = ServiceCredentials::from_json(&config.credentials)
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err.to_string()))?;
    let provider = GoogleCredentialProvider::new(credentials)
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err.to_string()))?;
    let client = PlayIntegrityClient::new().map_err(|err| io::Error::new(io::ErrorKind::Other, err.to_string()))?;
    Ok(VerdictEvaluator::new(Arc::new(provider), Arc::new(client), config.package_name.clone()))
}

fn build_ssl_acceptor() -> Result<SslAcceptorBuilder, GatewayError> {
    let mut builder = SslAcceptor::mozilla_intermediate(SslMethod::tls()).map_err(|err| {
        log::error!("tls acceptor init error, msg:{}", err);
        GatewayError::TlsConfigError(err.to_string())
    })?;
    builder.set_private_key_file(get_key_path()?, SslFiletype::PEM).map_err(|err| {
        log::error!("load private key error, msg:{}", err);
        GatewayError::TlsConfigError(err.to_string())
    })?;
    builder.set_certificate_chain_file(get_cert_path()?).map_err(|err| {
        log::error!("load cert chain error, msg:{}", err);
        GatewayError::TlsConfigError(err.to_string())
    })?;
    Ok(builder)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    load_env().expect("failed to load .env file");
    match Environment::check() {
        Ok(_) => {}
        Err(err) => {
            log::error!("load env config error, message: {}", err);
            return Err(io::Error::new(io::ErrorKind::Other, err.to_string()));
        }
    }
    init_logger(true).expect("failed to init logger");
    let config = Environment::global();
    let evaluator = web::Data::new(build_evaluator(config)?);
    let server = HttpServer::new(move || {
        App::new().wrap(middleware::Logger::default()).app_data(evaluator.clone()).service(attest)
    });
    let server = if get_https_switch() {
        let builder = build_ssl_acceptor().map_err(|err| io::Error::new(io::ErrorKind::Other, err.to_string()))?;
        server.bind_openssl(("0.0.0.0", config.port), builder)?
    } else {
        server.bind(("0.0.0.0", config.port))?
    };
    log::info!("integrity gateway listening on port {}", config.port);
    server.run().await
}

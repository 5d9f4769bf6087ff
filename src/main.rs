//! DMS Alias Agent - docker-mailserver 别名管理代理
//!
//! Usage:
//! - Normal mode: `dms-alias-agent`
//! - With custom port: `dms-alias-agent --port 9080`

use dms_alias_agent::config::RuntimeConfig;

/// 解析命令行参数
fn parse_args() -> RuntimeConfig {
    let args: Vec<String> = std::env::args().collect();
    let mut config = RuntimeConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--port" if i + 1 < args.len() => {
                config.port_override = args[i + 1].parse().ok();
                i += 2;
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            _ => {
                i += 1;
            }
        }
    }

    config
}

fn print_help() {
    println!("DMS Alias Agent - docker-mailserver alias management API");
    println!();
    println!("USAGE:");
    println!("    dms-alias-agent [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --port <PORT>    Override the listening port");
    println!("    -h, --help       Print help information");
    println!();
    println!("ENVIRONMENT:");
    println!("    PORT                 Listening port (default: 8080)");
    println!("    MAILSERVER_IMAGE     Image substring used to locate the container");
    println!("                         (default: mailserver/docker-mailserver)");
    println!("    SETUP_COMMAND        Management tool inside the container (default: setup)");
    println!("    RUST_LOG             Log filter (default: info)");
}

fn main() {
    let config = parse_args();

    let rt = tokio::runtime::Runtime::new().expect("Failed to create runtime");
    rt.block_on(async {
        dms_alias_agent::init_and_run_agent_with_config(config).await;
    });
}

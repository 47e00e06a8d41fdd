// ==========================================
// 航空餐车配餐系统 - 命令行入口
// ==========================================
// 用法:
//   meal-cart-planner [form.json] [--redistribute] [--locale en|zh-CN]
//                     [--config path] [--log-json]
//
// 未给出表单路径时从 stdin 读取
// 退出码: 0 成功, 2 校验未通过, 1 读取/解析失败
// ==========================================

use anyhow::{bail, Context};
use meal_cart_planner::api::AllocationApi;
use meal_cart_planner::config::ConfigManager;
use meal_cart_planner::{i18n, logging, ManifestForm};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Default)]
struct CliArgs {
    form_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
    locale: Option<String>,
    redistribute: bool,
    log_json: bool,
}

fn parse_args() -> anyhow::Result<CliArgs> {
    let mut parsed = CliArgs::default();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--redistribute" => parsed.redistribute = true,
            "--log-json" => parsed.log_json = true,
            "--locale" => {
                parsed.locale = Some(args.next().context("--locale 缺少参数")?);
            }
            "--config" => {
                parsed.config_path = Some(PathBuf::from(
                    args.next().context("--config 缺少参数")?,
                ));
            }
            other if other.starts_with("--") => bail!("未知参数: {}", other),
            other => {
                if parsed.form_path.is_some() {
                    bail!("只能指定一个表单文件");
                }
                parsed.form_path = Some(PathBuf::from(other));
            }
        }
    }

    Ok(parsed)
}

fn read_form(path: Option<&PathBuf>) -> anyhow::Result<ManifestForm> {
    let raw = match path {
        Some(p) => std::fs::read_to_string(p)
            .with_context(|| format!("无法读取表单文件: {}", p.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("无法从 stdin 读取表单")?;
            buf
        }
    };

    serde_json::from_str(&raw).context("表单 JSON 解析失败")
}

/// 返回 Ok(true) 表示计算通过校验
fn run(args: &CliArgs) -> anyhow::Result<bool> {
    let manager = ConfigManager::load(args.config_path.as_deref())?;
    if let Some(source) = manager.source() {
        tracing::info!("使用配置文件: {}", source.display());
    }

    if let Some(locale) = &args.locale {
        if !i18n::set_locale(locale) {
            bail!("不支持的语言: {}", locale);
        }
    }

    let form = read_form(args.form_path.as_ref())?;
    let api = AllocationApi::from_config_manager(&manager);
    let calculation = api.calculate(&form);

    if !calculation.valid {
        println!("{}", serde_json::to_string_pretty(&calculation)?);
        return Ok(false);
    }

    if let Some(shortage) = &calculation.shortage {
        tracing::info!("{}", api.shortage_message(shortage));
    }

    let output = if args.redistribute {
        let redistribution = api.redistribute(&calculation)?;
        tracing::info!("{}", redistribution.message);
        serde_json::json!({
            "calculation": calculation,
            "redistribution": redistribution,
        })
    } else {
        serde_json::to_value(&calculation)?
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(true)
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{:#}", e);
            return ExitCode::from(1);
        }
    };

    if args.log_json {
        logging::init_json();
    } else {
        logging::init();
    }

    tracing::debug!("{} v{}", meal_cart_planner::APP_NAME, meal_cart_planner::VERSION);

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(e) => {
            tracing::error!("{:#}", e);
            eprintln!("{:#}", e);
            ExitCode::from(1)
        }
    }
}

use clap::Parser;
use event_scan::{agent, cli, config, error, image_source, logging, pipeline, report, server, vision};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use event_scan_common::{extract_text, parse_event_response, AnalysisSlots};
use pipeline::{AnalysisOutcome, Pipeline, PipelineStep};
use std::io::Read;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    match cli.command {
        Commands::Scan { image, json, extractor_url } => {
            let mut config = config;
            if let Some(url) = extractor_url {
                config.extractor_url = url;
            }

            // 認証情報はネットワークに触れる前に検証
            let mut pipeline = Pipeline::from_config(&config)?;

            if !json {
                println!("📷 event-scan - イベント情報抽出\n");
                println!("[1/3] 画像を読み込み中...");
                let extractor_url = config.extractor_url.clone();
                pipeline = pipeline.with_progress(move |step| match step {
                    PipelineStep::Recognizing => println!("[2/3] OCR解析中..."),
                    PipelineStep::Extracting => {
                        println!("[3/3] イベント情報を抽出中... ({})", extractor_url)
                    }
                });
            }
            let mut slots = AnalysisSlots::new();
            slots.set_payload(image_source::load_image_file(&image)?);

            let Some(outcome) = pipeline.run(&mut slots).await? else {
                return Ok(());
            };

            match outcome {
                AnalysisOutcome::Completed(analysis) => {
                    tracing::debug!("抽出サービス応答:\n{}", analysis.extractor_text);
                    if json {
                        println!("{}", report::event_json(slots.event())?);
                        return Ok(());
                    }
                    if let Some(caption) = &analysis.caption {
                        println!("\nキャプション: {}", caption);
                    }
                    println!("\nOCR結果:\n{}", report::indent(slots.ocr_text().unwrap_or_default()));
                    if let Some(event) = slots.event() {
                        println!("\nイベント情報:\n{}", report::indent(&report::format_event(event)));
                    }
                    if analysis.parsed.is_empty_match() {
                        println!("\n⚠ 抽出サービスの応答にイベント項目が見つかりませんでした");
                    }
                    println!("\n✅ 完了");
                }
                AnalysisOutcome::NoReadResult { caption } => {
                    if let Some(caption) = caption {
                        eprintln!("キャプション: {}", caption);
                    }
                    eprintln!("⚠ 画像からテキストを読み取れませんでした");
                    if json {
                        println!("{}", report::event_json(None)?);
                    }
                }
            }
        }

        Commands::Ocr { image } => {
            let client = vision::VisionClient::from_config(&config)?;
            let payload = image_source::load_image_file(&image)?;
            let result = client.recognize_text(&payload).await?;

            if let Some(caption) = result.caption() {
                eprintln!("キャプション: {}", caption);
            }
            match extract_text(&result) {
                Some(text) => println!("{}", text),
                None => eprintln!("⚠ 画像からテキストを読み取れませんでした"),
            }
        }

        Commands::Parse { input, json } => {
            let text = match input {
                Some(path) => std::fs::read_to_string(path)?,
                None => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };

            let record = parse_event_response(&text);
            if json {
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                println!("{}", report::format_event(&record));
            }
        }

        Commands::Serve { addr, ai_provider } => {
            let provider = ai_provider.unwrap_or(config.ai_provider);
            println!("🚀 event-scan - 抽出サービス");
            println!("  POST http://{}/analyze (AI: {})", addr, provider.command_name());

            let state = server::ServerState::new(Arc::new(agent::CliAgent::new(provider)));
            server::serve(addr, state).await?;
        }

        Commands::Config {
            set_vision_key,
            set_vision_endpoint,
            set_extractor_url,
            set_ai_provider,
            show,
        } => {
            // 環境変数の値を保存しないよう、ファイルの内容だけを編集
            let mut stored = Config::load_from(&Config::config_path()?)?;
            let mut changed = false;

            if let Some(key) = set_vision_key {
                stored.vision_key = Some(key);
                changed = true;
            }
            if let Some(endpoint) = set_vision_endpoint {
                stored.vision_endpoint = Some(endpoint);
                changed = true;
            }
            if let Some(url) = set_extractor_url {
                stored.extractor_url = url;
                changed = true;
            }
            if let Some(provider) = set_ai_provider {
                stored.ai_provider = provider;
                changed = true;
            }
            if changed {
                stored.save()?;
                println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("設定（環境変数を反映）:");
                println!("  OCR APIキー: {}", if config.vision_key.is_some() { "設定済み" } else { "未設定" });
                println!("  OCRエンドポイント: {}", config.vision_endpoint.as_deref().unwrap_or("未設定"));
                println!("  抽出サービス: {}", config.extractor_url);
                println!("  AIプロバイダ: {}", config.ai_provider.command_name());
            }
        }
    }

    Ok(())
}

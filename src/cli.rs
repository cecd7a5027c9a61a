use clap::{Parser, Subcommand};
use crate::ai_provider::AiProvider;
use crate::server::DEFAULT_ADDR;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "event-scan")]
#[command(about = "イベント告知写真のOCR・イベント情報抽出ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 画像をOCRし、抽出サービスでイベント情報を取り出す
    Scan {
        /// 画像ファイルのパス
        #[arg(required = true)]
        image: PathBuf,

        /// イベント情報をJSONで出力
        #[arg(long)]
        json: bool,

        /// 抽出サービスのURL（省略時は設定値）
        #[arg(long)]
        extractor_url: Option<String>,
    },

    /// 画像をOCRしてテキストのみ出力
    Ocr {
        /// 画像ファイルのパス
        #[arg(required = true)]
        image: PathBuf,
    },

    /// 抽出サービスの応答テキストをパース（省略時は標準入力）
    Parse {
        /// 応答テキストファイル
        input: Option<PathBuf>,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 抽出サービス（POST /analyze）を起動
    Serve {
        /// 待ち受けアドレス
        #[arg(long, default_value = DEFAULT_ADDR)]
        addr: SocketAddr,

        /// AIプロバイダ (claude/codex/gemini)（省略時は設定値）
        #[arg(long)]
        ai_provider: Option<AiProvider>,
    },

    /// 設定を表示/編集
    Config {
        /// OCRサービスのAPIキーを設定
        #[arg(long)]
        set_vision_key: Option<String>,

        /// OCRサービスのエンドポイントを設定
        #[arg(long)]
        set_vision_endpoint: Option<String>,

        /// 抽出サービスのURLを設定
        #[arg(long)]
        set_extractor_url: Option<String>,

        /// AIプロバイダを設定
        #[arg(long)]
        set_ai_provider: Option<AiProvider>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

//! AI CLI連携モジュール
//!
//! 抽出サービスの中身。OCRテキストからプロンプトを作り、
//! AI CLI（claude / codex / gemini）を非対話モードで実行する。

use crate::ai_provider::AiProvider;
use anyhow::{bail, Context};
use async_trait::async_trait;
use event_scan_common::{build_extraction_prompt, strip_final_response};
use tokio::process::Command;

/// OCRテキストをラベル付きテキストに変換するエージェント
#[async_trait]
pub trait EventAgent: Send + Sync {
    /// プロンプトを実行し、生の応答を返す
    async fn complete(&self, prompt: &str) -> anyhow::Result<String>;

    /// OCRテキストを処理し、`FINAL_RESPONSE:` を除いた応答を返す
    async fn process(&self, ocr_text: &str) -> anyhow::Result<String> {
        let prompt = build_extraction_prompt(ocr_text);
        let response = self.complete(&prompt).await?;
        Ok(strip_final_response(&response))
    }
}

pub struct CliAgent {
    provider: AiProvider,
}

impl CliAgent {
    pub fn new(provider: AiProvider) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl EventAgent for CliAgent {
    async fn complete(&self, prompt: &str) -> anyhow::Result<String> {
        let name = self.provider.command_name();
        tracing::debug!(cli = name, chars = prompt.len(), "AI CLI実行");

        // Windowsではcmd /c経由（改行は渡せないのでスペースに置換）
        #[cfg(windows)]
        let output = {
            let prompt = prompt.replace('\n', " ").replace('"', "\\\"");
            Command::new("cmd")
                .arg("/c")
                .arg(name)
                .args(self.provider.prompt_args(&prompt))
                .output()
                .await
        };

        #[cfg(not(windows))]
        let output = Command::new(name)
            .args(self.provider.prompt_args(prompt))
            .output()
            .await;

        let output = output.with_context(|| format!("{} CLI実行エラー", name))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!(
                "{} CLI failed (code {:?}): {}",
                name,
                output.status.code(),
                stderr.trim()
            );
        }

        let response = String::from_utf8_lossy(&output.stdout).to_string();
        let preview: String = response.chars().take(200).collect();
        tracing::debug!(cli = name, %preview, "AI CLI応答");

        Ok(response)
    }
}

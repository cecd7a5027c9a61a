//! 解析パイプライン
//!
//! 画像 → OCR → 抽出サービス → パース

use crate::config::Config;
use crate::error::Result;
use crate::extractor::ExtractorClient;
use crate::vision::VisionClient;
use event_scan_common::{
    extract_text, parse_event_response_detailed, AnalysisSlots, ImagePayload, ParsedEvent,
};

/// 解析結果
#[derive(Debug, Clone)]
pub struct Analysis {
    pub caption: Option<String>,
    pub ocr_text: String,
    pub extractor_text: String,
    pub parsed: ParsedEvent,
}

#[derive(Debug, Clone)]
pub enum AnalysisOutcome {
    Completed(Analysis),
    /// OCRサービスが読み取り結果を返さなかった（抽出は行わない）
    NoReadResult { caption: Option<String> },
}

/// 進捗の段階（各段階の開始時に通知）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStep {
    Recognizing,
    Extracting,
}

type ProgressFn = Box<dyn Fn(PipelineStep) + Send + Sync>;

pub struct Pipeline {
    vision: VisionClient,
    extractor: ExtractorClient,
    on_step: Option<ProgressFn>,
}

impl Pipeline {
    pub fn new(vision: VisionClient, extractor: ExtractorClient) -> Self {
        Self {
            vision,
            extractor,
            on_step: None,
        }
    }

    pub fn with_progress(mut self, on_step: impl Fn(PipelineStep) + Send + Sync + 'static) -> Self {
        self.on_step = Some(Box::new(on_step));
        self
    }

    fn report(&self, step: PipelineStep) {
        tracing::debug!(?step, "パイプライン段階開始");
        if let Some(on_step) = &self.on_step {
            on_step(step);
        }
    }

    /// 設定から生成。OCRの認証情報が無ければここで失敗する。
    pub fn from_config(config: &Config) -> Result<Self> {
        let credentials = config.vision_credentials()?;
        let http = reqwest::Client::new();
        let vision = VisionClient::new(http.clone(), credentials);
        let extractor = ExtractorClient::new(http, config.extractor_url.clone());
        Ok(Self::new(vision, extractor))
    }

    pub async fn analyze(&self, payload: &ImagePayload) -> Result<AnalysisOutcome> {
        self.report(PipelineStep::Recognizing);
        let ocr = self.vision.recognize_text(payload).await?;
        let caption = ocr.caption().map(str::to_string);

        let Some(ocr_text) = extract_text(&ocr) else {
            tracing::warn!("OCRレスポンスに読み取り結果がありません");
            return Ok(AnalysisOutcome::NoReadResult { caption });
        };

        self.report(PipelineStep::Extracting);
        let extractor_text = self.extractor.extract(&ocr_text).await?;
        let parsed = parse_event_response_detailed(&extractor_text);
        if parsed.is_empty_match() {
            tracing::warn!("抽出サービスの応答にイベント項目が見つかりません");
        }

        Ok(AnalysisOutcome::Completed(Analysis {
            caption,
            ocr_text,
            extractor_text,
            parsed,
        }))
    }

    /// 現在の画像を解析し、結果をスロットへ反映
    ///
    /// 失敗はメッセージとしてOCRテキスト欄に入り、イベント情報は消える。
    /// 画像が無ければ何もせず `Ok(None)`。
    pub async fn run(&self, slots: &mut AnalysisSlots) -> Result<Option<AnalysisOutcome>> {
        let Some(payload) = slots.payload().cloned() else {
            return Ok(None);
        };
        let ticket = slots.begin_analysis();

        match self.analyze(&payload).await {
            Ok(outcome) => {
                if let AnalysisOutcome::Completed(analysis) = &outcome {
                    slots.apply_ocr_text(ticket, analysis.ocr_text.clone());
                    slots.apply_event(ticket, analysis.parsed.record.clone());
                }
                Ok(Some(outcome))
            }
            Err(e) => {
                tracing::error!("解析エラー: {}", e);
                slots.apply_failure(ticket, e.to_string());
                Err(e)
            }
        }
    }
}

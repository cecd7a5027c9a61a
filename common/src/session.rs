//! 解析セッションの状態
//!
//! 画像・OCRテキスト・イベント情報の3スロットを保持する。
//! 各スロットは常に最新の1件のみ（履歴なし）。
//!
//! 解析は開始ごとに連番のチケットを受け取り、完了時にそのチケットが
//! 最新の場合のみ結果を反映する（後から開始した解析が常に勝つ）。

use crate::ocr::extract_text;
use crate::types::{EventRecord, ImagePayload, OcrResult};

/// 解析1回分を識別する連番
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct AnalysisTicket(u64);

#[derive(Debug, Clone, Default)]
pub struct AnalysisSlots {
    payload: Option<ImagePayload>,
    ocr_text: Option<String>,
    event: Option<EventRecord>,
    latest: u64,
}

impl AnalysisSlots {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn payload(&self) -> Option<&ImagePayload> {
        self.payload.as_ref()
    }

    pub fn ocr_text(&self) -> Option<&str> {
        self.ocr_text.as_deref()
    }

    pub fn event(&self) -> Option<&EventRecord> {
        self.event.as_ref()
    }

    /// 画像を差し替える（OCR/イベント結果は次の解析まで残す）
    pub fn set_payload(&mut self, payload: ImagePayload) {
        self.payload = Some(payload);
    }

    pub fn clear_payload(&mut self) {
        self.payload = None;
    }

    /// 解析開始。以前に発行したチケットはすべて古くなる。
    pub fn begin_analysis(&mut self) -> AnalysisTicket {
        self.latest += 1;
        AnalysisTicket(self.latest)
    }

    pub fn is_latest(&self, ticket: AnalysisTicket) -> bool {
        ticket.0 == self.latest
    }

    /// OCRテキストを反映。古いチケットなら何もせず false。
    pub fn apply_ocr_text(&mut self, ticket: AnalysisTicket, text: String) -> bool {
        if !self.is_latest(ticket) {
            return false;
        }
        self.ocr_text = Some(text);
        true
    }

    /// OCR完了時の処理
    ///
    /// 読み取り結果があり、チケットが最新ならテキストを反映して返す。
    /// None のときは抽出サービスを呼ばずに終える。
    pub fn finish_ocr(&mut self, ticket: AnalysisTicket, ocr: &OcrResult) -> Option<String> {
        let text = extract_text(ocr)?;
        self.apply_ocr_text(ticket, text.clone()).then_some(text)
    }

    /// イベント情報を反映。古いチケットなら何もせず false。
    pub fn apply_event(&mut self, ticket: AnalysisTicket, event: EventRecord) -> bool {
        if !self.is_latest(ticket) {
            return false;
        }
        self.event = Some(event);
        true
    }

    /// 解析失敗: メッセージをOCRテキスト欄に表示し、イベント情報を消す
    pub fn apply_failure(&mut self, ticket: AnalysisTicket, message: impl Into<String>) -> bool {
        if !self.is_latest(ticket) {
            return false;
        }
        self.ocr_text = Some(message.into());
        self.event = None;
        true
    }
}

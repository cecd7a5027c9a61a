//! プロンプト生成モジュール
//!
//! 抽出サービス（`/analyze`）がAIに渡すプロンプト:
//! - 検証役: OCRテキストの誤りや不整合を整理
//! - 整形役: Date/Time/Location/Description の行形式で出力

/// 最終回答の前置きマーカー
pub const FINAL_RESPONSE_MARKER: &str = "FINAL_RESPONSE:";

/// 検証役の指示
pub const VALIDATOR_INSTRUCTIONS: &str =
    "Validate and clean the input data, checking for any inconsistencies or errors.";

/// 整形役の指示
pub const FORMATTER_INSTRUCTIONS: &str =
    "Format the validated data into the required structure. Prefix the final response with 'FINAL_RESPONSE:'";

/// 抽出プロンプト生成
///
/// # Arguments
/// * `ocr_text` - OCRで読み取ったテキスト（ブロックごとに改行）
///
/// # Returns
/// AI CLIに渡すプロンプト文字列
pub fn build_extraction_prompt(ocr_text: &str) -> String {
    format!(
        r#"You coordinate two roles to process text read from an event poster or flyer.

## Role 1: data_validator
{VALIDATOR_INSTRUCTIONS}

## Role 2: data_formatter
{FORMATTER_INSTRUCTIONS}

## Required structure (one field per line, nothing else after the marker)
{FINAL_RESPONSE_MARKER}
Date: <event date>
Time: <event time>
Location: <venue or address, or "Not provided">
Description: <one sentence describing the event>

Process this event text: {ocr_text}"#
    )
}

/// AI応答から最終回答部分を取り出す
///
/// マーカーはすべて取り除き、前後の空白を削る。
pub fn strip_final_response(response: &str) -> String {
    response.replace(FINAL_RESPONSE_MARKER, "").trim().to_string()
}

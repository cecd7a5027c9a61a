//! 解析結果の表示用テキスト

use event_scan_common::EventRecord;

/// イベント情報の表示（場所は無ければ省略）
pub fn format_event(record: &EventRecord) -> String {
    let mut lines = vec![
        format!("Date: {}", record.date),
        format!("Time: {}", record.time),
    ];
    if let Some(location) = &record.location {
        lines.push(format!("Location: {}", location));
    }
    lines.push(format!("Description: {}", record.description));
    lines.join("\n")
}

/// `--json` 出力。イベント情報が無ければ `null`
pub fn event_json(record: Option<&EventRecord>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&record)
}

/// OCRテキストを字下げして表示
pub fn indent(text: &str) -> String {
    text.lines()
        .map(|line| format!("  {}", line))
        .collect::<Vec<_>>()
        .join("\n")
}

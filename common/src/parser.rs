//! 抽出サービス応答パーサー
//!
//! 行頭付近に `Date:` / `Time:` / `Location:` / `Description:` を持つ
//! 自由形式テキストから EventRecord を組み立てる。
//! パースエラーは存在しない（マーカーが無ければ既定値のまま）。

use crate::types::{EventField, EventRecord};

/// 場所が無いことを示す応答上の値
pub const LOCATION_NOT_PROVIDED: &str = "Not provided";

/// パース結果（一致したマーカーの情報付き）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedEvent {
    pub record: EventRecord,
    /// 一致したマーカー（行順、重複あり）
    pub matched: Vec<EventField>,
}

impl ParsedEvent {
    /// マーカーが一つも見つからなかったか
    pub fn is_empty_match(&self) -> bool {
        self.matched.is_empty()
    }

    pub fn matched_field(&self, field: EventField) -> bool {
        self.matched.contains(&field)
    }
}

/// 応答テキストをイベント情報に変換
///
/// # Examples
/// ```
/// use event_scan_common::parse_event_response;
///
/// let record = parse_event_response("Date: 2024-05-01\nLocation: Not provided");
/// assert_eq!(record.date, "2024-05-01");
/// assert_eq!(record.location, None);
/// ```
pub fn parse_event_response(response: &str) -> EventRecord {
    parse_event_response_detailed(response).record
}

/// 応答テキストをパースし、一致したマーカーも返す
pub fn parse_event_response_detailed(response: &str) -> ParsedEvent {
    let mut parsed = ParsedEvent::default();

    for line in response.split('\n') {
        let Some((field, value)) = match_line(line) else {
            continue;
        };

        let record = &mut parsed.record;
        match field {
            EventField::Date => record.date = value.to_string(),
            EventField::Time => record.time = value.to_string(),
            EventField::Location => {
                record.location = (value != LOCATION_NOT_PROVIDED).then(|| value.to_string());
            }
            EventField::Description => record.description = value.to_string(),
        }
        parsed.matched.push(field);
    }

    parsed
}

/// 行に含まれる最初の（判定順で先頭の）マーカーと、その値
///
/// 値は同じマーカーが再び現れる位置までを取る。
fn match_line(line: &str) -> Option<(EventField, &str)> {
    EventField::ALL.iter().find_map(|field| {
        line.split(field.marker())
            .nth(1)
            .map(|value| (*field, value.trim()))
    })
}

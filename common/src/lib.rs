//! Event Scan Common Library
//!
//! CLIとWeb(WASM)で共有される型とユーティリティ

pub mod types;
pub mod error;
pub mod parser;
pub mod ocr;
pub mod data_url;
pub mod session;
pub mod prompts;

pub use types::{
    EventField, EventRecord, ExtractRequest, ExtractResponse, ErrorResponse, ImagePayload,
    OcrResult, ReadResult, TextBlock, TextLine,
};
pub use error::{Error, Result};
pub use parser::{parse_event_response, parse_event_response_detailed, ParsedEvent};
pub use ocr::{extract_text, flatten_read_result, parse_ocr_response, VisionCredentials};
pub use data_url::{extract_base64_from_data_url, extract_mime_type_from_data_url};
pub use session::{AnalysisSlots, AnalysisTicket};
pub use prompts::{build_extraction_prompt, strip_final_response};

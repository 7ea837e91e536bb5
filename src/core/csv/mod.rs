//! CSV codec for lead import and export
//!
//! The decode side is deliberately tolerant: header names go through an alias
//! table and each line is tokenised on its own. Lines are split before any
//! quote handling, so a quoted value cannot span lines.

pub mod decode;
pub mod encode;
pub mod headers;
pub mod tokenizer;

pub use decode::{parse_budget, CsvDocument, DecodedRow, LeadDraft, RowRejection};
pub use encode::{encode_lead, encode_leads, EXPORT_HEADERS};
pub use headers::{normalize_header, resolve_header, CanonicalField, HeaderMapping};
pub use tokenizer::split_record;

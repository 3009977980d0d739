//! Graph ingestion, degree annotation and visual-encoding core. Free of any
//! browser types so the whole pipeline tests natively.

pub mod dataset;
pub mod degree;
pub mod encoding;
pub mod ingest;
pub mod sample;

pub use dataset::{Dataset, DatasetSummary, Endpoint, GraphEdge, GraphNode};
pub use degree::{DegreeTable, compute_degrees};
pub use encoding::{Guideline, GuidelineSet, NodeStyle, Variant, encode};
pub use ingest::{Format, FormatError, ingest};
pub use sample::{SAMPLE_LABEL, sample_graph};

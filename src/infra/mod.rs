pub mod csv_store;
pub mod json_output_adapter;
pub mod text_output_adapter;

pub use csv_store::CsvDatasetStore;
pub use json_output_adapter::JsonDatasetWriter;
pub use text_output_adapter::TextFileWriter;

pub mod dialect;
pub mod emit;
pub mod generate;
pub mod options;

// Re-export main types
pub use dialect::{create_dialect, AliasPolicy, Dialect};
pub use emit::emit;
pub use generate::{
    generate, generate_all, generate_css, generate_js, generate_scss, generate_tailwind,
};
pub use options::{AliasMode, ExportFormat, ExportOptions};

//! Factory Method over a closed set of document kinds.
//!
//! Each kind has its own product type; [`DocumentCreator`] and
//! [`create_document`] dispatch on the [`DocumentKind`] tag and hand back a
//! [`Document`] that can be opened.

use std::fmt;
use std::str::FromStr;

use colored::Colorize;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::DemoError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Word,
    Pdf,
    Excel,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 3] = [DocumentKind::Word, DocumentKind::Pdf, DocumentKind::Excel];

    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::Word => "Word",
            DocumentKind::Pdf => "PDF",
            DocumentKind::Excel => "Excel",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DocumentKind {
    type Err = DemoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "word" => Ok(DocumentKind::Word),
            "pdf" => Ok(DocumentKind::Pdf),
            "excel" => Ok(DocumentKind::Excel),
            _ => Err(DemoError::UnknownDocumentKind(s.to_string())),
        }
    }
}

// =============================================================================
// Concrete products
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordDocument;

impl WordDocument {
    pub fn open(&self) -> &'static str {
        "Opening Word document."
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PdfDocument;

impl PdfDocument {
    pub fn open(&self) -> &'static str {
        "Opening PDF document."
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExcelDocument;

impl ExcelDocument {
    pub fn open(&self) -> &'static str {
        "Opening Excel document."
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Document {
    Word(WordDocument),
    Pdf(PdfDocument),
    Excel(ExcelDocument),
}

impl Document {
    pub fn kind(&self) -> DocumentKind {
        match self {
            Document::Word(_) => DocumentKind::Word,
            Document::Pdf(_) => DocumentKind::Pdf,
            Document::Excel(_) => DocumentKind::Excel,
        }
    }

    pub fn open(&self) -> &'static str {
        match self {
            Document::Word(doc) => doc.open(),
            Document::Pdf(doc) => doc.open(),
            Document::Excel(doc) => doc.open(),
        }
    }
}

// =============================================================================
// Creators
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentCreator {
    kind: DocumentKind,
}

impl DocumentCreator {
    pub fn new(kind: DocumentKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    pub fn create(&self) -> Document {
        debug!(kind = %self.kind, "creating document");
        create_document(self.kind)
    }
}

pub fn create_document(kind: DocumentKind) -> Document {
    match kind {
        DocumentKind::Word => Document::Word(WordDocument),
        DocumentKind::Pdf => Document::Pdf(PdfDocument),
        DocumentKind::Excel => Document::Excel(ExcelDocument),
    }
}

pub fn render_report(kinds: &[DocumentKind]) -> String {
    let mut out = format!("{}\n", "📄 Factory Method: opening documents".bold().cyan());
    for &kind in kinds {
        let document = DocumentCreator::new(kind).create();
        out.push_str(document.open());
        out.push('\n');
    }
    out
}

//! Entity-relationship diagram of the live schema.
//!
//! `render_dot` emits Graphviz DOT; `write_png` hands it to the `dot`
//! executable. Graphviz is a developer-machine dependency only.

use std::fmt::Write as _;
use std::path::Path;
use std::process::Stdio;

use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, info};

use crate::error::{SchemaError, SchemaResult};
use crate::schema::TableInfo;

/// Render tables as a DOT digraph: one record node per table, one edge per
/// foreign key pointing from child to parent, labelled with the column.
pub fn render_dot(tables: &[TableInfo]) -> String {
    let mut out = String::new();
    out.push_str("digraph schema {\n");
    out.push_str("    graph [rankdir=LR];\n");
    out.push_str("    node [shape=record, fontname=\"Helvetica\", fontsize=10];\n");
    out.push_str("    edge [fontname=\"Helvetica\", fontsize=9, arrowhead=crow, arrowtail=none];\n");

    for table in tables {
        let mut fields = vec![escape_record(&table.name)];
        for column in &table.columns {
            let mut field = format!("{} : {}", column.name, column.data_type);
            if column.primary_key > 0 {
                field.push_str(" (PK)");
            } else if column.not_null {
                field.push_str(" NOT NULL");
            }
            fields.push(format!("{}\\l", escape_record(&field)));
        }
        let _ = writeln!(
            out,
            "    \"{}\" [label=\"{{{}}}\"];",
            escape_id(&table.name),
            fields.join("|")
        );
    }

    for table in tables {
        for fk in &table.foreign_keys {
            let _ = writeln!(
                out,
                "    \"{}\" -> \"{}\" [label=\"{} ({})\"];",
                escape_id(&table.name),
                escape_id(&fk.references_table),
                escape_id(&fk.column),
                escape_id(&fk.on_delete.to_lowercase()),
            );
        }
    }

    out.push_str("}\n");
    out
}

/// Pipe `dot_source` through `dot -Tpng` into `path`
pub async fn write_png(dot_source: &str, path: &Path) -> SchemaResult<()> {
    debug!(path = %path.display(), "Running graphviz");

    let mut child = Command::new("dot")
        .arg("-Tpng")
        .arg("-o")
        .arg(path)
        .stdin(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| SchemaError::Diagram(format!("failed to run `dot`: {}", e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(dot_source.as_bytes()).await?;
        // Close stdin so dot sees EOF
        drop(stdin);
    }

    let output = child.wait_with_output().await?;
    if !output.status.success() {
        return Err(SchemaError::Diagram(format!(
            "dot exited with {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }

    info!(path = %path.display(), "Diagram written");
    Ok(())
}

/// Escape text placed inside a record label
fn escape_record(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(ch, '{' | '}' | '|' | '<' | '>' | '"' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// Escape text placed inside a quoted DOT id
fn escape_id(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

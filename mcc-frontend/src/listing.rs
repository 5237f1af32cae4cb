//! Declaration and type listings
//!
//! Plain-text reports over a parsed (and, for types, analyzed) program,
//! one line per entry.

use crate::ast::StatementKind;
use crate::symbols::Program;
use mcc_common::CompilerError;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// One line per declared identifier, in declaration order
pub fn write_declarations<W: Write>(program: &Program, out: &mut W) -> std::io::Result<()> {
    for entry in &program.declarations {
        writeln!(
            out,
            "File {} Line {}: {} {}",
            entry.location.filename, entry.location.line, entry.kind, entry.name
        )?;
    }
    Ok(())
}

/// One line per top-level expression statement of each function body.
///
/// This is intentionally narrower than a line per statement: `return`,
/// control-flow statements and local declarations produce no line.
pub fn write_expression_types<W: Write>(program: &Program, out: &mut W) -> std::io::Result<()> {
    for function in &program.functions {
        for statement in &function.body.statements {
            if let StatementKind::Expression(expr) = &statement.kind {
                let location = &expr.token.location;
                let suffix = if expr.is_array { "[]" } else { "" };
                writeln!(
                    out,
                    "File {} Line {}: expression has type {}{}",
                    location.filename,
                    location.line,
                    expr.derived_type(),
                    suffix
                )?;
            }
        }
    }
    Ok(())
}

pub fn declarations_to_path(program: &Program, path: &Path) -> Result<(), CompilerError> {
    to_path(path, |out| write_declarations(program, out))
}

pub fn expression_types_to_path(program: &Program, path: &Path) -> Result<(), CompilerError> {
    to_path(path, |out| write_expression_types(program, out))
}

fn to_path<F>(path: &Path, write: F) -> Result<(), CompilerError>
where
    F: FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
{
    let output_error = |err: std::io::Error| CompilerError::OutputError {
        path: path.display().to_string(),
        message: err.to_string(),
    };

    let file = File::create(path).map_err(output_error)?;
    let mut out = BufWriter::new(file);
    write(&mut out).map_err(output_error)?;
    out.flush().map_err(output_error)?;

    log::info!("wrote {}", path.display());
    Ok(())
}

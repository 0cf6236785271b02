use crate::domain::models::JsonOut;
use serde::Serialize;
use std::io::Write;

pub fn print_out<T: Serialize>(
    out: &mut impl Write,
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        writeln!(
            out,
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        )?;
    } else {
        for d in data {
            writeln!(out, "{}", row(d))?;
        }
    }
    Ok(())
}

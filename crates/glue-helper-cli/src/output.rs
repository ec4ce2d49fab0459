use std::io::Write;

/// Writes one table name per line.
pub(crate) fn write_table_names<W: Write + ?Sized>(
    out: &mut W,
    names: &[String],
) -> std::io::Result<()> {
    for name in names {
        writeln!(out, "{name}")?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_table_names() {
        let mut out = Vec::new();
        write_table_names(&mut out, &["x".to_string(), "y".to_string()]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "x\ny\n");
    }

    #[test]
    fn test_write_no_table_names() {
        let mut out = Vec::new();
        write_table_names(&mut out, &[]).unwrap();
        assert!(out.is_empty());
    }
}

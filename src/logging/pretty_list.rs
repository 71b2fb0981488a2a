use std::fmt;

/// Displays a slice as a markdown-style list, one entry per line, so long
/// lists of extension or layer names stay readable in multiline logs.
pub struct PrettyList<'data, T>(pub &'data [T]);

impl<'data, T> fmt::Display for PrettyList<'data, T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("(none)");
        }
        for entry in self.0 {
            write!(f, "\n- {}", entry)?;
        }
        Ok(())
    }
}

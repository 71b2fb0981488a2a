use std::fmt::{self, Write};

/// Size of the buffer formatted names are rendered into, including the nul
/// terminator handed to the driver. Longer names are silently truncated.
pub const NAME_CAPACITY: usize = 1024;

/// Render the arguments into at most `NAME_CAPACITY - 1` bytes.
pub(super) fn render(args: fmt::Arguments<'_>) -> String {
    let mut writer = BoundedWriter {
        rendered: String::new(),
        remaining: NAME_CAPACITY - 1,
    };

    // an error only means the buffer filled up
    let _ = writer.write_fmt(args);

    writer.rendered
}

struct BoundedWriter {
    rendered: String,
    remaining: usize,
}

impl Write for BoundedWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if s.len() <= self.remaining {
            self.rendered.push_str(s);
            self.remaining -= s.len();
            return Ok(());
        }

        let mut end = self.remaining;
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        self.rendered.push_str(&s[..end]);
        self.remaining = 0;
        Err(fmt::Error)
    }
}
